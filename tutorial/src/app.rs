use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::{HandleError, HasWindowHandle};

use std::ffi::CString;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use egui_glow::glow;

use thiserror::Error;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::error::EventLoopError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use gl_wrapper::geometry::GBError;

use crate::clock::FrameClock;
use crate::lifecycle::{Lifecycle, LoadContext, RenderContext};

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub size: PhysicalSize<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Silk Tutorial".to_string(),
            size: PhysicalSize::new(1280, 720),
        }
    }
}

/// Owns the window and GL context and drives a [`Lifecycle`] from the
/// winit event loop: load once, then update and render every frame.
pub struct App<L: Lifecycle> {
    config: WindowConfig,
    // dropped before the context, its GPU objects need it current
    lifecycle: L,
    gl: Option<GlState>,
    clock: FrameClock,
    error: Option<AppError>,
}

impl<L: Lifecycle> App<L> {
    pub fn new(config: WindowConfig, lifecycle: L) -> Self {
        Self {
            config,
            lifecycle,
            gl: None,
            clock: FrameClock::default(),
            error: None,
        }
    }

    /// Blocks until the window is closed.
    pub fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;

        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn load(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let (state, glow) = GlState::new(event_loop, &self.config)?;
        let gl = self.gl.insert(state);

        log::debug!("GL context ready, loading");

        self.lifecycle.on_load(LoadContext {
            event_loop,
            window: &gl.gl_window.window,
            glow,
        })
    }

    fn frame(&mut self) -> Result<(), AppError> {
        let Some(gl) = &self.gl else {
            return Ok(());
        };

        let dt = self.clock.tick(Instant::now());

        self.lifecycle.on_update(dt);
        self.lifecycle.on_render(
            RenderContext {
                window: &gl.gl_window.window,
            },
            dt,
        )?;

        gl.gl_window.surface.swap_buffers(&gl.gl_context)?;

        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        self.error.get_or_insert(error);
        event_loop.exit();
    }
}

impl<L: Lifecycle> ApplicationHandler for App<L> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl.is_some() {
            return;
        }

        if let Err(e) = self.load(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        if let Some(gl) = &self.gl {
            gl.gl_window.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gl) = &self.gl else {
            return;
        };

        self.lifecycle.on_window_event(&gl.gl_window.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                {
                    gl.gl_window.surface.resize(&gl.gl_context, width, height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.frame() {
                    self.fail(event_loop, e);
                }
            }
            _ => (),
        }
    }
}

struct GlState {
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
}

impl GlState {
    fn new(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<(Self, Arc<glow::Context>), AppError> {
        let window_attributes = Window::default_attributes()
            .with_inner_size(config.size)
            .with_title(config.title.as_str());
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(event_loop, template, |mut configs| {
                // an empty config set is returned as an error before picking
                configs.next().expect("display reported no configs")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or_else(|| AppError::Display("no window created".to_string()))?;
        let handle = window.window_handle()?.as_raw();
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| {
            CString::new(s)
                .map(|s| gl_display.get_proc_address(&s))
                .unwrap_or(std::ptr::null())
        });

        let glow = unsafe {
            glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s))
        };

        if let Err(e) = gl_window
            .surface
            .set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            log::warn!("could not enable vsync: {e}");
        }

        let state = Self {
            gl_context,
            gl_window,
        };

        Ok((state, Arc::new(glow)))
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.window_handle()?.as_raw();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create window: {0}")]
    Display(String),
    #[error("window handle unavailable: {0}")]
    Handle(#[from] HandleError),
    #[error("OpenGL context error: {0}")]
    Gl(#[from] glutin::error::Error),
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GBError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window() {
        let config = WindowConfig::default();

        assert_eq!(config.title, "Silk Tutorial");
        assert_eq!(config.size, PhysicalSize::new(1280, 720));
    }

    #[test]
    fn geometry_errors_convert() {
        let err: AppError = GBError::NoStreams.into();

        assert_eq!(
            err.to_string(),
            "invalid geometry: Geometry needs at least one attribute stream"
        );
    }
}
