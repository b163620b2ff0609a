use std::sync::Arc;

use egui_glow::glow;

use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::app::AppError;

/// Everything available once the window and its GL context exist.
pub struct LoadContext<'a> {
    pub event_loop: &'a ActiveEventLoop,
    pub window: &'a Window,
    /// Shares the current GL context with painters built on `glow`.
    pub glow: Arc<glow::Context>,
}

pub struct RenderContext<'a> {
    pub window: &'a Window,
}

/// Callbacks invoked by [`crate::app::App`] on the event loop thread.
pub trait Lifecycle {
    /// Runs once, with the GL context current.
    fn on_load(&mut self, ctx: LoadContext) -> Result<(), AppError>;

    /// Runs every tick before rendering. Must not touch the GPU.
    fn on_update(&mut self, dt: f64);

    /// Runs every tick with the GL context current.
    fn on_render(&mut self, ctx: RenderContext, dt: f64) -> Result<(), AppError>;

    fn on_window_event(&mut self, _window: &Window, _event: &WindowEvent) {}
}
