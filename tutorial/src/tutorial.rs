use winit::event::WindowEvent;
use winit::window::Window;

use gl_wrapper::geometry::Geometry;
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

use crate::app::AppError;
use crate::args::BufferMode;
use crate::gui::{hello_button, GuiController};
use crate::input::InputContext;
use crate::lifecycle::{Lifecycle, LoadContext, RenderContext};
use crate::shaders;
use crate::triangle;

/// One colored triangle under a single "hello" button.
pub struct Tutorial {
    buffers: BufferMode,
    renderer: GlRenderer,
    input: Option<InputContext>,
    geometry: Option<Geometry>,
    program: Option<Program>,
    gui: Option<GuiController>,
}

impl Tutorial {
    pub fn new(buffers: BufferMode) -> Self {
        Self {
            buffers,
            renderer: GlRenderer::new(),
            input: None,
            geometry: None,
            program: None,
            gui: None,
        }
    }

    fn draw_triangle(&mut self) -> Result<(), AppError> {
        let Some(program) = &self.program else {
            return Ok(());
        };

        match &self.geometry {
            Some(geometry) => self.renderer.draw(geometry, program),
            None => {
                let geometry = triangle::geometry()?;
                self.renderer.draw(&geometry, program);
            }
        }

        Ok(())
    }
}

impl Lifecycle for Tutorial {
    fn on_load(&mut self, ctx: LoadContext) -> Result<(), AppError> {
        let mut input = InputContext::new();
        input.on_click(|click| {
            log::info!("I Clicked!");
            log::debug!(
                "{:?} button of {:?} at {:?}",
                click.button,
                click.pointer,
                click.position
            );
        });
        self.input = Some(input);

        self.gui = Some(GuiController::new(ctx.event_loop, ctx.window, ctx.glow));

        self.renderer.set_clear_color(triangle::CLEAR_COLOR);

        self.program = match ProgramBuilder::new(shaders::VERTEX, shaders::FRAGMENT).build() {
            Ok(program) => Some(program),
            Err(e) => {
                log::error!("Error linking shader {e}");
                None
            }
        };

        if self.buffers == BufferMode::Persistent {
            self.geometry = Some(triangle::geometry()?);
        }

        log::debug!("loaded with {:?} buffers", self.buffers);

        Ok(())
    }

    fn on_update(&mut self, dt: f64) {
        if let Some(gui) = &mut self.gui {
            gui.update(dt as f32);
        }
    }

    fn on_render(&mut self, ctx: RenderContext, _dt: f64) -> Result<(), AppError> {
        let size = ctx.window.inner_size();
        self.renderer.begin_frame(size.width, size.height);
        self.renderer.clear();

        self.draw_triangle()?;

        if let Some(gui) = &mut self.gui {
            let mut pressed = false;
            gui.frame(ctx.window, |egui_ctx| pressed = hello_button(egui_ctx));

            if pressed {
                log::info!("I Am Pressed!");
            }

            gui.render(ctx.window);
        }

        Ok(())
    }

    fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        if let Some(gui) = &mut self.gui {
            gui.on_window_event(window, event);
        }

        // clicks are reported wherever they land, over the overlay or not
        if let Some(input) = &mut self.input {
            input.handle_window_event(event);
        }
    }
}
