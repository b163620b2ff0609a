use std::sync::Arc;

use egui_glow::glow;
use egui_glow::EguiGlow;

use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

/// Immediate-mode GUI overlay painted on top of the scene.
///
/// Per frame: `update` (no GPU), then `frame` to build the widgets, then
/// `render` to submit them.
pub struct GuiController {
    egui: EguiGlow,
}

impl GuiController {
    pub fn new(event_loop: &ActiveEventLoop, window: &Window, gl: Arc<glow::Context>) -> Self {
        let egui = EguiGlow::new(
            event_loop,
            gl,
            None,
            Some(window.scale_factor() as f32),
            true,
        );

        Self { egui }
    }

    /// Feeds `event` to the overlay. Events the overlay uses are still
    /// passed on, pointer clicks are reported wherever they land.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        self.egui.on_window_event(window, event);
    }

    pub fn update(&mut self, dt: f32) {
        self.egui.egui_winit.egui_input_mut().predicted_dt = dt;
    }

    pub fn frame(&mut self, window: &Window, run_ui: impl FnMut(&egui::Context)) {
        self.egui.run(window, run_ui);
    }

    pub fn render(&mut self, window: &Window) {
        self.egui.paint(window);
    }
}

impl Drop for GuiController {
    fn drop(&mut self) {
        self.egui.destroy();
    }
}

/// Draws the "hello" button. True on the frame it was clicked.
pub fn hello_button(ctx: &egui::Context) -> bool {
    egui::Area::new(egui::Id::new("hello"))
        .fixed_pos(egui::pos2(8.0, 8.0))
        .show(ctx, |ui| ui.button("hello").clicked())
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect};

    fn click_at(pos: Pos2) -> Vec<Event> {
        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        };

        vec![Event::PointerMoved(pos), button(true), button(false)]
    }

    fn run_frame(ctx: &egui::Context, events: Vec<Event>) -> bool {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1280.0, 720.0))),
            events,
            ..Default::default()
        };

        let mut clicked = false;
        let _ = ctx.run(input, |ctx| clicked = hello_button(ctx));

        clicked
    }

    #[test]
    fn click_on_button_reports_once() {
        let ctx = egui::Context::default();

        for _ in 0..3 {
            assert!(!run_frame(&ctx, Vec::new()));
        }

        assert!(run_frame(&ctx, click_at(egui::pos2(14.0, 14.0))));
        assert!(!run_frame(&ctx, Vec::new()));
        assert!(!run_frame(&ctx, Vec::new()));
    }

    #[test]
    fn click_elsewhere_is_ignored() {
        let ctx = egui::Context::default();

        for _ in 0..3 {
            run_frame(&ctx, Vec::new());
        }

        assert!(!run_frame(&ctx, click_at(egui::pos2(600.0, 400.0))));
        assert!(!run_frame(&ctx, Vec::new()));
    }
}
