use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use winit::dpi::PhysicalPosition;
use winit::event::{DeviceId, ElementState, MouseButton, WindowEvent};

/// Stable identifier of one pointer device.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(u64);

impl PointerId {
    pub fn from_device(device: DeviceId) -> Self {
        let mut hasher = DefaultHasher::new();
        device.hash(&mut hasher);

        Self(hasher.finish())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Click {
    pub pointer: PointerId,
    pub button: MouseButton,
    pub position: PhysicalPosition<f64>,
}

#[derive(Debug, Default)]
struct PointerState {
    position: PhysicalPosition<f64>,
    pressed: HashSet<MouseButton>,
}

pub type ClickHandler = Box<dyn FnMut(&Click)>;

/// Input source for the window. Tracks every pointer device that reported
/// an event and turns press/release pairs into clicks.
#[derive(Default)]
pub struct InputContext {
    pointers: HashMap<PointerId, PointerState>,
    click_handlers: Vec<ClickHandler>,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` on all pointers, including ones not seen yet.
    pub fn on_click(&mut self, handler: impl FnMut(&Click) + 'static) {
        self.click_handlers.push(Box::new(handler));
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved {
                device_id,
                position,
            } => self.pointer_moved(PointerId::from_device(*device_id), *position),
            WindowEvent::MouseInput {
                device_id,
                state,
                button,
            } => self.pointer_button(PointerId::from_device(*device_id), *button, *state),
            _ => {}
        }
    }

    pub fn pointer_moved(&mut self, pointer: PointerId, position: PhysicalPosition<f64>) {
        self.pointers.entry(pointer).or_default().position = position;
    }

    pub fn pointer_button(&mut self, pointer: PointerId, button: MouseButton, state: ElementState) {
        let entry = self.pointers.entry(pointer).or_default();

        match state {
            ElementState::Pressed => {
                entry.pressed.insert(button);
            }
            ElementState::Released => {
                if entry.pressed.remove(&button) {
                    let click = Click {
                        pointer,
                        button,
                        position: entry.position,
                    };

                    for handler in &mut self.click_handlers {
                        handler(&click);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording() -> (InputContext, Rc<RefCell<Vec<Click>>>) {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let mut input = InputContext::new();

        let sink = Rc::clone(&clicks);
        input.on_click(move |click| sink.borrow_mut().push(*click));

        (input, clicks)
    }

    #[test]
    fn press_then_release_is_one_click() {
        let (mut input, clicks) = recording();
        let mouse = PointerId(1);

        input.pointer_moved(mouse, PhysicalPosition::new(10.0, 20.0));
        input.pointer_button(mouse, MouseButton::Left, ElementState::Pressed);
        assert!(clicks.borrow().is_empty());

        input.pointer_button(mouse, MouseButton::Left, ElementState::Released);

        assert_eq!(
            *clicks.borrow(),
            vec![Click {
                pointer: mouse,
                button: MouseButton::Left,
                position: PhysicalPosition::new(10.0, 20.0),
            }]
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let (mut input, clicks) = recording();

        input.pointer_button(PointerId(1), MouseButton::Left, ElementState::Released);

        assert!(clicks.borrow().is_empty());
    }

    #[test]
    fn repeated_release_clicks_once() {
        let (mut input, clicks) = recording();
        let mouse = PointerId(1);

        input.pointer_button(mouse, MouseButton::Right, ElementState::Pressed);
        input.pointer_button(mouse, MouseButton::Right, ElementState::Released);
        input.pointer_button(mouse, MouseButton::Right, ElementState::Released);

        assert_eq!(clicks.borrow().len(), 1);
    }

    #[test]
    fn buttons_are_tracked_per_pointer() {
        let (mut input, clicks) = recording();
        let first = PointerId(1);
        let second = PointerId(2);

        input.pointer_button(first, MouseButton::Left, ElementState::Pressed);
        input.pointer_button(second, MouseButton::Left, ElementState::Released);
        assert!(clicks.borrow().is_empty());

        input.pointer_button(first, MouseButton::Left, ElementState::Released);
        assert_eq!(clicks.borrow().len(), 1);
        assert_eq!(clicks.borrow()[0].pointer, first);
    }

    #[test]
    fn every_handler_sees_every_click() {
        let (mut input, clicks) = recording();
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        input.on_click(move |_| *counter.borrow_mut() += 1);

        let mouse = PointerId(7);
        for _ in 0..3 {
            input.pointer_button(mouse, MouseButton::Middle, ElementState::Pressed);
            input.pointer_button(mouse, MouseButton::Middle, ElementState::Released);
        }

        assert_eq!(clicks.borrow().len(), 3);
        assert_eq!(*count.borrow(), 3);
    }
}
