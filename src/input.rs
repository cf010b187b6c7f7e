use cgmath::Vector2;
use physics::Command;
use winit::event::{
    ElementState, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Command(Command),
    Quit,
}

/// Turns window events into simulation commands aimed at the last known
/// cursor position.
pub struct Pointer {
    position: Vector2<f64>,
}
impl Default for Pointer {
    fn default() -> Self {
        Self {
            position: Vector2::new(0.0, 0.0),
        }
    }
}
impl Pointer {
    pub fn translate(&mut self, event: &WindowEvent<'_>) -> Option<Action> {
        match event {
            WindowEvent::CloseRequested => Some(Action::Quit),
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Vector2::new(position.x, position.y);
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => button_command(*button, self.position).map(Action::Command),
            WindowEvent::MouseWheel { delta, .. } => {
                scroll_command(*delta, self.position).map(Action::Command)
            }
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        virtual_keycode: Some(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => key_action(*key),
            _ => None,
        }
    }
}

pub fn button_command(button: MouseButton, at: Vector2<f64>) -> Option<Command> {
    match button {
        MouseButton::Left => Some(Command::Spawn(at)),
        MouseButton::Right => Some(Command::Delete(at)),
        _ => None,
    }
}

/// Scrolling away from the user grows, towards the user shrinks.
pub fn scroll_command(delta: MouseScrollDelta, at: Vector2<f64>) -> Option<Command> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(pos) => pos.y,
    };
    if y > 0.0 {
        Some(Command::Grow(at))
    } else if y < 0.0 {
        Some(Command::Shrink(at))
    } else {
        None
    }
}

pub fn key_action(key: VirtualKeyCode) -> Option<Action> {
    match key {
        VirtualKeyCode::Space => Some(Action::Command(Command::Clear)),
        VirtualKeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    const AT: Vector2<f64> = Vector2 { x: 100.0, y: 200.0 };

    #[test]
    fn buttons() {
        assert_eq!(button_command(MouseButton::Left, AT), Some(Command::Spawn(AT)));
        assert_eq!(button_command(MouseButton::Right, AT), Some(Command::Delete(AT)));
        assert_eq!(button_command(MouseButton::Middle, AT), None);
    }

    #[test]
    fn scroll_direction_picks_grow_or_shrink() {
        assert_eq!(
            scroll_command(MouseScrollDelta::LineDelta(0.0, 1.0), AT),
            Some(Command::Grow(AT))
        );
        assert_eq!(
            scroll_command(MouseScrollDelta::LineDelta(0.0, -3.0), AT),
            Some(Command::Shrink(AT))
        );
        assert_eq!(
            scroll_command(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.5)), AT),
            Some(Command::Grow(AT))
        );
        assert_eq!(scroll_command(MouseScrollDelta::LineDelta(2.0, 0.0), AT), None);
    }

    #[test]
    fn keys() {
        assert_eq!(key_action(VirtualKeyCode::Space), Some(Action::Command(Command::Clear)));
        assert_eq!(key_action(VirtualKeyCode::Escape), Some(Action::Quit));
        assert_eq!(key_action(VirtualKeyCode::A), None);
    }

    #[test]
    fn close_requested_quits() {
        let mut pointer = Pointer::default();
        assert_eq!(pointer.translate(&WindowEvent::CloseRequested), Some(Action::Quit));
    }
}
