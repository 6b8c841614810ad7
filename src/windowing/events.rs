use glam::{Vec2, vec2};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, ModifiersState};

/// Input events as the widgets see them, already carrying the cursor
/// position and the modifier state at the time of the event.
#[derive(Clone, Debug)]
pub enum EventKind {
    PointerDown { button: MouseButton, pos: Vec2 },
    PointerUp { button: MouseButton, pos: Vec2 },
    PointerMove { pos: Vec2 },
    PointerLeave,
    KeyDown { key: Key, modifiers: ModifiersState },
    CharInput { ch: char },
}

/// Folds winit window events into [`EventKind`]s, tracking the cursor and
/// keyboard modifiers across events that don't carry them.
#[derive(Default)]
pub struct EventTranslator {
    cursor: Vec2,
    modifiers: ModifiersState,
}

impl EventTranslator {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<EventKind> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = vec2(position.x as f32, position.y as f32);
                Some(EventKind::PointerMove { pos: self.cursor })
            }
            WindowEvent::CursorLeft { .. } => Some(EventKind::PointerLeave),
            WindowEvent::MouseInput { state, button, .. } => Some(match state {
                ElementState::Pressed => EventKind::PointerDown {
                    button: *button,
                    pos: self.cursor,
                },
                ElementState::Released => EventKind::PointerUp {
                    button: *button,
                    pos: self.cursor,
                },
            }),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                // Printable input arrives through the key event's text;
                // everything else is routed as a plain key press.
                if !self.modifiers.control_key() {
                    if let Some(text) = &event.text {
                        if let Some(ch) = text.chars().next() {
                            if !ch.is_control() {
                                return Some(EventKind::CharInput { ch });
                            }
                        }
                    }
                }
                Some(EventKind::KeyDown {
                    key: event.logical_key.clone(),
                    modifiers: self.modifiers,
                })
            }
            _ => None,
        }
    }
}
