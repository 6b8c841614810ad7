//! The application shell: which screen owns the frame, and the bits of
//! state that outlive the menu.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::app::{Game, Input};
use crate::menu::{Menu, MenuAssets};
use crate::renderer::Renderer;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Gameshow,
}

pub struct Shell {
    phase: GamePhase,
    frames: u64,
    name: Rc<RefCell<String>>,
    /// Phase changes requested mid-frame land here and are applied at the
    /// top of the next update, so update and draw always agree within a
    /// frame.
    pending: Rc<Cell<Option<GamePhase>>>,
    menu: Menu,
}

impl Shell {
    pub fn new(ren: &Renderer) -> anyhow::Result<Self> {
        Ok(Self::with_assets(&MenuAssets::load(ren)))
    }

    pub fn with_assets(assets: &MenuAssets) -> Self {
        let pending: Rc<Cell<Option<GamePhase>>> = Rc::default();
        let request = pending.clone();
        let menu = Menu::build(assets, move || {
            request.set(Some(GamePhase::Gameshow));
        });
        Self {
            phase: GamePhase::MainMenu,
            frames: 0,
            name: menu.name_handle(),
            pending,
            menu,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The character name as last entered in the menu.
    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }
}

impl Game for Shell {
    fn update(&mut self, input: &Input) -> anyhow::Result<()> {
        if let Some(next) = self.pending.take() {
            self.phase = next;
        }
        self.frames += 1;

        match self.phase {
            GamePhase::MainMenu => self.menu.update(input.events()),
            GamePhase::Gameshow => {
                // The gameshow itself is an integration point; nothing to
                // advance yet.
            }
        }
        Ok(())
    }

    fn draw(&mut self, ren: &mut Renderer) {
        match self.phase {
            GamePhase::MainMenu => self.menu.draw(ren),
            GamePhase::Gameshow => {}
        }
    }

    fn preferred_size(&self, outer_width: u32, outer_height: u32) -> (u32, u32) {
        (outer_width, outer_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use winit::event::MouseButton;

    use crate::windowing::events::EventKind;

    fn shell() -> Shell {
        Shell::with_assets(&MenuAssets::missing())
    }

    fn click(pos: glam::Vec2) -> [EventKind; 2] {
        [
            EventKind::PointerDown {
                button: MouseButton::Left,
                pos,
            },
            EventKind::PointerUp {
                button: MouseButton::Left,
                pos,
            },
        ]
    }

    #[test]
    fn preferred_size_is_a_passthrough() {
        let s = shell();
        assert_eq!(s.preferred_size(800, 720), (800, 720));
        assert_eq!(s.preferred_size(1, 1), (1, 1));
        assert_eq!(s.preferred_size(2560, 1440), (2560, 1440));
    }

    #[test]
    fn menu_ticks_only_in_the_main_menu() {
        let mut s = shell();
        s.update(&Input::default()).unwrap();
        s.update(&Input::default()).unwrap();
        assert_eq!(s.menu().ticks(), 2);

        s.pending.set(Some(GamePhase::Gameshow));
        s.update(&Input::default()).unwrap();
        s.update(&Input::default()).unwrap();
        assert_eq!(s.phase(), GamePhase::Gameshow);
        assert_eq!(s.menu().ticks(), 2);
        assert_eq!(s.frames(), 4);
    }

    #[test]
    fn start_button_requests_the_gameshow_phase() {
        let mut s = shell();
        // 800x720 window: the button lands at (300,570)..(500,670).
        s.menu_mut().arrange(vec2(800.0, 720.0));

        let mut input = Input::default();
        for ev in click(vec2(400.0, 620.0)) {
            input.push(ev);
        }
        s.update(&input).unwrap();
        // The request is latched; the flip happens at the next frame start.
        assert_eq!(s.phase(), GamePhase::MainMenu);

        s.update(&Input::default()).unwrap();
        assert_eq!(s.phase(), GamePhase::Gameshow);
    }

    #[test]
    fn typed_name_reaches_the_shell() {
        let mut s = shell();
        s.menu_mut().arrange(vec2(800.0, 720.0));

        let mut input = Input::default();
        // Focus the input, then type. The input sits under the label in the
        // padded area's top-left corner.
        input.push(EventKind::PointerDown {
            button: MouseButton::Left,
            pos: vec2(120.0, 100.0),
        });
        for ch in "Zork".chars() {
            input.push(EventKind::CharInput { ch });
        }
        s.update(&input).unwrap();
        assert_eq!(s.name(), "Zork");
    }
}
