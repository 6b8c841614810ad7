use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec4, vec2};
use winit::event::MouseButton;

use crate::layout::{Insets, LayoutData, Rect};
use crate::renderer::{PanelSkin, Renderer};
use crate::style::tokens::{Colour, Typography};
use crate::windowing::events::EventKind;

use super::base::{Widget, WidgetKind};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonTextColor {
    pub idle: Vec4,
    pub hover: Vec4,
    pub pressed: Vec4,
    pub disabled: Vec4,
}

impl Default for ButtonTextColor {
    fn default() -> Self {
        Self {
            idle: Vec4::ONE,
            hover: Vec4::ONE,
            pressed: Vec4::ONE,
            disabled: Vec4::from(Colour::GRAY),
        }
    }
}

/// One background per visual state.
pub struct ButtonSkin {
    pub idle: PanelSkin,
    pub hover: PanelSkin,
    pub pressed: PanelSkin,
    pub disabled: PanelSkin,
}

impl Default for ButtonSkin {
    fn default() -> Self {
        Self {
            idle: PanelSkin::flat(Colour::PANEL),
            hover: PanelSkin::flat(Colour::PANEL),
            pressed: PanelSkin::flat(Colour::PANEL),
            disabled: PanelSkin::flat(Colour::PANEL),
        }
    }
}

/// Button options. Defaults: empty caption, caption-sized white text over
/// flat panels, no text padding.
pub struct ButtonConfig {
    pub label: String,
    pub text_color: ButtonTextColor,
    pub text_size: f32,
    /// Insets applied to the bounds before centering the caption.
    pub text_padding: Insets,
    pub skin: ButtonSkin,
    pub data: LayoutData,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            text_color: ButtonTextColor::default(),
            text_size: Typography::CAPTION,
            text_padding: Insets::default(),
            skin: ButtonSkin::default(),
            data: LayoutData::default(),
        }
    }
}

pub struct Button {
    config: ButtonConfig,
    hovered: bool,
    pressed: bool,
    disabled: bool,
    on_press: Rc<RefCell<dyn FnMut()>>,
    rect: Rect,
}

impl Button {
    pub fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            hovered: false,
            pressed: false,
            disabled: false,
            on_press: Rc::new(RefCell::new(|| {})),
            rect: Rect::new(Vec2::ZERO, Vec2::ZERO),
        }
    }

    /// Activation hook, fired on release inside the bounds.
    pub fn on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Rc::new(RefCell::new(f));
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn text_padding(&self) -> Insets {
        self.config.text_padding
    }

    fn skin(&self) -> &PanelSkin {
        if self.disabled {
            &self.config.skin.disabled
        } else if self.pressed {
            &self.config.skin.pressed
        } else if self.hovered {
            &self.config.skin.hover
        } else {
            &self.config.skin.idle
        }
    }

    fn text_color(&self) -> Vec4 {
        if self.disabled {
            self.config.text_color.disabled
        } else if self.pressed {
            self.config.text_color.pressed
        } else if self.hovered {
            self.config.text_color.hover
        } else {
            self.config.text_color.idle
        }
    }
}

impl Widget for Button {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Button
    }

    fn layout_data(&self) -> &LayoutData {
        &self.config.data
    }

    fn measure(&self) -> Vec2 {
        vec2(
            self.config.label.chars().count() as f32 * self.config.text_size * 0.6
                + self.config.text_padding.horizontal(),
            self.config.text_size * Typography::LEADING + self.config.text_padding.vertical(),
        )
    }

    fn arrange(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn event(&mut self, ev: &EventKind) {
        match *ev {
            EventKind::PointerMove { pos } => self.hovered = self.rect.contains(pos),
            EventKind::PointerLeave => {
                self.hovered = false;
                self.pressed = false;
            }
            EventKind::PointerDown {
                button: MouseButton::Left,
                pos,
            } if self.rect.contains(pos) && !self.disabled => {
                self.pressed = true;
            }
            EventKind::PointerUp {
                button: MouseButton::Left,
                pos,
            } => {
                if self.pressed && self.rect.contains(pos) && !self.disabled {
                    (self.on_press.borrow_mut())();
                }
                self.pressed = false;
            }
            _ => {}
        }
    }

    fn paint(&mut self, ren: &mut Renderer) {
        self.skin().draw(ren, self.rect);

        let text_area = self.rect.shrink(self.config.text_padding);
        let text_size = vec2(
            self.config.label.chars().count() as f32 * self.config.text_size * 0.6,
            self.config.text_size * Typography::LEADING,
        );
        let pos = text_area.center() - text_size * 0.5;
        ren.draw_text(&self.config.label, pos, self.text_color(), self.config.text_size);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use std::cell::Cell;

    fn arranged_button(fired: Rc<Cell<u32>>) -> Button {
        let mut b = Button::new(ButtonConfig {
            label: "Start Game".to_string(),
            ..Default::default()
        })
        .on_press(move || fired.set(fired.get() + 1));
        b.arrange(Rect::new(vec2(300.0, 570.0), vec2(200.0, 100.0)));
        b
    }

    #[test]
    fn fires_on_release_inside_bounds() {
        let fired = Rc::new(Cell::new(0));
        let mut b = arranged_button(fired.clone());

        b.event(&EventKind::PointerDown {
            button: MouseButton::Left,
            pos: vec2(400.0, 620.0),
        });
        b.event(&EventKind::PointerUp {
            button: MouseButton::Left,
            pos: vec2(400.0, 620.0),
        });
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn release_outside_cancels_the_press() {
        let fired = Rc::new(Cell::new(0));
        let mut b = arranged_button(fired.clone());

        b.event(&EventKind::PointerDown {
            button: MouseButton::Left,
            pos: vec2(400.0, 620.0),
        });
        b.event(&EventKind::PointerUp {
            button: MouseButton::Left,
            pos: vec2(10.0, 10.0),
        });
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn disabled_button_never_fires() {
        let fired = Rc::new(Cell::new(0));
        let mut b = arranged_button(fired.clone());
        b.set_disabled(true);

        b.event(&EventKind::PointerDown {
            button: MouseButton::Left,
            pos: vec2(400.0, 620.0),
        });
        b.event(&EventKind::PointerUp {
            button: MouseButton::Left,
            pos: vec2(400.0, 620.0),
        });
        assert_eq!(fired.get(), 0);
    }
}
