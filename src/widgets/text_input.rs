use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use cosmic_text::{Attrs, Metrics, Shaping};
use glam::{Vec2, Vec4, vec2};
use winit::event::MouseButton;
use winit::keyboard::{Key, NamedKey};

use crate::layout::{Insets, LayoutData, Rect};
use crate::renderer::{PanelSkin, Renderer};
use crate::style::tokens::{Colour, Typography};
use crate::windowing::events::EventKind;

use super::base::{Widget, WidgetKind};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputColor {
    pub idle: Vec4,
    pub disabled: Vec4,
    pub caret: Vec4,
    pub disabled_caret: Vec4,
}

impl Default for TextInputColor {
    fn default() -> Self {
        Self {
            idle: Vec4::ONE,
            disabled: Vec4::from(Colour::GRAY),
            caret: Vec4::ONE,
            disabled_caret: Vec4::from(Colour::GRAY),
        }
    }
}

/// Backgrounds for the three visual states.
pub struct TextInputSkin {
    pub idle: PanelSkin,
    pub disabled: PanelSkin,
    /// Shown while the input has focus.
    pub highlight: PanelSkin,
}

impl Default for TextInputSkin {
    fn default() -> Self {
        Self {
            idle: PanelSkin::flat(Colour::PANEL),
            disabled: PanelSkin::flat(Colour::PANEL),
            highlight: PanelSkin::flat(Colour::PANEL),
        }
    }
}

/// Text input options. Defaults: body-sized white text, no padding, flat
/// panel backgrounds.
pub struct TextInputConfig {
    pub text_size: f32,
    /// Space between the bounds and the text run.
    pub padding: Insets,
    pub color: TextInputColor,
    pub skin: TextInputSkin,
    pub data: LayoutData,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            text_size: Typography::BODY,
            padding: Insets::default(),
            color: TextInputColor::default(),
            skin: TextInputSkin::default(),
            data: LayoutData::default(),
        }
    }
}

const BLINK_MS: u128 = 500;

pub struct TextInput {
    config: TextInputConfig,
    value: String,
    /// Caret position in characters.
    caret: usize,
    focused: bool,
    disabled: bool,
    scroll: f32,
    /// Click x waiting to be resolved to a caret position during paint,
    /// when the shaped line is available.
    pending_click: Option<f32>,
    blink: Instant,
    on_change: Option<Rc<RefCell<dyn FnMut(&str)>>>,
    rect: Rect,
}

impl TextInput {
    pub fn new(config: TextInputConfig) -> Self {
        Self {
            config,
            value: String::new(),
            caret: 0,
            focused: false,
            disabled: false,
            scroll: 0.0,
            pending_click: None,
            blink: Instant::now(),
            on_change: None,
            rect: Rect::new(Vec2::ZERO, Vec2::ZERO),
        }
    }

    /// Called with the new value after every edit.
    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Rc::new(RefCell::new(f)));
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn padding(&self) -> Insets {
        self.config.padding
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn byte_at(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn changed(&mut self) {
        self.blink = Instant::now();
        if let Some(cb) = &self.on_change {
            (cb.borrow_mut())(&self.value);
        }
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_at(self.caret);
        self.value.insert(at, ch);
        self.caret += 1;
        self.changed();
    }

    fn paste(&mut self) {
        let text = arboard::Clipboard::new().and_then(|mut cb| cb.get_text());
        match text {
            Ok(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    let at = self.byte_at(self.caret);
                    self.value.insert(at, ch);
                    self.caret += 1;
                }
                self.changed();
            }
            Err(err) => log::warn!("clipboard paste failed: {err}"),
        }
    }

    fn key_down(&mut self, key: &Key, ctrl: bool) {
        match key {
            Key::Named(NamedKey::Backspace) => {
                if self.caret > 0 {
                    let at = self.byte_at(self.caret - 1);
                    self.value.remove(at);
                    self.caret -= 1;
                    self.changed();
                }
            }
            Key::Named(NamedKey::Delete) => {
                if self.caret < self.value.chars().count() {
                    let at = self.byte_at(self.caret);
                    self.value.remove(at);
                    self.changed();
                }
            }
            Key::Named(NamedKey::ArrowLeft) => {
                if self.caret > 0 {
                    self.caret -= 1;
                    self.blink = Instant::now();
                }
            }
            Key::Named(NamedKey::ArrowRight) => {
                if self.caret < self.value.chars().count() {
                    self.caret += 1;
                    self.blink = Instant::now();
                }
            }
            Key::Named(NamedKey::Home) => {
                self.caret = 0;
                self.blink = Instant::now();
            }
            Key::Named(NamedKey::End) => {
                self.caret = self.value.chars().count();
                self.blink = Instant::now();
            }
            Key::Character(c) if ctrl && c.as_str() == "v" => self.paste(),
            _ => {}
        }
    }

    fn caret_visible(&self) -> bool {
        self.blink.elapsed().as_millis() % (BLINK_MS * 2) < BLINK_MS
    }
}

impl Widget for TextInput {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TextInput
    }

    fn layout_data(&self) -> &LayoutData {
        &self.config.data
    }

    fn measure(&self) -> Vec2 {
        vec2(
            self.config.padding.horizontal() + self.config.text_size * 4.0,
            self.config.text_size * Typography::LEADING + self.config.padding.vertical(),
        )
    }

    fn arrange(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn event(&mut self, ev: &EventKind) {
        match ev {
            EventKind::PointerDown {
                button: MouseButton::Left,
                pos,
            } => {
                let inside = self.rect.contains(*pos);
                if inside && !self.disabled {
                    self.focused = true;
                    self.pending_click = Some(pos.x);
                    self.blink = Instant::now();
                } else {
                    self.focused = false;
                }
            }
            EventKind::CharInput { ch } if self.focused && !self.disabled => self.insert(*ch),
            EventKind::KeyDown { key, modifiers } if self.focused && !self.disabled => {
                self.key_down(key, modifiers.control_key());
            }
            _ => {}
        }
    }

    fn paint(&mut self, ren: &mut Renderer) {
        let skin = if self.disabled {
            &self.config.skin.disabled
        } else if self.focused {
            &self.config.skin.highlight
        } else {
            &self.config.skin.idle
        };
        skin.draw(ren, self.rect);

        let content = self.rect.shrink(self.config.padding);
        if content.is_empty() {
            return;
        }
        let text_color = if self.disabled {
            self.config.color.disabled
        } else {
            self.config.color.idle
        };
        let line_height = self.config.text_size * Typography::LEADING;
        let text_top = content.origin
            + vec2(0.0, ((content.size.y - line_height) * 0.5).max(0.0));

        let fg = cosmic_text::Color::rgba(
            (text_color.x * 255.0) as u8,
            (text_color.y * 255.0) as u8,
            (text_color.z * 255.0) as u8,
            (text_color.w * 255.0) as u8,
        );

        let mut glyph_boxes: Vec<(Rect, Vec4)> = Vec::new();
        let caret_px;
        {
            let (font_system, swash) = ren.font_and_swash();
            let metrics = Metrics::new(self.config.text_size, line_height);
            let mut line = cosmic_text::Buffer::new(font_system, metrics);
            let mut line = line.borrow_with(font_system);
            line.set_text(&self.value, &Attrs::new(), Shaping::Advanced);
            line.shape_until_scroll(true);

            if let Some(click_x) = self.pending_click.take() {
                let relative_x = click_x - content.origin.x + self.scroll;
                if let Some(cursor) = line.hit(relative_x, 0.0) {
                    self.caret = self
                        .value
                        .char_indices()
                        .take_while(|(i, _)| *i < cursor.index)
                        .count();
                } else {
                    self.caret = self.value.chars().count();
                }
            }

            caret_px = line.layout_runs().next().map_or(0.0, |run| {
                run.glyphs.iter().take(self.caret).map(|g| g.w).sum()
            });

            // Keep the caret inside the visible window.
            if caret_px < self.scroll {
                self.scroll = caret_px;
            } else if caret_px > self.scroll + content.size.x {
                self.scroll = caret_px - content.size.x;
            }
            let line_w = line.layout_runs().next().map_or(0.0, |run| run.line_w);
            self.scroll = self.scroll.clamp(0.0, (line_w - content.size.x).max(0.0));

            let scroll = self.scroll;
            line.draw(swash, fg, |x, y, w, h, rgba| {
                let pos = text_top + vec2(x as f32 - scroll, y as f32);
                let glyph = Rect::new(pos, vec2(w as f32, h as f32));
                if content.intersects(&glyph) {
                    glyph_boxes.push((
                        glyph,
                        Vec4::new(
                            rgba.r() as f32 / 255.0,
                            rgba.g() as f32 / 255.0,
                            rgba.b() as f32 / 255.0,
                            rgba.a() as f32 / 255.0,
                        ),
                    ));
                }
            });
        }

        for (glyph, color) in glyph_boxes {
            ren.fill_rect(glyph, color);
        }

        if self.focused && self.caret_visible() {
            let caret_color = if self.disabled {
                self.config.color.disabled_caret
            } else {
                self.config.color.caret
            };
            let x = (content.origin.x + caret_px - self.scroll)
                .min(content.origin.x + content.size.x - 2.0)
                .max(content.origin.x);
            let caret = Rect::new(
                vec2(x, content.center().y - self.config.text_size * 0.5),
                vec2(2.0, self.config.text_size),
            );
            ren.fill_rect(caret, caret_color);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use winit::keyboard::ModifiersState;

    fn arranged_input() -> TextInput {
        let mut input = TextInput::new(TextInputConfig::default());
        input.arrange(Rect::new(vec2(50.0, 69.0), vec2(200.0, 60.0)));
        input
    }

    fn focus(input: &mut TextInput) {
        input.event(&EventKind::PointerDown {
            button: MouseButton::Left,
            pos: vec2(100.0, 90.0),
        });
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for ch in s.chars() {
            input.event(&EventKind::CharInput { ch });
        }
    }

    fn press(input: &mut TextInput, key: NamedKey) {
        input.event(&EventKind::KeyDown {
            key: Key::Named(key),
            modifiers: ModifiersState::empty(),
        });
    }

    #[test]
    fn typing_requires_focus() {
        let mut input = arranged_input();
        type_str(&mut input, "ignored");
        assert_eq!(input.value(), "");

        focus(&mut input);
        type_str(&mut input, "Alice");
        assert_eq!(input.value(), "Alice");
    }

    #[test]
    fn click_outside_blurs() {
        let mut input = arranged_input();
        focus(&mut input);
        assert!(input.is_focused());

        input.event(&EventKind::PointerDown {
            button: MouseButton::Left,
            pos: vec2(700.0, 700.0),
        });
        assert!(!input.is_focused());
        type_str(&mut input, "x");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn backspace_removes_before_the_caret() {
        let mut input = arranged_input();
        focus(&mut input);
        type_str(&mut input, "abc");
        press(&mut input, NamedKey::Backspace);
        assert_eq!(input.value(), "ab");

        press(&mut input, NamedKey::Home);
        press(&mut input, NamedKey::Backspace);
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn caret_moves_and_edits_mid_string() {
        let mut input = arranged_input();
        focus(&mut input);
        type_str(&mut input, "abd");
        press(&mut input, NamedKey::ArrowLeft);
        type_str(&mut input, "c");
        assert_eq!(input.value(), "abcd");

        press(&mut input, NamedKey::Delete);
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn multibyte_input_keeps_byte_offsets_straight() {
        let mut input = arranged_input();
        focus(&mut input);
        type_str(&mut input, "héllo");
        press(&mut input, NamedKey::Backspace);
        press(&mut input, NamedKey::Backspace);
        assert_eq!(input.value(), "hél");
    }

    #[test]
    fn change_callback_sees_every_edit() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let log = seen.clone();
        let mut input = TextInput::new(TextInputConfig::default())
            .on_change(move |v| log.borrow_mut().push(v.to_string()));
        input.arrange(Rect::new(vec2(50.0, 69.0), vec2(200.0, 60.0)));
        focus(&mut input);
        type_str(&mut input, "ab");
        press(&mut input, NamedKey::Backspace);

        assert_eq!(*seen.borrow(), vec!["a", "ab", "a"]);
    }
}
