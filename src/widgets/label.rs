use std::any::Any;

use glam::{Vec2, Vec4, vec2};

use crate::layout::{LayoutData, Rect};
use crate::renderer::Renderer;
use crate::style::tokens::{Colour, Typography};

use super::base::{Widget, WidgetKind};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelColor {
    pub idle: Vec4,
    pub disabled: Vec4,
}

impl Default for LabelColor {
    fn default() -> Self {
        Self {
            idle: Vec4::ONE,
            disabled: Vec4::from(Colour::GRAY),
        }
    }
}

/// Label options. Defaults: empty text, white body-sized type.
pub struct LabelConfig {
    pub text: String,
    pub color: LabelColor,
    pub size: f32,
    pub data: LayoutData,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: LabelColor::default(),
            size: Typography::BODY,
            data: LayoutData::default(),
        }
    }
}

pub struct Label {
    config: LabelConfig,
    disabled: bool,
    rect: Rect,
}

impl Label {
    pub fn new(config: LabelConfig) -> Self {
        Self {
            config,
            disabled: false,
            rect: Rect::new(Vec2::ZERO, Vec2::ZERO),
        }
    }

    pub fn text(&self) -> &str {
        &self.config.text
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

impl Widget for Label {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Label
    }

    fn layout_data(&self) -> &LayoutData {
        &self.config.data
    }

    fn measure(&self) -> Vec2 {
        // Rough advance-width estimate; good enough for menu layout.
        vec2(
            self.config.text.chars().count() as f32 * self.config.size * 0.6,
            self.config.size * Typography::LEADING,
        )
    }

    fn arrange(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn paint(&mut self, ren: &mut Renderer) {
        let color = if self.disabled {
            self.config.color.disabled
        } else {
            self.config.color.idle
        };
        ren.draw_text(&self.config.text, self.rect.origin, color, self.config.size);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
