pub mod anchor;
pub mod rect;
pub mod stack;

pub use anchor::Align;
pub use rect::{Insets, Rect};

use glam::Vec2;

/// How a container positions its children.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutPolicy {
    /// Children are anchored inside the padded area per their
    /// [`LayoutData`] alignment, optionally stretching to fill it.
    Anchor { padding: Insets },
    /// Children are laid end to end along `axis` with `spacing` between
    /// consecutive children, aligned on the cross axis per their
    /// [`LayoutData`].
    Stack { axis: Axis, spacing: f32 },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Placement hints a widget hands to its parent container.
///
/// Defaults: aligned to the start on both axes, no stretching, no minimum
/// size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutData {
    pub h_align: Align,
    pub v_align: Align,
    pub stretch_h: bool,
    pub stretch_v: bool,
    /// Lower bound applied to the widget's measured size.
    pub min_size: Vec2,
}

impl Default for LayoutData {
    fn default() -> Self {
        Self {
            h_align: Align::Start,
            v_align: Align::Start,
            stretch_h: false,
            stretch_v: false,
            min_size: Vec2::ZERO,
        }
    }
}
