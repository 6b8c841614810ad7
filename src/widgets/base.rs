use std::any::Any;

use glam::Vec2;

use crate::layout::{LayoutData, Rect};
use crate::renderer::Renderer;
use crate::windowing::events::EventKind;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WidgetKind {
    Container,
    Label,
    TextInput,
    Button,
}

pub trait Widget {
    fn kind(&self) -> WidgetKind;

    /// Placement hints for the parent container.
    fn layout_data(&self) -> &LayoutData;

    /// Preferred size, before the parent applies `min_size`.
    fn measure(&self) -> Vec2;

    /// Accept the final rect. Containers recurse into their children here.
    fn arrange(&mut self, rect: Rect);

    fn event(&mut self, _ev: &EventKind) {}

    fn paint(&mut self, ren: &mut Renderer);

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn as_any(&self) -> &dyn Any;
}
