use std::any::Any;

use glam::Vec2;

use crate::layout::{self, Axis, LayoutData, LayoutPolicy, Rect};
use crate::renderer::Renderer;
use crate::windowing::events::EventKind;

use super::base::{Widget, WidgetKind};

/// Container options.
///
/// Defaults match a bare row: children laid out horizontally with no
/// spacing, the container itself anchored to the start with no minimum
/// size.
pub struct ContainerConfig {
    pub layout: LayoutPolicy,
    pub data: LayoutData,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutPolicy::Stack {
                axis: Axis::Horizontal,
                spacing: 0.0,
            },
            data: LayoutData::default(),
        }
    }
}

pub struct Container {
    config: ContainerConfig,
    children: Vec<Box<dyn Widget>>,
    rect: Rect,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        Self {
            config,
            children: Vec::new(),
            rect: Rect::new(Vec2::ZERO, Vec2::ZERO),
        }
    }

    pub fn add_child(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn layout_policy(&self) -> &LayoutPolicy {
        &self.config.layout
    }

    fn preferred_of(child: &dyn Widget) -> Vec2 {
        child.measure().max(child.layout_data().min_size)
    }
}

impl Widget for Container {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Container
    }

    fn layout_data(&self) -> &LayoutData {
        &self.config.data
    }

    fn measure(&self) -> Vec2 {
        match &self.config.layout {
            LayoutPolicy::Anchor { padding } => {
                let content = self
                    .children
                    .iter()
                    .map(|c| Self::preferred_of(c.as_ref()))
                    .fold(Vec2::ZERO, Vec2::max);
                content + Vec2::new(padding.horizontal(), padding.vertical())
            }
            LayoutPolicy::Stack { axis, spacing } => {
                let sizes: Vec<Vec2> = self
                    .children
                    .iter()
                    .map(|c| Self::preferred_of(c.as_ref()))
                    .collect();
                layout::stack::measure(*axis, *spacing, &sizes)
            }
        }
    }

    fn arrange(&mut self, rect: Rect) {
        self.rect = rect;
        match &self.config.layout {
            LayoutPolicy::Anchor { padding } => {
                let area = rect.shrink(*padding);
                for child in &mut self.children {
                    let preferred = Self::preferred_of(child.as_ref());
                    let slot = layout::anchor::place(area, child.layout_data(), preferred);
                    child.arrange(slot);
                }
            }
            LayoutPolicy::Stack { axis, spacing } => {
                let items: Vec<(LayoutData, Vec2)> = self
                    .children
                    .iter()
                    .map(|c| (*c.layout_data(), Self::preferred_of(c.as_ref())))
                    .collect();
                let slots = layout::stack::place(rect, *axis, *spacing, &items);
                for (child, slot) in self.children.iter_mut().zip(slots) {
                    child.arrange(slot);
                }
            }
        }
    }

    fn event(&mut self, ev: &EventKind) {
        // Leaves decide relevance against their own arranged rect.
        for child in &mut self.children {
            child.event(ev);
        }
    }

    fn paint(&mut self, ren: &mut Renderer) {
        for child in &mut self.children {
            child.paint(ren);
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
