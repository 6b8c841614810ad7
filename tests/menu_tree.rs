//! Structural checks on the menu widget tree: shape, configured metrics,
//! construction determinism, and resilience to missing textures.

use glam::vec2;

use gameshow::layout::{Insets, LayoutPolicy};
use gameshow::menu::{Menu, MenuAssets};
use gameshow::widgets::{Container, TextInput, Widget, WidgetKind};

fn build() -> Menu {
    Menu::build(&MenuAssets::missing(), || {})
}

fn kinds(parent: &dyn Widget) -> Vec<WidgetKind> {
    parent.children().iter().map(|c| c.kind()).collect()
}

fn as_container(widget: &dyn Widget) -> &Container {
    widget
        .as_any()
        .downcast_ref::<Container>()
        .expect("expected a container")
}

#[test]
fn tree_has_the_expected_shape() {
    let menu = build();
    let root = menu.root();

    assert_eq!(kinds(root), [WidgetKind::Container, WidgetKind::Container]);

    let inner = root.children()[0].as_ref();
    assert_eq!(kinds(inner), [WidgetKind::Label, WidgetKind::TextInput]);

    let bottom = root.children()[1].as_ref();
    assert_eq!(kinds(bottom), [WidgetKind::Button]);
}

#[test]
fn configured_metrics_survive_construction() {
    let menu = build();
    let root = menu.root();

    assert_eq!(
        *root.layout_policy(),
        LayoutPolicy::Anchor {
            padding: Insets::uniform(50.0)
        }
    );

    let inner = root.children()[0].as_ref();
    match as_container(inner).layout_policy() {
        LayoutPolicy::Stack { spacing, .. } => assert_eq!(*spacing, 5.0),
        other => panic!("inner container should stack, got {other:?}"),
    }

    let input = inner.children()[1].as_ref();
    assert_eq!(input.layout_data().min_size, vec2(200.0, 60.0));
    let input = input
        .as_any()
        .downcast_ref::<TextInput>()
        .expect("expected the name input");
    assert_eq!(
        input.padding(),
        Insets {
            left: 20.0,
            right: 10.0,
            ..Default::default()
        }
    );

    let bottom = root.children()[1].as_ref();
    assert_eq!(bottom.layout_data().min_size, vec2(200.0, 100.0));
    let button = bottom.children()[0].as_ref();
    assert_eq!(button.layout_data().min_size, vec2(200.0, 100.0));
}

#[test]
fn construction_is_deterministic() {
    let a = build();
    let b = build();

    fn shape(widget: &dyn Widget) -> Vec<(WidgetKind, glam::Vec2)> {
        let mut out = vec![(widget.kind(), widget.layout_data().min_size)];
        for child in widget.children() {
            out.extend(shape(child.as_ref()));
        }
        out
    }

    assert_eq!(shape(a.root()), shape(b.root()));
}

#[test]
fn missing_textures_still_produce_a_complete_tree() {
    // MenuAssets::missing() is the degenerate loader outcome: every image
    // failed. Construction and layout must still work end to end.
    let mut menu = build();
    menu.arrange(vec2(800.0, 720.0));
    assert_eq!(menu.root().children().len(), 2);
}
