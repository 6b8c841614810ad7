//! The main-menu screen: one fixed widget tree asking for a character name,
//! with a start button pinned to the bottom.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec4, vec2};

use crate::assets::load_texture;
use crate::layout::{Align, Axis, Insets, LayoutData, LayoutPolicy, Rect};
use crate::renderer::{PanelSkin, Renderer, Texture};
use crate::style::tokens::{Colour, Typography};
use crate::widgets::{
    Button, ButtonConfig, ButtonSkin, ButtonTextColor, Container, ContainerConfig, Label,
    LabelColor, LabelConfig, TextInput, TextInputColor, TextInputConfig, TextInputSkin, Widget,
};
use crate::windowing::events::EventKind;

const TEXT_INPUT_IMAGE: &str = "TextInput1.png";
const BUTTON_NORMAL_IMAGE: &str = "Button_02A_Normal.png";
const BUTTON_SELECTED_IMAGE: &str = "Button_02A_Selected.png";
const BUTTON_PRESSED_IMAGE: &str = "Button_02A_Pressed.png";

/// The menu's texture set. Any entry may be absent; the builder substitutes
/// flat panels for missing ones.
pub struct MenuAssets {
    pub input_box: Option<Rc<Texture>>,
    pub button_normal: Option<Rc<Texture>>,
    pub button_selected: Option<Rc<Texture>>,
    pub button_pressed: Option<Rc<Texture>>,
}

impl MenuAssets {
    pub fn load(ren: &Renderer) -> Self {
        Self {
            input_box: load_texture(ren, TEXT_INPUT_IMAGE),
            button_normal: load_texture(ren, BUTTON_NORMAL_IMAGE),
            button_selected: load_texture(ren, BUTTON_SELECTED_IMAGE),
            button_pressed: load_texture(ren, BUTTON_PRESSED_IMAGE),
        }
    }

    /// No textures at all; every widget falls back to flat panels.
    pub fn missing() -> Self {
        Self {
            input_box: None,
            button_normal: None,
            button_selected: None,
            button_pressed: None,
        }
    }
}

fn skin(texture: &Option<Rc<Texture>>, border: f32) -> PanelSkin {
    match texture {
        Some(tex) => PanelSkin::sliced(tex.clone(), border),
        None => PanelSkin::flat(Colour::PANEL),
    }
}

pub struct Menu {
    root: Container,
    name: Rc<RefCell<String>>,
    ticks: u64,
}

impl Menu {
    /// Assemble the fixed tree:
    ///
    /// ```text
    /// outer (anchor, 50px padding)
    /// ├── inner (vertical stack, 5px gap, centered + stretched)
    /// │   ├── label "Enter your Character Name:"
    /// │   └── name input (min 200x60)
    /// └── bottom bar (bottom-center, min 200x100)
    ///     └── start button
    /// ```
    ///
    /// `on_start` fires when the start button is activated.
    pub fn build(assets: &MenuAssets, on_start: impl FnMut() + 'static) -> Self {
        let name: Rc<RefCell<String>> = Rc::default();

        let mut outer = Container::new(ContainerConfig {
            layout: LayoutPolicy::Anchor {
                padding: Insets::uniform(50.0),
            },
            data: LayoutData::default(),
        });

        let mut inner = Container::new(ContainerConfig {
            layout: LayoutPolicy::Stack {
                axis: Axis::Vertical,
                spacing: 5.0,
            },
            data: LayoutData {
                h_align: Align::Center,
                v_align: Align::Center,
                stretch_h: true,
                stretch_v: true,
                ..Default::default()
            },
        });

        inner.add_child(Label::new(LabelConfig {
            text: "Enter your Character Name:".to_string(),
            color: LabelColor {
                idle: Vec4::from(Colour::AQUAMARINE),
                disabled: Vec4::from(Colour::GRAY),
            },
            size: Typography::CAPTION,
            data: LayoutData::default(),
        }));

        let mirror = name.clone();
        inner.add_child(
            TextInput::new(TextInputConfig {
                text_size: Typography::BODY,
                padding: Insets {
                    left: 20.0,
                    right: 10.0,
                    ..Default::default()
                },
                color: TextInputColor {
                    idle: Vec4::from(Colour::BISQUE),
                    disabled: Vec4::from(Colour::GRAY),
                    caret: Vec4::from(Colour::BLACK),
                    disabled_caret: Vec4::from(Colour::GRAY),
                },
                skin: TextInputSkin {
                    idle: skin(&assets.input_box, 14.0),
                    disabled: skin(&assets.input_box, 14.0),
                    highlight: skin(&assets.input_box, 14.0),
                },
                data: LayoutData {
                    min_size: vec2(200.0, 60.0),
                    ..Default::default()
                },
            })
            .on_change(move |value| *mirror.borrow_mut() = value.to_string()),
        );

        let mut bottom = Container::new(ContainerConfig {
            layout: LayoutPolicy::Stack {
                axis: Axis::Horizontal,
                spacing: 0.0,
            },
            data: LayoutData {
                h_align: Align::Center,
                v_align: Align::End,
                min_size: vec2(200.0, 100.0),
                ..Default::default()
            },
        });

        bottom.add_child(
            Button::new(ButtonConfig {
                label: "Start Game".to_string(),
                text_color: ButtonTextColor {
                    idle: Vec4::from(Colour::AZURE),
                    hover: Vec4::from(Colour::AQUAMARINE),
                    pressed: Vec4::from(Colour::AQUAMARINE),
                    disabled: Vec4::from(Colour::GRAY),
                },
                text_size: Typography::CAPTION,
                text_padding: Insets {
                    bottom: 60.0,
                    ..Default::default()
                },
                skin: ButtonSkin {
                    idle: skin(&assets.button_normal, 10.0),
                    hover: skin(&assets.button_selected, 10.0),
                    pressed: skin(&assets.button_pressed, 10.0),
                    disabled: skin(&assets.button_normal, 10.0),
                },
                data: LayoutData {
                    min_size: vec2(200.0, 100.0),
                    ..Default::default()
                },
            })
            .on_press(on_start),
        );

        outer.add_child(inner);
        outer.add_child(bottom);

        Self {
            root: outer,
            name,
            ticks: 0,
        }
    }

    /// One frame of input processing and animation.
    pub fn update(&mut self, events: &[EventKind]) {
        for ev in events {
            self.root.event(ev);
        }
        self.ticks += 1;
    }

    /// Lay the tree out for `size` pixels. Split out of [`Menu::draw`] so
    /// hit testing works without a renderer.
    pub fn arrange(&mut self, size: Vec2) {
        self.root.arrange(Rect::new(Vec2::ZERO, size));
    }

    pub fn draw(&mut self, ren: &mut Renderer) {
        self.arrange(ren.surface_size());
        self.root.paint(ren);
    }

    /// Shared handle to the entered character name.
    pub fn name_handle(&self) -> Rc<RefCell<String>> {
        self.name.clone()
    }

    pub fn root(&self) -> &Container {
        &self.root
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
