//! Shared design tokens. Colours are straight sRGB in 0..1, matching the
//! CSS named colours the menu theme is built from.

pub struct Colour;

impl Colour {
    pub const AQUAMARINE: [f32; 4] = [0.498, 1.0, 0.831, 1.0];
    pub const AZURE: [f32; 4] = [0.941, 1.0, 1.0, 1.0];
    pub const BISQUE: [f32; 4] = [1.0, 0.894, 0.769, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GRAY: [f32; 4] = [0.502, 0.502, 0.502, 1.0];

    /// Flat stand-in shown where a skin texture failed to load.
    pub const PANEL: [f32; 4] = [0.25, 0.25, 0.28, 1.0];
}

pub struct Typography;

impl Typography {
    /// Body copy, used by the text input.
    pub const BODY: f32 = 16.0;
    /// Labels and button captions.
    pub const CAPTION: f32 = 12.0;
    /// Line height as a multiple of the font size.
    pub const LEADING: f32 = 1.2;
}
