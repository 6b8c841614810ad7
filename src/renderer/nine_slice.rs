use std::rc::Rc;

use glam::{Vec2, Vec4, vec2};

use super::Renderer;
use super::texture::Texture;
use crate::layout::Rect;

/// A bordered bitmap stretched as a 3x3 grid: corners keep their pixel
/// size, edges stretch along one axis, the center stretches along both.
pub struct NineSlice {
    texture: Rc<Texture>,
    border: f32,
}

impl NineSlice {
    pub fn new(texture: Rc<Texture>, border: f32) -> Self {
        Self { texture, border }
    }

    pub fn draw(&self, ren: &mut Renderer, dst: Rect) {
        for (src, patch) in patches(dst, self.texture.size(), self.border) {
            if !patch.is_empty() {
                ren.draw_sprite(&self.texture, src, patch, Vec4::ONE);
            }
        }
    }
}

/// A widget background: either a nine-slice texture or, when the asset was
/// unavailable, a flat colour stand-in. Keeping the fallback explicit here
/// means no widget ever holds an absent image handle.
pub enum PanelSkin {
    Sliced(NineSlice),
    Flat(Vec4),
}

impl PanelSkin {
    pub fn sliced(texture: Rc<Texture>, border: f32) -> Self {
        Self::Sliced(NineSlice::new(texture, border))
    }

    pub fn flat(color: impl Into<Vec4>) -> Self {
        Self::Flat(color.into())
    }

    pub fn draw(&self, ren: &mut Renderer, dst: Rect) {
        match self {
            Self::Sliced(slice) => slice.draw(ren, dst),
            Self::Flat(color) => ren.fill_rect(dst, *color),
        }
    }
}

/// Split `total` into border / middle / border spans. The middle collapses
/// to zero before the borders start shrinking.
fn spans(total: f32, border: f32) -> [(f32, f32); 3] {
    let b = border.min(total * 0.5);
    [(0.0, b), (b, (total - 2.0 * b).max(0.0)), (total - b, b)]
}

/// The nine (source, destination) patch pairs for drawing `tex_size` pixels
/// of texture into `dst` with a fixed `border`.
fn patches(dst: Rect, tex_size: Vec2, border: f32) -> Vec<(Rect, Rect)> {
    let src_x = spans(tex_size.x, border);
    let src_y = spans(tex_size.y, border);
    let dst_x = spans(dst.size.x, border);
    let dst_y = spans(dst.size.y, border);

    let mut out = Vec::with_capacity(9);
    for row in 0..3 {
        for col in 0..3 {
            let src = Rect::new(
                vec2(src_x[col].0, src_y[row].0),
                vec2(src_x[col].1, src_y[row].1),
            );
            let patch = Rect::new(
                dst.origin + vec2(dst_x[col].0, dst_y[row].0),
                vec2(dst_x[col].1, dst_y[row].1),
            );
            out.push((src, patch));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn yields_nine_patches_with_fixed_corners() {
        let dst = Rect::new(vec2(10.0, 10.0), vec2(200.0, 60.0));
        let all = patches(dst, vec2(48.0, 48.0), 14.0);
        assert_eq!(all.len(), 9);

        // Top-left corner: source and destination both border-sized.
        let (src, patch) = all[0];
        assert_eq!(src, Rect::new(vec2(0.0, 0.0), vec2(14.0, 14.0)));
        assert_eq!(patch, Rect::new(vec2(10.0, 10.0), vec2(14.0, 14.0)));

        // Bottom-right corner pins to the far edge.
        let (src, patch) = all[8];
        assert_eq!(src.origin, vec2(34.0, 34.0));
        assert_eq!(patch.origin, vec2(196.0, 56.0));
    }

    #[test]
    fn center_patch_stretches() {
        let dst = Rect::new(vec2(0.0, 0.0), vec2(200.0, 100.0));
        let (src, patch) = patches(dst, vec2(30.0, 30.0), 10.0)[4];
        assert_eq!(src, Rect::new(vec2(10.0, 10.0), vec2(10.0, 10.0)));
        assert_eq!(patch, Rect::new(vec2(10.0, 10.0), vec2(180.0, 80.0)));
    }

    #[test]
    fn small_destination_collapses_the_middle() {
        let dst = Rect::new(vec2(0.0, 0.0), vec2(20.0, 20.0));
        let all = patches(dst, vec2(48.0, 48.0), 10.0);
        let (_, center) = all[4];
        assert!(center.is_empty());
        // Corners shrink symmetrically instead of overlapping.
        let (_, tl) = all[0];
        assert_eq!(tl.size, vec2(10.0, 10.0));
    }
}
