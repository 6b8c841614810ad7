//! Startup asset loading. Image failures degrade to `None` so the menu can
//! swap in flat placeholder skins instead of aborting.

use std::rc::Rc;

use anyhow::Context as _;

use crate::renderer::{Renderer, Texture};

fn decode(path: &str) -> anyhow::Result<image::RgbaImage> {
    let img = image::open(path).with_context(|| format!("reading {path}"))?;
    Ok(img.to_rgba8())
}

/// Load `path` and upload it. On failure the cause is logged and `None`
/// comes back; callers choose their own stand-in.
pub fn load_texture(ren: &Renderer, path: &str) -> Option<Rc<Texture>> {
    match decode(path) {
        Ok(pixels) => Some(ren.create_texture(&pixels)),
        Err(err) => {
            log::warn!("unable to load image {path}: {err:#}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reports_missing_files() {
        let err = decode("no-such-image.png").unwrap_err();
        assert!(err.to_string().contains("no-such-image.png"));
    }
}
