use glam::{Vec2, vec2};

use super::{LayoutData, Rect};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Align {
    Start,
    Center,
    End,
}

fn align_offset(align: Align, avail: f32, used: f32) -> f32 {
    match align {
        Align::Start => 0.0,
        Align::Center => (avail - used) * 0.5,
        Align::End => avail - used,
    }
}

/// Place one child inside `area` according to its layout data.
///
/// `preferred` is the child's measured size, already raised to its minimum.
/// A stretched axis takes the whole area; otherwise the child keeps its
/// preferred extent and is aligned within the free space.
pub fn place(area: Rect, data: &LayoutData, preferred: Vec2) -> Rect {
    let size = vec2(
        if data.stretch_h { area.size.x } else { preferred.x },
        if data.stretch_v { area.size.y } else { preferred.y },
    );
    let origin = area.origin
        + vec2(
            align_offset(data.h_align, area.size.x, size.x),
            align_offset(data.v_align, area.size.y, size.y),
        );
    Rect::new(origin, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn area() -> Rect {
        Rect::new(vec2(50.0, 50.0), vec2(700.0, 620.0))
    }

    #[test]
    fn stretch_fills_the_area() {
        let data = LayoutData {
            h_align: Align::Center,
            v_align: Align::Center,
            stretch_h: true,
            stretch_v: true,
            ..Default::default()
        };
        let r = place(area(), &data, vec2(10.0, 10.0));
        assert_eq!(r, area());
    }

    #[test]
    fn bottom_center_pins_to_the_lower_edge() {
        let data = LayoutData {
            h_align: Align::Center,
            v_align: Align::End,
            ..Default::default()
        };
        let r = place(area(), &data, vec2(200.0, 100.0));
        assert_eq!(r.origin, vec2(300.0, 570.0));
        assert_eq!(r.size, vec2(200.0, 100.0));
    }

    #[test]
    fn start_alignment_keeps_the_area_origin() {
        let r = place(area(), &LayoutData::default(), vec2(40.0, 30.0));
        assert_eq!(r.origin, vec2(50.0, 50.0));
    }
}
