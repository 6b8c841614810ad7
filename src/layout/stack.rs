use glam::{Vec2, vec2};

use super::anchor::Align;
use super::{Axis, LayoutData, Rect};

fn cross_offset(align: Align, avail: f32, used: f32) -> f32 {
    match align {
        Align::Start => 0.0,
        Align::Center => ((avail - used) * 0.5).max(0.0),
        Align::End => (avail - used).max(0.0),
    }
}

/// Lay items end to end along `axis`, `spacing` pixels apart.
///
/// Each item keeps its preferred main-axis extent. On the cross axis it
/// stretches to the area if asked, otherwise it is aligned within it.
/// Returns one rect per item, in order.
pub fn place(area: Rect, axis: Axis, spacing: f32, items: &[(LayoutData, Vec2)]) -> Vec<Rect> {
    let mut cursor = 0.0;
    let mut rects = Vec::with_capacity(items.len());

    for (data, preferred) in items {
        let rect = match axis {
            Axis::Vertical => {
                let w = if data.stretch_h {
                    area.size.x
                } else {
                    preferred.x
                };
                let x = cross_offset(data.h_align, area.size.x, w);
                Rect::new(area.origin + vec2(x, cursor), vec2(w, preferred.y))
            }
            Axis::Horizontal => {
                let h = if data.stretch_v {
                    area.size.y
                } else {
                    preferred.y
                };
                let y = cross_offset(data.v_align, area.size.y, h);
                Rect::new(area.origin + vec2(cursor, y), vec2(preferred.x, h))
            }
        };
        cursor += match axis {
            Axis::Vertical => preferred.y,
            Axis::Horizontal => preferred.x,
        } + spacing;
        rects.push(rect);
    }

    rects
}

/// Total size the stack wants for the given item sizes.
pub fn measure(axis: Axis, spacing: f32, items: &[Vec2]) -> Vec2 {
    let gaps = spacing * items.len().saturating_sub(1) as f32;
    match axis {
        Axis::Vertical => vec2(
            items.iter().map(|s| s.x).fold(0.0, f32::max),
            items.iter().map(|s| s.y).sum::<f32>() + gaps,
        ),
        Axis::Horizontal => vec2(
            items.iter().map(|s| s.x).sum::<f32>() + gaps,
            items.iter().map(|s| s.y).fold(0.0, f32::max),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn vertical_stack_applies_spacing_between_children() {
        let area = Rect::new(vec2(50.0, 50.0), vec2(700.0, 620.0));
        let items = [
            (LayoutData::default(), vec2(187.0, 14.0)),
            (LayoutData::default(), vec2(200.0, 60.0)),
        ];
        let rects = place(area, Axis::Vertical, 5.0, &items);
        assert_eq!(rects[0].origin, vec2(50.0, 50.0));
        assert_eq!(rects[1].origin, vec2(50.0, 69.0));
        assert_eq!(rects[1].size, vec2(200.0, 60.0));
    }

    #[test]
    fn horizontal_stack_advances_along_x() {
        let area = Rect::new(vec2(0.0, 0.0), vec2(500.0, 100.0));
        let items = [
            (LayoutData::default(), vec2(40.0, 10.0)),
            (LayoutData::default(), vec2(60.0, 10.0)),
        ];
        let rects = place(area, Axis::Horizontal, 8.0, &items);
        assert_eq!(rects[0].origin, vec2(0.0, 0.0));
        assert_eq!(rects[1].origin, vec2(48.0, 0.0));
    }

    #[test]
    fn measure_sums_the_main_axis() {
        let total = measure(
            Axis::Vertical,
            5.0,
            &[vec2(187.0, 14.0), vec2(200.0, 60.0)],
        );
        assert_eq!(total, vec2(200.0, 79.0));
    }

    #[test]
    fn cross_stretch_takes_the_full_area() {
        let area = Rect::new(vec2(0.0, 0.0), vec2(300.0, 200.0));
        let items = [(
            LayoutData {
                stretch_h: true,
                ..Default::default()
            },
            vec2(10.0, 20.0),
        )];
        let rects = place(area, Axis::Vertical, 0.0, &items);
        assert_eq!(rects[0].size, vec2(300.0, 20.0));
    }
}
