use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::profile::Hsl;

pub(super) fn hsl_color(hsl: Hsl) -> Color32 {
    let hue = hsl.hue.rem_euclid(360.0) / 60.0;
    let saturation = (hsl.saturation / 100.0).clamp(0.0, 1.0);
    let lightness = (hsl.lightness / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let secondary = chroma * (1.0 - (hue % 2.0 - 1.0).abs());

    let (r, g, b) = match hue as u32 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    let offset = lightness - chroma * 0.5;
    Color32::from_rgb(
        ((r + offset) * 255.0).round() as u8,
        ((g + offset) * 255.0).round() as u8,
        ((b + offset) * 255.0).round() as u8,
    )
}

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.45 + (factor * 0.55))) as u8,
    )
}

pub(super) fn draw_canvas_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(26, 24, 30));

    const STEP: f32 = 48.0;
    let grid_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(70, 64, 74, 60));

    let mut x = rect.left() + STEP;
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            grid_stroke,
        );
        x += STEP;
    }

    let mut y = rect.top() + STEP;
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            grid_stroke,
        );
        y += STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_conversion_hits_the_primaries() {
        let red = hsl_color(Hsl {
            hue: 0.0,
            saturation: 100.0,
            lightness: 50.0,
        });
        assert_eq!((red.r(), red.g(), red.b()), (255, 0, 0));

        let green = hsl_color(Hsl {
            hue: 120.0,
            saturation: 100.0,
            lightness: 50.0,
        });
        assert_eq!((green.r(), green.g(), green.b()), (0, 255, 0));
    }

    #[test]
    fn zero_saturation_is_gray() {
        let gray = hsl_color(Hsl {
            hue: 200.0,
            saturation: 0.0,
            lightness: 50.0,
        });
        assert_eq!(gray.r(), gray.g());
        assert_eq!(gray.g(), gray.b());
    }
}
