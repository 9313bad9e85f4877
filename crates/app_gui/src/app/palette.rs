//! Colours and glyphs for the core's presentation enums.

use cataract_core::{Icon, Theme, Tone};
use eframe::egui::{self, Color32};

pub const BLUE_400: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa);
pub const BLUE_800: Color32 = Color32::from_rgb(0x1e, 0x40, 0xaf);
pub const GRAY_300: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb);
pub const GRAY_500: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
pub const YELLOW_400: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);
pub const YELLOW_50: Color32 = Color32::from_rgb(0xfe, 0xfc, 0xe8);
pub const YELLOW_700: Color32 = Color32::from_rgb(0xa1, 0x62, 0x07);

/// Icon colour (the 500 shade).
pub fn tone(tone: Tone) -> Color32 {
    match tone {
        Tone::Green => Color32::from_rgb(0x22, 0xc5, 0x5e),
        Tone::Yellow => Color32::from_rgb(0xea, 0xb3, 0x08),
        Tone::Orange => Color32::from_rgb(0xf9, 0x73, 0x16),
    }
}

/// Darker shade used for value text.
pub fn tone_text(tone: Tone) -> Color32 {
    match tone {
        Tone::Green => Color32::from_rgb(0x16, 0xa3, 0x4a),
        Tone::Yellow => Color32::from_rgb(0xca, 0x8a, 0x04),
        Tone::Orange => Color32::from_rgb(0xea, 0x58, 0x0c),
    }
}

/// (fill, border) of the result card.
pub fn card(theme: Theme) -> (Color32, Color32) {
    match theme {
        Theme::Warning => (
            Color32::from_rgb(0xff, 0xf7, 0xed),
            Color32::from_rgb(0xfe, 0xf9, 0xc3),
        ),
        Theme::Success => (
            Color32::from_rgb(0xf0, 0xfd, 0xf4),
            Color32::from_rgb(0xdc, 0xfc, 0xe7),
        ),
    }
}

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Warning => "⚠",
        Icon::Check => "✔",
        Icon::Cloud => "☁",
        Icon::Sun => "☀",
        Icon::Smile => "☺",
        Icon::Meh => "😐",
        Icon::Frown => "☹",
        Icon::Chart => "📈",
    }
}

pub fn rgba(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

pub fn color_image(pixels: &image::RgbaImage) -> egui::ColorImage {
    let (w, h) = pixels.dimensions();
    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], pixels.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Tone::Green)]
    #[case(Tone::Yellow)]
    #[case(Tone::Orange)]
    fn text_shade_is_darker_than_icon_shade(#[case] t: Tone) {
        let sum = |c: Color32| u32::from(c.r()) + u32::from(c.g()) + u32::from(c.b());
        assert!(sum(tone_text(t)) < sum(tone(t)));
    }

    #[test]
    fn overlay_colour_keeps_alpha() {
        let c = rgba(cataract_core::present::OVERLAY_DETECTED);
        assert_eq!(c.a(), 179);
    }

    #[test]
    fn color_image_matches_pixel_size() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
        let color = color_image(&img);
        assert_eq!(color.size, [3, 2]);
        assert_eq!(color.pixels[0], Color32::from_rgb(1, 2, 3));
    }
}
