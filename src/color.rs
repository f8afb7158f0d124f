use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, LinSrgb, Mix, Srgb};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Rgb – a UI-independent colour used by the view model
// ---------------------------------------------------------------------------

/// 8-bit sRGB colour. Kept separate from `Color32` so view records stay plain
/// data that can be serialised and compared in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(v: u32) -> Self {
        Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    fn to_srgb(self) -> Srgb {
        Srgb::<u8>::new(self.0, self.1, self.2).into_format()
    }

    fn from_srgb(c: Srgb) -> Self {
        let c: Srgb<u8> = c.into_format();
        Rgb(c.red, c.green, c.blue)
    }
}

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        Color32::from_rgb(c.0, c.1, c.2)
    }
}

// ---------------------------------------------------------------------------
// Named colours
// ---------------------------------------------------------------------------

pub const GREEN: Rgb = Rgb::hex(0x10B981);
pub const AMBER: Rgb = Rgb::hex(0xF59E0B);
pub const RED: Rgb = Rgb::hex(0xEF4444);
pub const INDIGO: Rgb = Rgb::hex(0x6366F1);
pub const TRACK: Rgb = Rgb::hex(0xE5E7EB);
pub const AXIS: Rgb = Rgb::hex(0x6B7280);
pub const TEXT: Rgb = Rgb::hex(0x1F2937);
pub const MUTED_TEXT: Rgb = Rgb::hex(0x4B5563);

pub const CARD_GREEN: Rgb = Rgb::hex(0x22C55E);
pub const CARD_BLUE: Rgb = Rgb::hex(0x3B82F6);
pub const CARD_PURPLE: Rgb = Rgb::hex(0xA855F7);

pub const WEATHER_TOP: Rgb = Rgb::hex(0x3B82F6);
pub const WEATHER_BOTTOM: Rgb = Rgb::hex(0x2563EB);

// ---------------------------------------------------------------------------
// Colour arithmetic
// ---------------------------------------------------------------------------

/// Lighten in HSL space; `amount` in `0..=1` moves lightness toward white.
pub fn lighten(c: Rgb, amount: f32) -> Rgb {
    let hsl: Hsl = c.to_srgb().into_color();
    let rgb: Srgb = hsl.lighten(amount.clamp(0.0, 1.0)).into_color();
    Rgb::from_srgb(rgb)
}

/// Interpolate between two colours in linear light.
pub fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let a: LinSrgb = a.to_srgb().into_linear();
    let b: LinSrgb = b.to_srgb().into_linear();
    let mixed: Srgb = Srgb::from_linear(a.mix(b, t.clamp(0.0, 1.0)));
    Rgb::from_srgb(mixed)
}

/// `c` with the given alpha in `0..=1`, premultiplied for egui.
pub fn with_alpha(c: Rgb, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(c.0, c.1, c.2, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_splits_into_channels() {
        assert_eq!(Rgb::hex(0x10B981), Rgb(0x10, 0xB9, 0x81));
        assert_eq!(Color32::from(AMBER), Color32::from_rgb(0xF5, 0x9E, 0x0B));
        assert_eq!(Color32::from(RED), Color32::from_rgb(0xEF, 0x44, 0x44));
    }

    #[test]
    fn mix_endpoints_are_inputs() {
        assert_eq!(mix(WEATHER_TOP, WEATHER_BOTTOM, 0.0), WEATHER_TOP);
        assert_eq!(mix(WEATHER_TOP, WEATHER_BOTTOM, 1.0), WEATHER_BOTTOM);
    }

    #[test]
    fn lighten_increases_every_channel_of_a_dark_colour() {
        let base = Rgb(40, 60, 80);
        let light = lighten(base, 0.5);
        assert!(light.0 > base.0 && light.1 > base.1 && light.2 > base.2);
        assert_eq!(lighten(base, 0.0), base);
    }
}
