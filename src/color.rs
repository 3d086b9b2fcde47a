use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, Srgb};

use crate::state::Slot;

// ---------------------------------------------------------------------------
// Colour helpers
// ---------------------------------------------------------------------------

/// Parse `#RRGGBB` (or `RRGGBB`) into an opaque colour.
pub fn hex_color(hex: &str) -> Option<Color32> {
    let rgb: Srgb<u8> = hex.trim().parse().ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Same hue with the given opacity (0.0 – 1.0).
pub fn translucent(color: Color32, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Move a colour towards white by `factor` in HSL space.
pub fn lighten(color: Color32, factor: f32) -> Color32 {
    let rgb: Srgb = Srgb::new(color.r(), color.g(), color.b()).into_format();
    let hsl: Hsl = rgb.into_color();
    let out: Srgb = hsl.lighten(factor).into_color();
    let out: Srgb<u8> = out.into_format();
    Color32::from_rgb(out.red, out.green, out.blue)
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Colours for one plotted series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub line: Color32,
    /// Translucent tint used for area fill and label backgrounds.
    pub fill: Color32,
    /// Point markers, a lighter tone of the line.
    pub marker: Color32,
}

impl SeriesStyle {
    pub fn from_base(line: Color32) -> Self {
        Self {
            line,
            fill: translucent(line, 0.15),
            marker: lighten(line, 0.35),
        }
    }

    /// Opacity of the fill tint, 0.0 – 1.0.
    pub fn fill_opacity(&self) -> f32 {
        f32::from(self.fill.a()) / 255.0
    }
}

/// High-contrast palette for a black background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub primary: SeriesStyle,
    pub compare: SeriesStyle,
    pub background: Color32,
    pub title: Color32,
    pub axis_text: Color32,
    pub grid: Color32,
}

impl Theme {
    /// Electric cyan vs. electric magenta.
    pub fn neon() -> Self {
        let c = |hex: &str, fallback: Color32| hex_color(hex).unwrap_or(fallback);
        Self {
            primary: SeriesStyle::from_base(c("#00FFFF", Color32::LIGHT_BLUE)),
            compare: SeriesStyle::from_base(c("#FF00FF", Color32::LIGHT_RED)),
            background: Color32::BLACK,
            title: Color32::WHITE,
            axis_text: c("#AAAAAA", Color32::GRAY),
            grid: c("#333333", Color32::DARK_GRAY),
        }
    }

    pub fn series_style(&self, slot: Slot) -> SeriesStyle {
        match slot {
            Slot::Primary => self.primary,
            Slot::Compare => self.compare,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(hex_color("#00FFFF"), Some(Color32::from_rgb(0, 255, 255)));
        assert_eq!(hex_color("ff00ff"), Some(Color32::from_rgb(255, 0, 255)));
        assert_eq!(hex_color("#zzz"), None);
    }

    #[test]
    fn fill_is_fifteen_percent_opaque() {
        let style = SeriesStyle::from_base(Color32::from_rgb(0, 255, 255));
        assert_eq!(style.fill.a(), 38);
        assert!((style.fill_opacity() - 0.15).abs() < 0.005);
    }

    #[test]
    fn lighten_moves_towards_white() {
        let base = Color32::from_rgb(255, 0, 255);
        let light = lighten(base, 0.5);
        assert!(light.r() >= 254);
        assert!(light.g() > 100);
        assert_eq!(lighten(Color32::WHITE, 0.5), Color32::WHITE);
    }

    #[test]
    fn neon_theme_uses_cyan_and_magenta() {
        let theme = Theme::neon();
        assert_eq!(theme.primary.line, Color32::from_rgb(0, 255, 255));
        assert_eq!(theme.compare.line, Color32::from_rgb(255, 0, 255));
        assert_eq!(theme.axis_text, Color32::from_rgb(0xAA, 0xAA, 0xAA));
        assert_eq!(theme.series_style(Slot::Compare), theme.compare);
    }
}
