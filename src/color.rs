// Simple color struct: an RGB hue plus a CSS alpha channel in [0, 1],
// rendered into the canvas as an `rgba(...)` style string

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    // Pink accent used for particles and the links between them
    pub const ACCENT: Color = Color::from_u32(0xe76a8d);

    // Created from an unsigned 32 representing 0x00RRGGBB, fully opaque
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b, a: 1.0 }
    }

    // Same hue, alpha clamped into [0, 1]. NaN becomes fully transparent.
    pub fn with_alpha(self, alpha: f64) -> Color {
        Color {
            a: alpha.max(0.0).min(1.0),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_splits_channels() {
        assert_eq!(
            Color::from_u32(0x102030),
            Color {
                r: 0x10,
                g: 0x20,
                b: 0x30,
                a: 1.0
            }
        );
        assert_eq!((Color::ACCENT.r, Color::ACCENT.g, Color::ACCENT.b), (231, 106, 141));
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::ACCENT.with_alpha(-0.01).a, 0.0);
        assert_eq!(Color::ACCENT.with_alpha(1.5).a, 1.0);
        assert_eq!(Color::ACCENT.with_alpha(std::f64::NAN).a, 0.0);
        assert_eq!(Color::ACCENT.with_alpha(0.25).a, 0.25);
    }

    #[test]
    fn css_string() {
        assert_eq!(
            Color::ACCENT.with_alpha(0.5).to_css(),
            "rgba(231, 106, 141, 0.5)"
        );
    }
}
