/// Accent blue used for the particles, dots and borders.
pub const ACCENT: (u8, u8, u8) = (59, 130, 246);
/// Slate used as the second gradient stop.
pub const SLATE: (u8, u8, u8) = (75, 85, 99);

/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Left-to-right gradient between two colors at the given opacity.
pub fn gradient_css(from: (u8, u8, u8), to: (u8, u8, u8), alpha: f64) -> String {
    format!(
        "linear-gradient(to right, {}, {})",
        rgba_css(from.0, from.1, from.2, alpha),
        rgba_css(to.0, to.1, to.2, alpha)
    )
}

#[cfg(test)]
mod tests {
    use super::{ACCENT, SLATE, gradient_css, rgba_css};

    #[test]
    fn formats_rgba() {
        assert_eq!(rgba_css(59, 130, 246, 0.5), "rgba(59,130,246,0.5)");
    }

    #[test]
    fn formats_gradient() {
        assert_eq!(
            gradient_css(ACCENT, SLATE, 1.0),
            "linear-gradient(to right, rgba(59,130,246,1), rgba(75,85,99,1))"
        );
    }
}
