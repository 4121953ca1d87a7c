//! Formatting [`Color`] values as host strings.
//!
//! Floats are written in their shortest round-trip form (`0.5`, `1.0`).
//! Opacity in `weba` and `hexa` output is a decimal token after the hex
//! digits, not a hex byte, unlike what the parser accepts.

use crate::colors::Color;
use crate::types::ColorSpace;

/// Formats `color` in the canonical text form of `space`.
pub fn format_color(color: &Color, space: ColorSpace) -> String {
    let body = match space {
        ColorSpace::Rgb | ColorSpace::Rgba => format!(
            "{} {} {}",
            to_byte(color.red()),
            to_byte(color.green()),
            to_byte(color.blue())
        ),
        ColorSpace::Srgb | ColorSpace::Srgba => {
            format!("{:?} {:?} {:?}", color.red(), color.green(), color.blue())
        }
        ColorSpace::Hsb | ColorSpace::Hsba => format!(
            "{:?} {:?} {:?}",
            color.hue(),
            color.saturation(),
            color.brightness()
        ),
        ColorSpace::Web | ColorSpace::Weba => format!("#{}", hex_digits(color)),
        ColorSpace::Hex | ColorSpace::Hexa => hex_digits(color),
    };

    if !space.has_alpha() {
        return body;
    }
    match space {
        ColorSpace::Rgba => format!("{body} {}", to_byte(color.opacity())),
        _ => format!("{body} {:?}", color.opacity()),
    }
}

fn hex_digits(color: &Color) -> String {
    format!(
        "{:02x}{:02x}{:02x}",
        to_byte(color.red()),
        to_byte(color.green()),
        to_byte(color.blue())
    )
}

/// Rounds a 0.0-1.0 channel to 0-255, half away from zero, saturating at 255.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_rounding_ties_go_up() {
        assert_eq!(to_byte(0.5), 128);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.0), 0);
    }

    #[test]
    fn floats_keep_a_decimal_point() {
        let c = Color::from_srgb(1.0, 0.5, 0.0, 1.0).unwrap();
        assert_eq!(format_color(&c, ColorSpace::Srgb), "1.0 0.5 0.0");
        assert_eq!(format_color(&c, ColorSpace::Srgba), "1.0 0.5 0.0 1.0");
    }

    #[test]
    fn hex_alpha_is_decimal() {
        let c = Color::from_rgb8(255, 0, 170, 0.25).unwrap();
        assert_eq!(format_color(&c, ColorSpace::Web), "#ff00aa");
        assert_eq!(format_color(&c, ColorSpace::Weba), "#ff00aa 0.25");
        assert_eq!(format_color(&c, ColorSpace::Hex), "ff00aa");
        assert_eq!(format_color(&c, ColorSpace::Hexa), "ff00aa 0.25");
        assert_eq!(format_color(&c, ColorSpace::Rgba), "255 0 170 64");
    }

    #[test]
    fn small_channels_are_zero_padded() {
        let c = Color::from_rgb8(1, 2, 3, 1.0).unwrap();
        assert_eq!(format_color(&c, ColorSpace::Web), "#010203");
    }
}
