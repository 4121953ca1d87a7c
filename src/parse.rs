//! Parsing host strings into [`Color`] values.
//!
//! Numeric spaces are whitespace-delimited component lists. Hex spaces take a
//! hex color (or a CSS color name) followed by an optional decimal opacity.
//!
//! Alpha is not encoded the same way everywhere:
//! - `rgba`: the fourth integer is used as opacity without scaling, so only
//!   `0` and `1` are valid.
//! - `srgba`, `hsba`: a float in 0.0-1.0.
//! - hex spaces: either embedded as the last digit pair (`#rrggbbaa`, divided
//!   by 255) or a separate decimal token, which multiplies any embedded alpha.

use core::num::{IntErrorKind, ParseIntError};

use crate::colors::Color;
use crate::types::{ColorError, ColorSpace};
use heapless::Vec;
use palette::Srgba;

/// Most components any color space takes.
const MAX_TOKENS: usize = 4;

/// Parses `input` as a color written in `space`.
///
/// # Errors
/// * `Arity` - wrong number of components for `space`
/// * `Parse` - a component is not a number or not a hex color
/// * `Range` - a component lies outside its domain
pub fn parse_color(input: &str, space: ColorSpace) -> Result<Color, ColorError> {
    let tokens = tokenize(input, space)?;
    log::trace!("parsing {:?} as {}", tokens.as_slice(), space);

    match space {
        ColorSpace::Rgb | ColorSpace::Rgba => {
            let red = parse_byte("red", tokens[0])?;
            let green = parse_byte("green", tokens[1])?;
            let blue = parse_byte("blue", tokens[2])?;
            let opacity = match tokens.get(3) {
                Some(alpha) => f64::from(parse_byte("opacity", alpha)?),
                None => 1.0,
            };
            Color::from_rgb8(red, green, blue, opacity)
        }
        ColorSpace::Srgb | ColorSpace::Srgba => Color::from_srgb(
            parse_float(tokens[0])?,
            parse_float(tokens[1])?,
            parse_float(tokens[2])?,
            optional_opacity(&tokens, 3)?,
        ),
        ColorSpace::Hsb | ColorSpace::Hsba => Color::from_hsb(
            parse_float(tokens[0])?,
            parse_float(tokens[1])?,
            parse_float(tokens[2])?,
            optional_opacity(&tokens, 3)?,
        ),
        ColorSpace::Web | ColorSpace::Weba | ColorSpace::Hex | ColorSpace::Hexa => {
            let rgba = parse_hex_color(tokens[0])?;
            let opacity = optional_opacity(&tokens, 1)?;
            Color::from_srgb(
                f64::from(rgba.red) / 255.0,
                f64::from(rgba.green) / 255.0,
                f64::from(rgba.blue) / 255.0,
                f64::from(rgba.alpha) / 255.0 * opacity,
            )
        }
    }
}

/// Accepted token counts for a color space, with a human readable form.
fn arity(space: ColorSpace) -> (usize, usize, &'static str) {
    if space.is_hex() {
        (1, 2, "1 or 2")
    } else if space.has_alpha() {
        (4, 4, "4")
    } else {
        (3, 3, "3")
    }
}

fn tokenize(input: &str, space: ColorSpace) -> Result<Vec<&str, MAX_TOKENS>, ColorError> {
    let (min, max, expected) = arity(space);
    let found = input.split_whitespace().count();
    if found < min || found > max {
        return Err(ColorError::Arity {
            space,
            expected,
            found,
        });
    }

    let mut tokens = Vec::new();
    for token in input.split_whitespace() {
        if tokens.push(token).is_err() {
            return Err(ColorError::Arity {
                space,
                expected,
                found,
            });
        }
    }
    Ok(tokens)
}

fn parse_byte(component: &'static str, token: &str) -> Result<u8, ColorError> {
    let value: i64 = token.parse().map_err(|e: ParseIntError| match e.kind() {
        // Well-formed but too large for any channel.
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ColorError::Range {
            component,
            value: token.parse().unwrap_or(f64::NAN),
            allowed: "[0, 255]",
        },
        _ => ColorError::Parse {
            token: token.to_string(),
            expected: "an integer",
        },
    })?;
    u8::try_from(value).map_err(|_| ColorError::Range {
        component,
        value: value as f64,
        allowed: "[0, 255]",
    })
}

fn parse_float(token: &str) -> Result<f64, ColorError> {
    token.parse().map_err(|_| ColorError::Parse {
        token: token.to_string(),
        expected: "a number",
    })
}

fn optional_opacity(tokens: &[&str], index: usize) -> Result<f64, ColorError> {
    let Some(token) = tokens.get(index) else {
        return Ok(1.0);
    };
    let opacity = parse_float(token)?;
    if (0.0..=1.0).contains(&opacity) {
        Ok(opacity)
    } else {
        Err(ColorError::Range {
            component: "opacity",
            value: opacity,
            allowed: "[0, 1]",
        })
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (prefix `#`, `0x` or none)
/// or a CSS color name.
fn parse_hex_color(token: &str) -> Result<Srgba<u8>, ColorError> {
    let invalid = || ColorError::Parse {
        token: token.to_string(),
        expected: "a hex color or color name",
    };

    let lower = token.to_ascii_lowercase();
    let digits = match lower.strip_prefix('#').or_else(|| lower.strip_prefix("0x")) {
        Some(digits) => digits,
        None => {
            if let Some(named) = palette::named::from_str(&lower) {
                return Ok(Srgba::<u8>::new(named.red, named.green, named.blue, 255));
            }
            &lower
        }
    };

    let bytes = digits.as_bytes();
    let nibble = |i: usize| parse_hex_digit(bytes[i]).map(|d| d << 4 | d);
    let byte = |i: usize| Some(parse_hex_digit(bytes[i])? << 4 | parse_hex_digit(bytes[i + 1])?);

    let rgba = match bytes.len() {
        3 => (nibble(0), nibble(1), nibble(2), Some(255)),
        4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
        6 => (byte(0), byte(2), byte(4), Some(255)),
        8 => (byte(0), byte(2), byte(4), byte(6)),
        _ => return Err(invalid()),
    };
    match rgba {
        (Some(red), Some(green), Some(blue), Some(alpha)) => {
            Ok(Srgba::<u8>::new(red, green, blue, alpha))
        }
        _ => Err(invalid()),
    }
}

const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_split_on_any_whitespace() {
        let tokens = tokenize("  1\t2   3 ", ColorSpace::Rgb).unwrap();
        assert_eq!(tokens.as_slice(), &["1", "2", "3"]);
    }

    #[test]
    fn too_many_tokens_is_arity_error() {
        assert_eq!(
            tokenize("1 2 3 4 5", ColorSpace::Rgba),
            Err(ColorError::Arity {
                space: ColorSpace::Rgba,
                expected: "4",
                found: 5,
            })
        );
    }

    #[test]
    fn arity_follows_space_family() {
        assert_eq!(arity(ColorSpace::Hsb).0, 3);
        assert_eq!(arity(ColorSpace::Srgba).0, 4);
        assert_eq!(arity(ColorSpace::Weba), (1, 2, "1 or 2"));
        assert_eq!(arity(ColorSpace::Hex), (1, 2, "1 or 2"));
    }

    #[test]
    fn short_hex_expands_nibbles() {
        assert_eq!(parse_hex_color("#f0a").unwrap(), Srgba::<u8>::new(0xff, 0x00, 0xaa, 0xff));
        assert_eq!(parse_hex_color("0x12345678").unwrap(), Srgba::<u8>::new(0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn color_names_resolve() {
        assert_eq!(parse_hex_color("SteelBlue").unwrap(), Srgba::<u8>::new(70, 130, 180, 255));
    }

    #[test]
    fn non_hex_digits_are_rejected() {
        assert!(matches!(parse_hex_color("#ggg"), Err(ColorError::Parse { .. })));
        assert!(matches!(parse_hex_color("#12345"), Err(ColorError::Parse { .. })));
        assert!(matches!(parse_hex_color("#ééé"), Err(ColorError::Parse { .. })));
    }
}
