//! Core types shared by the parser, interpolation engine and formatter.

use core::fmt;
use core::str::FromStr;

/// Color spaces understood on input and output.
///
/// The alpha variants carry a fourth opacity component. Note that the alpha
/// encoding differs between spaces, see [`crate::parse`] and [`crate::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Integer bytes `r g b`, each in 0-255.
    Rgb,
    /// Integer bytes `r g b a`.
    Rgba,
    /// Normalized floats `r g b`, each in 0.0-1.0.
    Srgb,
    /// Normalized floats `r g b a`.
    Srgba,
    /// Hue in degrees, saturation and brightness in 0.0-1.0.
    Hsb,
    /// HSB plus opacity.
    Hsba,
    /// `#rrggbb`.
    Web,
    /// `#rrggbb` with opacity.
    Weba,
    /// `rrggbb`, no leading `#`.
    Hex,
    /// `rrggbb` with opacity.
    Hexa,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 10] = [
        ColorSpace::Rgb,
        ColorSpace::Rgba,
        ColorSpace::Srgb,
        ColorSpace::Srgba,
        ColorSpace::Hsb,
        ColorSpace::Hsba,
        ColorSpace::Web,
        ColorSpace::Weba,
        ColorSpace::Hex,
        ColorSpace::Hexa,
    ];

    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Rgba => "rgba",
            ColorSpace::Srgb => "srgb",
            ColorSpace::Srgba => "srgba",
            ColorSpace::Hsb => "hsb",
            ColorSpace::Hsba => "hsba",
            ColorSpace::Web => "web",
            ColorSpace::Weba => "weba",
            ColorSpace::Hex => "hex",
            ColorSpace::Hexa => "hexa",
        }
    }

    /// Whether the space carries an opacity component.
    pub fn has_alpha(&self) -> bool {
        matches!(
            self,
            ColorSpace::Rgba
                | ColorSpace::Srgba
                | ColorSpace::Hsba
                | ColorSpace::Weba
                | ColorSpace::Hexa
        )
    }

    /// Whether colors in this space are written as a hexadecimal string.
    pub fn is_hex(&self) -> bool {
        matches!(
            self,
            ColorSpace::Web | ColorSpace::Weba | ColorSpace::Hex | ColorSpace::Hexa
        )
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ColorError::UnsupportedSpace(tag.to_string()))
    }
}

/// Post-interpolation brightness or saturation adjustment.
///
/// At most one modifier is active per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    /// Leave interpolated colors untouched.
    #[default]
    None,
    /// Scale HSB brightness up.
    Brighter,
    /// Scale HSB brightness down.
    Darker,
    /// Scale HSB saturation up.
    Saturated,
    /// Scale HSB saturation down.
    Desaturated,
}

impl FromStr for Modifier {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Modifier::None),
            "brighter" => Ok(Modifier::Brighter),
            "darker" => Ok(Modifier::Darker),
            "saturated" => Ok(Modifier::Saturated),
            "desaturated" => Ok(Modifier::Desaturated),
            _ => Err(ColorError::Parse {
                token: s.to_string(),
                expected: "brighter, darker, saturated, desaturated or nothing",
            }),
        }
    }
}

/// Which interpolation fractions are produced for a point count `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Start color, `N` intermediate colors, end color (`N + 2` results).
    #[default]
    Inclusive,

    /// Only the `N` colors strictly between start and end, at `i / (N + 1)`.
    Interior,

    /// `N` colors after the start, at `(i + 1) / N`, the last one being the end color.
    Trailing,
}

impl FromStr for Spacing {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "inclusive" => Ok(Spacing::Inclusive),
            "interior" => Ok(Spacing::Interior),
            "trailing" => Ok(Spacing::Trailing),
            _ => Err(ColorError::Parse {
                token: s.to_string(),
                expected: "inclusive, interior or trailing",
            }),
        }
    }
}

/// Grayscale projection applied as the last transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grayscale {
    /// Keep colors as they are.
    #[default]
    Off,

    /// Project onto gray using `0.21 r + 0.71 g + 0.07 b`.
    Luminance,

    /// Invert once more before formatting.
    ///
    /// This is what older host callers received when asking for grayscale.
    /// It does not produce gray colors.
    LegacyInvert,
}

impl FromStr for Grayscale {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "false" | "0" | "off" => Ok(Grayscale::Off),
            "true" | "1" | "luminance" => Ok(Grayscale::Luminance),
            "legacy" => Ok(Grayscale::LegacyInvert),
            _ => Err(ColorError::Parse {
                token: s.to_string(),
                expected: "true, false or legacy",
            }),
        }
    }
}

/// Errors raised while turning host input into formatted colors.
///
/// Every variant is fatal for the invocation; no partial results are produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// A token is not a number (or not a hex color).
    #[error("cannot parse {token:?}: expected {expected}")]
    Parse {
        token: String,
        expected: &'static str,
    },

    /// Wrong number of components for the declared color space.
    #[error("color space {space} expects {expected} value(s), found {found}")]
    Arity {
        space: ColorSpace,
        expected: &'static str,
        found: usize,
    },

    /// Unknown color space tag.
    #[error("unsupported color space {0:?}")]
    UnsupportedSpace(String),

    /// A numeric value lies outside its component's domain.
    #[error("{component} value {value} is outside {allowed}")]
    Range {
        component: &'static str,
        value: f64,
        allowed: &'static str,
    },

    /// The host did not provide a required parameter.
    #[error("missing host parameter {0:?}")]
    MissingParameter(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_space_tags_are_case_insensitive() {
        assert_eq!("RGBA".parse::<ColorSpace>(), Ok(ColorSpace::Rgba));
        assert_eq!(" hexa ".parse::<ColorSpace>(), Ok(ColorSpace::Hexa));
        for space in ColorSpace::ALL {
            assert_eq!(space.as_str().parse::<ColorSpace>(), Ok(space));
        }
    }

    #[test]
    fn unknown_color_space_is_rejected() {
        assert_eq!(
            "cmyk".parse::<ColorSpace>(),
            Err(ColorError::UnsupportedSpace("cmyk".into()))
        );
    }

    #[test]
    fn empty_modifier_means_none() {
        assert_eq!("".parse::<Modifier>(), Ok(Modifier::None));
        assert_eq!("Darker".parse::<Modifier>(), Ok(Modifier::Darker));
        assert!("dimmer".parse::<Modifier>().is_err());
    }

    #[test]
    fn grayscale_flag_accepts_booleans_and_legacy() {
        assert_eq!("TRUE".parse::<Grayscale>(), Ok(Grayscale::Luminance));
        assert_eq!("false".parse::<Grayscale>(), Ok(Grayscale::Off));
        assert_eq!("legacy".parse::<Grayscale>(), Ok(Grayscale::LegacyInvert));
        assert!("maybe".parse::<Grayscale>().is_err());
    }
}
