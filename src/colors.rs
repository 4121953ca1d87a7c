//! The immutable [`Color`] value and its transforms.
//!
//! Colors are stored as `Srgba<f64>` with every channel in 0.0-1.0. HSB
//! access and the brightness/saturation modifiers go through `palette`'s
//! `Hsva` conversion. The modifier factors follow the host platform's color
//! API, which scales by 0.7 (down) or 1/0.7 (up).

use crate::types::ColorError;
use palette::encoding::Srgb as SrgbEncoding;
use palette::{Alpha, FromColor, Hsva, Mix, Srgb, Srgba};

/// Scale applied by [`Color::darker`]; [`Color::brighter`] uses its inverse.
pub const DARKER_BRIGHTER_FACTOR: f64 = 0.7;

/// Scale applied by [`Color::desaturate`]; [`Color::saturate`] uses its inverse.
pub const SATURATE_DESATURATE_FACTOR: f64 = 0.7;

/// Brightness given to pure black before [`Color::brighter`] scales it.
const BLACK_BRIGHTNESS_FLOOR: f64 = 0.05;

type Hsb = Hsva<SrgbEncoding, f64>;

/// An opaque, immutable color with normalized red, green, blue and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(Srgba<f64>);

pub const BLACK: Color = Color(Alpha {
    color: Srgb::<f64>::new(0.0, 0.0, 0.0),
    alpha: 1.0,
});

pub const WHITE: Color = Color(Alpha {
    color: Srgb::<f64>::new(1.0, 1.0, 1.0),
    alpha: 1.0,
});

impl Color {
    /// Creates a color from 8-bit channels and a normalized opacity.
    pub fn from_rgb8(red: u8, green: u8, blue: u8, opacity: f64) -> Result<Self, ColorError> {
        Self::from_srgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            opacity,
        )
    }

    /// Creates a color from normalized channels.
    ///
    /// # Errors
    /// `Range` if any component lies outside 0.0-1.0 (or is NaN).
    pub fn from_srgb(red: f64, green: f64, blue: f64, opacity: f64) -> Result<Self, ColorError> {
        Ok(Color(Srgba::<f64>::new(
            unit("red", red)?,
            unit("green", green)?,
            unit("blue", blue)?,
            unit("opacity", opacity)?,
        )))
    }

    /// Creates a color from hue (degrees), saturation, brightness and opacity.
    ///
    /// # Errors
    /// `Range` if hue is outside `[0, 360)` or any other component outside 0.0-1.0.
    pub fn from_hsb(
        hue: f64,
        saturation: f64,
        brightness: f64,
        opacity: f64,
    ) -> Result<Self, ColorError> {
        if !(0.0..360.0).contains(&hue) {
            return Err(ColorError::Range {
                component: "hue",
                value: hue,
                allowed: "[0, 360)",
            });
        }
        let hsb = Hsb::new(
            hue,
            unit("saturation", saturation)?,
            unit("brightness", brightness)?,
            unit("opacity", opacity)?,
        );
        Ok(Color(Srgba::<f64>::from_color(hsb)))
    }

    #[inline]
    pub fn red(&self) -> f64 {
        self.0.red
    }

    #[inline]
    pub fn green(&self) -> f64 {
        self.0.green
    }

    #[inline]
    pub fn blue(&self) -> f64 {
        self.0.blue
    }

    #[inline]
    pub fn opacity(&self) -> f64 {
        self.0.alpha
    }

    /// Hue in degrees, always in `[0, 360)`. Grays report 0.
    pub fn hue(&self) -> f64 {
        wrap_hue(self.to_hsb().hue.into_positive_degrees())
    }

    pub fn saturation(&self) -> f64 {
        self.to_hsb().saturation
    }

    pub fn brightness(&self) -> f64 {
        self.to_hsb().value
    }

    /// Linear per-channel interpolation towards `other`, opacity included.
    ///
    /// Fractions at or below 0 return `self`, at or above 1 return `other`
    /// unchanged.
    pub fn interpolate(&self, other: &Color, fraction: f64) -> Color {
        if fraction <= 0.0 {
            return *self;
        }
        if fraction >= 1.0 {
            return *other;
        }
        Color(self.0.mix(other.0, fraction))
    }

    pub fn brighter(&self) -> Color {
        self.derive(1.0, 1.0 / DARKER_BRIGHTER_FACTOR)
    }

    pub fn darker(&self) -> Color {
        self.derive(1.0, DARKER_BRIGHTER_FACTOR)
    }

    pub fn saturate(&self) -> Color {
        self.derive(1.0 / SATURATE_DESATURATE_FACTOR, 1.0)
    }

    pub fn desaturate(&self) -> Color {
        self.derive(SATURATE_DESATURATE_FACTOR, 1.0)
    }

    /// Complements each RGB channel, opacity unchanged.
    pub fn invert(&self) -> Color {
        Color(Srgba::<f64>::new(
            1.0 - self.0.red,
            1.0 - self.0.green,
            1.0 - self.0.blue,
            self.0.alpha,
        ))
    }

    /// Projects onto gray with the `0.21 r + 0.71 g + 0.07 b` weights.
    pub fn grayscale(&self) -> Color {
        let gray = (0.21 * self.0.red + 0.71 * self.0.green + 0.07 * self.0.blue).clamp(0.0, 1.0);
        Color(Srgba::<f64>::new(gray, gray, gray, self.0.alpha))
    }

    fn to_hsb(self) -> Hsb {
        Hsb::from_color(self.0)
    }

    /// Scales HSB saturation and brightness, clamping both to 0.0-1.0.
    fn derive(&self, saturation_factor: f64, brightness_factor: f64) -> Color {
        let hsb = self.to_hsb();
        let mut brightness = hsb.value;
        if brightness == 0.0 && brightness_factor > 1.0 {
            brightness = BLACK_BRIGHTNESS_FLOOR;
        }
        let saturation = (hsb.saturation * saturation_factor).clamp(0.0, 1.0);
        let brightness = (brightness * brightness_factor).clamp(0.0, 1.0);
        Color(Srgba::<f64>::from_color(Hsb::new(
            hsb.hue,
            saturation,
            brightness,
            hsb.alpha,
        )))
    }
}

fn unit(component: &'static str, value: f64) -> Result<f64, ColorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::Range {
            component,
            value,
            allowed: "[0, 1]",
        })
    }
}

// Rounding can push a tiny negative hue up to exactly 360.
fn wrap_hue(degrees: f64) -> f64 {
    if degrees >= 360.0 { degrees - 360.0 } else { degrees }
}
