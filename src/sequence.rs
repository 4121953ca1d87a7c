use crate::colors::Color;
use crate::format::format_color;
use crate::types::{ColorError, ColorSpace, Grayscale, Modifier, Spacing};

/// Largest point count [`RequestBuilder::build`] accepts.
pub const MAX_POINTS: usize = 1000;

/// A validated interpolation between two colors.
///
/// Describes everything needed to produce one result sequence: the two
/// endpoint colors, how many points to compute and how they are spaced, the
/// transforms applied to each interpolated color, and the color space the
/// results are written in.
///
/// A request is immutable. Build one with [`InterpolationRequest::builder`],
/// then call [`colors`](Self::colors) or [`render`](Self::render).
#[derive(Debug, Clone)]
pub struct InterpolationRequest {
    start: Color,
    end: Color,
    input_space: ColorSpace,
    output_space: ColorSpace,
    points: usize,
    modifier: Modifier,
    invert: bool,
    grayscale: Grayscale,
    spacing: Spacing,
}

impl InterpolationRequest {
    /// Creates a new request builder between `start` and `end`.
    pub fn builder(start: Color, end: Color) -> RequestBuilder {
        RequestBuilder::new(start, end)
    }

    /// Interpolation positions between start (0.0) and end (1.0).
    ///
    /// * `Inclusive` - `0, 1/(N+1), ..., N/(N+1), 1`
    /// * `Interior` - `1/(N+1), ..., N/(N+1)`
    /// * `Trailing` - `1/N, 2/N, ..., 1`
    pub fn fractions(&self) -> Vec<f64> {
        let n = self.points;
        let intervals = n.saturating_add(1);
        match self.spacing {
            Spacing::Inclusive => {
                let steps = intervals as f64;
                (0..=intervals).map(|i| i as f64 / steps).collect()
            }
            Spacing::Interior => {
                let steps = intervals as f64;
                (1..=n).map(|i| i as f64 / steps).collect()
            }
            Spacing::Trailing => {
                let steps = n as f64;
                (1..=n).map(|i| i as f64 / steps).collect()
            }
        }
    }

    /// Computes the transformed color at every fraction, in order.
    pub fn colors(&self) -> Vec<Color> {
        self.fractions()
            .into_iter()
            .map(|fraction| self.color_at(fraction))
            .collect()
    }

    /// Computes every color and formats it in the output color space.
    pub fn render(&self) -> Vec<String> {
        log::debug!(
            "interpolating {:?} -> {:?} ({} input) in {} points ({:?}), output {}",
            self.start,
            self.end,
            self.input_space,
            self.points,
            self.spacing,
            self.output_space
        );
        self.colors()
            .iter()
            .map(|color| format_color(color, self.output_space))
            .collect()
    }

    /// Interpolates at `fraction` and applies the configured transforms.
    ///
    /// Order: modifier, then invert, then grayscale.
    pub fn color_at(&self, fraction: f64) -> Color {
        let color = self.start.interpolate(&self.end, fraction);

        let color = match self.modifier {
            Modifier::None => color,
            Modifier::Brighter => color.brighter(),
            Modifier::Darker => color.darker(),
            Modifier::Saturated => color.saturate(),
            Modifier::Desaturated => color.desaturate(),
        };

        let color = if self.invert { color.invert() } else { color };

        let color = match self.grayscale {
            Grayscale::Off => color,
            Grayscale::Luminance => color.grayscale(),
            Grayscale::LegacyInvert => color.invert(),
        };

        log::trace!("fraction {fraction}: {color:?}");
        color
    }

    pub fn start(&self) -> Color {
        self.start
    }

    pub fn end(&self) -> Color {
        self.end
    }

    pub fn input_space(&self) -> ColorSpace {
        self.input_space
    }

    pub fn output_space(&self) -> ColorSpace {
        self.output_space
    }

    /// Requested point count `N`; see [`fractions`](Self::fractions) for how
    /// many colors it yields.
    pub fn points(&self) -> usize {
        self.points
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn grayscale(&self) -> Grayscale {
        self.grayscale
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }
}

/// Builder for constructing validated interpolation requests.
#[derive(Debug)]
pub struct RequestBuilder {
    start: Color,
    end: Color,
    input_space: ColorSpace,
    output_space: ColorSpace,
    points: usize,
    modifier: Modifier,
    invert: bool,
    grayscale: Grayscale,
    spacing: Spacing,
}

impl RequestBuilder {
    /// Creates a builder with one point, rgb in and out, and no transforms.
    pub fn new(start: Color, end: Color) -> Self {
        Self {
            start,
            end,
            input_space: ColorSpace::Rgb,
            output_space: ColorSpace::Rgb,
            points: 1,
            modifier: Modifier::None,
            invert: false,
            grayscale: Grayscale::Off,
            spacing: Spacing::default(),
        }
    }

    /// Records the space the endpoints were written in.
    pub fn input_space(mut self, space: ColorSpace) -> Self {
        self.input_space = space;
        self
    }

    /// Sets the space results are formatted in.
    pub fn output_space(mut self, space: ColorSpace) -> Self {
        self.output_space = space;
        self
    }

    /// Sets the point count `N`.
    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn grayscale(mut self, grayscale: Grayscale) -> Self {
        self.grayscale = grayscale;
        self
    }

    /// Default is [`Spacing::Inclusive`].
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    /// * `Range` - the point count is zero or above [`MAX_POINTS`]
    pub fn build(self) -> Result<InterpolationRequest, ColorError> {
        if !(1..=MAX_POINTS).contains(&self.points) {
            return Err(ColorError::Range {
                component: "point count",
                value: self.points as f64,
                allowed: "[1, 1000]",
            });
        }

        Ok(InterpolationRequest {
            start: self.start,
            end: self.end,
            input_space: self.input_space,
            output_space: self.output_space,
            points: self.points,
            modifier: self.modifier,
            invert: self.invert,
            grayscale: self.grayscale,
            spacing: self.spacing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};

    fn request(points: usize, spacing: Spacing) -> InterpolationRequest {
        InterpolationRequest::builder(BLACK, WHITE)
            .points(points)
            .spacing(spacing)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_rejects_zero_points() {
        let result = InterpolationRequest::builder(BLACK, WHITE).points(0).build();
        assert!(matches!(result, Err(ColorError::Range { .. })));
    }

    #[test]
    fn builder_rejects_too_many_points() {
        let result = InterpolationRequest::builder(BLACK, WHITE)
            .points(MAX_POINTS + 1)
            .build();
        assert!(matches!(result, Err(ColorError::Range { component: "point count", .. })));
        assert_eq!(request(MAX_POINTS, Spacing::Inclusive).fractions().len(), MAX_POINTS + 2);
    }

    #[test]
    fn inclusive_fractions_bracket_the_interior() {
        assert_eq!(request(3, Spacing::Inclusive).fractions(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn interior_fractions_exclude_endpoints() {
        assert_eq!(request(3, Spacing::Interior).fractions(), vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn trailing_single_point_is_the_end() {
        assert_eq!(request(1, Spacing::Trailing).fractions(), vec![1.0]);
    }

    #[test]
    fn legacy_grayscale_inverts_twice_with_invert() {
        let req = InterpolationRequest::builder(BLACK, WHITE)
            .points(1)
            .spacing(Spacing::Interior)
            .invert(true)
            .grayscale(Grayscale::LegacyInvert)
            .build()
            .unwrap();
        let plain = request(1, Spacing::Interior);
        assert_eq!(req.colors(), plain.colors());
    }
}
