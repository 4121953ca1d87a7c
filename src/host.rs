//! Boundary with the macro host.
//!
//! The host stores named string values (macros). [`interpolate_colors`] reads
//! the request parameters from it, runs the pipeline, and writes one result
//! per color as `color1`, `color2`, ...

use std::collections::HashMap;

use crate::parse::parse_color;
use crate::sequence::InterpolationRequest;
use crate::types::{ColorError, ColorSpace, Grayscale, Modifier, Spacing};

pub const INPUT_SPACE: &str = "icspace";
pub const OUTPUT_SPACE: &str = "rcspace";
pub const START_COLOR: &str = "scolor";
pub const END_COLOR: &str = "ecolor";
pub const POINTS: &str = "icolors";
pub const MODIFIER: &str = "luminance";
pub const INVERT: &str = "inverse";
pub const GRAYSCALE: &str = "grayscale";
pub const SPACING: &str = "spacing";

/// Prefix of the result names; the first result is `color1`.
pub const RESULT_PREFIX: &str = "color";

/// Trait for abstracting the host's macro namespace.
///
/// Implement this for the embedding environment to let
/// [`interpolate_colors`] read its parameters and publish results.
pub trait MacroHost {
    /// Returns the value of the named parameter, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Stores a named result.
    fn set(&mut self, name: &str, value: &str);
}

/// In-memory macro namespace.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    macros: HashMap<String, String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, builder style.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }
}

impl MacroHost for MemoryHost {
    fn get(&self, name: &str) -> Option<String> {
        self.macros.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.macros.insert(name.to_string(), value.to_string());
    }
}

/// Reads a request from `host`, interpolates, and writes the results back.
///
/// Returns the number of results written. Nothing is written on error.
pub fn interpolate_colors<H: MacroHost + ?Sized>(host: &mut H) -> Result<usize, ColorError> {
    let request = read_request(host)?;
    let results = request.render();
    write_results(host, &results);
    log::debug!("wrote {} results", results.len());
    Ok(results.len())
}

/// Builds an [`InterpolationRequest`] from the host's parameters.
///
/// # Errors
/// * `MissingParameter` - a color space, endpoint or point count is unset
/// * anything [`parse_color`] or the request builder reports
pub fn read_request<H: MacroHost + ?Sized>(host: &H) -> Result<InterpolationRequest, ColorError> {
    let input_space: ColorSpace = required(host, INPUT_SPACE)?.parse()?;
    let output_space: ColorSpace = required(host, OUTPUT_SPACE)?.parse()?;
    let start = parse_color(&required(host, START_COLOR)?, input_space)?;
    let end = parse_color(&required(host, END_COLOR)?, input_space)?;
    let points = parse_points(&required(host, POINTS)?)?;

    let modifier: Modifier = optional(host, MODIFIER).parse()?;
    let invert = parse_flag(&optional(host, INVERT))?;
    let grayscale: Grayscale = optional(host, GRAYSCALE).parse()?;
    let spacing: Spacing = optional(host, SPACING).parse()?;

    InterpolationRequest::builder(start, end)
        .input_space(input_space)
        .output_space(output_space)
        .points(points)
        .modifier(modifier)
        .invert(invert)
        .grayscale(grayscale)
        .spacing(spacing)
        .build()
}

/// Writes `results` as `color1..colorN`.
pub fn write_results<H: MacroHost + ?Sized>(host: &mut H, results: &[String]) {
    for (i, value) in results.iter().enumerate() {
        host.set(&result_name(i), value);
    }
}

/// Name of the result at zero-based `index`.
pub fn result_name(index: usize) -> String {
    format!("{RESULT_PREFIX}{}", index + 1)
}

/// Parses a boolean host flag. Empty means false.
pub fn parse_flag(value: &str) -> Result<bool, ColorError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" => Ok(false),
        "true" | "1" => Ok(true),
        _ => Err(ColorError::Parse {
            token: value.to_string(),
            expected: "true or false",
        }),
    }
}

fn parse_points(value: &str) -> Result<usize, ColorError> {
    value.trim().parse().map_err(|_| ColorError::Parse {
        token: value.to_string(),
        expected: "a non-negative integer point count",
    })
}

fn required<H: MacroHost + ?Sized>(host: &H, name: &'static str) -> Result<String, ColorError> {
    host.get(name).ok_or(ColorError::MissingParameter(name))
}

fn optional<H: MacroHost + ?Sized>(host: &H, name: &str) -> String {
    host.get(name).unwrap_or_default()
}
