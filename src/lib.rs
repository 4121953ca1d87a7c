#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: Immutable color value with normalized red, green, blue and opacity
//! - **`ColorSpace`**: Textual encoding of a color (`rgb`, `srgb`, `hsb`, `web`, `hex`, each with an alpha variant)
//! - **`InterpolationRequest`**: Start and end colors, point count, transforms and output space
//! - **`RequestBuilder`**: Validating builder for requests
//! - **`Spacing`**: Which interpolation fractions a point count produces
//! - **`Modifier`**: Optional brighter/darker/saturated/desaturated adjustment
//! - **`Grayscale`**: Optional gray projection (or the legacy double invert)
//! - **`MacroHost`**: Trait to implement for the macro namespace of your host
//!
//! The pipeline is `parse_color` → `InterpolationRequest::colors` → `format_color`.
//! `interpolate_colors` runs it against a `MacroHost`.

// Re-export Srgba from palette for user convenience
pub use palette::Srgba;

pub mod types;
pub mod colors;
pub mod parse;
pub mod format;
pub mod sequence;
pub mod host;

pub use colors::{BLACK, Color, WHITE};
pub use format::format_color;
pub use host::{MacroHost, MemoryHost, interpolate_colors, read_request};
pub use parse::parse_color;
pub use sequence::{InterpolationRequest, MAX_POINTS, RequestBuilder};
pub use types::{ColorError, ColorSpace, Grayscale, Modifier, Spacing};
