//! Shared test infrastructure for colorterp integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use colorterp::host::{self, MemoryHost};
use colorterp::{Color, ColorSpace, parse_color};

// ============================================================================
// Color Construction
// ============================================================================

pub fn rgb(input: &str) -> Color {
    parse_color(input, ColorSpace::Rgb).unwrap()
}

pub fn srgb(red: f64, green: f64, blue: f64) -> Color {
    Color::from_srgb(red, green, blue, 1.0).unwrap()
}

// ============================================================================
// Mock Host
// ============================================================================

/// Host populated with the required parameters for an rgb to rgb request
pub fn rgb_host(start: &str, end: &str, points: &str) -> MemoryHost {
    MemoryHost::new()
        .with(host::INPUT_SPACE, "rgb")
        .with(host::OUTPUT_SPACE, "rgb")
        .with(host::START_COLOR, start)
        .with(host::END_COLOR, end)
        .with(host::POINTS, points)
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Color, b: Color) -> bool {
    colors_equal_epsilon(a, b, 1e-9)
}

/// Compare two colors with custom epsilon
pub fn colors_equal_epsilon(a: Color, b: Color, epsilon: f64) -> bool {
    (a.red() - b.red()).abs() < epsilon
        && (a.green() - b.green()).abs() < epsilon
        && (a.blue() - b.blue()).abs() < epsilon
        && (a.opacity() - b.opacity()).abs() < epsilon
}
