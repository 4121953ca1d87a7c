//! Command line harness for colorterp.
//!
//! Takes the host parameters positionally, in the order the host passes them,
//! and prints each result as `colorN=value`.
//!
//! Usage:
//!   colorterp rgb rgb "0 0 0" "255 255 255" 4
//!   colorterp web hsb "#ff0000" "#0000ff" 3 darker true false --spacing interior

use clap::Parser;
use colorterp::host::{self, MacroHost, MemoryHost};

/// Interpolate colors between a start and an end color.
#[derive(Parser, Debug)]
#[command(name = "colorterp", version)]
#[command(about = "Color space conversion and linear color interpolation")]
struct Args {
    /// Input color space (rgb, rgba, srgb, srgba, hsb, hsba, web, weba, hex, hexa)
    input_space: String,

    /// Output color space
    output_space: String,

    /// Start color, e.g. "0 0 0" or "#000000"
    start: String,

    /// End color
    end: String,

    /// Number of points to interpolate
    points: String,

    /// brighter, darker, saturated or desaturated
    #[arg(default_value = "")]
    modifier: String,

    /// Invert the interpolated colors (true/false)
    #[arg(default_value = "false")]
    invert: String,

    /// Grayscale projection (true/false/legacy)
    #[arg(default_value = "false")]
    grayscale: String,

    /// Fraction spacing: inclusive, interior or trailing
    #[arg(long, default_value = "inclusive")]
    spacing: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let mut macros = MemoryHost::new()
        .with(host::INPUT_SPACE, &args.input_space)
        .with(host::OUTPUT_SPACE, &args.output_space)
        .with(host::START_COLOR, &args.start)
        .with(host::END_COLOR, &args.end)
        .with(host::POINTS, &args.points)
        .with(host::MODIFIER, &args.modifier)
        .with(host::INVERT, &args.invert)
        .with(host::GRAYSCALE, &args.grayscale)
        .with(host::SPACING, &args.spacing);

    let count = host::interpolate_colors(&mut macros)?;

    for i in 0..count {
        let name = host::result_name(i);
        let value = macros.get(&name).unwrap_or_default();
        println!("{name}={value}");
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "colorterp=trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
