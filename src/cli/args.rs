use clap::{Args, Parser, Subcommand};

/// Render the Mandelbrot set to a PNG. With no subcommand, the default
/// parameters are rendered to `./mandelbrot_fractal.png`.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct MandelbrotRendererArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Render the Mandelbrot set, optionally from a JSON parameter file.
    Render(RenderArgs),
    /// Render a horizontal gradient of a palette.
    ColorSwatch(ParameterFilePath),
}

#[derive(Debug, Args, Default)]
pub struct RenderArgs {
    /// JSON parameter file; any field left out takes its default value.
    pub params_path: Option<String>,

    /// Directory to write into, created if missing.
    #[clap(long, short)]
    pub output_dir: Option<String>,

    /// Write into a time-stamped subdirectory of the output directory.
    #[clap(long, short)]
    pub date_time_out: bool,

    /// Also write the resolved parameters and a diagnostics report.
    #[clap(long)]
    pub diagnostics: bool,
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,

    #[clap(long, short)]
    pub output_dir: Option<String>,
}
