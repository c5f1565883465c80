use std::path::PathBuf;

use crate::cli::args::RenderArgs;
use crate::core::error::RenderResult;
use crate::core::file_io::{
    build_output_path_with_date_time, extract_base_name, maybe_date_time_string, FilePrefix,
    DEFAULT_FILE_BASE,
};
use crate::fractals::mandelbrot::{render_mandelbrot, IterationField, MandelbrotParams};

pub fn load_mandelbrot_params(params_path: &Option<String>) -> RenderResult<MandelbrotParams> {
    match params_path {
        Some(path) => {
            let params = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            log::info!("Loaded parameters from: {}", path);
            Ok(params)
        }
        None => Ok(MandelbrotParams::default()),
    }
}

/// Without a parameter file the image is `./mandelbrot_fractal.png`; with
/// one, the image takes the parameter file's base name.
pub fn build_file_prefix(args: &RenderArgs) -> RenderResult<FilePrefix> {
    let root = PathBuf::from(args.output_dir.as_deref().unwrap_or("."));
    let directory_path =
        build_output_path_with_date_time(&root, &maybe_date_time_string(args.date_time_out))?;
    let file_base = args
        .params_path
        .as_deref()
        .and_then(extract_base_name)
        .unwrap_or(DEFAULT_FILE_BASE)
        .to_owned();
    Ok(FilePrefix {
        directory_path,
        file_base,
    })
}

pub fn render_fractal(args: &RenderArgs) -> RenderResult<IterationField> {
    let params = load_mandelbrot_params(&args.params_path)?;
    let file_prefix = build_file_prefix(args)?;
    render_mandelbrot(&params, &file_prefix, args.diagnostics)
}
