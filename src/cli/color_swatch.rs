use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::args::ParameterFilePath;
use crate::core::{
    color_map::{ColorMap, ColorMapper, Palette},
    error::{RenderError, RenderResult},
    file_io::{extract_base_name, serialize_to_json, FilePrefix},
    image_utils::{save_png, LinearPixelMap},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ColorSwatchParams {
    /// [width, height]
    pub resolution: [u32; 2],
    pub palette: Palette,
}

/// Left edge is the bottom of the palette, right edge the top.
pub fn render_color_swatch(params: &ColorSwatchParams, file_prefix: &FilePrefix) -> RenderResult<()> {
    let [width, height] = params.resolution;
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidParameters(format!(
            "resolution must be positive, got {:?}",
            params.resolution
        )));
    }
    params.palette.validate()?;

    serialize_to_json(&file_prefix.with_suffix(".json"), params)?;

    let color_map = ColorMap::from_palette(&params.palette);
    let query_map = LinearPixelMap::new(width, 0.0, 1.0);
    let column_colors: Vec<image::Rgb<u8>> = (0..width)
        .map(|x| color_map.compute_pixel(query_map.map(x) as f32))
        .collect();
    let imgbuf = image::ImageBuffer::from_fn(width, height, |x, _| column_colors[x as usize]);

    save_png(&file_prefix.with_suffix(".png"), &imgbuf)
}

pub fn generate_color_swatch(args: &ParameterFilePath) -> RenderResult<()> {
    let params: ColorSwatchParams =
        serde_json::from_str(&std::fs::read_to_string(&args.params_path)?)?;

    let directory_path = PathBuf::from(args.output_dir.as_deref().unwrap_or("."));
    std::fs::create_dir_all(&directory_path)?;
    let file_prefix = FilePrefix {
        directory_path,
        file_base: extract_base_name(&args.params_path)
            .unwrap_or("color_swatch")
            .to_owned(),
    };
    render_color_swatch(&params, &file_prefix)
}
