use image::Rgb;
use iter_num_tools::lin_space;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::core::error::{RenderError, RenderResult};
use crate::core::interpolation::{
    validate_keyframe_inputs, InterpolationKeyframe, KeyframeInterpolator,
};

/**
 * Represents a single "keyframe" of the color map, pairing a
 * "query" with the color that should be produced at that query point.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorMapKeyFrame {
    pub query: f32,       // specify location of this color within the map; on [0,1]
    pub rgb_raw: [u8; 3], // [R, G, B]
}

/// Named palettes, plus an escape hatch for user-provided keyframes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub enum Palette {
    /// Magenta to yellow.
    #[default]
    Spring,
    Viridis,
    Greyscale,
    Custom(Vec<ColorMapKeyFrame>),
    /// Colors placed at evenly spaced queries, first at 0.0 and last at 1.0.
    Uniform(Vec<[u8; 3]>),
}

impl Palette {
    pub fn keyframes(&self) -> Vec<ColorMapKeyFrame> {
        let key = |query: f32, rgb_raw: [u8; 3]| ColorMapKeyFrame { query, rgb_raw };
        match self {
            Palette::Spring => vec![key(0.0, [255, 0, 255]), key(1.0, [255, 255, 0])],
            Palette::Viridis => vec![
                key(0.0, [68, 1, 84]),
                key(0.25, [59, 82, 139]),
                key(0.5, [33, 145, 140]),
                key(0.75, [94, 201, 98]),
                key(1.0, [253, 231, 37]),
            ],
            Palette::Greyscale => vec![key(0.0, [0, 0, 0]), key(1.0, [255, 255, 255])],
            Palette::Custom(keyframes) => keyframes.clone(),
            Palette::Uniform(colors) => with_uniform_spacing(
                &colors.iter().map(|rgb| key(0.0, *rgb)).collect::<Vec<_>>(),
            ),
        }
    }

    pub fn validate(&self) -> RenderResult<()> {
        let queries: Vec<f32> = self.keyframes().iter().map(|kf| kf.query).collect();
        validate_keyframe_inputs(&queries).map_err(RenderError::InvalidParameters)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ColorMapParams {
    pub palette: Palette,
    /// Color for points that never escape. When unset they take the top of the palette.
    pub interior_color_rgb: Option<[u8; 3]>,
}

pub trait ColorMapper {
    fn compute_pixel(&self, query: f32) -> Rgb<u8>;
}

/**
 * Piecewise linear color map, interpolating in RGB color space. This is
 * not "strictly correct" from a color standpoint, but it works well enough
 * in practice.
 */
#[derive(Clone, Debug)]
pub struct ColorMap {
    interpolator: KeyframeInterpolator<Vector3<f32>>,
}

impl ColorMap {
    pub fn new(keyframes: &[ColorMapKeyFrame]) -> Self {
        let internal_keyframes: Vec<InterpolationKeyframe<Vector3<f32>>> = keyframes
            .iter()
            .map(|kf| InterpolationKeyframe {
                input: kf.query,
                output: Vector3::new(
                    kf.rgb_raw[0] as f32,
                    kf.rgb_raw[1] as f32,
                    kf.rgb_raw[2] as f32,
                ),
            })
            .collect();

        Self {
            interpolator: KeyframeInterpolator::new(&internal_keyframes),
        }
    }

    pub fn from_palette(palette: &Palette) -> Self {
        Self::new(&palette.keyframes())
    }
}

impl ColorMapper for ColorMap {
    fn compute_pixel(&self, query: f32) -> Rgb<u8> {
        let color: Vector3<f32> = self.interpolator.evaluate(query);
        Rgb([
            color[0].round().clamp(0.0, 255.0) as u8,
            color[1].round().clamp(0.0, 255.0) as u8,
            color[2].round().clamp(0.0, 255.0) as u8,
        ])
    }
}

/**
 * Create a new keyframe vector, using the same colors, but uniformly spaced queries.
 * Fewer than two keys are returned unchanged, and fail validation later.
 */
pub fn with_uniform_spacing(old_keys: &[ColorMapKeyFrame]) -> Vec<ColorMapKeyFrame> {
    let mut new_keys = old_keys.to_vec();
    if new_keys.len() < 2 {
        return new_keys;
    }
    let queries = lin_space(0.0..=1.0, old_keys.len());
    for (query, key) in queries.zip(&mut new_keys) {
        key.query = query;
    }
    // `lin_space` can round the last query just below 1.0; validation needs it exact.
    if let Some(last) = new_keys.last_mut() {
        last.query = 1.0;
    }
    new_keys
}
