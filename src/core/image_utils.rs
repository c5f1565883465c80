use num::complex::Complex64;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::core::error::{RenderError, RenderResult};

/**
 * Fully specifies both the resolution of the sample grid and the rectangle of
 * the complex plane that it covers. Both edges of each axis are sampled.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridSpecification {
    /// [width, height] in samples (and in pixels of the output image).
    pub resolution: [u32; 2],
    /// [min, max] of the real axis.
    pub real_range: [f64; 2],
    /// [min, max] of the imaginary axis.
    pub imag_range: [f64; 2],
}

impl Default for GridSpecification {
    fn default() -> Self {
        GridSpecification {
            resolution: [1024, 1024],
            real_range: [-2.0, 1.0],
            imag_range: [-1.5, 1.5],
        }
    }
}

impl GridSpecification {
    pub fn width(&self) -> u32 {
        self.resolution[0]
    }

    pub fn height(&self) -> u32 {
        self.resolution[1]
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.width() == 0 || self.height() == 0 {
            return Err(RenderError::InvalidParameters(format!(
                "resolution must be positive, got {:?}",
                self.resolution
            )));
        }
        for range in [self.real_range, self.imag_range] {
            if !range.iter().all(|x| x.is_finite()) {
                return Err(RenderError::InvalidParameters(format!(
                    "plane bounds must be finite, got {:?}",
                    range
                )));
            }
        }
        Ok(())
    }

    pub fn real_samples(&self) -> Vec<f64> {
        LinearPixelMap::new(self.width(), self.real_range[0], self.real_range[1]).samples()
    }

    pub fn imag_samples(&self) -> Vec<f64> {
        LinearPixelMap::new(self.height(), self.imag_range[0], self.imag_range[1]).samples()
    }
}

#[derive(Clone, Debug)]
/**
 * Maps from a pixel index onto one axis of the complex plane.
 */
pub struct LinearPixelMap {
    n: u32,
    x0: f64,
    x1: f64,
    slope: f64,
}

impl LinearPixelMap {
    /**
     * @param n: number of pixels spanned by [x0,x1]
     * @param x0: output of the map at 0
     * @param x1: output of the map at n-1
     */
    pub fn new(n: u32, x0: f64, x1: f64) -> LinearPixelMap {
        assert!(n > 0);
        let slope = if n > 1 {
            (x1 - x0) / ((n - 1) as f64)
        } else {
            0.0
        };
        LinearPixelMap { n, x0, x1, slope }
    }

    // Map from pixel (integer) to point (float). The last pixel lands exactly on `x1`.
    pub fn map(&self, index: u32) -> f64 {
        if index + 1 == self.n && self.n > 1 {
            self.x1
        } else {
            self.x0 + self.slope * (index as f64)
        }
    }

    pub fn samples(&self) -> Vec<f64> {
        (0..self.n).map(|i| self.map(i)).collect()
    }
}

/// Immutable `height x width` sampling of the complex plane, stored row-major:
/// `values[row][col] = real[col] + i * imag[row]`.
#[derive(Clone, Debug)]
pub struct ComplexGrid {
    values: Vec<Vec<Complex64>>,
}

impl ComplexGrid {
    pub fn new(spec: &GridSpecification) -> ComplexGrid {
        let real = spec.real_samples();
        let values = spec
            .imag_samples()
            .into_iter()
            .map(|im| real.iter().map(|&re| Complex64::new(re, im)).collect())
            .collect();
        ComplexGrid { values }
    }

    /// (height, width)
    pub fn shape(&self) -> (usize, usize) {
        (
            self.values.len(),
            self.values.first().map_or(0, |row| row.len()),
        )
    }

    pub fn rows(&self) -> &[Vec<Complex64>] {
        &self.values
    }

    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.values[row][col]
    }
}

/**
 * Applies `pixel_renderer` to every point in the grid, producing a buffer of
 * identical shape. Rows are evaluated in parallel; each cell is independent, so
 * the result does not depend on scheduling.
 */
pub fn generate_scalar_field<T, F>(grid: &ComplexGrid, pixel_renderer: F) -> Vec<Vec<T>>
where
    T: Clone + Default + Send,
    F: Fn(&Complex64) -> T + std::marker::Sync,
{
    let (height, width) = grid.shape();
    let mut raw_data: Vec<Vec<T>> = vec![vec![T::default(); width]; height];
    raw_data
        .par_iter_mut()
        .enumerate()
        .for_each(|(row_index, row)| {
            let grid_row = &grid.rows()[row_index];
            row.iter_mut()
                .zip(grid_row.iter())
                .for_each(|(elem, point)| *elem = pixel_renderer(point));
        });
    raw_data
}

/// Writes a row-major buffer as an RGB image, one pixel per cell.
pub fn write_image<T, F>(path: &Path, data: &[Vec<T>], color: F) -> RenderResult<()>
where
    F: Fn(&T) -> image::Rgb<u8>,
{
    let height = data.len() as u32;
    let width = data.first().map_or(0, |row| row.len()) as u32;
    let imgbuf = image::ImageBuffer::from_fn(width, height, |x, y| {
        color(&data[y as usize][x as usize])
    });
    save_png(path, &imgbuf)
}

/// Encodes as PNG regardless of the file extension. The writer is flushed
/// explicitly so that a failed final write is reported.
pub fn save_png(path: &Path, imgbuf: &image::RgbImage) -> RenderResult<()> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
    imgbuf.write_to(&mut writer, image::ImageOutputFormat::Png)?;
    writer.flush()?;
    log::info!("Wrote image file to: {}", path.display());
    Ok(())
}
