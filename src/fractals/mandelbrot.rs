use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::core::{
    color_map::ColorMapParams,
    error::RenderResult,
    file_io::{serialize_to_json, FilePrefix},
    histogram::Histogram,
    image_utils::{generate_scalar_field, write_image, ComplexGrid, GridSpecification},
    lookup_table::EscapeCountLookupTable,
    stopwatch::Stopwatch,
};

use super::quadratic_map::{ConvergenceParams, QuadraticMapSequence};

const DIAGNOSTICS_HISTOGRAM_BIN_COUNT: usize = 16;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct MandelbrotParams {
    pub grid: GridSpecification,
    pub convergence_params: ConvergenceParams,
    pub color_map: ColorMapParams,
}

impl MandelbrotParams {
    pub fn validate(&self) -> RenderResult<()> {
        self.grid.validate()?;
        self.convergence_params.validate()?;
        self.color_map.palette.validate()
    }
}

/// Escape count for every sample of the grid, `height x width`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationField {
    pub counts: Vec<Vec<u32>>,
    pub max_iter_count: u32,
}

impl IterationField {
    pub fn compute(grid: &ComplexGrid, convergence_params: &ConvergenceParams) -> IterationField {
        let counts = generate_scalar_field(grid, |point| {
            QuadraticMapSequence::escape_count(point, convergence_params)
        });
        IterationField {
            counts,
            max_iter_count: convergence_params.max_iter_count,
        }
    }

    /// (height, width)
    pub fn shape(&self) -> (usize, usize) {
        (
            self.counts.len(),
            self.counts.first().map_or(0, |row| row.len()),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &u32> {
        self.counts.iter().flatten()
    }

    pub fn summary(&self) -> FieldSummary {
        let mut summary = FieldSummary {
            min_count: u32::MAX,
            max_count: 0,
            interior_count: 0,
            total_count: 0,
        };
        for &count in self.iter() {
            summary.min_count = summary.min_count.min(count);
            summary.max_count = summary.max_count.max(count);
            summary.total_count += 1;
            if count == self.max_iter_count {
                summary.interior_count += 1;
            }
        }
        if summary.total_count == 0 {
            summary.min_count = 0;
        }
        summary
    }

    pub fn histogram(&self, num_bins: usize) -> Histogram {
        let mut histogram = Histogram::new(num_bins, self.max_iter_count);
        self.iter().for_each(|&count| histogram.insert(count));
        histogram
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSummary {
    pub min_count: u32,
    pub max_count: u32,
    /// Samples that never escaped.
    pub interior_count: usize,
    pub total_count: usize,
}

impl FieldSummary {
    pub fn display<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Iteration field:")?;
        writeln!(writer, "  samples: {}", self.total_count)?;
        writeln!(writer, "  escape count range: [{}, {}]", self.min_count, self.max_count)?;
        writeln!(writer, "  interior samples: {}", self.interior_count)?;
        Ok(())
    }
}

/// Grid -> iteration field -> color -> PNG at `<prefix>.png`. With
/// `write_diagnostics` the resolved parameters and timing / histogram
/// data are written next to the image.
pub fn render_mandelbrot(
    params: &MandelbrotParams,
    file_prefix: &FilePrefix,
    write_diagnostics: bool,
) -> RenderResult<IterationField> {
    params.validate()?;
    let mut stopwatch = Stopwatch::new("Mandelbrot Render");

    let grid = ComplexGrid::new(&params.grid);
    stopwatch.record_split("build complex grid");

    let field = IterationField::compute(&grid, &params.convergence_params);
    stopwatch.record_split("compute iteration field");

    let summary = field.summary();
    let color_table = EscapeCountLookupTable::new(
        &params.color_map,
        [summary.min_count, summary.max_count],
        field.max_iter_count,
    );
    stopwatch.record_split("build color table");

    write_image(&file_prefix.with_suffix(".png"), &field.counts, |count| {
        color_table.lookup(*count)
    })?;
    stopwatch.record_split("write PNG");

    log::info!(
        "Rendered {}x{} samples; escape counts on [{}, {}], {} interior",
        params.grid.width(),
        params.grid.height(),
        summary.min_count,
        summary.max_count,
        summary.interior_count
    );

    if write_diagnostics {
        serialize_to_json(&file_prefix.with_suffix(".json"), params)?;
        let mut diagnostics_file = file_prefix.create_file_with_suffix("_diagnostics.txt")?;
        stopwatch.display(&mut diagnostics_file)?;
        summary.display(&mut diagnostics_file)?;
        field
            .histogram(DIAGNOSTICS_HISTOGRAM_BIN_COUNT)
            .display(&mut diagnostics_file)?;
        diagnostics_file.flush()?;
        log::info!(
            "Wrote diagnostics to: {}",
            file_prefix.with_suffix("_diagnostics.txt").display()
        );
    }

    Ok(field)
}
