use image::Rgb;
use more_asserts::assert_le;

use crate::core::color_map::{ColorMap, ColorMapParams, ColorMapper};

/// Precomputed color for every possible escape count. The field only holds
/// integers in `[0, max_iter_count]`, so a direct index replaces the
/// interpolation at each pixel.
pub struct EscapeCountLookupTable {
    table_entries: Vec<Rgb<u8>>,
}

impl EscapeCountLookupTable {
    /// Normalizes counts linearly over the observed `count_range` so that the
    /// lowest count gets the bottom of the palette and the highest the top.
    /// A degenerate range maps everything to the bottom of the palette.
    pub fn new(
        color_map_params: &ColorMapParams,
        count_range: [u32; 2],
        max_iter_count: u32,
    ) -> EscapeCountLookupTable {
        assert_le!(count_range[0], count_range[1]);
        let color_map = ColorMap::from_palette(&color_map_params.palette);
        let span = (count_range[1] - count_range[0]) as f32;

        let table_entries = (0..=max_iter_count)
            .map(|count| {
                if count == max_iter_count {
                    if let Some(rgb) = color_map_params.interior_color_rgb {
                        return Rgb(rgb);
                    }
                }
                let query = if span > 0.0 {
                    (count.saturating_sub(count_range[0]) as f32) / span
                } else {
                    0.0
                };
                color_map.compute_pixel(query)
            })
            .collect();

        EscapeCountLookupTable { table_entries }
    }

    pub fn len(&self) -> usize {
        self.table_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table_entries.is_empty()
    }

    /// Counts past the end of the table take the last entry.
    pub fn lookup(&self, count: u32) -> Rgb<u8> {
        let index = (count as usize).min(self.table_entries.len() - 1);
        self.table_entries[index]
    }
}
