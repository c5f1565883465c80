use std::io::{self, Write};

/**
 * Histogram of escape counts on `[0, max_count]`, split into equal-width
 * integer bins. The last bin may be narrower when the range does not divide
 * evenly.
 */
#[derive(Debug, Clone)]
pub struct Histogram {
    bin_counts: Vec<u32>,
    bin_width: u32,
    max_count: u32,
}

impl Histogram {
    pub fn new(num_bins: usize, max_count: u32) -> Self {
        assert!(num_bins > 0, "`num_bins` must be positive!");
        let value_count = max_count as usize + 1;
        let num_bins = num_bins.min(value_count);
        let bin_width = ((value_count + num_bins - 1) / num_bins) as u32;
        Histogram {
            bin_counts: vec![0; num_bins],
            bin_width,
            max_count,
        }
    }

    /// Values above `max_count` land in the last bin.
    pub fn insert(&mut self, count: u32) {
        let index = ((count.min(self.max_count) / self.bin_width) as usize)
            .min(self.bin_counts.len() - 1);
        self.bin_counts[index] += 1;
    }

    pub fn total_count(&self) -> u32 {
        self.bin_counts.iter().sum()
    }

    pub fn bin_counts(&self) -> &[u32] {
        &self.bin_counts
    }

    /// @return: the lower edge of the specified bin (inclusive)
    pub fn lower_edge(&self, bin_index: usize) -> u32 {
        self.bin_width * (bin_index as u32)
    }

    /// @return: the upper edge of the specified bin (inclusive)
    pub fn upper_edge(&self, bin_index: usize) -> u32 {
        (self.lower_edge(bin_index) + self.bin_width - 1).min(self.max_count)
    }

    /// Print the histogram stats to the writer
    pub fn display<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Histogram:")?;
        let total = self.total_count();
        let percent_scale = if total == 0 {
            0.0
        } else {
            100.0 / (total as f32)
        };
        writeln!(writer, "  total count: {}", total)?;
        for (i, count) in self.bin_counts.iter().enumerate() {
            writeln!(
                writer,
                "  bins[{}]:  [{}, {}] --> {}  ({:.2}%)",
                i,
                self.lower_edge(i),
                self.upper_edge(i),
                count,
                (*count as f32) * percent_scale
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
