#[cfg(test)]
mod tests {
    use mandelbrot_renderer::core::color_map::{ColorMapParams, Palette};
    use mandelbrot_renderer::core::file_io::FilePrefix;
    use mandelbrot_renderer::core::image_utils::{ComplexGrid, GridSpecification};
    use mandelbrot_renderer::core::lookup_table::EscapeCountLookupTable;
    use mandelbrot_renderer::fractals::mandelbrot::{
        render_mandelbrot, IterationField, MandelbrotParams,
    };
    use more_asserts::{assert_ge, assert_le};
    use std::path::PathBuf;

    fn output_prefix(test_name: &str) -> FilePrefix {
        let directory_path: PathBuf = std::env::temp_dir()
            .join("mandelbrot_renderer_tests")
            .join(test_name);
        std::fs::create_dir_all(&directory_path).unwrap();
        FilePrefix {
            directory_path,
            file_base: "result".to_owned(),
        }
    }

    fn tiny_params() -> MandelbrotParams {
        let mut params = MandelbrotParams::default();
        params.grid.resolution = [40, 30];
        params
    }

    #[test]
    fn test_render_writes_non_empty_png_of_grid_size() {
        let file_prefix = output_prefix("render_png");
        let field = render_mandelbrot(&tiny_params(), &file_prefix, false).unwrap();
        assert_eq!(field.shape(), (30, 40));

        let png_path = file_prefix.with_suffix(".png");
        let metadata = std::fs::metadata(&png_path).unwrap();
        assert_ge!(metadata.len(), 1);

        let image = image::open(&png_path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (40, 30));
        assert!(!file_prefix.with_suffix("_diagnostics.txt").exists());
    }

    #[test]
    fn test_render_overwrites_existing_file() {
        let file_prefix = output_prefix("render_overwrite");
        std::fs::write(file_prefix.with_suffix(".png"), b"stale").unwrap();
        render_mandelbrot(&tiny_params(), &file_prefix, false).unwrap();
        assert!(image::open(file_prefix.with_suffix(".png")).is_ok());
    }

    #[test]
    fn test_render_with_diagnostics() {
        let file_prefix = output_prefix("render_diagnostics");
        render_mandelbrot(&tiny_params(), &file_prefix, true).unwrap();

        let params: MandelbrotParams = serde_json::from_str(
            &std::fs::read_to_string(file_prefix.with_suffix(".json")).unwrap(),
        )
        .unwrap();
        assert_eq!(params, tiny_params());

        let report = std::fs::read_to_string(file_prefix.with_suffix("_diagnostics.txt")).unwrap();
        assert!(report.contains("Stopwatch: Mandelbrot Render"));
        assert!(report.contains("compute iteration field"));
        assert!(report.contains("samples: 1200"));
        assert!(report.contains("Histogram:"));
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let file_prefix = FilePrefix {
            directory_path: std::env::temp_dir()
                .join("mandelbrot_renderer_tests")
                .join("does_not_exist")
                .join("nested"),
            file_base: "result".to_owned(),
        };
        let _ = std::fs::remove_dir_all(&file_prefix.directory_path);
        assert!(render_mandelbrot(&tiny_params(), &file_prefix, false).is_err());
    }

    #[test]
    fn test_full_resolution_field_is_bounded_and_deterministic() {
        let params = MandelbrotParams::default();
        let grid = ComplexGrid::new(&params.grid);
        assert_eq!(grid.shape(), (1024, 1024));

        let first = IterationField::compute(&grid, &params.convergence_params);
        let second = IterationField::compute(&grid, &params.convergence_params);
        assert_eq!(first.shape(), (1024, 1024));
        assert_eq!(first, second);

        let summary = first.summary();
        assert_ge!(summary.min_count, 1);
        assert_le!(summary.max_count, 256);
        // The main cardioid sits inside the default view.
        assert_ge!(summary.interior_count, 1);
    }

    #[test]
    fn test_png_rows_follow_field_rows_from_imag_min() {
        let params = MandelbrotParams {
            grid: GridSpecification {
                resolution: [24, 16],
                real_range: [-2.0, 1.0],
                imag_range: [-1.2, 0.3],
            },
            color_map: ColorMapParams {
                palette: Palette::Greyscale,
                interior_color_rgb: Some([255, 0, 0]),
            },
            ..MandelbrotParams::default()
        };
        let file_prefix = output_prefix("render_orientation");
        let field = render_mandelbrot(&params, &file_prefix, false).unwrap();

        let grid = ComplexGrid::new(&params.grid);
        assert_eq!(grid.get(0, 0).im, -1.2);
        assert_eq!(grid.get(15, 0).im, 0.3);
        assert_eq!(field, IterationField::compute(&grid, &params.convergence_params));
        // Top and bottom rows differ, so a vertical flip cannot go unnoticed.
        assert_ne!(field.counts[0], field.counts[15]);

        let summary = field.summary();
        let table = EscapeCountLookupTable::new(
            &params.color_map,
            [summary.min_count, summary.max_count],
            field.max_iter_count,
        );
        let image = image::open(file_prefix.with_suffix(".png")).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (24, 16));
        for row in [0usize, 15] {
            for col in 0..24usize {
                assert_eq!(
                    *image.get_pixel(col as u32, row as u32),
                    table.lookup(field.counts[row][col]),
                    "pixel ({}, {})",
                    col,
                    row
                );
            }
        }
    }

    #[test]
    fn test_symmetric_view_gives_symmetric_field() {
        let spec = GridSpecification {
            resolution: [33, 25],
            real_range: [-2.0, 0.5],
            imag_range: [-1.5, 1.5],
        };
        let field = IterationField::compute(
            &ComplexGrid::new(&spec),
            &MandelbrotParams::default().convergence_params,
        );
        for row in 0..25 {
            assert_eq!(field.counts[row], field.counts[24 - row], "row {}", row);
        }
    }
}
