#[cfg(test)]
mod tests {
    use glob::glob;
    use mandelbrot_renderer::cli::color_swatch::ColorSwatchParams;
    use mandelbrot_renderer::fractals::mandelbrot::MandelbrotParams;
    use serde::de::DeserializeOwned;
    use std::any::type_name;
    use std::fs;
    use std::path::PathBuf;

    fn parse_all_parameter_files_or_panic<T: DeserializeOwned>(directory: &str) -> Vec<(PathBuf, T)> {
        let pattern = format!("{}/**/*.json", directory);
        let mut parsed = Vec::new();

        // For each match, ensure that we can (1) open the file and (2) parse it into the specified parameter type.
        for entry in glob(&pattern).expect("Failed to read glob pattern") {
            let path = entry.unwrap_or_else(|e| panic!("Failed to read path: {:?}", e));
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));

            match serde_json::from_str::<T>(&content) {
                Ok(params) => parsed.push((path, params)),
                Err(err) => panic!(
                    "Failed to parse JSON file: {:?} as parameter type: `{}`.\n\n{:?}\n",
                    path,
                    type_name::<T>(),
                    err
                ),
            }
        }
        assert!(!parsed.is_empty(), "No parameter files found in {}", directory);
        parsed
    }

    #[test]
    fn test_ensure_all_mandelbrot_parameter_files_are_valid() {
        for (path, params) in parse_all_parameter_files_or_panic::<MandelbrotParams>("params/mandelbrot") {
            if let Err(err) = params.validate() {
                panic!("Invalid parameters in {:?}: {}", path, err);
            }
        }
    }

    #[test]
    fn test_default_parameter_file_matches_builtin_defaults() {
        let content = fs::read_to_string("params/mandelbrot/default.json").unwrap();
        let params: MandelbrotParams = serde_json::from_str(&content).unwrap();
        assert_eq!(params, MandelbrotParams::default());
    }

    #[test]
    fn test_ensure_all_color_swatch_parameter_files_are_valid() {
        for (path, params) in parse_all_parameter_files_or_panic::<ColorSwatchParams>("params/color_swatch") {
            assert!(params.palette.validate().is_ok(), "{:?}", path);
        }
    }
}
