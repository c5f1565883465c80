use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::RenderResult;

pub const DEFAULT_FILE_BASE: &str = "mandelbrot_fractal";

pub fn extract_base_name(path: &str) -> Option<&str> {
    Path::new(path).file_stem().and_then(|name| name.to_str())
}

/// Builds (and creates on disk) the directory that renders are written to.
/// With a time-stamp the output lands in `<root>/<date_time>/`.
pub fn build_output_path_with_date_time(
    root: &Path,
    datetime: &Option<String>,
) -> RenderResult<PathBuf> {
    let mut directory_path = root.to_path_buf();
    if let Some(inner_datetime_str) = datetime {
        directory_path.push(inner_datetime_str);
    }
    std::fs::create_dir_all(&directory_path)?;
    Ok(directory_path)
}

pub fn date_time_string() -> String {
    use chrono::{Datelike, Local, Timelike};
    let local_time = Local::now();
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        local_time.year(),
        local_time.month(),
        local_time.day(),
        local_time.hour(),
        local_time.minute(),
        local_time.second()
    )
}

pub fn maybe_date_time_string(enable: bool) -> Option<String> {
    if enable {
        Some(date_time_string())
    } else {
        None
    }
}

/**
 * Store a path and prefix together, making it easy to generate a collection
 * of files with the same prefix, but separate suffixes.
 */
#[derive(Debug, Clone)]
pub struct FilePrefix {
    pub directory_path: PathBuf,
    pub file_base: String,
}

impl Default for FilePrefix {
    /// `./mandelbrot_fractal`
    fn default() -> Self {
        FilePrefix {
            directory_path: PathBuf::from("."),
            file_base: DEFAULT_FILE_BASE.to_owned(),
        }
    }
}

impl FilePrefix {
    pub fn with_suffix(&self, suffix: &str) -> PathBuf {
        self.directory_path.join(self.file_base.clone() + suffix)
    }

    pub fn create_file_with_suffix(
        &self,
        suffix: &str,
    ) -> RenderResult<std::io::BufWriter<std::fs::File>> {
        let file = std::fs::File::create(self.with_suffix(suffix))?;
        Ok(std::io::BufWriter::new(file))
    }
}

pub fn serialize_to_json<T: Serialize>(path: &Path, data: &T) -> RenderResult<()> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    log::info!("Wrote parameter file to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RenderError;

    #[test]
    fn test_extract_base_name() {
        assert_eq!(extract_base_name("params/mandelbrot/tiny.json"), Some("tiny"));
        assert_eq!(extract_base_name("default.json"), Some("default"));
        assert_eq!(extract_base_name(""), None);
    }

    #[test]
    fn test_file_prefix_default_path() {
        let prefix = FilePrefix::default();
        assert_eq!(
            prefix.with_suffix(".png"),
            PathBuf::from("./mandelbrot_fractal.png")
        );
    }

    #[test]
    fn test_date_time_string_format() {
        let stamp = date_time_string();
        assert_eq!(stamp.len(), "YYYYMMDD_HHMMSS".len());
        assert_eq!(stamp.as_bytes()[8], b'_');
        assert!(maybe_date_time_string(false).is_none());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_serialize_to_json_reports_full_disk() {
        let result = serialize_to_json(Path::new("/dev/full"), &vec![[1.5f64, -2.0]; 8]);
        assert!(matches!(result, Err(RenderError::Io(_))), "{:?}", result);
    }

    #[test]
    fn test_build_output_path_creates_directory() -> RenderResult<()> {
        let root = std::env::temp_dir().join("mandelbrot_renderer_file_io_test");
        let path = build_output_path_with_date_time(&root, &Some("stamp".to_owned()))?;
        assert!(path.is_dir());
        assert!(path.ends_with("stamp"));
        Ok(())
    }
}
