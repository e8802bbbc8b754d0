//! Request-scoped simplification service
//!
//! The in-process counterpart of an upload/simplify/download request
//! handler: explicit directory configuration, filename admission, percent
//! parameter parsing, and the end-to-end simplify-one-file operation.
//! Processing is synchronous and single-threaded; one drawing is read,
//! processed, and written per call with no state shared across calls.

use std::fs;
use std::path::{Path, PathBuf};

use dxfslim_core::{Error, Result};
use dxfslim_io::{extract_polylines, read_drawing, rebuild_drawing, write_drawing};
use dxfslim_simplification::decimate_all;
use tracing::{debug, info};

/// Where uploaded drawings are read from and simplified drawings are
/// written to.
///
/// Passed explicitly into every operation; nothing here is process-wide
/// state. Concurrent callers writing the same output name race benignly
/// (last writer wins), since output names are a deterministic function of
/// the input name.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub upload_dir: PathBuf,
    pub download_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            download_dir: PathBuf::from("downloads"),
        }
    }
}

impl ServiceConfig {
    pub fn new(upload_dir: impl Into<PathBuf>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            download_dir: download_dir.into(),
        }
    }

    /// Create both directories if they do not exist yet.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.upload_dir)?;
        fs::create_dir_all(&self.download_dir)?;
        Ok(())
    }

    /// Path an uploaded file is expected at.
    pub fn upload_path(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(filename)
    }

    /// Path the simplified counterpart of `filename` is written to.
    pub fn download_path(&self, filename: &str) -> PathBuf {
        self.download_dir.join(output_filename(filename))
    }
}

/// Whether a filename is admissible for upload: a `.dxf` extension,
/// matched case-insensitively.
pub fn is_allowed_filename(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dxf"))
}

/// Parse the percent request parameter.
///
/// An absent or empty parameter means no reduction. Numeric values outside
/// [0, 100] are accepted as-is; the decimation policy gives them a meaning.
/// Only input that fails to parse as a number is an error.
pub fn parse_percent(raw: Option<&str>) -> Result<f64> {
    match raw {
        None => Ok(0.0),
        Some(s) if s.trim().is_empty() => Ok(0.0),
        Some(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::MalformedPercent(s.to_string())),
    }
}

/// Output naming rule: `simplified_` prefixed to the original name.
pub fn output_filename(original: &str) -> String {
    format!("simplified_{original}")
}

/// Persist an uploaded drawing into the upload directory.
///
/// Only admissible filenames are accepted; everything else is rejected
/// before any bytes touch the disk.
pub fn store_upload(config: &ServiceConfig, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    if !is_allowed_filename(filename) {
        return Err(Error::UnsupportedFilename(filename.to_string()));
    }
    let path = config.upload_path(filename);
    fs::write(&path, bytes)?;
    debug!(path = %path.display(), len = bytes.len(), "stored upload");
    Ok(path)
}

/// Simplify every polyline of an uploaded drawing and write the result.
///
/// Reads `upload_dir/<filename>`, decimates each polyline by `percent`,
/// and writes a drawing containing only the surviving polylines to
/// `download_dir/simplified_<filename>`, returning that path. The output
/// file is created only after the whole new drawing is constructed; any
/// failure aborts the request with nothing persisted.
pub fn simplify_file(config: &ServiceConfig, filename: &str, percent: f64) -> Result<PathBuf> {
    let input_path = config.upload_path(filename);
    let drawing = read_drawing(&input_path)?;

    let polylines = extract_polylines(&drawing);
    debug!(count = polylines.len(), percent, "extracted polylines");

    let simplified = decimate_all(&polylines, percent);
    let output = rebuild_drawing(&simplified);

    let output_path = config.download_path(filename);
    write_drawing(&output, &output_path)?;
    info!(path = %output_path.display(), "wrote simplified drawing");

    Ok(output_path)
}
