//! Path-based read/write adapters around the `dxf` codec

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use dxf::Drawing;
use dxfslim_core::{Error, Result};

/// Parse a drawing from a file on disk.
///
/// The input's existence is checked up front so a missing file surfaces as
/// `Error::FileNotFound` rather than a codec failure. Codec errors are
/// carried through with their message intact, never interpreted.
pub fn read_drawing<P: AsRef<Path>>(path: P) -> Result<Drawing> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let mut reader = BufReader::new(File::open(path)?);
    Drawing::load(&mut reader).map_err(|e| Error::Parse(e.to_string()))
}

/// Serialize a drawing to a file on disk.
pub fn write_drawing<P: AsRef<Path>>(drawing: &Drawing, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    drawing
        .save(&mut writer)
        .map_err(|e| Error::Write(e.to_string()))?;
    writer.flush()?;
    Ok(())
}
