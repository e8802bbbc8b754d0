//! DXF I/O for dxfslim
//!
//! Extraction of polyline geometry from parsed drawings, reconstruction of
//! output drawings, and path-based read/write adapters around the `dxf`
//! codec. All codec-specific field access stays inside this crate; the rest
//! of the workspace only ever sees `Polyline` values.

pub mod dxf_io;
pub mod extract;
pub mod rebuild;

pub use dxf_io::*;
pub use extract::*;
pub use rebuild::*;
