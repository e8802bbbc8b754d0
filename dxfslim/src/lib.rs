//! # dxfslim
//!
//! Percentage-based polyline decimation for DXF drawings.
//!
//! This is the umbrella crate that provides convenient access to all dxfslim
//! functionality. You can use this crate to get everything in one place, or
//! use individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: 2D points, the `Polyline` container, shared error types
//! - **Simplification**: uniform index decimation of polylines
//! - **I/O**: extraction from and reconstruction of DXF drawings
//! - **Service**: the request-scoped upload/simplify pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use dxfslim::prelude::*;
//!
//! // A six-point path, reduced by half: three points survive, endpoints
//! // always included.
//! let polyline: Polyline = (0..6).map(|i| Point2d::new(i as f64, 0.0)).collect();
//! let reduced = decimate(&polyline, 50.0);
//! assert_eq!(reduced.len(), 3);
//! ```
//!
//! Simplifying a whole uploaded file:
//!
//! ```rust,no_run
//! use dxfslim::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServiceConfig::default();
//!     config.ensure_dirs()?;
//!     let output = simplify_file(&config, "plan.dxf", 40.0)?;
//!     println!("wrote {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables io, simplification, and service
//! - `io`: DXF extraction, reconstruction, and file adapters
//! - `simplification`: Polyline decimation
//! - `service`: The request-scoped pipeline (implies `io` and
//!   `simplification`)
//! - `all`: Enables everything

// Re-export core functionality
pub use dxfslim_core::*;

// Re-export sub-crates
#[cfg(feature = "io")]
pub use dxfslim_io as io;

#[cfg(feature = "simplification")]
pub use dxfslim_simplification as simplification;

#[cfg(feature = "service")]
pub use dxfslim_service as service;

/// Convenient imports for common use cases
pub mod prelude {
    pub use dxfslim_core::*;

    #[cfg(feature = "io")]
    pub use dxfslim_io::*;

    #[cfg(feature = "simplification")]
    pub use dxfslim_simplification::*;

    #[cfg(feature = "service")]
    pub use dxfslim_service::*;
}
