//! Module containing the metamesh universal error type
use thiserror::Error;

/// Universal error type for metamesh
#[derive(Error, Debug)]
pub enum Error {
    /// The scalar field returned a NaN or infinite value
    ///
    /// This is a violation of the field's contract; the tick is aborted
    /// rather than producing a partial isosurface.
    #[error("field returned non-finite value {value} at ({x}, {y}, {z})")]
    NonFiniteSample {
        /// X coordinate of the sample
        x: f64,
        /// Y coordinate of the sample
        y: f64,
        /// Z coordinate of the sample
        z: f64,
        /// Value returned by the field
        value: f64,
    },

    /// Mesher settings are invalid
    #[error("invalid settings: {0}")]
    BadSettings(&'static str),

    /// The mesh has more vertices than a `u32` index can address
    #[error("vertex count ({0}) exceeds the range of `u32` indices")]
    IndexOverflow(usize),

    /// IO error; see inner code for details
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
