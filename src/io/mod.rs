//! Field file I/O.
//!
//! # File Format
//!
//! Every field is one file of `ny * nx` IEEE-754 single-precision values,
//! big-endian, row-major with rows along y, no header:
//!
//! ```text
//! offset 0         4         8              4*nx
//!        [0,0]     [0,1]     ...  [0,nx-1]  [1,0] ...
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ndarray::Array2;
//! use eddy_island::io::{read_field, write_field};
//!
//! let depth = Array2::from_elem((80, 120), 1000.0);
//! write_field("input/bathy.bin", &depth)?;
//! let back = read_field("input/bathy.bin", (80, 120))?;
//! assert_eq!(back, depth);
//! # Ok::<(), eddy_island::io::BinaryIoError>(())
//! ```

mod binary;
mod output;

pub use binary::{
    BYTES_PER_VALUE, BinaryIoError, encode_be_f32, file_len, read_field, read_field_f32,
    write_field, write_field_f32,
};
pub use output::{OutputNames, OutputPaths};
