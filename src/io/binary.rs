//! Raw big-endian `f32` field files.
//!
//! The layout matches what the consuming ocean model reads directly:
//! IEEE-754 single precision, big-endian, row-major with rows along y, no
//! header and no padding. The shape is not stored, so a reader must know
//! `(ny, nx)` in advance.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use log::debug;
use ndarray::Array2;
use thiserror::Error;

/// Bytes per stored value.
pub const BYTES_PER_VALUE: usize = 4;

/// Error type for field file operations.
#[derive(Debug, Error)]
pub enum BinaryIoError {
    /// I/O error, including a missing input file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File length disagrees with the expected shape.
    #[error("{path}: expected {expected} bytes for the given shape, found {actual}")]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// NaN or infinity (including f64 values that overflow f32).
    #[error("{path}: non-finite value at [{row}, {col}]")]
    NonFinite { path: PathBuf, row: usize, col: usize },

    /// Data could not be arranged into the requested shape.
    #[error("invalid field shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl BinaryIoError {
    fn io(path: &Path, source: io::Error) -> Self {
        BinaryIoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this error is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BinaryIoError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Expected file length in bytes for a `(ny, nx)` field.
pub fn file_len(shape: (usize, usize)) -> u64 {
    (shape.0 * shape.1 * BYTES_PER_VALUE) as u64
}

/// Encode `data` row-major as big-endian `f32` into `writer`.
pub fn encode_be_f32<W: Write>(writer: &mut W, data: &Array2<f32>) -> io::Result<()> {
    // Logical iteration order is row-major regardless of memory layout
    for &value in data.iter() {
        writer.write_f32::<BigEndian>(value)?;
    }
    Ok(())
}

/// Narrow to `f32`, rejecting values that are not finite after the cast.
fn narrow(path: &Path, data: &Array2<f64>) -> Result<Array2<f32>, BinaryIoError> {
    if let Some(((row, col), _)) = data
        .indexed_iter()
        .find(|(_, v)| !(**v as f32).is_finite())
    {
        return Err(BinaryIoError::NonFinite {
            path: path.to_path_buf(),
            row,
            col,
        });
    }
    Ok(data.mapv(|v| v as f32))
}

/// Write a double-precision field, narrowed to `f32`.
///
/// Parent directories are created when missing.
pub fn write_field<P: AsRef<Path>>(path: P, data: &Array2<f64>) -> Result<(), BinaryIoError> {
    let path = path.as_ref();
    let narrowed = narrow(path, data)?;
    write_field_f32(path, &narrowed)
}

/// Write a single-precision field.
pub fn write_field_f32<P: AsRef<Path>>(path: P, data: &Array2<f32>) -> Result<(), BinaryIoError> {
    let path = path.as_ref();
    if let Some(((row, col), _)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(BinaryIoError::NonFinite {
            path: path.to_path_buf(),
            row,
            col,
        });
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BinaryIoError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| BinaryIoError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    encode_be_f32(&mut writer, data).map_err(|e| BinaryIoError::io(path, e))?;
    writer.flush().map_err(|e| BinaryIoError::io(path, e))?;

    debug!(
        "wrote {} ({}x{}, {} bytes)",
        path.display(),
        data.nrows(),
        data.ncols(),
        file_len(data.dim())
    );
    Ok(())
}

/// Read a single-precision field of shape `(ny, nx)`.
pub fn read_field_f32<P: AsRef<Path>>(
    path: P,
    shape: (usize, usize),
) -> Result<Array2<f32>, BinaryIoError> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut f| f.read_to_end(&mut bytes))
        .map_err(|e| BinaryIoError::io(path, e))?;

    let expected = file_len(shape);
    if bytes.len() as u64 != expected {
        return Err(BinaryIoError::SizeMismatch {
            path: path.to_path_buf(),
            expected,
            actual: bytes.len() as u64,
        });
    }

    let mut values = vec![0.0_f32; shape.0 * shape.1];
    BigEndian::read_f32_into(&bytes, &mut values);
    Ok(Array2::from_shape_vec(shape, values)?)
}

/// Read a field of shape `(ny, nx)`, widened to `f64`.
pub fn read_field<P: AsRef<Path>>(
    path: P,
    shape: (usize, usize),
) -> Result<Array2<f64>, BinaryIoError> {
    Ok(read_field_f32(path, shape)?.mapv(f64::from))
}
