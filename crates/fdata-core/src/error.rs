//! Error type for header codec operations.

use crate::enums::Axis;
use crate::param::AxisParam;
use crate::text::TextField;
use thiserror::Error;

/// Errors raised by FDATA header operations.
///
/// Validator verdicts ([`crate::enums::HdrStatus`]) are advisory and not
/// errors; everything here is terminal for the operation that raised it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HeaderError {
    #[error("header must be exactly 2048 bytes, got {got}")]
    WrongLength { got: usize },

    #[error("unsupported floating-point format sentinel {0:#010x}: only IEEE data is decoded")]
    UnsupportedFormat(u32),

    #[error("corrupt header: {0}")]
    Corrupt(&'static str),

    #[error("dimension order entry for the {axis:?}-axis holds {value}, expected 1-4")]
    CorruptDimOrder { axis: Axis, value: i32 },

    #[error("dimension {dim} out of range: header declares {count} dimension(s)")]
    InvalidDimension { dim: i32, count: i32 },

    #[error("parameter {param:?} has no location in the F{dim} family")]
    UnmappedParameter { param: AxisParam, dim: i32 },

    #[error("text of {got} bytes does not fit {field:?} ({max} bytes)")]
    TextTooLong {
        field: TextField,
        got: usize,
        max: usize,
    },

    #[error("slice count {0} cannot be represented in the two-slot encoding")]
    SliceCountRange(i64),
}
