//! NMRPipe FDATA header codec.
//!
//! The FDATA header is a 2048-byte block of 512 4-byte floats prefixed to
//! NMRPipe spectral data files. All slot values are stored as floats,
//! including integers and packed ASCII text, and most per-dimension
//! parameters are addressed relative to the header's own dimension-order
//! record. This crate provides the header value object, the typed
//! parameter table with its dimension resolver, the packed-text codec,
//! byte-order detection/swapping, structural validation, and the
//! stream/multi-file layout calculator.
//!
//! The codec is a pure value-transformation library: it performs no I/O
//! and shares no state. See the `fdata-io` crate for `Read`/`Write`
//! plumbing.

pub mod enums;
pub mod error;
pub mod fdata;
pub mod format;
pub mod layout;
pub mod names;
pub mod param;
pub mod params;
pub mod text;

mod loc;

pub use enums::*;
pub use error::HeaderError;
pub use fdata::*;
pub use format::{detect, swapped, validate, ByteOrdering};
pub use layout::{DataLayout, Partition};
pub use names::{lookup, named_value, NamedParam};
pub use param::{AxisParam, DimSelector, GenParam};
pub use text::{is_text_slot, text_region_start, TextField};
