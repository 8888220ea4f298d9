//! Binary I/O for NMRPipe FDATA data: header and float-vector
//! reading/writing with byte-order correction, and raw byte-swap helpers.
//!
//! All header interpretation lives in `fdata-core`; this crate only moves
//! bytes between readers/writers and the codec.

pub mod byteswap;
pub mod reader;
pub mod writer;

pub use byteswap::*;
pub use reader::*;
pub use writer::*;
