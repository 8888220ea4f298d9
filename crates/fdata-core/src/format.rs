//! Floating-point format detection, header byte-swapping, and structural
//! validation.
//!
//! Two sentinel slots orient a header: slot 1 carries the floating-point
//! format as a raw bit pattern (IEEE `0xEEEEEEEE`, VAX `0x11111111`) and
//! slot 2 carries the byte-order constant 2.345. Both format patterns are
//! byte-order palindromes, so orientation comes from slot 2 alone; the
//! format pattern then decides whether the data can be decoded at all.
//! Detection must run before any numeric field is trusted.

use crate::enums::HdrStatus;
use crate::error::HeaderError;
use crate::fdata::{Fdata, FDATA_SIZE, FD_IEEE_CONS, FD_ORDER_CONS, FD_VAX_CONS};
use crate::loc;
use crate::text::is_text_slot;

/// Tolerance when comparing the byte-order constant; the slot value went
/// through a float round-trip in legacy writers.
const ORDER_TOL: f32 = 0.001;

/// Byte orientation of a header relative to this machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrdering {
    /// Slots read correctly as-is.
    Native,
    /// Every numeric slot needs a 4-byte swap before use.
    Foreign,
}

fn order_matches(val: f32) -> bool {
    (val - FD_ORDER_CONS).abs() < ORDER_TOL
}

/// Detect the byte orientation and floating-point format of a header.
///
/// Fails with [`HeaderError::UnsupportedFormat`] for VAX-format data
/// (recognized by sentinel, never decoded) and with
/// [`HeaderError::Corrupt`] when neither sentinel matches in either byte
/// order.
pub fn detect(fd: &Fdata) -> Result<ByteOrdering, HeaderError> {
    let order = fd.slot(loc::FDFLTORDER);
    let ordering = if order_matches(order) {
        ByteOrdering::Native
    } else if order_matches(f32::from_bits(order.to_bits().swap_bytes())) {
        ByteOrdering::Foreign
    } else {
        return Err(HeaderError::Corrupt(
            "byte-order sentinel matches 2.345 in neither byte order",
        ));
    };

    let mut fmt = fd.slot(loc::FDFLTFORMAT).to_bits();
    if ordering == ByteOrdering::Foreign {
        fmt = fmt.swap_bytes();
    }
    match fmt {
        FD_IEEE_CONS => Ok(ordering),
        FD_VAX_CONS => Err(HeaderError::UnsupportedFormat(fmt)),
        _ => Err(HeaderError::Corrupt(
            "unrecognized floating-point format sentinel",
        )),
    }
}

/// Return a copy with every numeric slot's 4 bytes reversed.
///
/// Text-region slots are carried over untouched: they hold raw characters
/// in file byte order, which is already correct on either architecture.
/// Applying the swap twice returns the original header.
pub fn swapped(fd: &Fdata) -> Fdata {
    let mut out = fd.clone();
    for i in 0..FDATA_SIZE {
        if !is_text_slot(i) {
            out.set_slot(i, f32::from_bits(fd.slot(i).to_bits().swap_bytes()));
        }
    }
    out
}

/// Structural sanity verdict for a header.
///
/// Advisory, not an error: callers choose whether to abort on `Bad` or to
/// swap-and-revalidate on `Swapped`. `Bad` means the magic slot is
/// nonzero, a sentinel is unrecognized or unsupported, or the declared
/// dimension count falls outside 1-4. For a foreign-order header the
/// structural checks run on the swapped image, since the native reading
/// of its numeric slots is meaningless.
pub fn validate(fd: &Fdata) -> HdrStatus {
    match detect(fd) {
        Ok(ByteOrdering::Native) => {
            if structure_ok(fd) {
                HdrStatus::Ok
            } else {
                HdrStatus::Bad
            }
        }
        Ok(ByteOrdering::Foreign) => {
            if structure_ok(&swapped(fd)) {
                HdrStatus::Swapped
            } else {
                HdrStatus::Bad
            }
        }
        Err(_) => HdrStatus::Bad,
    }
}

fn structure_ok(fd: &Fdata) -> bool {
    if fd.slot(loc::FDMAGIC) != 0.0 {
        return false;
    }
    let dims = fd.dim_count();
    (1..=4).contains(&dims)
}

impl Fdata {
    /// See [`detect`].
    pub fn detect_format(&self) -> Result<ByteOrdering, HeaderError> {
        detect(self)
    }

    /// See [`swapped`].
    pub fn swapped(&self) -> Fdata {
        swapped(self)
    }

    /// See [`validate`].
    pub fn validate(&self) -> HdrStatus {
        validate(self)
    }
}
