//! FDATA header storage: the 512-float array describing NMRPipe spectral
//! data.
//!
//! The header is 2048 bytes (512 x 4-byte floats). Every slot's meaning is
//! determined by its index; the slot table lives in [`crate::loc`] and is
//! addressed through the typed identifiers in [`crate::param`]. Raw slot
//! access exists for bulk operations only.

use crate::enums::{Axis, FdDim};
use crate::error::HeaderError;
use crate::loc;
use crate::param::{AxisParam, DimSelector};
use byteorder::{ByteOrder, NativeEndian};
use std::fmt;

// ─── Wire constants ─────────────────────────────────────────────────────────

/// Number of 4-byte float values in the FDATA header.
pub const FDATA_SIZE: usize = 512;
/// Header size in bytes.
pub const FDATA_BYTES: usize = FDATA_SIZE * 4; // 2048
/// IEEE floating-point format sentinel, stored as a bit pattern at slot 1.
pub const FD_IEEE_CONS: u32 = 0xEEEE_EEEE;
/// DEC VAX floating-point format sentinel; recognized but never decoded.
pub const FD_VAX_CONS: u32 = 0x1111_1111;
/// Byte-order test constant at slot 2.
pub const FD_ORDER_CONS: f32 = 2.345;
/// Equivalent for zero in some legacy contexts.
pub const ZERO_EQUIV: f32 = -666.0;
/// Maximum number of points in a given dimension (limited by f32
/// precision); also the base of the two-slot slice-count encoding.
pub const MAX_NMR_SIZE: i32 = 16_777_216;

// ─── FDATA structure ────────────────────────────────────────────────────────

/// The NMRPipe 512-float header array.
///
/// A plain value object: cloning is the supported way to share one across
/// threads, and transforming operations (byte-swap, dimension exchange)
/// either return a new value or complete before any slot becomes visible
/// half-updated.
///
/// Equality is bitwise per slot, so headers carrying packed text or raw
/// sentinel bit patterns (which are not meaningful as numbers) still
/// compare reliably.
#[derive(Clone)]
pub struct Fdata {
    data: [f32; FDATA_SIZE],
}

impl Default for Fdata {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Fdata {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Fdata {}

impl Fdata {
    /// Create a zeroed FDATA header.
    pub fn new() -> Self {
        Self {
            data: [0.0f32; FDATA_SIZE],
        }
    }

    /// Initialize with NMRPipe defaults: IEEE format and byte-order
    /// sentinels, dimension order (2 1 3 4), dimension count 1, virgin
    /// flag set.
    pub fn init_default(&mut self) {
        self.data.fill(0.0);
        self.data[loc::FDFLTFORMAT] = f32::from_bits(FD_IEEE_CONS);
        self.data[loc::FDFLTORDER] = FD_ORDER_CONS;
        self.data[loc::FDDIMORDER1] = 2.0;
        self.data[loc::FDDIMORDER2] = 1.0;
        self.data[loc::FDDIMORDER3] = 3.0;
        self.data[loc::FDDIMORDER4] = 4.0;
        self.data[loc::FD2DVIRGIN] = 1.0;
        self.data[loc::FDDIMCOUNT] = 1.0;
    }

    // ─── Raw slot access (bulk/advanced use only) ───────────────────────

    /// Read a raw slot. The value is meaningless without a parameter
    /// identifier; prefer the typed accessors.
    ///
    /// Panics if `index >= FDATA_SIZE`.
    pub fn slot(&self, index: usize) -> f32 {
        self.data[index]
    }

    /// Write a raw slot.
    ///
    /// Panics if `index >= FDATA_SIZE`.
    pub fn set_slot(&mut self, index: usize, val: f32) {
        self.data[index] = val;
    }

    /// The full slot array, for bulk copies and tabular dumps.
    pub fn slots(&self) -> &[f32; FDATA_SIZE] {
        &self.data
    }

    /// Reset every slot to zero.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    // ─── Header I/O ─────────────────────────────────────────────────────

    /// Deserialize from exactly [`FDATA_BYTES`] bytes.
    ///
    /// The bytes are reinterpreted in native order, preserving each slot's
    /// bit pattern; byte-order detection and swapping are separate steps
    /// (see [`crate::format`]).
    pub fn from_bytes(buf: &[u8]) -> Result<Self, HeaderError> {
        if buf.len() != FDATA_BYTES {
            return Err(HeaderError::WrongLength { got: buf.len() });
        }
        let mut fdata = Self::new();
        for (i, chunk) in buf.chunks_exact(4).enumerate() {
            fdata.data[i] = NativeEndian::read_f32(chunk);
        }
        Ok(fdata)
    }

    /// Serialize to [`FDATA_BYTES`] bytes; the exact inverse of
    /// [`Fdata::from_bytes`], bit for bit.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; FDATA_BYTES];
        for (i, &val) in self.data.iter().enumerate() {
            NativeEndian::write_f32(&mut buf[i * 4..(i + 1) * 4], val);
        }
        buf
    }

    // ─── Dimension count and order ──────────────────────────────────────

    /// Number of dimensions in the complete data.
    pub fn dim_count(&self) -> i32 {
        self.data[loc::FDDIMCOUNT] as i32
    }

    /// Set the number of dimensions.
    pub fn set_dim_count(&mut self, n: i32) {
        self.data[loc::FDDIMCOUNT] = n as f32;
    }

    /// The dimension-order record: for each storage axis X, Y, Z, A, the
    /// acquisition-dimension family it currently carries.
    pub fn dim_order(&self) -> Result<[FdDim; 4], HeaderError> {
        const AXES: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::A];
        let mut order = [FdDim::F1; 4];
        for (i, slot) in order.iter_mut().enumerate() {
            let raw = self.data[loc::FDDIMORDER + i] as i32;
            *slot = FdDim::from_i32(raw).ok_or(HeaderError::CorruptDimOrder {
                axis: AXES[i],
                value: raw,
            })?;
        }
        Ok(order)
    }

    /// Overwrite the dimension-order record.
    pub fn set_dim_order(&mut self, order: [FdDim; 4]) {
        for (i, dim) in order.iter().enumerate() {
            self.data[loc::FDDIMORDER + i] = *dim as i32 as f32;
        }
    }

    /// Repair legacy headers in place: zeroed dimension-order entries get
    /// the default order, a zero dimension count becomes 1, and the format
    /// sentinels are restored.
    pub fn fix_header(&mut self) {
        let defaults = [2.0, 1.0, 3.0, 4.0];
        for (i, d) in defaults.iter().enumerate() {
            if self.data[loc::FDDIMORDER + i] == 0.0 {
                log::debug!("restoring dimension-order slot {} to {}", loc::FDDIMORDER + i, d);
                self.data[loc::FDDIMORDER + i] = *d;
            }
        }
        if self.data[loc::FDDIMCOUNT] < 1.0 {
            log::debug!("restoring dimension count to 1");
            self.data[loc::FDDIMCOUNT] = 1.0;
        }
        self.data[loc::FDFLTFORMAT] = f32::from_bits(FD_IEEE_CONS);
        self.data[loc::FDFLTORDER] = FD_ORDER_CONS;
    }
}

impl fmt::Debug for Fdata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order: [i32; 4] = [
            self.data[loc::FDDIMORDER1] as i32,
            self.data[loc::FDDIMORDER2] as i32,
            self.data[loc::FDDIMORDER3] as i32,
            self.data[loc::FDDIMORDER4] as i32,
        ];
        f.debug_struct("Fdata")
            .field("dim_count", &self.dim_count())
            .field("dim_order", &order)
            .field(
                "x_size",
                &self.get_nd(AxisParam::Size, DimSelector::Axis(Axis::X)).ok(),
            )
            .field(
                "y_size",
                &self.get_nd(AxisParam::Size, DimSelector::Axis(Axis::Y)).ok(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_header_is_zeroed() {
        let fd = Fdata::new();
        assert!(fd.slots().iter().all(|v| v.to_bits() == 0));
    }

    #[test]
    fn default_init() {
        let mut fd = Fdata::new();
        fd.init_default();
        assert_eq!(fd.dim_count(), 1);
        assert_eq!(
            fd.dim_order().unwrap(),
            [FdDim::F2, FdDim::F1, FdDim::F3, FdDim::F4]
        );
        assert_eq!(fd.slot(1).to_bits(), FD_IEEE_CONS);
        assert_eq!(fd.slot(2), FD_ORDER_CONS);
    }

    #[test]
    fn bytes_roundtrip_is_bit_exact() {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_dim_count(2);
        // A slot holding a non-canonical NaN bit pattern must survive.
        fd.set_slot(300, f32::from_bits(0x7FC0_1234));
        let fd2 = Fdata::from_bytes(&fd.to_bytes()).unwrap();
        assert_eq!(fd, fd2);
        assert_eq!(fd2.slot(300).to_bits(), 0x7FC0_1234);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        assert_eq!(
            Fdata::from_bytes(&[0u8; 100]),
            Err(HeaderError::WrongLength { got: 100 })
        );
        assert_eq!(
            Fdata::from_bytes(&vec![0u8; FDATA_BYTES + 4]),
            Err(HeaderError::WrongLength { got: FDATA_BYTES + 4 })
        );
    }

    #[test]
    fn fix_header_restores_defaults() {
        let mut fd = Fdata::new();
        fd.fix_header();
        assert_eq!(fd.dim_count(), 1);
        assert_eq!(
            fd.dim_order().unwrap(),
            [FdDim::F2, FdDim::F1, FdDim::F3, FdDim::F4]
        );
    }

    #[test]
    fn corrupt_dim_order_is_reported() {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_slot(26, 7.0);
        assert_eq!(
            fd.dim_order(),
            Err(HeaderError::CorruptDimOrder {
                axis: Axis::Z,
                value: 7
            })
        );
    }
}
