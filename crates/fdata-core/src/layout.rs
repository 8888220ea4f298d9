//! On-disk layout interpretation for streamed, multi-file, and cube data.
//!
//! The format stores multidimensional data in one of four shapes, decided
//! entirely by flags already present in a validated header. To accommodate
//! large data, the total number of 1D vectors in a stream is split across
//! two slots:
//!
//! ```text
//!   total = slot[FDSLICECOUNT0] + MAX_NMR_SIZE * slot[FDSLICECOUNT1]
//! ```
//!
//! This module performs no I/O; the derived descriptor is handed to
//! file-discovery logic owned elsewhere.

use crate::error::HeaderError;
use crate::fdata::{Fdata, MAX_NMR_SIZE};
use crate::loc;

/// The four on-disk layout shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataLayout {
    /// 1D or 2D data in one file: header followed by intensities.
    SingleFile,
    /// 3D or 4D data as a series of 2D plane files, each with its own
    /// header.
    PlaneSeries,
    /// 3D or 4D data as a pipeline stream with a single header up front.
    Stream,
    /// 4D data as a series of 3D cube files, each with its own header.
    CubeSeries,
}

impl Fdata {
    /// Decide the layout shape from the pipe flag, cube flag, and
    /// dimension count. A pure decision table, not a guess.
    pub fn data_layout(&self) -> DataLayout {
        if self.slot(loc::FDPIPEFLAG) as i32 != 0 {
            DataLayout::Stream
        } else if self.slot(loc::FDCUBEFLAG) as i32 != 0 {
            DataLayout::CubeSeries
        } else if self.dim_count() > 2 {
            DataLayout::PlaneSeries
        } else {
            DataLayout::SingleFile
        }
    }

    /// Total number of 1D vectors in a data stream, reconstructed from the
    /// two-slot wide-integer encoding.
    ///
    /// Fails if either part is negative or the reconstruction leaves the
    /// representable range; with well-formed headers this does not occur.
    pub fn slice_count(&self) -> Result<i64, HeaderError> {
        let low = self.slot(loc::FDSLICECOUNT0);
        let high = self.slot(loc::FDSLICECOUNT1);
        if low < 0.0 || high < 0.0 {
            return Err(HeaderError::Corrupt("negative slice-count part"));
        }
        let total = low as f64 + f64::from(MAX_NMR_SIZE) * high as f64;
        if total > i64::MAX as f64 {
            return Err(HeaderError::SliceCountRange(i64::MAX));
        }
        Ok(total as i64)
    }

    /// Store a 1D-vector count in the two-slot encoding.
    pub fn set_slice_count(&mut self, count: i64) -> Result<(), HeaderError> {
        if count < 0 {
            return Err(HeaderError::SliceCountRange(count));
        }
        let base = i64::from(MAX_NMR_SIZE);
        let high = count / base;
        if high >= base {
            // The high part itself must stay within exact f32 range.
            return Err(HeaderError::SliceCountRange(count));
        }
        self.set_slot(loc::FDSLICECOUNT0, (count % base) as f32);
        self.set_slot(loc::FDSLICECOUNT1, high as f32);
        Ok(())
    }

    /// Number of files in the complete data.
    pub fn file_count(&self) -> i32 {
        self.slot(loc::FDFILECOUNT) as i32
    }

    /// Number of processing functions in the pipe.
    pub fn pipe_count(&self) -> i32 {
        self.slot(loc::FDPIPECOUNT) as i32
    }

    /// Multi-thread mode: thread count and 0-based thread id.
    pub fn thread_info(&self) -> (i32, i32) {
        (
            self.slot(loc::FDTHREADCOUNT) as i32,
            self.slot(loc::FDTHREADID) as i32,
        )
    }

    /// Plane bounds of a parallel-processing subset.
    pub fn partition(&self) -> Partition {
        Partition {
            first_plane: self.slot(loc::FDFIRSTPLANE) as i32,
            last_plane: self.slot(loc::FDLASTPLANE) as i32,
            slices: self.slot(loc::FDPARTITION) as i32,
        }
    }

    /// Record the plane bounds of a parallel-processing subset.
    pub fn set_partition(&mut self, p: Partition) {
        self.set_slot(loc::FDFIRSTPLANE, p.first_plane as f32);
        self.set_slot(loc::FDLASTPLANE, p.last_plane as f32);
        self.set_slot(loc::FDPARTITION, p.slices as f32);
    }
}

/// A subset of planes processed by one worker, as recorded in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Partition {
    /// First Z-plane in the subset.
    pub first_plane: i32,
    /// Last Z-plane in the subset.
    pub last_plane: i32,
    /// Slice count for server mode.
    pub slices: i32,
}

impl Partition {
    /// Number of planes covered, inclusive of both bounds.
    pub fn plane_count(&self) -> i32 {
        if self.last_plane < self.first_plane {
            0
        } else {
            self.last_plane - self.first_plane + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(dims: i32, pipe: f32, cube: f32) -> Fdata {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_dim_count(dims);
        fd.set_slot(loc::FDPIPEFLAG, pipe);
        fd.set_slot(loc::FDCUBEFLAG, cube);
        fd
    }

    #[test]
    fn layout_decision_table() {
        assert_eq!(header(2, 0.0, 0.0).data_layout(), DataLayout::SingleFile);
        assert_eq!(header(1, 0.0, 0.0).data_layout(), DataLayout::SingleFile);
        assert_eq!(header(3, 0.0, 0.0).data_layout(), DataLayout::PlaneSeries);
        assert_eq!(header(4, 0.0, 0.0).data_layout(), DataLayout::PlaneSeries);
        assert_eq!(header(3, 2.0, 0.0).data_layout(), DataLayout::Stream);
        assert_eq!(header(4, 1.0, 0.0).data_layout(), DataLayout::Stream);
        assert_eq!(header(4, 0.0, 1.0).data_layout(), DataLayout::CubeSeries);
    }

    #[test]
    fn slice_count_reconstruction() {
        let mut fd = header(3, 2.0, 0.0);
        fd.set_slot(loc::FDSLICECOUNT0, 5.0);
        fd.set_slot(loc::FDSLICECOUNT1, 2.0);
        assert_eq!(fd.slice_count().unwrap(), 5 + 2 * 16_777_216);
    }

    #[test]
    fn slice_count_roundtrip() {
        let mut fd = header(3, 2.0, 0.0);
        for n in [0i64, 1, 16_777_215, 16_777_216, 33_554_437, 1 << 40] {
            fd.set_slice_count(n).unwrap();
            assert_eq!(fd.slice_count().unwrap(), n, "count {n}");
        }
    }

    #[test]
    fn slice_count_range_checks() {
        let mut fd = header(3, 2.0, 0.0);
        assert!(fd.set_slice_count(-1).is_err());
        assert!(fd.set_slice_count(i64::MAX).is_err());
        fd.set_slot(loc::FDSLICECOUNT0, -5.0);
        assert!(fd.slice_count().is_err());
    }

    #[test]
    fn partition_bounds() {
        let mut fd = header(3, 0.0, 0.0);
        fd.set_partition(Partition {
            first_plane: 4,
            last_plane: 7,
            slices: 128,
        });
        let p = fd.partition();
        assert_eq!(p.first_plane, 4);
        assert_eq!(p.last_plane, 7);
        assert_eq!(p.slices, 128);
        assert_eq!(p.plane_count(), 4);
        assert_eq!(Partition::default().plane_count(), 1);
    }
}
