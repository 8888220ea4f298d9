//! Typed parameter identifiers and the dimension resolver.
//!
//! The header is a flat float array, but callers never address it by bare
//! index. A parameter is one of:
//!
//! - [`GenParam`], a general parameter with one fixed slot;
//! - a `(FdDim, AxisParam)` pair, an axis-concrete F1-F4 family value;
//! - an [`AxisParam`] resolved through a [`DimSelector`]: the generalized
//!   "ND" form, where the header's own dimension-order record decides which
//!   F family a storage axis currently carries.
//!
//! Per-family slot assignment is a data table ([`AxisParam::loc`]), not
//! per-parameter branching, mirroring the `dimLoc` table of the original
//! format definition.

use crate::enums::{Axis, FdDim};
use crate::error::HeaderError;
use crate::fdata::Fdata;
use crate::loc;

// ─── General parameters ─────────────────────────────────────────────────────

/// General (dimension-independent) header parameters, each with a fixed
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenParam {
    Magic,
    FltFormat,
    FltOrder,
    Id,
    Size,
    RealSize,
    SpecNum,
    QuadFlag,
    Phase2d,
    Transposed,
    DimCount,
    DimOrder1,
    DimOrder2,
    DimOrder3,
    DimOrder4,
    NusDim,
    PipeFlag,
    CubeFlag,
    PipeCount,
    SliceCount0,
    SliceCount1,
    FileCount,
    ThreadCount,
    ThreadId,
    FirstPlane,
    LastPlane,
    Partition,
    PlaneLoc,
    Max,
    Min,
    ScaleFlag,
    DispMax,
    DispMin,
    PThresh,
    NThresh,
    User1,
    User2,
    User3,
    User4,
    User5,
    User6,
    LastBlock,
    ContBlock,
    BaseBlock,
    PeakBlock,
    BmapBlock,
    HistBlock,
    OneDBlock,
    Month,
    Day,
    Year,
    Hours,
    Mins,
    Secs,
    McFlag,
    Noise,
    Rank,
    Temperature,
    Pressure,
    Virgin2d,
    Tau,
    DomInfo,
    MethInfo,
    Score,
    Scans,
    Scale,
    DmxVal,
    DmxFlag,
    DeltaTr,
    SrcName,
    UserName,
    OperName,
    Title,
    Comment,
}

impl GenParam {
    /// The parameter's fixed slot.
    pub(crate) fn loc(self) -> usize {
        match self {
            Self::Magic => loc::FDMAGIC,
            Self::FltFormat => loc::FDFLTFORMAT,
            Self::FltOrder => loc::FDFLTORDER,
            Self::Id => loc::FDID,
            Self::Size => loc::FDSIZE,
            Self::RealSize => loc::FDREALSIZE,
            Self::SpecNum => loc::FDSPECNUM,
            Self::QuadFlag => loc::FDQUADFLAG,
            Self::Phase2d => loc::FD2DPHASE,
            Self::Transposed => loc::FDTRANSPOSED,
            Self::DimCount => loc::FDDIMCOUNT,
            Self::DimOrder1 => loc::FDDIMORDER1,
            Self::DimOrder2 => loc::FDDIMORDER2,
            Self::DimOrder3 => loc::FDDIMORDER3,
            Self::DimOrder4 => loc::FDDIMORDER4,
            Self::NusDim => loc::FDNUSDIM,
            Self::PipeFlag => loc::FDPIPEFLAG,
            Self::CubeFlag => loc::FDCUBEFLAG,
            Self::PipeCount => loc::FDPIPECOUNT,
            Self::SliceCount0 => loc::FDSLICECOUNT0,
            Self::SliceCount1 => loc::FDSLICECOUNT1,
            Self::FileCount => loc::FDFILECOUNT,
            Self::ThreadCount => loc::FDTHREADCOUNT,
            Self::ThreadId => loc::FDTHREADID,
            Self::FirstPlane => loc::FDFIRSTPLANE,
            Self::LastPlane => loc::FDLASTPLANE,
            Self::Partition => loc::FDPARTITION,
            Self::PlaneLoc => loc::FDPLANELOC,
            Self::Max => loc::FDMAX,
            Self::Min => loc::FDMIN,
            Self::ScaleFlag => loc::FDSCALEFLAG,
            Self::DispMax => loc::FDDISPMAX,
            Self::DispMin => loc::FDDISPMIN,
            Self::PThresh => loc::FDPTHRESH,
            Self::NThresh => loc::FDNTHRESH,
            Self::User1 => loc::FDUSER1,
            Self::User2 => loc::FDUSER2,
            Self::User3 => loc::FDUSER3,
            Self::User4 => loc::FDUSER4,
            Self::User5 => loc::FDUSER5,
            Self::User6 => loc::FDUSER6,
            Self::LastBlock => loc::FDLASTBLOCK,
            Self::ContBlock => loc::FDCONTBLOCK,
            Self::BaseBlock => loc::FDBASEBLOCK,
            Self::PeakBlock => loc::FDPEAKBLOCK,
            Self::BmapBlock => loc::FDBMAPBLOCK,
            Self::HistBlock => loc::FDHISTBLOCK,
            Self::OneDBlock => loc::FD1DBLOCK,
            Self::Month => loc::FDMONTH,
            Self::Day => loc::FDDAY,
            Self::Year => loc::FDYEAR,
            Self::Hours => loc::FDHOURS,
            Self::Mins => loc::FDMINS,
            Self::Secs => loc::FDSECS,
            Self::McFlag => loc::FDMCFLAG,
            Self::Noise => loc::FDNOISE,
            Self::Rank => loc::FDRANK,
            Self::Temperature => loc::FDTEMPERATURE,
            Self::Pressure => loc::FDPRESSURE,
            Self::Virgin2d => loc::FD2DVIRGIN,
            Self::Tau => loc::FDTAU,
            Self::DomInfo => loc::FDDOMINFO,
            Self::MethInfo => loc::FDMETHINFO,
            Self::Score => loc::FDSCORE,
            Self::Scans => loc::FDSCANS,
            Self::Scale => loc::FDSCALE,
            Self::DmxVal => loc::FDDMXVAL,
            Self::DmxFlag => loc::FDDMXFLAG,
            Self::DeltaTr => loc::FDDELTATR,
            Self::SrcName => loc::FDSRCNAME,
            Self::UserName => loc::FDUSERNAME,
            Self::OperName => loc::FDOPERNAME,
            Self::Title => loc::FDTITLE,
            Self::Comment => loc::FDCOMMENT,
        }
    }
}

// ─── Axis-family parameters ─────────────────────────────────────────────────

/// Per-dimension parameters, present once per F1-F4 family.
///
/// Used either with an explicit [`FdDim`] (axis-concrete access) or with a
/// [`DimSelector`] (generalized ND access resolved through the
/// dimension-order record). `ApodDf` exists only in the F2 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum AxisParam {
    /// Number of points in the dimension.
    Size,
    /// Current valid time-domain size.
    Apod,
    /// Sweep width, Hz.
    Sw,
    /// Axis origin (last point), Hz.
    Orig,
    /// Observe frequency, MHz.
    Obs,
    /// Original observe frequency before 0.0ppm adjustment.
    ObsMid,
    /// 1 = frequency domain, 0 = time domain.
    FtFlag,
    /// Data type code.
    QuadFlag,
    /// Axis units code.
    Units,
    /// First half of the 8-char axis label.
    Label1,
    /// Second half of the 8-char axis label.
    Label2,
    /// Zero-order phase, degrees.
    P0,
    /// First-order phase, degrees.
    P1,
    /// Carrier position, PPM.
    Car,
    /// Point location of zero frequency.
    Center,
    /// Sign adjustment needed for FT.
    AqSign,
    /// Window function used.
    ApodCode,
    ApodQ1,
    ApodQ2,
    ApodQ3,
    /// Digital-filter window parameter; F2 only.
    ApodDf,
    /// Add 1.0 to get first-point scale.
    C1,
    /// Negative of zero-fill size.
    Zf,
    /// Extract region origin, pts.
    X1,
    /// Extract region endpoint, pts.
    Xn,
    /// Additional PPM offset for alignment.
    OffPpm,
    /// Size of data when FT performed.
    FtSize,
    /// Original valid time-domain size.
    TdSize,
    /// Extra exponential broadening, Hz.
    Lb,
    /// Extra Gaussian broadening, Hz.
    Gb,
    /// Offset for Gaussian broadening, 0 to 1.
    Goff,
    /// Acquisition method flags, shared across dimensions.
    AcqMethod,
    /// FT domain flags, shared across dimensions.
    FtDomain,
}

/// Number of [`AxisParam`] variants; rows in [`AXIS_LOC`].
const AXIS_PARM_COUNT: usize = 33;

/// Every axis parameter, in table order, for whole-family iteration.
pub(crate) const AXIS_PARAMS: [AxisParam; AXIS_PARM_COUNT] = [
    AxisParam::Size,
    AxisParam::Apod,
    AxisParam::Sw,
    AxisParam::Orig,
    AxisParam::Obs,
    AxisParam::ObsMid,
    AxisParam::FtFlag,
    AxisParam::QuadFlag,
    AxisParam::Units,
    AxisParam::Label1,
    AxisParam::Label2,
    AxisParam::P0,
    AxisParam::P1,
    AxisParam::Car,
    AxisParam::Center,
    AxisParam::AqSign,
    AxisParam::ApodCode,
    AxisParam::ApodQ1,
    AxisParam::ApodQ2,
    AxisParam::ApodQ3,
    AxisParam::ApodDf,
    AxisParam::C1,
    AxisParam::Zf,
    AxisParam::X1,
    AxisParam::Xn,
    AxisParam::OffPpm,
    AxisParam::FtSize,
    AxisParam::TdSize,
    AxisParam::Lb,
    AxisParam::Gb,
    AxisParam::Goff,
    AxisParam::AcqMethod,
    AxisParam::FtDomain,
];

/// Slot assignment per `[parameter][family]`, columns ordered F1 F2 F3 F4.
///
/// `None` marks a parameter with no location in that family. The
/// acquisition-method and FT-domain rows share one packed slot across all
/// families.
const AXIS_LOC: [[Option<usize>; 4]; AXIS_PARM_COUNT] = [
    // Size: the X-axis size and the slice count predate the F-family layout
    [
        Some(loc::FDSPECNUM),
        Some(loc::FDSIZE),
        Some(loc::FDF3SIZE),
        Some(loc::FDF4SIZE),
    ],
    [
        Some(loc::FDF1APOD),
        Some(loc::FDF2APOD),
        Some(loc::FDF3APOD),
        Some(loc::FDF4APOD),
    ],
    [
        Some(loc::FDF1SW),
        Some(loc::FDF2SW),
        Some(loc::FDF3SW),
        Some(loc::FDF4SW),
    ],
    [
        Some(loc::FDF1ORIG),
        Some(loc::FDF2ORIG),
        Some(loc::FDF3ORIG),
        Some(loc::FDF4ORIG),
    ],
    [
        Some(loc::FDF1OBS),
        Some(loc::FDF2OBS),
        Some(loc::FDF3OBS),
        Some(loc::FDF4OBS),
    ],
    [
        Some(loc::FDF1OBSMID),
        Some(loc::FDF2OBSMID),
        Some(loc::FDF3OBSMID),
        Some(loc::FDF4OBSMID),
    ],
    [
        Some(loc::FDF1FTFLAG),
        Some(loc::FDF2FTFLAG),
        Some(loc::FDF3FTFLAG),
        Some(loc::FDF4FTFLAG),
    ],
    [
        Some(loc::FDF1QUADFLAG),
        Some(loc::FDF2QUADFLAG),
        Some(loc::FDF3QUADFLAG),
        Some(loc::FDF4QUADFLAG),
    ],
    [
        Some(loc::FDF1UNITS),
        Some(loc::FDF2UNITS),
        Some(loc::FDF3UNITS),
        Some(loc::FDF4UNITS),
    ],
    [
        Some(loc::FDF1LABEL),
        Some(loc::FDF2LABEL),
        Some(loc::FDF3LABEL),
        Some(loc::FDF4LABEL),
    ],
    [
        Some(loc::FDF1LABEL + 1),
        Some(loc::FDF2LABEL + 1),
        Some(loc::FDF3LABEL + 1),
        Some(loc::FDF4LABEL + 1),
    ],
    [
        Some(loc::FDF1P0),
        Some(loc::FDF2P0),
        Some(loc::FDF3P0),
        Some(loc::FDF4P0),
    ],
    [
        Some(loc::FDF1P1),
        Some(loc::FDF2P1),
        Some(loc::FDF3P1),
        Some(loc::FDF4P1),
    ],
    [
        Some(loc::FDF1CAR),
        Some(loc::FDF2CAR),
        Some(loc::FDF3CAR),
        Some(loc::FDF4CAR),
    ],
    [
        Some(loc::FDF1CENTER),
        Some(loc::FDF2CENTER),
        Some(loc::FDF3CENTER),
        Some(loc::FDF4CENTER),
    ],
    [
        Some(loc::FDF1AQSIGN),
        Some(loc::FDF2AQSIGN),
        Some(loc::FDF3AQSIGN),
        Some(loc::FDF4AQSIGN),
    ],
    [
        Some(loc::FDF1APODCODE),
        Some(loc::FDF2APODCODE),
        Some(loc::FDF3APODCODE),
        Some(loc::FDF4APODCODE),
    ],
    [
        Some(loc::FDF1APODQ1),
        Some(loc::FDF2APODQ1),
        Some(loc::FDF3APODQ1),
        Some(loc::FDF4APODQ1),
    ],
    [
        Some(loc::FDF1APODQ2),
        Some(loc::FDF2APODQ2),
        Some(loc::FDF3APODQ2),
        Some(loc::FDF4APODQ2),
    ],
    [
        Some(loc::FDF1APODQ3),
        Some(loc::FDF2APODQ3),
        Some(loc::FDF3APODQ3),
        Some(loc::FDF4APODQ3),
    ],
    [None, Some(loc::FDF2APODDF), None, None],
    [
        Some(loc::FDF1C1),
        Some(loc::FDF2C1),
        Some(loc::FDF3C1),
        Some(loc::FDF4C1),
    ],
    [
        Some(loc::FDF1ZF),
        Some(loc::FDF2ZF),
        Some(loc::FDF3ZF),
        Some(loc::FDF4ZF),
    ],
    [
        Some(loc::FDF1X1),
        Some(loc::FDF2X1),
        Some(loc::FDF3X1),
        Some(loc::FDF4X1),
    ],
    [
        Some(loc::FDF1XN),
        Some(loc::FDF2XN),
        Some(loc::FDF3XN),
        Some(loc::FDF4XN),
    ],
    [
        Some(loc::FDF1OFFPPM),
        Some(loc::FDF2OFFPPM),
        Some(loc::FDF3OFFPPM),
        Some(loc::FDF4OFFPPM),
    ],
    [
        Some(loc::FDF1FTSIZE),
        Some(loc::FDF2FTSIZE),
        Some(loc::FDF3FTSIZE),
        Some(loc::FDF4FTSIZE),
    ],
    [
        Some(loc::FDF1TDSIZE),
        Some(loc::FDF2TDSIZE),
        Some(loc::FDF3TDSIZE),
        Some(loc::FDF4TDSIZE),
    ],
    [
        Some(loc::FDF1LB),
        Some(loc::FDF2LB),
        Some(loc::FDF3LB),
        Some(loc::FDF4LB),
    ],
    [
        Some(loc::FDF1GB),
        Some(loc::FDF2GB),
        Some(loc::FDF3GB),
        Some(loc::FDF4GB),
    ],
    [
        Some(loc::FDF1GOFF),
        Some(loc::FDF2GOFF),
        Some(loc::FDF3GOFF),
        Some(loc::FDF4GOFF),
    ],
    [
        Some(loc::FDMETHINFO),
        Some(loc::FDMETHINFO),
        Some(loc::FDMETHINFO),
        Some(loc::FDMETHINFO),
    ],
    [
        Some(loc::FDDOMINFO),
        Some(loc::FDDOMINFO),
        Some(loc::FDDOMINFO),
        Some(loc::FDDOMINFO),
    ],
];

impl AxisParam {
    /// Slot for this parameter in the given family, if one exists.
    pub(crate) fn loc(self, dim: FdDim) -> Option<usize> {
        AXIS_LOC[self as usize][dim.index()]
    }
}

// ─── Dimension selection ────────────────────────────────────────────────────

/// Selects which dimension an ND parameter refers to.
///
/// Both forms resolve through the dimension-order record; `CurDim` is
/// additionally validated against the declared dimension count, so it is
/// the form to use for data-driven dimension numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimSelector {
    /// An explicit storage axis.
    Axis(Axis),
    /// Dimension `n` of the data as currently ordered, 1-based (1 = the
    /// directly stored X-axis).
    CurDim(i32),
}

impl From<Axis> for DimSelector {
    fn from(axis: Axis) -> Self {
        Self::Axis(axis)
    }
}

impl From<i32> for DimSelector {
    fn from(n: i32) -> Self {
        Self::CurDim(n)
    }
}

impl Fdata {
    /// Resolve a selector to the acquisition-dimension family its storage
    /// axis currently carries.
    pub fn resolve_dim(&self, sel: impl Into<DimSelector>) -> Result<FdDim, HeaderError> {
        let axis = match sel.into() {
            DimSelector::Axis(axis) => axis,
            DimSelector::CurDim(n) => {
                let count = self.dim_count();
                let axis = Axis::from_i32(n).filter(|_| n <= count);
                axis.ok_or(HeaderError::InvalidDimension { dim: n, count })?
            }
        };
        let raw = self.slot(loc::FDDIMORDER + axis.index()) as i32;
        FdDim::from_i32(raw).ok_or(HeaderError::CorruptDimOrder { axis, value: raw })
    }

    fn nd_loc(&self, parm: AxisParam, sel: impl Into<DimSelector>) -> Result<usize, HeaderError> {
        let dim = self.resolve_dim(sel)?;
        parm.loc(dim).ok_or(HeaderError::UnmappedParameter {
            param: parm,
            dim: dim as i32,
        })
    }

    // ─── General parameters ─────────────────────────────────────────────

    /// Get a general parameter value.
    pub fn get_gen(&self, parm: GenParam) -> f32 {
        self.slot(parm.loc())
    }

    /// Get a general parameter as an integer.
    pub fn get_gen_i(&self, parm: GenParam) -> i32 {
        self.get_gen(parm) as i32
    }

    /// Set a general parameter value.
    pub fn set_gen(&mut self, parm: GenParam, val: f32) {
        self.set_slot(parm.loc(), val);
    }

    // ─── Axis-concrete (F-family) parameters ────────────────────────────

    /// Get a parameter value from an explicit F family.
    pub fn get_fd(&self, dim: FdDim, parm: AxisParam) -> Result<f32, HeaderError> {
        let slot = parm.loc(dim).ok_or(HeaderError::UnmappedParameter {
            param: parm,
            dim: dim as i32,
        })?;
        Ok(self.slot(slot))
    }

    /// Set a parameter value in an explicit F family.
    pub fn set_fd(&mut self, dim: FdDim, parm: AxisParam, val: f32) -> Result<(), HeaderError> {
        let slot = parm.loc(dim).ok_or(HeaderError::UnmappedParameter {
            param: parm,
            dim: dim as i32,
        })?;
        self.set_slot(slot, val);
        Ok(())
    }

    // ─── Generalized (ND) parameters ────────────────────────────────────

    /// Get a generalized parameter for the selected dimension.
    pub fn get_nd(
        &self,
        parm: AxisParam,
        sel: impl Into<DimSelector>,
    ) -> Result<f32, HeaderError> {
        Ok(self.slot(self.nd_loc(parm, sel)?))
    }

    /// Get a generalized parameter as an integer.
    pub fn get_nd_i(
        &self,
        parm: AxisParam,
        sel: impl Into<DimSelector>,
    ) -> Result<i32, HeaderError> {
        Ok(self.get_nd(parm, sel)? as i32)
    }

    /// Set a generalized parameter for the selected dimension.
    pub fn set_nd(
        &mut self,
        parm: AxisParam,
        sel: impl Into<DimSelector>,
        val: f32,
    ) -> Result<(), HeaderError> {
        let slot = self.nd_loc(parm, sel)?;
        self.set_slot(slot, val);
        Ok(())
    }

    // ─── Dimension exchange ─────────────────────────────────────────────

    /// Exchange the complete per-dimension parameter sets of two axes.
    ///
    /// Every F-family slot pair is swapped, not merely the order-record
    /// entries, so the values physically move between families. The
    /// order record itself is left untouched. Parameters present in only
    /// one of the two families (`ApodDf` outside F2) are skipped whole.
    ///
    /// Both selectors are resolved before any slot is written, so a
    /// failed resolution leaves the header unmodified. Applying the same
    /// exchange twice restores the original header.
    pub fn exchange_dims(
        &mut self,
        a: impl Into<DimSelector>,
        b: impl Into<DimSelector>,
    ) -> Result<(), HeaderError> {
        let da = self.resolve_dim(a)?;
        let db = self.resolve_dim(b)?;
        if da == db {
            return Ok(());
        }
        for parm in AXIS_PARAMS {
            if let (Some(sa), Some(sb)) = (parm.loc(da), parm.loc(db)) {
                if sa != sb {
                    let tmp = self.slot(sa);
                    self.set_slot(sa, self.slot(sb));
                    self.set_slot(sb, tmp);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_2d() -> Fdata {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_dim_count(2);
        fd
    }

    #[test]
    fn nd_resolution_follows_dim_order() {
        let mut fd = header_2d();
        // Default order (2 1 3 4): X carries F2, Y carries F1.
        fd.set_nd(AxisParam::Sw, Axis::X, 12000.0).unwrap();
        fd.set_nd(AxisParam::Sw, Axis::Y, 3000.0).unwrap();
        assert_eq!(fd.get_fd(FdDim::F2, AxisParam::Sw).unwrap(), 12000.0);
        assert_eq!(fd.get_fd(FdDim::F1, AxisParam::Sw).unwrap(), 3000.0);

        // After re-ordering, the same selector lands on the other family.
        fd.set_dim_order([FdDim::F1, FdDim::F2, FdDim::F3, FdDim::F4]);
        assert_eq!(fd.get_nd(AxisParam::Sw, Axis::X).unwrap(), 3000.0);
        assert_eq!(fd.get_nd(AxisParam::Sw, Axis::Y).unwrap(), 12000.0);
    }

    #[test]
    fn cur_dim_matches_axis_form() {
        let mut fd = header_2d();
        fd.set_nd(AxisParam::Obs, Axis::X, 600.13).unwrap();
        assert_eq!(
            fd.get_nd(AxisParam::Obs, 1).unwrap(),
            fd.get_nd(AxisParam::Obs, Axis::X).unwrap()
        );
    }

    #[test]
    fn cur_dim_is_validated_against_count() {
        let fd = header_2d();
        assert_eq!(
            fd.get_nd(AxisParam::Sw, 3),
            Err(HeaderError::InvalidDimension { dim: 3, count: 2 })
        );
        assert_eq!(
            fd.get_nd(AxisParam::Sw, 0),
            Err(HeaderError::InvalidDimension { dim: 0, count: 2 })
        );
        // The explicit-axis form is not bounded by the declared count.
        assert!(fd.get_nd(AxisParam::Sw, Axis::Z).is_ok());
    }

    #[test]
    fn unmapped_parameter_is_reported() {
        let fd = header_2d();
        // ApodDf exists only in the F2 family; Y carries F1 by default.
        assert!(fd.get_nd(AxisParam::ApodDf, Axis::X).is_ok());
        assert_eq!(
            fd.get_nd(AxisParam::ApodDf, Axis::Y),
            Err(HeaderError::UnmappedParameter {
                param: AxisParam::ApodDf,
                dim: 1
            })
        );
        assert!(fd.get_fd(FdDim::F3, AxisParam::ApodDf).is_err());
    }

    #[test]
    fn get_set_parm() {
        let mut fd = header_2d();
        fd.set_nd(AxisParam::Size, Axis::X, 1024.0).unwrap();
        fd.set_nd(AxisParam::Size, Axis::Y, 256.0).unwrap();
        assert_eq!(fd.get_nd_i(AxisParam::Size, Axis::X).unwrap(), 1024);
        assert_eq!(fd.get_nd_i(AxisParam::Size, Axis::Y).unwrap(), 256);
        fd.set_gen(GenParam::Noise, 1.5);
        assert_eq!(fd.get_gen(GenParam::Noise), 1.5);
    }

    #[test]
    fn exchange_moves_every_family_slot() {
        let mut fd = header_2d();
        fd.set_nd(AxisParam::Sw, Axis::X, 12000.0).unwrap();
        fd.set_nd(AxisParam::Sw, Axis::Y, 3000.0).unwrap();
        fd.set_nd(AxisParam::Car, Axis::X, 4.7).unwrap();
        fd.set_nd(AxisParam::Car, Axis::Y, 118.0).unwrap();

        fd.exchange_dims(Axis::X, Axis::Y).unwrap();
        assert_eq!(fd.get_nd(AxisParam::Sw, Axis::X).unwrap(), 3000.0);
        assert_eq!(fd.get_nd(AxisParam::Sw, Axis::Y).unwrap(), 12000.0);
        assert_eq!(fd.get_nd(AxisParam::Car, Axis::X).unwrap(), 118.0);
        // The order record is untouched; only the family contents moved.
        assert_eq!(
            fd.dim_order().unwrap(),
            [FdDim::F2, FdDim::F1, FdDim::F3, FdDim::F4]
        );
    }

    #[test]
    fn exchange_twice_is_identity() {
        let mut fd = header_2d();
        fd.set_nd(AxisParam::Sw, Axis::X, 8000.0).unwrap();
        fd.set_nd(AxisParam::Obs, Axis::Y, 60.81).unwrap();
        fd.set_nd(AxisParam::P0, Axis::X, -90.0).unwrap();
        let orig = fd.clone();

        fd.exchange_dims(Axis::X, Axis::Y).unwrap();
        assert_ne!(fd, orig);
        fd.exchange_dims(Axis::X, Axis::Y).unwrap();
        assert_eq!(fd, orig);
    }

    #[test]
    fn exchange_failure_leaves_header_unmodified() {
        let mut fd = header_2d();
        fd.set_nd(AxisParam::Sw, Axis::X, 8000.0).unwrap();
        let orig = fd.clone();
        assert!(fd.exchange_dims(Axis::X, 4).is_err());
        assert_eq!(fd, orig);
    }
}
