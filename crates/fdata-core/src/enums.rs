//! Enumerations for FDATA data types, axis codes, and unit codes.

use std::fmt;

// ─── Storage axes and dimension families ────────────────────────────────────

/// Storage axis of the data as currently laid out on disk or in memory.
///
/// The X-axis is the directly stored (fastest-varying) vector; Y, Z and A
/// follow. Which acquisition dimension a given axis carries is recorded in
/// the header's dimension-order slots and changes under transposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Axis {
    X = 1,
    Y = 2,
    Z = 3,
    A = 4,
}

impl Axis {
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            1 => Some(Self::X),
            2 => Some(Self::Y),
            3 => Some(Self::Z),
            4 => Some(Self::A),
            _ => None,
        }
    }

    /// 0-based offset into the dimension-order record.
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the lowercase axis letter.
    pub fn axis_char_lower(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::A => 'a',
        }
    }

    /// Returns the uppercase axis letter.
    pub fn axis_char_upper(self) -> char {
        self.axis_char_lower().to_ascii_uppercase()
    }
}

/// Acquisition-dimension family F1-F4.
///
/// These are fixed parameter families in the header; the dimension-order
/// record says which family each storage [`Axis`] currently carries. The
/// numbering is a hold-over from the oldest 2D NMR definitions, where the
/// directly-acquired dimension was always t2: a newly-converted FID has
/// dimension order (2 1 3 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum FdDim {
    F1 = 1,
    F2 = 2,
    F3 = 3,
    F4 = 4,
}

impl FdDim {
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            1 => Some(Self::F1),
            2 => Some(Self::F2),
            3 => Some(Self::F3),
            4 => Some(Self::F4),
            _ => None,
        }
    }

    /// 0-based column into the per-family location tables.
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for FdDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", *self as i32)
    }
}

// ─── Axis units (NDUNITS) ───────────────────────────────────────────────────

/// Axis unit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum AxisUnit {
    Sec = 1,
    Hz = 2,
    Ppm = 3,
    Pts = 4,
}

impl AxisUnit {
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            1 => Some(Self::Sec),
            2 => Some(Self::Hz),
            3 => Some(Self::Ppm),
            4 => Some(Self::Pts),
            _ => None,
        }
    }
}

// ─── 2D plane type (FD2DPHASE) ──────────────────────────────────────────────

/// 2D plane acquisition mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Phase2D {
    Magnitude = 0,
    Tppi = 1,
    States = 2,
    Image = 3,
    Array = 4,
}

impl Phase2D {
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            0 => Some(Self::Magnitude),
            1 => Some(Self::Tppi),
            2 => Some(Self::States),
            3 => Some(Self::Image),
            4 => Some(Self::Array),
            _ => None,
        }
    }
}

impl fmt::Display for Phase2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Magnitude => write!(f, "Magnitude"),
            Self::Tppi => write!(f, "TPPI"),
            Self::States => write!(f, "States"),
            Self::Image => write!(f, "Image"),
            Self::Array => write!(f, "Array"),
        }
    }
}

// ─── Data type / quad flag (FDQUADFLAG, NDQUADFLAG) ─────────────────────────

/// Quadrature / data type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum QuadFlag {
    /// Complex (quad detected).
    Complex = 0,
    /// Real (singlature).
    Real = 1,
    /// Pseudo-quad (treated as real on output).
    PseudoQuad = 2,
    /// States-Echo (SE).
    StatesEcho = 3,
    /// Gradient (Rance-Kay / Echo-AntiEcho).
    Gradient = 4,
}

impl QuadFlag {
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            0 => Some(Self::Complex),
            1 => Some(Self::Real),
            2 => Some(Self::PseudoQuad),
            3 => Some(Self::StatesEcho),
            4 => Some(Self::Gradient),
            _ => None,
        }
    }

    pub fn is_complex(self) -> bool {
        self == Self::Complex
    }
}

impl fmt::Display for QuadFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complex => write!(f, "Complex"),
            Self::Real => write!(f, "Real"),
            Self::PseudoQuad => write!(f, "PseudoQuad"),
            Self::StatesEcho => write!(f, "States-Echo"),
            Self::Gradient => write!(f, "Gradient"),
        }
    }
}

// ─── Sign alternation (NDAQSIGN) ────────────────────────────────────────────

/// Sign alternation needed for Fourier transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum AqSign {
    None = 0,
    Sequential = 1,
    States = 2,
    NoneNeg = 16,
    SequentialNeg = 17,
    StatesNeg = 18,
}

impl AqSign {
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            0 => Some(Self::None),
            1 => Some(Self::Sequential),
            2 => Some(Self::States),
            16 => Some(Self::NoneNeg),
            17 => Some(Self::SequentialNeg),
            18 => Some(Self::StatesNeg),
            _ => None,
        }
    }
}

// ─── Acquisition method / FT domain ─────────────────────────────────────────

/// Acquisition method (NDACQMETHOD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum AcqMethod {
    /// FT-based acquisition.
    Ft = 0,
    /// Direct (non-FT) acquisition.
    Direct = 1,
}

/// FT domain type (NDFTDOMAIN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum FtDomain {
    /// Spectral domain.
    Spectral = 0,
    /// Spatial domain.
    Spatial = 1,
}

// ─── Header validation ──────────────────────────────────────────────────────

/// Advisory verdict of header validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HdrStatus {
    /// Structurally valid, native byte order.
    Ok,
    /// Structurally valid, but foreign byte order; swap before trusting
    /// numeric values.
    Swapped,
    /// Magic nonzero, sentinels unrecognized, or dimension count out of
    /// range.
    Bad,
}
