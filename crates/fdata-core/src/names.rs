//! Symbolic parameter names.
//!
//! Scripted tools address header values by the published parameter names
//! ("FDSIZE", "FDF2SW", "NDSW", ...). This module maps those names onto
//! the typed identifiers and back, plus the list of named numeric
//! constants ("IEEECONS", "ALT_STATES", ...) that the same tools rely on.

use crate::enums::FdDim::{F1, F2, F3, F4};
use crate::fdata::{FDATA_SIZE, FD_IEEE_CONS, FD_ORDER_CONS, FD_VAX_CONS, ZERO_EQUIV};
use crate::param::AxisParam::*;
use crate::param::GenParam as G;
use crate::param::{AxisParam, GenParam};
use crate::enums::FdDim;

/// A parameter addressed by name: general, axis-concrete, or generalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedParam {
    Gen(GenParam),
    Fd(FdDim, AxisParam),
    Nd(AxisParam),
}

use NamedParam::{Fd, Gen, Nd};

impl NamedParam {
    /// The published name for this parameter, if it has one. Canonical
    /// inverse of [`lookup`].
    pub fn name(self) -> Option<&'static str> {
        NAME_TABLE
            .iter()
            .find(|(_, p)| *p == self)
            .map(|(name, _)| *name)
    }

    /// The fixed slot this name resolves to, if it does not require the
    /// dimension resolver (`Nd` names do).
    pub fn fixed_loc(self) -> Option<usize> {
        match self {
            Gen(p) => Some(p.loc()),
            Fd(dim, p) => p.loc(dim),
            Nd(_) => None,
        }
    }
}

/// Resolve a published parameter name.
pub fn lookup(name: &str) -> Option<NamedParam> {
    NAME_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, p)| *p)
}

/// Every published name and its identifier. Canonical names first, legacy
/// aliases at the end, so reverse lookup by identifier finds the
/// canonical spelling.
pub static NAME_TABLE: &[(&str, NamedParam)] = &[
    ("FDMAGIC", Gen(G::Magic)),
    ("FDFLTFORMAT", Gen(G::FltFormat)),
    ("FDFLTORDER", Gen(G::FltOrder)),
    ("FDID", Gen(G::Id)),
    ("FDSIZE", Gen(G::Size)),
    ("FDREALSIZE", Gen(G::RealSize)),
    ("FDSPECNUM", Gen(G::SpecNum)),
    ("FDQUADFLAG", Gen(G::QuadFlag)),
    ("FD2DPHASE", Gen(G::Phase2d)),
    ("FDTRANSPOSED", Gen(G::Transposed)),
    ("FDDIMCOUNT", Gen(G::DimCount)),
    ("FDNUSDIM", Gen(G::NusDim)),
    ("FDDIMORDER1", Gen(G::DimOrder1)),
    ("FDDIMORDER2", Gen(G::DimOrder2)),
    ("FDDIMORDER3", Gen(G::DimOrder3)),
    ("FDDIMORDER4", Gen(G::DimOrder4)),
    ("FDPIPEFLAG", Gen(G::PipeFlag)),
    ("FDCUBEFLAG", Gen(G::CubeFlag)),
    ("FDPIPECOUNT", Gen(G::PipeCount)),
    ("FDSLICECOUNT0", Gen(G::SliceCount0)),
    ("FDSLICECOUNT1", Gen(G::SliceCount1)),
    ("FDFILECOUNT", Gen(G::FileCount)),
    ("FDTHREADCOUNT", Gen(G::ThreadCount)),
    ("FDTHREADID", Gen(G::ThreadId)),
    ("FDFIRSTPLANE", Gen(G::FirstPlane)),
    ("FDLASTPLANE", Gen(G::LastPlane)),
    ("FDPARTITION", Gen(G::Partition)),
    ("FDPLANELOC", Gen(G::PlaneLoc)),
    ("FDDMXVAL", Gen(G::DmxVal)),
    ("FDDMXFLAG", Gen(G::DmxFlag)),
    ("FDDELTATR", Gen(G::DeltaTr)),
    ("FDMAX", Gen(G::Max)),
    ("FDMIN", Gen(G::Min)),
    ("FDSCALEFLAG", Gen(G::ScaleFlag)),
    ("FDDISPMAX", Gen(G::DispMax)),
    ("FDDISPMIN", Gen(G::DispMin)),
    ("FDPTHRESH", Gen(G::PThresh)),
    ("FDNTHRESH", Gen(G::NThresh)),
    ("FDUSER1", Gen(G::User1)),
    ("FDUSER2", Gen(G::User2)),
    ("FDUSER3", Gen(G::User3)),
    ("FDUSER4", Gen(G::User4)),
    ("FDUSER5", Gen(G::User5)),
    ("FDUSER6", Gen(G::User6)),
    ("FDLASTBLOCK", Gen(G::LastBlock)),
    ("FDCONTBLOCK", Gen(G::ContBlock)),
    ("FDBASEBLOCK", Gen(G::BaseBlock)),
    ("FDPEAKBLOCK", Gen(G::PeakBlock)),
    ("FDBMAPBLOCK", Gen(G::BmapBlock)),
    ("FDHISTBLOCK", Gen(G::HistBlock)),
    ("FD1DBLOCK", Gen(G::OneDBlock)),
    ("FDMONTH", Gen(G::Month)),
    ("FDDAY", Gen(G::Day)),
    ("FDYEAR", Gen(G::Year)),
    ("FDHOURS", Gen(G::Hours)),
    ("FDMINS", Gen(G::Mins)),
    ("FDSECS", Gen(G::Secs)),
    ("FDMCFLAG", Gen(G::McFlag)),
    ("FDNOISE", Gen(G::Noise)),
    ("FDRANK", Gen(G::Rank)),
    ("FDSCORE", Gen(G::Score)),
    ("FDSCANS", Gen(G::Scans)),
    ("FDSCALE", Gen(G::Scale)),
    ("FDTEMPERATURE", Gen(G::Temperature)),
    ("FDPRESSURE", Gen(G::Pressure)),
    ("FD2DVIRGIN", Gen(G::Virgin2d)),
    ("FDTAU", Gen(G::Tau)),
    ("FDDOMINFO", Gen(G::DomInfo)),
    ("FDMETHINFO", Gen(G::MethInfo)),
    ("FDSRCNAME", Gen(G::SrcName)),
    ("FDUSERNAME", Gen(G::UserName)),
    ("FDOPERNAME", Gen(G::OperName)),
    ("FDTITLE", Gen(G::Title)),
    ("FDCOMMENT", Gen(G::Comment)),
    // F2 family
    ("FDF2LABEL", Fd(F2, Label1)),
    ("FDF2APOD", Fd(F2, Apod)),
    ("FDF2SW", Fd(F2, Sw)),
    ("FDF2OBS", Fd(F2, Obs)),
    ("FDF2OBSMID", Fd(F2, ObsMid)),
    ("FDF2ORIG", Fd(F2, Orig)),
    ("FDF2UNITS", Fd(F2, Units)),
    ("FDF2QUADFLAG", Fd(F2, QuadFlag)),
    ("FDF2FTFLAG", Fd(F2, FtFlag)),
    ("FDF2AQSIGN", Fd(F2, AqSign)),
    ("FDF2CAR", Fd(F2, Car)),
    ("FDF2CENTER", Fd(F2, Center)),
    ("FDF2OFFPPM", Fd(F2, OffPpm)),
    ("FDF2P0", Fd(F2, P0)),
    ("FDF2P1", Fd(F2, P1)),
    ("FDF2APODCODE", Fd(F2, ApodCode)),
    ("FDF2APODQ1", Fd(F2, ApodQ1)),
    ("FDF2APODQ2", Fd(F2, ApodQ2)),
    ("FDF2APODQ3", Fd(F2, ApodQ3)),
    ("FDF2APODDF", Fd(F2, ApodDf)),
    ("FDF2LB", Fd(F2, Lb)),
    ("FDF2GB", Fd(F2, Gb)),
    ("FDF2GOFF", Fd(F2, Goff)),
    ("FDF2C1", Fd(F2, C1)),
    ("FDF2ZF", Fd(F2, Zf)),
    ("FDF2X1", Fd(F2, X1)),
    ("FDF2XN", Fd(F2, Xn)),
    ("FDF2FTSIZE", Fd(F2, FtSize)),
    ("FDF2TDSIZE", Fd(F2, TdSize)),
    // F1 family
    ("FDF1LABEL", Fd(F1, Label1)),
    ("FDF1APOD", Fd(F1, Apod)),
    ("FDF1SW", Fd(F1, Sw)),
    ("FDF1OBS", Fd(F1, Obs)),
    ("FDF1OBSMID", Fd(F1, ObsMid)),
    ("FDF1ORIG", Fd(F1, Orig)),
    ("FDF1UNITS", Fd(F1, Units)),
    ("FDF1FTFLAG", Fd(F1, FtFlag)),
    ("FDF1AQSIGN", Fd(F1, AqSign)),
    ("FDF1QUADFLAG", Fd(F1, QuadFlag)),
    ("FDF1CAR", Fd(F1, Car)),
    ("FDF1CENTER", Fd(F1, Center)),
    ("FDF1OFFPPM", Fd(F1, OffPpm)),
    ("FDF1P0", Fd(F1, P0)),
    ("FDF1P1", Fd(F1, P1)),
    ("FDF1APODCODE", Fd(F1, ApodCode)),
    ("FDF1APODQ1", Fd(F1, ApodQ1)),
    ("FDF1APODQ2", Fd(F1, ApodQ2)),
    ("FDF1APODQ3", Fd(F1, ApodQ3)),
    ("FDF1LB", Fd(F1, Lb)),
    ("FDF1GB", Fd(F1, Gb)),
    ("FDF1GOFF", Fd(F1, Goff)),
    ("FDF1C1", Fd(F1, C1)),
    ("FDF1ZF", Fd(F1, Zf)),
    ("FDF1X1", Fd(F1, X1)),
    ("FDF1XN", Fd(F1, Xn)),
    ("FDF1FTSIZE", Fd(F1, FtSize)),
    ("FDF1TDSIZE", Fd(F1, TdSize)),
    // F3 family
    ("FDF3LABEL", Fd(F3, Label1)),
    ("FDF3APOD", Fd(F3, Apod)),
    ("FDF3OBS", Fd(F3, Obs)),
    ("FDF3OBSMID", Fd(F3, ObsMid)),
    ("FDF3SW", Fd(F3, Sw)),
    ("FDF3ORIG", Fd(F3, Orig)),
    ("FDF3FTFLAG", Fd(F3, FtFlag)),
    ("FDF3AQSIGN", Fd(F3, AqSign)),
    ("FDF3SIZE", Fd(F3, Size)),
    ("FDF3QUADFLAG", Fd(F3, QuadFlag)),
    ("FDF3UNITS", Fd(F3, Units)),
    ("FDF3P0", Fd(F3, P0)),
    ("FDF3P1", Fd(F3, P1)),
    ("FDF3CAR", Fd(F3, Car)),
    ("FDF3CENTER", Fd(F3, Center)),
    ("FDF3OFFPPM", Fd(F3, OffPpm)),
    ("FDF3APODCODE", Fd(F3, ApodCode)),
    ("FDF3APODQ1", Fd(F3, ApodQ1)),
    ("FDF3APODQ2", Fd(F3, ApodQ2)),
    ("FDF3APODQ3", Fd(F3, ApodQ3)),
    ("FDF3LB", Fd(F3, Lb)),
    ("FDF3GB", Fd(F3, Gb)),
    ("FDF3GOFF", Fd(F3, Goff)),
    ("FDF3C1", Fd(F3, C1)),
    ("FDF3ZF", Fd(F3, Zf)),
    ("FDF3X1", Fd(F3, X1)),
    ("FDF3XN", Fd(F3, Xn)),
    ("FDF3FTSIZE", Fd(F3, FtSize)),
    ("FDF3TDSIZE", Fd(F3, TdSize)),
    // F4 family
    ("FDF4LABEL", Fd(F4, Label1)),
    ("FDF4APOD", Fd(F4, Apod)),
    ("FDF4OBS", Fd(F4, Obs)),
    ("FDF4OBSMID", Fd(F4, ObsMid)),
    ("FDF4SW", Fd(F4, Sw)),
    ("FDF4ORIG", Fd(F4, Orig)),
    ("FDF4FTFLAG", Fd(F4, FtFlag)),
    ("FDF4AQSIGN", Fd(F4, AqSign)),
    ("FDF4SIZE", Fd(F4, Size)),
    ("FDF4QUADFLAG", Fd(F4, QuadFlag)),
    ("FDF4UNITS", Fd(F4, Units)),
    ("FDF4P0", Fd(F4, P0)),
    ("FDF4P1", Fd(F4, P1)),
    ("FDF4CAR", Fd(F4, Car)),
    ("FDF4CENTER", Fd(F4, Center)),
    ("FDF4OFFPPM", Fd(F4, OffPpm)),
    ("FDF4APODCODE", Fd(F4, ApodCode)),
    ("FDF4APODQ1", Fd(F4, ApodQ1)),
    ("FDF4APODQ2", Fd(F4, ApodQ2)),
    ("FDF4APODQ3", Fd(F4, ApodQ3)),
    ("FDF4LB", Fd(F4, Lb)),
    ("FDF4GB", Fd(F4, Gb)),
    ("FDF4GOFF", Fd(F4, Goff)),
    ("FDF4C1", Fd(F4, C1)),
    ("FDF4ZF", Fd(F4, Zf)),
    ("FDF4X1", Fd(F4, X1)),
    ("FDF4XN", Fd(F4, Xn)),
    ("FDF4FTSIZE", Fd(F4, FtSize)),
    ("FDF4TDSIZE", Fd(F4, TdSize)),
    // Generalized ND parameters
    ("NDSIZE", Nd(Size)),
    ("NDAPOD", Nd(Apod)),
    ("NDSW", Nd(Sw)),
    ("NDORIG", Nd(Orig)),
    ("NDOBS", Nd(Obs)),
    ("NDOBSMID", Nd(ObsMid)),
    ("NDFTFLAG", Nd(FtFlag)),
    ("NDQUADFLAG", Nd(QuadFlag)),
    ("NDUNITS", Nd(Units)),
    ("NDLABEL1", Nd(Label1)),
    ("NDLABEL2", Nd(Label2)),
    ("NDP0", Nd(P0)),
    ("NDP1", Nd(P1)),
    ("NDCAR", Nd(Car)),
    ("NDCENTER", Nd(Center)),
    ("NDAQSIGN", Nd(AqSign)),
    ("NDAPODCODE", Nd(ApodCode)),
    ("NDAPODQ1", Nd(ApodQ1)),
    ("NDAPODQ2", Nd(ApodQ2)),
    ("NDAPODQ3", Nd(ApodQ3)),
    ("NDC1", Nd(C1)),
    ("NDZF", Nd(Zf)),
    ("NDX1", Nd(X1)),
    ("NDXN", Nd(Xn)),
    ("NDOFFPPM", Nd(OffPpm)),
    ("NDFTSIZE", Nd(FtSize)),
    ("NDTDSIZE", Nd(TdSize)),
    ("NDACQMETHOD", Nd(AcqMethod)),
    ("NDFTDOMAIN", Nd(FtDomain)),
    ("NDLB", Nd(Lb)),
    ("NDGB", Nd(Gb)),
    ("NDGOFF", Nd(Goff)),
    // Legacy aliases
    ("FDDIMORDER", Gen(G::DimOrder1)),
    ("FDSLICECOUNT", Gen(G::SliceCount0)),
    ("NDLABEL", Nd(Label1)),
];

/// Look up a named numeric constant ("IEEECONS", "ALT_STATES", ...).
///
/// These mirror the published value list; sentinel constants are given as
/// their numeric conversions, the way legacy scripts compare them.
pub fn named_value(name: &str) -> Option<f32> {
    let v = match name {
        "FDATASIZE" => FDATA_SIZE as f32,
        "MAX_NDPARAM" => 32.0,
        "IEEECONS" | "FMTCONS" => FD_IEEE_CONS as f32,
        "VAXCONS" => FD_VAX_CONS as f32,
        "ORDERCONS" => FD_ORDER_CONS,
        "ZERO_EQUIV" => ZERO_EQUIV,
        "SEC" => 1.0,
        "HZ" => 2.0,
        "PPM" => 3.0,
        "PTS" => 4.0,
        "MAGNITUDE" => 0.0,
        "TPPI" => 1.0,
        "STATES" => 2.0,
        "IMAGE" => 3.0,
        "QUAD" | "COMPLEX" => 0.0,
        "SINGLATURE" | "REAL" => 1.0,
        "PSEUDOQUAD" => 2.0,
        "ALT_NONE" => 0.0,
        "ALT_SEQUENTIAL" => 1.0,
        "ALT_STATES" => 2.0,
        "ALT_NONE_NEG" => 16.0,
        "ALT_SEQUENTIAL_NEG" => 17.0,
        "ALT_STATES_NEG" => 18.0,
        "FOLD_INVERT" => -1.0,
        "FOLD_BAD" => 0.0,
        "FOLD_ORDINARY" => 1.0,
        _ => return None,
    };
    Some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_name_are_inverse() {
        for (name, parm) in NAME_TABLE {
            assert_eq!(lookup(name), Some(*parm), "{name}");
        }
        // Reverse lookup returns the canonical spelling, not an alias.
        assert_eq!(Gen(G::DimOrder1).name(), Some("FDDIMORDER1"));
        assert_eq!(Gen(G::SliceCount0).name(), Some("FDSLICECOUNT0"));
        assert_eq!(Nd(Label1).name(), Some("NDLABEL1"));
    }

    #[test]
    fn fixed_locations_match_published_offsets() {
        assert_eq!(lookup("FDMAGIC").unwrap().fixed_loc(), Some(0));
        assert_eq!(lookup("FDSIZE").unwrap().fixed_loc(), Some(99));
        assert_eq!(lookup("FDF1SW").unwrap().fixed_loc(), Some(229));
        assert_eq!(lookup("FDF2SW").unwrap().fixed_loc(), Some(100));
        assert_eq!(lookup("FDF3SIZE").unwrap().fixed_loc(), Some(15));
        assert_eq!(lookup("FDF4TDSIZE").unwrap().fixed_loc(), Some(389));
        assert_eq!(lookup("FDCUBEFLAG").unwrap().fixed_loc(), Some(447));
        assert_eq!(lookup("FDOPERNAME").unwrap().fixed_loc(), Some(464));
        // ND names need the dimension resolver.
        assert_eq!(lookup("NDSW").unwrap().fixed_loc(), None);
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(lookup("FDDIMORDER"), Some(Gen(G::DimOrder1)));
        assert_eq!(lookup("FDSLICECOUNT"), Some(Gen(G::SliceCount0)));
        assert_eq!(lookup("NDLABEL"), Some(Nd(Label1)));
        assert_eq!(lookup("NOSUCHNAME"), None);
    }

    #[test]
    fn named_values() {
        assert_eq!(named_value("FDATASIZE"), Some(512.0));
        assert_eq!(named_value("MAX_NDPARAM"), Some(32.0));
        assert_eq!(named_value("ORDERCONS"), Some(2.345));
        assert_eq!(named_value("ZERO_EQUIV"), Some(-666.0));
        assert_eq!(named_value("ALT_STATES_NEG"), Some(18.0));
        assert_eq!(named_value("COMPLEX"), Some(0.0));
        assert_eq!(named_value("NOSUCH"), None);
    }

    #[test]
    fn every_name_is_unique() {
        for (i, (name, _)) in NAME_TABLE.iter().enumerate() {
            let dup = NAME_TABLE
                .iter()
                .skip(i + 1)
                .any(|(other, _)| other == name);
            assert!(!dup, "duplicate name {name}");
        }
    }
}
