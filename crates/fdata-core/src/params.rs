//! High-level parameter helpers.
//!
//! These wrap the typed accessors with common compound operations:
//! setting up a dimension's spectral block in one call, computing the
//! spectral origin, and reading the identity/text fields.

use crate::enums::{AqSign, Axis, Phase2D, QuadFlag};
use crate::error::HeaderError;
use crate::fdata::Fdata;
use crate::param::{AxisParam, DimSelector, GenParam};
use crate::text::TextField;

impl Fdata {
    // ─── Convenience getters ────────────────────────────────────────────

    /// Number of points (real or complex, per the quad flag) for a
    /// dimension.
    pub fn get_size(&self, dim: impl Into<DimSelector>) -> Result<i32, HeaderError> {
        self.get_nd_i(AxisParam::Size, dim)
    }

    /// Set the size for a dimension.
    pub fn set_size(&mut self, dim: impl Into<DimSelector>, size: i32) -> Result<(), HeaderError> {
        self.set_nd(AxisParam::Size, dim, size as f32)
    }

    /// Spectral width in Hz.
    pub fn get_sw(&self, dim: impl Into<DimSelector>) -> Result<f64, HeaderError> {
        Ok(self.get_nd(AxisParam::Sw, dim)? as f64)
    }

    /// Observe frequency in MHz.
    pub fn get_obs(&self, dim: impl Into<DimSelector>) -> Result<f64, HeaderError> {
        Ok(self.get_nd(AxisParam::Obs, dim)? as f64)
    }

    /// Spectral origin (last point) in Hz.
    pub fn get_orig(&self, dim: impl Into<DimSelector>) -> Result<f64, HeaderError> {
        Ok(self.get_nd(AxisParam::Orig, dim)? as f64)
    }

    /// Carrier position in PPM.
    pub fn get_car(&self, dim: impl Into<DimSelector>) -> Result<f64, HeaderError> {
        Ok(self.get_nd(AxisParam::Car, dim)? as f64)
    }

    /// Is this dimension in the frequency domain?
    pub fn is_freq(&self, dim: impl Into<DimSelector>) -> Result<bool, HeaderError> {
        Ok(self.get_nd_i(AxisParam::FtFlag, dim)? != 0)
    }

    /// Is this dimension's data complex?
    pub fn is_complex(&self, dim: impl Into<DimSelector>) -> Result<bool, HeaderError> {
        let qf = self.get_nd_i(AxisParam::QuadFlag, dim)?;
        Ok(QuadFlag::from_i32(qf).is_some_and(QuadFlag::is_complex))
    }

    // ─── Dimension setup ────────────────────────────────────────────────

    /// Set up a dimension's spectral parameters in one call: size, sweep
    /// width, observe frequency, origin, carrier, label, and data type.
    /// The dimension starts in the time domain.
    pub fn set_dim_spectral(
        &mut self,
        dim: impl Into<DimSelector> + Copy,
        size: i32,
        sw: f64,
        obs: f64,
        orig: f64,
        car: f64,
        label: &str,
        is_complex: bool,
    ) -> Result<(), HeaderError> {
        self.set_nd(AxisParam::Size, dim, size as f32)?;
        self.set_nd(AxisParam::Sw, dim, sw as f32)?;
        self.set_nd(AxisParam::Obs, dim, obs as f32)?;
        self.set_nd(AxisParam::Orig, dim, orig as f32)?;
        self.set_nd(AxisParam::Car, dim, car as f32)?;
        self.set_nd_label(dim, label)?;
        let quad = if is_complex {
            QuadFlag::Complex
        } else {
            QuadFlag::Real
        };
        self.set_nd(AxisParam::QuadFlag, dim, quad as i32 as f32)?;
        self.set_nd(AxisParam::FtFlag, dim, 0.0)
    }

    /// Compute and set the spectral origin from carrier, sweep width,
    /// observe frequency, and size:
    ///
    /// ```text
    ///   orig = car*obs - sw*(center-1)/size        when a center is set
    ///   orig = car*obs - sw/2 + sw/(2*size)        otherwise
    /// ```
    pub fn compute_orig(&mut self, dim: impl Into<DimSelector> + Copy) -> Result<(), HeaderError> {
        let sw = self.get_sw(dim)?;
        let obs = self.get_obs(dim)?;
        let car = self.get_car(dim)?;
        let size = self.get_size(dim)? as f64;
        let center = self.get_nd(AxisParam::Center, dim)? as f64;

        if obs > 0.0 && sw > 0.0 && size > 0.0 {
            let orig = if center > 0.0 {
                car * obs - sw * (center - 1.0) / size
            } else {
                car * obs - sw / 2.0 + sw / (2.0 * size)
            };
            self.set_nd(AxisParam::Orig, dim, orig as f32)?;
        }
        Ok(())
    }

    /// Set the sign adjustment (quadrature detection method).
    pub fn set_aqsign(
        &mut self,
        dim: impl Into<DimSelector>,
        aqsign: AqSign,
    ) -> Result<(), HeaderError> {
        self.set_nd(AxisParam::AqSign, dim, aqsign as i32 as f32)
    }

    // ─── Whole-header flags ─────────────────────────────────────────────

    /// Set the 2D plane acquisition mode.
    pub fn set_phase2d(&mut self, phase: Phase2D) {
        self.set_gen(GenParam::Phase2d, phase as i32 as f32);
    }

    /// The 2D plane acquisition mode.
    pub fn get_phase2d(&self) -> Phase2D {
        Phase2D::from_i32(self.get_gen_i(GenParam::Phase2d)).unwrap_or(Phase2D::Magnitude)
    }

    /// Mark the data transposed or not.
    pub fn set_transposed(&mut self, transposed: bool) {
        self.set_gen(GenParam::Transposed, if transposed { 1.0 } else { 0.0 });
    }

    /// Is the data transposed?
    pub fn is_transposed(&self) -> bool {
        self.get_gen_i(GenParam::Transposed) != 0
    }

    /// Record which axis a data stream carries (0 = not a stream).
    pub fn set_pipe_axis(&mut self, axis: Option<Axis>) {
        let code = axis.map_or(0, |a| a as i32);
        self.set_gen(GenParam::PipeFlag, code as f32);
    }

    /// Is the data in pipeline-stream form?
    pub fn is_pipe(&self) -> bool {
        self.get_gen_i(GenParam::PipeFlag) != 0
    }

    // ─── Identity text fields ───────────────────────────────────────────

    /// Set the title string (up to 60 bytes, truncating).
    pub fn set_title(&mut self, title: &str) {
        self.pack_text(TextField::Title, title);
    }

    /// The title string.
    pub fn get_title(&self) -> String {
        self.unpack_text(TextField::Title)
    }

    /// Set the comment string (up to 160 bytes, truncating).
    pub fn set_comment(&mut self, comment: &str) {
        self.pack_text(TextField::Comment, comment);
    }

    /// The comment string.
    pub fn get_comment(&self) -> String {
        self.unpack_text(TextField::Comment)
    }

    /// Set the source file name (up to 16 bytes, truncating).
    pub fn set_srcname(&mut self, name: &str) {
        self.pack_text(TextField::SrcName, name);
    }

    /// The source file name.
    pub fn get_srcname(&self) -> String {
        self.unpack_text(TextField::SrcName)
    }

    /// Set the user name (up to 16 bytes, truncating).
    pub fn set_username(&mut self, name: &str) {
        self.pack_text(TextField::UserName, name);
    }

    /// The user name.
    pub fn get_username(&self) -> String {
        self.unpack_text(TextField::UserName)
    }

    /// Set the operator name (up to 32 bytes, truncating).
    pub fn set_opername(&mut self, name: &str) {
        self.pack_text(TextField::OperName, name);
    }

    /// The operator name.
    pub fn get_opername(&self) -> String {
        self.unpack_text(TextField::OperName)
    }

    // ─── Date/time of conversion ────────────────────────────────────────

    /// Set the conversion date fields.
    pub fn set_date(&mut self, year: i32, month: i32, day: i32) {
        self.set_gen(GenParam::Year, year as f32);
        self.set_gen(GenParam::Month, month as f32);
        self.set_gen(GenParam::Day, day as f32);
    }

    /// Set the conversion time fields.
    pub fn set_time(&mut self, hours: i32, mins: i32, secs: i32) {
        self.set_gen(GenParam::Hours, hours as f32);
        self.set_gen(GenParam::Mins, mins as f32);
        self.set_gen(GenParam::Secs, secs as f32);
    }

    // ─── Min / max ──────────────────────────────────────────────────────

    /// Record the data extrema and mark them valid.
    pub fn set_min_max(&mut self, min: f32, max: f32) {
        self.set_gen(GenParam::Min, min);
        self.set_gen(GenParam::Max, max);
        self.set_gen(GenParam::ScaleFlag, 1.0);
    }

    pub fn get_min(&self) -> f32 {
        self.get_gen(GenParam::Min)
    }

    pub fn get_max(&self) -> f32 {
        self.get_gen(GenParam::Max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_spectral_block() {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_dim_count(2);
        fd.set_dim_spectral(Axis::X, 2048, 12000.0, 600.13, 4800.0, 4.7, "1H", true)
            .unwrap();
        fd.set_dim_spectral(Axis::Y, 256, 3000.0, 60.81, 1500.0, 120.0, "15N", true)
            .unwrap();

        assert_eq!(fd.get_size(Axis::X).unwrap(), 2048);
        assert_eq!(fd.get_size(Axis::Y).unwrap(), 256);
        assert!((fd.get_sw(Axis::X).unwrap() - 12000.0).abs() < 0.01);
        assert!((fd.get_obs(Axis::Y).unwrap() - 60.81).abs() < 0.01);
        assert!(fd.is_complex(Axis::X).unwrap());
        assert!(!fd.is_freq(Axis::X).unwrap());
        assert_eq!(fd.nd_label(Axis::Y).unwrap(), "15N");
    }

    #[test]
    fn compute_orig_without_center() {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_dim_spectral(Axis::X, 1000, 10000.0, 500.0, 0.0, 4.7, "1H", true)
            .unwrap();
        fd.compute_orig(Axis::X).unwrap();
        let expect = 4.7 * 500.0 - 10000.0 / 2.0 + 10000.0 / 2000.0;
        assert!((fd.get_orig(Axis::X).unwrap() - expect).abs() < 0.5);
    }

    #[test]
    fn identity_text_fields() {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_title("Test experiment");
        assert_eq!(fd.get_title(), "Test experiment");
        fd.set_comment("This is a longer comment string");
        assert_eq!(fd.get_comment(), "This is a longer comment string");
        fd.set_srcname("test.fid");
        assert_eq!(fd.get_srcname(), "test.fid");
        fd.set_opername("operator");
        assert_eq!(fd.get_opername(), "operator");
    }

    #[test]
    fn pipe_axis_flag() {
        let mut fd = Fdata::new();
        fd.init_default();
        assert!(!fd.is_pipe());
        fd.set_pipe_axis(Some(Axis::Z));
        assert!(fd.is_pipe());
        assert_eq!(fd.get_gen_i(GenParam::PipeFlag), 3);
        fd.set_pipe_axis(None);
        assert!(!fd.is_pipe());
    }

    #[test]
    fn min_max_sets_scale_flag() {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_min_max(-1.5, 8.25);
        assert_eq!(fd.get_min(), -1.5);
        assert_eq!(fd.get_max(), 8.25);
        assert_eq!(fd.get_gen_i(GenParam::ScaleFlag), 1);
    }
}
