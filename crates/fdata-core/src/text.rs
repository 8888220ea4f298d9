//! Packed-ASCII text regions inside the header.
//!
//! Several header regions hold raw characters rather than numbers, four
//! per float slot. Text slots keep file byte order even when the numeric
//! slots are byte-swapped, so the swapper and tabular dumps consult
//! [`is_text_slot`] before touching a slot.

use crate::enums::FdDim;
use crate::error::HeaderError;
use crate::fdata::Fdata;
use crate::loc;
use crate::param::DimSelector;

/// A named text region of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// 8-char axis label for one F family.
    Label(FdDim),
    /// Source file name, 16 bytes.
    SrcName,
    /// User name, 16 bytes.
    UserName,
    /// Operator name, 32 bytes.
    OperName,
    /// Title, 60 bytes.
    Title,
    /// Comment, 160 bytes.
    Comment,
}

impl TextField {
    /// First slot of the region.
    pub fn start(self) -> usize {
        match self {
            Self::Label(FdDim::F1) => loc::FDF1LABEL,
            Self::Label(FdDim::F2) => loc::FDF2LABEL,
            Self::Label(FdDim::F3) => loc::FDF3LABEL,
            Self::Label(FdDim::F4) => loc::FDF4LABEL,
            Self::SrcName => loc::FDSRCNAME,
            Self::UserName => loc::FDUSERNAME,
            Self::OperName => loc::FDOPERNAME,
            Self::Title => loc::FDTITLE,
            Self::Comment => loc::FDCOMMENT,
        }
    }

    /// Declared byte length; always a multiple of 4.
    pub fn len_bytes(self) -> usize {
        match self {
            Self::Label(_) => loc::SIZE_LABEL,
            Self::SrcName => loc::SIZE_SRCNAME,
            Self::UserName => loc::SIZE_USERNAME,
            Self::OperName => loc::SIZE_OPERNAME,
            Self::Title => loc::SIZE_TITLE,
            Self::Comment => loc::SIZE_COMMENT,
        }
    }

    /// Number of slots the region occupies.
    pub fn len_slots(self) -> usize {
        self.len_bytes() / 4
    }

    const ALL: [TextField; 9] = [
        TextField::Label(FdDim::F2),
        TextField::Label(FdDim::F1),
        TextField::Label(FdDim::F3),
        TextField::Label(FdDim::F4),
        TextField::SrcName,
        TextField::UserName,
        TextField::Title,
        TextField::Comment,
        TextField::OperName,
    ];
}

/// Does this slot lie inside any packed-text region?
pub fn is_text_slot(index: usize) -> bool {
    TextField::ALL
        .iter()
        .any(|f| (f.start()..f.start() + f.len_slots()).contains(&index))
}

/// The text region beginning at this slot, if any.
pub fn text_region_start(index: usize) -> Option<TextField> {
    TextField::ALL.iter().copied().find(|f| f.start() == index)
}

impl Fdata {
    // ─── Text packing ───────────────────────────────────────────────────

    /// Pack a string into a text region, four characters per slot.
    ///
    /// Input longer than the region is silently truncated, matching the
    /// leniency of legacy tooling; the remainder of the region is
    /// zero-padded. Use [`Fdata::pack_text_strict`] to reject oversized
    /// input instead.
    pub fn pack_text(&mut self, field: TextField, text: &str) {
        let max = field.len_bytes();
        if text.len() > max {
            log::warn!(
                "truncating {}-byte text to {} bytes for {:?}",
                text.len(),
                max,
                field
            );
        }
        self.pack_text_bytes(field, text.as_bytes());
    }

    /// Pack a string into a text region, failing if it does not fit.
    pub fn pack_text_strict(&mut self, field: TextField, text: &str) -> Result<(), HeaderError> {
        if text.len() > field.len_bytes() {
            return Err(HeaderError::TextTooLong {
                field,
                got: text.len(),
                max: field.len_bytes(),
            });
        }
        self.pack_text_bytes(field, text.as_bytes());
        Ok(())
    }

    fn pack_text_bytes(&mut self, field: TextField, bytes: &[u8]) {
        let n = bytes.len().min(field.len_bytes());
        for k in 0..field.len_slots() {
            let mut word = [0u8; 4];
            for (j, b) in word.iter_mut().enumerate() {
                let pos = k * 4 + j;
                if pos < n {
                    *b = bytes[pos];
                }
            }
            // Characters occupy the slot's bytes as stored on disk, so the
            // slot value is a bit pattern, not a number.
            self.set_slot(field.start() + k, f32::from_ne_bytes(word));
        }
    }

    /// Unpack a text region, trimming trailing NUL padding.
    pub fn unpack_text(&self, field: TextField) -> String {
        let mut bytes = Vec::with_capacity(field.len_bytes());
        for k in 0..field.len_slots() {
            bytes.extend_from_slice(&self.slot(field.start() + k).to_ne_bytes());
        }
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }

    // ─── Axis labels via the dimension resolver ─────────────────────────

    /// Set the 8-char axis label for the selected dimension.
    pub fn set_nd_label(
        &mut self,
        sel: impl Into<DimSelector>,
        text: &str,
    ) -> Result<(), HeaderError> {
        let dim = self.resolve_dim(sel)?;
        self.pack_text(TextField::Label(dim), text);
        Ok(())
    }

    /// Get the 8-char axis label for the selected dimension.
    pub fn nd_label(&self, sel: impl Into<DimSelector>) -> Result<String, HeaderError> {
        let dim = self.resolve_dim(sel)?;
        Ok(self.unpack_text(TextField::Label(dim)))
    }

    /// True if the slot belongs to a packed-text region; such slots must
    /// not be byte-swapped or read as numbers.
    pub fn is_text_slot(index: usize) -> bool {
        is_text_slot(index)
    }
}
