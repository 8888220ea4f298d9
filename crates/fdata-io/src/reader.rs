//! Reading FDATA headers and spectral vectors from files or streams.

use fdata_core::{Axis, Fdata, GenParam, HdrStatus, HeaderError, FDATA_BYTES};
use log::debug;
use std::io::{self, Read, Seek, SeekFrom};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid header: {0}")]
    Header(#[from] HeaderError),
    #[error("data truncated: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },
}

/// Read an FDATA header, detecting and correcting byte order.
///
/// A foreign-order header is swapped to native before being returned; the
/// status tells the caller which case occurred. A header failing the
/// structural checks is an error here, since streaming callers have
/// nothing useful to do with a bad header.
pub fn read_header<R: Read>(reader: &mut R) -> Result<(Fdata, HdrStatus), ReadError> {
    let mut buf = vec![0u8; FDATA_BYTES];
    reader.read_exact(&mut buf)?;
    let fdata = Fdata::from_bytes(&buf)?;
    match fdata.validate() {
        HdrStatus::Ok => Ok((fdata, HdrStatus::Ok)),
        HdrStatus::Swapped => {
            debug!("header has foreign byte order; swapping to native");
            Ok((fdata.swapped(), HdrStatus::Swapped))
        }
        HdrStatus::Bad => Err(match fdata.detect_format() {
            Err(e) => ReadError::Header(e),
            Ok(_) => ReadError::Header(HeaderError::Corrupt(
                "nonzero magic or out-of-range dimension count",
            )),
        }),
    }
}

/// Read `count` f32 values, optionally byte-swapping each 4-byte word.
pub fn read_float_data<R: Read>(
    reader: &mut R,
    count: usize,
    needs_swap: bool,
) -> Result<Vec<f32>, ReadError> {
    let byte_count = count * 4;
    let mut buf = vec![0u8; byte_count];
    read_all(reader, &mut buf)?;

    if needs_swap {
        super::byteswap::bswap4(&mut buf);
    }

    Ok(buf
        .chunks_exact(4)
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Read a block of raw bytes.
pub fn read_raw_bytes<R: Read>(reader: &mut R, count: usize) -> Result<Vec<u8>, ReadError> {
    let mut buf = vec![0u8; count];
    read_all(reader, &mut buf)?;
    Ok(buf)
}

/// Skip `count` bytes in a seekable reader.
pub fn skip_bytes<R: Read + Seek>(reader: &mut R, count: i64) -> Result<(), ReadError> {
    reader.seek(SeekFrom::Current(count))?;
    Ok(())
}

/// Number of f32 values in one stored 1D vector, from the header's size
/// and quad flag: a complex X-axis stores separated real and imaginary
/// parts, doubling the float count.
pub fn floats_per_vector(fdata: &Fdata) -> Result<usize, ReadError> {
    let size = fdata.get_gen_i(GenParam::Size).max(0) as usize;
    let complex = fdata.is_complex(Axis::X)?;
    Ok(if complex { size * 2 } else { size })
}

/// Read a complete single-file dataset: header plus all spectral
/// intensities, byte-swapped to native as needed.
pub fn read_spectrum<R: Read>(reader: &mut R) -> Result<(Fdata, Vec<f32>), ReadError> {
    let (fdata, status) = read_header(reader)?;
    let needs_swap = status == HdrStatus::Swapped;

    let per_vector = floats_per_vector(&fdata)?;
    let vectors = fdata.get_gen_i(GenParam::SpecNum).max(1) as usize;

    let data = read_float_data(reader, per_vector * vectors, needs_swap)?;
    Ok((fdata, data))
}

/// `read_exact` with a truncation-specific error.
fn read_all<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), ReadError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(ReadError::Truncated {
                    expected: buf.len(),
                    got: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdata_core::{AxisParam, DataLayout};
    use std::io::Cursor;

    fn sample_header() -> Fdata {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_dim_count(1);
        fd.set_gen(GenParam::Size, 4.0);
        fd.set_nd(AxisParam::QuadFlag, Axis::X, 1.0).unwrap();
        fd
    }

    #[test]
    fn header_roundtrip() {
        let fd = sample_header();
        let mut cur = Cursor::new(fd.to_bytes());
        let (read, status) = read_header(&mut cur).unwrap();
        assert_eq!(status, HdrStatus::Ok);
        assert_eq!(read, fd);
    }

    #[test]
    fn foreign_header_is_swapped_on_read() {
        let fd = sample_header();
        let foreign_bytes = fd.swapped().to_bytes();
        let mut cur = Cursor::new(foreign_bytes);
        let (read, status) = read_header(&mut cur).unwrap();
        assert_eq!(status, HdrStatus::Swapped);
        assert_eq!(read, fd);
    }

    #[test]
    fn bad_header_is_rejected() {
        let mut fd = sample_header();
        fd.set_slot(0, 1.0);
        let mut cur = Cursor::new(fd.to_bytes());
        assert!(matches!(
            read_header(&mut cur),
            Err(ReadError::Header(HeaderError::Corrupt(_)))
        ));

        let mut cur = Cursor::new(vec![0u8; FDATA_BYTES]);
        assert!(matches!(read_header(&mut cur), Err(ReadError::Header(_))));
    }

    #[test]
    fn short_header_is_io_error() {
        let mut cur = Cursor::new(vec![0u8; 100]);
        assert!(matches!(read_header(&mut cur), Err(ReadError::Io(_))));
    }

    #[test]
    fn float_data_with_swap() {
        let values = [1.5f32, -2.25, 0.0, 1e6];
        let mut bytes = Vec::new();
        for v in values {
            let mut b = v.to_ne_bytes();
            b.reverse();
            bytes.extend_from_slice(&b);
        }
        let mut cur = Cursor::new(bytes);
        let data = read_float_data(&mut cur, 4, true).unwrap();
        assert_eq!(data, values);
    }

    #[test]
    fn truncated_data_is_reported() {
        let mut cur = Cursor::new(vec![0u8; 10]);
        let err = read_float_data(&mut cur, 4, false).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Truncated {
                expected: 16,
                got: 10
            }
        ));
    }

    #[test]
    fn spectrum_read_honors_quad_flag() {
        // 1D complex: 4 complex points stored as 8 floats.
        let mut fd = sample_header();
        fd.set_nd(AxisParam::QuadFlag, Axis::X, 0.0).unwrap();
        assert_eq!(fd.data_layout(), DataLayout::SingleFile);

        let mut bytes = fd.to_bytes();
        for i in 0..8 {
            bytes.extend_from_slice(&(i as f32).to_ne_bytes());
        }
        let mut cur = Cursor::new(bytes);
        let (read, data) = read_spectrum(&mut cur).unwrap();
        assert_eq!(read.get_gen_i(GenParam::Size), 4);
        assert_eq!(data.len(), 8);
        assert_eq!(data[7], 7.0);
    }
}
