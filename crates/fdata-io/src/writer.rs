//! Writing FDATA headers and spectral vectors to files or streams.

use byteorder::{ByteOrder, NativeEndian};
use fdata_core::Fdata;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("vector written before header")]
    HeaderNotWritten,
}

/// Write an FDATA header in native byte order.
pub fn write_header<W: Write>(writer: &mut W, fdata: &Fdata) -> Result<(), WriteError> {
    writer.write_all(&fdata.to_bytes())?;
    Ok(())
}

/// Write spectral intensities as native-endian f32 values.
pub fn write_float_data<W: Write>(writer: &mut W, data: &[f32]) -> Result<(), WriteError> {
    let mut buf = vec![0u8; data.len() * 4];
    for (i, &val) in data.iter().enumerate() {
        NativeEndian::write_f32(&mut buf[i * 4..(i + 1) * 4], val);
    }
    writer.write_all(&buf)?;
    Ok(())
}

/// Write a complete single-file dataset: header plus spectral data.
pub fn write_spectrum<W: Write>(
    writer: &mut W,
    fdata: &Fdata,
    data: &[f32],
) -> Result<(), WriteError> {
    write_header(writer, fdata)?;
    write_float_data(writer, data)?;
    Ok(())
}

/// Stream writer for pipeline output: one header up front, then 1D
/// vectors as they are produced.
pub struct PipeWriter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> PipeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    /// Write the stream header; must come before any vector.
    pub fn write_header(&mut self, fdata: &Fdata) -> Result<(), WriteError> {
        write_header(&mut self.writer, fdata)?;
        self.header_written = true;
        Ok(())
    }

    /// Write a single 1D vector of spectral data.
    pub fn write_vector(&mut self, data: &[f32]) -> Result<(), WriteError> {
        if !self.header_written {
            return Err(WriteError::HeaderNotWritten);
        }
        write_float_data(&mut self.writer, data)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), WriteError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consume and return the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{read_header, read_spectrum};
    use fdata_core::{Axis, AxisParam, GenParam, HdrStatus};
    use std::io::Cursor;

    fn sample_header() -> Fdata {
        let mut fd = Fdata::new();
        fd.init_default();
        fd.set_dim_count(1);
        fd.set_gen(GenParam::Size, 3.0);
        fd.set_nd(AxisParam::QuadFlag, Axis::X, 1.0).unwrap();
        fd
    }

    #[test]
    fn spectrum_roundtrip() {
        let fd = sample_header();
        let data = [0.5f32, 1.5, -2.5];
        let mut buf = Vec::new();
        write_spectrum(&mut buf, &fd, &data).unwrap();

        let mut cur = Cursor::new(buf);
        let (read, got) = read_spectrum(&mut cur).unwrap();
        assert_eq!(read, fd);
        assert_eq!(got, data);
    }

    #[test]
    fn pipe_writer_streams_vectors() {
        let mut fd = sample_header();
        fd.set_pipe_axis(Some(Axis::Z));
        let mut pw = PipeWriter::new(Vec::new());
        pw.write_header(&fd).unwrap();
        pw.write_vector(&[1.0, 2.0, 3.0]).unwrap();
        pw.write_vector(&[4.0, 5.0, 6.0]).unwrap();
        pw.flush().unwrap();
        let bytes = pw.into_inner();
        assert_eq!(bytes.len(), fdata_core::FDATA_BYTES + 6 * 4);

        let mut cur = Cursor::new(bytes);
        let (read, status) = read_header(&mut cur).unwrap();
        assert_eq!(status, HdrStatus::Ok);
        assert!(read.is_pipe());
    }

    #[test]
    fn vector_before_header_is_rejected() {
        let mut pw = PipeWriter::new(Vec::new());
        assert!(matches!(
            pw.write_vector(&[1.0]),
            Err(WriteError::HeaderNotWritten)
        ));
    }
}
