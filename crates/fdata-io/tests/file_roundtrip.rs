//! End-to-end file round trips through real files on disk.

use fdata_core::{Axis, DataLayout, Fdata, GenParam, HdrStatus, Partition};
use fdata_io::{read_header, read_spectrum, write_spectrum, PipeWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

fn header_2d() -> Fdata {
    let mut fd = Fdata::new();
    fd.init_default();
    fd.set_dim_count(2);
    fd.set_dim_spectral(Axis::X, 2, 12000.0, 600.13, 4800.0, 4.7, "1H", false)
        .unwrap();
    fd.set_dim_spectral(Axis::Y, 3, 3000.0, 60.81, 1500.0, 118.0, "15N", false)
        .unwrap();
    fd.set_gen(GenParam::SpecNum, 3.0);
    fd.set_title("file round trip");
    fd
}

#[test]
fn single_file_spectrum_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.ft2");

    let fd = header_2d();
    let data: Vec<f32> = (0..6).map(|i| i as f32 * 0.5).collect();
    {
        let mut w = BufWriter::new(File::create(&path).unwrap());
        write_spectrum(&mut w, &fd, &data).unwrap();
        w.flush().unwrap();
    }

    let mut r = BufReader::new(File::open(&path).unwrap());
    let (read, got) = read_spectrum(&mut r).unwrap();
    assert_eq!(read, fd);
    assert_eq!(got, data);
    assert_eq!(read.get_title(), "file round trip");
    assert_eq!(read.data_layout(), DataLayout::SingleFile);
}

#[test]
fn stream_file_reads_back_with_partition() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stream.pipe");

    let mut fd = header_2d();
    fd.set_dim_count(3);
    fd.set_pipe_axis(Some(Axis::Z));
    fd.set_slice_count(40).unwrap();
    fd.set_partition(Partition {
        first_plane: 1,
        last_plane: 4,
        slices: 10,
    });

    {
        let mut pw = PipeWriter::new(BufWriter::new(File::create(&path).unwrap()));
        pw.write_header(&fd).unwrap();
        for _ in 0..4 {
            pw.write_vector(&[0.0, 1.0]).unwrap();
        }
        pw.flush().unwrap();
    }

    let mut r = BufReader::new(File::open(&path).unwrap());
    let (read, status) = read_header(&mut r).unwrap();
    assert_eq!(status, HdrStatus::Ok);
    assert_eq!(read.data_layout(), DataLayout::Stream);
    assert_eq!(read.slice_count().unwrap(), 40);
    assert_eq!(read.partition().plane_count(), 4);
}
