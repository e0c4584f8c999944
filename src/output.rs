//! Plain-text point files: one `"<x> <y>"` record per line, newline-terminated.

use crate::{Error, Point, Primitive, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write **points** in order, one record per line.
pub fn write_points_to<W: Write, T: Primitive>(mut writer: W, points: &[Point<T>]) -> io::Result<()> {
    for p in points {
        writeln!(writer, "{}", p)?;
    }
    writer.flush()
}

/// Create (or truncate) the file at **path** and write **points** into it.
pub fn write_points<T: Primitive>(path: &Path, points: &[Point<T>]) -> Result<()> {
    let io_err = |source| Error::Io { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(io_err)?;
    write_points_to(BufWriter::new(file), points).map_err(io_err)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_record_per_line() {
        let mut buf = Vec::new();
        write_points_to(&mut buf, &[Point::new(0.0f64, 0.5), Point::new(-10.25, 3.0)]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 0.5\n-10.25 3\n");
    }

    #[test]
    fn non_finite_values_are_written_verbatim() {
        let mut buf = Vec::new();
        write_points_to(&mut buf, &[Point::new(f32::NAN, f32::INFINITY)]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "NaN inf\n");
    }

    #[test]
    fn no_points_no_lines() {
        let mut buf = Vec::new();
        write_points_to::<_, f64>(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn values_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("blobmeans-output-{}.dat", std::process::id()));
        let points = vec![Point::new(0.1f64, 1.0 / 3.0), Point::new(1e-300, -2.5e10)];
        write_points(&path, &points).unwrap();

        let read: Vec<Point<f64>> = std::fs::read_to_string(&path).unwrap()
            .lines()
            .map(|l| {
                let mut it = l.split(' ').map(|v| v.parse::<f64>().unwrap());
                Point::new(it.next().unwrap(), it.next().unwrap())
            })
            .collect();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(read, points);
    }

    #[test]
    fn unwritable_destination() {
        let path = std::env::temp_dir().join("blobmeans-missing-dir").join("nested").join("out.dat");
        match write_points(&path, &[Point::new(1.0f64, 2.0)]) {
            Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
