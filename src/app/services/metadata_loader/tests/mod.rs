//! Tests for the metadata loader module


use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a metadata CSV fixture into a temporary directory and return its path
pub fn write_metadata_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("failed to create fixture file");
    file.write_all(content.as_bytes())
        .expect("failed to write fixture file");
    path
}

/// A small valid metadata table with precomputed angles
pub const ANGLES_CSV: &str = "\
Id,HeliostatId,CreatedAt,Azimuth,Elevation
1,AA23,2023-06-16 09:48:04,-6.4,62.3
2,AA23,2023-06-27 05:39:56,81.8,37.0
3,AB41,2023-05-31 06:35:41,66.4,45.2
";

/// The same table carrying a sun-position vector instead of angles
pub const SUN_VECTOR_CSV: &str = "\
Id,HeliostatId,CreatedAt,SunPosE,SunPosN,SunPosU
1,AA23,2023-06-16 09:48:04,0.0,-1.0,1.0
2,AA23,2023-06-27 05:39:56,1.0,-1.0,0.5
3,AB41,2023-05-31 06:35:41,0.0,0.0,1.0
";
