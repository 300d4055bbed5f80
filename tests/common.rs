#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use liqbook::core::intake::load_csv;
use liqbook::models::SiteTable;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lqb() -> Command {
    cargo_bin_cmd!("liqbook")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_liqbook_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh empty directory inside tempdir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_liqbook_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `content` to a temporary CSV file and return its path
pub fn write_csv(name: &str, content: &str) -> String {
    let p = temp_out(name, "csv");
    fs::write(&p, content).expect("write csv");
    p
}

pub fn table_from(csv: &str) -> SiteTable {
    load_csv(csv.as_bytes()).expect("parse csv")
}

pub const SITES_WITH_COORDS: &str = "\
id,lat,lon,FL,groundType,note
B01,35.70,139.70,0.60,Loose sand,Near river bank
B02,35.71,139.71,0.90,Medium,
B03,35.72,139.72,1.30,Soft clay,   
B04,35.73,139.73,1.10,Dense gravel,Check again in 2026
";

pub const SITES_NO_COORDS: &str = "\
id,FL,groundType
C01,0.5,Soft ground
C02,abc,Medium
C03,1.0,Medium
";
