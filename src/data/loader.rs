use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::SalonDataFile;

const SALON_DATA_RELATIVE_PATH: &str = "data/salon_data.json";

pub fn salon_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(SALON_DATA_RELATIVE_PATH)
}

pub fn load_salon_data() -> Result<SalonDataFile> {
    load_salon_data_from_path(salon_data_path())
}

pub fn load_salon_data_from_path(path: impl AsRef<Path>) -> Result<SalonDataFile> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading salon data file: {}", path.display()))?;

    parse_salon_data(&raw).with_context(|| format!("invalid salon data file: {}", path.display()))
}

pub fn parse_salon_data(json: &str) -> Result<SalonDataFile> {
    let data: SalonDataFile =
        serde_json::from_str(json).context("failed parsing salon data as JSON")?;
    data.validate()?;
    Ok(data)
}
