use life_core::{SimulationDefaults, SimulationOverrides};
use ron::extensions::Extensions;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::{StorageError, StorageResult};

/// On-disk encodings, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Json,
    Bincode,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> StorageResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("ron") => Ok(Self::Ron),
            Some("json") => Ok(Self::Json),
            Some("bin") | Some("bincode") => Ok(Self::Bincode),
            _ => Err(StorageError::UnknownExtension(path.display().to_string())),
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Bincode)
    }
}

/// RON options accepting `key: value` for optional fields as well as `Some(value)`
fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

/// Plain RON with explicit `Some(..)`, readable without any extension
pub fn to_ron_string(defaults: &SimulationDefaults) -> StorageResult<String> {
    let pretty = ron::ser::PrettyConfig::default().struct_names(false);
    Ok(ron::ser::to_string_pretty(defaults, pretty)?)
}

pub fn to_json_string(defaults: &SimulationDefaults) -> StorageResult<String> {
    Ok(serde_json::to_string_pretty(defaults)?)
}

pub fn encode(defaults: &SimulationDefaults, format: ConfigFormat) -> StorageResult<Vec<u8>> {
    match format {
        ConfigFormat::Ron => Ok(to_ron_string(defaults)?.into_bytes()),
        ConfigFormat::Json => Ok(to_json_string(defaults)?.into_bytes()),
        ConfigFormat::Bincode => Ok(bincode::serialize(defaults)?),
    }
}

fn decode<T: DeserializeOwned>(data: &[u8], format: ConfigFormat) -> StorageResult<T> {
    match format {
        ConfigFormat::Ron => Ok(ron_options().from_bytes(data)?),
        ConfigFormat::Json => Ok(serde_json::from_slice(data)?),
        ConfigFormat::Bincode => Ok(bincode::deserialize(data)?),
    }
}

/// Write a full record, creating parent directories as needed
pub fn save(defaults: &SimulationDefaults, path: &Path) -> StorageResult<()> {
    let format = ConfigFormat::from_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, encode(defaults, format)?)?;
    log::debug!("wrote {:?} defaults to {}", format, path.display());
    Ok(())
}

/// Read a full record
pub fn load(path: &Path) -> StorageResult<SimulationDefaults> {
    let format = ConfigFormat::from_path(path)?;
    let data = fs::read(path)?;
    decode(&data, format)
}

/// Read a partial record. A bincode file always holds a full record and
/// overrides every key, clearing the optional ones it leaves empty.
pub fn load_overrides(path: &Path) -> StorageResult<SimulationOverrides> {
    let format = ConfigFormat::from_path(path)?;
    let data = fs::read(path)?;
    if format.is_text() {
        decode(&data, format)
    } else {
        let full: SimulationDefaults = decode(&data, format)?;
        Ok(full.into())
    }
}
