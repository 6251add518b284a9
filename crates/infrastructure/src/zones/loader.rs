//! Loads `<apex>.json` zone files from a directory.

use super::errors::ZoneError;
use jsx_dns_domain::config::ZonesConfig;
use jsx_dns_domain::{
    DomainError, RecordData, RecordType, ResourceRecord, Zone, ZoneRecord, ZoneSet,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// One element of a zone file's JSON array.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneFileEntry {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Type")]
    pub record_type: String,

    #[serde(rename = "RData")]
    pub rdata: String,

    #[serde(rename = "TTL")]
    pub ttl: u32,
}

pub struct ZoneLoader {
    default_authority: ResourceRecord,
    version: String,
}

impl ZoneLoader {
    /// `version` is served as the `version` TXT record of every zone.
    pub fn new(default_authority: ResourceRecord, version: impl Into<String>) -> Self {
        Self {
            default_authority,
            version: version.into(),
        }
    }

    pub fn load(&self, config: &ZonesConfig) -> Result<ZoneSet, ZoneError> {
        let zones = self.load_directory(Path::new(&config.directory))?;
        let set = ZoneSet::new(zones);

        Ok(match &config.delegated {
            Some(apexes) => set.with_delegated(apexes),
            None => set,
        })
    }

    /// Files are read in name order, which fixes the zone lookup order.
    pub fn load_directory(&self, directory: &Path) -> Result<Vec<Zone>, ZoneError> {
        let entries = std::fs::read_dir(directory).map_err(|e| ZoneError::ReadDir {
            path: directory.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let zones = paths
            .iter()
            .map(|path| self.load_file(path))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            directory = %directory.display(),
            zones = zones.len(),
            records = zones.iter().map(Zone::record_count).sum::<usize>(),
            "Zones loaded"
        );

        Ok(zones)
    }

    /// The apex is the file stem: `jsx.jp.json` serves `jsx.jp`.
    pub fn load_file(&self, path: &Path) -> Result<Zone, ZoneError> {
        let display = path.display().to_string();

        let apex = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| ZoneError::Parse {
                path: display.clone(),
                reason: "file name is not valid UTF-8".to_string(),
            })?;

        let content = std::fs::read_to_string(path).map_err(|e| ZoneError::ReadFile {
            path: display.clone(),
            reason: e.to_string(),
        })?;

        let entries: Vec<ZoneFileEntry> =
            serde_json::from_str(&content).map_err(|e| ZoneError::Parse {
                path: display.clone(),
                reason: e.to_string(),
            })?;

        self.build_zone(apex, entries, &display)
    }

    pub fn build_zone(
        &self,
        apex: &str,
        entries: Vec<ZoneFileEntry>,
        path: &str,
    ) -> Result<Zone, ZoneError> {
        let mut zone = Zone::new(apex, self.default_authority.clone(), &self.version);

        for entry in entries {
            let record = parse_entry(&entry).map_err(|source| ZoneError::Record {
                path: path.to_string(),
                name: entry.name.clone(),
                source,
            })?;

            if let Err(conflict) = zone.insert(&entry.name, record) {
                warn!(
                    zone = %apex,
                    name = %entry.name,
                    record_type = %entry.record_type,
                    reason = %conflict,
                    "Dropping conflicting record"
                );
            }
        }

        Ok(zone)
    }
}

fn parse_entry(entry: &ZoneFileEntry) -> Result<ZoneRecord, DomainError> {
    let record_type =
        RecordType::from_str(&entry.record_type).map_err(DomainError::UnsupportedRecordType)?;
    let data = RecordData::parse(record_type, &entry.rdata)?;
    Ok(ZoneRecord::new(data, entry.ttl))
}
