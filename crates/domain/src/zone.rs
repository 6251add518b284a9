//! Static zone data and the label matching rules used to answer from it.

use crate::dns_record::{RecordData, RecordType, ResourceRecord, ZoneRecord};
use std::sync::Arc;
use thiserror::Error;

pub const APEX_LABEL: &str = "@";
pub const VERSION_LABEL: &str = "version";
pub const VERSION_TTL: u32 = 300;

/// How specifically a label matched the queried name. Lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchStrength {
    Apex = 1,
    Direct = 10,
    Wildcard = 100,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneMatch {
    pub strength: MatchStrength,
    pub records: Vec<ZoneRecord>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneConflict {
    #[error("label '{label}' already holds a CNAME")]
    AlreadyCname { label: String },

    #[error("label '{label}' already holds records, a CNAME cannot join them")]
    CnameWithOtherRecords { label: String },
}

#[derive(Debug, Clone)]
pub struct Zone {
    apex: Arc<str>,
    labels: Vec<(String, Vec<ZoneRecord>)>,
    authority: ResourceRecord,
    own_authority: bool,
}

impl Zone {
    /// Creates a zone holding only the synthetic `version` TXT record.
    pub fn new(apex: &str, default_authority: ResourceRecord, version: &str) -> Self {
        let mut zone = Self {
            apex: Arc::from(apex.trim_end_matches('.').to_ascii_lowercase()),
            labels: Vec::new(),
            authority: default_authority,
            own_authority: false,
        };
        zone.labels.push((
            VERSION_LABEL.to_string(),
            vec![ZoneRecord::new(
                RecordData::TXT(version.to_string()),
                VERSION_TTL,
            )],
        ));
        zone
    }

    pub fn apex(&self) -> &str {
        &self.apex
    }

    pub fn authority(&self) -> &ResourceRecord {
        &self.authority
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, &[ZoneRecord])> {
        self.labels
            .iter()
            .map(|(label, records)| (label.as_str(), records.as_slice()))
    }

    pub fn record_count(&self) -> usize {
        self.labels.iter().map(|(_, records)| records.len()).sum()
    }

    /// Adds a record under `label`, enforcing the CNAME exclusivity rule.
    ///
    /// On conflict the zone is left unchanged. An SOA at the apex becomes the
    /// zone's authority record.
    pub fn insert(&mut self, label: &str, record: ZoneRecord) -> Result<(), ZoneConflict> {
        let label = label.trim().to_ascii_lowercase();
        let is_cname = record.record_type() == RecordType::CNAME;

        let position = self.labels.iter().position(|(l, _)| *l == label);
        if let Some(index) = position {
            let existing = &self.labels[index].1;
            if existing
                .iter()
                .any(|r| r.record_type() == RecordType::CNAME)
            {
                return Err(ZoneConflict::AlreadyCname { label });
            }
            if is_cname && !existing.is_empty() {
                return Err(ZoneConflict::CnameWithOtherRecords { label });
            }
        }

        if label == APEX_LABEL
            && record.record_type() == RecordType::SOA
            && !self.own_authority
        {
            self.authority = record.named(&self.apex);
            self.own_authority = true;
        }

        match position {
            Some(index) => self.labels[index].1.push(record),
            None => self.labels.push((label, vec![record])),
        }
        Ok(())
    }

    /// True when `name` is the apex or lies beneath it.
    pub fn contains(&self, name: &str) -> bool {
        name == &*self.apex || is_subdomain_of(name, &self.apex)
    }

    /// Finds the best label for `name`: apex before direct subdomain before
    /// wildcard. Ties keep the label stored first.
    pub fn lookup(&self, name: &str, record_type: RecordType) -> Option<ZoneMatch> {
        let mut best: Option<ZoneMatch> = None;

        for (label, records) in &self.labels {
            let Some(strength) = self.match_label(label, name) else {
                continue;
            };
            if best.as_ref().is_some_and(|b| b.strength <= strength) {
                continue;
            }

            let matched: Vec<ZoneRecord> = records
                .iter()
                .filter(|r| record_type.accepts(r.record_type()))
                .cloned()
                .collect();
            if matched.is_empty() {
                continue;
            }

            best = Some(ZoneMatch {
                strength,
                records: matched,
            });
        }

        best
    }

    fn match_label(&self, label: &str, name: &str) -> Option<MatchStrength> {
        let apex = &*self.apex;

        if label == APEX_LABEL && name == apex {
            return Some(MatchStrength::Apex);
        }

        if name.len() == label.len() + 1 + apex.len()
            && name.starts_with(label)
            && name[label.len()..].starts_with('.')
            && name.ends_with(apex)
        {
            return Some(MatchStrength::Direct);
        }

        if let Some(stripped) = label.strip_prefix('*') {
            let suffix = format!("{}.{}", stripped, apex);
            let expected_components = suffix.split('.').count();
            if name.ends_with(&suffix) && name.split('.').count() == expected_components {
                return Some(MatchStrength::Wildcard);
            }
        }

        None
    }
}

fn is_subdomain_of(name: &str, apex: &str) -> bool {
    name.len() > apex.len() + 1
        && name.ends_with(apex)
        && name.as_bytes()[name.len() - apex.len() - 1] == b'.'
}

/// Every configured zone, in configuration order, plus the apexes whose
/// unmatched subdomains are sent to the glue nameservers.
#[derive(Debug, Clone, Default)]
pub struct ZoneSet {
    zones: Vec<Zone>,
    delegated: Vec<Arc<str>>,
}

impl ZoneSet {
    /// All zones are delegated.
    pub fn new(zones: Vec<Zone>) -> Self {
        let delegated = zones.iter().map(|z| Arc::clone(&z.apex)).collect();
        Self { zones, delegated }
    }

    pub fn with_delegated<I, S>(mut self, apexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.delegated = apexes
            .into_iter()
            .map(|a| Arc::from(a.as_ref().trim_end_matches('.').to_ascii_lowercase()))
            .collect();
        self
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Consults zones containing `name` in order; the first zone that
    /// matches answers, regardless of match strength in later zones.
    pub fn lookup_static(&self, name: &str, record_type: RecordType) -> Option<(&Zone, ZoneMatch)> {
        let name = name.to_ascii_lowercase();
        self.zones
            .iter()
            .filter(|zone| zone.contains(&name))
            .find_map(|zone| zone.lookup(&name, record_type).map(|m| (zone, m)))
    }

    /// True for proper subdomains of a delegated apex.
    pub fn is_delegated(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.delegated
            .iter()
            .any(|apex| is_subdomain_of(&name, apex))
    }
}
