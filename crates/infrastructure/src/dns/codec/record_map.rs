use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, NULL, PTR, SOA, SRV, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use jsx_dns_domain::{DomainError, MxData, RecordData, ResourceRecord, SoaData, SrvData};
use std::str::FromStr;

/// Converts between domain records and hickory wire records.
pub struct RecordMapper;

impl RecordMapper {
    pub fn to_hickory(record: &ResourceRecord) -> Result<Record, DomainError> {
        let rdata = match &record.data {
            RecordData::A(ip) => RData::A(A(*ip)),
            RecordData::AAAA(ip) => RData::AAAA(AAAA(*ip)),
            RecordData::CNAME(target) => RData::CNAME(CNAME(to_name(target)?)),
            RecordData::NS(target) => RData::NS(NS(to_name(target)?)),
            RecordData::PTR(target) => RData::PTR(PTR(to_name(target)?)),
            // Character strings are capped at 255 bytes on the wire.
            RecordData::TXT(text) => RData::TXT(TXT::from_bytes(
                text.as_bytes().chunks(255).collect(),
            )),
            RecordData::MX(mx) => RData::MX(MX::new(mx.preference, to_name(&mx.exchange)?)),
            RecordData::SRV(srv) => RData::SRV(SRV::new(
                srv.priority,
                srv.weight,
                srv.port,
                to_name(&srv.target)?,
            )),
            RecordData::SOA(soa) => RData::SOA(SOA::new(
                to_name(&soa.mname)?,
                to_name(&soa.rname)?,
                soa.serial,
                clamp_i32(soa.refresh),
                clamp_i32(soa.retry),
                clamp_i32(soa.expire),
                soa.minimum,
            )),
            RecordData::Unknown { rtype, rdata } => RData::Unknown {
                code: HickoryRecordType::from(*rtype),
                rdata: NULL::with(rdata.clone()),
            },
        };

        Ok(Record::from_rdata(to_name(&record.name)?, record.ttl, rdata))
    }

    /// Kinds outside the domain model become `RecordData::Unknown` with their
    /// RDATA bytes. Returns `None` only when those bytes cannot be encoded.
    pub fn from_hickory(record: &Record) -> Option<ResourceRecord> {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(cname) => RecordData::CNAME(name_text(&cname.0)),
            RData::NS(ns) => RecordData::NS(name_text(&ns.0)),
            RData::PTR(ptr) => RecordData::PTR(name_text(&ptr.0)),
            RData::TXT(txt) => RecordData::TXT(
                txt.txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk))
                    .collect(),
            ),
            RData::MX(mx) => RecordData::MX(MxData {
                preference: mx.preference(),
                exchange: name_text(mx.exchange()),
            }),
            RData::SRV(srv) => RecordData::SRV(SrvData {
                priority: srv.priority(),
                weight: srv.weight(),
                port: srv.port(),
                target: name_text(srv.target()),
            }),
            RData::SOA(soa) => RecordData::SOA(SoaData {
                mname: name_text(soa.mname()),
                rname: name_text(soa.rname()),
                serial: soa.serial(),
                refresh: soa.refresh().max(0) as u32,
                retry: soa.retry().max(0) as u32,
                expire: soa.expire().max(0) as u32,
                minimum: soa.minimum(),
            }),
            RData::Unknown { rdata, .. } => RecordData::Unknown {
                rtype: u16::from(record.record_type()),
                rdata: rdata.anything().to_vec(),
            },
            other => RecordData::Unknown {
                rtype: u16::from(record.record_type()),
                rdata: rdata_bytes(other)?,
            },
        };

        Some(ResourceRecord::new(
            name_text(record.name()),
            data,
            record.ttl(),
        ))
    }

    /// Converts a list, dropping records whose RDATA fails to encode.
    pub fn from_hickory_all<'a, I>(records: I) -> Vec<ResourceRecord>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter_map(Self::from_hickory)
            .collect()
    }
}

/// Parses a domain name as fully qualified.
pub(crate) fn to_name(name: &str) -> Result<Name, DomainError> {
    let trimmed = name.trim_end_matches('.');
    if trimmed.is_empty() {
        return Ok(Name::root());
    }
    Name::from_str(&format!("{}.", trimmed)).map_err(|e| {
        DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
    })
}

/// Presentation form without the trailing root dot.
pub(crate) fn name_text(name: &Name) -> String {
    let text = name.to_utf8();
    text.trim_end_matches('.').to_string()
}

// Canonical form keeps embedded names uncompressed.
fn rdata_bytes(rdata: &RData) -> Option<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut encoder = BinEncoder::new(&mut bytes);
        encoder.set_canonical_form(true);
        rdata.emit(&mut encoder).ok()?;
    }
    Some(bytes)
}

fn clamp_i32(value: u32) -> i32 {
    value.min(i32::MAX as u32) as i32
}
