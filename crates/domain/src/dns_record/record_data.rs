use super::RecordType;
use crate::DomainError;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxData {
    pub preference: u16,
    pub exchange: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvData {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// Record payload, tagged by record type.
///
/// MX, SOA and SRV are always kept structured; only the wire codec flattens
/// them. `Unknown` holds the raw RDATA of any other type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    NS(String),
    PTR(String),
    TXT(String),
    MX(MxData),
    SOA(SoaData),
    SRV(SrvData),
    Unknown { rtype: u16, rdata: Vec<u8> },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::NS(_) => RecordType::NS,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::MX(_) => RecordType::MX,
            RecordData::SOA(_) => RecordType::SOA,
            RecordData::SRV(_) => RecordType::SRV,
            RecordData::Unknown { rtype, .. } => RecordType::Other(*rtype),
        }
    }

    /// Parses zone-file RData text for the given record type.
    ///
    /// MX is `"<preference> <exchange>"`, SRV is
    /// `"<priority> <weight> <port> <target>"` and SOA is
    /// `"<mname> <rname> <serial> <refresh> <retry> <expire> <minimum>"`.
    pub fn parse(record_type: RecordType, text: &str) -> Result<Self, DomainError> {
        let text = text.trim();
        let invalid = |reason: &str| {
            DomainError::InvalidRecordData(format!("{} '{}': {}", record_type, text, reason))
        };

        match record_type {
            RecordType::A => Ipv4Addr::from_str(text)
                .map(RecordData::A)
                .map_err(|e| invalid(&e.to_string())),
            RecordType::AAAA => Ipv6Addr::from_str(text)
                .map(RecordData::AAAA)
                .map_err(|e| invalid(&e.to_string())),
            RecordType::CNAME => non_empty(text)
                .map(RecordData::CNAME)
                .ok_or_else(|| invalid("empty target")),
            RecordType::NS => non_empty(text)
                .map(RecordData::NS)
                .ok_or_else(|| invalid("empty target")),
            RecordType::PTR => non_empty(text)
                .map(RecordData::PTR)
                .ok_or_else(|| invalid("empty target")),
            RecordType::TXT => Ok(RecordData::TXT(text.to_string())),
            RecordType::MX => {
                let fields: Vec<&str> = text.split_whitespace().collect();
                match fields.as_slice() {
                    [preference, exchange] => Ok(RecordData::MX(MxData {
                        preference: preference
                            .parse()
                            .map_err(|_| invalid("preference is not a number"))?,
                        exchange: exchange.to_string(),
                    })),
                    _ => Err(invalid("expected '<preference> <exchange>'")),
                }
            }
            RecordType::SRV => {
                let fields: Vec<&str> = text.split_whitespace().collect();
                match fields.as_slice() {
                    [priority, weight, port, target] => Ok(RecordData::SRV(SrvData {
                        priority: priority.parse().map_err(|_| invalid("bad priority"))?,
                        weight: weight.parse().map_err(|_| invalid("bad weight"))?,
                        port: port.parse().map_err(|_| invalid("bad port"))?,
                        target: target.to_string(),
                    })),
                    _ => Err(invalid("expected '<priority> <weight> <port> <target>'")),
                }
            }
            RecordType::SOA => {
                let fields: Vec<&str> = text.split_whitespace().collect();
                match fields.as_slice() {
                    [mname, rname, serial, refresh, retry, expire, minimum] => {
                        let number = |field: &str| -> Result<u32, DomainError> {
                            field
                                .parse()
                                .map_err(|_| invalid(&format!("'{}' is not a number", field)))
                        };
                        Ok(RecordData::SOA(SoaData {
                            mname: mname.to_string(),
                            rname: rname.to_string(),
                            serial: number(serial)?,
                            refresh: number(refresh)?,
                            retry: number(retry)?,
                            expire: number(expire)?,
                            minimum: number(minimum)?,
                        }))
                    }
                    _ => Err(invalid("expected seven SOA fields")),
                }
            }
            RecordType::Other(_) => Err(DomainError::UnsupportedRecordType(format!(
                "{} has no zone-file syntax",
                record_type
            ))),
        }
    }

    /// Target of an alias record, if this is one.
    pub fn cname_target(&self) -> Option<&str> {
        match self {
            RecordData::CNAME(target) => Some(target),
            _ => None,
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(ip) => write!(f, "{}", ip),
            RecordData::AAAA(ip) => write!(f, "{}", ip),
            RecordData::CNAME(name) | RecordData::NS(name) | RecordData::PTR(name) => {
                write!(f, "{}", name)
            }
            RecordData::TXT(text) => write!(f, "{}", text),
            RecordData::MX(mx) => write!(f, "{} {}", mx.preference, mx.exchange),
            RecordData::SRV(srv) => write!(
                f,
                "{} {} {} {}",
                srv.priority, srv.weight, srv.port, srv.target
            ),
            RecordData::SOA(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            // RFC 3597 generic form.
            RecordData::Unknown { rdata, .. } => {
                write!(f, "\\# {}", rdata.len())?;
                if !rdata.is_empty() {
                    f.write_str(" ")?;
                    for byte in rdata {
                        write!(f, "{:02x}", byte)?;
                    }
                }
                Ok(())
            }
        }
    }
}
