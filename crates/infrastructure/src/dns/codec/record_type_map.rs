//! Mapping between `jsx_dns_domain::RecordType` and `hickory_proto::rr::RecordType`.

use hickory_proto::rr::RecordType as HickoryRecordType;
use jsx_dns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::Other(code) => HickoryRecordType::from(code),
        }
    }

    /// Types outside the domain model are kept by their numeric code.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::MX => RecordType::MX,
            HickoryRecordType::NS => RecordType::NS,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::SOA => RecordType::SOA,
            HickoryRecordType::SRV => RecordType::SRV,
            HickoryRecordType::TXT => RecordType::TXT,
            other => RecordType::Other(u16::from(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_type_maps_back() {
        let types = [
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::MX,
            RecordType::NS,
            RecordType::PTR,
            RecordType::SOA,
            RecordType::SRV,
            RecordType::TXT,
        ];

        for rt in types {
            let hickory = RecordTypeMapper::to_hickory(rt);
            assert_eq!(RecordTypeMapper::from_hickory(hickory), rt);
        }
    }

    #[test]
    fn test_unmodelled_types_keep_their_code() {
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::HTTPS),
            RecordType::Other(65)
        );
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::CAA),
            RecordType::Other(257)
        );
        assert_eq!(
            RecordTypeMapper::to_hickory(RecordType::Other(257)),
            HickoryRecordType::CAA
        );
    }
}
