use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    NULL,
    WKS,
    PTR,
    HINFO,
    MX,
    TXT,
    AAAA,
    SRV,
    NAPTR,
    DNAME,
    OPT,
    DS,
    SSHFP,
    IPSECKEY,
    RRSIG,
    NSEC,
    DNSKEY,
    NSEC3,
    NSEC3PARAM,
    TLSA,
    CDS,
    CDNSKEY,
    OPENPGPKEY,
    ZONEMD,
    SVCB,
    HTTPS,
    CAA,
    ANAME,
}

impl RecordType {
    /// Every known type, in ascending wire-code order.
    pub const ALL: &'static [RecordType] = &[
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::NULL,
        RecordType::WKS,
        RecordType::PTR,
        RecordType::HINFO,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AAAA,
        RecordType::SRV,
        RecordType::NAPTR,
        RecordType::DNAME,
        RecordType::OPT,
        RecordType::DS,
        RecordType::SSHFP,
        RecordType::IPSECKEY,
        RecordType::RRSIG,
        RecordType::NSEC,
        RecordType::DNSKEY,
        RecordType::NSEC3,
        RecordType::NSEC3PARAM,
        RecordType::TLSA,
        RecordType::CDS,
        RecordType::CDNSKEY,
        RecordType::OPENPGPKEY,
        RecordType::ZONEMD,
        RecordType::SVCB,
        RecordType::HTTPS,
        RecordType::CAA,
        RecordType::ANAME,
    ];

    fn entry(&self) -> (&'static str, u16) {
        match self {
            RecordType::A => ("A", 1),
            RecordType::NS => ("NS", 2),
            RecordType::CNAME => ("CNAME", 5),
            RecordType::SOA => ("SOA", 6),
            RecordType::NULL => ("NULL", 10),
            RecordType::WKS => ("WKS", 11),
            RecordType::PTR => ("PTR", 12),
            RecordType::HINFO => ("HINFO", 13),
            RecordType::MX => ("MX", 15),
            RecordType::TXT => ("TXT", 16),
            RecordType::AAAA => ("AAAA", 28),
            RecordType::SRV => ("SRV", 33),
            RecordType::NAPTR => ("NAPTR", 35),
            RecordType::DNAME => ("DNAME", 39),
            RecordType::OPT => ("OPT", 41),
            RecordType::DS => ("DS", 43),
            RecordType::SSHFP => ("SSHFP", 44),
            RecordType::IPSECKEY => ("IPSECKEY", 45),
            RecordType::RRSIG => ("RRSIG", 46),
            RecordType::NSEC => ("NSEC", 47),
            RecordType::DNSKEY => ("DNSKEY", 48),
            RecordType::NSEC3 => ("NSEC3", 50),
            RecordType::NSEC3PARAM => ("NSEC3PARAM", 51),
            RecordType::TLSA => ("TLSA", 52),
            RecordType::CDS => ("CDS", 59),
            RecordType::CDNSKEY => ("CDNSKEY", 60),
            RecordType::OPENPGPKEY => ("OPENPGPKEY", 61),
            RecordType::ZONEMD => ("ZONEMD", 63),
            RecordType::SVCB => ("SVCB", 64),
            RecordType::HTTPS => ("HTTPS", 65),
            RecordType::CAA => ("CAA", 257),
            RecordType::ANAME => ("ANAME", 32769),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.entry().0
    }

    pub fn to_u16(&self) -> u16 {
        self.entry().1
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.to_u16() == code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
