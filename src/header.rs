//! The OSPF common header and the packet type tag shared by both protocol
//! versions.

use std::convert::TryInto;
use std::net::Ipv4Addr;

use crate::error::OspfError;
use crate::reader::{read_bytes, read_ipv4, read_u16_be, read_u8};

pub const OSPFV2: u8 = 2;
pub const OSPFV3: u8 = 3;

/// Minimum number of bytes a version's common header (including its
/// version-specific tail) occupies before the body begins.
pub const V2_HEADER_LEN: usize = 24;
pub const V3_HEADER_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V2,
    V3,
}

impl Version {
    pub fn header_len(self) -> usize {
        match self {
            Version::V2 => V2_HEADER_LEN,
            Version::V3 => V3_HEADER_LEN,
        }
    }

    fn decode(raw: u8) -> Result<Self, OspfError> {
        match raw {
            OSPFV2 => Ok(Version::V2),
            OSPFV3 => Ok(Version::V3),
            other => Err(OspfError::BadVersion(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketType {
    Hello = 1,
    DbDescription = 2,
    LsRequest = 3,
    LsUpdate = 4,
    LsAck = 5,
}

impl PacketType {
    pub fn decode(raw: u8) -> Result<Self, OspfError> {
        match raw {
            1 => Ok(PacketType::Hello),
            2 => Ok(PacketType::DbDescription),
            3 => Ok(PacketType::LsRequest),
            4 => Ok(PacketType::LsUpdate),
            5 => Ok(PacketType::LsAck),
            other => Err(OspfError::BadType(other)),
        }
    }
}

impl std::fmt::Display for PacketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PacketType::Hello => "Hello",
            PacketType::DbDescription => "Database Description",
            PacketType::LsRequest => "Link State Request",
            PacketType::LsUpdate => "Link State Update",
            PacketType::LsAck => "Link State Acknowledgment",
        };
        write!(f, "{}", name)
    }
}

/// The fields that diverge between OSPFv2 and OSPFv3 common headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderExt {
    /// OSPFv2 carries a 16-bit AuType and 64 bits of authentication data
    /// immediately after the checksum; both are consumed here and the raw
    /// auth payload is preserved opaquely. No cryptographic authentication
    /// is performed.
    V2 { auth_type: u16, auth_data: u64 },
    /// OSPFv3 carries an 8-bit Instance and a reserved byte after the
    /// checksum.
    V3 { instance: u8, reserved: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    pub packet_type: PacketType,
    /// PacketLength: total OSPF packet length including this header.
    pub length: u16,
    pub router_id: Ipv4Addr,
    pub area_id: Ipv4Addr,
    /// Opaque; preserved verbatim, never recomputed or verified.
    pub checksum: u16,
    pub ext: HeaderExt,
}

impl Header {
    /// Decodes the common header. `input` must start at the Version octet.
    pub fn decode(input: &[u8]) -> Result<(&[u8], Self), OspfError> {
        let (input, version_raw) = read_u8(input)?;
        let version = Version::decode(version_raw)?;

        let (input, type_raw) = read_u8(input)?;
        let packet_type = PacketType::decode(type_raw)?;

        let (input, length) = read_u16_be(input)?;
        let (input, router_id) = read_ipv4(input)?;
        let (input, area_id) = read_ipv4(input)?;
        let (input, checksum) = read_u16_be(input)?;

        let (input, ext) = match version {
            Version::V2 => {
                let (input, auth_type) = read_u16_be(input)?;
                let (input, auth_bytes) = read_bytes(input, 8)?;
                let auth_data = u64::from_be_bytes(auth_bytes.try_into().unwrap());
                (input, HeaderExt::V2 { auth_type, auth_data })
            }
            Version::V3 => {
                let (input, instance) = read_u8(input)?;
                let (input, reserved) = read_u8(input)?;
                (input, HeaderExt::V3 { instance, reserved })
            }
        };

        let header = Header {
            version,
            packet_type,
            length,
            router_id,
            area_id,
            checksum,
            ext,
        };
        Ok((input, header))
    }
}
