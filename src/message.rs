//! The OSPF message parser: common header plus the five packet-type body
//! decoders. This is the entry point of the crate.

use std::net::Ipv4Addr;

use tracing::{debug, trace};

use crate::error::{OspfError, OspfResult};
use crate::header::{Header, PacketType, Version};
use crate::lsa::{Lsa, LsaHeader, LSA_HEADER_LEN};

/// A decoded OSPF message: the common header plus its tagged body.
#[derive(Debug, Clone, PartialEq)]
pub struct Message<'a> {
    pub header: Header,
    pub body: Body<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body<'a> {
    Hello(Hello),
    DbDescription(DbDescription),
    LsRequest(LsRequest),
    LsUpdate(LsUpdate<'a>),
    LsAck(LsAck),
}

impl<'a> Body<'a> {
    fn decode(body: &'a [u8], version: Version, packet_type: PacketType) -> OspfResult<Self> {
        match packet_type {
            PacketType::Hello => Ok(Body::Hello(Hello::decode(body, version)?)),
            PacketType::DbDescription => {
                Ok(Body::DbDescription(DbDescription::decode(body, version)?))
            }
            PacketType::LsRequest => Ok(Body::LsRequest(LsRequest::decode(body, version)?)),
            PacketType::LsUpdate => Ok(Body::LsUpdate(decode_ls_update(body, version)?)),
            PacketType::LsAck => Ok(Body::LsAck(LsAck::decode(body, version)?)),
        }
    }
}

/// Decodes a fixed-size entry repeated until the buffer is exhausted,
/// rejecting a non-empty partial trailing entry.
fn read_trailer<'a, T>(
    mut input: &'a [u8],
    entry_size: usize,
    mut read_one: impl FnMut(&'a [u8]) -> OspfResult<(&'a [u8], T)>,
) -> OspfResult<Vec<T>> {
    let mut out = Vec::new();
    while input.len() >= entry_size {
        let (rest, item) = read_one(input)?;
        out.push(item);
        input = rest;
    }
    if !input.is_empty() {
        debug!(remaining = input.len(), entry_size, "non-empty trailing entry");
        return Err(OspfError::Truncated);
    }
    Ok(out)
}

// ===== Hello =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hello {
    /// OSPFv2 only.
    pub network_mask: Option<Ipv4Addr>,
    /// OSPFv3 only.
    pub interface_id: Option<u32>,
    /// Raw Options value: 8 meaningful bits for v2, 24 for v3.
    pub options: u32,
    pub priority: u8,
    pub hello_interval: u16,
    /// Widened to 32 bits uniformly; OSPFv3 carries only 16 bits on the
    /// wire and is zero-extended here.
    pub router_dead_interval: u32,
    pub designated_router: Ipv4Addr,
    pub backup_designated_router: Ipv4Addr,
    pub neighbors: Vec<Ipv4Addr>,
}

impl Hello {
    fn decode(input: &[u8], version: Version) -> OspfResult<Self> {
        let (network_mask, interface_id, options, priority, hello_interval, router_dead_interval, dr, bdr, rest) =
            match version {
                Version::V2 => {
                    let (input, network_mask) = crate::reader::read_ipv4(input)?;
                    let (input, hello_interval) = crate::reader::read_u16_be(input)?;
                    let (input, options) = crate::reader::read_u8(input)?;
                    let (input, priority) = crate::reader::read_u8(input)?;
                    let (input, router_dead_interval) = crate::reader::read_u32_be(input)?;
                    let (input, dr) = crate::reader::read_ipv4(input)?;
                    let (input, bdr) = crate::reader::read_ipv4(input)?;
                    (
                        Some(network_mask),
                        None,
                        options as u32,
                        priority,
                        hello_interval,
                        router_dead_interval,
                        dr,
                        bdr,
                        input,
                    )
                }
                Version::V3 => {
                    let (input, interface_id) = crate::reader::read_u32_be(input)?;
                    let (input, priority) = crate::reader::read_u8(input)?;
                    let (input, options) = crate::reader::read_u24_be(input)?;
                    let (input, hello_interval) = crate::reader::read_u16_be(input)?;
                    let (input, dead16) = crate::reader::read_u16_be(input)?;
                    let (input, dr) = crate::reader::read_ipv4(input)?;
                    let (input, bdr) = crate::reader::read_ipv4(input)?;
                    (
                        None,
                        Some(interface_id),
                        options,
                        priority,
                        hello_interval,
                        dead16 as u32,
                        dr,
                        bdr,
                        input,
                    )
                }
            };
        let neighbors = read_trailer(rest, 4, |i| Ok(crate::reader::read_ipv4(i)?))?;
        trace!(?version, neighbors = neighbors.len(), "decoded Hello");
        Ok(Hello {
            network_mask,
            interface_id,
            options,
            priority,
            hello_interval,
            router_dead_interval,
            designated_router: dr,
            backup_designated_router: bdr,
            neighbors,
        })
    }
}

// ===== DB-Description =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbDescription {
    pub interface_mtu: u16,
    /// Raw Options value: 8 meaningful bits for v2, 24 for v3.
    pub options: u32,
    pub flags: u8,
    pub seq_number: u32,
    pub lsa_headers: Vec<LsaHeader>,
}

impl DbDescription {
    fn decode(input: &[u8], version: Version) -> OspfResult<Self> {
        let (interface_mtu, options, flags, seq_number, rest) = match version {
            Version::V2 => {
                let (input, interface_mtu) = crate::reader::read_u16_be(input)?;
                let (input, options) = crate::reader::read_u8(input)?;
                let (input, flags) = crate::reader::read_u8(input)?;
                let (input, seq_number) = crate::reader::read_u32_be(input)?;
                (interface_mtu, options as u32, flags, seq_number, input)
            }
            Version::V3 => {
                let (input, _reserved) = crate::reader::read_u8(input)?;
                let (input, options) = crate::reader::read_u24_be(input)?;
                let (input, interface_mtu) = crate::reader::read_u16_be(input)?;
                let (input, _reserved2) = crate::reader::read_u8(input)?;
                let (input, flags) = crate::reader::read_u8(input)?;
                let (input, seq_number) = crate::reader::read_u32_be(input)?;
                (interface_mtu, options, flags, seq_number, input)
            }
        };
        let lsa_headers = read_trailer(rest, LSA_HEADER_LEN, |i| LsaHeader::decode(i, version))?;
        trace!(?version, lsa_headers = lsa_headers.len(), "decoded DB-Description");
        Ok(DbDescription {
            interface_mtu,
            options,
            flags,
            seq_number,
            lsa_headers,
        })
    }
}

// ===== LS-Request =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsRequestEntry {
    pub ls_type: u32,
    pub link_state_id: u32,
    pub adv_router: Ipv4Addr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsRequest {
    pub entries: Vec<LsRequestEntry>,
}

impl LsRequest {
    fn decode(input: &[u8], version: Version) -> OspfResult<Self> {
        let entries = read_trailer(input, 12, |i| {
            let (i, ls_type) = match version {
                Version::V2 => crate::reader::read_u32_be(i)?,
                Version::V3 => {
                    let (i, _reserved) = crate::reader::read_u16_be(i)?;
                    let (i, ls_type) = crate::reader::read_u16_be(i)?;
                    (i, ls_type as u32)
                }
            };
            let (i, link_state_id) = crate::reader::read_u32_be(i)?;
            let (i, adv_router) = crate::reader::read_ipv4(i)?;
            Ok((
                i,
                LsRequestEntry {
                    ls_type,
                    link_state_id,
                    adv_router,
                },
            ))
        })?;
        trace!(?version, entries = entries.len(), "decoded LS-Request");
        Ok(LsRequest { entries })
    }
}

// ===== LS-Update =====

#[derive(Debug, Clone, PartialEq)]
pub struct LsUpdate<'a> {
    pub num_lsas: u32,
    pub lsas: Vec<Lsa<'a>>,
}

fn decode_ls_update(body: &[u8], version: Version) -> OspfResult<LsUpdate<'_>> {
    let (mut input, num_lsas) = crate::reader::read_u32_be(body)?;
    // NumOfLSAs is attacker-controlled; cap the reservation by what the
    // remaining buffer could possibly hold instead of trusting it outright.
    let reserve = num_lsas.min((input.len() / LSA_HEADER_LEN) as u32) as usize;
    let mut lsas = Vec::with_capacity(reserve);
    for _ in 0..num_lsas {
        if input.len() < LSA_HEADER_LEN {
            return Err(OspfError::BadUpdate(
                "not enough bytes remain for the next LSA header",
            ));
        }
        // Peek Length at header offset +18 before slicing the LSA window.
        let length = u16::from_be_bytes([input[18], input[19]]) as usize;
        if length < LSA_HEADER_LEN {
            return Err(OspfError::BadLsa("LSA length is shorter than the header"));
        }
        if input.len() < length {
            return Err(OspfError::BadUpdate(
                "declared LSA length exceeds the remaining LS-Update body",
            ));
        }
        let (window, rest) = input.split_at(length);
        lsas.push(Lsa::decode(window, version)?);
        input = rest;
    }
    if !input.is_empty() {
        return Err(OspfError::BadUpdate(
            "trailing bytes after NumOfLSAs declared LSAs",
        ));
    }
    trace!(?version, num_lsas, "decoded LS-Update");
    Ok(LsUpdate { num_lsas, lsas })
}

// ===== LS-Acknowledgment =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsAck {
    pub lsa_headers: Vec<LsaHeader>,
}

impl LsAck {
    fn decode(input: &[u8], version: Version) -> OspfResult<Self> {
        let lsa_headers = read_trailer(input, LSA_HEADER_LEN, |i| LsaHeader::decode(i, version))?;
        trace!(?version, lsa_headers = lsa_headers.len(), "decoded LS-Ack");
        Ok(LsAck { lsa_headers })
    }
}

// ===== Entry point =====

/// Decodes one OSPF message starting at the Version octet of `input`.
///
/// Returns the decoded message and the number of bytes consumed (equal to
/// `PacketLength`); any bytes beyond that belong to a following layer and
/// are left untouched.
pub fn decode(input: &[u8]) -> OspfResult<(Message<'_>, usize)> {
    let (after_header, header) = Header::decode(input)?;
    let min_len = header.version.header_len();
    if (header.length as usize) < min_len {
        debug!(length = header.length, min_len, "PacketLength too small for its own header");
        return Err(OspfError::Truncated);
    }
    if header.length as usize > input.len() {
        debug!(length = header.length, available = input.len(), "PacketLength exceeds buffer");
        return Err(OspfError::Truncated);
    }
    let body_len = header.length as usize - min_len;
    if after_header.len() < body_len {
        return Err(OspfError::Truncated);
    }
    let body_window = &after_header[..body_len];

    trace!(?header.version, ?header.packet_type, length = header.length, "dispatching OSPF body");
    let body = Body::decode(body_window, header.version, header.packet_type)?;
    let consumed = header.length as usize;
    Ok((Message { header, body }, consumed))
}
