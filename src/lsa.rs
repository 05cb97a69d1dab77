//! Link-State Advertisement header and per-(version, type) body decoding.
//!
//! Centralises the `(Version, LSType)` dispatch in one function
//! ([`LsaBody::decode`]) rather than threading version checks through every
//! body type. Unknown LSA types are preserved as an opaque body rather than
//! rejected — only a short buffer or an internally inconsistent length is
//! fatal.

use std::net::Ipv4Addr;

use ipnet::Ipv6Net;

use crate::error::{OspfError, OspfResult};
use crate::header::Version;
use crate::options::{AsExternalFlagsV2, AsExternalFlagsV3, PrefixOptions};
use crate::reader::{read_bytes, read_ipv4, read_ipv6, read_u16_be, read_u24_be, read_u32_be, read_u8};

/// The fixed 20-byte prefix common to every LSA, in both protocol versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsaHeader {
    pub age: u16,
    /// OSPFv2 only; `None` for OSPFv3, where these bits instead form the
    /// upper byte of a 16-bit LS type.
    pub options: Option<u8>,
    pub ls_type: u16,
    pub link_state_id: u32,
    pub adv_router: Ipv4Addr,
    /// Two's-complement LSA sequence number (RFC 2328 §12.1.6).
    pub seq_number: i32,
    pub checksum: u16,
    /// Total LSA length including this header; must be >= 20.
    pub length: u16,
}

pub const LSA_HEADER_LEN: usize = 20;

impl LsaHeader {
    pub fn decode(input: &[u8], version: Version) -> OspfResult<(&[u8], Self)> {
        let (input, age) = read_u16_be(input)?;
        let (input, options, ls_type) = match version {
            Version::V2 => {
                let (input, options) = read_u8(input)?;
                let (input, ls_type) = read_u8(input)?;
                (input, Some(options), ls_type as u16)
            }
            Version::V3 => {
                let (input, ls_type) = read_u16_be(input)?;
                (input, None, ls_type)
            }
        };
        let (input, link_state_id) = read_u32_be(input)?;
        let (input, adv_router) = read_ipv4(input)?;
        let (input, seq_raw) = read_u32_be(input)?;
        let (input, checksum) = read_u16_be(input)?;
        let (input, length) = read_u16_be(input)?;

        let header = LsaHeader {
            age,
            options,
            ls_type,
            link_state_id,
            adv_router,
            seq_number: seq_raw as i32,
            checksum,
            length,
        };
        Ok((input, header))
    }
}

/// A decoded LSA: its header plus a type-specific (or opaque) body.
///
/// Borrows the unknown-LSA body, and nothing else, from the input buffer —
/// every other field is a plain copy of a fixed-width integer or address.
#[derive(Debug, Clone, PartialEq)]
pub struct Lsa<'a> {
    pub header: LsaHeader,
    pub body: LsaBody<'a>,
}

impl<'a> Lsa<'a> {
    /// Decodes one LSA from a window known to hold exactly `header.length`
    /// bytes (the caller, `message::decode_ls_update`, peeks the Length
    /// field before slicing this window).
    pub fn decode(window: &'a [u8], version: Version) -> OspfResult<Self> {
        let (rest, header) = LsaHeader::decode(window, version)?;
        if header.length < LSA_HEADER_LEN as u16 {
            return Err(OspfError::BadLsa("LSA length is shorter than the header"));
        }
        if header.length as usize > window.len() {
            return Err(OspfError::BadLsa("LSA length exceeds the available window"));
        }
        let body_len = header.length as usize - LSA_HEADER_LEN;
        if rest.len() < body_len {
            return Err(OspfError::BadLsa("LSA body shorter than its declared length"));
        }
        let body_window = &rest[..body_len];
        let body = LsaBody::decode(body_window, version, header.ls_type)?;
        Ok(Lsa { header, body })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LsaBody<'a> {
    RouterV2(RouterLsaV2),
    NetworkV2(NetworkLsaV2),
    SummaryV2(SummaryLsaV2),
    AsExternalV2(AsExternalLsaV2),
    RouterV3(RouterLsaV3),
    NetworkV3(NetworkLsaV3),
    InterAreaPrefix(InterAreaPrefixLsa),
    InterAreaRouter(InterAreaRouterLsa),
    AsExternalV3(AsExternalLsaV3),
    Link(LinkLsa),
    IntraAreaPrefix(IntraAreaPrefixLsa),
    /// An LSA whose (version, type) isn't recognised; the raw body bytes
    /// (excluding the 20-byte header) are preserved unparsed.
    Unknown(&'a [u8]),
}

// OSPFv2 LSA type codes (RFC 2328 §A.4.1).
pub const OSPFV2_ROUTER: u16 = 1;
pub const OSPFV2_NETWORK: u16 = 2;
pub const OSPFV2_SUMMARY_NETWORK: u16 = 3;
pub const OSPFV2_SUMMARY_ASBR: u16 = 4;
pub const OSPFV2_AS_EXTERNAL: u16 = 5;

// OSPFv3 LSA type codes (RFC 5340 §A.4.1), including the scope/U-bit in the
// upper byte.
pub const OSPFV3_ROUTER: u16 = 0x2001;
pub const OSPFV3_NETWORK: u16 = 0x2002;
pub const OSPFV3_INTER_AREA_PREFIX: u16 = 0x2003;
pub const OSPFV3_INTER_AREA_ROUTER: u16 = 0x2004;
pub const OSPFV3_AS_EXTERNAL: u16 = 0x4005;
pub const OSPFV3_LINK: u16 = 0x0008;
pub const OSPFV3_INTRA_AREA_PREFIX: u16 = 0x2009;

impl<'a> LsaBody<'a> {
    fn decode(body: &'a [u8], version: Version, ls_type: u16) -> OspfResult<Self> {
        match (version, ls_type) {
            (Version::V2, OSPFV2_ROUTER) => Ok(LsaBody::RouterV2(RouterLsaV2::decode(body)?)),
            (Version::V2, OSPFV2_NETWORK) => Ok(LsaBody::NetworkV2(NetworkLsaV2::decode(body)?)),
            (Version::V2, OSPFV2_SUMMARY_NETWORK | OSPFV2_SUMMARY_ASBR) => {
                Ok(LsaBody::SummaryV2(SummaryLsaV2::decode(body)?))
            }
            (Version::V2, OSPFV2_AS_EXTERNAL) => {
                Ok(LsaBody::AsExternalV2(AsExternalLsaV2::decode(body)?))
            }
            (Version::V3, OSPFV3_ROUTER) => Ok(LsaBody::RouterV3(RouterLsaV3::decode(body)?)),
            (Version::V3, OSPFV3_NETWORK) => Ok(LsaBody::NetworkV3(NetworkLsaV3::decode(body)?)),
            (Version::V3, OSPFV3_INTER_AREA_PREFIX) => {
                Ok(LsaBody::InterAreaPrefix(InterAreaPrefixLsa::decode(body)?))
            }
            (Version::V3, OSPFV3_INTER_AREA_ROUTER) => {
                Ok(LsaBody::InterAreaRouter(InterAreaRouterLsa::decode(body)?))
            }
            (Version::V3, OSPFV3_AS_EXTERNAL) => {
                Ok(LsaBody::AsExternalV3(AsExternalLsaV3::decode(body)?))
            }
            (Version::V3, OSPFV3_LINK) => Ok(LsaBody::Link(LinkLsa::decode(body)?)),
            (Version::V3, OSPFV3_INTRA_AREA_PREFIX) => {
                Ok(LsaBody::IntraAreaPrefix(IntraAreaPrefixLsa::decode(body)?))
            }
            (_, _) => Ok(LsaBody::Unknown(body)),
        }
    }
}

// ===== OSPFv2 LSA bodies =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterTos {
    pub tos: u8,
    pub metric: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterLink {
    pub link_id: u32,
    pub link_data: u32,
    pub link_type: u8,
    pub metric: u16,
    pub tos: Vec<RouterTos>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterLsaV2 {
    pub flags: u8,
    pub links: Vec<RouterLink>,
}

impl RouterLsaV2 {
    fn decode(input: &[u8]) -> OspfResult<Self> {
        let (input, flags) = read_u8(input)?;
        let (input, _reserved) = read_u8(input)?;
        let (mut input, num_links) = read_u16_be(input)?;
        let mut links = Vec::with_capacity(num_links as usize);
        for _ in 0..num_links {
            let (next, link_id) = read_u32_be(input)?;
            let (next, link_data) = read_u32_be(next)?;
            let (next, link_type) = read_u8(next)?;
            let (next, tos_count) = read_u8(next)?;
            let (next, metric) = read_u16_be(next)?;
            let mut tos = Vec::with_capacity(tos_count as usize);
            let mut next = next;
            for _ in 0..tos_count {
                let (after_tos, t) = read_u8(next)?;
                let (after_tos, _reserved) = read_u8(after_tos)?;
                let (after_tos, tos_metric) = read_u16_be(after_tos)?;
                tos.push(RouterTos { tos: t, metric: tos_metric });
                next = after_tos;
            }
            links.push(RouterLink {
                link_id,
                link_data,
                link_type,
                metric,
                tos,
            });
            input = next;
        }
        Ok(RouterLsaV2 { flags, links })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkLsaV2 {
    pub network_mask: u32,
    pub attached_routers: Vec<u32>,
}

impl NetworkLsaV2 {
    fn decode(mut input: &[u8]) -> OspfResult<Self> {
        let (rest, network_mask) = read_u32_be(input)?;
        input = rest;
        let mut attached_routers = Vec::new();
        while !input.is_empty() {
            let (rest, router) = read_u32_be(input)?;
            attached_routers.push(router);
            input = rest;
        }
        Ok(NetworkLsaV2 { network_mask, attached_routers })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryTos {
    pub tos: u8,
    pub metric: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLsaV2 {
    pub network_mask: u32,
    pub metric: u32,
    pub tos: Vec<SummaryTos>,
}

impl SummaryLsaV2 {
    fn decode(mut input: &[u8]) -> OspfResult<Self> {
        let (rest, network_mask) = read_u32_be(input)?;
        let (rest, _reserved) = read_u8(rest)?;
        let (rest, metric) = read_u24_be(rest)?;
        input = rest;
        let mut tos = Vec::new();
        while !input.is_empty() {
            if input.len() < 4 {
                return Err(OspfError::BadLsa("trailing partial TOS entry in Summary-LSA"));
            }
            let (rest, t) = read_u8(input)?;
            let (rest, tos_metric) = read_u24_be(rest)?;
            tos.push(SummaryTos { tos: t, metric: tos_metric });
            input = rest;
        }
        Ok(SummaryLsaV2 { network_mask, metric, tos })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsExternalEntryV2 {
    pub network_mask: u32,
    pub e_bit: bool,
    pub metric: u32,
    pub forwarding_address: Ipv4Addr,
    pub external_route_tag: u32,
}

/// RFC 2328's AS-External-LSA body is, in practice, a single
/// network/metric/forwarding-address tuple; the type is written as a `Vec`
/// because nothing in the base RFC body format repeats it, but some
/// deployments pad a second all-zero entry — the decoder accepts any whole
/// number of 16-byte entries and rejects a partial trailing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsExternalLsaV2 {
    pub entries: Vec<AsExternalEntryV2>,
}

impl AsExternalLsaV2 {
    fn decode(mut input: &[u8]) -> OspfResult<Self> {
        let mut entries = Vec::new();
        while !input.is_empty() {
            if input.len() < 16 {
                return Err(OspfError::BadLsa("trailing partial AS-External-LSA entry"));
            }
            let (rest, network_mask) = read_u32_be(input)?;
            let (rest, flags_raw) = read_u8(rest)?;
            let (rest, metric) = read_u24_be(rest)?;
            let (rest, forwarding_address) = read_ipv4(rest)?;
            let (rest, external_route_tag) = read_u32_be(rest)?;
            entries.push(AsExternalEntryV2 {
                network_mask,
                e_bit: AsExternalFlagsV2::from(flags_raw).e(),
                metric,
                forwarding_address,
                external_route_tag,
            });
            input = rest;
        }
        Ok(AsExternalLsaV2 { entries })
    }
}

// ===== OSPFv3 LSA bodies =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterLinkV3 {
    pub link_type: u8,
    pub metric: u16,
    pub interface_id: u32,
    pub neighbor_interface_id: u32,
    pub neighbor_router_id: Ipv4Addr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterLsaV3 {
    pub flags: u8,
    pub options: u32,
    pub links: Vec<RouterLinkV3>,
}

impl RouterLsaV3 {
    fn decode(mut input: &[u8]) -> OspfResult<Self> {
        let (rest, flags) = read_u8(input)?;
        let (rest, options) = read_u24_be(rest)?;
        input = rest;
        let mut links = Vec::new();
        while !input.is_empty() {
            if input.len() < 16 {
                return Err(OspfError::BadLsa("trailing partial Router-LSA interface entry"));
            }
            let (rest, link_type) = read_u8(input)?;
            let (rest, _reserved) = read_u8(rest)?;
            let (rest, metric) = read_u16_be(rest)?;
            let (rest, interface_id) = read_u32_be(rest)?;
            let (rest, neighbor_interface_id) = read_u32_be(rest)?;
            let (rest, neighbor_router_id) = read_ipv4(rest)?;
            links.push(RouterLinkV3 {
                link_type,
                metric,
                interface_id,
                neighbor_interface_id,
                neighbor_router_id,
            });
            input = rest;
        }
        Ok(RouterLsaV3 { flags, options, links })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkLsaV3 {
    pub options: u32,
    pub attached_routers: Vec<u32>,
}

impl NetworkLsaV3 {
    fn decode(mut input: &[u8]) -> OspfResult<Self> {
        let (rest, _reserved) = read_u8(input)?;
        let (rest, options) = read_u24_be(rest)?;
        input = rest;
        let mut attached_routers = Vec::new();
        while !input.is_empty() {
            let (rest, router) = read_u32_be(input)?;
            attached_routers.push(router);
            input = rest;
        }
        Ok(NetworkLsaV3 { options, attached_routers })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterAreaPrefixLsa {
    pub metric: u32,
    pub prefix_length: u8,
    pub prefix_options: PrefixOptions,
    pub address_prefix: Ipv6Net,
}

impl InterAreaPrefixLsa {
    fn decode(input: &[u8]) -> OspfResult<Self> {
        let (input, _reserved) = read_u8(input)?;
        let (input, metric) = read_u24_be(input)?;
        let (input, prefix_length, prefix_options, address_prefix) = decode_prefix_fields(input)?;
        let _ = input;
        Ok(InterAreaPrefixLsa {
            metric,
            prefix_length,
            prefix_options,
            address_prefix,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterAreaRouterLsa {
    pub options: u32,
    pub metric: u32,
    pub destination_router_id: Ipv4Addr,
}

impl InterAreaRouterLsa {
    fn decode(input: &[u8]) -> OspfResult<Self> {
        let (input, _reserved) = read_u8(input)?;
        let (input, options) = read_u24_be(input)?;
        let (input, _reserved2) = read_u8(input)?;
        let (input, metric) = read_u24_be(input)?;
        let (_input, destination_router_id) = read_ipv4(input)?;
        Ok(InterAreaRouterLsa {
            options,
            metric,
            destination_router_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsExternalLsaV3 {
    pub e_bit: bool,
    pub f_bit: bool,
    pub t_bit: bool,
    pub metric: u32,
    pub prefix_length: u8,
    pub prefix_options: PrefixOptions,
    pub address_prefix: Ipv6Net,
    pub ref_ls_type: u16,
    pub forwarding_address: Option<std::net::Ipv6Addr>,
    pub external_route_tag: Option<u32>,
    pub referenced_link_state_id: Option<u32>,
}

impl AsExternalLsaV3 {
    fn decode(input: &[u8]) -> OspfResult<Self> {
        let (input, flags_raw) = read_u8(input)?;
        let (input, metric) = read_u24_be(input)?;
        let (input, prefix_length) = read_u8(input)?;
        let (input, prefix_options_raw) = read_u8(input)?;
        let (input, ref_ls_type) = read_u16_be(input)?;
        // Unlike InterAreaPrefixLSA, the AS-External-LSA's RefLSType sits
        // between PrefixOptions and AddressPrefix rather than after it.
        let (mut input, address_prefix) = decode_address_prefix(input, prefix_length)?;
        let prefix_options = PrefixOptions::from(prefix_options_raw);

        // RFC 5340 §A.4.7: field order is Forwarding Address, External
        // Route Tag, Referenced Link State ID.
        let flags = AsExternalFlagsV3::from(flags_raw);
        let e_bit = flags.e();
        let f_bit = flags.f();
        let t_bit = flags.t();

        let forwarding_address = if f_bit {
            let (rest, addr) = read_ipv6(input)?;
            input = rest;
            Some(addr)
        } else {
            None
        };
        let external_route_tag = if t_bit {
            let (rest, tag) = read_u32_be(input)?;
            input = rest;
            Some(tag)
        } else {
            None
        };
        let referenced_link_state_id = if ref_ls_type != 0 {
            let (rest, id) = read_u32_be(input)?;
            input = rest;
            Some(id)
        } else {
            None
        };
        let _ = input;

        Ok(AsExternalLsaV3 {
            e_bit,
            f_bit,
            t_bit,
            metric,
            prefix_length,
            prefix_options,
            address_prefix,
            ref_ls_type,
            forwarding_address,
            external_route_tag,
            referenced_link_state_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkLsa {
    pub router_priority: u8,
    pub options: u32,
    pub link_local_address: std::net::Ipv6Addr,
    pub prefixes: Vec<Prefix>,
}

impl LinkLsa {
    fn decode(input: &[u8]) -> OspfResult<Self> {
        let (input, router_priority) = read_u8(input)?;
        let (input, options) = read_u24_be(input)?;
        let (input, link_local_address) = read_ipv6(input)?;
        let (mut input, num_prefixes) = read_u32_be(input)?;
        // NumPrefixes is attacker-controlled; a Prefix entry is at least 4
        // bytes (PrefixLength, PrefixOptions, Metric/reserved), so cap the
        // reservation by what the remaining buffer could possibly hold.
        let reserve = num_prefixes.min((input.len() / 4) as u32) as usize;
        let mut prefixes = Vec::with_capacity(reserve);
        for _ in 0..num_prefixes {
            let (rest, prefix) = Prefix::decode(input, false)?;
            prefixes.push(prefix);
            input = rest;
        }
        if !input.is_empty() {
            return Err(OspfError::BadLsa("trailing bytes after Link-LSA prefixes"));
        }
        Ok(LinkLsa {
            router_priority,
            options,
            link_local_address,
            prefixes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntraAreaPrefixLsa {
    pub ref_ls_type: u16,
    pub ref_link_state_id: u32,
    pub ref_adv_router: Ipv4Addr,
    pub prefixes: Vec<Prefix>,
}

impl IntraAreaPrefixLsa {
    fn decode(input: &[u8]) -> OspfResult<Self> {
        let (input, num_prefixes) = read_u16_be(input)?;
        let (input, ref_ls_type) = read_u16_be(input)?;
        let (input, ref_link_state_id) = read_u32_be(input)?;
        let (mut input, ref_adv_router) = read_ipv4(input)?;
        let mut prefixes = Vec::with_capacity(num_prefixes as usize);
        for _ in 0..num_prefixes {
            let (rest, prefix) = Prefix::decode(input, true)?;
            prefixes.push(prefix);
            input = rest;
        }
        if !input.is_empty() {
            return Err(OspfError::BadLsa("trailing bytes after Intra-Area-Prefix-LSA prefixes"));
        }
        Ok(IntraAreaPrefixLsa {
            ref_ls_type,
            ref_link_state_id,
            ref_adv_router,
            prefixes,
        })
    }
}

/// A variable-length IPv6 prefix, embedded in `LinkLsa` and
/// `IntraAreaPrefixLsa`. The wire format reserves two bytes in this
/// position regardless of LSA type, but only `IntraAreaPrefixLsa` gives
/// them meaning as a Metric; `Prefix::decode`'s `has_metric` flag controls
/// whether they're surfaced as `Some(metric)` or discarded as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    pub prefix_length: u8,
    pub prefix_options: PrefixOptions,
    pub metric: Option<u16>,
    pub address_prefix: Ipv6Net,
}

impl Prefix {
    fn decode(input: &[u8], has_metric: bool) -> OspfResult<(&[u8], Self)> {
        let (input, prefix_length) = read_u8(input)?;
        let (input, prefix_options_raw) = read_u8(input)?;
        let (input, metric_raw) = read_u16_be(input)?;
        let (input, address_prefix) = decode_address_prefix(input, prefix_length)?;
        Ok((
            input,
            Prefix {
                prefix_length,
                prefix_options: PrefixOptions::from(prefix_options_raw),
                metric: has_metric.then_some(metric_raw),
                address_prefix,
            },
        ))
    }
}

/// `InterAreaPrefixLsa`'s PrefixLength/PrefixOptions/reserved/AddressPrefix
/// tail, identical to `Prefix` minus the metric field.
fn decode_prefix_fields(input: &[u8]) -> OspfResult<(&[u8], u8, PrefixOptions, Ipv6Net)> {
    let (input, prefix_length) = read_u8(input)?;
    let (input, prefix_options_raw) = read_u8(input)?;
    let (input, _reserved) = read_u16_be(input)?;
    let (input, address_prefix) = decode_address_prefix(input, prefix_length)?;
    Ok((input, prefix_length, PrefixOptions::from(prefix_options_raw), address_prefix))
}

/// Decodes the variable-length, word-padded AddressPrefix field: `ceil(len
/// / 32) * 4` bytes, zero-extended into a full 16-byte IPv6 address.
fn decode_address_prefix(input: &[u8], prefix_length: u8) -> OspfResult<(&[u8], Ipv6Net)> {
    if prefix_length > 128 {
        return Err(OspfError::BadLsa("prefix length exceeds 128 bits"));
    }
    let byte_count = (prefix_length as usize).div_ceil(32) * 4;
    let (input, raw) = read_bytes(input, byte_count)?;
    let mut octets = [0u8; 16];
    octets[..byte_count].copy_from_slice(raw);
    let address = std::net::Ipv6Addr::from(octets);
    let net = Ipv6Net::new(address, prefix_length)
        .map_err(|_| OspfError::BadLsa("invalid IPv6 prefix length"))?;
    Ok((input, net))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_prefix_byte_count_is_ceil_len_div_32_times_4() {
        // prefix_length -> expected wire byte count, per (ceil(len/32)*4).
        let cases: &[(u8, usize)] = &[(0, 0), (1, 4), (32, 4), (33, 8), (64, 8), (65, 12), (128, 16)];
        for &(prefix_length, byte_count) in cases {
            let wire = vec![0xffu8; byte_count];
            let (rest, net) = decode_address_prefix(&wire, prefix_length).unwrap();
            assert!(rest.is_empty(), "prefix_length {prefix_length} should consume exactly {byte_count} bytes");
            assert_eq!(net.prefix_len(), prefix_length);
        }
    }

    #[test]
    fn address_prefix_rejects_length_over_128() {
        assert_eq!(
            decode_address_prefix(&[0u8; 16], 129).unwrap_err(),
            OspfError::BadLsa("prefix length exceeds 128 bits")
        );
    }

    #[test]
    fn address_prefix_zero_pads_beyond_the_wire_bytes() {
        // PrefixLength=33 reads 8 wire bytes but only the first 33 bits are
        // meaningful; the remaining bits of the 16-byte address must be zero.
        let wire = [0xffu8; 8];
        let (_, net) = decode_address_prefix(&wire, 33).unwrap();
        let octets = net.addr().octets();
        assert_eq!(&octets[..8], &[0xff; 8]);
        assert_eq!(&octets[8..], &[0u8; 8]);
    }
}
