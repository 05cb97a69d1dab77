//! Primitive big-endian readers over a bounded, untrusted byte buffer.
//!
//! Every function here borrows from its input and fails with
//! [`OspfError::Truncated`](crate::error::OspfError::Truncated) rather than
//! panicking when fewer bytes remain than requested. There is no allocation
//! and no state beyond the `&[u8]` slice threaded through each call, same as
//! `nom`'s own number parsers — these just pin the error type to
//! [`OspfError`] so the rest of the crate never has to match on
//! `nom::error::Error` directly.

use nom::bytes::complete::take;
use nom::number::complete::{be_u8, be_u16, be_u24, be_u32};
use nom::IResult;

use crate::error::OspfError;

pub type ReadResult<'a, T> = IResult<&'a [u8], T, OspfError>;

pub fn read_u8(input: &[u8]) -> ReadResult<'_, u8> {
    be_u8(input)
}

pub fn read_u16_be(input: &[u8]) -> ReadResult<'_, u16> {
    be_u16(input)
}

pub fn read_u24_be(input: &[u8]) -> ReadResult<'_, u32> {
    be_u24(input)
}

pub fn read_u32_be(input: &[u8]) -> ReadResult<'_, u32> {
    be_u32(input)
}

pub fn read_bytes(input: &[u8], n: usize) -> ReadResult<'_, &[u8]> {
    take(n)(input)
}

/// Reads a dotted-quad address, i.e. four bytes interpreted as a
/// big-endian `u32`.
pub fn read_ipv4(input: &[u8]) -> ReadResult<'_, std::net::Ipv4Addr> {
    let (input, raw) = read_u32_be(input)?;
    Ok((input, std::net::Ipv4Addr::from(raw)))
}

/// Reads a fixed 16-byte IPv6 address.
pub fn read_ipv6(input: &[u8]) -> ReadResult<'_, std::net::Ipv6Addr> {
    let (input, raw) = read_bytes(input, 16)?;
    let mut octets = [0u8; 16];
    octets.copy_from_slice(raw);
    Ok((input, std::net::Ipv6Addr::from(octets)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_integers() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05];
        let (rest, v) = read_u8(&buf).unwrap();
        assert_eq!(v, 0x01);
        let (rest, v) = read_u16_be(rest).unwrap();
        assert_eq!(v, 0x0203);
        let (rest, v) = read_u16_be(rest).unwrap();
        assert_eq!(v, 0x0405);
        assert!(rest.is_empty());
    }

    #[test]
    fn truncated_reads_fail_cleanly() {
        let buf = [0x01u8];
        assert_eq!(
            read_u32_be(&buf).unwrap_err(),
            nom::Err::Error(OspfError::Truncated)
        );
        assert_eq!(
            read_bytes(&buf, 4).unwrap_err(),
            nom::Err::Error(OspfError::Truncated)
        );
    }
}
