//! Version-specific option and flag bitfields.
//!
//! Bit positions follow RFC 2328 §A.2/§A.3 (OSPFv2) and RFC 5340 §A.2/§A.4
//! (OSPFv3). Each bitfield is LSB-first, field order matching declaration
//! order.

use bitfield_struct::bitfield;

/// OSPFv2 AS-External-LSA's combined ExternalBit/Metric octet: the E-bit
/// occupies bit 7, the low 7 bits are reserved (the metric itself is the
/// following 24-bit field).
#[bitfield(u8, debug = true)]
pub struct AsExternalFlagsV2 {
    #[bits(7)]
    pub reserved: u8,
    pub e: bool,
}

/// OSPFv3 AS-External-LSA Flags octet (RFC 5340 §A.4.7): T at bit 0, F at
/// bit 1, E at bit 2.
#[bitfield(u8, debug = true)]
pub struct AsExternalFlagsV3 {
    pub t: bool,
    pub f: bool,
    pub e: bool,
    #[bits(5)]
    pub reserved: u8,
}

/// OSPFv3 PrefixOptions octet (RFC 5340 §A.4.1.1), carried by every variable
/// length `Prefix` and the `PrefixOptions` field of InterAreaPrefix /
/// AS-External LSAs.
#[bitfield(u8, debug = true)]
#[derive(PartialEq, Eq)]
pub struct PrefixOptions {
    pub nu: bool,
    pub la: bool,
    pub mc: bool,
    pub p: bool,
    pub dn: bool,
    #[bits(3)]
    pub reserved: u8,
}
