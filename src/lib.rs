//! Zero-copy OSPFv2 (RFC 2328) and OSPFv3 (RFC 5340) packet decoding.
//!
//! This crate reads an untrusted byte buffer captured off the wire and
//! produces a [`message::Message`] tree borrowed from it, or one of the
//! closed set of [`error::OspfError`] variants. It does not validate
//! checksums, does not perform cryptographic authentication, and does not
//! encode packets back to wire format — see `DESIGN.md` for the full list
//! of non-goals.
//!
//! ```
//! # let buf: &[u8] = &[
//! #     2, 1, 0, 44, 10, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//! #     255, 255, 255, 0, 0, 10, 0, 1, 0, 0, 0, 40, 10, 0, 0, 2, 10, 0, 0, 3,
//! # ];
//! let (message, consumed) = ospf_packet::message::decode(buf)?;
//! assert_eq!(consumed, message.header.length as usize);
//! # Ok::<(), ospf_packet::error::OspfError>(())
//! ```

#![forbid(unsafe_code)]

pub mod disp;
pub mod error;
pub mod header;
pub mod lsa;
pub mod message;
pub mod options;
pub mod reader;

pub use error::{OspfError, OspfResult};
pub use header::{Header, PacketType, Version};
pub use message::{decode, Message};
