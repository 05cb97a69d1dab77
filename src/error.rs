use nom::error::{ErrorKind, ParseError};
use thiserror::Error;

/// The closed error taxonomy for OSPFv2/v3 packet and LSA decoding.
///
/// Every variant corresponds to one of the failure kinds named in the
/// decoder's invariants: a short buffer, a header field outside its legal
/// range, or an internal count that doesn't add up against the bytes that
/// are actually present. None of these are recoverable within the decoder —
/// the caller sees the packet as undecodable and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OspfError {
    #[error("truncated OSPF packet: expected more bytes than remain")]
    Truncated,

    #[error("unsupported OSPF version: {0}")]
    BadVersion(u8),

    #[error("unsupported OSPF packet type: {0}")]
    BadType(u8),

    #[error("malformed LSA: {0}")]
    BadLsa(&'static str),

    #[error("malformed LS-Update: {0}")]
    BadUpdate(&'static str),
}

pub type OspfResult<T> = Result<T, OspfError>;

// Lets `nom`'s number/byte combinators (be_u8, be_u16, take, ...) run with
// `OspfError` as their error type directly: any nom-level failure (a
// combinator ran out of input) becomes `Truncated`. Structural failures
// (bad version, bad LSA length, ...) are raised explicitly by the decoder
// as `nom::Err::Failure(OspfError::Bad...)` rather than synthesized here.
impl<I> ParseError<I> for OspfError {
    fn from_error_kind(_input: I, _kind: ErrorKind) -> Self {
        OspfError::Truncated
    }

    fn append(_input: I, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

// Collapses a `nom::Err<OspfError>` (the type every `reader`/`nom` call
// fails with) down to a plain `OspfError`, so call sites that return
// `OspfResult<T>` rather than a `nom::IResult` can use `?` directly instead
// of matching on `nom::Err` by hand.
impl From<nom::Err<OspfError>> for OspfError {
    fn from(err: nom::Err<OspfError>) -> Self {
        match err {
            nom::Err::Incomplete(_) => OspfError::Truncated,
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
        }
    }
}
