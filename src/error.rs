//! Parse and construction errors for CIDR network values.

use std::net::AddrParseError;
use thiserror::Error;

/// Error returned when a CIDR string fails to parse or a network value
/// fails validation at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrParseError {
    /// The input does not split into exactly `<addr>/<prefix-len>`.
    #[error("missing '/<prefix-len>' in CIDR string")]
    MissingPrefixLen,
    /// The address part is not a valid IPv4 or IPv6 address.
    #[error("invalid IP address: {0}")]
    InvalidAddr(#[from] AddrParseError),
    /// The prefix length part is not a decimal integer.
    #[error("prefix length is not a number")]
    InvalidPrefixLen,
    /// The prefix length exceeds the bit width of the address family.
    #[error("prefix length {prefix_len} is too long (max {max})")]
    PrefixTooLong {
        /// The rejected prefix length.
        prefix_len: u8,
        /// Bit width of the address family (32 or 128).
        max: u8,
    },
    /// The subnet mask has a set bit after its first zero bit.
    #[error("subnet mask is not a contiguous prefix")]
    NonContiguousMask,
    /// The address and subnet mask belong to different address families.
    #[error("address and subnet mask families differ")]
    FamilyMismatch,
}
