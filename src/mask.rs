//! Prefix-length and subnet-mask conversions.
//!
//! A subnet mask is valid only when its set bits form one contiguous run
//! starting at the most significant bit, so a mask and a prefix length
//! carry the same information and convert both ways without loss.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::CidrParseError;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const IPV4_MAX_PREFIX_LEN: u8 = 32;

/// Maximum prefix length for an IPv6 network (128 bits).
pub const IPV6_MAX_PREFIX_LEN: u8 = 128;

/// Convert a CIDR prefix length to an IPv4 subnet mask.
///
/// # Examples
/// ```
/// use cidr_notation::mask::ipv4_prefix_to_mask;
/// use std::net::Ipv4Addr;
/// assert_eq!(
///     ipv4_prefix_to_mask(24).unwrap(),
///     Ipv4Addr::new(255, 255, 255, 0)
/// );
/// ```
pub fn ipv4_prefix_to_mask(prefix_len: u8) -> Result<Ipv4Addr, CidrParseError> {
    if prefix_len > IPV4_MAX_PREFIX_LEN {
        Err(CidrParseError::PrefixTooLong {
            prefix_len,
            max: IPV4_MAX_PREFIX_LEN,
        })
    } else {
        let right_len = IPV4_MAX_PREFIX_LEN - prefix_len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(mask as u32))
    }
}

/// Convert a CIDR prefix length to an IPv6 subnet mask.
pub fn ipv6_prefix_to_mask(prefix_len: u8) -> Result<Ipv6Addr, CidrParseError> {
    if prefix_len > IPV6_MAX_PREFIX_LEN {
        Err(CidrParseError::PrefixTooLong {
            prefix_len,
            max: IPV6_MAX_PREFIX_LEN,
        })
    } else if prefix_len == 0 {
        // u128 has no wider type to shift through, so a /0 mask is a
        // special case instead of a 128-bit shift.
        Ok(Ipv6Addr::UNSPECIFIED)
    } else {
        let right_len = IPV6_MAX_PREFIX_LEN - prefix_len;
        let mask = (u128::MAX >> right_len) << right_len;

        Ok(Ipv6Addr::from(mask))
    }
}

/// Convert an IPv4 subnet mask to its CIDR prefix length.
///
/// Fails with [`CidrParseError::NonContiguousMask`] when any bit is set
/// after the first zero bit.
pub fn ipv4_mask_to_prefix(mask: Ipv4Addr) -> Result<u8, CidrParseError> {
    let bits = u32::from(mask);
    let prefix_len = bits.leading_ones();
    if prefix_len < u32::from(IPV4_MAX_PREFIX_LEN) && (bits << prefix_len) != 0 {
        Err(CidrParseError::NonContiguousMask)
    } else {
        Ok(prefix_len as u8)
    }
}

/// Convert an IPv6 subnet mask to its CIDR prefix length.
pub fn ipv6_mask_to_prefix(mask: Ipv6Addr) -> Result<u8, CidrParseError> {
    let bits = u128::from(mask);
    let prefix_len = bits.leading_ones();
    if prefix_len < u32::from(IPV6_MAX_PREFIX_LEN) && (bits << prefix_len) != 0 {
        Err(CidrParseError::NonContiguousMask)
    } else {
        Ok(prefix_len as u8)
    }
}
