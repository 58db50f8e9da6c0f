//! Network value types with CIDR notation support.
//!
//! This module contains the core data structures of the crate:
//! - [`Ipv4Net`] - IPv4 address plus prefix length
//! - [`Ipv6Net`] - IPv6 address plus prefix length
//! - [`IpNet`] - network value of either address family

mod ipv4;
mod ipv6;

// Re-export public types
pub use ipv4::Ipv4Net;
pub use ipv6::Ipv6Net;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::CidrParseError;

/// An IP network of either address family.
///
/// Like the per-family types it serializes as a single CIDR string; the
/// address family is recovered from the address text on parse. An absent
/// network is an `Option<IpNet>` and maps to the serialization format's
/// null, never to a zero-valued address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpNet {
    /// An IPv4 network.
    V4(Ipv4Net),
    /// An IPv6 network.
    V6(Ipv6Net),
}

impl IpNet {
    /// Create a new [`IpNet`] from an address and prefix length.
    ///
    /// The prefix length is bounded by the family of `addr`: 32 for IPv4,
    /// 128 for IPv6.
    pub fn new(addr: IpAddr, prefix_len: u8) -> Result<IpNet, CidrParseError> {
        match addr {
            IpAddr::V4(addr) => Ipv4Net::new(addr, prefix_len).map(IpNet::V4),
            IpAddr::V6(addr) => Ipv6Net::new(addr, prefix_len).map(IpNet::V6),
        }
    }

    /// Create a new [`IpNet`] from an address and subnet mask.
    ///
    /// Fails with [`CidrParseError::FamilyMismatch`] when the address and
    /// mask are not of the same address family.
    pub fn with_netmask(addr: IpAddr, netmask: IpAddr) -> Result<IpNet, CidrParseError> {
        match (addr, netmask) {
            (IpAddr::V4(addr), IpAddr::V4(netmask)) => {
                Ipv4Net::with_netmask(addr, netmask).map(IpNet::V4)
            }
            (IpAddr::V6(addr), IpAddr::V6(netmask)) => {
                Ipv6Net::with_netmask(addr, netmask).map(IpNet::V6)
            }
            _ => Err(CidrParseError::FamilyMismatch),
        }
    }

    /// The address part of the network.
    pub fn addr(&self) -> IpAddr {
        match self {
            IpNet::V4(net) => IpAddr::V4(net.addr()),
            IpNet::V6(net) => IpAddr::V6(net.addr()),
        }
    }

    /// The prefix length.
    pub fn prefix_len(&self) -> u8 {
        match self {
            IpNet::V4(net) => net.prefix_len(),
            IpNet::V6(net) => net.prefix_len(),
        }
    }

    /// The subnet mask equivalent to the prefix length.
    pub fn netmask(&self) -> IpAddr {
        match self {
            IpNet::V4(net) => IpAddr::V4(net.netmask()),
            IpNet::V6(net) => IpAddr::V6(net.netmask()),
        }
    }

    /// The bit width of the address family (32 or 128).
    pub fn max_prefix_len(&self) -> u8 {
        match self {
            IpNet::V4(net) => net.max_prefix_len(),
            IpNet::V6(net) => net.max_prefix_len(),
        }
    }

    /// True when this is an IPv4 network.
    pub fn is_ipv4(&self) -> bool {
        matches!(self, IpNet::V4(_))
    }

    /// True when this is an IPv6 network.
    pub fn is_ipv6(&self) -> bool {
        matches!(self, IpNet::V6(_))
    }
}

impl From<Ipv4Net> for IpNet {
    fn from(net: Ipv4Net) -> IpNet {
        IpNet::V4(net)
    }
}

impl From<Ipv6Net> for IpNet {
    fn from(net: Ipv6Net) -> IpNet {
        IpNet::V6(net)
    }
}

impl fmt::Display for IpNet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpNet::V4(net) => fmt::Display::fmt(net, f),
            IpNet::V6(net) => fmt::Display::fmt(net, f),
        }
    }
}

impl FromStr for IpNet {
    type Err = CidrParseError;

    fn from_str(s: &str) -> Result<IpNet, CidrParseError> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(CidrParseError::MissingPrefixLen);
        }
        let addr = IpAddr::from_str(parts[0])?;
        let prefix_len =
            u8::from_str(parts[1]).map_err(|_| CidrParseError::InvalidPrefixLen)?;
        IpNet::new(addr, prefix_len)
    }
}

impl Serialize for IpNet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = self.to_string();
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for IpNet {
    fn deserialize<D>(deserializer: D) -> Result<IpNet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_family_dispatch() {
        let net: IpNet = "192.168.0.10/24".parse().unwrap();
        assert!(net.is_ipv4());
        assert_eq!(net.max_prefix_len(), 32);
        assert_eq!(net.netmask(), IpAddr::V4(Ipv4Addr::new(255, 255, 255, 0)));

        let net: IpNet = "fd00:c0a8::a/64".parse().unwrap();
        assert!(net.is_ipv6());
        assert_eq!(net.max_prefix_len(), 128);
        assert_eq!(net.prefix_len(), 64);
    }

    #[test]
    fn test_prefix_bound_follows_family() {
        // 99 exceeds the IPv4 bit width but not the IPv6 one
        assert_eq!(
            "192.168.0.10/99".parse::<IpNet>(),
            Err(CidrParseError::PrefixTooLong {
                prefix_len: 99,
                max: 32
            })
        );
        assert!("fd00:c0a8::a/99".parse::<IpNet>().is_ok());
    }

    #[test]
    fn test_with_netmask_family_mismatch() {
        let v4 = IpAddr::V4(Ipv4Addr::new(192, 168, 0, 10));
        let v6_mask = IpAddr::V6(Ipv6Addr::new(0xffff, 0xffff, 0xffff, 0xffff, 0, 0, 0, 0));
        assert_eq!(
            IpNet::with_netmask(v4, v6_mask),
            Err(CidrParseError::FamilyMismatch)
        );
        assert_eq!(
            IpNet::with_netmask(
                IpAddr::V6(Ipv6Addr::LOCALHOST),
                IpAddr::V4(Ipv4Addr::new(255, 0, 0, 0))
            ),
            Err(CidrParseError::FamilyMismatch)
        );
    }

    #[test]
    fn test_from_per_family() {
        let v4 = Ipv4Net::new(Ipv4Addr::new(10, 0, 0, 0), 8).unwrap();
        assert_eq!(IpNet::from(v4), IpNet::V4(v4));
        let v6 = Ipv6Net::new(Ipv6Addr::LOCALHOST, 128).unwrap();
        assert_eq!(IpNet::from(v6).to_string(), "::1/128");
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(matches!(
            "not-an-ip/24".parse::<IpNet>(),
            Err(CidrParseError::InvalidAddr(_))
        ));
        assert_eq!(
            "192.168.0.10/abc".parse::<IpNet>(),
            Err(CidrParseError::InvalidPrefixLen)
        );
        assert_eq!(
            "192.168.0.10".parse::<IpNet>(),
            Err(CidrParseError::MissingPrefixLen)
        );
        assert_eq!("".parse::<IpNet>(), Err(CidrParseError::MissingPrefixLen));
    }
}
