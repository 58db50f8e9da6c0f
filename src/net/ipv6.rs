//! IPv6 network value with CIDR notation support.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use crate::error::CidrParseError;
use crate::mask::{ipv6_mask_to_prefix, ipv6_prefix_to_mask, IPV6_MAX_PREFIX_LEN};

/// An IPv6 address paired with a CIDR prefix length.
///
/// Serializes as the single string `"<addr>/<prefix-len>"` (e.g.
/// `"fd00:c0a8::a/64"`), with the address in its shortest textual form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv6Net {
    addr: Ipv6Addr,
    prefix_len: u8,
}

impl Ipv6Net {
    /// Create a new [`Ipv6Net`] from an address and prefix length.
    pub fn new(addr: Ipv6Addr, prefix_len: u8) -> Result<Ipv6Net, CidrParseError> {
        if prefix_len > IPV6_MAX_PREFIX_LEN {
            return Err(CidrParseError::PrefixTooLong {
                prefix_len,
                max: IPV6_MAX_PREFIX_LEN,
            });
        }
        Ok(Ipv6Net { addr, prefix_len })
    }

    /// Create a new [`Ipv6Net`] from an address and subnet mask.
    pub fn with_netmask(addr: Ipv6Addr, netmask: Ipv6Addr) -> Result<Ipv6Net, CidrParseError> {
        let prefix_len = ipv6_mask_to_prefix(netmask)?;
        Ok(Ipv6Net { addr, prefix_len })
    }

    /// The address part of the network.
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    /// The prefix length (0-128).
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The subnet mask equivalent to the prefix length.
    pub fn netmask(&self) -> Ipv6Addr {
        ipv6_prefix_to_mask(self.prefix_len)
            .unwrap_or_else(|e| panic!("Error deriving netmask for {}: {}", self, e))
    }

    /// The bit width of the address family (128).
    pub fn max_prefix_len(&self) -> u8 {
        IPV6_MAX_PREFIX_LEN
    }
}

impl fmt::Display for Ipv6Net {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl FromStr for Ipv6Net {
    type Err = CidrParseError;

    fn from_str(s: &str) -> Result<Ipv6Net, CidrParseError> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(CidrParseError::MissingPrefixLen);
        }
        let addr = Ipv6Addr::from_str(parts[0])?;
        let prefix_len =
            u8::from_str(parts[1]).map_err(|_| CidrParseError::InvalidPrefixLen)?;
        Ipv6Net::new(addr, prefix_len)
    }
}

impl Serialize for Ipv6Net {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix_len);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv6Net {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6Net, D::Error>
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
    use quickcheck::quickcheck;

    #[test]
    fn test_display() {
        let addr = Ipv6Addr::new(0xfd00, 0xc0a8, 0, 0, 0, 0, 0, 0xa);
        let net = Ipv6Net::new(addr, 64).unwrap();
        // shortest textual form, zero run compressed
        assert_eq!(net.to_string(), "fd00:c0a8::a/64");
        assert_eq!(
            Ipv6Net::new(Ipv6Addr::UNSPECIFIED, 0).unwrap().to_string(),
            "::/0"
        );
    }

    #[test]
    fn test_from_str() {
        let net: Ipv6Net = "fd00:c0a8::a/64".parse().unwrap();
        assert_eq!(net.addr(), Ipv6Addr::new(0xfd00, 0xc0a8, 0, 0, 0, 0, 0, 0xa));
        assert_eq!(net.prefix_len(), 64);
        assert_eq!(
            net.netmask(),
            Ipv6Addr::new(0xffff, 0xffff, 0xffff, 0xffff, 0, 0, 0, 0)
        );

        // 99 is a valid IPv6 prefix length even though it exceeds 32
        assert!("fd00:c0a8::a/99".parse::<Ipv6Net>().is_ok());
        assert_eq!(
            "fd00:c0a8::a/129".parse::<Ipv6Net>(),
            Err(CidrParseError::PrefixTooLong {
                prefix_len: 129,
                max: 128
            })
        );
        assert_eq!(
            "fd00:c0a8::a".parse::<Ipv6Net>(),
            Err(CidrParseError::MissingPrefixLen)
        );
        assert!(matches!(
            "fd00:zzzz::a/64".parse::<Ipv6Net>(),
            Err(CidrParseError::InvalidAddr(_))
        ));
    }

    #[test]
    fn test_with_netmask() {
        let addr = Ipv6Addr::new(0xfd00, 0xc0a8, 0, 0, 0, 0, 0, 0xa);
        let mask = Ipv6Addr::new(0xffff, 0xffff, 0xffff, 0xffff, 0, 0, 0, 0);
        let net = Ipv6Net::with_netmask(addr, mask).unwrap();
        assert_eq!(net, "fd00:c0a8::a/64".parse().unwrap());
        assert_eq!(
            Ipv6Net::with_netmask(addr, Ipv6Addr::new(0xffff, 0, 0xffff, 0, 0, 0, 0, 0)),
            Err(CidrParseError::NonContiguousMask)
        );
    }

    quickcheck! {
        fn prop_round_trip(addr: u128, prefix_len: u8) -> bool {
            match Ipv6Net::new(Ipv6Addr::from(addr), prefix_len % 129) {
                Ok(net) => Ok(net) == net.to_string().parse(),
                Err(_) => false,
            }
        }
    }
}
