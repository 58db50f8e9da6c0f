//! IPv4 network value with CIDR notation support.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::CidrParseError;
use crate::mask::{ipv4_mask_to_prefix, ipv4_prefix_to_mask, IPV4_MAX_PREFIX_LEN};

/// An IPv4 address paired with a CIDR prefix length.
///
/// Serializes as the single string `"<addr>/<prefix-len>"` (e.g.
/// `"192.168.0.10/24"`) rather than as a structured value, and
/// deserializes from the same form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Net {
    addr: Ipv4Addr,
    prefix_len: u8,
}

impl Ipv4Net {
    /// Create a new [`Ipv4Net`] from an address and prefix length.
    ///
    /// # Examples
    /// ```
    /// use cidr_notation::Ipv4Net;
    /// use std::net::Ipv4Addr;
    /// let net = Ipv4Net::new(Ipv4Addr::new(10, 1, 0, 0), 16).unwrap();
    /// assert_eq!(net.to_string(), "10.1.0.0/16");
    /// assert!(Ipv4Net::new(Ipv4Addr::new(10, 1, 0, 0), 33).is_err());
    /// ```
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<Ipv4Net, CidrParseError> {
        if prefix_len > IPV4_MAX_PREFIX_LEN {
            return Err(CidrParseError::PrefixTooLong {
                prefix_len,
                max: IPV4_MAX_PREFIX_LEN,
            });
        }
        Ok(Ipv4Net { addr, prefix_len })
    }

    /// Create a new [`Ipv4Net`] from an address and subnet mask.
    ///
    /// The mask must be a contiguous run of set bits from the most
    /// significant bit, e.g. `255.255.255.0`.
    pub fn with_netmask(addr: Ipv4Addr, netmask: Ipv4Addr) -> Result<Ipv4Net, CidrParseError> {
        let prefix_len = ipv4_mask_to_prefix(netmask)?;
        Ok(Ipv4Net { addr, prefix_len })
    }

    /// The address part of the network.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The subnet mask equivalent to the prefix length.
    pub fn netmask(&self) -> Ipv4Addr {
        ipv4_prefix_to_mask(self.prefix_len)
            .unwrap_or_else(|e| panic!("Error deriving netmask for {}: {}", self, e))
    }

    /// The bit width of the address family (32).
    pub fn max_prefix_len(&self) -> u8 {
        IPV4_MAX_PREFIX_LEN
    }
}

impl fmt::Display for Ipv4Net {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl FromStr for Ipv4Net {
    type Err = CidrParseError;

    fn from_str(s: &str) -> Result<Ipv4Net, CidrParseError> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(CidrParseError::MissingPrefixLen);
        }
        let addr = Ipv4Addr::from_str(parts[0])?;
        let prefix_len =
            u8::from_str(parts[1]).map_err(|_| CidrParseError::InvalidPrefixLen)?;
        Ipv4Net::new(addr, prefix_len)
    }
}

impl Serialize for Ipv4Net {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix_len);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4Net {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Net, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
