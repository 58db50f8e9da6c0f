//! CIDR notation codec for IP network values.
//!
//! Wraps an IP address plus subnet mask as a single network value that is
//! exchanged as the human-readable string `"<addr>/<prefix-len>"` instead
//! of a structured object with separate address and mask fields. An absent
//! network is an `Option` and maps to the serialization format's null.
//!
//! # Examples
//! ```
//! use cidr_notation::IpNet;
//!
//! let net: IpNet = "192.168.0.10/24".parse()?;
//! assert_eq!(serde_json::to_string(&net)?, "\"192.168.0.10/24\"");
//!
//! let absent: Option<IpNet> = serde_json::from_str("null")?;
//! assert_eq!(absent, None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod mask;
mod net;

pub use error::CidrParseError;
pub use net::{IpNet, Ipv4Net, Ipv6Net};
