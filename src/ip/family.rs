//! Address families and socket types.
//!
//! These are the values a resolver hint carries. `as_raw()` yields the
//! number the platform socket API expects, so the hint can be handed to a
//! native `getaddrinfo` unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;

#[cfg(unix)]
mod raw {
    pub const AF_UNSPEC: i32 = libc::AF_UNSPEC;
    pub const AF_INET: i32 = libc::AF_INET;
    pub const AF_INET6: i32 = libc::AF_INET6;
    pub const SOCK_STREAM: i32 = libc::SOCK_STREAM;
    pub const SOCK_DGRAM: i32 = libc::SOCK_DGRAM;
    pub const SOCK_RAW: i32 = libc::SOCK_RAW;
}

// Winsock values.
#[cfg(not(unix))]
mod raw {
    pub const AF_UNSPEC: i32 = 0;
    pub const AF_INET: i32 = 2;
    pub const AF_INET6: i32 = 23;
    pub const SOCK_STREAM: i32 = 1;
    pub const SOCK_DGRAM: i32 = 2;
    pub const SOCK_RAW: i32 = 3;
}

/// Address family a lookup is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AddressFamily {
    /// Any family (`AF_UNSPEC`).
    #[default]
    Unspecified,
    /// IPv4 (`AF_INET`).
    Inet,
    /// IPv6 (`AF_INET6`).
    Inet6,
}

impl AddressFamily {
    /// Platform value of this family.
    pub fn as_raw(self) -> i32 {
        match self {
            AddressFamily::Unspecified => raw::AF_UNSPEC,
            AddressFamily::Inet => raw::AF_INET,
            AddressFamily::Inet6 => raw::AF_INET6,
        }
    }

    /// Map a platform value back, if it is one we know.
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            raw::AF_UNSPEC => Some(AddressFamily::Unspecified),
            raw::AF_INET => Some(AddressFamily::Inet),
            raw::AF_INET6 => Some(AddressFamily::Inet6),
            _ => None,
        }
    }

    /// Family of a concrete socket address.
    pub fn of(addr: &SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(_) => AddressFamily::Inet,
            SocketAddr::V6(_) => AddressFamily::Inet6,
        }
    }

    /// Whether `addr` is acceptable under this family restriction.
    pub fn admits(self, addr: &SocketAddr) -> bool {
        match self {
            AddressFamily::Unspecified => true,
            family => family == Self::of(addr),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressFamily::Unspecified => "unspecified",
            AddressFamily::Inet => "ipv4",
            AddressFamily::Inet6 => "ipv6",
        };
        f.write_str(name)
    }
}

/// Transport socket type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketType {
    /// Connection oriented byte stream (`SOCK_STREAM`).
    Stream,
    /// Connectionless datagrams (`SOCK_DGRAM`).
    Datagram,
    /// Raw network protocol access (`SOCK_RAW`).
    Raw,
}

impl SocketType {
    pub fn as_raw(self) -> i32 {
        match self {
            SocketType::Stream => raw::SOCK_STREAM,
            SocketType::Datagram => raw::SOCK_DGRAM,
            SocketType::Raw => raw::SOCK_RAW,
        }
    }

    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            raw::SOCK_STREAM => Some(SocketType::Stream),
            raw::SOCK_DGRAM => Some(SocketType::Datagram),
            raw::SOCK_RAW => Some(SocketType::Raw),
            _ => None,
        }
    }
}
