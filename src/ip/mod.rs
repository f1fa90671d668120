//! IP protocol and endpoint types.
//!
//! Provides what a resolver query needs to know about transports:
//! - [`AddressFamily`] and [`SocketType`] with their platform values
//! - The [`Protocol`] capability trait with [`Tcp`], [`Udp`] and [`Icmp`]
//! - [`Endpoint`]: a socket address tagged with its protocol

mod endpoint;
mod family;
mod protocol;

pub use endpoint::Endpoint;
pub use family::{AddressFamily, SocketType};
pub use protocol::{
    Icmp, InternetProtocol, Protocol, ProtocolEndpoint, Tcp, Udp, IPPROTO_ICMP, IPPROTO_ICMPV6,
    IPPROTO_TCP, IPPROTO_UDP,
};
