//! Protocol-tagged socket addresses.

use super::family::AddressFamily;
use super::protocol::{InternetProtocol, ProtocolEndpoint};
use std::{
    fmt,
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
};

/// A socket address belonging to protocol `P`.
///
/// The default endpoint is the IPv4 unspecified address with port 0, which is
/// what a resolver query without an explicit protocol consults for its
/// socket type and protocol number.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint<P> {
    addr: SocketAddr,
    _protocol: PhantomData<P>,
}

impl<P: InternetProtocol> Endpoint<P> {
    /// Unspecified address of `protocol`'s family on `port`, suitable for
    /// binding a listener.
    pub fn new(protocol: P, port: u16) -> Self {
        let ip = match protocol.family() {
            AddressFamily::Inet6 => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
            _ => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        Self::from(SocketAddr::new(ip, port))
    }

    pub fn address(&self) -> IpAddr {
        self.addr.ip()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.addr
    }
}

impl<P> From<SocketAddr> for Endpoint<P> {
    fn from(addr: SocketAddr) -> Self {
        Self {
            addr,
            _protocol: PhantomData,
        }
    }
}

impl<P> From<Endpoint<P>> for SocketAddr {
    fn from(endpoint: Endpoint<P>) -> Self {
        endpoint.addr
    }
}

impl<P> Default for Endpoint<P> {
    fn default() -> Self {
        Self::from(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0))
    }
}

impl<P: InternetProtocol> ProtocolEndpoint for Endpoint<P> {
    type Protocol = P;

    fn protocol(&self) -> P {
        P::for_family(AddressFamily::of(&self.addr))
    }
}

impl<P> fmt::Debug for Endpoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.addr, f)
    }
}

impl<P> fmt::Display for Endpoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}
