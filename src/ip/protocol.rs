//! Transport protocol descriptors.
//!
//! A [`Protocol`] is anything that can say which address family, socket type
//! and protocol number a socket should be opened with. Resolver queries are
//! generic over it so that the hints they carry match the sockets the caller
//! will eventually open.

use super::endpoint::Endpoint;
use super::family::{AddressFamily, SocketType};
use std::{fmt, hash::Hash};

// IANA protocol numbers.
pub const IPPROTO_ICMP: i32 = 1;
pub const IPPROTO_TCP: i32 = 6;
pub const IPPROTO_UDP: i32 = 17;
pub const IPPROTO_ICMPV6: i32 = 58;

/// Capability set a resolver query needs from a protocol.
pub trait Protocol: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Endpoint type for this protocol. Its default value is consulted when a
    /// query is built without an explicit protocol.
    type Endpoint: ProtocolEndpoint<Protocol = Self> + Default;

    fn family(&self) -> AddressFamily;

    fn socket_type(&self) -> SocketType;

    fn protocol(&self) -> i32;
}

/// An endpoint that knows which protocol it belongs to.
pub trait ProtocolEndpoint {
    type Protocol: Protocol;

    fn protocol(&self) -> Self::Protocol;
}

/// Protocols that exist over both IPv4 and IPv6.
pub trait InternetProtocol: Protocol<Endpoint = Endpoint<Self>> {
    fn v4() -> Self;

    fn v6() -> Self;

    /// Protocol instance for a concrete family, IPv6 for `Inet6` and IPv4
    /// otherwise.
    fn for_family(family: AddressFamily) -> Self {
        match family {
            AddressFamily::Inet6 => Self::v6(),
            _ => Self::v4(),
        }
    }
}

macro_rules! internet_protocol {
    ($(#[$meta:meta])* $name:ident, $socket_type:expr, $v4_proto:expr, $v6_proto:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            family: AddressFamily,
        }

        impl Protocol for $name {
            type Endpoint = Endpoint<Self>;

            fn family(&self) -> AddressFamily {
                self.family
            }

            fn socket_type(&self) -> SocketType {
                $socket_type
            }

            fn protocol(&self) -> i32 {
                match self.family {
                    AddressFamily::Inet6 => $v6_proto,
                    _ => $v4_proto,
                }
            }
        }

        impl InternetProtocol for $name {
            fn v4() -> Self {
                Self {
                    family: AddressFamily::Inet,
                }
            }

            fn v6() -> Self {
                Self {
                    family: AddressFamily::Inet6,
                }
            }
        }

        impl $name {
            /// IPv4 flavour.
            pub fn v4() -> Self {
                <Self as InternetProtocol>::v4()
            }

            /// IPv6 flavour.
            pub fn v6() -> Self {
                <Self as InternetProtocol>::v6()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.family)
            }
        }
    };
}

internet_protocol!(
    /// TCP over IPv4 or IPv6.
    Tcp,
    SocketType::Stream,
    IPPROTO_TCP,
    IPPROTO_TCP
);

internet_protocol!(
    /// UDP over IPv4 or IPv6.
    Udp,
    SocketType::Datagram,
    IPPROTO_UDP,
    IPPROTO_UDP
);

internet_protocol!(
    /// ICMP (or ICMPv6) over raw sockets.
    Icmp,
    SocketType::Raw,
    IPPROTO_ICMP,
    IPPROTO_ICMPV6
);
