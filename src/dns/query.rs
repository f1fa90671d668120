//! Resolver queries.
//!
//! A [`ResolverQuery`] is what a caller hands to a resolver: the host and
//! service to look up, plus a [`Hints`] record saying which kind of endpoint
//! is wanted. The hints are derived once, at construction, and never change.
//!
//! # Defaults
//!
//! A query without a host describes something to bind locally, so its flags
//! default to [`ResolverFlags::PASSIVE`]. A query with a host describes a
//! peer to connect to, so its flags default to [`ResolverFlags::NONE`].
//!
//! # Example
//!
//! ```rust,ignore
//! use resolver_query::dns::{ResolverFlags, ResolverQuery};
//! use resolver_query::ip::Tcp;
//!
//! // Listen on port 8080, any local address, any family.
//! let listen = ResolverQuery::<Tcp>::new("8080");
//! assert!(listen.hints().flags.contains(ResolverFlags::PASSIVE));
//!
//! // Connect to example.com over IPv6.
//! let peer = ResolverQuery::for_protocol_host(Tcp::v6(), "example.com", "https");
//! ```

use super::flags::ResolverFlags;
use crate::ip::{AddressFamily, Protocol, ProtocolEndpoint, SocketType};
use serde::{Deserialize, Serialize};
use std::{fmt, marker::PhantomData};

/// Normalized lookup parameters, the equivalent of `getaddrinfo` hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hints {
    /// Family to restrict results to, or `Unspecified` for any.
    pub family: AddressFamily,
    pub socket_type: SocketType,
    /// Transport protocol number.
    pub protocol: i32,
    pub flags: ResolverFlags,
}

impl Hints {
    fn from_protocol<P: Protocol>(protocol: &P, flags: ResolverFlags) -> Self {
        Self {
            family: protocol.family(),
            socket_type: protocol.socket_type(),
            protocol: protocol.protocol(),
            flags,
        }
    }

    fn any_family<P: Protocol>(flags: ResolverFlags) -> Self {
        let protocol = P::Endpoint::default().protocol();
        Self {
            family: AddressFamily::Unspecified,
            ..Self::from_protocol(&protocol, flags)
        }
    }
}

/// A host/service lookup request for protocol `P`.
pub struct ResolverQuery<P> {
    hints: Hints,
    host_name: String,
    service_name: String,
    _protocol: PhantomData<fn() -> P>,
}

impl<P: Protocol> ResolverQuery<P> {
    /// Local service on any family, flags [`ResolverFlags::PASSIVE`].
    pub fn new(service_name: impl Into<String>) -> Self {
        Self::with_flags(service_name, ResolverFlags::PASSIVE)
    }

    /// Local service on any family.
    pub fn with_flags(service_name: impl Into<String>, flags: ResolverFlags) -> Self {
        Self::from_parts(
            Hints::any_family::<P>(flags),
            String::new(),
            service_name.into(),
        )
    }

    /// Local service for `protocol`, flags [`ResolverFlags::PASSIVE`].
    pub fn for_protocol(protocol: P, service_name: impl Into<String>) -> Self {
        Self::for_protocol_with_flags(protocol, service_name, ResolverFlags::PASSIVE)
    }

    /// Local service for `protocol`.
    pub fn for_protocol_with_flags(
        protocol: P,
        service_name: impl Into<String>,
        flags: ResolverFlags,
    ) -> Self {
        Self::from_parts(
            Hints::from_protocol(&protocol, flags),
            String::new(),
            service_name.into(),
        )
    }

    /// Service on `host_name`, any family, no flags.
    pub fn for_host(host_name: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self::for_host_with_flags(host_name, service_name, ResolverFlags::NONE)
    }

    /// Service on `host_name`, any family.
    pub fn for_host_with_flags(
        host_name: impl Into<String>,
        service_name: impl Into<String>,
        flags: ResolverFlags,
    ) -> Self {
        Self::from_parts(
            Hints::any_family::<P>(flags),
            host_name.into(),
            service_name.into(),
        )
    }

    /// Service on `host_name` for `protocol`, no flags.
    pub fn for_protocol_host(
        protocol: P,
        host_name: impl Into<String>,
        service_name: impl Into<String>,
    ) -> Self {
        Self::for_protocol_host_with_flags(protocol, host_name, service_name, ResolverFlags::NONE)
    }

    /// Service on `host_name` for `protocol`.
    pub fn for_protocol_host_with_flags(
        protocol: P,
        host_name: impl Into<String>,
        service_name: impl Into<String>,
        flags: ResolverFlags,
    ) -> Self {
        Self::from_parts(
            Hints::from_protocol(&protocol, flags),
            host_name.into(),
            service_name.into(),
        )
    }

    /// Start a [`QueryBuilder`] for `service_name`.
    pub fn builder(service_name: impl Into<String>) -> QueryBuilder<P> {
        QueryBuilder::new(service_name)
    }

    fn from_parts(hints: Hints, host_name: String, service_name: String) -> Self {
        tracing::trace!(
            host = %host_name,
            service = %service_name,
            family = %hints.family,
            flags = %hints.flags,
            "resolver query built"
        );
        Self {
            hints,
            host_name,
            service_name,
            _protocol: PhantomData,
        }
    }
}

impl<P> ResolverQuery<P> {
    pub fn hints(&self) -> &Hints {
        &self.hints
    }

    /// Host to look up. Empty means "local to the resolving context".
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn has_host(&self) -> bool {
        !self.host_name.is_empty()
    }
}

impl<P> Clone for ResolverQuery<P> {
    fn clone(&self) -> Self {
        Self {
            hints: self.hints,
            host_name: self.host_name.clone(),
            service_name: self.service_name.clone(),
            _protocol: PhantomData,
        }
    }
}

impl<P> PartialEq for ResolverQuery<P> {
    fn eq(&self, other: &Self) -> bool {
        self.hints == other.hints
            && self.host_name == other.host_name
            && self.service_name == other.service_name
    }
}

impl<P> Eq for ResolverQuery<P> {}

impl<P> std::hash::Hash for ResolverQuery<P> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.hints.hash(state);
        self.host_name.hash(state);
        self.service_name.hash(state);
    }
}

impl<P> fmt::Debug for ResolverQuery<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverQuery")
            .field("host_name", &self.host_name)
            .field("service_name", &self.service_name)
            .field("hints", &self.hints)
            .finish()
    }
}

/// Builder for [`ResolverQuery`].
///
/// Unset flags follow the same rule as the constructors: `PASSIVE` without a
/// host, `NONE` with one.
#[derive(Debug, Clone)]
pub struct QueryBuilder<P> {
    protocol: Option<P>,
    host_name: Option<String>,
    service_name: String,
    flags: Option<ResolverFlags>,
}

impl<P: Protocol> QueryBuilder<P> {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            protocol: None,
            host_name: None,
            service_name: service_name.into(),
            flags: None,
        }
    }

    /// Restrict the query to `protocol`'s family and transport.
    pub fn protocol(mut self, protocol: P) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Resolve `host_name` instead of the local host.
    pub fn host(mut self, host_name: impl Into<String>) -> Self {
        self.host_name = Some(host_name.into());
        self
    }

    /// Set resolution flags, replacing the default.
    pub fn flags(mut self, flags: ResolverFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    pub fn build(self) -> ResolverQuery<P> {
        match (self.protocol, self.host_name) {
            (None, None) => ResolverQuery::with_flags(
                self.service_name,
                self.flags.unwrap_or(ResolverFlags::PASSIVE),
            ),
            (Some(protocol), None) => ResolverQuery::for_protocol_with_flags(
                protocol,
                self.service_name,
                self.flags.unwrap_or(ResolverFlags::PASSIVE),
            ),
            (None, Some(host)) => ResolverQuery::for_host_with_flags(
                host,
                self.service_name,
                self.flags.unwrap_or(ResolverFlags::NONE),
            ),
            (Some(protocol), Some(host)) => ResolverQuery::for_protocol_host_with_flags(
                protocol,
                host,
                self.service_name,
                self.flags.unwrap_or(ResolverFlags::NONE),
            ),
        }
    }
}
