//! Async DNS resolver using hickory-dns.
//!
//! This resolver provides fully async DNS resolution with support for:
//! - DNS-over-HTTPS (DoH)
//! - DNS-over-TLS (DoT)
//! - System DNS configuration auto-detection
//! - A-only or AAAA-only lookups for family-restricted queries
//!
//! # Performance
//!
//! Unlike `GaiResolver`, this resolver is fully async and doesn't require
//! spawning blocking tasks. It maintains connection pools to DNS servers
//! for better performance under load.

use super::resolve::{Addrs, Resolve, Resolving};
use super::service::{LookupPlan, LookupTarget};
use super::ResolverQuery;
use crate::base::neterror::NetError;
use crate::ip::{AddressFamily, Protocol};
use hickory_resolver::{
    config::{LookupIpStrategy, ResolverConfig},
    name_server::TokioConnectionProvider,
    ResolveError, TokioResolver,
};
use std::{
    io,
    net::{IpAddr, SocketAddr},
    sync::LazyLock,
};

/// Async DNS resolver backed by hickory-dns.
///
/// This resolver is lazily initialized on first use and shared across
/// all instances via a static `LazyLock`. It automatically configures
/// itself based on the system's DNS settings.
///
/// Queries restricted to one address family only send the matching record
/// lookup. Named services are mapped through the system services database.
///
/// # Example
///
/// ```rust,ignore
/// use resolver_query::dns::{HickoryResolver, Resolve, ResolverQuery};
/// use resolver_query::ip::Tcp;
///
/// let resolver = HickoryResolver::new();
/// let addrs = resolver
///     .resolve(ResolverQuery::for_protocol_host(Tcp::v4(), "example.com", "https"))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct HickoryResolver {
    resolver: &'static LazyLock<TokioResolver>,
}

impl HickoryResolver {
    /// Creates a new `HickoryResolver`.
    ///
    /// The underlying resolver is lazily initialized on first DNS query.
    /// It will attempt to read system DNS configuration; if that fails,
    /// it falls back to sensible defaults.
    pub fn new() -> Self {
        static RESOLVER: LazyLock<TokioResolver> = LazyLock::new(|| {
            let mut builder = match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    tracing::debug!("Using system DNS configuration");
                    builder
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to read system DNS config, using defaults"
                    );
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            };

            // Unrestricted queries get both families
            builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

            builder.build()
        });

        Self {
            resolver: &RESOLVER,
        }
    }

    /// Sends only the record lookups the family needs.
    async fn lookup(
        &self,
        domain: &str,
        family: AddressFamily,
    ) -> Result<Vec<IpAddr>, ResolveError> {
        let ips: Vec<IpAddr> = match family {
            AddressFamily::Inet => self
                .resolver
                .ipv4_lookup(domain)
                .await?
                .iter()
                .map(|a| IpAddr::V4(a.0))
                .collect(),
            AddressFamily::Inet6 => self
                .resolver
                .ipv6_lookup(domain)
                .await?
                .iter()
                .map(|aaaa| IpAddr::V6(aaaa.0))
                .collect(),
            AddressFamily::Unspecified => self.resolver.lookup_ip(domain).await?.iter().collect(),
        };
        Ok(ips)
    }
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Protocol> Resolve<P> for HickoryResolver {
    fn resolve(&self, query: ResolverQuery<P>) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let plan = LookupPlan::from_query(&query)?;

            let domain = match &plan.target {
                LookupTarget::Addresses(addrs) => {
                    return Ok(Box::new(addrs.clone().into_iter()) as Addrs);
                }
                LookupTarget::Host(host) => host.as_str(),
            };
            tracing::debug!(domain = %domain, family = %plan.family, "resolving via hickory-dns");

            let ips = resolver.lookup(domain, plan.family).await.map_err(|e| {
                tracing::debug!(domain = %domain, error = %e, "hickory-dns lookup failed");
                NetError::dns_failed(domain, io::Error::new(io::ErrorKind::NotFound, e.to_string()))
            })?;

            let addrs = plan.filter(ips.into_iter().map(|ip| SocketAddr::new(ip, 0)));

            if addrs.is_empty() {
                return Err(NetError::no_addresses(domain));
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "hickory-dns resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}
