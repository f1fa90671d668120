//! Core DNS resolution types and traits.
//!
//! This module defines the `Resolve` trait and supporting types that form
//! the foundation of the DNS abstraction layer. Resolvers consume a
//! [`ResolverQuery`] and answer with socket addresses.

use super::query::ResolverQuery;
use super::service::LookupPlan;
use crate::base::neterror::NetError;
use crate::ip::Protocol;
use std::{borrow::Cow, collections::HashMap, future::Future, net::SocketAddr, pin::Pin, sync::Arc};

/// Alias for an `Iterator` trait object over `SocketAddr`.
pub type Addrs = Box<dyn Iterator<Item = SocketAddr> + Send>;

/// Alias for the `Future` type returned by a DNS resolver.
pub type Resolving = Pin<Box<dyn Future<Output = Result<Addrs, NetError>> + Send>>;

/// Trait for DNS resolution.
///
/// Implementations must be thread-safe and must honor the query's hints:
/// only addresses of `hints().family` are returned, each carrying the port
/// named by the query's service.
///
/// # Design Notes
///
/// - Resolution is assumed to always be ready (no backpressure).
/// - Uses `&self` for concurrent resolution without mutable access.
/// - Returns boxed futures for trait object compatibility.
pub trait Resolve<P: Protocol>: Send + Sync {
    /// Resolves a query to socket addresses.
    fn resolve(&self, query: ResolverQuery<P>) -> Resolving;
}

/// Blanket implementation for Arc-wrapped resolvers.
impl<P: Protocol, R: Resolve<P> + ?Sized> Resolve<P> for Arc<R> {
    fn resolve(&self, query: ResolverQuery<P>) -> Resolving {
        (**self).resolve(query)
    }
}

/// DNS resolver wrapper that supports hostname overrides.
///
/// This resolver first checks a map of hostname-to-address overrides before
/// falling back to the underlying resolver. Overridden answers still go
/// through the query's hints: the port comes from the service and addresses
/// of the wrong family are dropped.
///
/// # Example
///
/// ```rust,ignore
/// use resolver_query::dns::{DnsResolverWithOverrides, GaiResolver};
/// use std::collections::HashMap;
///
/// let mut overrides = HashMap::new();
/// overrides.insert("api.local".into(), vec!["127.0.0.1:0".parse().unwrap()]);
///
/// let resolver = DnsResolverWithOverrides::new(Arc::new(GaiResolver::new()), overrides);
/// ```
pub struct DnsResolverWithOverrides<P: Protocol> {
    inner: Arc<dyn Resolve<P>>,
    overrides: Arc<HashMap<Cow<'static, str>, Vec<SocketAddr>>>,
}

impl<P: Protocol> DnsResolverWithOverrides<P> {
    /// Creates a new resolver with the given overrides.
    ///
    /// Ports in the override addresses are ignored.
    pub fn new(
        inner: Arc<dyn Resolve<P>>,
        overrides: HashMap<Cow<'static, str>, Vec<SocketAddr>>,
    ) -> Self {
        Self {
            inner,
            overrides: Arc::new(overrides),
        }
    }

    pub fn is_overridden(&self, host: &str) -> bool {
        self.overrides.contains_key(host)
    }
}

impl<P: Protocol> Clone for DnsResolverWithOverrides<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            overrides: self.overrides.clone(),
        }
    }
}

impl<P: Protocol> Resolve<P> for DnsResolverWithOverrides<P> {
    fn resolve(&self, query: ResolverQuery<P>) -> Resolving {
        let Some(dest) = self.overrides.get(query.host_name()) else {
            return self.inner.resolve(query);
        };

        let dest = dest.clone();
        Box::pin(async move {
            let plan = LookupPlan::from_query(&query)?;
            let addrs = plan.filter(dest);
            if addrs.is_empty() {
                return Err(NetError::no_addresses(query.host_name()));
            }

            tracing::debug!(
                host = %query.host_name(),
                count = addrs.len(),
                "using DNS override"
            );
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::ResolverFlags;
    use crate::ip::Tcp;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    struct MockResolver {
        response: Vec<SocketAddr>,
    }

    impl Resolve<Tcp> for MockResolver {
        fn resolve(&self, _query: ResolverQuery<Tcp>) -> Resolving {
            let addrs = self.response.clone();
            Box::pin(async move { Ok(Box::new(addrs.into_iter()) as Addrs) })
        }
    }

    fn resolver_with(
        overrides: Vec<(&'static str, Vec<SocketAddr>)>,
    ) -> DnsResolverWithOverrides<Tcp> {
        let mock = Arc::new(MockResolver {
            response: vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 0)],
        });
        let overrides = overrides
            .into_iter()
            .map(|(host, addrs)| (Cow::Borrowed(host), addrs))
            .collect();
        DnsResolverWithOverrides::new(mock, overrides)
    }

    #[tokio::test]
    async fn test_override_resolver_hit() {
        let resolver = resolver_with(vec![(
            "override.local",
            vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0)],
        )]);
        assert!(resolver.is_overridden("override.local"));

        let addrs: Vec<_> = resolver
            .resolve(ResolverQuery::for_host("override.local", "https"))
            .await
            .unwrap()
            .collect();

        assert_eq!(addrs.len(), 1);
        assert_eq!(addrs[0].ip(), IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)));
        assert_eq!(addrs[0].port(), 443);
    }

    #[tokio::test]
    async fn test_override_resolver_miss() {
        let resolver = resolver_with(vec![]);

        let addrs: Vec<_> = resolver
            .resolve(ResolverQuery::for_host("not-overridden.com", "80"))
            .await
            .unwrap()
            .collect();

        assert_eq!(addrs.len(), 1);
        assert_eq!(addrs[0].ip(), IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)));
    }

    #[tokio::test]
    async fn test_override_respects_family() {
        let resolver = resolver_with(vec![(
            "dual.local",
            vec![
                SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
                SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 0),
            ],
        )]);

        let addrs: Vec<_> = resolver
            .resolve(ResolverQuery::for_protocol_host(Tcp::v6(), "dual.local", "22"))
            .await
            .unwrap()
            .collect();

        assert_eq!(
            addrs,
            vec![SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 22)]
        );
    }

    #[tokio::test]
    async fn test_override_with_no_matching_family_fails() {
        let resolver = resolver_with(vec![(
            "v4only.local",
            vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)],
        )]);

        let result = resolver
            .resolve(ResolverQuery::for_protocol_host(Tcp::v6(), "v4only.local", "80"))
            .await;

        match result {
            Err(NetError::NameNotResolvedFor { domain, .. }) => assert_eq!(domain, "v4only.local"),
            Err(e) => panic!("Unexpected error: {e}"),
            Ok(_) => panic!("Expected failure"),
        }
    }

    #[tokio::test]
    async fn test_override_still_validates_flags() {
        let resolver = resolver_with(vec![(
            "override.local",
            vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)],
        )]);

        let query = ResolverQuery::for_host_with_flags(
            "override.local",
            "80",
            ResolverFlags::from_bits_retain(0x800),
        );
        assert!(matches!(
            resolver.resolve(query).await,
            Err(NetError::BadResolverFlags { .. })
        ));
    }
}
