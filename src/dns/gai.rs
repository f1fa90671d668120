//! System DNS resolver using getaddrinfo.
//!
//! This resolver uses the operating system's native DNS resolution via
//! `getaddrinfo`, executed in a thread pool to avoid blocking the async runtime.
//!
//! # When to Use
//!
//! - When you need to respect system DNS configuration (/etc/resolv.conf, /etc/hosts, etc.)
//! - When DoH/DoT is not required
//! - As a fallback when hickory-dns is not available

use super::resolve::{Addrs, Resolve, Resolving};
use super::service::{LookupPlan, LookupTarget};
use super::ResolverQuery;
use crate::base::context::IoResultExt;
use crate::base::neterror::NetError;
use crate::ip::Protocol;
use std::net::ToSocketAddrs;

/// System DNS resolver using `getaddrinfo` in a thread pool.
///
/// This resolver wraps the standard library's `ToSocketAddrs` trait and
/// executes resolution in `tokio::task::spawn_blocking` to avoid blocking
/// the async runtime. Literal hosts and the empty host are answered without
/// touching the system resolver.
///
/// # Performance
///
/// Each resolution spawns a blocking task. For high-throughput scenarios,
/// consider using `HickoryResolver` which is fully async.
#[derive(Clone, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }
}

impl<P: Protocol> Resolve<P> for GaiResolver {
    fn resolve(&self, query: ResolverQuery<P>) -> Resolving {
        Box::pin(async move {
            let plan = LookupPlan::from_query(&query)?;

            let host = match &plan.target {
                LookupTarget::Addresses(addrs) => {
                    return Ok(Box::new(addrs.clone().into_iter()) as Addrs);
                }
                LookupTarget::Host(host) => host.clone(),
            };

            let domain = host.clone();
            let port = plan.port;
            let result = tokio::task::spawn_blocking(move || {
                tracing::debug!(host = %host, port, "resolving via getaddrinfo");
                (host.as_str(), port)
                    .to_socket_addrs()
                    .map(|iter| iter.collect::<Vec<_>>())
            })
            .await;

            // Handle task join error (cancellation, panic)
            let addrs = result
                .map_err(|e| {
                    tracing::error!(error = %e, "DNS resolution task failed");
                    NetError::NameResolutionFailed
                })?
                .dns_context(&domain)
                .inspect_err(|e| {
                    tracing::debug!(domain = %domain, error = %e, "DNS resolution failed");
                })?;

            let addrs = plan.filter(addrs);
            if addrs.is_empty() {
                return Err(NetError::no_addresses(&domain));
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "DNS resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}
