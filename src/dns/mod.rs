//! DNS Resolution Module
//!
//! Provides resolver queries and the resolvers that consume them:
//! - [`ResolverQuery`]: host/service/protocol intent normalized into [`Hints`]
//! - System resolver (getaddrinfo via thread pool)
//! - Async hickory-dns resolver (DoH/DoT capable)
//! - Hostname-to-IP override mechanism
//!
//! # Architecture
//!
//! A query is a plain immutable value; all decision logic about what a lookup
//! should return lives in how its hints are derived. The `Resolve` trait is
//! the seam that lets different resolver implementations consume the same
//! query interchangeably.
//!
//! # Example
//!
//! ```rust,ignore
//! use resolver_query::dns::{GaiResolver, Resolve, ResolverQuery};
//! use resolver_query::ip::Tcp;
//!
//! let resolver = GaiResolver::new();
//! let query = ResolverQuery::<Tcp>::for_host("example.com", "https");
//! for addr in resolver.resolve(query).await? {
//!     println!("Resolved: {}", addr);
//! }
//! ```

mod flags;
mod gai;
mod hickory;
mod query;
mod resolve;
pub mod service;

pub use flags::ResolverFlags;
pub use gai::GaiResolver;
pub use hickory::HickoryResolver;
pub use query::{Hints, QueryBuilder, ResolverQuery};
pub use resolve::{Addrs, DnsResolverWithOverrides, Resolve, Resolving};
