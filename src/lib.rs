//! # resolver_query
//!
//! Resolver queries for Rust.
//!
//! A [`ResolverQuery`](dns::ResolverQuery) captures what a caller wants
//! resolved (a host, a service, a transport protocol and a few options) and
//! normalizes it into a `getaddrinfo`-style hints record. Resolvers consume
//! queries and answer with socket addresses.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use resolver_query::dns::{GaiResolver, Resolve, ResolverFlags, ResolverQuery};
//! use resolver_query::ip::Tcp;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Where should a server listen for "http"?
//!     let bind = ResolverQuery::<Tcp>::new("http");
//!     assert!(bind.hints().flags.contains(ResolverFlags::PASSIVE));
//!
//!     // Where is example.com's HTTPS endpoint, IPv4 only?
//!     let peer = ResolverQuery::for_protocol_host(Tcp::v4(), "example.com", "https");
//!     for addr in GaiResolver::new().resolve(peer).await.unwrap() {
//!         println!("{addr}");
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core types and error definitions
//! - [`ip`] - Address families, socket types, protocols and endpoints
//! - [`dns`] - Resolver queries, hints and resolvers

pub mod base;
pub mod dns;
pub mod ip;
