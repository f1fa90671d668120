//! Hint interpretation shared by the shipped resolvers.
//!
//! [`LookupPlan`] turns a [`ResolverQuery`] into what a lookup actually needs:
//! a port, and either a host to look up or the addresses to answer with
//! directly (literal hosts and the empty host).

use super::flags::ResolverFlags;
use super::query::ResolverQuery;
use crate::base::neterror::NetError;
use crate::ip::{AddressFamily, SocketType};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::LazyLock;

const SERVICES_PATH: &str = "/etc/services";

/// Contents of the system services database, read once.
static SYSTEM_SERVICES: LazyLock<Option<String>> =
    LazyLock::new(|| match std::fs::read_to_string(SERVICES_PATH) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!(
                path = SERVICES_PATH,
                error = %e,
                "services database unavailable, using built-in table"
            );
            None
        }
    });

/// Used only when the services database cannot be read:
/// (name, port, stream, datagram).
const BUILTIN_SERVICES: &[(&str, u16, bool, bool)] = &[
    ("echo", 7, true, true),
    ("ftp-data", 20, true, false),
    ("ftp", 21, true, false),
    ("ssh", 22, true, false),
    ("telnet", 23, true, false),
    ("smtp", 25, true, false),
    ("domain", 53, true, true),
    ("http", 80, true, false),
    ("pop3", 110, true, false),
    ("ntp", 123, false, true),
    ("imap", 143, true, false),
    ("snmp", 161, false, true),
    ("ldap", 389, true, false),
    ("https", 443, true, true),
    ("submission", 587, true, false),
    ("ldaps", 636, true, false),
    ("domain-s", 853, true, true),
    ("imaps", 993, true, false),
    ("pop3s", 995, true, false),
    ("mdns", 5353, false, true),
];

/// One entry of a services database line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry<'a> {
    pub name: &'a str,
    pub port: u16,
    pub protocol: &'a str,
    pub aliases: Vec<&'a str>,
}

impl ServiceEntry<'_> {
    fn answers_to(&self, service: &str) -> bool {
        self.name.eq_ignore_ascii_case(service)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(service))
    }
}

/// Parse one `/etc/services` line.
///
/// Format: `<name> <port>/<protocol> [<alias>...] [# comment]`.
pub fn parse_services_line(line: &str) -> Option<ServiceEntry<'_>> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut fields = line.split_whitespace();
    let name = fields.next()?;
    let (port, protocol) = fields.next()?.split_once('/')?;
    let port = port.parse().ok()?;
    if protocol.is_empty() {
        return None;
    }

    Some(ServiceEntry {
        name,
        port,
        protocol,
        aliases: fields.collect(),
    })
}

/// Look a service name or alias up in services database content. With a
/// protocol filter only entries for that protocol match. First match wins.
pub fn lookup_service(content: &str, service: &str, protocol: Option<&str>) -> Option<u16> {
    content
        .lines()
        .filter_map(parse_services_line)
        .find(|entry| {
            entry.answers_to(service)
                && protocol.is_none_or(|p| entry.protocol.eq_ignore_ascii_case(p))
        })
        .map(|entry| entry.port)
}

fn transport_name(socket_type: SocketType) -> Option<&'static str> {
    match socket_type {
        SocketType::Stream => Some("tcp"),
        SocketType::Datagram => Some("udp"),
        SocketType::Raw => None,
    }
}

fn builtin_port(service: &str, socket_type: SocketType) -> Option<u16> {
    BUILTIN_SERVICES
        .iter()
        .find(|(name, _, stream, dgram)| {
            name.eq_ignore_ascii_case(service)
                && match socket_type {
                    SocketType::Stream => *stream,
                    SocketType::Datagram => *dgram,
                    SocketType::Raw => true,
                }
        })
        .map(|(_, port, _, _)| *port)
}

/// Resolve a service label or numeric string to a port.
///
/// Names are looked up case-insensitively in the system services database,
/// filtered by transport (raw sockets accept any entry). The built-in table
/// stands in when the database is missing. An empty service means port 0.
pub fn service_port(service: &str, socket_type: SocketType) -> Option<u16> {
    if service.is_empty() {
        return Some(0);
    }
    if let Ok(port) = service.parse::<u16>() {
        return Some(port);
    }

    match SYSTEM_SERVICES.as_deref() {
        Some(content) => lookup_service(content, service, transport_name(socket_type)),
        None => builtin_port(service, socket_type),
    }
}

/// What a resolver has to do to answer a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    /// Answer without a lookup.
    Addresses(Vec<SocketAddr>),
    /// Look this host name up.
    Host(String),
}

/// A validated, interpreted query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupPlan {
    pub family: AddressFamily,
    pub port: u16,
    pub target: LookupTarget,
}

impl LookupPlan {
    pub fn from_query<P>(query: &ResolverQuery<P>) -> Result<Self, NetError> {
        let hints = query.hints();

        let unknown = hints.flags.unrecognized();
        if !unknown.is_empty() {
            return Err(NetError::BadResolverFlags {
                bits: unknown.bits(),
            });
        }

        let port = service_port(query.service_name(), hints.socket_type).ok_or_else(|| {
            NetError::ServiceNotResolved {
                service: query.service_name().to_string(),
            }
        })?;

        let family = hints.family;
        let host = query.host_name();

        let target = if host.is_empty() {
            let passive = hints.flags.contains(ResolverFlags::PASSIVE);
            LookupTarget::Addresses(local_addrs(family, passive, port))
        } else if let Some(ip) = parse_literal(host) {
            let addr = SocketAddr::new(ip, port);
            if !family.admits(&addr) {
                return Err(NetError::AddressInvalid);
            }
            LookupTarget::Addresses(vec![addr])
        } else if hints.flags.contains(ResolverFlags::NUMERIC_HOST) {
            return Err(NetError::AddressInvalid);
        } else {
            LookupTarget::Host(host.to_string())
        };

        Ok(Self {
            family,
            port,
            target,
        })
    }

    /// Keep only addresses of the planned family, with the planned port.
    pub fn filter(&self, addrs: impl IntoIterator<Item = SocketAddr>) -> Vec<SocketAddr> {
        addrs
            .into_iter()
            .filter(|addr| self.family.admits(addr))
            .map(|mut addr| {
                addr.set_port(self.port);
                addr
            })
            .collect()
    }
}

/// Accepts bracketed IPv6 literals as well as bare ones.
fn parse_literal(host: &str) -> Option<IpAddr> {
    let bare = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    bare.parse().ok()
}

/// Addresses for an empty host: wildcard when binding, loopback otherwise.
/// IPv6 first, matching the usual `getaddrinfo` ordering.
fn local_addrs(family: AddressFamily, passive: bool, port: u16) -> Vec<SocketAddr> {
    let (v4, v6) = if passive {
        (Ipv4Addr::UNSPECIFIED, Ipv6Addr::UNSPECIFIED)
    } else {
        (Ipv4Addr::LOCALHOST, Ipv6Addr::LOCALHOST)
    };

    let mut addrs = Vec::with_capacity(2);
    if family != AddressFamily::Inet {
        addrs.push(SocketAddr::new(IpAddr::V6(v6), port));
    }
    if family != AddressFamily::Inet6 {
        addrs.push(SocketAddr::new(IpAddr::V4(v4), port));
    }
    addrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ip::{Tcp, Udp};

    const SAMPLE_SERVICES: &str = "\
# Network services, Internet style
tcpmux		1/tcp				# TCP port service multiplexer
http		80/tcp		www		# WorldWideWeb HTTP
ntp		123/udp				# Network Time Protocol

postgresql	5432/tcp	postgres	# PostgreSQL Database
bogus		not-a-port/tcp
syslog		514/udp
";

    #[test]
    fn test_service_port_numeric_and_named() {
        assert_eq!(service_port("8080", SocketType::Stream), Some(8080));
        assert_eq!(service_port("http", SocketType::Stream), Some(80));
        assert_eq!(service_port("HTTPS", SocketType::Stream), Some(443));
        assert_eq!(service_port("", SocketType::Datagram), Some(0));
        assert_eq!(service_port("no-such-service", SocketType::Stream), None);
        assert_eq!(service_port("70000", SocketType::Stream), None);
    }

    #[test]
    fn test_parse_services_line() {
        let entry = parse_services_line("postgresql\t5432/tcp\tpostgres\t# PostgreSQL").unwrap();
        assert_eq!(entry.name, "postgresql");
        assert_eq!(entry.port, 5432);
        assert_eq!(entry.protocol, "tcp");
        assert_eq!(entry.aliases, vec!["postgres"]);

        assert_eq!(parse_services_line("# only a comment"), None);
        assert_eq!(parse_services_line(""), None);
        assert_eq!(parse_services_line("bogus not-a-port/tcp"), None);
        assert_eq!(parse_services_line("bogus 12/"), None);
    }

    #[test]
    fn test_lookup_service_from_database() {
        // Not in the built-in table
        assert_eq!(builtin_port("postgresql", SocketType::Stream), None);
        assert_eq!(
            lookup_service(SAMPLE_SERVICES, "postgresql", Some("tcp")),
            Some(5432)
        );
        assert_eq!(
            lookup_service(SAMPLE_SERVICES, "Postgres", Some("tcp")),
            Some(5432)
        );
        assert_eq!(lookup_service(SAMPLE_SERVICES, "www", Some("tcp")), Some(80));
        assert_eq!(lookup_service(SAMPLE_SERVICES, "syslog", None), Some(514));
    }

    #[test]
    fn test_lookup_service_filters_protocol_and_comments() {
        assert_eq!(lookup_service(SAMPLE_SERVICES, "ntp", Some("tcp")), None);
        assert_eq!(lookup_service(SAMPLE_SERVICES, "ntp", Some("udp")), Some(123));
        assert_eq!(lookup_service(SAMPLE_SERVICES, "TCP", Some("tcp")), None);
        assert_eq!(lookup_service(SAMPLE_SERVICES, "Network", None), None);
        assert_eq!(lookup_service(SAMPLE_SERVICES, "bogus", None), None);
    }

    #[test]
    fn test_builtin_table_respects_transport() {
        assert_eq!(builtin_port("ntp", SocketType::Datagram), Some(123));
        assert_eq!(builtin_port("ntp", SocketType::Stream), None);
        assert_eq!(builtin_port("ssh", SocketType::Datagram), None);
        assert_eq!(builtin_port("ssh", SocketType::Raw), Some(22));
    }

    #[test]
    fn test_passive_empty_host_is_wildcard() {
        let plan = LookupPlan::from_query(&ResolverQuery::<Tcp>::new("80")).unwrap();
        assert_eq!(plan.port, 80);
        assert_eq!(
            plan.target,
            LookupTarget::Addresses(vec![
                "[::]:80".parse().unwrap(),
                "0.0.0.0:80".parse().unwrap(),
            ])
        );
    }

    #[test]
    fn test_active_empty_host_is_loopback() {
        let q = ResolverQuery::for_protocol_with_flags(Tcp::v4(), "http", ResolverFlags::NONE);
        let plan = LookupPlan::from_query(&q).unwrap();
        assert_eq!(
            plan.target,
            LookupTarget::Addresses(vec!["127.0.0.1:80".parse().unwrap()])
        );
    }

    #[test]
    fn test_literal_host_short_circuits() {
        let q = ResolverQuery::<Udp>::for_host("[::1]", "53");
        let plan = LookupPlan::from_query(&q).unwrap();
        assert_eq!(
            plan.target,
            LookupTarget::Addresses(vec!["[::1]:53".parse().unwrap()])
        );
    }

    #[test]
    fn test_literal_of_wrong_family_rejected() {
        let q = ResolverQuery::for_protocol_host(Tcp::v6(), "127.0.0.1", "80");
        assert!(matches!(
            LookupPlan::from_query(&q),
            Err(NetError::AddressInvalid)
        ));
    }

    #[test]
    fn test_numeric_host_requires_literal() {
        let q = ResolverQuery::<Tcp>::for_host_with_flags(
            "example.com",
            "80",
            ResolverFlags::NUMERIC_HOST,
        );
        assert!(matches!(
            LookupPlan::from_query(&q),
            Err(NetError::AddressInvalid)
        ));

        let q = ResolverQuery::<Tcp>::for_host_with_flags(
            "192.0.2.1",
            "80",
            ResolverFlags::NUMERIC_HOST,
        );
        assert!(LookupPlan::from_query(&q).is_ok());
    }

    #[test]
    fn test_named_host_needs_lookup() {
        let q = ResolverQuery::<Tcp>::for_host("example.com", "https");
        let plan = LookupPlan::from_query(&q).unwrap();
        assert_eq!(plan.target, LookupTarget::Host("example.com".into()));
        assert_eq!(plan.port, 443);
    }

    #[test]
    fn test_unknown_service_rejected() {
        let q = ResolverQuery::<Tcp>::for_host("example.com", "gopher+");
        match LookupPlan::from_query(&q) {
            Err(NetError::ServiceNotResolved { service }) => assert_eq!(service, "gopher+"),
            other => panic!("Expected ServiceNotResolved, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_flags_rejected() {
        let flags = ResolverFlags::PASSIVE | ResolverFlags::from_bits_retain(0x400);
        let q = ResolverQuery::<Tcp>::with_flags("80", flags);
        assert!(matches!(
            LookupPlan::from_query(&q),
            Err(NetError::BadResolverFlags { bits: 0x400 })
        ));
    }

    #[test]
    fn test_filter_applies_family_and_port() {
        let q = ResolverQuery::for_protocol_host(Tcp::v4(), "example.com", "8443");
        let plan = LookupPlan::from_query(&q).unwrap();

        let kept = plan.filter(vec![
            "[2001:db8::1]:0".parse().unwrap(),
            "192.0.2.7:0".parse().unwrap(),
        ]);
        assert_eq!(kept, vec!["192.0.2.7:8443".parse::<SocketAddr>().unwrap()]);
    }
}
