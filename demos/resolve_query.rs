use resolver_query::dns::{GaiResolver, HickoryResolver, Resolve, ResolverFlags, ResolverQuery};
use resolver_query::ip::{Tcp, Udp};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let host = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "example.com".to_string());

    println!("=== Bind targets (passive) ===");
    let bind = ResolverQuery::<Tcp>::new("http");
    println!("hints: {:?}", bind.hints());
    for addr in GaiResolver::new().resolve(bind).await? {
        println!("  {addr}");
    }

    println!("\n=== {host} over TCP/IPv4 via getaddrinfo ===");
    let query = ResolverQuery::for_protocol_host(Tcp::v4(), host.as_str(), "https");
    println!("hints: {:?}", query.hints());
    for addr in GaiResolver::new().resolve(query).await? {
        println!("  {addr}");
    }

    println!("\n=== {host} over UDP via hickory-dns ===");
    let query = ResolverQuery::<Udp>::builder("domain")
        .host(host.as_str())
        .flags(ResolverFlags::CANONICAL_NAME)
        .build();
    println!("hints: {:?}", query.hints());
    for addr in HickoryResolver::new().resolve(query).await? {
        println!("  {addr}");
    }

    Ok(())
}
