use async_trait::async_trait;
use std::io;

/// Answers whether a hostname currently resolves.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, host: &str) -> io::Result<()>;
}

/// Resolver backed by the operating system (getaddrinfo via tokio).
///
/// Every call performs a live lookup; nothing is cached and the system
/// timeouts apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> io::Result<()> {
        let mut addrs = tokio::net::lookup_host((host, 0)).await?;
        match addrs.next() {
            Some(_) => Ok(()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses for {host}"),
            )),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reserved_invalid_tld_never_resolves() {
        let result = SystemResolver
            .resolve("thisdomaindoesnotexist.invalid")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn stub_resolves_only_known_hosts() {
        let resolver = stub::StubResolver::new(["www.example.com"]);
        assert!(resolver.resolve("www.example.com").await.is_ok());
        assert!(resolver.resolve("example.net").await.is_err());
    }
}
