use crate::resolver::HostResolver;
use thiserror::Error;
use url::{Host, Url};

#[derive(Debug, Error)]
pub enum ValidationError {
    /// The input is not a URL at all.
    #[error("malformed url: {0}")]
    Malformed(String),

    /// The URL parsed but its host does not resolve (or it has none).
    #[error("host '{host}' does not resolve: {reason}")]
    Unresolvable { host: String, reason: String },
}

/// Check that `input` is a URL whose host resolves right now.
///
/// Returns the hostname on success. IP-literal hosts are accepted without a
/// lookup, the same way the system resolver would answer them. URLs with no
/// host at all (`mailto:`, `file:`) are rejected as unresolvable, although a
/// lookup of the empty name would succeed on Node-style resolvers.
pub async fn validate(input: &str, resolver: &dyn HostResolver) -> Result<String, ValidationError> {
    let parsed = Url::parse(input).map_err(|e| ValidationError::Malformed(e.to_string()))?;

    match parsed.host() {
        Some(Host::Domain(domain)) => {
            resolver
                .resolve(domain)
                .await
                .map_err(|e| ValidationError::Unresolvable {
                    host: domain.to_owned(),
                    reason: e.to_string(),
                })?;
            Ok(domain.to_owned())
        }
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        None => Err(ValidationError::Unresolvable {
            host: String::new(),
            reason: "url has no host".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{stub::StubResolver, SystemResolver};

    #[tokio::test]
    async fn plain_text_is_malformed() {
        let resolver = StubResolver::new([]);
        let err = validate("not a url", &resolver).await.unwrap_err();
        assert!(matches!(err, ValidationError::Malformed(_)));
    }

    #[tokio::test]
    async fn scheme_without_host_is_malformed() {
        let resolver = StubResolver::new([]);
        let err = validate("http://", &resolver).await.unwrap_err();
        assert!(matches!(err, ValidationError::Malformed(_)));
    }

    #[tokio::test]
    async fn unknown_host_is_unresolvable() {
        let err = validate("http://thisdomaindoesnotexist.invalid", &SystemResolver)
            .await
            .unwrap_err();
        match err {
            ValidationError::Unresolvable { host, .. } => {
                assert_eq!(host, "thisdomaindoesnotexist.invalid")
            }
            other => panic!("expected Unresolvable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn resolvable_host_is_returned() {
        let resolver = StubResolver::new(["www.example.com"]);
        let host = validate("https://www.example.com/path?q=1", &resolver)
            .await
            .unwrap();
        assert_eq!(host, "www.example.com");
    }

    #[tokio::test]
    async fn ip_literals_skip_the_lookup() {
        let resolver = StubResolver::new([]);
        assert_eq!(
            validate("http://127.0.0.1:8080/", &resolver).await.unwrap(),
            "127.0.0.1"
        );
        assert_eq!(validate("http://[::1]/", &resolver).await.unwrap(), "::1");
    }

    #[tokio::test]
    async fn hostless_url_is_unresolvable() {
        let resolver = StubResolver::new([]);
        let err = validate("mailto:someone@example.com", &resolver)
            .await
            .unwrap_err();
        assert!(matches!(err, ValidationError::Unresolvable { .. }));
    }
}
