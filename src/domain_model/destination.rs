use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DestinationError {
    #[error("destination is not a valid URL: {0}")]
    Malformed(String),
    #[error("destination scheme not allowed: {0}")]
    Scheme(String),
    #[error("destination host not allowed: {0}")]
    Host(String),
}

/// Constrains which stored destinations may be handed to a client.
///
/// Only absolute `http`/`https` URLs pass. With a non-empty allow-list the
/// host must equal an entry or be a subdomain of one.
#[derive(Debug, Clone, Default)]
pub struct DestinationPolicy {
    allowed_hosts: Vec<String>,
}

impl DestinationPolicy {
    pub fn new<I, S>(allowed_hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_hosts = allowed_hosts
            .into_iter()
            .map(|h| h.as_ref().trim().trim_end_matches('.').to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        Self { allowed_hosts }
    }

    pub fn allow_any() -> Self {
        Self::default()
    }

    pub fn check(&self, destination: &str) -> Result<Url, DestinationError> {
        let url = Url::parse(destination.trim())
            .map_err(|e| DestinationError::Malformed(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(DestinationError::Scheme(other.to_owned())),
        }

        let host = url
            .host_str()
            .ok_or_else(|| DestinationError::Malformed("missing host".into()))?
            .to_ascii_lowercase();

        let allowed = self.allowed_hosts.is_empty()
            || self.allowed_hosts.iter().any(|a| host_matches(&host, a));
        if allowed {
            Ok(url)
        } else {
            Err(DestinationError::Host(host))
        }
    }
}

fn host_matches(host: &str, allowed: &str) -> bool {
    host == allowed
        || host
            .strip_suffix(allowed)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_policy_accepts_any_web_url() {
        let policy = DestinationPolicy::allow_any();
        assert!(policy.check("https://dest.example/alice").is_ok());
        assert!(policy.check("http://10.0.0.1:8080/x").is_ok());
    }

    #[test]
    fn non_web_schemes_are_rejected() {
        let policy = DestinationPolicy::allow_any();
        assert_eq!(
            policy.check("javascript:alert(1)"),
            Err(DestinationError::Scheme("javascript".into()))
        );
        assert!(matches!(
            policy.check("ftp://files.example/a"),
            Err(DestinationError::Scheme(_))
        ));
    }

    #[test]
    fn relative_or_garbage_destinations_are_malformed() {
        let policy = DestinationPolicy::allow_any();
        assert!(matches!(
            policy.check("/just/a/path"),
            Err(DestinationError::Malformed(_))
        ));
        assert!(matches!(policy.check(""), Err(DestinationError::Malformed(_))));
    }

    #[test]
    fn allow_list_matches_hosts_and_subdomains() {
        let policy = DestinationPolicy::new(["dest.example", " Partner.Example. "]);
        assert!(policy.check("https://dest.example/alice").is_ok());
        assert!(policy.check("https://eu.dest.example/alice").is_ok());
        assert!(policy.check("https://PARTNER.example/").is_ok());
        assert_eq!(
            policy.check("https://evildest.example/"),
            Err(DestinationError::Host("evildest.example".into()))
        );
        assert!(policy.check("https://dest.example.evil.test/").is_err());
    }
}
