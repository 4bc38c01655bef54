//! Hostname lookup for identifying which pod served a request.
//!
//! Inside a Kubernetes pod the OS hostname is the pod name, which is what makes
//! load balancing visible when the home page is refreshed. Lookup failures are
//! tolerated: handlers substitute an empty string and still answer.

use std::io;

/// Source of the hostname reported in responses.
pub trait HostnameSource: Send + Sync {
    fn lookup(&self) -> io::Result<String>;
}

/// Asks the operating system on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn lookup(&self) -> io::Result<String> {
        let name = ::hostname::get()?;
        name.into_string()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "hostname is not valid UTF-8"))
    }
}

/// A hostname fixed at construction, for tests and for pinning the reported name.
#[derive(Debug, Clone)]
pub struct StaticHostname(pub String);

impl HostnameSource for StaticHostname {
    fn lookup(&self) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

/// Look up the hostname, substituting an empty string on failure.
pub fn resolve(source: &dyn HostnameSource) -> String {
    match source.lookup() {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(error = %e, "Hostname lookup failed, reporting empty hostname");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingHostname;

    impl HostnameSource for FailingHostname {
        fn lookup(&self) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::Other, "no hostname"))
        }
    }

    #[test]
    fn test_resolve_static() {
        let source = StaticHostname("demo-pod-7f9c".to_string());
        assert_eq!(resolve(&source), "demo-pod-7f9c");
    }

    #[test]
    fn test_resolve_failure_is_empty() {
        assert_eq!(resolve(&FailingHostname), "");
    }

    #[test]
    fn test_system_hostname_matches_os() {
        let expected = ::hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_default();
        assert_eq!(resolve(&SystemHostname), expected);
    }
}
