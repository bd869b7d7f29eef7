//! # Connectivity Probe
//!
//! Reachability check of a well-known endpoint as a proxy for "is cloud
//! reachable". A plain TCP dial with a short timeout; no data is sent.

use std::time::Duration;

use tokio::net::TcpStream;
use tracing::debug;

// =============================================================================
// Connectivity Probe
// =============================================================================

/// Dials a fixed endpoint to decide online/offline.
#[derive(Debug, Clone)]
pub struct ConnectivityProbe {
    addr: String,
    timeout: Duration,
}

impl ConnectivityProbe {
    /// Well-known public DNS endpoint used by the default probe.
    pub const DEFAULT_ENDPOINT: &'static str = "8.8.8.8:53";

    /// Default dial timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    /// Creates a probe for the given endpoint and timeout.
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        ConnectivityProbe {
            addr: addr.into(),
            timeout,
        }
    }

    /// True when the endpoint accepts a TCP connection within the timeout.
    pub async fn is_online(&self) -> bool {
        let online = matches!(
            tokio::time::timeout(self.timeout, TcpStream::connect(&self.addr)).await,
            Ok(Ok(_))
        );
        debug!(endpoint = %self.addr, online, "Connectivity probe");
        online
    }
}

impl Default for ConnectivityProbe {
    fn default() -> Self {
        ConnectivityProbe::new(Self::DEFAULT_ENDPOINT, Self::DEFAULT_TIMEOUT)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_reports_online_for_listening_endpoint() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let probe = ConnectivityProbe::new(addr.to_string(), Duration::from_secs(1));
        assert!(probe.is_online().await);
    }

    #[tokio::test]
    async fn test_probe_reports_offline_for_closed_port() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = ConnectivityProbe::new(addr.to_string(), Duration::from_millis(200));
        assert!(!probe.is_online().await);
    }
}
