use std::net::{SocketAddr, TcpListener};
use std::ops::RangeInclusive;
use tracing::warn;

/// Ranges searched, in order, when the configured port is taken.
pub const FALLBACK_PORTS: [RangeInclusive<u16>; 2] = [8000..=8999, 9000..=9999];

pub fn is_port_available(port: u16) -> bool {
    TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port))).is_ok()
}

pub fn find_available_port(range: RangeInclusive<u16>) -> Option<u16> {
    range.into_iter().find(|&port| is_port_available(port))
}

/// The preferred port if free, else the first free port of [`FALLBACK_PORTS`].
///
/// Returns the preferred port when nothing is free so that binding reports
/// the real error.
pub fn resolve_port(preferred: u16) -> u16 {
    if is_port_available(preferred) {
        return preferred;
    }

    warn!("Port {} is not available, searching for alternative...", preferred);

    for range in FALLBACK_PORTS.iter().cloned() {
        if let Some(port) = find_available_port(range) {
            warn!("Using alternative port: {}", port);
            return port;
        }
    }

    warn!("No available ports found, keeping port {}", preferred);
    preferred
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_port_is_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(!is_port_available(port));
    }

    #[test]
    fn test_find_available_port_in_range() {
        let port = find_available_port(60000..=60010).unwrap();
        assert!((60000..=60010).contains(&port));
    }

    #[test]
    fn test_resolve_port_skips_busy_port() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let busy = listener.local_addr().unwrap().port();

        let port = resolve_port(busy);
        assert_ne!(port, busy);
        assert!(is_port_available(port));
    }
}
