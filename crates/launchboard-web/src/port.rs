//! Start-up port selection: explicit argument, else probe a default port
//! with a short fallback list.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{info, warn};

/// Default dashboard port.
pub(crate) const DEFAULT_PORT: u16 = 8050;

/// Alternates probed in order when the default is taken.
pub(crate) const FALLBACK_PORTS: [u16; 5] = [8051, 8052, 8053, 8054, 8055];

const PROBE_TIMEOUT: Duration = Duration::from_millis(250);

/// True when nothing is listening on `host:port`. A successful connect
/// means the port is taken.
pub(crate) fn port_is_free(host: &str, port: u16) -> bool {
    let Ok(mut addrs) = (host, port).to_socket_addrs() else {
        return false;
    };
    let Some(addr) = addrs.next() else {
        return false;
    };
    TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_err()
}

/// First free port among `candidates`, probing in order.
pub(crate) fn first_free(host: &str, candidates: impl IntoIterator<Item = u16>) -> Option<u16> {
    candidates.into_iter().find(|&port| port_is_free(host, port))
}

/// Resolve the listen port from the optional positional argument.
///
/// An explicit, parseable argument wins without probing. An unparsable
/// argument falls back to the default with a warning, also without probing.
/// With no argument, the default is probed and the fallback list scanned;
/// `None` means nothing in the range was free (the caller exits non-zero).
pub(crate) fn resolve_port(host: &str, arg: Option<&str>) -> Option<u16> {
    match arg {
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) => {
                info!(port, "using specified port");
                Some(port)
            }
            Err(_) => {
                warn!(
                    argument = raw,
                    fallback = DEFAULT_PORT,
                    "invalid port number, using default"
                );
                Some(DEFAULT_PORT)
            }
        },
        None => {
            if port_is_free(host, DEFAULT_PORT) {
                return Some(DEFAULT_PORT);
            }
            warn!(port = DEFAULT_PORT, "default port is in use, trying alternatives");
            let port = first_free(host, FALLBACK_PORTS)?;
            info!(port, "using fallback port");
            Some(port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    const HOST: &str = "127.0.0.1";

    /// Bind on an OS-assigned port, keeping the listener alive so the port
    /// stays occupied for the duration of the test.
    fn occupy() -> (TcpListener, u16) {
        let listener = TcpListener::bind((HOST, 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        (listener, port)
    }

    /// An OS-assigned port that was just released.
    fn released_port() -> u16 {
        let (listener, port) = occupy();
        drop(listener);
        port
    }

    #[test]
    fn occupied_port_is_not_free() {
        let (_listener, port) = occupy();
        assert!(!port_is_free(HOST, port));
    }

    #[test]
    fn released_port_is_free() {
        let port = released_port();
        assert!(port_is_free(HOST, port));
    }

    #[test]
    fn scan_skips_occupied_candidates() {
        let (_a, busy_a) = occupy();
        let (_b, busy_b) = occupy();
        let free = released_port();
        assert_eq!(first_free(HOST, [busy_a, busy_b, free]), Some(free));
    }

    #[test]
    fn scan_reports_none_when_everything_is_taken() {
        let (_a, busy_a) = occupy();
        let (_b, busy_b) = occupy();
        assert_eq!(first_free(HOST, [busy_a, busy_b]), None);
    }

    #[test]
    fn explicit_argument_wins_without_probing() {
        // Even an occupied port is accepted when asked for explicitly.
        let (_listener, port) = occupy();
        assert_eq!(resolve_port(HOST, Some(&port.to_string())), Some(port));
    }

    #[test]
    fn unparsable_argument_falls_back_to_default() {
        assert_eq!(resolve_port(HOST, Some("not-a-port")), Some(DEFAULT_PORT));
        assert_eq!(resolve_port(HOST, Some("123456")), Some(DEFAULT_PORT));
    }
}
