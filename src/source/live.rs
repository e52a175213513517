// Network-backed profile source
use super::{validate_identifier, ProfileSource};
use crate::error::LookupError;
use crate::models::{ProfileRecord, Rank, Region};
use log::{debug, warn};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Account payload as returned by the upstream provider
#[derive(Debug, Deserialize)]
struct LiveAccount {
    nickname: String,
    level: u32,
    likes: u32,
    rank: Rank,
    rank_points: u32,
    #[serde(default)]
    bio: String,
    avatar: String,
    #[serde(default)]
    booyah_pass: bool,
    #[serde(default)]
    guild: String,
}

pub struct LiveProfileSource {
    endpoint: Url,
    agent: ureq::Agent,
}

impl LiveProfileSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, String> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| format!("Invalid live endpoint {}: {}", endpoint, e))?;

        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Ok(Self { endpoint, agent })
    }

    fn account_url(&self, identifier: &str, region: Region) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("region", region.code())
            .append_pair("uid", identifier);
        url
    }
}

impl ProfileSource for LiveProfileSource {
    fn fetch(&self, identifier: &str, region: Region) -> Result<ProfileRecord, LookupError> {
        validate_identifier(identifier)?;

        let url = self.account_url(identifier, region);
        debug!("Fetching account from {}", url);

        let response = match self.agent.request_url("GET", &url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                warn!("Profile provider returned status {} for UID {}", status, identifier);
                return Err(LookupError::unavailable(format!("provider returned status {}", status)));
            }
            Err(ureq::Error::Transport(e)) => {
                warn!("Profile provider unreachable: {}", e);
                return Err(LookupError::unavailable(e.to_string()));
            }
        };

        let account: LiveAccount = response
            .into_json()
            .map_err(|e| LookupError::unavailable(format!("malformed provider response: {}", e)))?;

        Ok(ProfileRecord {
            nickname: account.nickname,
            identifier: identifier.to_string(),
            region,
            level: account.level,
            likes: account.likes,
            rank: account.rank,
            rank_points: account.rank_points,
            bio: account.bio,
            avatar: account.avatar,
            has_premium_pass: account.booyah_pass,
            guild: account.guild,
            is_real_data: true,
        })
    }

    fn name(&self) -> &'static str {
        "live"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{ErrorKind, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one canned HTTP response and hands back the request line
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/api/v1/account", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            request.lines().next().unwrap_or_default().to_string()
        });

        (endpoint, handle)
    }

    #[test]
    fn test_live_maps_success_body() {
        let body = r#"{"nickname":"RealOne","uid":"123456789","region":"BD","level":61,"likes":4321,"rank":"Heroic","rank_points":4100,"bio":"<b>hi</b>","avatar":"https://example.com/a.png","booyah_pass":false,"guild":"G"}"#;
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK", body);

        let source = LiveProfileSource::new(&endpoint, Duration::from_secs(3)).unwrap();
        let profile = source.fetch("123456789", Region::Bd).unwrap();

        let request_line = server.join().unwrap();
        assert!(request_line.contains("region=BD"));
        assert!(request_line.contains("uid=123456789"));

        assert_eq!(profile.nickname, "RealOne");
        assert_eq!(profile.identifier, "123456789");
        assert_eq!(profile.level, 61);
        assert_eq!(profile.rank, Rank::Heroic);
        assert_eq!(profile.bio, "<b>hi</b>");
        assert!(!profile.has_premium_pass);
        assert!(profile.is_real_data);
    }

    #[test]
    fn test_live_non_success_status_is_unavailable() {
        let (endpoint, server) = serve_once("HTTP/1.1 503 Service Unavailable", "{}");

        let source = LiveProfileSource::new(&endpoint, Duration::from_secs(3)).unwrap();
        let result = source.fetch("123456789", Region::Bd);
        server.join().unwrap();

        assert!(matches!(result, Err(LookupError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_live_malformed_body_is_unavailable() {
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK", r#"{"nickname":"x"}"#);

        let source = LiveProfileSource::new(&endpoint, Duration::from_secs(3)).unwrap();
        let result = source.fetch("123456789", Region::Bd);
        server.join().unwrap();

        assert!(matches!(result, Err(LookupError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_live_timeout_is_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/api/v1/account", listener.local_addr().unwrap());

        // Accepts and reads the request, then never answers
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            thread::sleep(Duration::from_secs(3));
        });

        let source = LiveProfileSource::new(&endpoint, Duration::from_secs(1)).unwrap();
        let started = std::time::Instant::now();
        let result = source.fetch("123456789", Region::Bd);

        assert!(matches!(result, Err(LookupError::SourceUnavailable { .. })));
        assert!(started.elapsed() < Duration::from_secs(3));
        server.join().unwrap();
    }

    #[test]
    fn test_live_unreachable_is_unavailable() {
        // Bind then drop so the port is very likely closed
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let endpoint = format!("http://127.0.0.1:{}/api/v1/account", port);

        let source = LiveProfileSource::new(&endpoint, Duration::from_secs(1)).unwrap();
        assert!(matches!(
            source.fetch("123456789", Region::Bd),
            Err(LookupError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_live_short_identifier_never_connects() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let endpoint = format!("http://{}/api/v1/account", listener.local_addr().unwrap());

        let source = LiveProfileSource::new(&endpoint, Duration::from_secs(1)).unwrap();
        assert!(matches!(
            source.fetch("123", Region::Bd),
            Err(LookupError::InvalidIdentifier { .. })
        ));

        let accepted = listener.accept();
        assert!(matches!(accepted, Err(ref e) if e.kind() == ErrorKind::WouldBlock));
    }
}
