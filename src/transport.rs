use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::parser::record::ProductRecord;
use crate::session::Session;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Processing request. Please wait.")]
    Busy,

    #[error("Site not supported: {0}")]
    UnsupportedSite(String),

    #[error("Could not retrieve product data. Please try again.")]
    MissingProductName,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to send data: {0}")]
    Status(StatusCode),

    #[error("Backend error: {message}")]
    Backend { message: String },
}

/// What the scoring service said about a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub sustainable: Option<bool>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BackendReply {
    success: bool,
    message: Option<String>,
    sustainable: Option<bool>,
}

impl BackendReply {
    fn into_verdict(self) -> Result<Verdict, TransportError> {
        if !self.success {
            return Err(TransportError::Backend {
                message: self.message.unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        Ok(Verdict {
            sustainable: self.sustainable,
            message: self.message,
        })
    }
}

/// True when `url`'s host is one of `domains` or a subdomain of one.
pub fn is_supported_site(url: &str, domains: &[String]) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    domains.iter().any(|d| {
        let d = d.to_ascii_lowercase();
        host == d || host.ends_with(&format!(".{}", d))
    })
}

pub struct ScoringClient {
    http: Client,
    endpoint: String,
    supported_domains: Vec<String>,
}

impl ScoringClient {
    pub fn new(settings: &Settings) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(ScoringClient {
            http,
            endpoint: settings.endpoint.clone(),
            supported_domains: settings.supported_domains.clone(),
        })
    }

    /// POST the record as JSON and decode the service's reply.
    pub async fn score(&self, record: &ProductRecord) -> Result<Verdict, TransportError> {
        info!("Sending record to {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Requested-With", "XMLHttpRequest")
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        response.json::<BackendReply>().await?.into_verdict()
    }

    /// Gatekeeping plus `score`, holding `session` in flight for the whole call.
    pub async fn submit(
        &self,
        session: &Session,
        page_url: &str,
        record: &ProductRecord,
    ) -> Result<Verdict, TransportError> {
        let _in_flight = session.begin()?;

        if !is_supported_site(page_url, &self.supported_domains) {
            return Err(TransportError::UnsupportedSite(page_url.to_string()));
        }
        if record.name.is_none() {
            return Err(TransportError::MissingProductName);
        }

        self.score(record).await.inspect_err(|e| {
            warn!("Scoring failed: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::assemble;
    use crate::parser::extract::Fragments;

    fn settings() -> Settings {
        Settings {
            // never contacted by these tests
            endpoint: "http://127.0.0.1:9/receive-data".to_string(),
            supported_domains: vec!["amazon.com".to_string()],
            timeout_secs: 1,
        }
    }

    /// One-shot HTTP server on a random local port. Answers the first request
    /// with `status` and `body` and hands the raw request back.
    async fn canned_backend(
        status: &'static str,
        body: &'static str,
    ) -> (Settings, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(reply.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        let settings = Settings {
            endpoint: format!("http://{}/receive-data", addr),
            supported_domains: vec!["amazon.com".to_string()],
            timeout_secs: 5,
        };
        (settings, handle)
    }

    fn named_record() -> ProductRecord {
        assemble(Fragments {
            title: Some("Linen Shirt".to_string()),
            ..Fragments::default()
        })
    }

    #[test]
    fn supported_site_matches_host_and_subdomains() {
        let domains = vec!["amazon.com".to_string()];
        assert!(is_supported_site("https://www.amazon.com/dp/B000", &domains));
        assert!(is_supported_site("https://amazon.com/", &domains));
        assert!(is_supported_site("https://SMILE.Amazon.com/x", &domains));
        assert!(!is_supported_site("https://notamazon.com/", &domains));
        assert!(!is_supported_site("https://www.amazon.co.uk/", &domains));
        assert!(!is_supported_site("not a url", &domains));
    }

    #[test]
    fn reply_decoding() {
        let ok: BackendReply =
            serde_json::from_str(r#"{"success": true, "message": "Data received"}"#).unwrap();
        assert_eq!(
            ok.into_verdict().unwrap(),
            Verdict { sustainable: None, message: Some("Data received".into()) }
        );

        let scored: BackendReply =
            serde_json::from_str(r#"{"success": true, "sustainable": true}"#).unwrap();
        assert_eq!(scored.into_verdict().unwrap().sustainable, Some(true));

        let failed: BackendReply =
            serde_json::from_str(r#"{"success": false, "message": "No data received."}"#).unwrap();
        match failed.into_verdict() {
            Err(TransportError::Backend { message }) => assert_eq!(message, "No data received."),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn unsupported_site_is_rejected_and_session_released() {
        let client = ScoringClient::new(&settings()).unwrap();
        let session = Session::new();
        let err = client
            .submit(&session, "https://example.com/item", &named_record())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::UnsupportedSite(_)));
        assert_eq!(session.state(), crate::session::State::Idle);
    }

    #[tokio::test]
    async fn unnamed_record_is_rejected() {
        let client = ScoringClient::new(&settings()).unwrap();
        let session = Session::new();
        let record = assemble(Fragments::default());
        let err = client
            .submit(&session, "https://www.amazon.com/dp/B000", &record)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::MissingProductName));
    }

    #[tokio::test]
    async fn busy_session_rejects_without_sending() {
        let client = ScoringClient::new(&settings()).unwrap();
        let session = Session::new();
        let _held = session.begin().unwrap();
        let err = client
            .submit(&session, "https://www.amazon.com/dp/B000", &named_record())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Busy));
    }

    #[tokio::test]
    async fn scored_reply_becomes_verdict() {
        let (settings, server) =
            canned_backend("200 OK", r#"{"success":true,"sustainable":true}"#).await;
        let client = ScoringClient::new(&settings).unwrap();
        let session = Session::new();
        let verdict = client
            .submit(&session, "https://www.amazon.com/dp/B000", &named_record())
            .await
            .unwrap();
        assert_eq!(verdict, Verdict { sustainable: Some(true), message: None });
        assert_eq!(session.state(), crate::session::State::Idle);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /receive-data "));
        assert!(request.to_ascii_lowercase().contains("x-requested-with: xmlhttprequest"));
        assert!(request.contains(r#""name":"Linen Shirt""#));
    }

    #[tokio::test]
    async fn server_error_status_is_reported() {
        let (settings, server) =
            canned_backend("500 Internal Server Error", r#"{"success":false}"#).await;
        let client = ScoringClient::new(&settings).unwrap();
        let session = Session::new();
        let err = client
            .submit(&session, "https://www.amazon.com/dp/B000", &named_record())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(session.state(), crate::session::State::Idle);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unsuccessful_reply_is_backend_error() {
        let (settings, server) =
            canned_backend("200 OK", r#"{"success":false,"message":"No data received."}"#).await;
        let client = ScoringClient::new(&settings).unwrap();
        let session = Session::new();
        let err = client
            .submit(&session, "https://www.amazon.com/dp/B000", &named_record())
            .await
            .unwrap_err();
        match err {
            TransportError::Backend { message } => assert_eq!(message, "No data received."),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(session.state(), crate::session::State::Idle);
        server.await.unwrap();
    }
}
