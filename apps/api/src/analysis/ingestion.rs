//! URL ingestion: SSRF-guarded fetch plus visible-text extraction.
//!
//! `AppState` holds an `Arc<dyn PostingFetcher>`; tests swap in a stub.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use reqwest::{redirect, Client, StatusCode};
use scraper::Html;
use thiserror::Error;
use tracing::{debug, info};
use url::{Host, Url};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const MAX_REDIRECTS: usize = 5;
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

#[derive(Debug, Error)]
pub enum FetchError {
    /// Rejected before any network traffic. Surfaced to callers as a validation error.
    #[error("URL is not allowed or is potentially unsafe: {0}")]
    UnsafeUrl(String),

    #[error("could not resolve host '{host}': {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream responded with HTTP {0}")]
    Status(StatusCode),

    #[error("response body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("document contains no visible text")]
    EmptyDocument,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Turns a posting URL into plain visible text.
#[async_trait]
pub trait PostingFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HttpPostingFetcher (reqwest + scraper)
// ────────────────────────────────────────────────────────────────────────────

pub struct HttpPostingFetcher {
    client: Client,
    allowed_hosts: Arc<Vec<String>>,
    max_bytes: usize,
}

impl HttpPostingFetcher {
    pub fn new(
        allowed_hosts: Vec<String>,
        timeout: Duration,
        max_bytes: usize,
    ) -> anyhow::Result<Self> {
        let allowed_hosts = Arc::new(allowed_hosts);
        let redirect_hosts = Arc::clone(&allowed_hosts);

        // Literal IPs, schemes and the allow-list are checked per hop here; hostnames
        // are checked at connect time by PublicOnlyResolver.
        let policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                return attempt.error(format!("more than {MAX_REDIRECTS} redirects"));
            }
            match validate_url(attempt.url().as_str(), &redirect_hosts) {
                Ok(_) => attempt.follow(),
                Err(e) => attempt.error(e.to_string()),
            }
        });

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(policy)
            .dns_resolver(Arc::new(PublicOnlyResolver))
            // a proxy would resolve names itself, past the resolver
            .no_proxy()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            allowed_hosts,
            max_bytes,
        })
    }
}

#[async_trait]
impl PostingFetcher for HttpPostingFetcher {
    async fn fetch(&self, raw_url: &str) -> Result<String, FetchError> {
        let url = validate_url(raw_url, &self.allowed_hosts)?;
        ensure_resolves_public(&url).await?;
        self.download(url).await
    }
}

impl HttpPostingFetcher {
    async fn download(&self, url: Url) -> Result<String, FetchError> {
        info!(url = %url, "Fetching job posting");
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        if response
            .content_length()
            .is_some_and(|len| len > self.max_bytes as u64)
        {
            return Err(FetchError::TooLarge {
                limit: self.max_bytes,
            });
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        let text = visible_text(&String::from_utf8_lossy(&body));
        debug!(bytes = body.len(), chars = text.len(), "Extracted visible text");

        if text.is_empty() {
            Err(FetchError::EmptyDocument)
        } else {
            Ok(text)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// URL safety
// ────────────────────────────────────────────────────────────────────────────

/// Scheme, host, literal-IP and allow-list checks. No network access.
pub fn validate_url(raw: &str, allowed_hosts: &[String]) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::UnsafeUrl(format!("invalid URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::UnsafeUrl(format!(
            "scheme '{}' is not allowed",
            url.scheme()
        )));
    }

    let host = url
        .host()
        .ok_or_else(|| FetchError::UnsafeUrl("URL has no host".to_string()))?;

    match host {
        Host::Ipv4(ip) if !is_public_ip(IpAddr::V4(ip)) => {
            return Err(FetchError::UnsafeUrl(format!("address {ip} is not public")));
        }
        Host::Ipv6(ip) if !is_public_ip(IpAddr::V6(ip)) => {
            return Err(FetchError::UnsafeUrl(format!("address {ip} is not public")));
        }
        Host::Domain(domain) if is_local_name(domain) => {
            return Err(FetchError::UnsafeUrl(format!("host '{domain}' is local")));
        }
        _ => {}
    }

    if !allowed_hosts.is_empty() {
        let host = url.host_str().unwrap_or_default().to_lowercase();
        let allowed = allowed_hosts
            .iter()
            .any(|a| host == *a || host.ends_with(&format!(".{a}")));
        if !allowed {
            return Err(FetchError::UnsafeUrl(format!(
                "host '{host}' is not in the allow-list"
            )));
        }
    }

    Ok(url)
}

/// Up-front check so a non-public host is reported as an unsafe URL rather than
/// a failed connection.
async fn ensure_resolves_public(url: &Url) -> Result<(), FetchError> {
    let Some(Host::Domain(domain)) = url.host() else {
        return Ok(());
    };
    let port = url.port_or_known_default().unwrap_or(80);
    resolve_public(domain, port).await.map(|_| ())
}

/// Resolves `host`; fails when any of its addresses is not public.
async fn resolve_public(host: &str, port: u16) -> Result<Vec<SocketAddr>, FetchError> {
    let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, port))
        .await
        .map_err(|source| FetchError::Resolve {
            host: host.to_string(),
            source,
        })?
        .collect();

    if let Some(addr) = addrs.iter().find(|a| !is_public_ip(a.ip())) {
        return Err(FetchError::UnsafeUrl(format!(
            "host '{host}' resolves to non-public address {}",
            addr.ip()
        )));
    }
    Ok(addrs)
}

/// DNS resolver for the HTTP client. Every connection, redirect hops included,
/// uses the addresses vetted here, so a rebinding host cannot swap in a private
/// address between check and connect.
struct PublicOnlyResolver;

impl Resolve for PublicOnlyResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let host = name.as_str().to_string();
        Box::pin(async move {
            let addrs = resolve_public(&host, 0).await?;
            debug!(host = %host, count = addrs.len(), "Resolved fetch host");
            let addrs: Addrs = Box::new(addrs.into_iter());
            Ok::<_, BoxError>(addrs)
        })
    }
}

fn is_local_name(domain: &str) -> bool {
    let domain = domain.trim_end_matches('.').to_lowercase();
    domain == "localhost"
        || domain.ends_with(".localhost")
        || domain.ends_with(".local")
        || domain.ends_with(".internal")
}

pub fn is_public_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_public_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => is_public_v4(v4),
            None => is_public_v6(v6),
        },
    }
}

fn is_public_v4(ip: Ipv4Addr) -> bool {
    let [a, b, ..] = ip.octets();
    let cgnat = a == 100 && (64..128).contains(&b);
    let this_network = a == 0;
    !(ip.is_private()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
        || ip.is_multicast()
        || ip.is_documentation()
        || cgnat
        || this_network)
}

fn is_public_v6(ip: Ipv6Addr) -> bool {
    let first = ip.segments()[0];
    let unique_local = (first & 0xfe00) == 0xfc00;
    let link_local = (first & 0xffc0) == 0xfe80;
    !(ip.is_loopback() || ip.is_unspecified() || ip.is_multicast() || unique_local || link_local)
}

// ────────────────────────────────────────────────────────────────────────────
// Visible text
// ────────────────────────────────────────────────────────────────────────────

/// Text nodes of the document, skipping anything inside script/style/noscript/template.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_TAGS.contains(&el.name()))
        });
        let trimmed = text.trim();
        if !hidden && !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}
