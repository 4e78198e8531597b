//! EdgeGrid credentials and request signing.
//!
//! Credentials are read from an `.edgerc` INI file and every request is
//! signed with the EG1-HMAC-SHA256 scheme. The client is constructed once
//! at startup and passed by reference into the fetcher; there is no
//! process-wide session state.

use anyhow::{Context as _, Result, bail};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

use crate::traits::{FileSystem, HttpClient, HttpResponse};

type HmacSha256 = Hmac<Sha256>;

/// Credentials for one `.edgerc` section
#[derive(Debug, Clone)]
pub struct EdgeGridCredentials {
    pub host: String,
    pub client_token: String,
    pub client_secret: String,
    pub access_token: String,
}

impl EdgeGridCredentials {
    /// Read one section of an `.edgerc` credentials file
    pub fn from_edgerc(fs: &dyn FileSystem, path: &Path, section: &str) -> Result<Self> {
        let contents = fs
            .read_to_string(path)
            .with_context(|| format!("Failed to read credentials file: {:?}", path))?;

        let values = parse_ini_section(&contents, section)
            .with_context(|| format!("Failed to read section [{}] of {:?}", section, path))?;

        let get = |key: &str| -> Result<String> {
            values
                .get(key)
                .cloned()
                .with_context(|| format!("Missing \"{}\" in section [{}] of {:?}", key, section, path))
        };

        Ok(Self {
            host: get("host")?.trim_end_matches('/').to_string(),
            client_token: get("client_token")?,
            client_secret: get("client_secret")?,
            access_token: get("access_token")?,
        })
    }

    /// Build the Authorization header for a request, using the current time
    /// and a fresh nonce
    pub fn authorization_header(&self, method: &str, url: &Url) -> String {
        let timestamp = Utc::now().format("%Y%m%dT%H:%M:%S+0000").to_string();
        let nonce = Uuid::new_v4().to_string();
        self.authorization_header_at(method, url, &timestamp, &nonce)
    }

    /// Build the Authorization header for a fixed timestamp and nonce.
    /// Split out so signing is deterministic under test.
    pub fn authorization_header_at(
        &self,
        method: &str,
        url: &Url,
        timestamp: &str,
        nonce: &str,
    ) -> String {
        let auth_base = format!(
            "EG1-HMAC-SHA256 client_token={};access_token={};timestamp={};nonce={};",
            self.client_token, self.access_token, timestamp, nonce
        );

        let path_and_query = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };

        // Tab-joined data to sign: method, scheme, host, path+query,
        // canonicalized headers (none are signed), content hash (empty for
        // GET), then the header itself without the signature field.
        let data_to_sign = [
            &method.to_uppercase(),
            url.scheme(),
            url.host_str().unwrap_or_default(),
            path_and_query.as_str(),
            "",
            "",
            auth_base.as_str(),
        ]
        .join("\t");

        let signing_key = hmac_base64(self.client_secret.as_bytes(), timestamp);
        let signature = hmac_base64(signing_key.as_bytes(), &data_to_sign);

        format!("{}signature={}", auth_base, signature)
    }
}

fn hmac_base64(key: &[u8], data: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Parse one `[section]` of an INI-style credentials file into a key map
fn parse_ini_section(contents: &str, section: &str) -> Result<HashMap<String, String>> {
    let mut current: Option<&str> = None;
    let mut values = HashMap::new();
    let mut found = false;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            current = Some(name.trim());
            if current == Some(section) {
                found = true;
            }
            continue;
        }

        if current != Some(section) {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    if !found {
        bail!("Section [{}] not found", section);
    }

    Ok(values)
}

/// Authenticated HTTP client bound to one account's EdgeGrid host
pub struct EdgeGridClient {
    credentials: EdgeGridCredentials,
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl EdgeGridClient {
    pub fn new(credentials: EdgeGridCredentials, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(&format!("https://{}", credentials.host))
            .with_context(|| format!("Invalid EdgeGrid host: {}", credentials.host))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            credentials,
            base_url,
            client,
        })
    }
}

impl HttpClient for EdgeGridClient {
    fn get(&self, path: &str) -> Result<HttpResponse> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("Invalid request path: {}", path))?;

        let authorization = self.credentials.authorization_header("GET", &url);

        let response = self
            .client
            .get(url.clone())
            .header("Authorization", authorization)
            .header("User-Agent", "AkamaiCLI")
            .header("Accept", "application/json")
            .send()
            .with_context(|| format!("Failed to fetch URL: {}", url))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .with_context(|| format!("Failed to read response body from: {}", url))?;

        Ok(HttpResponse { status, body })
    }
}
