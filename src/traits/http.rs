use anyhow::Result;
#[cfg(test)]
use anyhow::bail;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

/// Response returned by an [`HttpClient`] call. The status code is kept
/// separate from the body so callers decide what counts as a failure.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP client trait for testing. Paths are relative to the client's base
/// URL; the real implementation signs each request before sending it.
pub trait HttpClient: Send + Sync {
    fn get(&self, path: &str) -> Result<HttpResponse>;
}

/// Mock HTTP client serving canned responses, keyed by request path
#[cfg(test)]
pub struct MockHttpClient {
    responses: Mutex<HashMap<String, (u16, String)>>,
    requests: Mutex<Vec<String>>,
}

#[cfg(test)]
#[allow(dead_code)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Register a canned response for a path
    pub fn stub(&self, path: &str, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
    }

    /// Paths requested so far, in call order
    pub fn requested_paths(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl HttpClient for MockHttpClient {
    fn get(&self, path: &str) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(path.to_string());

        match self.responses.lock().unwrap().get(path) {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            None => bail!("No stubbed response for path: {}", path),
        }
    }
}
