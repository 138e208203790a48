/// A request captured at the `/api/auth` boundary, independent of the HTTP
/// framework that received it.
#[derive(Debug, Clone, Default)]
pub struct AuthRequest {
    pub method: String,
    /// Original path including the `/api/auth` prefix.
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl AuthRequest {
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) if !query.is_empty() => format!("{}?{}", self.path, query),
            _ => self.path.clone(),
        }
    }

    /// Path relative to the auth mount, e.g. `/sign-in/email`.
    pub fn action(&self) -> &str {
        self.path.strip_prefix("/api/auth").unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl AuthResponse {
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}
