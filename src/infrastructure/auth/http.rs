use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, Method,
    header::{HeaderMap, HeaderName, HeaderValue},
    redirect::Policy,
};

use crate::{
    application::services::auth_gateway::AuthGateway,
    domain::models::{AuthRequest, AuthResponse},
};

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "content-length",
    "host",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

pub fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Forwards auth traffic to an HTTP auth service. Redirects are passed back
/// to the client untouched so OAuth flows keep working.
pub struct HttpAuthGateway {
    http: Client,
    base_url: String,
}

impl HttpAuthGateway {
    pub fn new(base_url: &str) -> anyhow::Result<Arc<dyn AuthGateway>> {
        let http = Client::builder()
            .user_agent("portal/auth-proxy")
            .redirect(Policy::none())
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Arc::new(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }) as Arc<dyn AuthGateway>)
    }

    fn build_url(&self, request: &AuthRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn forward(&self, request: &AuthRequest) -> anyhow::Result<AuthResponse> {
        let method = Method::from_bytes(request.method.as_bytes())?;

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            if is_hop_by_hop(name) {
                continue;
            }
            headers.append(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let response = self
            .http
            .request(method, self.build_url(request))
            .headers(headers)
            .body(request.body.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter(|(name, _)| !is_hop_by_hop(name.as_str()))
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(AuthResponse {
            status,
            headers,
            body,
        })
    }
}
