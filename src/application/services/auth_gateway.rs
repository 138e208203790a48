use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::{AuthRequest, AuthResponse};

/// Upstream authentication service receiving `/api/auth/*` traffic.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn forward(&self, request: &AuthRequest) -> anyhow::Result<AuthResponse>;
}

/// Lifecycle hook around a proxied auth request.
///
/// `before` hooks run in registration order and may reject the request by
/// returning an error. `after` hooks observe the upstream response; their
/// failures are logged and never change what the client receives.
#[async_trait]
pub trait AuthHook: Send + Sync {
    fn name(&self) -> &'static str;

    fn matches(&self, _request: &AuthRequest) -> bool {
        true
    }

    async fn before(&self, _request: &AuthRequest) -> anyhow::Result<()> {
        Ok(())
    }

    async fn after(&self, _request: &AuthRequest, _response: &AuthResponse) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct AuthHooks {
    hooks: Vec<Arc<dyn AuthHook>>,
}

impl AuthHooks {
    pub fn new(hooks: Vec<Arc<dyn AuthHook>>) -> Self {
        Self { hooks }
    }

    pub fn matching<'a>(
        &'a self,
        request: &'a AuthRequest,
    ) -> impl Iterator<Item = &'a Arc<dyn AuthHook>> + 'a {
        self.hooks.iter().filter(move |hook| hook.matches(request))
    }
}

const AUDITED_ACTIONS: &[&str] = &["/sign-in", "/sign-up", "/sign-out"];

/// Records session lifecycle requests and their upstream outcome.
pub struct AuditHook;

#[async_trait]
impl AuthHook for AuditHook {
    fn name(&self) -> &'static str {
        "audit"
    }

    fn matches(&self, request: &AuthRequest) -> bool {
        let action = request.action();
        AUDITED_ACTIONS.iter().any(|prefix| action.starts_with(prefix))
    }

    async fn before(&self, request: &AuthRequest) -> anyhow::Result<()> {
        tracing::info!(method = %request.method, action = request.action(), "auth request received");
        Ok(())
    }

    async fn after(&self, request: &AuthRequest, response: &AuthResponse) -> anyhow::Result<()> {
        if response.is_success() {
            tracing::info!(action = request.action(), status = response.status, "auth request completed");
        } else {
            tracing::warn!(action = request.action(), status = response.status, "auth request rejected upstream");
        }
        Ok(())
    }
}
