use std::sync::Arc;

use thiserror::Error;

use crate::{
    application::services::auth_gateway::{AuthGateway, AuthHooks},
    domain::models::{AuthRequest, AuthResponse},
};

/// Client-facing failure of the auth pass-through. The cause is logged and
/// deliberately not carried.
#[derive(Debug, Error)]
#[error("Authentication request failed")]
pub struct AuthProxyError;

pub struct ProxyAuthUseCase {
    gateway: Arc<dyn AuthGateway>,
    hooks: AuthHooks,
}

impl ProxyAuthUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>, hooks: AuthHooks) -> Self {
        Self { gateway, hooks }
    }

    pub async fn execute(&self, request: AuthRequest) -> Result<AuthResponse, AuthProxyError> {
        for hook in self.hooks.matching(&request) {
            if let Err(err) = hook.before(&request).await {
                tracing::error!(
                    hook = hook.name(),
                    path = %request.path,
                    error = %err,
                    "auth hook rejected request"
                );
                return Err(AuthProxyError);
            }
        }

        let response = self.gateway.forward(&request).await.map_err(|err| {
            tracing::error!(
                method = %request.method,
                path = %request.path,
                error = ?err,
                "auth upstream request failed"
            );
            AuthProxyError
        })?;

        for hook in self.hooks.matching(&request) {
            if let Err(err) = hook.after(&request, &response).await {
                tracing::warn!(hook = hook.name(), path = %request.path, error = %err, "auth after-hook failed");
            }
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::services::auth_gateway::AuthHook;

    struct StubGateway {
        fail: bool,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AuthGateway for StubGateway {
        async fn forward(&self, request: &AuthRequest) -> anyhow::Result<AuthResponse> {
            self.seen.lock().unwrap().push(request.path_and_query());
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(AuthResponse {
                status: 200,
                headers: vec![],
                body: b"{}".to_vec(),
            })
        }
    }

    struct RecordingHook {
        label: &'static str,
        reject: bool,
        fail_after: bool,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl AuthHook for RecordingHook {
        fn name(&self) -> &'static str {
            self.label
        }

        async fn before(&self, _request: &AuthRequest) -> anyhow::Result<()> {
            self.log.lock().unwrap().push(format!("{}:before", self.label));
            if self.reject {
                anyhow::bail!("rejected");
            }
            Ok(())
        }

        async fn after(&self, _request: &AuthRequest, _response: &AuthResponse) -> anyhow::Result<()> {
            self.log.lock().unwrap().push(format!("{}:after", self.label));
            if self.fail_after {
                anyhow::bail!("after failed");
            }
            Ok(())
        }
    }

    fn hook(label: &'static str, log: &Arc<Mutex<Vec<String>>>) -> RecordingHook {
        RecordingHook {
            label,
            reject: false,
            fail_after: false,
            log: log.clone(),
        }
    }

    fn gateway(fail: bool) -> Arc<StubGateway> {
        Arc::new(StubGateway {
            fail,
            seen: Mutex::new(vec![]),
        })
    }

    fn sign_in() -> AuthRequest {
        AuthRequest {
            method: "POST".to_string(),
            path: "/api/auth/sign-in/email".to_string(),
            query: Some("callbackURL=%2F".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn hooks_run_in_order_around_forwarding() {
        let log = Arc::new(Mutex::new(vec![]));
        let mut second = hook("second", &log);
        second.fail_after = true;
        let hooks = AuthHooks::new(vec![Arc::new(hook("first", &log)), Arc::new(second)]);
        let gateway = gateway(false);

        let response = ProxyAuthUseCase::new(gateway.clone(), hooks)
            .execute(sign_in())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            *log.lock().unwrap(),
            ["first:before", "second:before", "first:after", "second:after"]
        );
        assert_eq!(
            *gateway.seen.lock().unwrap(),
            ["/api/auth/sign-in/email?callbackURL=%2F"]
        );
    }

    #[tokio::test]
    async fn rejecting_hook_stops_forwarding() {
        let log = Arc::new(Mutex::new(vec![]));
        let mut guard = hook("guard", &log);
        guard.reject = true;
        let gateway = gateway(false);

        let result = ProxyAuthUseCase::new(gateway.clone(), AuthHooks::new(vec![Arc::new(guard)]))
            .execute(sign_in())
            .await;

        assert!(result.is_err());
        assert!(gateway.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_is_masked() {
        let err = ProxyAuthUseCase::new(gateway(true), AuthHooks::default())
            .execute(sign_in())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Authentication request failed");
    }
}
