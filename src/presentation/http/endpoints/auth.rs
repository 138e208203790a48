use std::sync::Arc;

use poem::{Body, Request, Response, Result as PoemResult, handler, http::StatusCode, web::Data};

use crate::{
    application::usecases::proxy_auth::ProxyAuthUseCase,
    domain::models::AuthRequest,
    presentation::http::errors::HttpError,
};

/// Pass-through for everything under `/api/auth`. Lives outside the OpenAPI
/// service since request and response shapes belong to the auth service.
#[handler]
pub async fn proxy_auth(
    req: &Request,
    body: Body,
    Data(usecase): Data<&Arc<ProxyAuthUseCase>>,
) -> PoemResult<Response> {
    let request = AuthRequest {
        method: req.method().as_str().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        headers: req
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect(),
        body: body.into_vec().await?,
    };

    let response = usecase.execute(request).await.map_err(HttpError::from)?;

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = Response::builder().status(status);
    for (name, value) in response.headers {
        builder = builder.header(name, value);
    }

    Ok(builder.body(response.body))
}
