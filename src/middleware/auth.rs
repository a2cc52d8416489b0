use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use super::{forbidden, unauthorized};
use crate::services::token_service;

/// Identity gate. Verifies the `Authorization: Bearer <token>` credential
/// and parks the decoded claims in the request extensions for handlers to
/// pick up via `web::ReqData<Claims>`. No credential -> 401; a credential
/// that fails signature or expiry checks -> 403. The handler never runs on
/// either failure.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let header_value = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let Some(header_value) = header_value else {
            return Box::pin(async move { Err(unauthorized("Unauthorized access")) });
        };

        let Some(token) = header_value.strip_prefix("Bearer ") else {
            return Box::pin(async move { Err(forbidden("Forbidden access")) });
        };

        match token_service::verify_access_token(token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res)
                })
            }
            Err(e) => {
                log::warn!("❌ Rejected credential: {}", e);
                Box::pin(async move { Err(forbidden("Forbidden access")) })
            }
        }
    }
}
