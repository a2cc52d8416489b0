use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use super::forbidden;
use crate::database::MongoDB;
use crate::services::{token_service::Claims, user_service};

/// Role gate, layered after `AuthMiddleware`. Looks the caller up in the
/// users collection; anything but an admin role - including an email with
/// no user document at all - is a clean 403.
pub struct AdminMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let claims = req.extensions().get::<Claims>().cloned();
            let db = req.app_data::<web::Data<MongoDB>>().cloned();

            let Some(claims) = claims else {
                return Err(forbidden("Forbidden access"));
            };
            let Some(db) = db else {
                return Err(actix_web::error::ErrorInternalServerError(
                    "MongoDB handle missing from app data",
                ));
            };

            match user_service::is_admin(&db, &claims.email).await {
                Ok(true) => service.call(req).await,
                Ok(false) => {
                    log::warn!("⚠️ {} is not an admin", claims.email);
                    Err(forbidden("Forbidden access"))
                }
                Err(e) => {
                    log::error!("❌ Admin check failed for {}: {}", claims.email, e);
                    Err(actix_web::error::ErrorInternalServerError(e))
                }
            }
        })
    }
}
