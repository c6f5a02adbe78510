//! Rate limiting middleware for API endpoints
//!
//! Counts each request against a fixed-window limiter keyed by client
//! address and answers over-limit requests with 429 before they reach a
//! handler. Every response carries the `X-RateLimit-*` headers of the
//! innermost limiter that saw it, so the stricter auth limit nested inside
//! the general one is what clients observe on `/auth`.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderMap, HeaderName, HeaderValue},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use gt_core::{
    errors::DomainError,
    services::rate_limit::{RateLimitDecision, RateLimiterTrait},
};
use gt_shared::{error_codes, ErrorResponse};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use crate::handlers::error::{handle_domain_error, ErrorDetail};

pub const X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
pub const X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
pub const X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

const UNKNOWN_CLIENT: &str = "unknown";

/// Rate limiter middleware factory
#[derive(Clone)]
pub struct RateLimit {
    limiter: Option<Arc<dyn RateLimiterTrait>>,
    message: Option<&'static str>,
}

impl RateLimit {
    pub fn new(limiter: Arc<dyn RateLimiterTrait>) -> Self {
        Self {
            limiter: Some(limiter),
            message: None,
        }
    }

    /// Passes every request through untouched
    pub fn disabled() -> Self {
        Self {
            limiter: None,
            message: None,
        }
    }

    /// Replaces the default 429 message for this limiter
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    /// Wraps `limiter` only when `enabled`
    pub fn when(enabled: bool, limiter: Arc<dyn RateLimiterTrait>) -> Self {
        if enabled {
            Self::new(limiter)
        } else {
            Self::disabled()
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limiter: self.limiter.clone(),
            message: self.message,
        }))
    }
}

/// Rate limiter middleware service
pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limiter: Option<Arc<dyn RateLimiterTrait>>,
    message: Option<&'static str>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut std::task::Context<'_>) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let limiter = self.limiter.clone();
        let message = self.message;

        Box::pin(async move {
            let limiter = match limiter {
                Some(limiter) => limiter,
                None => return service.call(req).await.map(ServiceResponse::map_into_left_body),
            };

            let key = client_key(req.headers());
            let decision = limiter.check(&key).await;

            if !decision.allowed {
                let retry_after_secs = decision.retry_after_secs(limiter.now());
                log::warn!(
                    "Rate limit exceeded for {} on {} (retry in {}s)",
                    key,
                    req.path(),
                    retry_after_secs
                );
                let mut response = match message {
                    Some(message) => rejection(retry_after_secs, message),
                    None => handle_domain_error(
                        &DomainError::RateLimited { retry_after_secs },
                        ErrorDetail::default(),
                    ),
                };
                apply_headers(response.headers_mut(), &decision);
                return Ok(req.into_response(response).map_into_right_body());
            }

            let mut res = service.call(req).await?;
            apply_headers(res.headers_mut(), &decision);
            Ok(res.map_into_left_body())
        })
    }
}

/// 429 carrying a limiter-specific message
fn rejection(retry_after_secs: u64, message: &str) -> HttpResponse {
    HttpResponse::TooManyRequests()
        .insert_header((header::RETRY_AFTER, retry_after_secs.to_string()))
        .json(ErrorResponse::new(error_codes::RATE_LIMIT_EXCEEDED, message))
}

/// Client identity for counting: first `X-Forwarded-For` hop, then
/// `X-Real-IP`, then a shared "unknown" bucket
pub fn client_key(headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
    };

    forwarded
        .or_else(real_ip)
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}

/// Sets the `X-RateLimit-*` headers unless an inner limiter already did
fn apply_headers(headers: &mut HeaderMap, decision: &RateLimitDecision) {
    if headers.contains_key(&X_RATELIMIT_LIMIT) {
        return;
    }

    let values = [
        (X_RATELIMIT_LIMIT, decision.limit.to_string()),
        (X_RATELIMIT_REMAINING, decision.remaining.to_string()),
        (X_RATELIMIT_RESET, decision.reset_at.to_rfc3339()),
    ];
    for (name, value) in values {
        if let Ok(value) = HeaderValue::from_str(&value) {
            headers.insert(name, value);
        }
    }
}
