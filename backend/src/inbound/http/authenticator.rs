//! Request authenticator.
//!
//! Resolves the `Authorization` header into an [`IdentityContext`] once per
//! request and stores it in the request extensions. The middleware never
//! rejects a request; operations decide for themselves whether they need an
//! authenticated caller.

use std::future::{Ready, ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use tracing::debug;

use crate::domain::IdentityContext;
use crate::domain::ports::TokenVerifier;

/// Resolve an `Authorization` header value into an identity.
///
/// The header is read as `<scheme> <token>`. The scheme is ignored and the
/// token is the second space-separated segment, so `"Bearer  tok"` carries
/// an empty token. Missing tokens and tokens that fail verification both
/// yield [`IdentityContext::Unauthenticated`].
///
/// # Examples
/// ```
/// use courses_backend::domain::IdentityContext;
/// use courses_backend::inbound::http::identity_from_header;
/// use courses_backend::outbound::security::JwtTokenCodec;
/// use std::sync::Arc;
/// use zeroize::Zeroizing;
///
/// let codec = JwtTokenCodec::new(
///     Zeroizing::new(b"example-secret".to_vec()),
///     Arc::new(mockable::DefaultClock),
/// );
/// let identity = identity_from_header(Some("Bearer"), &codec);
/// assert_eq!(identity, IdentityContext::Unauthenticated);
/// ```
pub fn identity_from_header(header: Option<&str>, verifier: &dyn TokenVerifier) -> IdentityContext {
    let Some(token) = header
        .and_then(|value| value.split(' ').nth(1))
        .filter(|token| !token.is_empty())
    else {
        return IdentityContext::Unauthenticated;
    };

    match verifier.verify(token) {
        Ok(claims) => IdentityContext::Authenticated(claims),
        Err(error) => {
            debug!(kind = error.kind(), "identity token rejected");
            IdentityContext::Unauthenticated
        }
    }
}

/// Middleware attaching an [`IdentityContext`] to every request.
///
/// # Examples
/// ```ignore
/// use actix_web::App;
/// use courses_backend::inbound::http::Authenticate;
///
/// let app = App::new().wrap(Authenticate::new(verifier));
/// ```
#[derive(Clone)]
pub struct Authenticate {
    verifier: Arc<dyn TokenVerifier>,
}

impl Authenticate {
    /// Create the middleware over the verifier used for every request.
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authenticate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateMiddleware {
            service,
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// Service wrapper produced by [`Authenticate`].
pub struct AuthenticateMiddleware<S> {
    service: S,
    verifier: Arc<dyn TokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Non-ASCII header values are treated like a missing token.
        let identity = {
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());
            identity_from_header(header, self.verifier.as_ref())
        };
        req.extensions_mut().insert(identity);
        self.service.call(req)
    }
}

impl FromRequest for IdentityContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Requests that bypassed [`Authenticate`] are unauthenticated.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(req
            .extensions()
            .get::<IdentityContext>()
            .cloned()
            .unwrap_or_default()))
    }
}
