//! Axum extractor for the iframe context.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::resolve::IframeContext;

/// The context attached by [`IframedLayer`](crate::http::IframedLayer), if
/// the request's referer matched a mapping. Never rejects.
#[derive(Debug, Clone)]
pub struct Iframe(pub Option<IframeContext>);

impl Iframe {
    pub fn context(&self) -> Option<&IframeContext> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for Iframe
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<IframeContext>().cloned()))
    }
}
