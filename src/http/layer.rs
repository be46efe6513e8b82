//! Tower middleware applying inbound resolution to requests.
//!
//! # Responsibilities
//! - Read the `Referer` header and resolve it
//! - Replace the request path, keeping the request's own query string
//! - Attach the `IframeContext` for outbound URL generation
//!
//! # Design Decisions
//! - Wrap the whole axum `Router` (not `Router::layer`) so the rewritten
//!   path drives routing
//! - The resolved path is percent-encoded; `/` stays a separator

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::header::REFERER;
use axum::http::uri::PathAndQuery;
use axum::http::{Request, Uri};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tower::{Layer, Service};

use crate::resolve::Iframed;

/// Bytes that cannot appear literally in a URI path. Non-ASCII is always encoded.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Layer producing [`IframedService`].
#[derive(Debug, Clone)]
pub struct IframedLayer {
    iframed: Arc<Iframed>,
}

impl IframedLayer {
    pub fn new(iframed: Arc<Iframed>) -> Self {
        Self { iframed }
    }
}

impl<S> Layer<S> for IframedLayer {
    type Service = IframedService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        IframedService {
            inner,
            iframed: self.iframed.clone(),
        }
    }
}

/// Rewrites each request from its referer before calling `inner`.
#[derive(Debug, Clone)]
pub struct IframedService<S> {
    inner: S,
    iframed: Arc<Iframed>,
}

impl<S, B> Service<Request<B>> for IframedService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        apply(&self.iframed, &mut request);
        self.inner.call(request)
    }
}

/// Resolve `request`'s referer and rewrite it in place.
pub fn apply<B>(iframed: &Iframed, request: &mut Request<B>) {
    let referer = request
        .headers()
        .get(REFERER)
        .and_then(|value| value.to_str().ok());

    let Some(resolution) = iframed.resolve_inbound(referer) else {
        return;
    };

    if resolution.aliased && !iframed.dispatch_aliased() {
        tracing::debug!(
            path = %request.uri().path(),
            "Aliased referer, keeping request path"
        );
    } else {
        match with_path(request.uri(), &resolution.internal_path) {
            Some(uri) => {
                tracing::debug!(
                    from = %request.uri().path(),
                    to = %resolution.internal_path,
                    "Rewrote request path"
                );
                *request.uri_mut() = uri;
            }
            None => {
                tracing::warn!(
                    internal_path = %resolution.internal_path,
                    "Resolved path does not form a valid URI, keeping request path"
                );
            }
        }
    }

    request.extensions_mut().insert(resolution.context);
}

fn with_path(uri: &Uri, path: &str) -> Option<Uri> {
    let path = utf8_percent_encode(path, PATH);
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}
