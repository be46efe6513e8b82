//! Shared utilities for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::REFERER;
use axum::http::{Request, Uri};
use axum::routing::get;
use axum::Router;
use tower::{Layer, ServiceExt};

use iframed::config::{IframedConfig, MappingConfig};
use iframed::http::{Iframe, IframedLayer, IframedService};
use iframed::{Iframed, NamedRoutes};

#[derive(Clone)]
struct AppState {
    iframed: Arc<Iframed>,
    routes: Arc<NamedRoutes>,
}

/// The single mapping used throughout the tests.
pub fn config() -> IframedConfig {
    IframedConfig {
        mappings: vec![MappingConfig::new("/appname/viewname", "/refererpath")],
        ..IframedConfig::default()
    }
}

/// An app with one mapped route, wrapped in the iframed layer.
///
/// The mapped route answers with three lines: the path it was dispatched on,
/// the outbound URL for `reverse("test", ["param"])`, and the outbound URL of
/// its own path. The fallback answers with the path only.
pub fn app(config: &IframedConfig) -> IframedService<Router> {
    let iframed = Arc::new(Iframed::from_config(config));
    let state = AppState {
        iframed: iframed.clone(),
        routes: Arc::new(NamedRoutes::new().route("test", "/appname/viewname/{}")),
    };

    let router = Router::new()
        .route("/appname/viewname/{*rest}", get(view))
        .fallback(fallback)
        .with_state(state);

    IframedLayer::new(iframed).layer(router)
}

async fn view(
    State(state): State<AppState>,
    Path(_rest): Path<String>,
    Iframe(context): Iframe,
    uri: Uri,
) -> String {
    let link = state
        .iframed
        .reverse(state.routes.as_ref(), "test", &["param"], context.as_ref(), false)
        .unwrap_or_else(|e| e.to_string());
    let own = state
        .iframed
        .rewrite_outbound(uri.path(), context.as_ref(), false);
    format!("{}\n{}\n{}", uri.path(), link, own)
}

async fn fallback(uri: Uri) -> String {
    uri.path().to_string()
}

/// GET `uri` with an optional `Referer`, returning the body lines.
pub async fn get_lines(app: IframedService<Router>, uri: &str, referer: Option<&str>) -> Vec<String> {
    let mut builder = Request::builder().uri(uri);
    if let Some(referer) = referer {
        builder = builder.header(REFERER, referer);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
