//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The register API is a separate service. This router only renders the
//! `client` app on the server, so the browser bundle's `hydrate()` has markup
//! to attach to, and serves that bundle from the site package directory.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos options from `[workspace.metadata.leptos]` or the `LEPTOS_*`
/// variables `cargo leptos` exports.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_options() -> Result<LeptosOptions, String> {
    get_configuration(None)
        .map(|conf| conf.leptos_options)
        .map_err(|e| format!("leptos configuration: {e}"))
}

/// SSR pages for every client route, the WASM/CSS bundle and a health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());
    let pkg_path = format!("/{}", leptos_options.site_pkg_dir);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service(&pkg_path, ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
