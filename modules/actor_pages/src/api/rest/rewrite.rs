//! Hostname rewrite adapter around [`TenantRouter`]
//!
//! Runs before routing: tenant and dashboard hosts get their URI path
//! rewritten, everything else is left untouched. Query strings survive.

use std::str::FromStr;

use axum::http::{header::HOST, uri::PathAndQuery, Request, Uri};
use tower::util::MapRequestLayer;

use crate::domain::TenantRouter;

/// Rewrite `req` according to its host. Never fails.
pub fn rewrite_request<B>(router: &TenantRouter, mut req: Request<B>) -> Request<B> {
    let host = req
        .headers()
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .or_else(|| req.uri().authority().map(|a| a.as_str().to_string()));
    let Some(host) = host else {
        return req;
    };

    let decision = router.route(&host, req.uri().path());
    let Some(path) = decision.rewrite_path() else {
        return req;
    };

    let target = match req.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = match PathAndQuery::from_str(&target) {
        Ok(pq) => Some(pq),
        Err(e) => {
            tracing::warn!(%host, %target, error = %e, "Rewrite target is not a valid path");
            return req;
        }
    };

    match Uri::from_parts(parts) {
        Ok(uri) => {
            tracing::debug!(%host, from = %req.uri(), to = %uri, "Rewrote request");
            *req.uri_mut() = uri;
        }
        Err(e) => tracing::warn!(%host, error = %e, "Could not rebuild rewritten URI"),
    }
    req
}

/// Layer applying [`rewrite_request`] to every request
pub fn rewrite_layer<B>(
    router: TenantRouter,
) -> MapRequestLayer<impl Fn(Request<B>) -> Request<B> + Clone> {
    MapRequestLayer::new(move |req| rewrite_request(&router, req))
}
