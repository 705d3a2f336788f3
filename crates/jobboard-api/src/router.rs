//! Route definitions for the job board HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Edit and verification routes sit behind the
//! signed-link middleware, instantiated once per resource kind.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::Span;

use jobboard_entity::{Job, User};

use crate::handlers;
use crate::middleware;
use crate::middleware::signed::{JobLookup, SignedLinkGuard, UserLookup, require_signed_link};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    Router::new()
        .merge(public_routes())
        .merge(job_routes(&state))
        .merge(user_routes(&state))
        .route("/health", get(handlers::health::health))
        .layer(axum_middleware::from_fn_with_state(
            request_timeout,
            middleware::timeout::request_timeout,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Request span carrying only method and path. Signed links put their
/// capability token in the query string, so the URI is never recorded.
fn request_span(request: &Request<Body>) -> Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Listing and submission
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::jobs::list_jobs))
        .route("/new", get(handlers::jobs::new_job_form))
        .route("/jobs", post(handlers::jobs::create_job))
}

/// Job view plus the signed edit and update endpoints
fn job_routes(state: &AppState) -> Router<AppState> {
    let guard: SignedLinkGuard<Job> = SignedLinkGuard::new(
        Arc::new(JobLookup(Arc::clone(&state.jobs))),
        state.links.signer().clone(),
    );
    let signed = axum_middleware::from_fn_with_state(guard, require_signed_link::<Job>);

    Router::new()
        .route(
            "/jobs/{id}",
            get(handlers::jobs::view_job)
                .merge(post(handlers::jobs::update_job).route_layer(signed.clone())),
        )
        .route(
            "/jobs/{id}/edit",
            get(handlers::jobs::edit_job).route_layer(signed),
        )
}

/// Signed email verification
fn user_routes(state: &AppState) -> Router<AppState> {
    let guard: SignedLinkGuard<User> = SignedLinkGuard::new(
        Arc::new(UserLookup(Arc::clone(&state.users))),
        state.links.signer().clone(),
    );

    Router::new().route(
        "/users/{id}/verify",
        get(handlers::users::verify_user).route_layer(axum_middleware::from_fn_with_state(
            guard,
            require_signed_link::<User>,
        )),
    )
}
