//! Signed-link authorization middleware.
//!
//! Guards routes of the form `/{kind}/{id}...?token=...`. The resource is
//! loaded by id, its token recomputed with the server secret and compared
//! to the supplied one. A resource that cannot be loaded is a server fault
//! (500), a mismatching or missing token is a bare 403, and a match
//! forwards the request with the loaded resource in its extensions.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use jobboard_auth::{LinkSigner, Signable};
use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_database::{JobStore, UserStore};
use jobboard_entity::{Job, User};

use crate::dto::request::TokenQuery;
use crate::error::ApiError;

/// Loads a resource of kind `R` by id.
#[async_trait]
pub trait ResourceLookup<R>: Send + Sync {
    /// `Ok(None)` when no such resource exists.
    async fn load(&self, id: Uuid) -> AppResult<Option<R>>;
}

/// Job lookup backed by a [`JobStore`].
#[derive(Debug, Clone)]
pub struct JobLookup(pub Arc<dyn JobStore>);

#[async_trait]
impl ResourceLookup<Job> for JobLookup {
    async fn load(&self, id: Uuid) -> AppResult<Option<Job>> {
        self.0.find_job(id).await
    }
}

/// User lookup backed by a [`UserStore`].
#[derive(Debug, Clone)]
pub struct UserLookup(pub Arc<dyn UserStore>);

#[async_trait]
impl ResourceLookup<User> for UserLookup {
    async fn load(&self, id: Uuid) -> AppResult<Option<User>> {
        self.0.find_user(id).await
    }
}

/// Middleware state: how to load `R` and the signer to check tokens with.
pub struct SignedLinkGuard<R> {
    lookup: Arc<dyn ResourceLookup<R>>,
    signer: LinkSigner,
    _kind: PhantomData<fn() -> R>,
}

impl<R> Clone for SignedLinkGuard<R> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
            signer: self.signer.clone(),
            _kind: PhantomData,
        }
    }
}

impl<R: Signable> SignedLinkGuard<R> {
    /// Creates a guard for one resource kind.
    pub fn new(lookup: Arc<dyn ResourceLookup<R>>, signer: LinkSigner) -> Self {
        Self {
            lookup,
            signer,
            _kind: PhantomData,
        }
    }

    /// Loads the resource and checks the supplied token against it.
    pub async fn authorize(&self, raw_id: &str, token: Option<&str>) -> AppResult<R> {
        let id = Uuid::parse_str(raw_id).map_err(|e| {
            AppError::with_source(
                ErrorKind::Internal,
                format!("Malformed {} id '{raw_id}'", R::KIND),
                e,
            )
        })?;

        let resource = self
            .lookup
            .load(id)
            .await
            .map_err(|e| {
                if e.kind.is_server_fault() {
                    e
                } else {
                    AppError::with_source(
                        ErrorKind::Internal,
                        format!("Failed to load {} {id}", R::KIND),
                        e,
                    )
                }
            })?
            .ok_or_else(|| AppError::internal(format!("Failed to load {} {id}", R::KIND)))?;

        match token {
            Some(token) if self.signer.verify(&resource, token) => Ok(resource),
            _ => Err(AppError::authorization(format!(
                "Signed link rejected for {} {id}",
                R::KIND
            ))),
        }
    }
}

/// Rejects the request unless its `token` grants access to the resource
/// named by the `{id}` path parameter.
///
/// Apply with `route_layer` so the path parameter is available. A query
/// string that does not parse, such as a repeated `token`, counts as no
/// token at all.
pub async fn require_signed_link<R>(
    State(guard): State<SignedLinkGuard<R>>,
    Path(id): Path<String>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    mut request: Request,
    next: Next,
) -> Response
where
    R: Signable + Clone + Send + Sync + 'static,
{
    let token = query.ok().and_then(|Query(query)| query.token);

    match guard.authorize(&id, token.as_deref()).await {
        Ok(resource) => {
            request.extensions_mut().insert(resource);
            next.run(request).await
        }
        Err(err) => {
            if err.kind == ErrorKind::Authorization {
                tracing::debug!(kind = R::KIND, id = %id, "Signed link mismatch");
            }
            ApiError(err).into_response()
        }
    }
}
