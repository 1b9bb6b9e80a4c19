use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Attach a [`Visitor`](super::Visitor) to every request.
///
/// Unlike an API guard this never short-circuits: invalid credentials just
/// leave the visitor as a guest.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let visitor = state.sessions.visitor(request.headers());
    request.extensions_mut().insert(visitor);
    next.run(request).await
}
