//! Workshop session catalog handler.
use crate::model::{WorkshopSession, catalog};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/sessions",
    tag = "sessions",
    responses(
        (status = 200, description = "The seven workshop sessions", body = [WorkshopSession])
    )
)]
/// List the fixed workshop sessions with their titles.
pub(crate) async fn list_sessions() -> Json<Vec<WorkshopSession>> {
    Json(catalog())
}
