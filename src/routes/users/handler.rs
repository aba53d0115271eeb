use axum::{
    extract::{Form, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{AppState, error::AppError};

use super::model::SubmitForm;

/// Creates a user and bounces the browser to the listing.
#[axum::debug_handler]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Result<impl IntoResponse, AppError> {
    let user = form.validate()?;
    state.writes.create_user(user).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, "/list")]))
}
