use crate::{db, error::AppError, error::StorageError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /api/shorturl/:short
///
/// Look the code up in the store and answer `302 Found` pointing at the
/// original URL. Unknown codes get a JSON error body with status 200.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(short): Path<String>,
) -> Result<Response, AppError> {
    let mapping = db::find_by_short_url(&state.db, &short)
        .await?
        .ok_or(AppError::NotFound)?;

    let location = location_header(&mapping.original_url)?;
    tracing::debug!(short_code = %short, "Redirecting to {}", mapping.original_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Build the `Location` value for a stored URL.
///
/// The stored text is used verbatim when it is already a legal URI (printable
/// ASCII, no spaces); otherwise its normalised form is sent, with a punycode
/// host and a percent-encoded path.
fn location_header(original_url: &str) -> Result<HeaderValue, StorageError> {
    if original_url.bytes().all(|b| b.is_ascii_graphic()) {
        if let Ok(value) = HeaderValue::from_str(original_url) {
            return Ok(value);
        }
    }

    url::Url::parse(original_url)
        .ok()
        .and_then(|u| HeaderValue::from_str(u.as_str()).ok())
        .ok_or_else(|| {
            StorageError::InvalidData(format!("stored url is not redirectable: {original_url}"))
        })
}
