use crate::{
    db,
    encoder::generate_short_url,
    error::AppError,
    models::{Greeting, ShortenForm, UrlMapping},
    validate::{validate, ValidationError},
    AppState,
};
use axum::{
    extract::{rejection::FormRejection, Form, State},
    Json,
};
use std::sync::Arc;

/// GET /api/hello
pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        greeting: "hello API",
    })
}

/// POST /api/shorturl
///
/// 1. Parse the `url` form field and check its host resolves.
/// 2. Derive the short code from the URL and the configured salt.
/// 3. Upsert the mapping keyed by the original URL and echo it back.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<UrlMapping>, AppError> {
    let input = match form {
        Ok(Form(ShortenForm { url: Some(url) })) => url,
        Ok(_) => return Err(ValidationError::Malformed("missing url field".into()).into()),
        Err(rejection) => return Err(ValidationError::Malformed(rejection.body_text()).into()),
    };

    if let Err(e) = validate(&input, state.resolver.as_ref()).await {
        tracing::debug!("Rejected '{}': {}", input, e);
        return Err(e.into());
    }

    let short_url = generate_short_url(&input, &state.config.salt);
    let record = db::upsert_mapping(&state.db, &input, &short_url).await?;

    tracing::info!(short_code = %record.short_url, "Shortened {}", record.original_url);
    Ok(Json(record))
}
