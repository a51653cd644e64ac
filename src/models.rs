use serde::{Deserialize, Serialize};

/// A row of the `urls` table: one original URL and its short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_url: String,
}

/// Form body of `POST /api/shorturl`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: Option<String>,
}

/// Body of `GET /api/hello`.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub greeting: &'static str,
}
