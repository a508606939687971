//! Thin client for the stay backend.
//!
//! The backend is an opaque collaborator; this module only shapes requests,
//! maps response statuses onto [`ApiError`], and decodes booklet JSON. No
//! timeout or retry policy: every failure is returned immediately and the
//! calling flow decides how to surface it.

use common::model::book::BookData;
use common::requests::UpdateStayRequest;
use gloo_net::http::{Request, Response};
use thiserror::Error;
use web_sys::FormData;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 401: the access password did not match.
    #[error("accès refusé")]
    Unauthorized,
    /// 404: no booklet under that identifier.
    #[error("livret introuvable")]
    NotFound,
    /// Any other non-2xx response.
    #[error("le serveur a répondu {0}")]
    Server(u16),
    /// The request never completed, or the body was unreadable.
    #[error("échec de la requête: {0}")]
    Network(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

pub fn stay_url(id: &str) -> String {
    format!("/api/stay/{}", id)
}

async fn read_book(response: Response) -> Result<BookData, ApiError> {
    match response.status() {
        200..=299 => Ok(response.json::<BookData>().await?),
        401 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Server(status)),
    }
}

/// `GET /api/stay/{id}`, with the access password as a query parameter when
/// the caller has one. The password travels URL-encoded; the backend compares
/// it and answers 401 on mismatch.
pub async fn fetch_stay(id: &str, password: Option<&str>) -> Result<BookData, ApiError> {
    let url = stay_url(id);
    let builder = match password {
        Some(password) => Request::get(&url).query([("password", password)]),
        None => Request::get(&url),
    };
    read_book(builder.send().await?).await
}

/// `POST /api/stay` with a draft booklet. The response carries the assigned
/// identifier and, for protected booklets, the generated access password.
pub async fn create_stay(book: &BookData) -> Result<BookData, ApiError> {
    let response = Request::post("/api/stay").json(book)?.send().await?;
    read_book(response).await
}

/// `PUT /api/stay/{id}`. The recommendations list in the payload replaces the
/// stored set in full.
pub async fn update_stay(id: &str, request: &UpdateStayRequest) -> Result<BookData, ApiError> {
    let response = Request::put(&stay_url(id)).json(request)?.send().await?;
    read_book(response).await
}

/// `POST /api/stay/pdf`: multipart upload of the selected PDF under the
/// `file` field. The backend extracts a draft booklet from it.
pub async fn extract_pdf(file: &web_sys::File) -> Result<BookData, ApiError> {
    let form = FormData::new().map_err(|err| ApiError::Network(format!("{:?}", err)))?;
    form.append_with_blob("file", file)
        .map_err(|err| ApiError::Network(format!("{:?}", err)))?;

    let response = Request::post("/api/stay/pdf")
        .body(form)?
        .send()
        .await?;
    read_book(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stay_url_targets_the_identifier() {
        assert_eq!(stay_url("abc123"), "/api/stay/abc123");
    }
}
