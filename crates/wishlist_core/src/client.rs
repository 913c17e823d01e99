use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::COOKIE;
use serde_json::Value;

use crate::error::{WishlistError, WishlistErrorCode};

// Steam serves some store endpoints differently to non-browser agents.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";

/// Blocking HTTP client shared by every pipeline stage. The optional
/// `steamLoginSecure` cookie is only attached to wishlist requests; the
/// price and curated-list endpoints are public.
#[derive(Debug)]
pub struct StoreClient {
    http: Client,
    session_cookie: Option<String>,
}

impl StoreClient {
    pub fn new(session_cookie: Option<String>) -> Result<Self, WishlistError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                WishlistError::new(
                    WishlistErrorCode::Http,
                    format!("failed to build HTTP client: {e}"),
                )
            })?;
        Ok(Self {
            http,
            session_cookie,
        })
    }

    pub fn has_session_cookie(&self) -> bool {
        self.session_cookie.is_some()
    }

    pub fn get_json(&self, url: &str) -> Result<Value, WishlistError> {
        self.request_json(self.http.get(url), url)
    }

    pub fn get_json_with_session(&self, url: &str) -> Result<Value, WishlistError> {
        let mut request = self.http.get(url);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, format!("steamLoginSecure={cookie}"));
        }
        self.request_json(request, url)
    }

    pub fn get_text(&self, url: &str) -> Result<String, WishlistError> {
        debug!("GET {url}");
        let response = self.http.get(url).send().map_err(send_error)?;
        let response = response.error_for_status().map_err(status_error)?;
        response.text().map_err(|e| {
            WishlistError::new(
                WishlistErrorCode::Http,
                format!("failed to read response body: {e}"),
            )
        })
    }

    fn request_json(&self, request: RequestBuilder, url: &str) -> Result<Value, WishlistError> {
        debug!("GET {url}");
        let response = request.send().map_err(send_error)?;
        let response = response.error_for_status().map_err(status_error)?;
        response.json().map_err(|e| {
            WishlistError::new(
                WishlistErrorCode::Parse,
                format!("response is not valid JSON: {e}"),
            )
        })
    }
}

fn send_error(e: reqwest::Error) -> WishlistError {
    WishlistError::new(WishlistErrorCode::Http, format!("request failed: {e}"))
}

fn status_error(e: reqwest::Error) -> WishlistError {
    WishlistError::new(
        WishlistErrorCode::Http,
        format!("server returned an error: {e}"),
    )
}
