//! The shared HTTP client every resource service goes through.
//!
//! Per request it:
//! - attaches `Authorization: Bearer <token>` when a token is stored (read
//!   fresh on every call),
//! - appends a `_t=<unix millis>` cache buster to GETs,
//! - on 401 wipes the session and hard-redirects to `/login`,
//! - on 429 sleeps for the server's `retryAfter` (default 5 s) and replays
//!   the identical request exactly once,
//! - decodes the envelope of everything else.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ClientConfig, MAX_RETRY_AFTER_SECS};
use crate::envelope::{Envelope, Payload};
use crate::error::ApiError;
use crate::navigation::{Navigator, LOGIN_PATH};
use crate::services::{BookingService, LeadService, Resource, TrainerService};
use crate::session::SessionStore;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Query parameter name of the GET cache buster.
pub const CACHE_BUSTER_PARAM: &str = "_t";

struct Inner {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

/// Authenticated API client. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                transport,
                session,
                navigator,
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.inner.navigator
    }

    // ---- verbs ----

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Payload<T>, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Payload<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<Payload<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<Payload<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PATCH, path, &[], Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Payload<T>, ApiError> {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Issue a request and decode its envelope.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> Result<Payload<T>, ApiError> {
        let request = self.build_request(method, path, query, body);
        let response = self.execute(&request).await?;
        decode(response)
    }

    // ---- services ----

    pub fn trainers(&self) -> TrainerService {
        TrainerService::new(self.clone())
    }

    pub fn bookings(&self) -> BookingService {
        BookingService::new(self.clone())
    }

    pub fn leads(&self) -> LeadService {
        LeadService::new(self.clone())
    }

    pub fn courses(&self) -> Resource<crate::models::course::Course> {
        Resource::new(self.clone(), "/courses", "Course")
    }

    pub fn videos(&self) -> Resource<crate::models::video::Video> {
        Resource::new(self.clone(), "/videos", "Video")
    }

    pub fn faqs(&self) -> Resource<crate::models::faq::Faq> {
        Resource::new(self.clone(), "/faqs", "FAQ")
    }

    pub fn testimonials(&self) -> Resource<crate::models::testimonial::Testimonial> {
        Resource::new(self.clone(), "/testimonials", "Testimonial")
    }

    pub fn refer_partners(&self) -> Resource<crate::models::refer_partner::ReferPartner> {
        Resource::new(self.clone(), "/refer-partners", "Refer partner")
    }

    pub fn blogs(&self) -> Resource<crate::models::blog::Blog> {
        Resource::new(self.clone(), "/blogs", "Blog")
    }

    pub fn study_abroad(&self) -> Resource<crate::models::study_abroad::StudyAbroad> {
        Resource::new(self.clone(), "/study-abroad", "Study abroad entry")
    }

    pub fn colleges(&self) -> Resource<crate::models::college::College> {
        Resource::new(self.clone(), "/colleges", "College")
    }

    pub fn users(&self) -> Resource<crate::models::user::User> {
        Resource::new(self.clone(), "/users", "User")
    }

    // ---- private helpers ----

    fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> HttpRequest {
        let mut request = HttpRequest::new(method, self.inner.config.url(path));
        request.query.extend_from_slice(query);
        if request.method == Method::GET {
            request.query.push((
                CACHE_BUSTER_PARAM.to_string(),
                Utc::now().timestamp_millis().to_string(),
            ));
        }
        if let Some(token) = self.inner.session.access_token() {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        request.body = body;
        request
    }

    /// Send with the 401 / 429 policy applied. Returns the final response
    /// for any other status.
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.inner.transport.send(request).await?;

        match response.status {
            401 => Err(self.end_session(request)),
            429 => {
                let delay = retry_after(&response, self.inner.config.default_retry_after);
                tracing::warn!(
                    method = %request.method,
                    url = %request.url,
                    delay_ms = delay.as_millis() as u64,
                    "Rate limited, retrying once",
                );
                tokio::time::sleep(delay).await;

                match self.inner.transport.send(request).await {
                    Ok(retry) if retry.status == 401 => Err(self.end_session(request)),
                    Ok(retry) if retry.is_success() => Ok(retry),
                    Ok(retry) => {
                        tracing::warn!(status = retry.status, url = %request.url, "Retry after rate limit failed");
                        Err(ApiError::ServerBusy)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, url = %request.url, "Retry after rate limit failed");
                        Err(ApiError::ServerBusy)
                    }
                }
            }
            _ => Ok(response),
        }
    }

    fn end_session(&self, request: &HttpRequest) -> ApiError {
        tracing::warn!(url = %request.url, "Unauthorized response, ending session");
        self.inner.session.clear();
        self.inner.navigator.hard_redirect(LOGIN_PATH);
        ApiError::SessionExpired
    }
}

/// Delay requested by a 429: JSON `retryAfter` seconds, else the
/// `Retry-After` header, else `default`. Values above
/// [`MAX_RETRY_AFTER_SECS`] also fall back to `default`.
fn retry_after(response: &HttpResponse, default: Duration) -> Duration {
    let from_body = response
        .json::<serde_json::Value>()
        .ok()
        .and_then(|v| v.get("retryAfter").cloned())
        .and_then(|v| match v {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        });
    let from_header = || {
        response
            .header("retry-after")
            .and_then(|v| v.trim().parse::<f64>().ok())
    };

    from_body
        .or_else(from_header)
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .filter(|delay| *delay <= Duration::from_secs(MAX_RETRY_AFTER_SECS))
        .unwrap_or(default)
}

/// Decode a final response: non-2xx becomes [`ApiError::Status`], 2xx goes
/// through the envelope.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<Payload<T>, ApiError> {
    if !response.is_success() {
        let message = response
            .json::<Envelope>()
            .ok()
            .and_then(|env| env.message_text().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {}", response.status));
        return Err(ApiError::Status {
            status: response.status,
            message,
        });
    }

    if response.body.trim().is_empty() {
        return Envelope {
            success: true,
            data: serde_json::Value::Null,
            message: None,
            error: None,
            code: None,
            pagination: None,
        }
        .into_result();
    }

    response.json::<Envelope>()?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_after_prefers_body() {
        let response = HttpResponse::new(429, r#"{"retryAfter": 2}"#).with_header("Retry-After", "9");
        assert_eq!(
            retry_after(&response, Duration::from_secs(5)),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn retry_after_falls_back_to_header_then_default() {
        let with_header = HttpResponse::new(429, "Too many").with_header("Retry-After", "7");
        assert_eq!(
            retry_after(&with_header, Duration::from_secs(5)),
            Duration::from_secs(7)
        );
        let bare = HttpResponse::new(429, "{}");
        assert_eq!(retry_after(&bare, Duration::from_secs(5)), Duration::from_secs(5));
    }

    #[test]
    fn negative_retry_after_uses_default() {
        let response = HttpResponse::new(429, r#"{"retryAfter": -3}"#);
        assert_eq!(
            retry_after(&response, Duration::from_secs(5)),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn oversized_retry_after_uses_default() {
        for body in [r#"{"retryAfter": 1e20}"#, r#"{"retryAfter": 61}"#] {
            let response = HttpResponse::new(429, body);
            assert_eq!(
                retry_after(&response, Duration::from_secs(5)),
                Duration::from_secs(5)
            );
        }
        let at_cap = HttpResponse::new(429, r#"{"retryAfter": 60}"#);
        assert_eq!(
            retry_after(&at_cap, Duration::from_secs(5)),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn decode_non_success_uses_envelope_message() {
        let response = HttpResponse::new(404, r#"{"success":false,"message":"FAQ not found"}"#);
        let err = decode::<serde_json::Value>(response).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "FAQ not found");
    }

    #[test]
    fn decode_non_json_error_body() {
        let response = HttpResponse::new(502, "<html>Bad gateway</html>");
        let err = decode::<serde_json::Value>(response).unwrap_err();
        assert_eq!(err.to_string(), "Request failed (502): HTTP 502");
    }

    #[test]
    fn decode_empty_success_body() {
        let payload = decode::<()>(HttpResponse::new(204, "")).unwrap();
        assert_eq!(payload.data, ());
    }
}
