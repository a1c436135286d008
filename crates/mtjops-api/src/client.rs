// Hand-crafted async HTTP client for the MTJ operations backend.
//
// Base path: /api/v1/
// Auth: Authorization: Bearer <token>

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types;

/// Largest pass batch the backend accepts in a single generate call.
pub const MAX_PASS_BATCH: u32 = 1000;

// ── Error response shape from the backend ────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the operations backend.
///
/// Uses bearer-token authentication and communicates via JSON REST
/// endpoints under `/api/v1/`.
pub struct OpsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl OpsClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a bearer token and transport config.
    ///
    /// Injects `Authorization: Bearer ...` as a default header on
    /// every request.
    pub fn from_token(
        base_url: &str,
        token: &secrecy::SecretString,
        transport: &crate::TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid token header value: {e}"),
            })?;
        auth_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build the base URL so its path always ends with `/api/v1/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;

        // Strip trailing slash for uniform handling
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api/v1") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/v1/"));
        }

        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"events"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        // base_url always ends with `/api/v1/`, so joining relative
        // paths works.
        self.base_url.join(path).map_err(Error::from)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn post_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url} params={params:?}");

        let resp = self.http.post(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PATCH {url}");

        let resp = self.http.patch(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn patch_no_body<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PATCH {url}");

        let resp = self.http.patch(url).send().await?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                // Truncate on a char boundary; byte 200 may fall inside
                // a multi-byte character.
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidToken;
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            let message = err.message.unwrap_or_else(|| status.to_string());
            if status == reqwest::StatusCode::FORBIDDEN {
                return Error::PermissionDenied { message };
            }
            Error::Api {
                status: status.as_u16(),
                message,
                code: err.code,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
                code: None,
            }
        }
    }

    // ── Pagination helper ────────────────────────────────────────────

    /// Collect all pages into a single `Vec<T>`. Pages start at 1.
    pub async fn paginate_all<T, F, Fut>(&self, page_size: i32, fetch: F) -> Result<Vec<T>, Error>
    where
        F: Fn(i64, i32) -> Fut,
        Fut: Future<Output = Result<types::Page<T>, Error>>,
    {
        let mut all = Vec::new();
        let mut page: i64 = 1;

        loop {
            let chunk = fetch(page, page_size).await?;
            let received = chunk.data.len();
            all.extend(chunk.data);

            let page_size_usize = usize::try_from(page_size).unwrap_or(0);
            if received < page_size_usize
                || i64::try_from(all.len()).unwrap_or(i64::MAX) >= chunk.total
            {
                break;
            }

            page += 1;
        }

        Ok(all)
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Events ───────────────────────────────────────────────────────

    pub async fn list_events(
        &self,
        page: i64,
        page_size: i32,
        status: Option<&str>,
    ) -> Result<types::Page<types::EventResponse>, Error> {
        let mut params = vec![
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(status) = status {
            params.push(("status", status.to_owned()));
        }
        self.get_with_params("events", &params).await
    }

    pub async fn get_event(&self, event_id: &str) -> Result<types::EventResponse, Error> {
        self.get(&format!("events/{event_id}")).await
    }

    pub async fn create_event(
        &self,
        body: &types::EventCreateUpdate,
    ) -> Result<types::EventResponse, Error> {
        self.post("events", body).await
    }

    pub async fn update_event(
        &self,
        event_id: &str,
        body: &types::EventCreateUpdate,
    ) -> Result<types::EventResponse, Error> {
        self.patch(&format!("events/{event_id}"), body).await
    }

    // ── Passes ───────────────────────────────────────────────────────

    /// Batch-create `count` unused passes for an event.
    ///
    /// The count range is checked here, before any request goes out:
    /// an out-of-range count returns [`Error::Validation`] and the
    /// backend is never contacted.
    pub async fn generate_passes(
        &self,
        event_id: &str,
        count: u32,
    ) -> Result<Vec<types::PassResponse>, Error> {
        if count == 0 || count > MAX_PASS_BATCH {
            return Err(Error::Validation {
                field: "count".into(),
                reason: format!("must be between 1 and {MAX_PASS_BATCH}, got {count}"),
            });
        }

        self.post_with_params(
            &format!("events/{event_id}/passes/generate"),
            &[("count", count.to_string())],
        )
        .await
    }

    pub async fn list_passes(
        &self,
        event_id: &str,
        page: i64,
        page_size: i32,
        status: Option<&str>,
    ) -> Result<types::Page<types::PassResponse>, Error> {
        let mut params = vec![
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(status) = status {
            params.push(("status", status.to_owned()));
        }
        self.get_with_params(&format!("events/{event_id}/passes"), &params)
            .await
    }

    pub async fn revoke_pass(
        &self,
        event_id: &str,
        pass_id: &str,
    ) -> Result<types::PassResponse, Error> {
        self.patch_no_body(&format!("events/{event_id}/passes/{pass_id}/revoke"))
            .await
    }

    /// Submit a pass code for check-in.
    ///
    /// An empty (or whitespace-only) code is rejected locally with
    /// [`Error::Validation`]; no request is issued. A rejection by the
    /// backend is NOT an error here — it comes back as a
    /// [`ScanResponse`](types::ScanResponse) with `ok: false` for the
    /// caller to classify.
    pub async fn scan_pass(
        &self,
        event_id: &str,
        pass_code: &str,
    ) -> Result<types::ScanResponse, Error> {
        let trimmed = pass_code.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: "pass_code".into(),
                reason: "must not be empty".into(),
            });
        }

        self.post(
            &format!("events/{event_id}/passes/scan"),
            &types::ScanRequest {
                pass_code: trimmed.to_owned(),
            },
        )
        .await
    }

    // ── Stats ────────────────────────────────────────────────────────

    pub async fn get_event_stats(
        &self,
        event_id: &str,
    ) -> Result<types::EventStatsResponse, Error> {
        self.get(&format!("events/{event_id}/stats")).await
    }

    // ── Donors ───────────────────────────────────────────────────────

    pub async fn list_donors(
        &self,
        page: i64,
        page_size: i32,
    ) -> Result<types::Page<types::DonorResponse>, Error> {
        self.get_with_params(
            "donors",
            &[
                ("page", page.to_string()),
                ("pageSize", page_size.to_string()),
            ],
        )
        .await
    }

    pub async fn get_donor(&self, donor_id: &str) -> Result<types::DonorResponse, Error> {
        self.get(&format!("donors/{donor_id}")).await
    }

    pub async fn create_donor(
        &self,
        body: &types::DonorCreateUpdate,
    ) -> Result<types::DonorResponse, Error> {
        self.post("donors", body).await
    }

    pub async fn update_donor(
        &self,
        donor_id: &str,
        body: &types::DonorCreateUpdate,
    ) -> Result<types::DonorResponse, Error> {
        self.patch(&format!("donors/{donor_id}"), body).await
    }

    // ── Donation boxes ───────────────────────────────────────────────

    pub async fn list_donation_boxes(
        &self,
        page: i64,
        page_size: i32,
    ) -> Result<types::Page<types::DonationBoxResponse>, Error> {
        self.get_with_params(
            "donation-boxes",
            &[
                ("page", page.to_string()),
                ("pageSize", page_size.to_string()),
            ],
        )
        .await
    }

    pub async fn get_donation_box(
        &self,
        box_id: &str,
    ) -> Result<types::DonationBoxResponse, Error> {
        self.get(&format!("donation-boxes/{box_id}")).await
    }

    pub async fn create_donation_box(
        &self,
        body: &types::DonationBoxCreate,
    ) -> Result<types::DonationBoxResponse, Error> {
        self.post("donation-boxes", body).await
    }

    // ── Geography (cascading lookups) ────────────────────────────────

    pub async fn list_regions(&self) -> Result<Vec<types::RegionResponse>, Error> {
        self.get("regions").await
    }

    pub async fn list_cities(&self, region_id: &str) -> Result<Vec<types::CityResponse>, Error> {
        self.get(&format!("regions/{region_id}/cities")).await
    }

    pub async fn list_routes(&self, city_id: &str) -> Result<Vec<types::RouteResponse>, Error> {
        self.get(&format!("cities/{city_id}/routes")).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_api_prefix() {
        let url = OpsClient::normalize_base_url("https://ops.example.org").unwrap();
        assert_eq!(url.as_str(), "https://ops.example.org/api/v1/");
    }

    #[test]
    fn base_url_with_existing_prefix_is_untouched() {
        let url = OpsClient::normalize_base_url("https://ops.example.org/api/v1").unwrap();
        assert_eq!(url.as_str(), "https://ops.example.org/api/v1/");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let url = OpsClient::normalize_base_url("https://ops.example.org/api/v1/").unwrap();
        assert_eq!(url.as_str(), "https://ops.example.org/api/v1/");
    }
}
