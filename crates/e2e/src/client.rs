//! Pet-store HTTP client
//!
//! Thin wrapper over `reqwest` that pins the base URL and JSON content type
//! and hands back the raw response so each scenario decides which status it
//! expects before touching the body. Calls are never retried.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use petcheck_common::{Pet, PetIdParam};

use crate::config::ApiConfig;
use crate::error::{E2eError, E2eResult};

const JSON: &str = "application/json";

/// A response with its body already read
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub method: Method,
    pub url: String,
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Fail unless the status code is exactly `expected`
    pub fn expect_status(&self, expected: u16) -> E2eResult<&Self> {
        if self.status.as_u16() == expected {
            Ok(self)
        } else {
            Err(E2eError::UnexpectedStatus {
                expected,
                actual: self.status.as_u16(),
                body: self.body.clone(),
            })
        }
    }

    /// Fail unless the response declares a JSON body
    pub fn expect_json(&self) -> E2eResult<&Self> {
        match self.content_type.as_deref() {
            Some(ct) if ct.starts_with(JSON) => Ok(self),
            other => Err(E2eError::UnexpectedContentType {
                expected: JSON.to_string(),
                actual: other.unwrap_or("<none>").to_string(),
            }),
        }
    }

    /// Deserialize the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> E2eResult<T> {
        serde_json::from_str(&self.body).map_err(|source| E2eError::Deserialize {
            target: std::any::type_name::<T>(),
            source,
        })
    }
}

/// Client bound to one pet-store base URL
#[derive(Debug, Clone)]
pub struct PetstoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl PetstoreClient {
    pub fn new(config: &ApiConfig) -> E2eResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/pet`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(&self, path: &str) -> E2eResult<ApiResponse> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> E2eResult<ApiResponse> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> E2eResult<ApiResponse> {
        self.send(Method::PUT, path, Some(body)).await
    }

    /// `POST /pet`
    pub async fn create_pet(&self, pet: &Pet) -> E2eResult<ApiResponse> {
        self.post("/pet", pet).await
    }

    /// `PUT /pet`
    pub async fn update_pet(&self, pet: &Pet) -> E2eResult<ApiResponse> {
        self.put("/pet", pet).await
    }

    /// `GET /pet/{id}`
    pub async fn get_pet(&self, id: &PetIdParam) -> E2eResult<ApiResponse> {
        self.get(&format!("/pet/{}", id)).await
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> E2eResult<ApiResponse> {
        let url = self.endpoint(path);
        let mut request = self.client.request(method.clone(), &url);

        if let Some(body) = body {
            let payload = serde_json::to_string(body)?;
            debug!("{} {} body: {}", method, url, payload);
            request = request.body(payload);
        } else {
            debug!("{} {}", method, url);
        }

        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        info!("{} {} -> {}", method, url, status);
        debug!("Response body: {}", body);

        Ok(ApiResponse {
            method,
            url,
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> ApiResponse {
        ApiResponse {
            method: Method::GET,
            url: "http://127.0.0.1/pet/1".to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ApiConfig::new("https://petstore.swagger.io/v2/");
        let client = PetstoreClient::new(&config).unwrap();
        assert_eq!(client.endpoint("/pet"), "https://petstore.swagger.io/v2/pet");
        assert_eq!(client.endpoint("pet/12"), "https://petstore.swagger.io/v2/pet/12");
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        assert!(PetstoreClient::new(&ApiConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_expect_status() {
        let ok = response(200, Some("application/json"), "{}");
        assert!(ok.expect_status(200).is_ok());

        match ok.expect_status(404) {
            Err(E2eError::UnexpectedStatus { expected, actual, .. }) => {
                assert_eq!(expected, 404);
                assert_eq!(actual, 200);
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_expect_json_content_type() {
        assert!(response(200, Some("application/json; charset=utf-8"), "{}").expect_json().is_ok());
        assert!(matches!(
            response(200, Some("text/html"), "").expect_json(),
            Err(E2eError::UnexpectedContentType { .. })
        ));
        assert!(response(200, None, "").expect_json().is_err());
    }

    #[test]
    fn test_json_reports_target_type() {
        let err = response(200, Some(JSON), "[]").json::<Pet>().unwrap_err();
        match err {
            E2eError::Deserialize { target, .. } => assert!(target.ends_with("Pet"), "{}", target),
            other => panic!("expected Deserialize, got {:?}", other),
        }
    }
}
