/*
 * Copyright (c) 2025 Yiff Guru Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1::album::{Album, CreateAlbumProps};
use crate::v1::errors::YiffGuruError;
use crate::v1::image::Image;
use crate::v1::input::{self, Classified, ImageInput, ResolvedImage};
use crate::v1::properties::Rating;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Default origin for API requests, including the api prefix
pub const DEFAULT_ORIGIN: &str = "https://yiff.guru/api";

/// Version prefix applied to every endpoint path
pub const API_VERSION: u8 = 1;

/// Identifies this library to the service on every request
pub const USER_AGENT: &str = concat!(
    "yiffguru/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/TheYiffGuru/yiffguru_rs)"
);

/// Client for making requests against the Yiff Guru API.
///
/// Holds the API key and origin fixed at construction plus the underlying
/// HTTPS client. Cloning is cheap and clones may be used concurrently;
/// nothing here is mutated after construction.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    https_client: reqwest::Client,
}

impl Client {
    /// Creates a client against the default API origin.
    ///
    /// Fails with [`YiffGuruError::ApiKeyRequired`] if the key is empty.
    pub fn new(api_key: &str) -> Result<Self, YiffGuruError> {
        Self::with_base_url(api_key, DEFAULT_ORIGIN)
    }

    /// Creates a client against a different origin, including the api
    /// prefix.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, YiffGuruError> {
        if api_key.is_empty() {
            return Err(YiffGuruError::ApiKeyRequired());
        }
        Ok(Self {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            https_client: reqwest::Client::new(),
        })
    }

    /// Origin used for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a new album owned by the authenticated user.
    ///
    /// Server-side rejections (bad tags, duplicate vanity, ...) come back
    /// as [`ApiResult::Failure`]; only transport and protocol problems are
    /// an `Err`.
    pub async fn create_album(
        &self,
        props: CreateAlbumProps,
    ) -> Result<ApiResult<Album>, YiffGuruError> {
        if props.title.is_empty() {
            return Err(YiffGuruError::AlbumTitleRequired());
        }
        let req_url = format!("{}/v{}/albums", self.base_url, API_VERSION);
        let body = serde_json::to_vec(&props)?;
        debug!("creating album \"{}\" at {}", props.title, req_url);
        self.api_request(self.https_client.post(&req_url).body(body))
            .await
    }

    /// Uploads an image into the given album.
    ///
    /// The image may be raw bytes, a parsed URL, or a string holding a URL,
    /// a local file path, or a base64 payload. URLs are fetched and file
    /// paths are read before the upload request is made; a missing file
    /// fails the call without any network activity.
    pub async fn add_image_to_album(
        &self,
        img: impl Into<ImageInput>,
        album_id: &str,
        rating: Option<Rating>,
    ) -> Result<ApiResult<Image>, YiffGuruError> {
        let resolved = self.resolve_image(img.into()).await?;
        let req_url = format!(
            "{}/v{}/albums/{}/images",
            self.base_url, API_VERSION, album_id
        );
        let body = serde_json::to_vec(&UploadImageBody {
            file: STANDARD.encode(&resolved.bytes),
            name: resolved.file_name,
            rating,
        })?;
        debug!(
            "uploading image ({} bytes) to {}",
            resolved.bytes.len(),
            req_url
        );
        self.api_request(self.https_client.put(&req_url).body(body))
            .await
    }

    // Normalizes an image input to bytes plus an optional filename.
    async fn resolve_image(&self, input: ImageInput) -> Result<ResolvedImage, YiffGuruError> {
        match input {
            ImageInput::Bytes(bytes) => Ok(ResolvedImage {
                bytes,
                file_name: None,
            }),
            ImageInput::Url(url) => self.fetch_image(url).await,
            ImageInput::Text(text) => match input::classify(&text)? {
                Classified::Url(url) => self.fetch_image(url).await,
                Classified::Path { path, file_name } => input::resolve_path(&path, &file_name),
                Classified::Base64(payload) => input::resolve_base64(&payload),
            },
        }
    }

    // Fetches image bytes from a URL. Only the User-Agent header is sent;
    // the API key never leaves for third-party hosts.
    async fn fetch_image(&self, url: url::Url) -> Result<ResolvedImage, YiffGuruError> {
        let file_name = input::file_name_from_url(&url);
        debug!("fetching image from {}", url);
        let bytes = self
            .https_client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(ResolvedImage { bytes, file_name })
    }

    // Dispatches an API request and parses the success/failure envelope.
    // The HTTP status is not consulted; the envelope is the discriminant.
    async fn api_request<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<ApiResult<T>, YiffGuruError> {
        let resp = req
            .header("Authorization", self.api_key.as_str())
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        let url = resp.url().to_string();
        let body = resp.text().await?;
        match serde_json::from_str::<RawApiResult<T>>(&body) {
            Ok(raw) => raw.into_api_result(&url, &body),
            Err(err) => {
                warn!("malformed response from {}: {}", url, err);
                Err(YiffGuruError::ApiResponseMalformed { url, body })
            }
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"xxx")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Success/failure envelope returned by every API call.
///
/// Exactly one variant is produced per call. Application-level rejections
/// are the `Failure` side and carry the server's message; they are not
/// `Err` values.
#[derive(Debug, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Failure(String),
}

impl<T> ApiResult<T> {
    /// True when the service accepted the request.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    /// Payload of a success envelope.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Failure(_) => None,
        }
    }

    /// Server-supplied message of a failure envelope.
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Failure(error) => Some(error),
        }
    }

    /// Converts the envelope into a std `Result`, with the server's error
    /// message on the failure side.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResult::Success(data) => Ok(data),
            ApiResult::Failure(error) => Err(error),
        }
    }
}

// Base expected response body to be returned from the API
#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawApiResult<T> {
    success: bool,

    #[serde(default)]
    data: Option<T>,

    #[serde(default)]
    error: Option<String>,
}

impl<T> RawApiResult<T> {
    // The `success` tag decides which side the body carries; a body that
    // claims one side and delivers the other is a protocol violation.
    fn into_api_result(self, url: &str, body: &str) -> Result<ApiResult<T>, YiffGuruError> {
        match self {
            RawApiResult {
                success: true,
                data: Some(data),
                ..
            } => Ok(ApiResult::Success(data)),
            RawApiResult {
                success: false,
                error: Some(error),
                ..
            } => Ok(ApiResult::Failure(error)),
            _ => Err(YiffGuruError::ApiResponseMalformed {
                url: url.to_string(),
                body: body.to_string(),
            }),
        }
    }
}

// Wire body for an image upload
#[derive(Serialize, Debug)]
struct UploadImageBody {
    file: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<Rating>,
}
