//! Asynchronous client for the Restage API.

use crate::models::{
    ApiResponse, DesignImage, GenerateDesignsForRoomRequest, GenerateDesignsRequest,
    GenerateInspirationalDesignsRequest, LandscapingRequest, RemodelRequest, ResponseInfo,
    SketchRenderRequest,
};
use crate::operation::{self, Operation};
use crate::payload::Payload;
use base64::engine::general_purpose;
use base64::Engine as _;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use restage_core::config::{ApiConfig, DEFAULT_BASE_URL};
use restage_core::error::{Error, Result};
use restage_core::http::HttpConfig;
use restage_core::image::ImageSource;
use restage_core::types::{DesignStyle, RoomType, SkyType};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("restage-rust/", env!("CARGO_PKG_VERSION"));

/// Form field name carrying the uploaded image on multipart operations.
pub const INPUT_IMAGE_FIELD: &str = "input_image";

/// Synthetic filename attached to the uploaded image part.
pub const INPUT_IMAGE_FILENAME: &str = "input_image.jpg";

const INPUT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Scale factor used by [`upscale_image`] when callers have no preference.
///
/// [`upscale_image`]: RestageClient::upscale_image
pub const DEFAULT_UPSCALE_FACTOR: u8 = 2;

/// Builder for [`RestageClient`].
#[derive(Debug, Clone)]
pub struct RestageClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout_override_secs: Option<u64>,
    http_config: HttpConfig,
}

impl RestageClientBuilder {
    /// Start a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_override_secs: None,
            http_config: HttpConfig::new(),
        }
    }

    /// Set the API key explicitly instead of reading `RESTAGE_API_KEY`.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different API deployment.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the per-operation default timeouts with a single value,
    /// in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_override_secs = Some(seconds);
        self
    }

    /// Tune connection pooling and compression.
    #[must_use]
    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Build the client.
    ///
    /// Falls back to the `RESTAGE_API_KEY` environment variable when no key
    /// was given explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if no key is available,
    /// [`Error::ConfigError`] if the configuration is invalid, and
    /// [`Error::HttpError`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<RestageClient> {
        let config = match self.api_key {
            Some(key) => ApiConfig::new(key),
            None => ApiConfig::from_env(),
        }?
        .with_base_url(self.base_url);

        let config = match self.timeout_override_secs {
            Some(seconds) => config.with_timeout(seconds),
            None => config,
        };

        RestageClient::with_http_config(config, self.http_config)
    }
}

impl Default for RestageClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Asynchronous client for the Restage virtual staging API.
///
/// The client is cheap to clone and safe to share across tasks: all state is
/// read-only after construction and clones share one connection pool. Each
/// operation issues exactly one POST (plus at most one GET when resolving a
/// URL image source); nothing is retried.
#[derive(Debug, Clone)]
pub struct RestageClient {
    http: Client,
    base_url: Url,
    api_key: SecretString,
    timeout_override: Option<Duration>,
}

impl RestageClient {
    /// Create a client for the hosted API with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().with_api_key(api_key).build()
    }

    /// Create a client from the `RESTAGE_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a client with custom settings.
    #[must_use]
    pub fn builder() -> RestageClientBuilder {
        RestageClientBuilder::new()
    }

    /// Create a client from an existing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid.
    pub fn from_config(config: ApiConfig) -> Result<Self> {
        Self::with_http_config(config, HttpConfig::new())
    }

    fn with_http_config(config: ApiConfig, http_config: HttpConfig) -> Result<Self> {
        config.ensure_valid()?;

        // Url::join drops the last path segment unless the base ends with a
        // slash, so one is always appended here.
        let base_url = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid base URL `{base_url}`: {e}")))?;

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(http_config.connect_timeout)
            .pool_idle_timeout(http_config.pool_idle_timeout)
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host);

        if !http_config.enable_compression {
            builder = builder.no_gzip();
        }

        let http = builder
            .build()
            .map_err(|e| Error::HttpError(format!("Failed to build HTTP client: {e}")))?;

        let timeout_override = config.timeout();
        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
            timeout_override,
        })
    }

    /// Base URL requests are issued against, always slash-terminated.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Stage a room photograph with generated furniture and decor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the request fails the
    /// prompt/room/style rule, otherwise any transport or API error.
    pub async fn generate_designs_for_room(
        &self,
        request: &GenerateDesignsForRoomRequest,
    ) -> Result<Vec<DesignImage>> {
        request.validate()?;
        let info = self
            .post_json(&operation::GENERATE_DESIGNS_FOR_ROOM, &request.to_payload())
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Generate room designs from scratch, without an input photograph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the request fails the
    /// prompt/room/style rule, otherwise any transport or API error.
    pub async fn generate_inspirational_designs(
        &self,
        request: &GenerateInspirationalDesignsRequest,
    ) -> Result<Vec<DesignImage>> {
        request.validate()?;
        let info = self
            .post_json(
                &operation::GENERATE_INSPIRATIONAL_DESIGNS,
                &request.to_payload(),
            )
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Stage a room image uploaded with the request (legacy transport).
    ///
    /// Newer integrations should prefer [`generate_designs_for_room`] with a
    /// hosted image URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the request fails the
    /// prompt/room/style rule, [`Error::ImageSourceError`] if the input
    /// image cannot be loaded, otherwise any transport or API error.
    ///
    /// [`generate_designs_for_room`]: Self::generate_designs_for_room
    pub async fn generate_designs(
        &self,
        request: &GenerateDesignsRequest,
    ) -> Result<Vec<DesignImage>> {
        request.validate()?;
        let image = request.input_image().resolve(&self.http).await?;
        let info = self
            .post_multipart(&operation::GENERATE_DESIGNS, request.to_payload(), image)
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Prime room walls for staging, image referenced by URL.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error.
    pub async fn prime_walls_for_room(
        &self,
        input_image_url: impl Into<String>,
    ) -> Result<Vec<DesignImage>> {
        let mut payload = Payload::new();
        payload.insert("input_image_url", input_image_url.into());
        let info = self
            .post_json(&operation::PRIME_WALLS_FOR_ROOM, &payload)
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Prime room walls for staging, image uploaded with the request
    /// (legacy transport).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageSourceError`] if the input image cannot be
    /// loaded, otherwise any transport or API error.
    pub async fn prime_the_room_walls(
        &self,
        input_image: &ImageSource,
    ) -> Result<Vec<DesignImage>> {
        let image = input_image.resolve(&self.http).await?;
        let info = self
            .post_multipart(&operation::PRIME_THE_ROOM_WALLS, Payload::new(), image)
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Recolor the walls of a room photograph.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error.
    pub async fn change_wall_color(
        &self,
        input_image_url: impl Into<String>,
        wall_color_hex_code: impl Into<String>,
    ) -> Result<Vec<DesignImage>> {
        let mut payload = Payload::new();
        payload.insert("input_image_url", input_image_url.into());
        payload.insert("wall_color_hex_code", wall_color_hex_code.into());
        let info = self.post_json(&operation::CHANGE_WALL_COLOR, &payload).await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Recolor the cabinets in a kitchen photograph.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error.
    pub async fn change_kitchen_cabinets_color(
        &self,
        input_image_url: impl Into<String>,
        cabinet_color_hex_code: impl Into<String>,
    ) -> Result<Vec<DesignImage>> {
        let mut payload = Payload::new();
        payload.insert("input_image_url", input_image_url.into());
        payload.insert("cabinet_color_hex_code", cabinet_color_hex_code.into());
        let info = self
            .post_json(&operation::CHANGE_KITCHEN_CABINETS_COLOR, &payload)
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Generate kitchen remodel designs.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error.
    pub async fn remodel_kitchen(&self, request: &RemodelRequest) -> Result<Vec<DesignImage>> {
        let info = self
            .post_json(&operation::REMODEL_KITCHEN, &request.to_payload())
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Generate bathroom remodel designs.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error.
    pub async fn remodel_bathroom(&self, request: &RemodelRequest) -> Result<Vec<DesignImage>> {
        let info = self
            .post_json(&operation::REMODEL_BATHROOM, &request.to_payload())
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Replace the sky in an exterior property photograph.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error.
    pub async fn replace_sky_behind_house(
        &self,
        input_image_url: impl Into<String>,
        sky_type: SkyType,
    ) -> Result<Vec<DesignImage>> {
        let mut payload = Payload::new();
        payload.insert("input_image_url", input_image_url.into());
        payload.insert("sky_type", sky_type.as_str());
        let info = self
            .post_json(&operation::REPLACE_SKY_BEHIND_HOUSE, &payload)
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Generate landscaping designs for a yard photograph.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error.
    pub async fn generate_landscaping_designs(
        &self,
        request: &LandscapingRequest,
    ) -> Result<Vec<DesignImage>> {
        let info = self
            .post_json(&operation::GENERATE_LANDSCAPING_DESIGNS, &request.to_payload())
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Remove furniture and objects from a room photograph.
    ///
    /// An optional black-and-white mask restricts removal to the white
    /// areas. Returns the single cleaned image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DecodeError`] if the response carries no image,
    /// otherwise any transport or API error.
    pub async fn remove_objects_from_room(
        &self,
        input_image_url: impl Into<String>,
        mask_image_url: Option<&str>,
    ) -> Result<DesignImage> {
        let mut payload = Payload::new();
        payload.insert("input_image_url", input_image_url.into());
        payload.insert_opt("mask_image_url", mask_image_url);
        let info = self
            .post_json(&operation::REMOVE_OBJECTS_FROM_ROOM, &payload)
            .await?;
        info.image.ok_or_else(|| {
            Error::DecodeError("Response envelope is missing info.image".to_string())
        })
    }

    /// Upscale an image, returning the decoded bytes.
    ///
    /// See [`DEFAULT_UPSCALE_FACTOR`] for the conventional scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageSourceError`] if the input image cannot be
    /// loaded, [`Error::DecodeError`] if the response carries no upscaled
    /// image or it is not valid base64, otherwise any transport or API
    /// error.
    pub async fn upscale_image(
        &self,
        input_image: &ImageSource,
        scale_factor: u8,
    ) -> Result<Bytes> {
        let image = input_image.resolve(&self.http).await?;
        let mut payload = Payload::new();
        payload.insert("scale_factor", scale_factor);
        let info = self
            .post_multipart(&operation::UPSCALE_IMAGE, payload, image)
            .await?;
        let encoded = info.upscaled_image.ok_or_else(|| {
            Error::DecodeError("Response envelope is missing info.upscaled_image".to_string())
        })?;
        let decoded = general_purpose::STANDARD.decode(encoded)?;
        Ok(Bytes::from(decoded))
    }

    /// Render a sketch or floor plan as a finished 3D image.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error.
    pub async fn sketch_to_3d_render(
        &self,
        request: &SketchRenderRequest,
    ) -> Result<Vec<DesignImage>> {
        let info = self
            .post_json(&operation::SKETCH_TO_3D_RENDER, &request.to_payload())
            .await?;
        Ok(info.images.unwrap_or_default())
    }

    /// Generate captions for a room and style combination.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error.
    #[deprecated(note = "the captions endpoint is no longer documented by the vendor")]
    pub async fn generate_image_captions(
        &self,
        room_type: RoomType,
        design_style: DesignStyle,
        num_captions: u8,
    ) -> Result<Vec<String>> {
        let mut payload = Payload::new();
        payload.insert("room_type", room_type.as_str());
        payload.insert("design_style", design_style.as_str());
        payload.insert("num_captions", num_captions);
        let info = self
            .post_json(&operation::GENERATE_IMAGE_CAPTIONS, &payload)
            .await?;
        Ok(info.captions.unwrap_or_default())
    }

    fn build_url(&self, op: &Operation) -> Result<Url> {
        let path = op.path.strip_prefix('/').unwrap_or(op.path);
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidEndpoint(format!("Invalid endpoint `{}`: {e}", op.path)))
    }

    const fn request_timeout(&self, op: &Operation) -> Duration {
        match self.timeout_override {
            Some(timeout) => timeout,
            None => op.timeout(),
        }
    }

    async fn post_json(&self, op: &'static Operation, payload: &Payload) -> Result<ResponseInfo> {
        let url = self.build_url(op)?;
        debug!(operation = op.name, "restage request");

        let response = self
            .http
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.request_timeout(op))
            .json(payload)
            .send()
            .await?;

        Self::read_envelope(response).await
    }

    async fn post_multipart(
        &self,
        op: &'static Operation,
        payload: Payload,
        image: Bytes,
    ) -> Result<ResponseInfo> {
        let url = self.build_url(op)?;
        debug!(operation = op.name, bytes = image.len(), "restage upload");

        let mut form = Form::new();
        for (name, value) in payload.into_text_fields() {
            form = form.text(name, value);
        }
        let part = Part::bytes(image.to_vec())
            .file_name(INPUT_IMAGE_FILENAME)
            .mime_str(INPUT_IMAGE_CONTENT_TYPE)?;
        form = form.part(INPUT_IMAGE_FIELD, part);

        let response = self
            .http
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.request_timeout(op))
            .multipart(form)
            .send()
            .await?;

        Self::read_envelope(response).await
    }

    /// Decode the response envelope.
    ///
    /// Failures are usually JSON too: a non-2xx response that still parses
    /// as an envelope surfaces the service's own error code; anything else
    /// becomes [`Error::UnexpectedStatus`].
    async fn read_envelope(response: Response) -> Result<ResponseInfo> {
        let status = response.status();

        if status.is_success() {
            let envelope: ApiResponse = response.json().await?;
            return envelope.into_info();
        }

        let body = response.text().await.unwrap_or_default();
        if let Ok(envelope) = serde_json::from_str::<ApiResponse>(&body) {
            if !envelope.error.is_empty() {
                return Err(Error::ApiError {
                    code: envelope.error,
                    message: envelope.message,
                });
            }
        }

        Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restage_core::types::{ColorScheme, GardenStyle, YardType};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    fn test_client(server: &MockServer) -> RestageClient {
        RestageClient::builder()
            .with_api_key("sk-test")
            .with_base_url(server.uri())
            .build()
            .unwrap()
    }

    fn images_response(images: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "error": "",
            "message": "Successfully generated designs.",
            "info": { "images": images }
        }))
    }

    struct MultipartContains {
        needles: Vec<&'static str>,
    }

    impl Match for MultipartContains {
        fn matches(&self, request: &Request) -> bool {
            let content_type = request
                .headers
                .get("content-type")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            if !content_type.starts_with("multipart/form-data") {
                return false;
            }
            let body = String::from_utf8_lossy(&request.body);
            self.needles.iter().all(|needle| body.contains(needle))
        }
    }

    #[test]
    fn test_builder_defaults() {
        let client = RestageClient::new("sk-test").unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.restage.example/");
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let err = RestageClient::builder()
            .with_api_key("sk-test")
            .with_base_url("not a url")
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_builder_rejects_empty_key() {
        let err = RestageClient::new("").unwrap_err();
        assert_eq!(err, Error::MissingApiKey);
    }

    #[tokio::test]
    async fn test_generate_designs_for_room() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate_designs_for_room"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_json(json!({
                "input_image_url": "https://example.com/room.jpg",
                "room_type": "livingroom",
                "design_style": "scandinavian",
                "num_images": 2,
                "color_scheme": "COLOR_SCHEME_3",
            })))
            .respond_with(images_response(json!([
                {
                    "uuid": "81133196-4477-4cdd-834a-89f5482bb9d0",
                    "url": "https://cdn.example.com/design-1.jpg",
                    "width": 768,
                    "height": 576
                },
                {
                    "uuid": "12fc1f3c-6a2a-4e28-9f14-7d7d1f0cbd2f",
                    "url": "https://cdn.example.com/design-2.jpg",
                    "width": 768,
                    "height": 576
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = GenerateDesignsForRoomRequest::new("https://example.com/room.jpg")
            .with_room_type(RoomType::LivingRoom)
            .with_design_style(DesignStyle::Scandinavian)
            .with_num_images(2)
            .with_color_scheme(ColorScheme::new(3).unwrap());

        let images = client.generate_designs_for_room(&request).await.unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(
            images[0].url.as_deref(),
            Some("https://cdn.example.com/design-1.jpg")
        );
        assert_eq!(images[1].width, Some(768));
    }

    #[tokio::test]
    async fn test_prompt_only_staging_omits_room_and_style() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate_designs_for_room"))
            .and(body_json(json!({
                "input_image_url": "https://example.com/room.jpg",
                "num_images": 1,
                "prompt": "a cozy reading corner with rattan chairs",
            })))
            .respond_with(images_response(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = GenerateDesignsForRoomRequest::new("https://example.com/room.jpg")
            .with_prompt("a cozy reading corner with rattan chairs");

        // Zero generated images is a valid outcome, not an error.
        let images = client.generate_designs_for_room(&request).await.unwrap();
        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn test_validation_short_circuits_before_network() {
        let client = RestageClient::new("sk-test").unwrap();
        let request = GenerateDesignsForRoomRequest::new("https://example.com/room.jpg");

        let err = client.generate_designs_for_room(&request).await.unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
        assert!(err.is_local());
    }

    #[tokio::test]
    async fn test_api_error_sentinel_on_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/prime_walls_for_room"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "InvalidInput",
                "message": "Invalid input image. Please check the input image and try again."
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .prime_walls_for_room("https://example.com/room.jpg")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Error::ApiError {
                code: "InvalidInput".to_string(),
                message: "Invalid input image. Please check the input image and try again."
                    .to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_unexpected_status_with_plain_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/change_wall_color"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .change_wall_color("https://example.com/room.jpg", "#FF5733")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Error::UnexpectedStatus {
                status: 503,
                body: "upstream unavailable".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_error_envelope_wins_over_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/replace_sky_behind_house"))
            .respond_with(ResponseTemplate::new(402).set_body_json(json!({
                "error": "InsufficientCredits",
                "message": "Design credits exhausted."
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .replace_sky_behind_house("https://example.com/house.jpg", SkyType::Dusk)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Error::ApiError {
                code: "InsufficientCredits".to_string(),
                message: "Design credits exhausted.".to_string(),
            }
        );
    }

    // body_json matches the whole body, so this also proves no extra
    // fields ride along.
    #[tokio::test]
    async fn test_change_wall_color_sends_exact_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/change_wall_color"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_json(json!({
                "input_image_url": "https://example.com/room.jpg",
                "wall_color_hex_code": "#2F4F4F",
            })))
            .respond_with(images_response(json!([
                { "url": "https://cdn.example.com/recolored.jpg" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let images = client
            .change_wall_color("https://example.com/room.jpg", "#2F4F4F")
            .await
            .unwrap();
        assert_eq!(images.len(), 1);
    }

    #[tokio::test]
    async fn test_remodel_kitchen_suppresses_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/remodel_kitchen"))
            .and(body_json(json!({
                "input_image_url": "https://example.com/kitchen.jpg",
                "design_style": "farmhouse",
            })))
            .respond_with(images_response(json!([
                { "uuid": "5b8f2f0a-9a63-4e9f-8f11-84b3a5f6f3c4", "url": "https://cdn.example.com/k.jpg" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = RemodelRequest::new("https://example.com/kitchen.jpg", DesignStyle::Farmhouse);
        let images = client.remodel_kitchen(&request).await.unwrap();
        assert_eq!(images.len(), 1);
    }

    #[tokio::test]
    async fn test_landscaping_sends_yard_label_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate_landscaping_designs"))
            .and(body_json(json!({
                "input_image_url": "https://example.com/yard.jpg",
                "yard_type": "Front Yard",
                "garden_style": "english_cottage",
                "num_images": 2,
            })))
            .respond_with(images_response(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = LandscapingRequest::new(
            "https://example.com/yard.jpg",
            YardType::FrontYard,
            GardenStyle::EnglishCottage,
        )
        .with_num_images(2);

        client.generate_landscaping_designs(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_remove_objects_returns_single_image() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/remove_objects_from_room"))
            .and(body_json(json!({
                "input_image_url": "https://example.com/room.jpg",
                "mask_image_url": "https://example.com/mask.png",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "",
                "message": "Successfully removed objects from room.",
                "info": {
                    "image": {
                        "uuid": "db63dac2-b8b3-47d3-a447-b9ecdc604a6a",
                        "width": 768,
                        "height": 576,
                        "url": "https://cdn.example.com/cleaned.jpg"
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let image = client
            .remove_objects_from_room(
                "https://example.com/room.jpg",
                Some("https://example.com/mask.png"),
            )
            .await
            .unwrap();

        assert_eq!(image.width, Some(768));
        assert_eq!(image.url.as_deref(), Some("https://cdn.example.com/cleaned.jpg"));
    }

    #[tokio::test]
    async fn test_remove_objects_missing_image_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/remove_objects_from_room"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "",
                "message": "ok",
                "info": {}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .remove_objects_from_room("https://example.com/room.jpg", None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::DecodeError(_)));
    }

    #[tokio::test]
    async fn test_upscale_image_decodes_result() {
        let server = MockServer::start().await;
        let upscaled = base64::engine::general_purpose::STANDARD.encode(b"upscaled-bytes");

        Mock::given(method("POST"))
            .and(path("/upscale_image"))
            .and(MultipartContains {
                needles: vec![
                    "name=\"scale_factor\"",
                    "name=\"input_image\"",
                    "filename=\"input_image.jpg\"",
                ],
            })
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "",
                "message": "Successfully upscaled image.",
                "info": { "upscaled_image": upscaled }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let source = ImageSource::bytes(b"raw-image".to_vec());
        let result = client
            .upscale_image(&source, DEFAULT_UPSCALE_FACTOR)
            .await
            .unwrap();

        assert_eq!(result, Bytes::from_static(b"upscaled-bytes"));
    }

    #[tokio::test]
    async fn test_generate_designs_uploads_multipart() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate_designs"))
            .and(header("authorization", "Bearer sk-test"))
            .and(MultipartContains {
                needles: vec![
                    "name=\"room_type\"",
                    "name=\"design_style\"",
                    "name=\"num_images\"",
                    "name=\"keep_original_dimensions\"",
                    "name=\"input_image\"",
                ],
            })
            .respond_with(images_response(json!([
                {
                    "uuid": "e7a7e1ba-28ad-44ff-9a93-1b42ba69b8cb",
                    "data": base64::engine::general_purpose::STANDARD.encode(b"design"),
                    "width": 512,
                    "height": 512,
                    "captions": ["Scandinavian serenity"]
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = GenerateDesignsRequest::new(ImageSource::bytes(b"png-bytes".to_vec()))
            .with_room_type(RoomType::LivingRoom)
            .with_design_style(DesignStyle::Scandinavian)
            .with_keep_original_dimensions(true);

        let images = client.generate_designs(&request).await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(
            images[0].decoded_data().unwrap().unwrap(),
            Bytes::from_static(b"design")
        );
    }

    #[tokio::test]
    async fn test_timeout_override() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/prime_walls_for_room"))
            .respond_with(
                images_response(json!([])).set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = RestageClient::builder()
            .with_api_key("sk-test")
            .with_base_url(server.uri())
            .with_timeout(1)
            .build()
            .unwrap();

        let err = client
            .prime_walls_for_room("https://example.com/room.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn test_generate_image_captions() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate_image_captions"))
            .and(body_json(json!({
                "room_type": "bedroom",
                "design_style": "modern",
                "num_captions": 2,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "",
                "message": "ok",
                "info": { "captions": ["Sleek modern bedroom", "Calm and uncluttered"] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let captions = client
            .generate_image_captions(RoomType::Bedroom, DesignStyle::Modern, 2)
            .await
            .unwrap();

        assert_eq!(captions.len(), 2);
        assert_eq!(captions[0], "Sleek modern bedroom");
    }
}
