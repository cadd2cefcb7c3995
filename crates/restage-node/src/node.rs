//! Virtual staging as an image-pipeline node.
//!
//! Hosts hand over a decoded raster plus widget values; the node drives the
//! multipart staging operation and hands back decoded rasters. Everything
//! crosses the boundary in memory: the input is PNG-encoded before upload,
//! and every returned design is materialized into a [`DynamicImage`],
//! whether the service sent it inline or by URL.

use bytes::Bytes;
use image::{DynamicImage, ImageFormat};
use reqwest::Client;
use restage_api::client::RestageClient;
use restage_api::models::{DesignImage, GenerateDesignsRequest};
use restage_core::error::{Error, Result};
use restage_core::http::{DEFAULT_CONNECT_TIMEOUT, SOURCE_FETCH_TIMEOUT};
use restage_core::types::{ColorScheme, DesignStyle, RoomType, SpecialityDecor};
use std::io::Cursor;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("restage-rust/", env!("CARGO_PKG_VERSION"));

/// Widget values handed over by the host.
///
/// The field layout mirrors the node schema: string fields use the empty
/// string for "not set", and a zero `seed`, `guidance_scale`, or
/// `num_inference_steps` means "let the service decide" and is not
/// forwarded. A non-empty `prompt` switches the request into prompt mode,
/// in which the room, style, and decor selections are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct StagingParams {
    /// Free-text generation directive; empty means unset.
    pub prompt: String,
    /// Text prepended to the prompt by the service; used only in prompt mode.
    pub prompt_prefix: String,
    /// Text appended to the prompt by the service; used only in prompt mode.
    pub prompt_suffix: String,
    /// Elements the generation should avoid; used only in prompt mode.
    pub negative_prompt: String,
    /// Room type; paired with `design_style`.
    pub room_type: Option<RoomType>,
    /// Design style; paired with `room_type`.
    pub design_style: Option<DesignStyle>,
    /// Predefined color palette.
    pub color_scheme: Option<ColorScheme>,
    /// Seasonal or thematic decor.
    pub speciality_decor: Option<SpecialityDecor>,
    /// Random seed; zero means unset.
    pub seed: u64,
    /// Prompt adherence; zero means unset.
    pub guidance_scale: f64,
    /// Quality/speed balance; zero means unset.
    pub num_inference_steps: u32,
    /// Number of designs to generate (1-4).
    pub num_images: u8,
    /// Resolution multiplier; one means unset.
    pub scale_factor: u8,
}

impl StagingParams {
    /// Check the prompt/room/style combination rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] unless a prompt is set, or both a
    /// room type and a design style are set.
    pub fn validate(&self) -> Result<()> {
        if !self.prompt.is_empty() || (self.room_type.is_some() && self.design_style.is_some()) {
            Ok(())
        } else {
            Err(Error::ValidationError(
                "Either a prompt or both a room type and a design style are required".to_string(),
            ))
        }
    }

    fn to_request(&self, png: Bytes) -> GenerateDesignsRequest {
        let mut request = GenerateDesignsRequest::new(png).with_num_images(self.num_images);
        if self.scale_factor > 1 {
            request = request.with_scale_factor(self.scale_factor);
        }

        if self.prompt.is_empty() {
            if let Some(room_type) = self.room_type {
                request = request.with_room_type(room_type);
            }
            if let Some(design_style) = self.design_style {
                request = request.with_design_style(design_style);
            }
            if let Some(color_scheme) = self.color_scheme {
                request = request.with_color_scheme(color_scheme);
            }
            if let Some(speciality_decor) = self.speciality_decor {
                request = request.with_speciality_decor(speciality_decor);
            }
        } else {
            request = request.with_prompt(self.prompt.as_str());
            if !self.prompt_prefix.is_empty() {
                request = request.with_prompt_prefix(self.prompt_prefix.as_str());
            }
            if !self.prompt_suffix.is_empty() {
                request = request.with_prompt_suffix(self.prompt_suffix.as_str());
            }
            if !self.negative_prompt.is_empty() {
                request = request.with_negative_prompt(self.negative_prompt.as_str());
            }
        }

        if self.seed > 0 {
            request = request.with_seed(self.seed);
        }
        if self.guidance_scale > 0.0 {
            request = request.with_guidance_scale(self.guidance_scale);
        }
        if self.num_inference_steps > 0 {
            request = request.with_num_inference_steps(self.num_inference_steps);
        }
        request
    }
}

impl Default for StagingParams {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            prompt_prefix: String::new(),
            prompt_suffix: String::new(),
            negative_prompt: String::new(),
            room_type: None,
            design_style: None,
            color_scheme: None,
            speciality_decor: None,
            seed: 0,
            guidance_scale: 0.0,
            num_inference_steps: 0,
            num_images: 1,
            scale_factor: 1,
        }
    }
}

/// Staging node wired to a [`RestageClient`].
///
/// Cheap to clone; clones share both connection pools.
#[derive(Debug, Clone)]
pub struct StagingNode {
    client: RestageClient,
    fetch: Client,
}

impl StagingNode {
    /// Create a node over an existing client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpError`] if the download client cannot be
    /// constructed.
    pub fn new(client: RestageClient) -> Result<Self> {
        // Generated designs are served from a CDN, not the API host, so
        // downloads go through a separate unauthenticated client.
        let fetch = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT))
            .build()
            .map_err(|e| Error::HttpError(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, fetch })
    }

    /// Create a node from the `RESTAGE_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::new(RestageClient::from_env()?)
    }

    /// The client requests are issued through.
    #[must_use]
    pub fn client(&self) -> &RestageClient {
        &self.client
    }

    /// Stage `image` and return every generated design, decoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] when the parameters fail the
    /// prompt/room/style rule, [`Error::DecodeError`] when a returned design
    /// cannot be materialized, and any client error otherwise. One
    /// unusable design fails the whole call.
    pub async fn run(
        &self,
        image: &DynamicImage,
        params: &StagingParams,
    ) -> Result<Vec<DynamicImage>> {
        params.validate()?;

        let png = encode_png(image)?;
        let designs = self.client.generate_designs(&params.to_request(png)).await?;

        debug!(designs = designs.len(), "materializing staged designs");
        let mut staged = Vec::with_capacity(designs.len());
        for design in &designs {
            staged.push(self.materialize(design).await?);
        }
        Ok(staged)
    }

    /// Turn one design descriptor into pixels, preferring inline data over
    /// the hosted URL.
    async fn materialize(&self, design: &DesignImage) -> Result<DynamicImage> {
        let bytes = match design.decoded_data()? {
            Some(bytes) => bytes,
            None => match &design.url {
                Some(url) => self.fetch_design(url).await?,
                None => {
                    return Err(Error::DecodeError(
                        "Design carries neither inline data nor a URL".to_string(),
                    ))
                }
            },
        };
        image::load_from_memory(&bytes)
            .map_err(|e| Error::DecodeError(format!("Undecodable design image: {e}")))
    }

    async fn fetch_design(&self, url: &str) -> Result<Bytes> {
        debug!(url, "fetching generated design");
        let response = self
            .fetch
            .get(url)
            .timeout(Duration::from_secs(SOURCE_FETCH_TIMEOUT))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?)
    }
}

fn encode_png(image: &DynamicImage) -> Result<Bytes> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| Error::ImageSourceError(format!("Failed to encode input as PNG: {e}")))?;
    Ok(Bytes::from(buffer.into_inner()))
}
