//! Request and response models for the Restage API.
//!
//! Requests for the parameter-rich operations are builder-style structs that
//! assemble a [`Payload`] according to the inclusion rules in
//! [`crate::operation`]; the one- and two-field operations take plain
//! arguments on the client instead. Responses all share the
//! [`ApiResponse`] envelope.

use crate::payload::Payload;
use base64::engine::general_purpose;
use base64::Engine as _;
use bytes::Bytes;
use restage_core::error::{Error, Result};
use restage_core::image::ImageSource;
use restage_core::types::{
    ColorScheme, DesignStyle, GardenStyle, RenderType, RoomType, SpecialityDecor, YardType,
};
use restage_core::uuid::ImageUuid;
use serde::{Deserialize, Serialize};

// Shared by the three design-generation requests.
fn validate_design_inputs(
    has_prompt: bool,
    has_room_type: bool,
    has_design_style: bool,
) -> Result<()> {
    if has_prompt || (has_room_type && has_design_style) {
        Ok(())
    } else {
        Err(Error::ValidationError(
            "Either a prompt or both a room type and a design style are required".to_string(),
        ))
    }
}

/// Parameters for [`generate_designs_for_room`].
///
/// The input image is referenced by URL; the service fetches it itself. A
/// request is valid when it carries a prompt, or both a room type and a
/// design style.
///
/// [`generate_designs_for_room`]: crate::client::RestageClient::generate_designs_for_room
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateDesignsForRoomRequest {
    input_image_url: String,
    room_type: Option<RoomType>,
    design_style: Option<DesignStyle>,
    num_images: u8,
    scale_factor: Option<u8>,
    color_scheme: Option<ColorScheme>,
    speciality_decor: Option<SpecialityDecor>,
    mask_info: Option<String>,
    prompt: Option<String>,
    seed: Option<u64>,
    guidance_scale: Option<f64>,
    num_inference_steps: Option<u32>,
    design_style_image_url: Option<String>,
    design_style_image_strength: Option<f64>,
    design_creativity: Option<f64>,
    webhooks_data: Option<String>,
    decor_items: Option<String>,
}

impl GenerateDesignsForRoomRequest {
    /// Start a request for the given room image URL.
    #[must_use]
    pub fn new(input_image_url: impl Into<String>) -> Self {
        Self {
            input_image_url: input_image_url.into(),
            room_type: None,
            design_style: None,
            num_images: 1,
            scale_factor: None,
            color_scheme: None,
            speciality_decor: None,
            mask_info: None,
            prompt: None,
            seed: None,
            guidance_scale: None,
            num_inference_steps: None,
            design_style_image_url: None,
            design_style_image_strength: None,
            design_creativity: None,
            webhooks_data: None,
            decor_items: None,
        }
    }

    /// Set the room type.
    #[must_use]
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Set the design style.
    #[must_use]
    pub fn with_design_style(mut self, design_style: DesignStyle) -> Self {
        self.design_style = Some(design_style);
        self
    }

    /// Number of designs to generate (1-4).
    #[must_use]
    pub fn with_num_images(mut self, num_images: u8) -> Self {
        self.num_images = num_images;
        self
    }

    /// Resolution multiplier (1-8).
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: u8) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    /// Predefined color palette.
    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = Some(color_scheme);
        self
    }

    /// Seasonal or thematic decor.
    #[must_use]
    pub fn with_speciality_decor(mut self, speciality_decor: SpecialityDecor) -> Self {
        self.speciality_decor = Some(speciality_decor);
        self
    }

    /// Opaque masking data from a previous response.
    #[must_use]
    pub fn with_mask_info(mut self, mask_info: impl Into<String>) -> Self {
        self.mask_info = Some(mask_info.into());
        self
    }

    /// Free-text generation directive.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Random seed for reproducibility. Zero is a real seed and is sent.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Prompt adherence (1-20, service default 15).
    #[must_use]
    pub fn with_guidance_scale(mut self, guidance_scale: f64) -> Self {
        self.guidance_scale = Some(guidance_scale);
        self
    }

    /// Quality/speed balance (1-75, service default 50).
    #[must_use]
    pub fn with_num_inference_steps(mut self, num_inference_steps: u32) -> Self {
        self.num_inference_steps = Some(num_inference_steps);
        self
    }

    /// URL of a style reference image.
    #[must_use]
    pub fn with_design_style_image_url(mut self, url: impl Into<String>) -> Self {
        self.design_style_image_url = Some(url.into());
        self
    }

    /// Influence of the style reference image (0-1, service default 0.82).
    #[must_use]
    pub fn with_design_style_image_strength(mut self, strength: f64) -> Self {
        self.design_style_image_strength = Some(strength);
        self
    }

    /// Level of creative alteration (0-1, service default 0.39).
    #[must_use]
    pub fn with_design_creativity(mut self, creativity: f64) -> Self {
        self.design_creativity = Some(creativity);
        self
    }

    /// Opaque webhook configuration, passed through to the service.
    #[must_use]
    pub fn with_webhooks_data(mut self, webhooks_data: impl Into<String>) -> Self {
        self.webhooks_data = Some(webhooks_data.into());
        self
    }

    /// JSON string describing specific furniture or accessories to place.
    #[must_use]
    pub fn with_decor_items(mut self, decor_items: impl Into<String>) -> Self {
        self.decor_items = Some(decor_items.into());
        self
    }

    /// Check the prompt/room/style combination rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] unless a prompt is set, or both a
    /// room type and a design style are set.
    pub fn validate(&self) -> Result<()> {
        validate_design_inputs(
            self.prompt.is_some(),
            self.room_type.is_some(),
            self.design_style.is_some(),
        )
    }

    pub(crate) fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("input_image_url", self.input_image_url.clone());
        payload.insert_opt("room_type", self.room_type.map(|r| r.as_str()));
        payload.insert_opt("design_style", self.design_style.map(|s| s.as_str()));
        payload.insert("num_images", self.num_images);
        payload.insert_opt("scale_factor", self.scale_factor);
        payload.insert_opt("color_scheme", self.color_scheme.map(|c| c.to_string()));
        payload.insert_opt(
            "speciality_decor",
            self.speciality_decor.map(|s| s.to_string()),
        );
        payload.insert_opt("mask_info", self.mask_info.clone());
        payload.insert_opt("prompt", self.prompt.clone());
        payload.insert_opt("seed", self.seed);
        payload.insert_opt("guidance_scale", self.guidance_scale);
        payload.insert_opt("num_inference_steps", self.num_inference_steps);
        payload.insert_opt(
            "design_style_image_url",
            self.design_style_image_url.clone(),
        );
        payload.insert_opt(
            "design_style_image_strength",
            self.design_style_image_strength,
        );
        payload.insert_opt("design_creativity", self.design_creativity);
        payload.insert_opt("webhooks_data", self.webhooks_data.clone());
        payload.insert_opt("decor_items", self.decor_items.clone());
        payload
    }
}

/// Parameters for [`generate_inspirational_designs`].
///
/// No input image: the service renders a room from scratch.
///
/// [`generate_inspirational_designs`]: crate::client::RestageClient::generate_inspirational_designs
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateInspirationalDesignsRequest {
    room_type: Option<RoomType>,
    design_style: Option<DesignStyle>,
    num_images: u8,
    color_scheme: Option<ColorScheme>,
    speciality_decor: Option<SpecialityDecor>,
    prompt: Option<String>,
    seed: Option<u64>,
    guidance_scale: Option<f64>,
    num_inference_steps: Option<u32>,
}

impl GenerateInspirationalDesignsRequest {
    /// Start an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self {
            room_type: None,
            design_style: None,
            num_images: 1,
            color_scheme: None,
            speciality_decor: None,
            prompt: None,
            seed: None,
            guidance_scale: None,
            num_inference_steps: None,
        }
    }

    /// Set the room type.
    #[must_use]
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Set the design style.
    #[must_use]
    pub fn with_design_style(mut self, design_style: DesignStyle) -> Self {
        self.design_style = Some(design_style);
        self
    }

    /// Number of designs to generate (1-4).
    #[must_use]
    pub fn with_num_images(mut self, num_images: u8) -> Self {
        self.num_images = num_images;
        self
    }

    /// Predefined color palette.
    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = Some(color_scheme);
        self
    }

    /// Seasonal or thematic decor.
    #[must_use]
    pub fn with_speciality_decor(mut self, speciality_decor: SpecialityDecor) -> Self {
        self.speciality_decor = Some(speciality_decor);
        self
    }

    /// Free-text generation directive.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Random seed for reproducibility. Zero is a real seed and is sent.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Prompt adherence (1-20, service default 15).
    #[must_use]
    pub fn with_guidance_scale(mut self, guidance_scale: f64) -> Self {
        self.guidance_scale = Some(guidance_scale);
        self
    }

    /// Quality/speed balance (1-75, service default 35).
    #[must_use]
    pub fn with_num_inference_steps(mut self, num_inference_steps: u32) -> Self {
        self.num_inference_steps = Some(num_inference_steps);
        self
    }

    /// Check the prompt/room/style combination rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] unless a prompt is set, or both a
    /// room type and a design style are set.
    pub fn validate(&self) -> Result<()> {
        validate_design_inputs(
            self.prompt.is_some(),
            self.room_type.is_some(),
            self.design_style.is_some(),
        )
    }

    pub(crate) fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert_opt("room_type", self.room_type.map(|r| r.as_str()));
        payload.insert_opt("design_style", self.design_style.map(|s| s.as_str()));
        payload.insert("num_images", self.num_images);
        payload.insert_opt("color_scheme", self.color_scheme.map(|c| c.to_string()));
        payload.insert_opt(
            "speciality_decor",
            self.speciality_decor.map(|s| s.to_string()),
        );
        payload.insert_opt("prompt", self.prompt.clone());
        payload.insert_opt("seed", self.seed);
        payload.insert_opt("guidance_scale", self.guidance_scale);
        payload.insert_opt("num_inference_steps", self.num_inference_steps);
        payload
    }
}

impl Default for GenerateInspirationalDesignsRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for the legacy multipart [`generate_designs`] operation.
///
/// The input image is uploaded with the request instead of referenced by
/// URL, so [`ImageSource`] bytes, paths, and URLs are all accepted.
///
/// [`generate_designs`]: crate::client::RestageClient::generate_designs
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateDesignsRequest {
    input_image: ImageSource,
    room_type: Option<RoomType>,
    design_style: Option<DesignStyle>,
    num_images: u8,
    scale_factor: Option<u8>,
    num_captions: Option<u8>,
    keep_original_dimensions: bool,
    color_scheme: Option<ColorScheme>,
    speciality_decor: Option<SpecialityDecor>,
    prompt: Option<String>,
    prompt_prefix: Option<String>,
    prompt_suffix: Option<String>,
    negative_prompt: Option<String>,
    seed: Option<u64>,
    guidance_scale: Option<f64>,
    num_inference_steps: Option<u32>,
}

impl GenerateDesignsRequest {
    /// Start a request for the given input image.
    #[must_use]
    pub fn new(input_image: impl Into<ImageSource>) -> Self {
        Self {
            input_image: input_image.into(),
            room_type: None,
            design_style: None,
            num_images: 1,
            scale_factor: None,
            num_captions: None,
            keep_original_dimensions: false,
            color_scheme: None,
            speciality_decor: None,
            prompt: None,
            prompt_prefix: None,
            prompt_suffix: None,
            negative_prompt: None,
            seed: None,
            guidance_scale: None,
            num_inference_steps: None,
        }
    }

    /// The image that will be uploaded.
    #[must_use]
    pub fn input_image(&self) -> &ImageSource {
        &self.input_image
    }

    /// Set the room type.
    #[must_use]
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Set the design style.
    #[must_use]
    pub fn with_design_style(mut self, design_style: DesignStyle) -> Self {
        self.design_style = Some(design_style);
        self
    }

    /// Number of designs to generate (1-4).
    #[must_use]
    pub fn with_num_images(mut self, num_images: u8) -> Self {
        self.num_images = num_images;
        self
    }

    /// Resolution multiplier (1-8).
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: u8) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    /// Number of captions to generate per image.
    #[must_use]
    pub fn with_num_captions(mut self, num_captions: u8) -> Self {
        self.num_captions = Some(num_captions);
        self
    }

    /// Keep the dimensions of the input image in the generated designs.
    #[must_use]
    pub fn with_keep_original_dimensions(mut self, keep: bool) -> Self {
        self.keep_original_dimensions = keep;
        self
    }

    /// Predefined color palette.
    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = Some(color_scheme);
        self
    }

    /// Seasonal or thematic decor.
    #[must_use]
    pub fn with_speciality_decor(mut self, speciality_decor: SpecialityDecor) -> Self {
        self.speciality_decor = Some(speciality_decor);
        self
    }

    /// Free-text generation directive.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Text prepended to the prompt by the service.
    #[must_use]
    pub fn with_prompt_prefix(mut self, prompt_prefix: impl Into<String>) -> Self {
        self.prompt_prefix = Some(prompt_prefix.into());
        self
    }

    /// Text appended to the prompt by the service.
    #[must_use]
    pub fn with_prompt_suffix(mut self, prompt_suffix: impl Into<String>) -> Self {
        self.prompt_suffix = Some(prompt_suffix.into());
        self
    }

    /// Elements the generation should avoid.
    #[must_use]
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    /// Random seed for reproducibility. Zero is a real seed and is sent.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Prompt adherence (1-20, service default 15).
    #[must_use]
    pub fn with_guidance_scale(mut self, guidance_scale: f64) -> Self {
        self.guidance_scale = Some(guidance_scale);
        self
    }

    /// Quality/speed balance (1-75, service default 50).
    #[must_use]
    pub fn with_num_inference_steps(mut self, num_inference_steps: u32) -> Self {
        self.num_inference_steps = Some(num_inference_steps);
        self
    }

    /// Check the prompt/room/style combination rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] unless a prompt is set, or both a
    /// room type and a design style are set.
    pub fn validate(&self) -> Result<()> {
        validate_design_inputs(
            self.prompt.is_some(),
            self.room_type.is_some(),
            self.design_style.is_some(),
        )
    }

    pub(crate) fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert_opt("room_type", self.room_type.map(|r| r.as_str()));
        payload.insert_opt("design_style", self.design_style.map(|s| s.as_str()));
        payload.insert("num_images", self.num_images);
        payload.insert_opt("scale_factor", self.scale_factor);
        payload.insert_opt("num_captions", self.num_captions);
        payload.insert_flag("keep_original_dimensions", self.keep_original_dimensions);
        payload.insert_opt("color_scheme", self.color_scheme.map(|c| c.to_string()));
        payload.insert_opt(
            "speciality_decor",
            self.speciality_decor.map(|s| s.to_string()),
        );
        payload.insert_opt("prompt", self.prompt.clone());
        payload.insert_opt("prompt_prefix", self.prompt_prefix.clone());
        payload.insert_opt("prompt_suffix", self.prompt_suffix.clone());
        payload.insert_opt("negative_prompt", self.negative_prompt.clone());
        payload.insert_opt("seed", self.seed);
        payload.insert_opt("guidance_scale", self.guidance_scale);
        payload.insert_opt("num_inference_steps", self.num_inference_steps);
        payload
    }
}

/// Parameters shared by [`remodel_kitchen`] and [`remodel_bathroom`].
///
/// [`remodel_kitchen`]: crate::client::RestageClient::remodel_kitchen
/// [`remodel_bathroom`]: crate::client::RestageClient::remodel_bathroom
#[derive(Debug, Clone, PartialEq)]
pub struct RemodelRequest {
    input_image_url: String,
    design_style: DesignStyle,
    num_images: u8,
    scale_factor: Option<u8>,
}

impl RemodelRequest {
    /// Start a request for the given image URL and style.
    #[must_use]
    pub fn new(input_image_url: impl Into<String>, design_style: DesignStyle) -> Self {
        Self {
            input_image_url: input_image_url.into(),
            design_style,
            num_images: 1,
            scale_factor: None,
        }
    }

    /// Number of designs to generate (1-4). One is the service default and
    /// is not sent.
    #[must_use]
    pub fn with_num_images(mut self, num_images: u8) -> Self {
        self.num_images = num_images;
        self
    }

    /// Resolution multiplier (1-4).
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: u8) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    pub(crate) fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("input_image_url", self.input_image_url.clone());
        payload.insert("design_style", self.design_style.as_str());
        payload.insert_nondefault("num_images", self.num_images, 1);
        payload.insert_opt("scale_factor", self.scale_factor);
        payload
    }
}

/// Parameters for [`generate_landscaping_designs`].
///
/// [`generate_landscaping_designs`]: crate::client::RestageClient::generate_landscaping_designs
#[derive(Debug, Clone, PartialEq)]
pub struct LandscapingRequest {
    input_image_url: String,
    yard_type: YardType,
    garden_style: GardenStyle,
    num_images: u8,
}

impl LandscapingRequest {
    /// Start a request for the given yard image URL.
    #[must_use]
    pub fn new(
        input_image_url: impl Into<String>,
        yard_type: YardType,
        garden_style: GardenStyle,
    ) -> Self {
        Self {
            input_image_url: input_image_url.into(),
            yard_type,
            garden_style,
            num_images: 1,
        }
    }

    /// Number of designs to generate (1-4). One is the service default and
    /// is not sent.
    #[must_use]
    pub fn with_num_images(mut self, num_images: u8) -> Self {
        self.num_images = num_images;
        self
    }

    pub(crate) fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("input_image_url", self.input_image_url.clone());
        payload.insert("yard_type", self.yard_type.as_str());
        payload.insert("garden_style", self.garden_style.as_str());
        payload.insert_nondefault("num_images", self.num_images, 1);
        payload
    }
}

/// Parameters for [`sketch_to_3d_render`].
///
/// [`sketch_to_3d_render`]: crate::client::RestageClient::sketch_to_3d_render
#[derive(Debug, Clone, PartialEq)]
pub struct SketchRenderRequest {
    input_image_url: String,
    design_style: DesignStyle,
    num_images: u8,
    scale_factor: Option<u8>,
    render_type: Option<RenderType>,
}

impl SketchRenderRequest {
    /// Start a request for the given sketch or floor plan URL.
    #[must_use]
    pub fn new(input_image_url: impl Into<String>, design_style: DesignStyle) -> Self {
        Self {
            input_image_url: input_image_url.into(),
            design_style,
            num_images: 1,
            scale_factor: None,
            render_type: None,
        }
    }

    /// Number of renders to generate (1-4). One is the service default and
    /// is not sent.
    #[must_use]
    pub fn with_num_images(mut self, num_images: u8) -> Self {
        self.num_images = num_images;
        self
    }

    /// Resolution multiplier (1-8).
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: u8) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    /// Render perspective.
    #[must_use]
    pub fn with_render_type(mut self, render_type: RenderType) -> Self {
        self.render_type = Some(render_type);
        self
    }

    pub(crate) fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("input_image_url", self.input_image_url.clone());
        payload.insert("design_style", self.design_style.as_str());
        payload.insert_nondefault("num_images", self.num_images, 1);
        payload.insert_opt("scale_factor", self.scale_factor);
        payload.insert_opt("render_type", self.render_type.map(|r| r.as_str()));
        payload
    }
}

/// Envelope returned by every Restage endpoint.
///
/// The service signals failure in-band: a non-empty [`error`] means the
/// operation failed even when the HTTP status is 200.
///
/// [`error`]: ApiResponse::error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Error code; empty on success.
    #[serde(default)]
    pub error: String,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// Operation-specific payload, absent on failures.
    pub info: Option<ResponseInfo>,
}

impl ApiResponse {
    /// Split the envelope into its payload, surfacing the error sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ApiError`] with the service's code and message,
    /// verbatim, when `error` is non-empty.
    pub fn into_info(self) -> Result<ResponseInfo> {
        if self.error.is_empty() {
            Ok(self.info.unwrap_or_default())
        } else {
            Err(Error::ApiError {
                code: self.error,
                message: self.message,
            })
        }
    }
}

/// Operation-specific payload inside a successful envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseInfo {
    /// Generated or edited images.
    pub images: Option<Vec<DesignImage>>,
    /// Single cleaned image returned by object removal.
    pub image: Option<DesignImage>,
    /// Base64-encoded upscaled image.
    pub upscaled_image: Option<String>,
    /// Captions generated for the request.
    pub captions: Option<Vec<String>>,
    /// Opaque masking data usable in follow-up requests.
    pub mask_info: Option<String>,
}

/// One generated or edited image.
///
/// Depending on the operation the image arrives by reference ([`url`]) or
/// inline ([`data`], base64).
///
/// [`url`]: DesignImage::url
/// [`data`]: DesignImage::data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignImage {
    /// Server-assigned identifier.
    pub uuid: Option<ImageUuid>,
    /// Hosted URL, when the image is returned by reference.
    pub url: Option<String>,
    /// Base64-encoded image bytes, when returned inline.
    pub data: Option<String>,
    /// Pixel width.
    pub width: Option<u32>,
    /// Pixel height.
    pub height: Option<u32>,
    /// Captions generated for this image.
    pub captions: Option<Vec<String>>,
}

impl DesignImage {
    /// Decode the inline base64 [`data`] field, if present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DecodeError`] if the field holds invalid base64.
    ///
    /// [`data`]: DesignImage::data
    pub fn decoded_data(&self) -> Result<Option<Bytes>> {
        match &self.data {
            Some(data) => {
                let decoded = general_purpose::STANDARD.decode(data)?;
                Ok(Some(Bytes::from(decoded)))
            }
            None => Ok(None),
        }
    }
}
