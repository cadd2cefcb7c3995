//! Module-level functions backed by a shared default client.
//!
//! These mirror the one-call-per-operation surface of the original SDKs. The
//! first call builds a [`RestageClient`] from the `RESTAGE_API_KEY`
//! environment variable and every later call reuses it. The shared client is
//! read-only after construction and cannot be swapped; use
//! [`RestageClient::builder`] directly when a different key, base URL, or
//! timeout is needed.

use crate::client::RestageClient;
use crate::models::{
    DesignImage, GenerateDesignsForRoomRequest, GenerateDesignsRequest,
    GenerateInspirationalDesignsRequest, LandscapingRequest, RemodelRequest, SketchRenderRequest,
};
use bytes::Bytes;
use once_cell::sync::OnceCell;
use restage_core::error::Result;
use restage_core::image::ImageSource;
use restage_core::types::{DesignStyle, RoomType, SkyType};

static DEFAULT_CLIENT: OnceCell<RestageClient> = OnceCell::new();

/// Shared default client, built from the environment on first use.
///
/// # Errors
///
/// Returns [`restage_core::Error::MissingApiKey`] if `RESTAGE_API_KEY` is
/// unset or empty. A failed initialization is not cached; the next call
/// tries again.
pub fn default_client() -> Result<&'static RestageClient> {
    DEFAULT_CLIENT.get_or_try_init(RestageClient::from_env)
}

/// Stage a room photograph. See [`RestageClient::generate_designs_for_room`].
///
/// # Errors
///
/// See [`RestageClient::generate_designs_for_room`].
pub async fn generate_designs_for_room(
    request: &GenerateDesignsForRoomRequest,
) -> Result<Vec<DesignImage>> {
    default_client()?.generate_designs_for_room(request).await
}

/// Generate room designs from scratch. See
/// [`RestageClient::generate_inspirational_designs`].
///
/// # Errors
///
/// See [`RestageClient::generate_inspirational_designs`].
pub async fn generate_inspirational_designs(
    request: &GenerateInspirationalDesignsRequest,
) -> Result<Vec<DesignImage>> {
    default_client()?
        .generate_inspirational_designs(request)
        .await
}

/// Stage an uploaded room image. See [`RestageClient::generate_designs`].
///
/// # Errors
///
/// See [`RestageClient::generate_designs`].
pub async fn generate_designs(request: &GenerateDesignsRequest) -> Result<Vec<DesignImage>> {
    default_client()?.generate_designs(request).await
}

/// Prime room walls by URL. See [`RestageClient::prime_walls_for_room`].
///
/// # Errors
///
/// See [`RestageClient::prime_walls_for_room`].
pub async fn prime_walls_for_room(
    input_image_url: impl Into<String>,
) -> Result<Vec<DesignImage>> {
    default_client()?.prime_walls_for_room(input_image_url).await
}

/// Prime uploaded room walls. See [`RestageClient::prime_the_room_walls`].
///
/// # Errors
///
/// See [`RestageClient::prime_the_room_walls`].
pub async fn prime_the_room_walls(input_image: &ImageSource) -> Result<Vec<DesignImage>> {
    default_client()?.prime_the_room_walls(input_image).await
}

/// Recolor room walls. See [`RestageClient::change_wall_color`].
///
/// # Errors
///
/// See [`RestageClient::change_wall_color`].
pub async fn change_wall_color(
    input_image_url: impl Into<String>,
    wall_color_hex_code: impl Into<String>,
) -> Result<Vec<DesignImage>> {
    default_client()?
        .change_wall_color(input_image_url, wall_color_hex_code)
        .await
}

/// Recolor kitchen cabinets. See
/// [`RestageClient::change_kitchen_cabinets_color`].
///
/// # Errors
///
/// See [`RestageClient::change_kitchen_cabinets_color`].
pub async fn change_kitchen_cabinets_color(
    input_image_url: impl Into<String>,
    cabinet_color_hex_code: impl Into<String>,
) -> Result<Vec<DesignImage>> {
    default_client()?
        .change_kitchen_cabinets_color(input_image_url, cabinet_color_hex_code)
        .await
}

/// Generate kitchen remodels. See [`RestageClient::remodel_kitchen`].
///
/// # Errors
///
/// See [`RestageClient::remodel_kitchen`].
pub async fn remodel_kitchen(request: &RemodelRequest) -> Result<Vec<DesignImage>> {
    default_client()?.remodel_kitchen(request).await
}

/// Generate bathroom remodels. See [`RestageClient::remodel_bathroom`].
///
/// # Errors
///
/// See [`RestageClient::remodel_bathroom`].
pub async fn remodel_bathroom(request: &RemodelRequest) -> Result<Vec<DesignImage>> {
    default_client()?.remodel_bathroom(request).await
}

/// Replace the sky in an exterior photograph. See
/// [`RestageClient::replace_sky_behind_house`].
///
/// # Errors
///
/// See [`RestageClient::replace_sky_behind_house`].
pub async fn replace_sky_behind_house(
    input_image_url: impl Into<String>,
    sky_type: SkyType,
) -> Result<Vec<DesignImage>> {
    default_client()?
        .replace_sky_behind_house(input_image_url, sky_type)
        .await
}

/// Generate landscaping designs. See
/// [`RestageClient::generate_landscaping_designs`].
///
/// # Errors
///
/// See [`RestageClient::generate_landscaping_designs`].
pub async fn generate_landscaping_designs(
    request: &LandscapingRequest,
) -> Result<Vec<DesignImage>> {
    default_client()?.generate_landscaping_designs(request).await
}

/// Remove objects from a room photograph. See
/// [`RestageClient::remove_objects_from_room`].
///
/// # Errors
///
/// See [`RestageClient::remove_objects_from_room`].
pub async fn remove_objects_from_room(
    input_image_url: impl Into<String>,
    mask_image_url: Option<&str>,
) -> Result<DesignImage> {
    default_client()?
        .remove_objects_from_room(input_image_url, mask_image_url)
        .await
}

/// Upscale an image. See [`RestageClient::upscale_image`].
///
/// # Errors
///
/// See [`RestageClient::upscale_image`].
pub async fn upscale_image(input_image: &ImageSource, scale_factor: u8) -> Result<Bytes> {
    default_client()?.upscale_image(input_image, scale_factor).await
}

/// Render a sketch as a 3D image. See [`RestageClient::sketch_to_3d_render`].
///
/// # Errors
///
/// See [`RestageClient::sketch_to_3d_render`].
pub async fn sketch_to_3d_render(request: &SketchRenderRequest) -> Result<Vec<DesignImage>> {
    default_client()?.sketch_to_3d_render(request).await
}

/// Generate captions for a room and style combination. See
/// [`RestageClient::generate_image_captions`].
///
/// # Errors
///
/// See [`RestageClient::generate_image_captions`].
#[deprecated(note = "the captions endpoint is no longer documented by the vendor")]
#[allow(deprecated)]
pub async fn generate_image_captions(
    room_type: RoomType,
    design_style: DesignStyle,
    num_captions: u8,
) -> Result<Vec<String>> {
    default_client()?
        .generate_image_captions(room_type, design_style, num_captions)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use restage_core::config::API_KEY_ENV;
    use restage_core::error::Error;

    // Env mutation and the process-global default client both live in this
    // single test to keep the suite parallel-safe.
    #[test]
    fn test_default_client_lifecycle() {
        std::env::remove_var(API_KEY_ENV);
        assert_eq!(default_client().unwrap_err(), Error::MissingApiKey);

        std::env::set_var(API_KEY_ENV, "sk-from-env");
        let first = default_client().unwrap();
        assert_eq!(first.base_url().as_str(), "https://api.restage.example/");

        // Failed initialization was not cached; successful initialization is.
        let second = default_client().unwrap();
        assert!(std::ptr::eq(first, second));

        std::env::remove_var(API_KEY_ENV);
        assert!(default_client().is_ok());
    }
}
