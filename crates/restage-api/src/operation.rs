//! Static descriptors for every Restage endpoint.
//!
//! Each endpoint is described by an [`Operation`]: its path, transport,
//! default timeout, and the body fields it accepts together with their
//! inclusion rules. The rules encode the conventions of the service: optional
//! fields are omitted rather than sent as `null`, a few numeric fields are
//! suppressed when they hold their default, and boolean flags travel only
//! when set.

use restage_core::http::{
    CAPTION_DEFAULT_TIMEOUT, EDIT_DEFAULT_TIMEOUT, GENERATION_DEFAULT_TIMEOUT,
    UPSCALE_DEFAULT_TIMEOUT,
};
use std::time::Duration;

/// How an operation's request body travels over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// JSON object body.
    Json,
    /// `multipart/form-data` body with the input image attached as a file part.
    Multipart,
}

/// Inclusion rule for a single body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Always serialized.
    Required,
    /// Serialized only when the caller supplied a value.
    Optional,
    /// Serialized only when the value differs from the given default.
    OptionalNonDefault(i64),
    /// Boolean serialized only when `true`.
    Flag,
}

/// A named body field and when it is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Inclusion rule.
    pub rule: FieldRule,
}

impl FieldSpec {
    /// Field that is always serialized.
    #[must_use]
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Required,
        }
    }

    /// Field serialized only when supplied.
    #[must_use]
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Optional,
        }
    }

    /// Field serialized only when it differs from `default`.
    #[must_use]
    pub const fn non_default(name: &'static str, default: i64) -> Self {
        Self {
            name,
            rule: FieldRule::OptionalNonDefault(default),
        }
    }

    /// Boolean field serialized only when `true`.
    #[must_use]
    pub const fn flag(name: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Flag,
        }
    }
}

/// Static description of one Restage endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, used in logs.
    pub name: &'static str,
    /// Endpoint path relative to the base URL.
    pub path: &'static str,
    /// Body encoding.
    pub transport: Transport,
    /// Default request timeout in seconds; a client-level override wins.
    pub timeout_secs: u64,
    /// Body fields accepted by the endpoint.
    pub fields: &'static [FieldSpec],
}

impl Operation {
    /// Look up a field by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Default timeout for this operation.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Stage a room photograph referenced by URL.
pub const GENERATE_DESIGNS_FOR_ROOM: Operation = Operation {
    name: "generate_designs_for_room",
    path: "/generate_designs_for_room",
    transport: Transport::Json,
    timeout_secs: GENERATION_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("input_image_url"),
        FieldSpec::optional("room_type"),
        FieldSpec::optional("design_style"),
        FieldSpec::required("num_images"),
        FieldSpec::optional("scale_factor"),
        FieldSpec::optional("color_scheme"),
        FieldSpec::optional("speciality_decor"),
        FieldSpec::optional("mask_info"),
        FieldSpec::optional("prompt"),
        FieldSpec::optional("seed"),
        FieldSpec::optional("guidance_scale"),
        FieldSpec::optional("num_inference_steps"),
        FieldSpec::optional("design_style_image_url"),
        FieldSpec::optional("design_style_image_strength"),
        FieldSpec::optional("design_creativity"),
        FieldSpec::optional("webhooks_data"),
        FieldSpec::optional("decor_items"),
    ],
};

/// Generate room designs from scratch, without an input photograph.
pub const GENERATE_INSPIRATIONAL_DESIGNS: Operation = Operation {
    name: "generate_inspirational_designs",
    path: "/generate_inspirational_designs",
    transport: Transport::Json,
    timeout_secs: GENERATION_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::optional("room_type"),
        FieldSpec::optional("design_style"),
        FieldSpec::required("num_images"),
        FieldSpec::optional("color_scheme"),
        FieldSpec::optional("speciality_decor"),
        FieldSpec::optional("prompt"),
        FieldSpec::optional("seed"),
        FieldSpec::optional("guidance_scale"),
        FieldSpec::optional("num_inference_steps"),
    ],
};

/// Legacy staging endpoint taking the image as a multipart upload.
pub const GENERATE_DESIGNS: Operation = Operation {
    name: "generate_designs",
    path: "/generate_designs",
    transport: Transport::Multipart,
    timeout_secs: GENERATION_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::optional("room_type"),
        FieldSpec::optional("design_style"),
        FieldSpec::required("num_images"),
        FieldSpec::optional("scale_factor"),
        FieldSpec::optional("num_captions"),
        FieldSpec::flag("keep_original_dimensions"),
        FieldSpec::optional("color_scheme"),
        FieldSpec::optional("speciality_decor"),
        FieldSpec::optional("prompt"),
        FieldSpec::optional("prompt_prefix"),
        FieldSpec::optional("prompt_suffix"),
        FieldSpec::optional("negative_prompt"),
        FieldSpec::optional("seed"),
        FieldSpec::optional("guidance_scale"),
        FieldSpec::optional("num_inference_steps"),
    ],
};

/// Prime room walls for staging, image referenced by URL.
pub const PRIME_WALLS_FOR_ROOM: Operation = Operation {
    name: "prime_walls_for_room",
    path: "/prime_walls_for_room",
    transport: Transport::Json,
    timeout_secs: EDIT_DEFAULT_TIMEOUT,
    fields: &[FieldSpec::required("input_image_url")],
};

/// Legacy wall-priming endpoint taking the image as a multipart upload.
pub const PRIME_THE_ROOM_WALLS: Operation = Operation {
    name: "prime_the_room_walls",
    path: "/prime_the_room_walls",
    transport: Transport::Multipart,
    timeout_secs: EDIT_DEFAULT_TIMEOUT,
    fields: &[],
};

/// Recolor the walls of a room photograph.
pub const CHANGE_WALL_COLOR: Operation = Operation {
    name: "change_wall_color",
    path: "/change_wall_color",
    transport: Transport::Json,
    timeout_secs: EDIT_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("input_image_url"),
        FieldSpec::required("wall_color_hex_code"),
    ],
};

/// Recolor kitchen cabinets.
pub const CHANGE_KITCHEN_CABINETS_COLOR: Operation = Operation {
    name: "change_kitchen_cabinets_color",
    path: "/change_kitchen_cabinets_color",
    transport: Transport::Json,
    timeout_secs: EDIT_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("input_image_url"),
        FieldSpec::required("cabinet_color_hex_code"),
    ],
};

/// Generate kitchen remodel designs.
pub const REMODEL_KITCHEN: Operation = Operation {
    name: "remodel_kitchen",
    path: "/remodel_kitchen",
    transport: Transport::Json,
    timeout_secs: GENERATION_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("input_image_url"),
        FieldSpec::required("design_style"),
        FieldSpec::non_default("num_images", 1),
        FieldSpec::optional("scale_factor"),
    ],
};

/// Generate bathroom remodel designs.
pub const REMODEL_BATHROOM: Operation = Operation {
    name: "remodel_bathroom",
    path: "/remodel_bathroom",
    transport: Transport::Json,
    timeout_secs: GENERATION_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("input_image_url"),
        FieldSpec::required("design_style"),
        FieldSpec::non_default("num_images", 1),
        FieldSpec::optional("scale_factor"),
    ],
};

/// Replace the sky in an exterior property photograph.
pub const REPLACE_SKY_BEHIND_HOUSE: Operation = Operation {
    name: "replace_sky_behind_house",
    path: "/replace_sky_behind_house",
    transport: Transport::Json,
    timeout_secs: EDIT_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("input_image_url"),
        FieldSpec::required("sky_type"),
    ],
};

/// Generate landscaping designs for a yard photograph.
pub const GENERATE_LANDSCAPING_DESIGNS: Operation = Operation {
    name: "generate_landscaping_designs",
    path: "/generate_landscaping_designs",
    transport: Transport::Json,
    timeout_secs: GENERATION_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("input_image_url"),
        FieldSpec::required("yard_type"),
        FieldSpec::required("garden_style"),
        FieldSpec::non_default("num_images", 1),
    ],
};

/// Remove furniture and objects from a room photograph.
pub const REMOVE_OBJECTS_FROM_ROOM: Operation = Operation {
    name: "remove_objects_from_room",
    path: "/remove_objects_from_room",
    transport: Transport::Json,
    timeout_secs: EDIT_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("input_image_url"),
        FieldSpec::optional("mask_image_url"),
    ],
};

/// Upscale an uploaded image.
pub const UPSCALE_IMAGE: Operation = Operation {
    name: "upscale_image",
    path: "/upscale_image",
    transport: Transport::Multipart,
    timeout_secs: UPSCALE_DEFAULT_TIMEOUT,
    fields: &[FieldSpec::required("scale_factor")],
};

/// Render a sketch or floor plan as a finished 3D image.
pub const SKETCH_TO_3D_RENDER: Operation = Operation {
    name: "sketch_to_3d_render",
    path: "/sketch_to_3d_render",
    transport: Transport::Json,
    timeout_secs: GENERATION_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("input_image_url"),
        FieldSpec::required("design_style"),
        FieldSpec::non_default("num_images", 1),
        FieldSpec::optional("scale_factor"),
        FieldSpec::optional("render_type"),
    ],
};

/// Generate captions for a room and style combination.
pub const GENERATE_IMAGE_CAPTIONS: Operation = Operation {
    name: "generate_image_captions",
    path: "/generate_image_captions",
    transport: Transport::Json,
    timeout_secs: CAPTION_DEFAULT_TIMEOUT,
    fields: &[
        FieldSpec::required("room_type"),
        FieldSpec::required("design_style"),
        FieldSpec::required("num_captions"),
    ],
};

/// Every operation the client can issue.
pub const ALL: &[&Operation] = &[
    &GENERATE_DESIGNS_FOR_ROOM,
    &GENERATE_INSPIRATIONAL_DESIGNS,
    &GENERATE_DESIGNS,
    &PRIME_WALLS_FOR_ROOM,
    &PRIME_THE_ROOM_WALLS,
    &CHANGE_WALL_COLOR,
    &CHANGE_KITCHEN_CABINETS_COLOR,
    &REMODEL_KITCHEN,
    &REMODEL_BATHROOM,
    &REPLACE_SKY_BEHIND_HOUSE,
    &GENERATE_LANDSCAPING_DESIGNS,
    &REMOVE_OBJECTS_FROM_ROOM,
    &UPSCALE_IMAGE,
    &SKETCH_TO_3D_RENDER,
    &GENERATE_IMAGE_CAPTIONS,
];
