//! Declarative input schema for plugin hosts.
//!
//! Image-pipeline hosts discover a node's inputs before running it: which
//! widgets to draw, their defaults, ranges, and choice catalogues. The
//! [`NodeSchema`] here describes the staging node in a host-neutral,
//! serializable form, with the choice catalogues taken straight from
//! [`restage_core::types`].

use restage_core::types::{ColorScheme, DesignStyle, RoomType, SpecialityDecor};
use serde::Serialize;

/// Registration name of the staging node.
pub const NODE_NAME: &str = "StagingNode";

/// Name shown in host menus.
pub const NODE_DISPLAY_NAME: &str = "Virtual Staging";

/// Host menu category grouping Restage nodes.
pub const NODE_CATEGORY: &str = "Restage";

/// Declared output of the staging node: a batch of images.
pub const NODE_RETURNS: &str = "images";

/// Placeholder entry hosts show for "no selection" in optional catalogues.
pub const CHOICE_NONE: &str = "none";

/// Widget kind of one input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Decoded raster image.
    Image,
    /// Free-form string.
    String {
        /// Value used when the host leaves the widget untouched.
        default: &'static str,
    },
    /// Integer with inclusive bounds.
    Integer {
        /// Value used when the host leaves the widget untouched.
        default: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// Float with inclusive bounds.
    Float {
        /// Value used when the host leaves the widget untouched.
        default: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },
    /// One value out of a fixed catalogue.
    Choice {
        /// Accepted values, in catalogue order.
        options: Vec<String>,
    },
}

impl FieldKind {
    /// String input with a default.
    #[must_use]
    pub const fn string(default: &'static str) -> Self {
        Self::String { default }
    }

    /// Bounded integer input.
    #[must_use]
    pub const fn integer(default: i64, min: i64, max: i64) -> Self {
        Self::Integer { default, min, max }
    }

    /// Bounded float input.
    #[must_use]
    pub const fn float(default: f64, min: f64, max: f64) -> Self {
        Self::Float { default, min, max }
    }

    /// Catalogue of accepted values.
    #[must_use]
    pub fn choice<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choice {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Catalogue prefixed with [`CHOICE_NONE`], for optional selections.
    #[must_use]
    pub fn choice_or_none<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choice {
            options: std::iter::once(CHOICE_NONE.to_string())
                .chain(options.into_iter().map(Into::into))
                .collect(),
        }
    }
}

/// One named input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    /// Field name as the host shows it.
    pub name: &'static str,
    /// Widget kind.
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldDef {
    /// Create a named field.
    #[must_use]
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Host-neutral description of the staging node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSchema {
    /// Registration name.
    pub name: &'static str,
    /// Name shown in host menus.
    pub display_name: &'static str,
    /// Host menu category.
    pub category: &'static str,
    /// Inputs the host must supply.
    pub required: Vec<FieldDef>,
    /// Inputs the host may supply.
    pub optional: Vec<FieldDef>,
    /// Declared output.
    pub returns: &'static str,
}

impl NodeSchema {
    /// Schema of the virtual staging node.
    ///
    /// The API key is client configuration, not a widget, so the only
    /// required input is the image itself. The zero defaults on `seed`,
    /// `guidance_scale`, and `num_inference_steps` mean "let the service
    /// decide" and are not forwarded.
    #[must_use]
    pub fn staging() -> Self {
        Self {
            name: NODE_NAME,
            display_name: NODE_DISPLAY_NAME,
            category: NODE_CATEGORY,
            required: vec![FieldDef::new("image", FieldKind::Image)],
            optional: vec![
                FieldDef::new("prompt", FieldKind::string("")),
                FieldDef::new(
                    "room_type",
                    FieldKind::choice(RoomType::all().iter().map(RoomType::as_str)),
                ),
                FieldDef::new(
                    "design_style",
                    FieldKind::choice(DesignStyle::all().iter().map(DesignStyle::as_str)),
                ),
                FieldDef::new("prompt_prefix", FieldKind::string("")),
                FieldDef::new("prompt_suffix", FieldKind::string("")),
                FieldDef::new("negative_prompt", FieldKind::string("")),
                FieldDef::new(
                    "seed",
                    FieldKind::integer(0, 0, i64::from(u32::MAX)),
                ),
                FieldDef::new(
                    "color_scheme",
                    FieldKind::choice_or_none(ColorScheme::all().map(|c| c.to_string())),
                ),
                FieldDef::new(
                    "speciality_decor",
                    FieldKind::choice_or_none(SpecialityDecor::all().map(|d| d.to_string())),
                ),
                FieldDef::new("guidance_scale", FieldKind::float(0.0, 0.0, 20.0)),
                FieldDef::new("num_inference_steps", FieldKind::integer(0, 0, 75)),
                FieldDef::new("num_images", FieldKind::integer(1, 1, 4)),
                FieldDef::new("scale_factor", FieldKind::integer(1, 1, 8)),
            ],
            returns: NODE_RETURNS,
        }
    }

    /// Look up an optional field by name.
    #[must_use]
    pub fn optional_field(&self, name: &str) -> Option<&FieldDef> {
        self.optional.iter().find(|field| field.name == name)
    }
}
