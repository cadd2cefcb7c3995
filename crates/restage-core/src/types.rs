//! Restage domain vocabulary.
//!
//! This module provides the catalogues of values understood by the Restage
//! API: room types, design styles, color palettes, speciality decor themes,
//! sky types, yard types, garden styles, and render types. Each type
//! serializes to the exact string the API expects on the wire.
//!
//! The catalogues are a convenience, not a gate: the server remains the
//! authority on accepted values, and requests carry plain strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Macro to generate enum types with fixed wire spellings.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = $wire]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire representation sent to the API.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Returns all values in catalogue order.
            #[must_use]
            pub const fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(Error::ValidationError(format!(
                        concat!("Unknown ", $label, ": {}"),
                        s
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_enum!(
    /// Room types supported by the API.
    RoomType, "room type" {
        LivingRoom => "livingroom",
        Kitchen => "kitchen",
        DiningRoom => "diningroom",
        Bedroom => "bedroom",
        Bathroom => "bathroom",
        KidsRoom => "kidsroom",
        FamilyRoom => "familyroom",
        ReadingNook => "readingnook",
        Sunroom => "sunroom",
        WalkInCloset => "walkincloset",
        Mudroom => "mudroom",
        ToyRoom => "toyroom",
        Office => "office",
        Foyer => "foyer",
        PowderRoom => "powderroom",
        LaundryRoom => "laundryroom",
        Gym => "gym",
        Basement => "basement",
        Garage => "garage",
        Balcony => "balcony",
        Cafe => "cafe",
        HomeBar => "homebar",
        StudyRoom => "study_room",
        FrontPorch => "front_porch",
        BackPorch => "back_porch",
        BackPatio => "back_patio",
        OpenPlan => "openplan",
        Boardroom => "boardroom",
        MeetingRoom => "meetingroom",
        OpenWorkspace => "openworkspace",
        PrivateOffice => "privateoffice",
    }
);

string_enum!(
    /// Design styles supported by the API.
    DesignStyle, "design style" {
        Minimalist => "minimalist",
        Scandinavian => "scandinavian",
        Industrial => "industrial",
        Boho => "boho",
        Traditional => "traditional",
        ArtDeco => "artdeco",
        MidCenturyModern => "midcenturymodern",
        Coastal => "coastal",
        Tropical => "tropical",
        Eclectic => "eclectic",
        Contemporary => "contemporary",
        FrenchCountry => "frenchcountry",
        Rustic => "rustic",
        ShabbyChic => "shabbychic",
        Vintage => "vintage",
        Country => "country",
        Modern => "modern",
        AsianZen => "asian_zen",
        HollywoodRegency => "hollywoodregency",
        Bauhaus => "bauhaus",
        Mediterranean => "mediterranean",
        Farmhouse => "farmhouse",
        Victorian => "victorian",
        Gothic => "gothic",
        Moroccan => "moroccan",
        Southwestern => "southwestern",
        Transitional => "transitional",
        Maximalist => "maximalist",
        Arabic => "arabic",
        Japandi => "japandi",
        Retrofuturism => "retrofuturism",
        ArtNouveau => "artnouveau",
        UrbanModern => "urbanmodern",
        WabiSabi => "wabi_sabi",
        Grandmillennial => "grandmillennial",
        CoastalGrandmother => "coastalgrandmother",
        NewTraditional => "newtraditional",
        Cottagecore => "cottagecore",
        LuxeModern => "luxemodern",
        HighTech => "high_tech",
        OrganicModern => "organicmodern",
        Tuscan => "tuscan",
        Cabin => "cabin",
        DesertModern => "desertmodern",
        Global => "global",
        IndustrialChic => "industrialchic",
        ModernFarmhouse => "modernfarmhouse",
        EuropeanClassic => "europeanclassic",
        NeoTraditional => "neotraditional",
        WarmMinimalist => "warmminimalist",
    }
);

string_enum!(
    /// Sky types for sky replacement.
    SkyType, "sky type" {
        Day => "day",
        Dusk => "dusk",
        Night => "night",
    }
);

string_enum!(
    /// Yard types for landscaping design.
    YardType, "yard type" {
        FrontYard => "Front Yard",
        Backyard => "Backyard",
        SideYard => "Side Yard",
    }
);

string_enum!(
    /// Garden styles for landscaping design.
    GardenStyle, "garden style" {
        JapaneseZen => "japanese_zen",
        Mediterranean => "mediterranean",
        EnglishCottage => "english_cottage",
        Tropical => "tropical",
        Desert => "desert",
        ModernMinimalist => "modern_minimalist",
        FrenchFormal => "french_formal",
        Coastal => "coastal",
        Woodland => "woodland",
        Prairie => "prairie",
        RockGarden => "rock_garden",
        WaterGarden => "water_garden",
        HerbGarden => "herb_garden",
        CuttingGarden => "cutting_garden",
        Pollinator => "pollinator",
        Xeriscape => "xeriscape",
        EdibleLandscape => "edible_landscape",
        MoonGarden => "moon_garden",
        RainGarden => "rain_garden",
        Sensory => "sensory",
        NativePlant => "native_plant",
        CottageStyle => "cottage_style",
        FormalParterre => "formal_parterre",
        Naturalistic => "naturalistic",
        Contemporary => "contemporary",
        AsianFusion => "asian_fusion",
        RusticFarmhouse => "rustic_farmhouse",
        UrbanModern => "urban_modern",
        Sustainable => "sustainable",
        WildlifeHabitat => "wildlife_habitat",
        FourSeason => "four_season",
    }
);

string_enum!(
    /// Render types for sketch to 3D rendering.
    RenderType, "render type" {
        Perspective => "perspective",
        Isometric => "isometric",
    }
);

/// Number of predefined color palettes.
pub const COLOR_SCHEME_COUNT: u8 = 21;

/// Number of speciality decor themes.
pub const SPECIALITY_DECOR_COUNT: u8 = 8;

/// Predefined color palette, sent as `COLOR_SCHEME_<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorScheme(u8);

impl ColorScheme {
    /// Create a palette reference from its index.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the index is out of range.
    pub fn new(index: u8) -> Result<Self> {
        if index < COLOR_SCHEME_COUNT {
            Ok(Self(index))
        } else {
            Err(Error::ValidationError(format!(
                "Color scheme index out of range: {index}"
            )))
        }
    }

    /// Returns the palette index.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Returns all palettes in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..COLOR_SCHEME_COUNT).map(Self)
    }
}

impl FromStr for ColorScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.strip_prefix("COLOR_SCHEME_")
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| Error::ValidationError(format!("Unknown color scheme: {s}")))
            .and_then(Self::new)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "COLOR_SCHEME_{}", self.0)
    }
}

impl Serialize for ColorScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorScheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Speciality decor theme, sent as `SPECIALITY_DECOR_<n>`.
///
/// Themes cover seasonal and thematic decoration (holiday staging and the
/// like); `SPECIALITY_DECOR_0` means none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialityDecor(u8);

impl SpecialityDecor {
    /// Create a decor theme reference from its index.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the index is out of range.
    pub fn new(index: u8) -> Result<Self> {
        if index < SPECIALITY_DECOR_COUNT {
            Ok(Self(index))
        } else {
            Err(Error::ValidationError(format!(
                "Speciality decor index out of range: {index}"
            )))
        }
    }

    /// Returns the theme index.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Returns all themes in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SPECIALITY_DECOR_COUNT).map(Self)
    }
}

impl FromStr for SpecialityDecor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.strip_prefix("SPECIALITY_DECOR_")
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| Error::ValidationError(format!("Unknown speciality decor: {s}")))
            .and_then(Self::new)
    }
}

impl fmt::Display for SpecialityDecor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SPECIALITY_DECOR_{}", self.0)
    }
}

impl Serialize for SpecialityDecor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpecialityDecor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
