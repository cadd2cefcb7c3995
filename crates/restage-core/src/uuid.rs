//! Strongly-typed UUID wrapper for generated images.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Identifier assigned by the API to each generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUuid(Uuid);

impl ImageUuid {
    /// Creates a new wrapper from a [`Uuid`].
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Creates a new random UUID (v4).
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner [`Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Converts to the inner [`Uuid`].
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Parses a UUID from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse_str(input: &str) -> Result<Self> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|_| Error::InvalidUuid(input.to_string()))
    }
}

impl From<Uuid> for ImageUuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ImageUuid> for Uuid {
    fn from(wrapper: ImageUuid) -> Self {
        wrapper.0
    }
}

impl FromStr for ImageUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl fmt::Display for ImageUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<Uuid> for ImageUuid {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_UUID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_image_uuid_parse_str_valid() {
        let result = ImageUuid::parse_str(VALID_UUID);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().to_string(), VALID_UUID);
    }

    #[test]
    fn test_image_uuid_parse_str_invalid() {
        let result = ImageUuid::parse_str("not-a-uuid");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::InvalidUuid(_)));
    }

    #[test]
    fn test_image_uuid_new_v4() {
        let uuid = ImageUuid::new_v4();
        assert_eq!(uuid.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_image_uuid_from_str() {
        let result: Result<ImageUuid> = VALID_UUID.parse();
        assert!(result.is_ok());
    }

    #[test]
    fn test_image_uuid_conversions() {
        let raw = Uuid::parse_str(VALID_UUID).unwrap();
        let wrapped: ImageUuid = raw.into();
        assert_eq!(wrapped.as_uuid(), &raw);

        let back: Uuid = wrapped.into();
        assert_eq!(back, raw);
        assert_eq!(wrapped.into_uuid(), raw);
    }

    #[test]
    fn test_image_uuid_serde_transparent() {
        let uuid = ImageUuid::parse_str(VALID_UUID).unwrap();
        let json = serde_json::to_string(&uuid).unwrap();
        assert_eq!(json, format!("\"{VALID_UUID}\""));

        let parsed: ImageUuid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, uuid);
    }
}
