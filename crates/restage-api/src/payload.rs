//! Insertion-ordered request bodies.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// A request body under construction.
///
/// Fields serialize in insertion order, and the `insert_*` helpers implement
/// the inclusion rules from [`crate::operation`]: optional fields are omitted
/// rather than serialized as `null`, defaults are suppressed where the
/// service expects that, and flags travel only when set.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    fields: Vec<(&'static str, Value)>,
}

impl Payload {
    /// Create an empty payload.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field unconditionally.
    pub fn insert(&mut self, name: &'static str, value: impl Into<Value>) {
        self.fields.push((name, value.into()));
    }

    /// Append a field only when a value is present.
    pub fn insert_opt(&mut self, name: &'static str, value: Option<impl Into<Value>>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    /// Append a field only when it differs from its default.
    pub fn insert_nondefault<T>(&mut self, name: &'static str, value: T, default: T)
    where
        T: Into<Value> + PartialEq,
    {
        if value != default {
            self.insert(name, value);
        }
    }

    /// Append a boolean field only when `true`.
    pub fn insert_flag(&mut self, name: &'static str, value: bool) {
        if value {
            self.insert(name, value);
        }
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Number of fields that will be serialized.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the payload holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render every field as a text form part for multipart transport.
    ///
    /// Strings pass through verbatim; other values use their JSON rendering
    /// (`4`, `7.5`, `true`).
    #[must_use]
    pub fn into_text_fields(self) -> Vec<(&'static str, String)> {
        self.fields
            .into_iter()
            .map(|(name, value)| match value {
                Value::String(text) => (name, text),
                other => (name, other.to_string()),
            })
            .collect()
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_rules() {
        let mut payload = Payload::new();
        payload.insert("input_image_url", "https://example.com/room.jpg");
        payload.insert_opt("prompt", Some("mid-century lounge"));
        payload.insert_opt("mask_info", None::<String>);
        payload.insert_nondefault("num_images", 1u8, 1u8);
        payload.insert_nondefault("scale_factor", 4u8, 2u8);
        payload.insert_flag("keep_original_dimensions", false);
        payload.insert_flag("beta", true);

        assert_eq!(payload.len(), 4);
        assert_eq!(
            payload.get("input_image_url"),
            Some(&json!("https://example.com/room.jpg"))
        );
        assert_eq!(payload.get("prompt"), Some(&json!("mid-century lounge")));
        assert!(payload.get("mask_info").is_none());
        assert!(payload.get("num_images").is_none());
        assert_eq!(payload.get("scale_factor"), Some(&json!(4)));
        assert!(payload.get("keep_original_dimensions").is_none());
        assert_eq!(payload.get("beta"), Some(&json!(true)));
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut payload = Payload::new();
        payload.insert("zeta", 1);
        payload.insert("alpha", 2);
        payload.insert("mid", "three");

        let body = serde_json::to_string(&payload).unwrap();
        assert_eq!(body, r#"{"zeta":1,"alpha":2,"mid":"three"}"#);
    }

    #[test]
    fn test_round_trips_without_coercion() {
        let mut payload = Payload::new();
        payload.insert("num_images", 4u8);
        payload.insert("guidance_scale", 7.5);
        payload.insert("seed", 0u64);
        payload.insert("room_type", "livingroom");
        payload.insert("keep_original_dimensions", true);

        let body = serde_json::to_string(&payload).unwrap();
        let parsed: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(parsed["num_images"], json!(4));
        assert_eq!(parsed["guidance_scale"], json!(7.5));
        assert_eq!(parsed["seed"], json!(0));
        assert_eq!(parsed["room_type"], json!("livingroom"));
        assert_eq!(parsed["keep_original_dimensions"], json!(true));
        assert_eq!(parsed.as_object().unwrap().len(), payload.len());
    }

    #[test]
    fn test_into_text_fields() {
        let mut payload = Payload::new();
        payload.insert("room_type", "livingroom");
        payload.insert("num_images", 2u8);
        payload.insert("guidance_scale", 7.5);
        payload.insert("keep_original_dimensions", true);

        let fields = payload.into_text_fields();
        assert_eq!(
            fields,
            vec![
                ("room_type", "livingroom".to_string()),
                ("num_images", "2".to_string()),
                ("guidance_scale", "7.5".to_string()),
                ("keep_original_dimensions", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_payload() {
        let payload = Payload::default();
        assert!(payload.is_empty());
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }
}
