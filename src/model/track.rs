use plist::{Dictionary, Value};

/// A single track record: the library-assigned id plus the raw field
/// dictionary as stored in the library file.
///
/// Tracks carry an open field set rather than a fixed schema; the
/// export layer decides which fields to read and how to render them.
#[derive(Debug, Clone)]
pub struct Track {
    /// Library-assigned track identifier (string form of an integer)
    id: String,

    /// Field name -> value, exactly as decoded from the library file
    fields: Dictionary,
}

impl Track {
    /// Create a track from its catalog id and decoded field dictionary
    pub fn new(id: String, fields: Dictionary) -> Self {
        Self { id, fields }
    }

    /// The library-assigned track identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up a raw field value by its library key
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let mut fields = Dictionary::new();
        fields.insert("Name".to_string(), Value::String("Test Song".to_string()));
        fields.insert("Size".to_string(), Value::Integer(5000000i64.into()));

        let track = Track::new("1001".to_string(), fields);

        assert_eq!(track.id(), "1001");
        assert_eq!(
            track.field("Name").and_then(Value::as_string),
            Some("Test Song")
        );
        assert!(track.field("Composer").is_none());
    }
}
