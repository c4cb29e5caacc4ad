//! Extra-field providers
//!
//! A [`FieldProvider`] contributes one key/value pair to every record emitted
//! through the logger that owns it. The built-in providers are [`StaticField`]
//! here and the elapsed-time/request-id pair in the request module; anything
//! implementing the trait can be attached the same way.

use super::record::Record;

pub trait FieldProvider: Send + Sync {
    /// Contribute this provider's field to an in-flight record.
    fn apply(&self, record: &mut Record);

    /// Clone through the boxed trait object, so loggers that own a provider
    /// list stay cheaply clonable.
    fn clone_box(&self) -> Box<dyn FieldProvider>;
}

impl Clone for Box<dyn FieldProvider> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Fixed key/value attached at configuration time.
#[derive(Debug, Clone)]
pub struct StaticField {
    key: String,
    value: String,
}

impl StaticField {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

impl FieldProvider for StaticField {
    fn apply(&self, record: &mut Record) {
        record.set_field(self.key.as_str(), self.value.as_str());
    }

    fn clone_box(&self) -> Box<dyn FieldProvider> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::LogLevel;
    use crate::core::record::FieldValue;

    #[test]
    fn test_static_field_applies_once() {
        let provider = StaticField::new("app", "portfolio");
        let mut record = Record::new(LogLevel::Info, "x".to_string());

        provider.apply(&mut record);
        provider.apply(&mut record);

        assert_eq!(record.fields().len(), 1);
        assert_eq!(
            record.field("app"),
            Some(&FieldValue::String("portfolio".into()))
        );
    }

    #[test]
    fn test_boxed_clone() {
        let boxed: Box<dyn FieldProvider> = Box::new(StaticField::new("k", "v"));
        let cloned = boxed.clone();

        let mut record = Record::new(LogLevel::Info, "x".to_string());
        cloned.apply(&mut record);
        assert!(record.field("k").is_some());
    }
}
