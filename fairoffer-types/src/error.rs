use crate::FieldId;

/// A field-scoped validation failure.
///
/// These are values, not exceptions: the validator returns every failing
/// field for a step at once, the presentation layer renders the messages
/// next to the offending inputs, and the forward transition is blocked
/// until the list comes back empty. They never abort anything and never
/// block backward navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// The field the message belongs to.
    pub field: FieldId,

    /// Human-readable message for display next to the field.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
