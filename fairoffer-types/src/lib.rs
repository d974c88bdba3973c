//! Core types for the fairoffer questionnaire engine.
//!
//! This crate provides the presentation-agnostic data model:
//! - `AnswerRecord` and `AnswerPatch` - The accumulating answers and partial updates
//! - `PropertyType`, `Condition`, `Timeline`, `ContactMethod` - Enumerated answers
//! - `TagSet` - Order-stable string sets for multi-select fields
//! - `FieldId` and `FieldError` - Field identity and field-scoped validation failures

mod property_type;
pub use property_type::PropertyType;

mod options;
pub use options::{
    CURRENT_VALUE_RANGES, Condition, ContactMethod, MORTGAGE_BALANCE_RANGES,
    RECENT_UPDATE_OPTIONS, SELLING_REASONS, SPECIAL_FEATURE_OPTIONS, Timeline,
};

mod field;
pub use field::FieldId;

mod tag_set;
pub use tag_set::TagSet;

mod answer_record;
pub use answer_record::{AnswerPatch, AnswerRecord};

mod error;
pub use error::FieldError;
