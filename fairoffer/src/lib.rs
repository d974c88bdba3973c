//! # fairoffer
//!
//! The questionnaire engine behind a cash-offer intake flow. Backend-agnostic:
//! this crate owns the step sequencing, the per-step field schema, validation,
//! and the provisional offer estimate, while rendering, routing, and transport
//! belong to whatever presentation layer sits on top.
//!
//! ## Usage
//!
//! ```rust
//! use fairoffer::{
//!     AnswerPatch, MemoryStore, PropertyType, QuestionnaireSession, SubmissionPipeline,
//!     validate_step,
//! };
//!
//! # async fn run() -> Result<(), fairoffer::SubmitError> {
//! let mut session = QuestionnaireSession::new();
//! session.update(AnswerPatch {
//!     property_type: Some(PropertyType::Residential),
//!     ..AnswerPatch::default()
//! });
//!
//! // Advance only when the current step's required fields check out.
//! let errors = validate_step(session.current_step(), session.record());
//! if errors.is_empty() {
//!     session.next_step();
//! }
//!
//! // ...after all eight steps:
//! let store = MemoryStore::new();
//! let pipeline = SubmissionPipeline::new();
//! let result = pipeline.submit("submission", session.record(), &store).await?;
//! println!("estimated offer: ${}", result.estimated_offer);
//! # Ok(())
//! # }
//! ```
//!
//! ## Flow
//!
//! Data moves one direction: presentation input is merged into the
//! [`QuestionnaireSession`], [`validate_step`] gates each forward transition,
//! and after the final step the [`SubmissionPipeline`] freezes the record,
//! derives the estimate, and persists the result through a
//! [`SubmissionStore`].

// Re-export all types from fairoffer-types
pub use fairoffer_types::*;

mod schema;
pub use schema::{Step, StepFields, TOTAL_STEPS, details_fields, step_fields, subtype_options};

mod session;
pub use session::QuestionnaireSession;

mod validate;
pub use validate::validate_step;

mod estimate;
pub use estimate::estimate;

mod submit;
pub use submit::{
    MemoryStore, SubmissionPipeline, SubmissionResult, SubmissionStore, SubmitError,
};
