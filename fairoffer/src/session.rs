use crate::{AnswerPatch, AnswerRecord, Step};

/// One seller's questionnaire session: the accumulating [`AnswerRecord`]
/// plus the current step pointer.
///
/// The session is an explicitly owned object, created at session start and
/// either discarded at the end or wiped with [`reset`](Self::reset). Exactly
/// one writer mutates it (the presentation layer, serialized by its event
/// model); nothing else aliases the record.
///
/// The step machine itself performs no validation. Callers gate
/// [`next_step`](Self::next_step) with
/// [`validate_step`](crate::validate_step), which keeps the machine reusable
/// under different validation policies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionnaireSession {
    record: AnswerRecord,
    current_step: Step,
}

impl QuestionnaireSession {
    /// Create a fresh session at step one with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The answers collected so far.
    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    /// The step currently shown.
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    /// Merge a partial update into the record. Never validates, never fails.
    pub fn update(&mut self, patch: AnswerPatch) {
        self.record.apply(patch);
    }

    /// Toggle a tag in the recent-updates set.
    pub fn toggle_recent_update(&mut self, tag: &str) {
        self.record.recent_updates.toggle(tag);
    }

    /// Toggle a tag in the special-features set.
    pub fn toggle_special_feature(&mut self, tag: &str) {
        self.record.special_features.toggle(tag);
    }

    /// Advance one step; a no-op on the last step.
    ///
    /// Call only after the current step validated clean — the machine
    /// trusts its caller and does not re-check.
    pub fn next_step(&mut self) {
        self.current_step = self.current_step.next();
        tracing::debug!(step = self.current_step.index(), "advanced");
    }

    /// Go back one step; a no-op on the first step. Never validates — the
    /// seller may always navigate backwards.
    pub fn prev_step(&mut self) {
        self.current_step = self.current_step.prev();
        tracing::debug!(step = self.current_step.index(), "went back");
    }

    /// Jump directly to a 1-based step index, clamped into range.
    ///
    /// Bypasses validation; meant for restoring a session to a step that
    /// was already completed.
    pub fn set_step(&mut self, index: u8) {
        self.current_step = Step::from_index(index);
        tracing::debug!(step = self.current_step.index(), "jumped");
    }

    /// Discard all answers and return to step one. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("session reset");
    }
}
