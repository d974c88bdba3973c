use crate::{Condition, ContactMethod, PropertyType, TagSet, Timeline};

/// The single record of answers accumulated over one questionnaire session.
///
/// Every field starts empty or unset and is filled in as the seller works
/// through the steps. Fields that do not apply to the chosen
/// [`PropertyType`] may hold stale values from an earlier choice; they are
/// never required and never affect the offer estimate.
///
/// Free-text and bucketed-label fields are plain strings where the empty
/// string means "not answered yet". Enumerated answers use `Option` so an
/// unanswered state cannot be confused with a real choice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerRecord {
    /// The discriminant chosen in step one.
    pub property_type: Option<PropertyType>,

    // Basic information
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    // Property details
    pub subtype: String,
    pub square_footage: String,
    pub lot_size: String,
    pub year_built: String,
    pub bedrooms: String,
    pub bathrooms: String,

    // Business details
    pub business_type: String,
    pub annual_revenue: String,
    pub years_in_operation: String,
    pub number_of_employees: String,

    // Condition and features
    pub condition: Option<Condition>,
    pub recent_updates: TagSet,
    pub special_features: TagSet,

    // Financial
    /// Bucketed range label, one of [`CURRENT_VALUE_RANGES`](crate::CURRENT_VALUE_RANGES).
    pub current_value: String,
    /// Bucketed range label, one of [`MORTGAGE_BALANCE_RANGES`](crate::MORTGAGE_BALANCE_RANGES).
    pub mortgage_balance: String,
    pub reason_for_selling: String,

    // Timeline
    pub desired_timeline: Option<Timeline>,

    // Contact
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact: Option<ContactMethod>,

    /// Free text, always optional.
    pub additional_info: String,
}

impl AnswerRecord {
    /// Create a record with every field empty or unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a partial update into this record.
    ///
    /// Each present patch field replaces the stored value wholesale. Absent
    /// fields are untouched. The two tag sets are not part of the patch;
    /// they only change through toggles.
    pub fn apply(&mut self, patch: AnswerPatch) {
        fn merge(slot: &mut String, value: Option<String>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if let Some(property_type) = patch.property_type {
            self.property_type = Some(property_type);
        }
        if let Some(condition) = patch.condition {
            self.condition = Some(condition);
        }
        if let Some(desired_timeline) = patch.desired_timeline {
            self.desired_timeline = Some(desired_timeline);
        }
        if let Some(preferred_contact) = patch.preferred_contact {
            self.preferred_contact = Some(preferred_contact);
        }

        merge(&mut self.address, patch.address);
        merge(&mut self.city, patch.city);
        merge(&mut self.state, patch.state);
        merge(&mut self.zip_code, patch.zip_code);
        merge(&mut self.subtype, patch.subtype);
        merge(&mut self.square_footage, patch.square_footage);
        merge(&mut self.lot_size, patch.lot_size);
        merge(&mut self.year_built, patch.year_built);
        merge(&mut self.bedrooms, patch.bedrooms);
        merge(&mut self.bathrooms, patch.bathrooms);
        merge(&mut self.business_type, patch.business_type);
        merge(&mut self.annual_revenue, patch.annual_revenue);
        merge(&mut self.years_in_operation, patch.years_in_operation);
        merge(&mut self.number_of_employees, patch.number_of_employees);
        merge(&mut self.current_value, patch.current_value);
        merge(&mut self.mortgage_balance, patch.mortgage_balance);
        merge(&mut self.reason_for_selling, patch.reason_for_selling);
        merge(&mut self.first_name, patch.first_name);
        merge(&mut self.last_name, patch.last_name);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.additional_info, patch.additional_info);
    }
}

/// A partial update to an [`AnswerRecord`], typically one step's worth of
/// answers.
///
/// Construct with struct-update syntax:
///
/// ```
/// use fairoffer_types::AnswerPatch;
///
/// let patch = AnswerPatch {
///     address: Some("1247 Oak Valley Dr".to_string()),
///     city: Some("Austin".to_string()),
///     ..AnswerPatch::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerPatch {
    pub property_type: Option<PropertyType>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub subtype: Option<String>,
    pub square_footage: Option<String>,
    pub lot_size: Option<String>,
    pub year_built: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub business_type: Option<String>,
    pub annual_revenue: Option<String>,
    pub years_in_operation: Option<String>,
    pub number_of_employees: Option<String>,
    pub condition: Option<Condition>,
    pub current_value: Option<String>,
    pub mortgage_balance: Option<String>,
    pub reason_for_selling: Option<String>,
    pub desired_timeline: Option<Timeline>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferred_contact: Option<ContactMethod>,
    pub additional_info: Option<String>,
}
