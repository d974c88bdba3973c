use std::fmt;

/// Identifies a single field of the [`AnswerRecord`](crate::AnswerRecord).
///
/// Used by the schema registry to describe which fields a step shows and
/// requires, and by validation errors to say which field they concern.
/// `as_str` gives the stored wire name for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    PropertyType,

    // Basic information
    Address,
    City,
    State,
    ZipCode,

    // Property details
    Subtype,
    SquareFootage,
    LotSize,
    YearBuilt,
    Bedrooms,
    Bathrooms,

    // Business details
    BusinessType,
    AnnualRevenue,
    YearsInOperation,
    NumberOfEmployees,

    // Condition and features
    Condition,
    RecentUpdates,
    SpecialFeatures,

    // Financial
    CurrentValue,
    MortgageBalance,
    ReasonForSelling,

    // Timeline
    DesiredTimeline,

    // Contact
    FirstName,
    LastName,
    Email,
    Phone,
    PreferredContact,

    // Final step
    AdditionalInfo,
}

impl FieldId {
    /// The wire name of this field in the stored record.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PropertyType => "propertyType",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::Subtype => "propertySubtype",
            Self::SquareFootage => "squareFootage",
            Self::LotSize => "lotSize",
            Self::YearBuilt => "yearBuilt",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::BusinessType => "businessType",
            Self::AnnualRevenue => "annualRevenue",
            Self::YearsInOperation => "yearsInOperation",
            Self::NumberOfEmployees => "numberOfEmployees",
            Self::Condition => "condition",
            Self::RecentUpdates => "recentUpdates",
            Self::SpecialFeatures => "specialFeatures",
            Self::CurrentValue => "currentValue",
            Self::MortgageBalance => "mortgageBalance",
            Self::ReasonForSelling => "reasonForSelling",
            Self::DesiredTimeline => "desiredTimeline",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::PreferredContact => "preferredContact",
            Self::AdditionalInfo => "additionalInfo",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
