use crate::{FieldId, PropertyType};

/// Number of pages in the questionnaire.
pub const TOTAL_STEPS: u8 = 8;

/// The eight questionnaire pages, in order.
///
/// Steps are 1-indexed towards the outside world (`index`/`from_index`)
/// because that is how the presentation layer counts them ("Step 3 of 8").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    #[default]
    PropertyType,
    BasicInfo,
    PropertyDetails,
    Condition,
    Financial,
    Timeline,
    Contact,
    Additional,
}

impl Step {
    /// All steps, in questionnaire order.
    pub const ALL: [Self; TOTAL_STEPS as usize] = [
        Self::PropertyType,
        Self::BasicInfo,
        Self::PropertyDetails,
        Self::Condition,
        Self::Financial,
        Self::Timeline,
        Self::Contact,
        Self::Additional,
    ];

    /// The 1-based position of this step.
    pub fn index(self) -> u8 {
        match self {
            Self::PropertyType => 1,
            Self::BasicInfo => 2,
            Self::PropertyDetails => 3,
            Self::Condition => 4,
            Self::Financial => 5,
            Self::Timeline => 6,
            Self::Contact => 7,
            Self::Additional => 8,
        }
    }

    /// The step at a 1-based position, clamped into `[1, TOTAL_STEPS]`.
    pub fn from_index(index: u8) -> Self {
        match index.clamp(1, TOTAL_STEPS) {
            1 => Self::PropertyType,
            2 => Self::BasicInfo,
            3 => Self::PropertyDetails,
            4 => Self::Condition,
            5 => Self::Financial,
            6 => Self::Timeline,
            7 => Self::Contact,
            _ => Self::Additional,
        }
    }

    /// The following step; the last step is its own successor.
    pub fn next(self) -> Self {
        Self::from_index(self.index().saturating_add(1))
    }

    /// The preceding step; the first step is its own predecessor.
    pub fn prev(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    /// Page title for presentation.
    pub fn title(self) -> &'static str {
        match self {
            Self::PropertyType => "Property Type",
            Self::BasicInfo => "Basic Information",
            Self::PropertyDetails => "Property Details",
            Self::Condition => "Condition & Features",
            Self::Financial => "Financial Information",
            Self::Timeline => "Timeline",
            Self::Contact => "Contact Information",
            Self::Additional => "Additional Information",
        }
    }
}

/// The fields a step displays and the subset it requires.
///
/// `required` is always a subset of `visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepFields {
    /// Fields shown on this step.
    pub visible: &'static [FieldId],

    /// Fields that must be present and well-formed before advancing.
    pub required: &'static [FieldId],
}

/// The field set for the details step, keyed on the chosen property type.
///
/// This is the only step whose shape depends on the discriminant: each
/// property type shows its own slice of the detail superset, and in every
/// case only the subtype is required.
pub fn details_fields(property_type: PropertyType) -> StepFields {
    match property_type {
        PropertyType::Residential => StepFields {
            visible: &[
                FieldId::Subtype,
                FieldId::SquareFootage,
                FieldId::LotSize,
                FieldId::YearBuilt,
                FieldId::Bedrooms,
                FieldId::Bathrooms,
            ],
            required: &[FieldId::Subtype],
        },
        PropertyType::Commercial => StepFields {
            visible: &[
                FieldId::Subtype,
                FieldId::SquareFootage,
                FieldId::LotSize,
                FieldId::YearBuilt,
            ],
            required: &[FieldId::Subtype],
        },
        PropertyType::Land => StepFields {
            visible: &[FieldId::Subtype, FieldId::SquareFootage, FieldId::LotSize],
            required: &[FieldId::Subtype],
        },
        PropertyType::Business => StepFields {
            visible: &[
                FieldId::Subtype,
                FieldId::AnnualRevenue,
                FieldId::YearsInOperation,
                FieldId::NumberOfEmployees,
            ],
            required: &[FieldId::Subtype],
        },
    }
}

/// The field set for any step.
///
/// All steps except [`Step::PropertyDetails`] have a fixed shape and ignore
/// `property_type`; the details step defers to [`details_fields`].
///
/// # Panics
///
/// Panics when asked for the details step while `property_type` is `None`.
/// The details schema does not exist before the first step has been
/// completed, so reaching this case is a defect in the calling sequence,
/// not a runtime condition.
pub fn step_fields(step: Step, property_type: Option<PropertyType>) -> StepFields {
    match step {
        Step::PropertyType => StepFields {
            visible: &[FieldId::PropertyType],
            required: &[FieldId::PropertyType],
        },
        Step::BasicInfo => StepFields {
            visible: &[FieldId::Address, FieldId::City, FieldId::State, FieldId::ZipCode],
            required: &[FieldId::Address, FieldId::City, FieldId::State, FieldId::ZipCode],
        },
        Step::PropertyDetails => {
            let property_type = property_type
                .expect("details field set queried before a property type was chosen");
            details_fields(property_type)
        }
        Step::Condition => StepFields {
            visible: &[
                FieldId::Condition,
                FieldId::RecentUpdates,
                FieldId::SpecialFeatures,
            ],
            required: &[FieldId::Condition],
        },
        Step::Financial => StepFields {
            visible: &[
                FieldId::CurrentValue,
                FieldId::MortgageBalance,
                FieldId::ReasonForSelling,
            ],
            required: &[FieldId::CurrentValue, FieldId::ReasonForSelling],
        },
        Step::Timeline => StepFields {
            visible: &[FieldId::DesiredTimeline],
            required: &[FieldId::DesiredTimeline],
        },
        Step::Contact => StepFields {
            visible: &[
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::Email,
                FieldId::Phone,
                FieldId::PreferredContact,
            ],
            required: &[
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::Email,
                FieldId::Phone,
                FieldId::PreferredContact,
            ],
        },
        Step::Additional => StepFields {
            visible: &[FieldId::AdditionalInfo],
            required: &[],
        },
    }
}

/// Subtype options offered on the details step for each property type.
///
/// For [`PropertyType::Business`] the subtype select is labelled
/// "Business Type" and its options are business categories.
pub fn subtype_options(property_type: PropertyType) -> &'static [&'static str] {
    match property_type {
        PropertyType::Residential => &[
            "Single Family Home",
            "Condominium",
            "Townhouse",
            "Duplex/Triplex",
            "Apartment Building",
            "Mobile Home",
            "Other",
        ],
        PropertyType::Commercial => &[
            "Office Building",
            "Retail Space",
            "Warehouse",
            "Industrial",
            "Restaurant",
            "Hotel/Motel",
            "Mixed Use",
            "Other",
        ],
        PropertyType::Land => &[
            "Vacant Residential Lot",
            "Commercial Land",
            "Agricultural Land",
            "Industrial Land",
            "Recreational Land",
            "Other",
        ],
        PropertyType::Business => &[
            "Restaurant",
            "Retail Store",
            "Service Business",
            "Manufacturing",
            "Technology",
            "Healthcare",
            "Franchise",
            "Other",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_index(step.index()), step);
        }
    }

    #[test]
    fn from_index_clamps() {
        assert_eq!(Step::from_index(0), Step::PropertyType);
        assert_eq!(Step::from_index(99), Step::Additional);
    }

    #[test]
    fn next_and_prev_clamp_at_the_ends() {
        assert_eq!(Step::Additional.next(), Step::Additional);
        assert_eq!(Step::PropertyType.prev(), Step::PropertyType);
        assert_eq!(Step::BasicInfo.next(), Step::PropertyDetails);
        assert_eq!(Step::BasicInfo.prev(), Step::PropertyType);
    }

    #[test]
    fn details_require_exactly_the_subtype() {
        for property_type in PropertyType::ALL {
            let fields = details_fields(property_type);
            assert_eq!(fields.required, [FieldId::Subtype]);
        }
    }

    #[test]
    fn details_visible_fields_match_the_discriminant() {
        use FieldId::*;

        let residential = details_fields(crate::PropertyType::Residential);
        assert_eq!(
            residential.visible,
            [Subtype, SquareFootage, LotSize, YearBuilt, Bedrooms, Bathrooms]
        );

        let commercial = details_fields(crate::PropertyType::Commercial);
        assert_eq!(commercial.visible, [Subtype, SquareFootage, LotSize, YearBuilt]);

        let land = details_fields(crate::PropertyType::Land);
        assert_eq!(land.visible, [Subtype, SquareFootage, LotSize]);

        let business = details_fields(crate::PropertyType::Business);
        assert_eq!(
            business.visible,
            [Subtype, AnnualRevenue, YearsInOperation, NumberOfEmployees]
        );
    }

    #[test]
    fn required_is_subset_of_visible_everywhere() {
        for step in Step::ALL {
            let fields = step_fields(step, Some(PropertyType::Residential));
            for required in fields.required {
                assert!(
                    fields.visible.contains(required),
                    "{required} required but not visible on {step:?}"
                );
            }
        }
    }

    #[test]
    fn final_step_requires_nothing() {
        let fields = step_fields(Step::Additional, None);
        assert!(fields.required.is_empty());
    }
}
