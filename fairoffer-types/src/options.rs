use std::fmt;

/// The seller's assessment of the property's condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Move-in ready, recently updated.
    Excellent,

    /// Well-maintained, minor updates needed.
    Good,

    /// Some updates needed, livable condition.
    Fair,

    /// Significant repairs needed.
    Poor,
}

impl Condition {
    /// All variants, best to worst.
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    /// The wire name used as the stored answer value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Human-readable title for presentation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Parse a wire name back into a variant.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How quickly the seller wants to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeline {
    Asap,
    Days30,
    Days60,
    Days90,
    Flexible,
}

impl Timeline {
    /// All variants, soonest first.
    pub const ALL: [Self; 5] = [
        Self::Asap,
        Self::Days30,
        Self::Days60,
        Self::Days90,
        Self::Flexible,
    ];

    /// The wire name used as the stored answer value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asap => "asap",
            Self::Days30 => "30days",
            Self::Days60 => "60days",
            Self::Days90 => "90days",
            Self::Flexible => "flexible",
        }
    }

    /// Human-readable title for presentation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Asap => "ASAP",
            Self::Days30 => "30 Days",
            Self::Days60 => "60 Days",
            Self::Days90 => "90 Days",
            Self::Flexible => "Flexible",
        }
    }

    /// The longer description shown on the results summary.
    pub fn description(self) -> &'static str {
        match self {
            Self::Asap => "Within 1-2 weeks",
            Self::Days30 => "Within 30 days",
            Self::Days60 => "Within 60 days",
            Self::Days90 => "Within 90 days",
            Self::Flexible => "Flexible timeline",
        }
    }

    /// Parse a wire name back into a variant.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the seller prefers to be contacted about their offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactMethod {
    Email,
    Phone,
    Text,
}

impl ContactMethod {
    /// All variants, in presentation order.
    pub const ALL: [Self; 3] = [Self::Email, Self::Phone, Self::Text];

    /// The wire name used as the stored answer value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Text => "text",
        }
    }

    /// Parse a wire name back into a variant.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == s)
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucketed estimated-value ranges offered in the financial step.
///
/// The stored `currentValue` answer is one of these labels, not a number.
pub const CURRENT_VALUE_RANGES: &[&str] = &[
    "Under $100,000",
    "$100,000 - $250,000",
    "$250,000 - $500,000",
    "$500,000 - $750,000",
    "$750,000 - $1,000,000",
    "$1,000,000 - $2,000,000",
    "Over $2,000,000",
];

/// Bucketed mortgage-balance ranges offered in the financial step.
pub const MORTGAGE_BALANCE_RANGES: &[&str] = &[
    "No mortgage/Paid off",
    "Under $50,000",
    "$50,000 - $100,000",
    "$100,000 - $250,000",
    "$250,000 - $500,000",
    "$500,000 - $750,000",
    "Over $750,000",
];

/// Reasons for selling offered in the financial step.
pub const SELLING_REASONS: &[&str] = &[
    "Relocating for work",
    "Downsizing",
    "Upgrading to larger home",
    "Financial difficulties",
    "Inherited property",
    "Investment liquidation",
    "Divorce/separation",
    "Retirement",
    "Job loss",
    "Medical reasons",
    "Other",
];

/// Recent-update tags offered in the condition step.
pub const RECENT_UPDATE_OPTIONS: &[&str] = &[
    "New Roof",
    "Updated Kitchen",
    "Renovated Bathrooms",
    "New Flooring",
    "Fresh Paint",
    "New HVAC System",
    "Updated Electrical",
    "New Plumbing",
    "New Windows",
    "Landscaping",
];

/// Special-feature tags offered in the condition step.
pub const SPECIAL_FEATURE_OPTIONS: &[&str] = &[
    "Swimming Pool",
    "Garage",
    "Fireplace",
    "Deck/Patio",
    "Basement",
    "Attic Storage",
    "Security System",
    "Solar Panels",
    "Smart Home Features",
    "Workshop/Shed",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_round_trip() {
        for variant in Condition::ALL {
            assert_eq!(Condition::from_str_opt(variant.as_str()), Some(variant));
        }
    }

    #[test]
    fn timeline_round_trip() {
        for variant in Timeline::ALL {
            assert_eq!(Timeline::from_str_opt(variant.as_str()), Some(variant));
        }
    }

    #[test]
    fn contact_method_round_trip() {
        for variant in ContactMethod::ALL {
            assert_eq!(ContactMethod::from_str_opt(variant.as_str()), Some(variant));
        }
    }
}
