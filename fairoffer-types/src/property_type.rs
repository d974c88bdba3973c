use std::fmt;

/// The category of property or business being sold.
///
/// Chosen in the first questionnaire step, this is the discriminant for the
/// details step: it decides which detail fields are shown and which are
/// required. A record where no category has been chosen yet holds `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// Houses, condos, townhomes, and other homes.
    Residential,

    /// Office, retail, industrial, and other commercial real estate.
    Commercial,

    /// Vacant or undeveloped land.
    Land,

    /// An operating business (sold with or without real estate).
    Business,
}

impl PropertyType {
    /// All concrete variants, in presentation order.
    pub const ALL: [Self; 4] = [Self::Residential, Self::Commercial, Self::Land, Self::Business];

    /// The wire name used as the stored answer value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Land => "land",
            Self::Business => "business",
        }
    }

    /// Human-readable title for presentation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential Property",
            Self::Commercial => "Commercial Real Estate",
            Self::Land => "Land",
            Self::Business => "Business",
        }
    }

    /// Parse a wire name back into a variant.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for variant in PropertyType::ALL {
            assert_eq!(PropertyType::from_str_opt(variant.as_str()), Some(variant));
        }
    }

    #[test]
    fn unknown_wire_name() {
        assert_eq!(PropertyType::from_str_opt("castle"), None);
    }
}
