use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Daytime home-occupancy class, encoded as effective days at home per week.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occupancy {
    HomeAllDay,
    InHalfDay,
    Hybrid,
    OutDuringDay,
}

impl Occupancy {
    pub const fn days_at_home(self) -> u8 {
        match self {
            Self::HomeAllDay => 5,
            Self::InHalfDay => 3,
            Self::Hybrid => 2,
            Self::OutDuringDay => 1,
        }
    }

    /// Descriptive label as used by the band-keyed table encoding.
    pub const fn label(self) -> &'static str {
        match self {
            Self::HomeAllDay => "Home all day",
            Self::InHalfDay => "In half day",
            Self::Hybrid => "Hybrid",
            Self::OutDuringDay => "Out during day",
        }
    }

    /// Parse a table label, tolerating the `Occupancy: ` prefix some sources
    /// carry.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().trim_start_matches("Occupancy:").trim().to_lowercase();
        match normalized.as_str() {
            "home all day" => Some(Self::HomeAllDay),
            "in half day" => Some(Self::InHalfDay),
            "hybrid" => Some(Self::Hybrid),
            "out during day" => Some(Self::OutDuringDay),
            _ => None,
        }
    }

    pub const fn home_during_work_hours(self) -> bool {
        matches!(self, Self::HomeAllDay | Self::InHalfDay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for occupancy in
            [Occupancy::HomeAllDay, Occupancy::InHalfDay, Occupancy::Hybrid, Occupancy::OutDuringDay]
        {
            assert_eq!(Occupancy::from_label(occupancy.label()), Some(occupancy));
        }
    }

    #[test]
    fn prefixed_and_cased_labels_parse() {
        assert_eq!(Occupancy::from_label("Occupancy: Home all day"), Some(Occupancy::HomeAllDay));
        assert_eq!(Occupancy::from_label("OUT DURING DAY"), Some(Occupancy::OutDuringDay));
        assert_eq!(Occupancy::from_label("weekends only"), None);
    }
}
