//! Detection row type.

use chrono::{DateTime, FixedOffset};

/// A single identified bird vocalization, one row of the loaded table.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Time the detection was logged, offset preserved as parsed.
    pub timestamp: DateTime<FixedOffset>,
    /// Scientific name of the species.
    pub scientific: String,
    /// Common name of the species.
    pub common: String,
    /// Detection confidence (0.0 - 1.0).
    pub confidence: f32,
}

impl Detection {
    /// Split a species label in `BirdNET` format.
    ///
    /// `BirdNET` labels are formatted as `ScientificName_CommonName`; the
    /// split is on the first underscore. A label with no underscore uses
    /// the whole label for both components.
    pub fn split_label(label: &str) -> (String, String) {
        label.find('_').map_or_else(
            || (label.to_string(), label.to_string()),
            |idx| (label[..idx].to_string(), label[idx + 1..].to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_label() {
        let (scientific, common) = Detection::split_label("Passer domesticus_House Sparrow");
        assert_eq!(scientific, "Passer domesticus");
        assert_eq!(common, "House Sparrow");
    }

    #[test]
    fn test_split_label_first_underscore_only() {
        // Only the first underscore separates the components.
        let (scientific, common) = Detection::split_label("Turdus merula_Common_Blackbird");
        assert_eq!(scientific, "Turdus merula");
        assert_eq!(common, "Common_Blackbird");
        assert_eq!(format!("{scientific}_{common}"), "Turdus merula_Common_Blackbird");
    }

    #[test]
    fn test_split_label_no_underscore() {
        let (scientific, common) = Detection::split_label("Unknown Species");
        assert_eq!(scientific, "Unknown Species");
        assert_eq!(common, "Unknown Species");
    }
}
