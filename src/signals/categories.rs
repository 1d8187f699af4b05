//! Marker colors per access-technology category

/// Map marker palette keyed by category label
pub struct CategoryPalette;

impl CategoryPalette {
    pub const IDEA_IOT: &'static str = "orange";
    pub const IDEA: &'static str = "black";
    pub const JIO: &'static str = "blue";
    pub const AIRTEL: &'static str = "red";
    pub const BSNL: &'static str = "purple";
    pub const AIRTEL_IOT: &'static str = "green";
    pub const DEFAULT: &'static str = "gray";

    /// Color for a category; unrecognized labels get the default
    pub fn get(category: &str) -> &'static str {
        match category {
            "Idea IOT" => Self::IDEA_IOT,
            "Idea" => Self::IDEA,
            "Jio" => Self::JIO,
            "Airtel" => Self::AIRTEL,
            "BSNL" => Self::BSNL,
            "Airtel IOT" => Self::AIRTEL_IOT,
            _ => Self::DEFAULT,
        }
    }
}

pub fn marker_color(category: &str) -> &'static str {
    CategoryPalette::get(category)
}
