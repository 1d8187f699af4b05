//! Unit tests for the category marker palette

use signalmap::signals::{marker_color, CategoryPalette};

#[test]
fn test_known_categories() {
    assert_eq!(marker_color("Idea IOT"), "orange");
    assert_eq!(marker_color("Idea"), "black");
    assert_eq!(marker_color("Jio"), "blue");
    assert_eq!(marker_color("Airtel"), "red");
    assert_eq!(marker_color("BSNL"), "purple");
    assert_eq!(marker_color("Airtel IOT"), "green");
}

#[test]
fn test_unknown_categories_fall_back_to_default() {
    assert_eq!(marker_color("Vodafone"), CategoryPalette::DEFAULT);
    assert_eq!(marker_color(""), CategoryPalette::DEFAULT);
    assert_eq!(marker_color("jio"), CategoryPalette::DEFAULT);
}
