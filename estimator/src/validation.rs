use std::ops::RangeInclusive;

use crate::{
    error::ValidationErrors,
    input::{Field, RawInput},
};

/// The options offered by the bedroom selector.
pub const BEDROOM_OPTIONS: RangeInclusive<u32> = 1..=20;

pub const NET_AREA: RealRule = RealRule::at_least(Field::NetArea, 1.0);
pub const FLOOR: WholeRule = WholeRule::between(Field::Floor, 1, 50);
pub const CENTER_DISTANCE: RealRule = RealRule::at_least(Field::CenterDistance, 0.0);
pub const METRO_DISTANCE: RealRule = RealRule::at_least(Field::MetroDistance, 0.0);
pub const AGE: WholeRule = WholeRule::between(Field::Age, 0, 1000);

/// A property whose six fields all passed their checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedProperty {
    pub bedroom_count: u32,
    pub net_area: f64,
    pub floor: u32,
    pub center_distance: f64,
    pub metro_distance: f64,
    pub age: u32,
}

/// Parse and bounds rule for a real-valued text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealRule {
    pub field: Field,
    pub min: f64,
    pub max: Option<f64>,
}

impl RealRule {
    /// A rule bounded below only.
    pub const fn at_least(field: Field, min: f64) -> Self {
        Self {
            field,
            min,
            max: None,
        }
    }

    /// A rule bounded on both sides.
    pub const fn within(field: Field, min: f64, max: f64) -> Self {
        Self {
            field,
            min,
            max: Some(max),
        }
    }

    /// Parses `raw` and checks it against the bounds.
    ///
    /// # Returns
    /// The parsed value, or the message to show the user.
    pub fn check(&self, raw: &str) -> Result<f64, String> {
        let label = self.field.label();
        let raw = non_empty(label, raw)?;

        let value = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("{label} must be a number."))?;

        // `{:?}` keeps the trailing `.0` on whole bounds.
        if value < self.min {
            return Err(format!("{label} must be at least {:?}.", self.min));
        }
        match self.max {
            Some(max) if value > max => Err(format!("{label} must be at most {max:?}.")),
            _ => Ok(value),
        }
    }
}

/// Parse and bounds rule for a whole-number text field.
///
/// Accepts `"12"` and `"12.0"`, rejects `"12.7"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WholeRule {
    pub field: Field,
    pub min: u32,
    pub max: u32,
}

impl WholeRule {
    pub const fn between(field: Field, min: u32, max: u32) -> Self {
        Self { field, min, max }
    }

    /// Parses `raw` and checks it against the bounds.
    ///
    /// # Returns
    /// The parsed value, or the message to show the user.
    pub fn check(&self, raw: &str) -> Result<u32, String> {
        let label = self.field.label();
        let raw = non_empty(label, raw)?;

        let value = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .ok_or_else(|| format!("{label} must be a whole number."))?;

        if value < f64::from(self.min) || value > f64::from(self.max) {
            return Err(format!(
                "{label} must be between {} and {}.",
                self.min, self.max
            ));
        }

        Ok(value as u32)
    }
}

/// Checks the bedroom selector.
pub fn check_bedroom_count(selected: Option<u32>) -> Result<u32, String> {
    let label = Field::BedroomCount.label();
    let count = selected.ok_or_else(|| format!("{label} cannot be empty."))?;

    if !BEDROOM_OPTIONS.contains(&count) {
        return Err(format!(
            "{label} must be between {} and {}.",
            BEDROOM_OPTIONS.start(),
            BEDROOM_OPTIONS.end()
        ));
    }

    Ok(count)
}

/// Runs every field check and collects every failure.
///
/// Each check is independent of the others, a failing field never hides the
/// message of a later one.
///
/// # Errors
/// Returns all messages, in form order, if any field failed.
pub fn validate(raw: &RawInput) -> Result<ValidatedProperty, ValidationErrors> {
    let checks = (
        check_bedroom_count(raw.bedroom_count),
        NET_AREA.check(&raw.net_area),
        FLOOR.check(&raw.floor),
        CENTER_DISTANCE.check(&raw.center_distance),
        METRO_DISTANCE.check(&raw.metro_distance),
        AGE.check(&raw.age),
    );

    match checks {
        (
            Ok(bedroom_count),
            Ok(net_area),
            Ok(floor),
            Ok(center_distance),
            Ok(metro_distance),
            Ok(age),
        ) => Ok(ValidatedProperty {
            bedroom_count,
            net_area,
            floor,
            center_distance,
            metro_distance,
            age,
        }),
        (bedrooms, area, floor, center, metro, age) => Err(ValidationErrors::from_checks([
            bedrooms.err(),
            area.err(),
            floor.err(),
            center.err(),
            metro.err(),
            age.err(),
        ])),
    }
}

fn non_empty<'a>(label: &str, raw: &'a str) -> Result<&'a str, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} cannot be empty."));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawInput {
        RawInput {
            bedroom_count: Some(3),
            net_area: "90".into(),
            floor: "5".into(),
            center_distance: "1200".into(),
            metro_distance: "250".into(),
            age: "10".into(),
        }
    }

    fn messages(raw: &RawInput) -> Vec<String> {
        validate(raw).unwrap_err().into_messages()
    }

    #[test]
    fn accepts_a_complete_submission() {
        let property = validate(&valid_input()).unwrap();

        assert_eq!(
            property,
            ValidatedProperty {
                bedroom_count: 3,
                net_area: 90.0,
                floor: 5,
                center_distance: 1200.0,
                metro_distance: 250.0,
                age: 10,
            }
        );
    }

    #[test]
    fn every_empty_field_reports_only_the_empty_message() {
        let cases: [(Field, fn(&mut RawInput)); 6] = [
            (Field::BedroomCount, |r| r.bedroom_count = None),
            (Field::NetArea, |r| r.net_area.clear()),
            (Field::Floor, |r| r.floor.clear()),
            (Field::CenterDistance, |r| r.center_distance = "   ".into()),
            (Field::MetroDistance, |r| r.metro_distance = "\t".into()),
            (Field::Age, |r| r.age.clear()),
        ];

        for (field, blank) in cases {
            let mut raw = valid_input();
            blank(&mut raw);
            assert_eq!(
                messages(&raw),
                vec![format!("{} cannot be empty.", field.label())]
            );
        }
    }

    #[test]
    fn real_bounds_are_inclusive() {
        assert_eq!(NET_AREA.check("1.0"), Ok(1.0));
        assert_eq!(
            NET_AREA.check("0.0"),
            Err("Net square meters must be at least 1.0.".to_string())
        );
        assert_eq!(CENTER_DISTANCE.check("0"), Ok(0.0));
        assert_eq!(
            CENTER_DISTANCE.check("-1"),
            Err("Distance to City Center (m) must be at least 0.0.".to_string())
        );
        assert_eq!(METRO_DISTANCE.check("0"), Ok(0.0));
        assert_eq!(
            METRO_DISTANCE.check("-1"),
            Err("Distance to Metro (m) must be at least 0.0.".to_string())
        );
    }

    #[test]
    fn whole_bounds_are_inclusive() {
        assert_eq!(FLOOR.check("1"), Ok(1));
        assert_eq!(FLOOR.check("50"), Ok(50));
        assert_eq!(
            FLOOR.check("0"),
            Err("Floor Level must be between 1 and 50.".to_string())
        );
        assert_eq!(
            FLOOR.check("51"),
            Err("Floor Level must be between 1 and 50.".to_string())
        );
        assert_eq!(AGE.check("0"), Ok(0));
        assert_eq!(AGE.check("1000"), Ok(1000));
        assert_eq!(
            AGE.check("-1"),
            Err("Property Age (years) must be between 0 and 1000.".to_string())
        );
        assert_eq!(
            AGE.check("1001"),
            Err("Property Age (years) must be between 0 and 1000.".to_string())
        );
    }

    #[test]
    fn bedroom_bounds_are_inclusive() {
        assert_eq!(check_bedroom_count(Some(1)), Ok(1));
        assert_eq!(check_bedroom_count(Some(20)), Ok(20));
        assert_eq!(
            check_bedroom_count(Some(0)),
            Err("Bedroom Count must be between 1 and 20.".to_string())
        );
        assert_eq!(
            check_bedroom_count(Some(21)),
            Err("Bedroom Count must be between 1 and 20.".to_string())
        );
    }

    #[test]
    fn whole_fields_take_trailing_zero_fraction_but_not_real_fractions() {
        assert_eq!(FLOOR.check("12.0"), Ok(12));
        assert_eq!(AGE.check("12.0"), Ok(12));
        assert_eq!(
            FLOOR.check("12.7"),
            Err("Floor Level must be a whole number.".to_string())
        );
        assert_eq!(
            AGE.check("12.7"),
            Err("Property Age (years) must be a whole number.".to_string())
        );
    }

    #[test]
    fn text_that_is_not_a_number_is_rejected() {
        assert_eq!(
            NET_AREA.check("ninety"),
            Err("Net square meters must be a number.".to_string())
        );
        assert_eq!(
            NET_AREA.check("90,5"),
            Err("Net square meters must be a number.".to_string())
        );
        assert_eq!(
            NET_AREA.check("NaN"),
            Err("Net square meters must be a number.".to_string())
        );
        assert_eq!(
            FLOOR.check("fifth"),
            Err("Floor Level must be a whole number.".to_string())
        );
        assert_eq!(
            AGE.check("inf"),
            Err("Property Age (years) must be a whole number.".to_string())
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(NET_AREA.check(" 85.5 "), Ok(85.5));
        assert_eq!(FLOOR.check("\t7\n"), Ok(7));
    }

    #[test]
    fn optional_upper_bound_is_reported() {
        let rule = RealRule::within(Field::NetArea, 1.0, 500.0);

        assert_eq!(rule.check("500"), Ok(500.0));
        assert_eq!(
            rule.check("500.5"),
            Err("Net square meters must be at most 500.0.".to_string())
        );
    }

    #[test]
    fn all_failures_are_reported_together_in_form_order() {
        let raw = RawInput {
            bedroom_count: None,
            net_area: String::new(),
            floor: "12.7".into(),
            center_distance: "far".into(),
            metro_distance: "-3".into(),
            age: "2000".into(),
        };

        assert_eq!(
            messages(&raw),
            vec![
                "Bedroom Count cannot be empty.",
                "Net square meters cannot be empty.",
                "Floor Level must be a whole number.",
                "Distance to City Center (m) must be a number.",
                "Distance to Metro (m) must be at least 0.0.",
                "Property Age (years) must be between 0 and 1000.",
            ]
        );
    }

    #[test]
    fn unselected_bedrooms_and_empty_area_give_two_messages() {
        let mut raw = valid_input();
        raw.bedroom_count = None;
        raw.net_area.clear();

        assert_eq!(
            messages(&raw),
            vec![
                "Bedroom Count cannot be empty.",
                "Net square meters cannot be empty."
            ]
        );
    }
}
