/// The six fields of the property form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BedroomCount,
    NetArea,
    Floor,
    CenterDistance,
    MetroDistance,
    Age,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::BedroomCount,
        Field::NetArea,
        Field::Floor,
        Field::CenterDistance,
        Field::MetroDistance,
        Field::Age,
    ];

    /// The name used at the start of every validation message for this field.
    pub fn label(self) -> &'static str {
        match self {
            Field::BedroomCount => "Bedroom Count",
            Field::NetArea => "Net square meters",
            Field::Floor => "Floor Level",
            Field::CenterDistance => "Distance to City Center (m)",
            Field::MetroDistance => "Distance to Metro (m)",
            Field::Age => "Property Age (years)",
        }
    }

    /// The caption shown above the input on the form.
    pub fn caption(self) -> &'static str {
        match self {
            Field::NetArea => "Area of the floor (sqm)",
            other => other.label(),
        }
    }

    /// Hint shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::BedroomCount => "Select bedrooms...",
            Field::NetArea => "e.g. 85.5",
            Field::Floor => "1 to 50",
            Field::CenterDistance => "e.g. 1200",
            Field::MetroDistance => "e.g. 250",
            Field::Age => "0 to 1000",
        }
    }

    /// Whether the field is picked from a fixed list instead of typed.
    pub fn is_selection(self) -> bool {
        matches!(self, Field::BedroomCount)
    }
}

/// A form submission exactly as the user left it.
///
/// Only lives for the duration of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub bedroom_count: Option<u32>,
    pub net_area: String,
    pub floor: String,
    pub center_distance: String,
    pub metro_distance: String,
    pub age: String,
}

impl RawInput {
    /// Returns the typed text of a free-text field, `None` for the selection.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::BedroomCount => None,
            Field::NetArea => Some(&self.net_area),
            Field::Floor => Some(&self.floor),
            Field::CenterDistance => Some(&self.center_distance),
            Field::MetroDistance => Some(&self.metro_distance),
            Field::Age => Some(&self.age),
        }
    }

    /// Mutable access to the text of a free-text field, `None` for the selection.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::BedroomCount => None,
            Field::NetArea => Some(&mut self.net_area),
            Field::Floor => Some(&mut self.floor),
            Field::CenterDistance => Some(&mut self.center_distance),
            Field::MetroDistance => Some(&mut self.metro_distance),
            Field::Age => Some(&mut self.age),
        }
    }
}
