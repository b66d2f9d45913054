use std::{fmt, str::FromStr};

use ndarray::Array2;

use crate::{error::ConfigError, validation::ValidatedProperty};

/// A column the model can be fed.
///
/// The names are the column names of the frame the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    BedroomCount,
    NetArea,
    CenterDistance,
    MetroDistance,
    Floor,
    Age,
    AreaPerBedroom,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::BedroomCount,
        Feature::NetArea,
        Feature::CenterDistance,
        Feature::MetroDistance,
        Feature::Floor,
        Feature::Age,
        Feature::AreaPerBedroom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::BedroomCount => "bedroom_count",
            Feature::NetArea => "net_sqm",
            Feature::CenterDistance => "center_distance",
            Feature::MetroDistance => "metro_distance",
            Feature::Floor => "floor",
            Feature::Age => "age",
            Feature::AreaPerBedroom => "sqm_per_bedroom",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| ConfigError::UnknownFeature(s.to_string()))
    }
}

/// A validated property plus the derived area per bedroom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    property: ValidatedProperty,
    area_per_bedroom: f64,
}

impl From<ValidatedProperty> for FeatureRecord {
    fn from(property: ValidatedProperty) -> Self {
        // Validation guarantees at least one bedroom.
        let area_per_bedroom = property.net_area / f64::from(property.bedroom_count);
        Self {
            property,
            area_per_bedroom,
        }
    }
}

impl FeatureRecord {
    pub fn property(&self) -> &ValidatedProperty {
        &self.property
    }

    pub fn area_per_bedroom(&self) -> f64 {
        self.area_per_bedroom
    }

    /// Returns the value of a single column.
    pub fn value(&self, feature: Feature) -> f64 {
        let p = &self.property;
        match feature {
            Feature::BedroomCount => f64::from(p.bedroom_count),
            Feature::NetArea => p.net_area,
            Feature::CenterDistance => p.center_distance,
            Feature::MetroDistance => p.metro_distance,
            Feature::Floor => f64::from(p.floor),
            Feature::Age => f64::from(p.age),
            Feature::AreaPerBedroom => self.area_per_bedroom,
        }
    }
}

/// The ordered columns a model expects, resolved once when the model is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureManifest {
    features: Vec<Feature>,
}

impl FeatureManifest {
    /// Resolves the names declared by a model artifact.
    ///
    /// # Arguments
    /// * `names` - The feature names, in the order the model expects them.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the list is empty, names an unknown feature or
    /// names a feature twice.
    pub fn resolve<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut features = Vec::with_capacity(Feature::ALL.len());

        for name in names {
            let name = name.as_ref();
            let feature: Feature = name.parse()?;
            if features.contains(&feature) {
                return Err(ConfigError::DuplicateFeature(name.to_string()));
            }
            features.push(feature);
        }

        if features.is_empty() {
            return Err(ConfigError::EmptyManifest);
        }

        Ok(Self { features })
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Lays the record out as a single row in manifest order.
    ///
    /// Columns the manifest does not list are dropped.
    pub fn project(&self, record: &FeatureRecord) -> Array2<f64> {
        Array2::from_shape_fn((1, self.features.len()), |(_, j)| {
            record.value(self.features[j])
        })
    }
}
