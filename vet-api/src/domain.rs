//! Domain models for the clinic: animals and their visits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An animal registered at the clinic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub coat_color: String,
    pub weight: f64,
}

/// Attributes accepted when registering or replacing an animal
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalData {
    pub name: String,
    pub category: String,
    pub coat_color: String,
    pub weight: f64,
}

/// A visit, referencing its animal by id. Holding the id rather than a
/// copy keeps renames and replacements from leaving stale animal data
/// inside old visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: i64,
    pub animal_id: i64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub price: f64,
}

/// Attributes accepted when recording a visit
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitData {
    pub date: DateTime<Utc>,
    pub description: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_serializes_camel_case() {
        let animal = Animal {
            id: 1,
            name: "Pimpek".to_string(),
            category: "Dog".to_string(),
            coat_color: "black".to_string(),
            weight: 25.3,
        };

        let value = serde_json::to_value(&animal).expect("Failed to serialize animal");
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Pimpek",
                "category": "Dog",
                "coatColor": "black",
                "weight": 25.3,
            })
        );
    }
}
