//! In-memory storage for animals and visits.
//!
//! The store is owned by the application state and injected into every
//! handler; the process keeps no global data.

use std::sync::Arc;

use chrono::{Duration, Utc};
use parking_lot::RwLock;

use crate::domain::{Animal, AnimalData, Visit, VisitData};

#[derive(Default)]
struct StoreInner {
    animals: Vec<Animal>,
    visits: Vec<Visit>,
}

/// Shared in-memory store for the clinic
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a couple of sample animals and visits
    pub fn with_sample_data() -> Self {
        let store = Self::new();

        let pimpek = store.add_animal(AnimalData {
            name: "Pimpek".to_string(),
            category: "Dog".to_string(),
            coat_color: "black".to_string(),
            weight: 25.3,
        });
        store.add_animal(AnimalData {
            name: "Zoe".to_string(),
            category: "Dog".to_string(),
            coat_color: "ginger".to_string(),
            weight: 20.2,
        });

        store.add_visit(
            pimpek.id,
            VisitData {
                date: Utc::now(),
                description: "Checkup".to_string(),
                price: 50.0,
            },
        );
        store.add_visit(
            pimpek.id,
            VisitData {
                date: Utc::now() + Duration::days(1),
                description: "Vaccination".to_string(),
                price: 50.0,
            },
        );

        store
    }

    /// List all animals
    pub fn list_animals(&self) -> Vec<Animal> {
        self.inner.read().animals.clone()
    }

    /// Get an animal by id
    pub fn get_animal(&self, id: i64) -> Option<Animal> {
        self.inner.read().animals.iter().find(|a| a.id == id).cloned()
    }

    /// Register a new animal, assigning the next free id
    pub fn add_animal(&self, data: AnimalData) -> Animal {
        let mut inner = self.inner.write();

        let next_id = inner.animals.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let animal = Animal {
            id: next_id,
            name: data.name,
            category: data.category,
            coat_color: data.coat_color,
            weight: data.weight,
        };
        inner.animals.push(animal.clone());

        animal
    }

    /// Replace all attributes of an animal. Returns false when the id is
    /// unknown.
    pub fn replace_animal(&self, id: i64, data: AnimalData) -> bool {
        let mut inner = self.inner.write();

        match inner.animals.iter_mut().find(|a| a.id == id) {
            Some(animal) => {
                animal.name = data.name;
                animal.category = data.category;
                animal.coat_color = data.coat_color;
                animal.weight = data.weight;
                true
            }
            None => false,
        }
    }

    /// Remove an animal and its visits. Returns false when the id is
    /// unknown.
    pub fn remove_animal(&self, id: i64) -> bool {
        let mut inner = self.inner.write();

        let before = inner.animals.len();
        inner.animals.retain(|a| a.id != id);
        if inner.animals.len() == before {
            return false;
        }

        inner.visits.retain(|v| v.animal_id != id);
        true
    }

    /// List the visits of one animal, or None when the animal is unknown
    pub fn visits_for(&self, animal_id: i64) -> Option<Vec<Visit>> {
        let inner = self.inner.read();

        if !inner.animals.iter().any(|a| a.id == animal_id) {
            return None;
        }

        Some(
            inner
                .visits
                .iter()
                .filter(|v| v.animal_id == animal_id)
                .cloned()
                .collect(),
        )
    }

    /// Record a visit for an animal, or None when the animal is unknown
    pub fn add_visit(&self, animal_id: i64, data: VisitData) -> Option<Visit> {
        let mut inner = self.inner.write();

        if !inner.animals.iter().any(|a| a.id == animal_id) {
            return None;
        }

        let next_id = inner.visits.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        let visit = Visit {
            id: next_id,
            animal_id,
            date: data.date,
            description: data.description,
            price: data.price,
        };
        inner.visits.push(visit.clone());

        Some(visit)
    }
}
