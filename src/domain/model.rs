use std::fmt;

/// Handle for an animal record. Allocated by [`crate::core::clinic::Clinic`];
/// stable for the lifetime of the record, never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimalId(pub(crate) u64);

/// Handle for an owner record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(pub(crate) u64);

impl AnimalId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl OwnerId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "animal#{}", self.0)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner#{}", self.0)
    }
}

/// Species tag plus the per-kind payload. The tag doubles as the kind column
/// of the animals file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Species {
    Dog { breed: String },
    Cat { indoor: bool },
    Bird { can_fly: bool },
}

impl Species {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Dog { .. } => "Dog",
            Self::Cat { .. } => "Cat",
            Self::Bird { .. } => "Bird",
        }
    }

    /// Label of the kind-specific field as it appears in descriptions.
    pub fn field_label(&self) -> &'static str {
        match self {
            Self::Dog { .. } => "Breed",
            Self::Cat { .. } => "Indoor",
            Self::Bird { .. } => "Can fly",
        }
    }

    /// Kind-specific field rendered the way it is persisted and described.
    pub fn field_value(&self) -> String {
        match self {
            Self::Dog { breed } => breed.clone(),
            Self::Cat { indoor } => indoor.to_string(),
            Self::Bird { can_fly } => can_fly.to_string(),
        }
    }
}

/// An animal record. Age is stored as given; negative values are
/// representable and nothing validates the range.
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub age: i32,
    pub species: Species,
}

impl Animal {
    /// Fixed textual price band per kind, with the per-kind suffix rules.
    pub fn price(&self) -> String {
        match &self.species {
            Species::Dog { .. } => "Price: 250-300 SAR".to_string(),
            Species::Cat { indoor } => {
                if *indoor {
                    "Price: 150-200 SAR (indoor discount)".to_string()
                } else {
                    "Price: 150-200 SAR".to_string()
                }
            }
            Species::Bird { can_fly } => {
                if *can_fly {
                    "Price: 100-150 SAR".to_string()
                } else {
                    "Price: 100-150 SAR (extra care needed)".to_string()
                }
            }
        }
    }

    /// Human-readable one-line summary, e.g.
    /// `Type: Dog, Name: Buddy, Age: 3, Breed: Golden Retriever, Price: 250-300 SAR`.
    pub fn description(&self) -> String {
        format!(
            "Type: {}, Name: {}, Age: {}, {}: {}, {}",
            self.species.tag(),
            self.name,
            self.age,
            self.species.field_label(),
            self.species.field_value(),
            self.price()
        )
    }

    /// Describes a service visit. Pure message, no state change.
    pub fn provide_service(&self, kind: &str) -> String {
        match &self.species {
            Species::Dog { breed } => {
                format!("Providing {} service to dog ({})", kind, breed)
            }
            Species::Cat { indoor } => format!(
                "Providing {} service to {} cat",
                kind,
                if *indoor { "indoor" } else { "outdoor" }
            ),
            Species::Bird { can_fly } => format!(
                "Providing {} service to {} bird",
                kind,
                if *can_fly { "flying" } else { "non-flying" }
            ),
        }
    }
}

/// An owner record. Pets are held as ids into the clinic's animal collection,
/// never as values; the animal side carries no back-reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    /// Clinic-issued id string, the second column of the owners file.
    pub clinic_id: String,
    pub phone: String,
    pets: Vec<AnimalId>,
}

impl Owner {
    pub(crate) fn new(id: OwnerId, name: String, clinic_id: String, phone: String) -> Self {
        Self {
            id,
            name,
            clinic_id,
            phone,
            pets: Vec::new(),
        }
    }

    pub fn pets(&self) -> &[AnimalId] {
        &self.pets
    }

    /// Appends unconditionally. The caller is responsible for the
    /// one-owner-per-animal invariant (the clinic detaches first).
    pub(crate) fn add_pet(&mut self, animal: AnimalId) {
        self.pets.push(animal);
    }

    /// Removes by id; no-op when absent.
    pub(crate) fn remove_pet(&mut self, animal: AnimalId) {
        self.pets.retain(|id| *id != animal);
    }

    /// Identity check by (name, phone) pair. Available for deduplication;
    /// nothing enforces it on insert.
    pub fn is_same_person(&self, other: &Owner) -> bool {
        self.name == other.name && self.phone == other.phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(species: Species) -> Animal {
        Animal {
            id: AnimalId(0),
            name: "Rex".to_string(),
            age: 4,
            species,
        }
    }

    #[test]
    fn dog_price_and_description() {
        let dog = animal(Species::Dog {
            breed: "Husky".to_string(),
        });
        assert_eq!(dog.price(), "Price: 250-300 SAR");
        assert_eq!(
            dog.description(),
            "Type: Dog, Name: Rex, Age: 4, Breed: Husky, Price: 250-300 SAR"
        );
    }

    #[test]
    fn cat_price_depends_on_indoor() {
        let indoor = animal(Species::Cat { indoor: true });
        let outdoor = animal(Species::Cat { indoor: false });
        assert_eq!(indoor.price(), "Price: 150-200 SAR (indoor discount)");
        assert_eq!(outdoor.price(), "Price: 150-200 SAR");
    }

    #[test]
    fn bird_price_depends_on_flight() {
        let flying = animal(Species::Bird { can_fly: true });
        let grounded = animal(Species::Bird { can_fly: false });
        assert_eq!(flying.price(), "Price: 100-150 SAR");
        assert_eq!(grounded.price(), "Price: 100-150 SAR (extra care needed)");
    }

    #[test]
    fn boolean_fields_render_in_description() {
        let cat = animal(Species::Cat { indoor: true });
        assert_eq!(
            cat.description(),
            "Type: Cat, Name: Rex, Age: 4, Indoor: true, Price: 150-200 SAR (indoor discount)"
        );
    }

    #[test]
    fn service_messages_per_kind() {
        let dog = animal(Species::Dog {
            breed: "Husky".to_string(),
        });
        assert_eq!(
            dog.provide_service("grooming"),
            "Providing grooming service to dog (Husky)"
        );
        let bird = animal(Species::Bird { can_fly: false });
        assert_eq!(
            bird.provide_service("checkup"),
            "Providing checkup service to non-flying bird"
        );
    }

    #[test]
    fn negative_age_is_representable() {
        let mut dog = animal(Species::Dog {
            breed: "Husky".to_string(),
        });
        dog.age = -1;
        assert!(dog.description().contains("Age: -1"));
    }

    #[test]
    fn owner_identity_is_name_and_phone() {
        let a = Owner::new(
            OwnerId(0),
            "John".to_string(),
            "1".to_string(),
            "0501111111".to_string(),
        );
        let b = Owner::new(
            OwnerId(1),
            "John".to_string(),
            "99".to_string(),
            "0501111111".to_string(),
        );
        let c = Owner::new(
            OwnerId(2),
            "John".to_string(),
            "1".to_string(),
            "0509999999".to_string(),
        );
        assert!(a.is_same_person(&b));
        assert!(!a.is_same_person(&c));
    }
}
