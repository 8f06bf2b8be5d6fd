use crate::domain::model::{Animal, AnimalId, Owner, OwnerId, Species};
use crate::utils::error::{ClinicError, Result};

/// In-memory state of the clinic: the two root collections plus the id
/// counters. Both collections keep insertion order. All lookups are fresh
/// linear scans — O(owners × pets) for the reverse lookup — which is fine at
/// the record counts a single clinic sees and avoids a cache that every
/// mutation would have to keep consistent.
#[derive(Debug, Default)]
pub struct Clinic {
    animals: Vec<Animal>,
    owners: Vec<Owner>,
    next_animal: u64,
    next_owner: u64,
}

impl Clinic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_animal(&mut self, name: impl Into<String>, age: i32, species: Species) -> AnimalId {
        let id = AnimalId(self.next_animal);
        self.next_animal += 1;
        self.animals.push(Animal {
            id,
            name: name.into(),
            age,
            species,
        });
        id
    }

    pub fn add_owner(
        &mut self,
        name: impl Into<String>,
        clinic_id: impl Into<String>,
        phone: impl Into<String>,
    ) -> OwnerId {
        let id = OwnerId(self.next_owner);
        self.next_owner += 1;
        self.owners
            .push(Owner::new(id, name.into(), clinic_id.into(), phone.into()));
        id
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id == id)
    }

    pub fn owner(&self, id: OwnerId) -> Option<&Owner> {
        self.owners.iter().find(|o| o.id == id)
    }

    fn owner_mut(&mut self, id: OwnerId) -> Option<&mut Owner> {
        self.owners.iter_mut().find(|o| o.id == id)
    }

    /// First match by name. Duplicate names resolve to the earliest insertion.
    pub fn find_animal_by_name(&self, name: &str) -> Option<AnimalId> {
        self.animals.iter().find(|a| a.name == name).map(|a| a.id)
    }

    /// First match by name, same semantics as [`Self::find_animal_by_name`].
    pub fn find_owner_by_name(&self, name: &str) -> Option<OwnerId> {
        self.owners.iter().find(|o| o.name == name).map(|o| o.id)
    }

    /// Reverse lookup over every owner's pet list. Computed fresh on each
    /// call; never cached, since pet lists mutate elsewhere.
    pub fn owner_of(&self, animal: AnimalId) -> Option<OwnerId> {
        self.owners
            .iter()
            .find(|o| o.pets().contains(&animal))
            .map(|o| o.id)
    }

    /// Resolves the owner's pet ids to records. Unknown owner yields an empty
    /// list; ids that no longer resolve are skipped (the public operations
    /// keep both sides in step, so that does not occur through this API).
    pub fn pets_of(&self, owner: OwnerId) -> Vec<&Animal> {
        match self.owner(owner) {
            Some(o) => o.pets().iter().filter_map(|id| self.animal(*id)).collect(),
            None => Vec::new(),
        }
    }

    /// Moves an animal to a new owner: detach from the current owner (if any),
    /// then attach. Preserves the at-most-one-owner invariant.
    pub fn assign_owner(&mut self, animal: AnimalId, owner: OwnerId) -> Result<()> {
        if self.animal(animal).is_none() {
            return Err(ClinicError::AnimalNotFound(animal.value()));
        }
        if self.owner(owner).is_none() {
            return Err(ClinicError::OwnerNotFound(owner.value()));
        }
        if let Some(current) = self.owner_of(animal) {
            if let Some(o) = self.owner_mut(current) {
                o.remove_pet(animal);
            }
        }
        if let Some(o) = self.owner_mut(owner) {
            o.add_pet(animal);
        }
        tracing::debug!("assigned {} to {}", animal, owner);
        Ok(())
    }

    /// Removes an animal entirely: detached from its owner first, then dropped
    /// from the global collection. No dangling pet id remains.
    pub fn delete_animal(&mut self, animal: AnimalId) -> Result<()> {
        if self.animal(animal).is_none() {
            return Err(ClinicError::AnimalNotFound(animal.value()));
        }
        if let Some(current) = self.owner_of(animal) {
            if let Some(o) = self.owner_mut(current) {
                o.remove_pet(animal);
            }
        }
        self.animals.retain(|a| a.id != animal);
        Ok(())
    }

    /// Cascade delete: every animal in the owner's pet list is hard-deleted
    /// from the global collection, then the owner itself is removed. Animals
    /// of other owners are untouched.
    pub fn delete_owner(&mut self, owner: OwnerId) -> Result<()> {
        let pets: Vec<AnimalId> = match self.owner(owner) {
            Some(o) => o.pets().to_vec(),
            None => return Err(ClinicError::OwnerNotFound(owner.value())),
        };
        for pet in &pets {
            self.animals.retain(|a| a.id != *pet);
        }
        self.owners.retain(|o| o.id != owner);
        tracing::debug!("deleted {} and {} pets", owner, pets.len());
        Ok(())
    }

    /// Loader-only attach: drops the pair when the animal already has an
    /// owner, so a relations file that lists an animal twice links only the
    /// first pair. Returns whether the link was made.
    pub(crate) fn attach_if_unowned(&mut self, owner: OwnerId, animal: AnimalId) -> bool {
        if self.owner_of(animal).is_some() {
            return false;
        }
        match self.owner_mut(owner) {
            Some(o) => {
                o.add_pet(animal);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty() && self.owners.is_empty()
    }

    pub fn clear(&mut self) {
        self.animals.clear();
        self.owners.clear();
    }
}
