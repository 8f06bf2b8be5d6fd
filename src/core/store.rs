//! Flat-file persistence for the clinic state.
//!
//! Three comma-separated files, one record per line:
//!
//! - `animals.txt`: `{Dog|Cat|Bird},{name},{age},{breed | true|false}`
//! - `owners.txt`: `{name},{clinic_id},{phone}`
//! - `relations.txt`: `{ownerName},{animalName}`
//!
//! Known fragilities of the format, kept for compatibility with existing
//! data files: fields are not escaped, so an embedded comma corrupts the
//! record; saves overwrite the three files sequentially without a temp-file
//! rename, so a mid-write failure can leave them mutually stale.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::clinic::Clinic;
use crate::domain::model::Species;
use crate::utils::error::{ClinicError, Result};

pub const ANIMALS_FILE: &str = "animals.txt";
pub const OWNERS_FILE: &str = "owners.txt";
pub const RELATIONS_FILE: &str = "relations.txt";

/// The three store files inside a data directory. File names are fixed; only
/// the directory moves.
#[derive(Debug, Clone)]
pub struct StorePaths {
    dir: PathBuf,
}

impl StorePaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn animals(&self) -> PathBuf {
        self.dir.join(ANIMALS_FILE)
    }

    pub fn owners(&self) -> PathBuf {
        self.dir.join(OWNERS_FILE)
    }

    pub fn relations(&self) -> PathBuf {
        self.dir.join(RELATIONS_FILE)
    }
}

/// What a load produced: records from the files, or the sample fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Files { owners: usize, animals: usize },
    Sample(SampleReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleReason {
    /// No files, or only empty/malformed lines.
    NoPriorData,
    /// A non-numeric age aborted the load; carries the offending field.
    BadAge(String),
}

/// Loads the three files into a fresh [`Clinic`].
///
/// Missing files are not errors. Malformed lines are skipped. A non-numeric
/// age discards the entire load and installs the sample fixture instead, as
/// does an empty result; the outcome reports which happened. Only a real IO
/// failure on an existing file surfaces as `Err`.
pub fn load_all(paths: &StorePaths) -> Result<(Clinic, LoadOutcome)> {
    let mut clinic = Clinic::new();
    match read_files(&mut clinic, paths) {
        Ok((owners, animals)) => {
            if clinic.is_empty() {
                tracing::info!("no saved data found, starting with sample data");
                Ok((sample_clinic(), LoadOutcome::Sample(SampleReason::NoPriorData)))
            } else {
                tracing::info!("loaded {} owners and {} animals", owners, animals);
                Ok((clinic, LoadOutcome::Files { owners, animals }))
            }
        }
        Err(ClinicError::InvalidAgeError { value }) => {
            tracing::warn!(
                "failed to load data: invalid age {:?}, falling back to sample data",
                value
            );
            Ok((sample_clinic(), LoadOutcome::Sample(SampleReason::BadAge(value))))
        }
        Err(e) => Err(e),
    }
}

/// Rewrites all three files in full, in the order the desktop build used:
/// animals, owners, relations. The relations file is derived from the owners'
/// pet lists, regardless of how the links were originally expressed.
pub fn save_all(clinic: &Clinic, paths: &StorePaths) -> Result<()> {
    fs::write(paths.animals(), render_animals(clinic))?;
    fs::write(paths.owners(), render_owners(clinic))?;
    fs::write(paths.relations(), render_relations(clinic))?;
    tracing::info!(
        "saved {} animals and {} owners",
        clinic.animals().len(),
        clinic.owners().len()
    );
    Ok(())
}

fn read_files(clinic: &mut Clinic, paths: &StorePaths) -> Result<(usize, usize)> {
    let owners = read_owners(clinic, &paths.owners())?;
    let animals = read_animals(clinic, &paths.animals())?;
    read_relations(clinic, &paths.relations())?;
    Ok((owners, animals))
}

fn read_owners(clinic: &mut Clinic, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let text = fs::read_to_string(path)?;
    let mut count = 0;
    for line in text.lines() {
        match parse_owner_line(line) {
            Some((name, clinic_id, phone)) => {
                clinic.add_owner(name, clinic_id, phone);
                count += 1;
            }
            None => tracing::debug!("skipping malformed owner line {:?}", line),
        }
    }
    Ok(count)
}

fn read_animals(clinic: &mut Clinic, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let text = fs::read_to_string(path)?;
    let mut count = 0;
    for line in text.lines() {
        match parse_animal_line(line)? {
            Some((name, age, species)) => {
                clinic.add_animal(name, age, species);
                count += 1;
            }
            None => tracing::debug!("skipping malformed animal line {:?}", line),
        }
    }
    Ok(count)
}

fn read_relations(clinic: &mut Clinic, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let text = fs::read_to_string(path)?;
    for line in text.lines() {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 2 {
            tracing::debug!("skipping malformed relation line {:?}", line);
            continue;
        }
        let owner = clinic.find_owner_by_name(parts[0]);
        let animal = clinic.find_animal_by_name(parts[1]);
        match (owner, animal) {
            (Some(owner), Some(animal)) => {
                if !clinic.attach_if_unowned(owner, animal) {
                    tracing::debug!("dropping relation {:?}: animal already owned", line);
                }
            }
            _ => tracing::debug!("skipping unresolvable relation line {:?}", line),
        }
    }
    Ok(())
}

/// `name,clinic_id,phone`; lines with fewer than 3 fields are rejected,
/// extra fields are ignored.
fn parse_owner_line(line: &str) -> Option<(&str, &str, &str)> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 3 {
        return None;
    }
    Some((parts[0], parts[1], parts[2]))
}

/// `kind,name,age,field`. Unknown kind tags and short lines yield `Ok(None)`
/// (skipped); a non-numeric age on a known kind is the one hard error, which
/// aborts the whole load upstream.
fn parse_animal_line(line: &str) -> Result<Option<(String, i32, Species)>> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 4 {
        return Ok(None);
    }
    match parts[0] {
        "Dog" | "Cat" | "Bird" => {}
        _ => return Ok(None),
    }
    let age: i32 = parts[2]
        .parse()
        .map_err(|_| ClinicError::InvalidAgeError {
            value: parts[2].to_string(),
        })?;
    let species = match parts[0] {
        "Dog" => Species::Dog {
            breed: parts[3].to_string(),
        },
        "Cat" => Species::Cat {
            indoor: parse_bool(parts[3]),
        },
        _ => Species::Bird {
            can_fly: parse_bool(parts[3]),
        },
    };
    Ok(Some((parts[1].to_string(), age, species)))
}

/// `"true"` in any case is true, anything else is false; parsing a boolean
/// never fails, matching the files written by the desktop build.
fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn render_animals(clinic: &Clinic) -> String {
    let mut out = String::new();
    for animal in clinic.animals() {
        out.push_str(&format!(
            "{},{},{},{}\n",
            animal.species.tag(),
            animal.name,
            animal.age,
            animal.species.field_value()
        ));
    }
    out
}

fn render_owners(clinic: &Clinic) -> String {
    let mut out = String::new();
    for owner in clinic.owners() {
        out.push_str(&format!(
            "{},{},{}\n",
            owner.name, owner.clinic_id, owner.phone
        ));
    }
    out
}

fn render_relations(clinic: &Clinic) -> String {
    let mut out = String::new();
    for owner in clinic.owners() {
        for pet in owner.pets() {
            if let Some(animal) = clinic.animal(*pet) {
                out.push_str(&format!("{},{}\n", owner.name, animal.name));
            }
        }
    }
    out
}

/// The fixed fallback dataset: two owners, three animals, pre-linked.
pub fn sample_clinic() -> Clinic {
    let mut clinic = Clinic::new();
    let buddy = clinic.add_animal(
        "Buddy",
        3,
        Species::Dog {
            breed: "Golden Retriever".to_string(),
        },
    );
    let miso = clinic.add_animal("Miso", 2, Species::Cat { indoor: true });
    let twitter = clinic.add_animal("Twitter", 1, Species::Bird { can_fly: false });
    let john = clinic.add_owner("John", "1", "0501111111");
    let sarah = clinic.add_owner("Sarah", "2", "0502222222");
    clinic.attach_if_unowned(john, buddy);
    clinic.attach_if_unowned(sarah, miso);
    clinic.attach_if_unowned(sarah, twitter);
    clinic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_kind() {
        let (name, age, species) = parse_animal_line("Dog,Buddy,3,Golden Retriever")
            .unwrap()
            .unwrap();
        assert_eq!(name, "Buddy");
        assert_eq!(age, 3);
        assert_eq!(
            species,
            Species::Dog {
                breed: "Golden Retriever".to_string()
            }
        );

        let (_, _, species) = parse_animal_line("Cat,Miso,2,true").unwrap().unwrap();
        assert_eq!(species, Species::Cat { indoor: true });

        let (_, _, species) = parse_animal_line("Bird,Twitter,1,false").unwrap().unwrap();
        assert_eq!(species, Species::Bird { can_fly: false });
    }

    #[test]
    fn short_and_unknown_lines_are_skipped() {
        assert_eq!(parse_animal_line("Dog,Buddy,3").unwrap(), None);
        assert_eq!(parse_animal_line("Hamster,Pip,1,true").unwrap(), None);
        assert_eq!(parse_animal_line("").unwrap(), None);
    }

    #[test]
    fn unknown_kind_wins_over_bad_age() {
        // dispatch happens before the age parse, so a bad age on an unknown
        // kind is a skip, not a load failure
        assert_eq!(parse_animal_line("Hamster,Pip,old,true").unwrap(), None);
    }

    #[test]
    fn bad_age_is_a_hard_error() {
        let err = parse_animal_line("Dog,Buddy,three,Husky").unwrap_err();
        assert!(matches!(
            err,
            ClinicError::InvalidAgeError { value } if value == "three"
        ));
    }

    #[test]
    fn negative_age_parses() {
        let (_, age, _) = parse_animal_line("Dog,Buddy,-3,Husky").unwrap().unwrap();
        assert_eq!(age, -3);
    }

    #[test]
    fn booleans_parse_java_style() {
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool("1"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn owner_line_field_count() {
        assert_eq!(
            parse_owner_line("John,1,0501111111"),
            Some(("John", "1", "0501111111"))
        );
        // extra fields ignored
        assert_eq!(
            parse_owner_line("John,1,0501111111,extra"),
            Some(("John", "1", "0501111111"))
        );
        assert_eq!(parse_owner_line("John,1"), None);
        assert_eq!(parse_owner_line(""), None);
    }

    #[test]
    fn sample_fixture_shape() {
        let clinic = sample_clinic();
        assert_eq!(clinic.animals().len(), 3);
        assert_eq!(clinic.owners().len(), 2);
        let buddy = clinic.find_animal_by_name("Buddy").unwrap();
        let john = clinic.find_owner_by_name("John").unwrap();
        assert_eq!(clinic.owner_of(buddy), Some(john));
        let sarah = clinic.find_owner_by_name("Sarah").unwrap();
        assert_eq!(clinic.pets_of(sarah).len(), 2);
    }
}
