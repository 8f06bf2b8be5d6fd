use clap::Parser;
use vet_clinic::config::cli::{CliConfig, Command};
use vet_clinic::core::store;
use vet_clinic::utils::{auth, logger};
use vet_clinic::{
    AnimalId, Clinic, ClinicError, LoadOutcome, OwnerId, SampleReason, Settings, Species,
    StorePaths,
};

fn main() {
    let cli = CliConfig::parse();

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    logger::init_cli_logger(settings.verbose);
    tracing::info!("Starting vet-clinic CLI");
    if settings.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // Fixed-credential gate carried over from the desktop login screen.
    let username = cli.username.as_deref().unwrap_or_default();
    let password = cli.password.as_deref().unwrap_or_default();
    if !auth::authenticate(username, password) {
        tracing::error!("login rejected for user {:?}", username);
        eprintln!("❌ Invalid credentials!");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &settings) {
        tracing::error!("command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &CliConfig, settings: &Settings) -> anyhow::Result<()> {
    let paths = StorePaths::new(settings.data_dir.clone());
    let (mut clinic, outcome) = store::load_all(&paths)?;
    match &outcome {
        LoadOutcome::Sample(SampleReason::NoPriorData) => {
            println!("No saved data found, starting with sample data");
        }
        LoadOutcome::Sample(SampleReason::BadAge(value)) => {
            println!(
                "Failed to load data: invalid age {:?}, starting with sample data",
                value
            );
        }
        LoadOutcome::Files { .. } => {}
    }

    dispatch(&mut clinic, &cli.command)?;

    if cli.command.mutates() {
        store::save_all(&clinic, &paths)?;
        println!("✅ Data saved successfully");
    }
    Ok(())
}

fn dispatch(clinic: &mut Clinic, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::ListAnimals => list_animals(clinic),
        Command::ListOwners => list_owners(clinic),
        Command::AddDog {
            name,
            age,
            breed,
            owner,
        } => add_animal(
            clinic,
            name,
            *age,
            Species::Dog {
                breed: breed.clone(),
            },
            owner.as_deref(),
        )?,
        Command::AddCat {
            name,
            age,
            indoor,
            owner,
        } => add_animal(
            clinic,
            name,
            *age,
            Species::Cat { indoor: *indoor },
            owner.as_deref(),
        )?,
        Command::AddBird {
            name,
            age,
            can_fly,
            owner,
        } => add_animal(
            clinic,
            name,
            *age,
            Species::Bird { can_fly: *can_fly },
            owner.as_deref(),
        )?,
        Command::AddOwner { name, id, phone } => {
            clinic.add_owner(name, id, phone);
            println!("✅ Owner added successfully");
        }
        Command::Assign { animal, owner } => {
            let animal = resolve_animal(clinic, animal)?;
            let owner_id = resolve_owner(clinic, owner)?;
            clinic.assign_owner(animal, owner_id)?;
            println!("✅ Animal assigned to owner: {}", owner);
        }
        Command::DeleteAnimal { name } => {
            let animal = resolve_animal(clinic, name)?;
            clinic.delete_animal(animal)?;
            println!("✅ Animal deleted successfully");
        }
        Command::DeleteOwner { name } => {
            let owner = resolve_owner(clinic, name)?;
            clinic.delete_owner(owner)?;
            println!("✅ Owner and associated pets deleted successfully");
        }
        Command::Service { animal, kind } => {
            let id = resolve_animal(clinic, animal)?;
            if let Some(animal) = clinic.animal(id) {
                println!("{}", animal.provide_service(kind));
            }
        }
        Command::Save => {}
    }
    Ok(())
}

fn add_animal(
    clinic: &mut Clinic,
    name: &str,
    age: i32,
    species: Species,
    owner: Option<&str>,
) -> anyhow::Result<()> {
    // resolve the owner before creating anything, so a bad name leaves no
    // partial entity behind
    let owner_id = match owner {
        Some(owner_name) => Some(resolve_owner(clinic, owner_name)?),
        None => None,
    };
    let animal = clinic.add_animal(name, age, species);
    if let Some(owner_id) = owner_id {
        clinic.assign_owner(animal, owner_id)?;
    }
    println!("✅ Animal added successfully");
    Ok(())
}

fn list_animals(clinic: &Clinic) {
    for animal in clinic.animals() {
        let owner = clinic
            .owner_of(animal.id)
            .and_then(|id| clinic.owner(id))
            .map_or_else(|| "None".to_string(), |o| o.name.clone());
        println!("{}, Owner: {}", animal.description(), owner);
    }
}

fn list_owners(clinic: &Clinic) {
    for owner in clinic.owners() {
        let pets = clinic.pets_of(owner.id);
        println!(
            "{} (ID: {}, Phone: {}) - {} pets",
            owner.name,
            owner.clinic_id,
            owner.phone,
            pets.len()
        );
        for pet in pets {
            println!("  {} ({})", pet.name, pet.species.tag());
        }
    }
}

fn resolve_animal(clinic: &Clinic, name: &str) -> Result<AnimalId, ClinicError> {
    clinic
        .find_animal_by_name(name)
        .ok_or_else(|| ClinicError::NoSuchAnimal(name.to_string()))
}

fn resolve_owner(clinic: &Clinic, name: &str) -> Result<OwnerId, ClinicError> {
    clinic
        .find_owner_by_name(name)
        .ok_or_else(|| ClinicError::NoSuchOwner(name.to_string()))
}
