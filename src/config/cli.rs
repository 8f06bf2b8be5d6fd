use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vet-clinic")]
#[command(about = "Veterinary clinic record keeper over flat text files")]
pub struct CliConfig {
    /// Directory holding animals.txt, owners.txt and relations.txt
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// TOML config file; command-line flags win over file values
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short = 'u', long)]
    pub username: Option<String>,

    #[arg(short = 'p', long)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all animals with their details and owner
    ListAnimals,
    /// List all owners with their pets
    ListOwners,
    /// Register a dog
    AddDog {
        name: String,
        age: i32,
        breed: String,
        /// Assign to this owner right away
        #[arg(long)]
        owner: Option<String>,
    },
    /// Register a cat
    AddCat {
        name: String,
        age: i32,
        #[arg(long)]
        indoor: bool,
        #[arg(long)]
        owner: Option<String>,
    },
    /// Register a bird
    AddBird {
        name: String,
        age: i32,
        #[arg(long)]
        can_fly: bool,
        #[arg(long)]
        owner: Option<String>,
    },
    /// Register an owner
    AddOwner {
        name: String,
        id: String,
        phone: String,
    },
    /// Move an animal to a new owner
    Assign { animal: String, owner: String },
    /// Delete an animal
    DeleteAnimal { name: String },
    /// Delete an owner and every animal in its pet list
    DeleteOwner { name: String },
    /// Print the service message for an animal
    Service { animal: String, kind: String },
    /// Rewrite the three store files from the loaded state
    Save,
}

impl Command {
    /// Whether the store files should be rewritten after this command.
    pub fn mutates(&self) -> bool {
        !matches!(
            self,
            Self::ListAnimals | Self::ListOwners | Self::Service { .. }
        )
    }
}
