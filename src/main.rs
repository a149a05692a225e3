use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use motifevo::config::{AppConfig, ConfigManager};
use motifevo::data::{export_organisms, import_organisms, read_sequences};
use motifevo::engines::recombination::BatchRecombinator;
use motifevo::engines::{DynamicPlacer, OrganismFactory};
use motifevo::IdAllocator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "motifevo")]
#[command(version)]
#[command(about = "Recombination of PSSM/connector motif organisms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random population
    Generate {
        /// Configuration file (TOML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of organisms
        #[arg(short = 'n', long, default_value = "20")]
        size: usize,

        /// Output JSON file
        #[arg(short, long, default_value = "organisms.json")]
        output: PathBuf,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Recombine consecutive pairs of a population
    Recombine {
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Organisms JSON file
        #[arg(long)]
        organisms: PathBuf,

        /// Positive sequences (FASTA or one per line)
        #[arg(long)]
        sequences: PathBuf,

        /// Output JSON file for the offspring
        #[arg(short, long, default_value = "offspring.json")]
        output: PathBuf,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write the default configuration
    InitConfig {
        #[arg(short, long, default_value = "motifevo.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            size,
            output,
            seed,
        } => generate(config.as_deref(), size, &output, seed),

        Commands::Recombine {
            config,
            organisms,
            sequences,
            output,
            seed,
        } => recombine(config.as_deref(), &organisms, &sequences, &output, seed),

        Commands::InitConfig { output } => ConfigManager::new()
            .save_to_file(&output)
            .with_context(|| format!("writing {}", output.display())),
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let manager = ConfigManager::new();
    if let Some(path) = path {
        manager
            .load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?;
    }
    Ok(manager.get()?)
}

fn generate(config: Option<&Path>, size: usize, output: &Path, seed: Option<u64>) -> Result<()> {
    let config = load_config(config)?;
    let ids = IdAllocator::new();
    let factory = OrganismFactory::new(config.organism, &config.pssm, &ids);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let population = factory.random_population(size, &mut rng)?;

    export_organisms(&population, output).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn recombine(
    config: Option<&Path>,
    organisms: &Path,
    sequences: &Path,
    output: &Path,
    seed: Option<u64>,
) -> Result<()> {
    let config = load_config(config)?;
    let ids = IdAllocator::new();

    let population = import_organisms(organisms, &ids, config.pssm.pseudocount)
        .with_context(|| format!("reading organisms from {}", organisms.display()))?;
    let positive_set = read_sequences(sequences)
        .with_context(|| format!("reading sequences from {}", sequences.display()))?;
    if positive_set.is_empty() {
        bail!("no sequences found in {}", sequences.display());
    }

    let seed = seed
        .or(config.recombination.seed)
        .unwrap_or_else(rand::random);
    log::info!("Recombining {} organisms with seed {}", population.len(), seed);

    let placer = DynamicPlacer::new();
    let batch = BatchRecombinator::new(&placer, &ids, config.recombination);
    let outcome = batch.run(&population, &positive_set, seed)?;

    export_organisms(&outcome.offspring, output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}
