mod batch;
mod profiles;
mod score;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use leadq_core::{AppConfig, Environment, Priority};
use leadq_scoring::WeightingProfile;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadq")]
#[command(about = "Lead quality scoring and qualification")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a single lead read from a JSON file
    Score {
        /// Path to a JSON file containing one lead
        #[arg(long)]
        lead: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Score a JSON array of leads and list the stored results
    Batch {
        /// Path to a JSON file containing an array of leads
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Only list leads with this priority (hot, warm or cold)
        #[arg(long)]
        priority: Option<Priority>,

        /// Only list leads scoring at least this much
        #[arg(long)]
        min_score: Option<u8>,

        /// Only list leads whose industry contains this text
        #[arg(long)]
        industry: Option<String>,

        /// Maximum number of leads to list
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the available weighting profiles
    Profiles {
        /// YAML file with additional profiles
        #[arg(long)]
        profiles_file: Option<PathBuf>,
    },
}

/// Profile selection shared by the scoring commands.
#[derive(Debug, Clone, Default, Args)]
struct ProfileArgs {
    /// Weighting profile name (overrides `LEADQ_PROFILE`)
    #[arg(long)]
    profile: Option<String>,

    /// YAML file with additional profiles (overrides `LEADQ_PROFILES_PATH`)
    #[arg(long)]
    profiles_file: Option<PathBuf>,
}

impl ProfileArgs {
    /// Resolve the profile from flags, falling back to the environment config.
    fn resolve(&self, config: &AppConfig) -> anyhow::Result<WeightingProfile> {
        let name = self.profile.as_deref().unwrap_or(&config.profile);
        let path = self
            .profiles_file
            .as_deref()
            .or(config.profiles_path.as_deref());
        leadq_scoring::resolve_profile(name, path)
            .with_context(|| format!("failed to resolve weighting profile '{name}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Production logs go to collectors, so they drop color and use one line per event.
fn compact_logs(env: &Environment) -> bool {
    matches!(env, Environment::Production)
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if compact_logs(&config.env) {
        builder.compact().with_ansi(false).init();
    } else {
        builder.init();
    }
    tracing::debug!(env = %config.env, "tracing initialized");
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = leadq_core::load_app_config()?;
    init_tracing(&config)?;

    match cli.command {
        Some(Commands::Score {
            lead,
            profile,
            format,
        }) => {
            let profile = profile.resolve(&config)?;
            score::run_score(profile, &lead, format)?;
        }
        Some(Commands::Batch {
            input,
            profile,
            priority,
            min_score,
            industry,
            limit,
            format,
        }) => {
            let profile = profile.resolve(&config)?;
            let filter = leadq_core::LeadFilter {
                industry,
                priority,
                min_score,
                limit,
            };
            batch::run_batch(profile, &input, &filter, format)?;
        }
        Some(Commands::Profiles { profiles_file }) => {
            let path = profiles_file.or(config.profiles_path);
            profiles::run_profiles(path.as_deref())?;
        }
        None => println!("leadq: no command given; run `leadq --help` for usage"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
