pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::LessonKind;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "oop-tour")]
#[command(about = "A guided tour of object-oriented concepts in Rust")]
pub struct CliConfig {
    /// Path to a TOML scenario file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Lessons to run, comma separated (defaults to the scenario's list, or all)
    #[arg(long, value_delimiter = ',')]
    pub lessons: Vec<LessonKind>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
