pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::console::{BufferConsole, StdoutConsole};
pub use config::toml_config::TourConfig;
pub use crate::core::engine::{LessonReport, TourEngine, TourReport};
pub use domain::account::{BankAccount, Transaction};
pub use domain::model::{Animal, Person, Species};
pub use domain::ports::{Console, Lesson, LessonKind};
pub use domain::shape::Shape;
pub use utils::error::{Result, TourError};
