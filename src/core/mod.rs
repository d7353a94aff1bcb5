pub mod engine;
pub mod lessons;

pub use crate::domain::ports::{Console, Lesson, LessonKind};
pub use crate::utils::error::Result;
