use crate::utils::error::{Result, TourError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sink for the lines a lesson prints.
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait Lesson {
    fn kind(&self) -> LessonKind;
    fn title(&self) -> &str;
    fn run(&self, console: &mut dyn Console) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Class,
    Object,
    Inheritance,
    Polymorphism,
    Encapsulation,
    Abstraction,
}

impl LessonKind {
    pub const ALL: [LessonKind; 6] = [
        LessonKind::Class,
        LessonKind::Object,
        LessonKind::Inheritance,
        LessonKind::Polymorphism,
        LessonKind::Encapsulation,
        LessonKind::Abstraction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonKind::Class => "class",
            LessonKind::Object => "object",
            LessonKind::Inheritance => "inheritance",
            LessonKind::Polymorphism => "polymorphism",
            LessonKind::Encapsulation => "encapsulation",
            LessonKind::Abstraction => "abstraction",
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonKind {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        LessonKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| TourError::UnknownLesson {
                name: s.to_string(),
            })
    }
}
