use crate::domain::model::Person;
use crate::domain::ports::{Console, Lesson, LessonKind};
use crate::utils::error::{Result, TourError};

/// A type bundles data with the behaviour that reads it.
pub struct ClassLesson {
    people: Vec<Person>,
}

impl ClassLesson {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

impl Lesson for ClassLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::Class
    }

    fn title(&self) -> &str {
        "Class: a blueprint of data and methods"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let person = self
            .people
            .first()
            .ok_or_else(|| TourError::MissingConfigError {
                field: "people".to_string(),
            })?;
        console.write_line(&person.greeting())
    }
}
