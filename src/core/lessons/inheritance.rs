use crate::domain::model::Animal;
use crate::domain::ports::{Console, Lesson, LessonKind};
use crate::utils::error::Result;

pub struct InheritanceLesson {
    animals: Vec<Animal>,
}

impl InheritanceLesson {
    pub fn new(animals: Vec<Animal>) -> Self {
        Self { animals }
    }
}

impl Lesson for InheritanceLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::Inheritance
    }

    fn title(&self) -> &str {
        "Inheritance: shared shape, specialised behaviour"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        for animal in &self.animals {
            tracing::debug!(name = %animal.name, species = %animal.species, "speak");
            console.write_line(&format!("{}: {}", animal.name, animal.speak()))?;
        }
        Ok(())
    }
}
