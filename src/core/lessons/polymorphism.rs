use crate::domain::ports::{Console, Lesson, LessonKind};
use crate::domain::shape::Shape;
use crate::utils::error::Result;
use crate::utils::format::format_measure;

pub struct PolymorphismLesson {
    shapes: Vec<Shape>,
}

impl PolymorphismLesson {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

impl Lesson for PolymorphismLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::Polymorphism
    }

    fn title(&self) -> &str {
        "Polymorphism: one call, per-variant behaviour"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        for shape in &self.shapes {
            console.write_line(&format_measure(shape.area()))?;
        }
        Ok(())
    }
}
