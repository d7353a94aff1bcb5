use crate::domain::ports::{Console, Lesson, LessonKind};
use crate::domain::shape::Shape;
use crate::utils::error::Result;
use crate::utils::format::format_measure;

/// Every shape answers `area` and `perimeter`; callers never look inside.
pub struct AbstractionLesson {
    shapes: Vec<Shape>,
}

impl AbstractionLesson {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

impl Lesson for AbstractionLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::Abstraction
    }

    fn title(&self) -> &str {
        "Abstraction: a common interface over hidden details"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        for shape in &self.shapes {
            console.write_line(&format!(
                "{} area: {}",
                shape.name(),
                format_measure(shape.area())
            ))?;
            console.write_line(&format!(
                "{} perimeter: {}",
                shape.name(),
                format_measure(shape.perimeter())
            ))?;
        }
        Ok(())
    }
}
