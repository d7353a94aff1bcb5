mod abstraction;
mod class;
mod encapsulation;
mod inheritance;
mod object;
mod polymorphism;

pub use abstraction::AbstractionLesson;
pub use class::ClassLesson;
pub use encapsulation::EncapsulationLesson;
pub use inheritance::InheritanceLesson;
pub use object::ObjectLesson;
pub use polymorphism::PolymorphismLesson;

use crate::config::toml_config::TourConfig;
use crate::domain::ports::{Lesson, LessonKind};

/// Builds the lesson for `kind`, taking its data from the scenario.
pub fn build_lesson(kind: LessonKind, config: &TourConfig) -> Box<dyn Lesson> {
    match kind {
        LessonKind::Class => Box::new(ClassLesson::new(config.people.clone())),
        LessonKind::Object => Box::new(ObjectLesson::new(config.people.clone())),
        LessonKind::Inheritance => Box::new(InheritanceLesson::new(config.animals.clone())),
        LessonKind::Polymorphism => Box::new(PolymorphismLesson::new(config.shapes.clone())),
        LessonKind::Encapsulation => Box::new(EncapsulationLesson::new(config.account.clone())),
        LessonKind::Abstraction => Box::new(AbstractionLesson::new(config.shapes.clone())),
    }
}

pub fn build_lessons(kinds: &[LessonKind], config: &TourConfig) -> Vec<Box<dyn Lesson>> {
    kinds
        .iter()
        .map(|&kind| build_lesson(kind, config))
        .collect()
}
