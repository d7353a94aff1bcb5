use crate::domain::model::Person;
use crate::domain::ports::{Console, Lesson, LessonKind};
use crate::utils::error::{Result, TourError};

pub struct ObjectLesson {
    people: Vec<Person>,
}

impl ObjectLesson {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

impl Lesson for ObjectLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::Object
    }

    fn title(&self) -> &str {
        "Object: independent instances of one type"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let [first, second, ..] = self.people.as_slice() else {
            return Err(TourError::InvalidConfigValueError {
                field: "people".to_string(),
                value: self.people.len().to_string(),
                reason: "The object lesson needs two people".to_string(),
            });
        };
        console.write_line(&first.name)?;
        console.write_line(&second.age.to_string())
    }
}
