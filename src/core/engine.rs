use crate::adapters::console::BufferConsole;
use crate::config::toml_config::TourConfig;
use crate::core::lessons::build_lessons;
use crate::core::{Console, Lesson, LessonKind};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonReport {
    pub lesson: LessonKind,
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TourReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub lessons: Vec<LessonReport>,
}

impl TourReport {
    pub fn lesson(&self, kind: LessonKind) -> Option<&LessonReport> {
        self.lessons.iter().find(|report| report.lesson == kind)
    }
}

pub struct TourEngine {
    name: String,
    description: Option<String>,
    lessons: Vec<Box<dyn Lesson>>,
}

impl TourEngine {
    pub fn new(name: impl Into<String>, lessons: Vec<Box<dyn Lesson>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            lessons,
        }
    }

    /// Sets a line printed once, before the first lesson.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds the engine for `kinds`, or for the scenario's own lesson list when empty.
    pub fn from_config(config: &TourConfig, kinds: &[LessonKind]) -> Self {
        let kinds = if kinds.is_empty() {
            config.lessons()
        } else {
            kinds.to_vec()
        };
        Self::new(config.tour.name.clone(), build_lessons(&kinds, config))
            .with_description(config.tour.description.clone())
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Runs every lesson in order, echoing a header and its transcript to `console`.
    /// Stops at the first lesson that fails.
    pub fn run(&self, console: &mut dyn Console) -> Result<TourReport> {
        tracing::info!("Starting tour '{}' with {} lessons", self.name, self.lessons.len());

        let mut report = TourReport {
            name: self.name.clone(),
            description: self.description.clone(),
            lessons: Vec::with_capacity(self.lessons.len()),
        };

        if let Some(description) = &self.description {
            console.write_line(description)?;
            console.write_line("")?;
        }

        for (index, lesson) in self.lessons.iter().enumerate() {
            tracing::debug!(lesson = %lesson.kind(), "running lesson");

            let mut transcript = BufferConsole::new();
            if let Err(e) = lesson.run(&mut transcript) {
                tracing::error!("Lesson '{}' failed: {}", lesson.kind(), e);
                return Err(e);
            }

            if index > 0 {
                console.write_line("")?;
            }
            console.write_line(&format!("----- {} -----", lesson.title()))?;
            for line in transcript.lines() {
                console.write_line(line)?;
            }

            tracing::info!(
                "Lesson '{}' finished ({} lines)",
                lesson.kind(),
                transcript.lines().len()
            );
            report.lessons.push(LessonReport {
                lesson: lesson.kind(),
                title: lesson.title().to_string(),
                lines: transcript.into_lines(),
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TourError;

    struct EchoLesson;

    impl Lesson for EchoLesson {
        fn kind(&self) -> LessonKind {
            LessonKind::Class
        }

        fn title(&self) -> &str {
            "Echo"
        }

        fn run(&self, console: &mut dyn Console) -> Result<()> {
            console.write_line("hello")
        }
    }

    struct FailingLesson;

    impl Lesson for FailingLesson {
        fn kind(&self) -> LessonKind {
            LessonKind::Object
        }

        fn title(&self) -> &str {
            "Failing"
        }

        fn run(&self, console: &mut dyn Console) -> Result<()> {
            console.write_line("partial")?;
            Err(TourError::MissingConfigError {
                field: "people".to_string(),
            })
        }
    }

    #[test]
    fn test_engine_echoes_headers_and_transcripts() {
        let lessons: Vec<Box<dyn Lesson>> = vec![Box::new(EchoLesson), Box::new(EchoLesson)];
        let engine = TourEngine::new("test", lessons);
        let mut console = BufferConsole::new();
        let report = engine.run(&mut console).unwrap();

        assert_eq!(
            console.lines(),
            ["----- Echo -----", "hello", "", "----- Echo -----", "hello"]
        );
        assert_eq!(report.lessons.len(), 2);
        assert_eq!(report.lessons[0].lines, vec!["hello".to_string()]);
    }

    #[test]
    fn test_description_is_printed_before_the_first_lesson() {
        let lessons: Vec<Box<dyn Lesson>> = vec![Box::new(EchoLesson)];
        let engine = TourEngine::new("test", lessons)
            .with_description(Some("A short walk through types".to_string()));
        let mut console = BufferConsole::new();
        let report = engine.run(&mut console).unwrap();

        assert_eq!(
            console.lines(),
            ["A short walk through types", "", "----- Echo -----", "hello"]
        );
        assert_eq!(
            report.description.as_deref(),
            Some("A short walk through types")
        );
    }

    #[test]
    fn test_failed_lesson_output_is_not_echoed() {
        let lessons: Vec<Box<dyn Lesson>> = vec![Box::new(EchoLesson), Box::new(FailingLesson)];
        let engine = TourEngine::new("test", lessons);
        let mut console = BufferConsole::new();
        assert!(engine.run(&mut console).is_err());
        assert_eq!(console.lines(), ["----- Echo -----", "hello"]);
    }
}
