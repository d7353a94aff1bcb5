use crate::domain::account::Transaction;
use crate::domain::model::{Animal, Person, Species};
use crate::domain::ports::LessonKind;
use crate::domain::shape::Shape;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A tour scenario: the people, animals, shapes and account the lessons use.
/// Every section is optional and falls back to the built-in data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourConfig {
    #[serde(default)]
    pub tour: TourSection,
    #[serde(default = "default_people")]
    pub people: Vec<Person>,
    #[serde(default = "default_animals")]
    pub animals: Vec<Animal>,
    #[serde(default = "default_shapes")]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub account: AccountConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSection {
    #[serde(default = "default_tour_name")]
    pub name: String,
    pub description: Option<String>,
    pub lessons: Option<Vec<LessonKind>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub number: String,
    pub opening_balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

fn default_tour_name() -> String {
    "Object-oriented concepts".to_string()
}

fn default_people() -> Vec<Person> {
    vec![Person::new("Alice", 25), Person::new("Bob", 30)]
}

fn default_animals() -> Vec<Animal> {
    vec![
        Animal::new("Buddy", Species::Dog),
        Animal::new("Whiskers", Species::Cat),
    ]
}

fn default_shapes() -> Vec<Shape> {
    vec![Shape::rectangle(4.0, 5.0), Shape::circle(3.0)]
}

impl Default for TourSection {
    fn default() -> Self {
        Self {
            name: default_tour_name(),
            description: None,
            lessons: None,
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            number: "1234567890".to_string(),
            opening_balance: 1000.0,
            transactions: vec![
                Transaction::Deposit { amount: 500.0 },
                Transaction::Withdraw { amount: 2000.0 },
                Transaction::Withdraw { amount: 500.0 },
            ],
        }
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            tour: TourSection::default(),
            people: default_people(),
            animals: default_animals(),
            shapes: default_shapes(),
            account: AccountConfig::default(),
        }
    }
}

impl TourConfig {
    /// Loads a scenario from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TourError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TourError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unset ones are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            TourError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!("Environment variable {} is not set", var_name);
                format!("${{{}}}", var_name)
            })
        });

        Ok(result.to_string())
    }

    /// Lessons to run: the explicit list if one was given, all of them otherwise.
    pub fn lessons(&self) -> Vec<LessonKind> {
        self.tour
            .lessons
            .clone()
            .unwrap_or_else(|| LessonKind::ALL.to_vec())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("tour.name", &self.tour.name)?;

        if let Some(lessons) = &self.tour.lessons {
            validation::validate_min_len("tour.lessons", lessons, 1)?;
        }

        let lessons = self.lessons();
        if lessons.contains(&LessonKind::Class) {
            validation::validate_min_len("people", &self.people, 1)?;
        }
        if lessons.contains(&LessonKind::Object) {
            validation::validate_min_len("people", &self.people, 2)?;
        }
        for person in &self.people {
            validation::validate_non_empty_string("people.name", &person.name)?;
            validation::validate_range("people.age", person.age, 0, 150)?;
        }

        for animal in &self.animals {
            validation::validate_non_empty_string("animals.name", &animal.name)?;
        }

        for shape in &self.shapes {
            for (dimension, value) in shape.dimensions() {
                let field = format!("shapes.{}.{}", shape.name(), dimension);
                validation::validate_non_negative(&field, value)?;
            }
        }

        validation::validate_non_empty_string("account.number", &self.account.number)?;
        validation::validate_non_negative("account.opening_balance", self.account.opening_balance)?;
        for transaction in &self.account.transactions {
            let field = format!("account.transactions.{}", transaction.verb());
            validation::validate_non_negative(&field, transaction.amount())?;
        }

        Ok(())
    }
}

impl Validate for TourConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_uses_builtin_scenario() {
        let config = TourConfig::from_toml_str("").unwrap();
        assert_eq!(config, TourConfig::default());
        assert_eq!(config.lessons(), LessonKind::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_scenario() {
        let toml_content = r#"
[tour]
name = "shapes only"
lessons = ["polymorphism", "abstraction"]

[[shapes]]
kind = "rectangle"
length = 2.0
width = 3.0

[[shapes]]
kind = "circle"
radius = 1.0

[account]
number = "42"
opening_balance = 10.0

[[account.transactions]]
kind = "withdraw"
amount = 4.0
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.tour.name, "shapes only");
        assert_eq!(
            config.lessons(),
            vec![LessonKind::Polymorphism, LessonKind::Abstraction]
        );
        assert_eq!(
            config.shapes,
            vec![Shape::rectangle(2.0, 3.0), Shape::circle(1.0)]
        );
        assert_eq!(
            config.account.transactions,
            vec![Transaction::Withdraw { amount: 4.0 }]
        );
        assert_eq!(config.people.len(), 2);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("OOP_TOUR_TEST_ACCOUNT", "555-0100");

        let toml_content = r#"
[account]
number = "${OOP_TOUR_TEST_ACCOUNT}"
opening_balance = 0.0
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.account.number, "555-0100");

        std::env::remove_var("OOP_TOUR_TEST_ACCOUNT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[[shapes]]
kind = "circle"
radius = -2.0
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("shapes.circle.radius"));
    }

    #[test]
    fn test_object_lesson_needs_two_people() {
        let toml_content = r#"
[[people]]
name = "Alice"
age = 25
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let mut only_class = config.clone();
        only_class.tour.lessons = Some(vec![LessonKind::Class]);
        assert!(only_class.validate().is_ok());
    }

    fn validation_field(toml_content: &str) -> String {
        let config = TourConfig::from_toml_str(toml_content).unwrap();
        match config.validate() {
            Err(TourError::InvalidConfigValueError { field, .. }) => field,
            other => panic!("expected an invalid value error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_account_number_is_rejected() {
        let field = validation_field(
            r#"
[account]
number = "  "
opening_balance = 10.0
"#,
        );
        assert_eq!(field, "account.number");
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let animal_field = validation_field(
            r#"
[[animals]]
name = ""
species = "dog"
"#,
        );
        assert_eq!(animal_field, "animals.name");

        let person_field = validation_field(
            r#"
[[people]]
name = "Alice"
age = 25

[[people]]
name = " "
age = 30
"#,
        );
        assert_eq!(person_field, "people.name");
    }

    #[test]
    fn test_empty_lesson_list_is_rejected() {
        let field = validation_field("[tour]\nlessons = []\n");
        assert_eq!(field, "tour.lessons");
    }

    #[test]
    fn test_unknown_lesson_is_a_parse_error() {
        let result = TourConfig::from_toml_str("[tour]\nlessons = [\"metaclass\"]\n");
        assert!(matches!(
            result,
            Err(TourError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[tour]
name = "file-test"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TourConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.tour.name, "file-test");
    }
}
