// 🎓 Student Record - four plain string fields
// Structural equality only: two students with the same fields are the same student

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// STUDENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "First_Name")]
    pub first_name: String,

    #[serde(rename = "Last_Name")]
    pub last_name: String,

    /// Grade label ("A", "B", "B+", ...)
    #[serde(rename = "Grade")]
    pub grade: String,

    #[serde(rename = "Country")]
    pub country: String,
}

impl Student {
    pub fn new(first_name: &str, last_name: &str, grade: &str, country: &str) -> Self {
        Student {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            grade: grade.to_string(),
            country: country.to_string(),
        }
    }

    /// Append a suffix to the grade label ("B" + "+" → "B+")
    pub fn upgrade(&mut self, suffix: &str) {
        self.grade.push_str(suffix);
    }

    pub fn has_grade(&self, grade: &str) -> bool {
        self.grade == grade
    }
}

/// Structural representation: `{Nikofl Inno B Japan}`
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {}}}",
            self.first_name, self.last_name, self.grade, self.country
        )
    }
}

/// Render a sequence as `[{..} {..}]`
pub fn format_roster(students: &[Student]) -> String {
    let items: Vec<String> = students.iter().map(|s| s.to_string()).collect();
    format!("[{}]", items.join(" "))
}

/// The three fixed records the driver works on
pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new("Nikofl", "Inno", "B", "Japan"),
        Student::new("James", "Leborn", "A", "America"),
        Student::new("Kiturl", "Deropmerl", "B", "Greek"),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
