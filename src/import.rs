// 📂 CSV Import - read a roster from disk
// Header: First_Name,Last_Name,Grade,Country

use crate::student::Student;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn load_csv(csv_path: &Path) -> Result<Vec<Student>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;

    let mut students = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        // +2: header line, 1-based numbering
        let student: Student = result
            .with_context(|| format!("Failed to deserialize student on line {}", index + 2))?;
        students.push(student);
    }

    info!(path = ?csv_path, count = students.len(), "loaded students from CSV");
    Ok(students)
}

// ============================================================================
// TESTS
// ============================================================================
