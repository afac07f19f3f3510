// 📋 Student Registry - ordered in-memory roster
//
// Bulk updates write back through the shared handles, so every update is
// visible to anyone holding a handle. No handle stays borrowed while caller
// code runs: closures may read the registry from inside `filter`/`update_all`.

use crate::selection::{share, Shared};
use crate::student::{sample_students, Student};
use tracing::debug;

// ============================================================================
// STUDENT REGISTRY
// ============================================================================

/// Registry of students in insertion order
pub struct StudentRegistry {
    students: Vec<Shared<Student>>,
}

impl StudentRegistry {
    /// Create new registry with the sample students
    pub fn new() -> Self {
        Self::from_students(sample_students())
    }

    /// Create a registry with no students
    pub fn empty() -> Self {
        StudentRegistry {
            students: Vec::new(),
        }
    }

    pub fn from_students(students: Vec<Student>) -> Self {
        StudentRegistry {
            students: share(students),
        }
    }

    /// Register a student at the end of the roster
    pub fn register(&mut self, student: Student) {
        debug!(student = %student, "register");
        self.students.extend(share(vec![student]));
    }

    /// Shared handles to every registered student (same order)
    pub fn handles(&self) -> Vec<Shared<Student>> {
        self.students.clone()
    }

    /// Snapshot of all students, current values
    pub fn all(&self) -> Vec<Student> {
        self.students.iter().map(|s| s.borrow().clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    /// Students accepted by `predicate`, in roster order
    pub fn filter<F>(&self, predicate: F) -> Vec<Student>
    where
        F: Fn(&Student) -> bool,
    {
        self.students
            .iter()
            .filter(|handle| predicate(&*handle.borrow()))
            .map(|handle| handle.borrow().clone())
            .collect()
    }

    pub fn by_grade(&self, grade: &str) -> Vec<Student> {
        self.filter(|s| s.has_grade(grade))
    }

    pub fn by_country(&self, country: &str) -> Vec<Student> {
        self.filter(|s| s.country == country)
    }

    /// Mutate every student once, in roster order.
    ///
    /// Each student is updated on a copy that is written back before the next
    /// one starts, so `update_fn` sees earlier students already updated and
    /// later ones untouched.
    pub fn update_all<F>(&self, mut update_fn: F)
    where
        F: FnMut(&mut Student),
    {
        for handle in &self.students {
            let mut next = handle.borrow().clone();
            update_fn(&mut next);
            *handle.borrow_mut() = next;
        }

        debug!(count = self.students.len(), "update_all");
    }

    /// Append `suffix` to every grade ("B" → "B+")
    pub fn upgrade_all(&self, suffix: &str) {
        self.update_all(|s| s.upgrade(suffix));
    }
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
