//! # Statistics Engine
//!
//! Derives a point-in-time [`Statistics`] snapshot from a slice of students.
//! Nothing is cached: every call recomputes from the records it is given.
//!
//! ## Rounding
//!
//! All rounding is half-up on the scaled value (`f64::round`, which rounds half
//! away from zero; marks are never negative so the two agree):
//!
//! | Value                          | Decimals |
//! |--------------------------------|----------|
//! | Average marks                  | 2        |
//! | Passing / failing percentage   | 1        |
//! | Per-grade percentage           | 1        |
//!
//! Highest and lowest marks are reported as-is.
//!
//! ## Ties
//!
//! - **Top student**: the first record (in store order) that reaches the highest
//!   marks. Later records with the same marks do not displace it.
//! - **Most common grade**: grades are scanned best-first (A+, A, B, C, D, F) and
//!   the first one with the highest count wins.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ValidationError;
use crate::model::{Grade, Student, MAX_MARKS, MIN_MARKS};
use crate::store::DataStore;

/// Rounding to two decimals moves the average by at most half of this.
const AVERAGE_SLACK: f64 = 0.01;

/// Aggregate view over a set of students.
///
/// An empty snapshot has every numeric field at zero, no top student and an
/// empty distribution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    total: usize,
    average_marks: f64,
    highest_marks: f64,
    lowest_marks: f64,
    top_student: Option<Student>,
    grade_distribution: BTreeMap<Grade, usize>,
    passing: usize,
}

impl Statistics {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from precomputed parts, rejecting combinations that
    /// can't describe a real set of students: counts that don't add up, marks
    /// outside 0..=100 or out of order, an average outside the marks range, or a
    /// top student whose marks aren't the highest.
    pub fn new(
        total: usize,
        average_marks: f64,
        highest_marks: f64,
        lowest_marks: f64,
        top_student: Option<Student>,
        grade_distribution: BTreeMap<Grade, usize>,
        passing: usize,
    ) -> Result<Self, ValidationError> {
        if passing > total {
            return Err(ValidationError::InconsistentStatistics(format!(
                "passing count {} exceeds total {}",
                passing, total
            )));
        }
        let distributed: usize = grade_distribution.values().sum();
        if distributed != total {
            return Err(ValidationError::InconsistentStatistics(format!(
                "grade distribution covers {} students, expected {}",
                distributed, total
            )));
        }
        if top_student.is_some() != (total > 0) {
            return Err(ValidationError::InconsistentStatistics(
                "a top student is present exactly when there are students".to_string(),
            ));
        }
        check_marks(
            total,
            average_marks,
            highest_marks,
            lowest_marks,
            top_student.as_ref(),
        )?;
        Ok(Self {
            total,
            average_marks,
            highest_marks,
            lowest_marks,
            top_student,
            grade_distribution,
            passing,
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn average_marks(&self) -> f64 {
        self.average_marks
    }

    pub fn highest_marks(&self) -> f64 {
        self.highest_marks
    }

    pub fn lowest_marks(&self) -> f64 {
        self.lowest_marks
    }

    pub fn top_student(&self) -> Option<&Student> {
        self.top_student.as_ref()
    }

    /// Count per grade, only for grades that occur. Returns a copy.
    pub fn grade_distribution(&self) -> BTreeMap<Grade, usize> {
        self.grade_distribution.clone()
    }

    pub fn grade_count(&self, grade: Grade) -> usize {
        self.grade_distribution.get(&grade).copied().unwrap_or(0)
    }

    pub fn passing_count(&self) -> usize {
        self.passing
    }

    pub fn failing_count(&self) -> usize {
        self.total - self.passing
    }

    pub fn passing_percentage(&self) -> f64 {
        self.percentage_of(self.passing)
    }

    pub fn failing_percentage(&self) -> f64 {
        self.percentage_of(self.failing_count())
    }

    pub fn grade_percentage(&self, grade: Grade) -> f64 {
        self.percentage_of(self.grade_count(grade))
    }

    pub fn most_common_grade(&self) -> Option<Grade> {
        let mut best: Option<(Grade, usize)> = None;
        for grade in Grade::ALL {
            let count = self.grade_count(grade);
            if count > 0 && best.map_or(true, |(_, max)| count > max) {
                best = Some((grade, count));
            }
        }
        best.map(|(grade, _)| grade)
    }

    fn percentage_of(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round_to(count as f64 * 100.0 / self.total as f64, 1)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No statistics available - system is empty.");
        }
        writeln!(f, "Student Statistics Summary:")?;
        writeln!(f, "Total Students: {}", self.total)?;
        writeln!(f, "Average Marks: {:.2}", self.average_marks)?;
        writeln!(f, "Highest Marks: {:.2}", self.highest_marks)?;
        writeln!(f, "Lowest Marks: {:.2}", self.lowest_marks)?;
        writeln!(
            f,
            "Passing: {} ({:.1}%)",
            self.passing,
            self.passing_percentage()
        )?;
        write!(
            f,
            "Failing: {} ({:.1}%)",
            self.failing_count(),
            self.failing_percentage()
        )
    }
}

/// Compute a snapshot over `students`, scanning in the given order.
fn check_marks(
    total: usize,
    average: f64,
    highest: f64,
    lowest: f64,
    top_student: Option<&Student>,
) -> Result<(), ValidationError> {
    let inconsistent = |msg: String| Err(ValidationError::InconsistentStatistics(msg));

    if total == 0 {
        if average != 0.0 || highest != 0.0 || lowest != 0.0 {
            return inconsistent("an empty snapshot has zero marks".to_string());
        }
        return Ok(());
    }
    for (label, value) in [("average", average), ("highest", highest), ("lowest", lowest)] {
        if !(MIN_MARKS..=MAX_MARKS).contains(&value) {
            return inconsistent(format!("{} marks {} outside 0..=100", label, value));
        }
    }
    if lowest > highest {
        return inconsistent(format!(
            "lowest marks {} above highest {}",
            lowest, highest
        ));
    }
    // The average is rounded to two decimals, so it may sit slightly outside
    if average < lowest - AVERAGE_SLACK || average > highest + AVERAGE_SLACK {
        return inconsistent(format!(
            "average {} outside {}..={}",
            average, lowest, highest
        ));
    }
    if let Some(top) = top_student {
        if top.marks() != highest {
            return inconsistent(format!(
                "top student has {} but highest marks are {}",
                top.marks(),
                highest
            ));
        }
    }
    Ok(())
}

pub fn compute(students: &[Student]) -> Statistics {
    let Some(first) = students.first() else {
        return Statistics::empty();
    };

    let mut sum = 0.0;
    let mut highest = first.marks();
    let mut lowest = first.marks();
    let mut top = first;
    let mut passing = 0;
    let mut distribution = BTreeMap::new();

    for student in students {
        let marks = student.marks();
        sum += marks;

        if marks > highest {
            highest = marks;
            top = student;
        }
        if marks < lowest {
            lowest = marks;
        }
        if student.is_passing() {
            passing += 1;
        }
        *distribution.entry(student.grade()).or_insert(0) += 1;
    }

    Statistics {
        total: students.len(),
        average_marks: round_to(sum / students.len() as f64, 2),
        highest_marks: highest,
        lowest_marks: lowest,
        top_student: Some(top.clone()),
        grade_distribution: distribution,
        passing,
    }
}

/// Snapshot of everything currently in the store.
pub fn run<S: DataStore>(store: &S) -> Statistics {
    compute(&store.list_students())
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
