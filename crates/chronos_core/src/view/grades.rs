//! Grade-book projections: semester filtering, goal gaps, chart series.

use crate::model::grades::Subject;

/// Where a subject's current grade sits relative to its goal. Exactly equal
/// means on-goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeStanding {
    Above,
    OnGoal,
    Below,
}

/// `current − goal` with its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeGap {
    pub delta: f64,
    pub standing: GradeStanding,
}

pub fn grade_gap(subject: &Subject) -> GradeGap {
    let delta = subject.current - subject.goal;
    let standing = if delta > 0.0 {
        GradeStanding::Above
    } else if delta < 0.0 {
        GradeStanding::Below
    } else {
        GradeStanding::OnGoal
    };
    GradeGap { delta, standing }
}

/// Subjects belonging to exactly the given semester, in insertion order.
pub fn subjects_for_semester(subjects: &[Subject], semester: u32) -> Vec<&Subject> {
    subjects.iter().filter(|s| s.semester == semester).collect()
}

/// Labels plus current/goal series for the semester's bar chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradeChart {
    pub labels: Vec<String>,
    pub current: Vec<f64>,
    pub goal: Vec<f64>,
}

pub fn grade_chart(subjects: &[Subject], semester: u32) -> GradeChart {
    let mut chart = GradeChart::default();
    for subject in subjects_for_semester(subjects, semester) {
        chart.labels.push(subject.name.clone());
        chart.current.push(subject.current);
        chart.goal.push(subject.goal);
    }
    chart
}
