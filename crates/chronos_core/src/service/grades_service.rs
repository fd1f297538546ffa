//! Grade-book use-case service.
//!
//! # Responsibility
//! - CRUD over semester configuration and subjects with write-through
//!   persistence of the whole grade-book document.
//! - Apply entry defaults: blank name/teacher/contact placeholders, grade
//!   inputs that fail to parse become 0.

use crate::model::grades::{
    GradesBook, GradesConfig, Subject, DEFAULT_CURRENT_SEMESTER, DEFAULT_SEMESTERS_PER_YEAR,
};
use crate::model::ids::MillisIdGenerator;
use crate::repo::slot_repo::{RepoResult, SlotRepository, GRADES_SLOT};
use crate::view::grades::{grade_chart, subjects_for_semester, GradeChart};
use log::info;

/// Raw dialog input for creating or editing a subject. Grade fields arrive
/// as entered; the service owns numeric defaulting.
#[derive(Debug, Clone, Default)]
pub struct SubjectDraft {
    /// `None` for a new subject.
    pub id: Option<i64>,
    pub name: String,
    pub teacher: String,
    pub contact: String,
    pub goal: String,
    pub current: String,
    pub weightages: String,
}

pub struct GradesService<R: SlotRepository> {
    repo: R,
    book: GradesBook,
    ids: MillisIdGenerator,
}

impl<R: SlotRepository> GradesService<R> {
    pub fn open(repo: R) -> RepoResult<Self> {
        let book: GradesBook = repo.load_json(GRADES_SLOT)?;
        info!(
            "event=collection_loaded module=grades status=ok subjects={}",
            book.subjects.len()
        );
        Ok(Self {
            repo,
            book,
            ids: MillisIdGenerator::new(),
        })
    }

    pub fn config(&self) -> GradesConfig {
        self.book.config
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.book.subjects
    }

    pub fn find_subject(&self, id: i64) -> Option<&Subject> {
        self.book.subjects.iter().find(|s| s.id == id)
    }

    /// Updates the semester layout. Non-positive values fall back to the
    /// documented defaults (2 semesters, semester 1) instead of persisting
    /// a broken configuration.
    pub fn set_config(&mut self, semesters_per_year: i64, current_semester: i64) -> RepoResult<()> {
        self.book.config = GradesConfig {
            semesters_per_year: positive_or(semesters_per_year, DEFAULT_SEMESTERS_PER_YEAR),
            current_semester: positive_or(current_semester, DEFAULT_CURRENT_SEMESTER),
        };
        self.flush()
    }

    /// Upserts a subject into `semester`. A draft without an id gets a
    /// fresh one; an unknown id is a silent no-op. Returns the saved id.
    pub fn save_subject(&mut self, draft: SubjectDraft, semester: u32) -> RepoResult<i64> {
        let subject = Subject {
            id: draft.id.unwrap_or(0),
            name: text_or(draft.name, "Unnamed Subject"),
            teacher: text_or(draft.teacher, "-"),
            contact: text_or(draft.contact, "-"),
            goal: number_or_zero(&draft.goal),
            current: number_or_zero(&draft.current),
            weightages: draft.weightages,
            semester,
        };

        match draft.id {
            None => {
                let mut subject = subject;
                subject.id = self.ids.next_id();
                let id = subject.id;
                self.book.subjects.push(subject);
                self.flush()?;
                info!("event=subject_created module=grades status=ok id={id}");
                Ok(id)
            }
            Some(id) => {
                if let Some(slot) = self.book.subjects.iter_mut().find(|s| s.id == id) {
                    *slot = subject;
                    self.flush()?;
                }
                Ok(id)
            }
        }
    }

    /// Removes a subject; unknown id skips the persist.
    pub fn remove_subject(&mut self, id: i64) -> RepoResult<bool> {
        let before = self.book.subjects.len();
        self.book.subjects.retain(|s| s.id != id);
        if self.book.subjects.len() == before {
            return Ok(false);
        }
        self.flush()?;
        info!("event=subject_removed module=grades status=ok id={id}");
        Ok(true)
    }

    /// Subjects shown on the given semester tab.
    pub fn semester_subjects(&self, semester: u32) -> Vec<&Subject> {
        subjects_for_semester(&self.book.subjects, semester)
    }

    /// Chart series for the given semester tab.
    pub fn chart(&self, semester: u32) -> GradeChart {
        grade_chart(&self.book.subjects, semester)
    }

    fn flush(&self) -> RepoResult<()> {
        self.repo.save_json(GRADES_SLOT, &self.book)
    }
}

fn positive_or(value: i64, fallback: u32) -> u32 {
    match u32::try_from(value) {
        Ok(value) if value > 0 => value,
        _ => fallback,
    }
}

fn text_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn number_or_zero(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}
