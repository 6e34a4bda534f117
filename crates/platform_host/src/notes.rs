//! Notes content contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`NotesSource`].
pub type NotesFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Note list entry.
pub struct NoteSummary {
    /// Stable slug.
    pub slug: String,
    /// Display title.
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Full note content.
pub struct NoteDocument {
    /// Stable slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Plain-text body; blank lines separate paragraphs.
    pub body: String,
}

impl NoteDocument {
    /// Returns the summary row for this note.
    pub fn summary(&self) -> NoteSummary {
        NoteSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Loosely-typed wire row from `GET /api/notes`.
pub struct ApiNoteSummary {
    /// Slug, possibly blank.
    #[serde(default)]
    pub slug: Option<String>,
    /// Title, possibly blank.
    #[serde(default)]
    pub title: Option<String>,
}

/// Normalizes wire rows: blank slugs are dropped and blank titles fall back to the slug.
pub fn note_summaries_from_api(rows: Vec<ApiNoteSummary>) -> Vec<NoteSummary> {
    rows.into_iter()
        .filter_map(|row| {
            let slug = row.slug.unwrap_or_default().trim().to_string();
            if slug.is_empty() {
                return None;
            }
            let title = row
                .title
                .map(|title| title.trim().to_string())
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| slug.clone());
            Some(NoteSummary { slug, title })
        })
        .collect()
}

/// Read-only notes content source.
pub trait NotesSource {
    /// Lists note summaries.
    fn list_notes<'a>(&'a self) -> NotesFuture<'a, Result<Vec<NoteSummary>, String>>;

    /// Loads one note by slug.
    fn note<'a>(&'a self, slug: &'a str) -> NotesFuture<'a, Result<NoteDocument, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Notes source for hosts without a content API.
pub struct NoopNotesSource;

impl NotesSource for NoopNotesSource {
    fn list_notes<'a>(&'a self) -> NotesFuture<'a, Result<Vec<NoteSummary>, String>> {
        Box::pin(async { Err("notes source unavailable on this host".to_string()) })
    }

    fn note<'a>(&'a self, slug: &'a str) -> NotesFuture<'a, Result<NoteDocument, String>> {
        Box::pin(async move { Err(format!("note `{slug}` unavailable on this host")) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory notes source keeping insertion order.
pub struct MemoryNotesSource {
    inner: Rc<RefCell<Vec<NoteDocument>>>,
}

impl MemoryNotesSource {
    /// Creates a source preloaded with `notes`.
    pub fn new(notes: Vec<NoteDocument>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(notes)),
        }
    }

    /// Inserts or replaces a note by slug.
    pub fn upsert(&self, note: NoteDocument) {
        let mut notes = self.inner.borrow_mut();
        match notes.iter_mut().find(|existing| existing.slug == note.slug) {
            Some(existing) => *existing = note,
            None => notes.push(note),
        }
    }
}

impl NotesSource for MemoryNotesSource {
    fn list_notes<'a>(&'a self) -> NotesFuture<'a, Result<Vec<NoteSummary>, String>> {
        Box::pin(async move {
            Ok(self
                .inner
                .borrow()
                .iter()
                .map(NoteDocument::summary)
                .collect())
        })
    }

    fn note<'a>(&'a self, slug: &'a str) -> NotesFuture<'a, Result<NoteDocument, String>> {
        Box::pin(async move {
            self.inner
                .borrow()
                .iter()
                .find(|note| note.slug == slug)
                .cloned()
                .ok_or_else(|| format!("note `{slug}` not found"))
        })
    }
}
