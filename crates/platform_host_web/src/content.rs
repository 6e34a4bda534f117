//! HTTP adapters for the portfolio content API.

use platform_host::{
    descriptors_from_api, note_summaries_from_api, ApiApp, ApiNoteSummary, AppCatalogFuture,
    AppCatalogSource, AppDescriptor, NoteDocument, NoteSummary, NotesFuture, NotesSource,
    ProjectSummary, ProjectsFuture, ProjectsSource,
};
use serde::Deserialize;

use crate::{bridge, config::api_url};

#[derive(Debug, Clone, Copy, Default)]
/// App catalog backed by `GET /api/apps`.
pub struct HttpAppCatalogSource;

impl AppCatalogSource for HttpAppCatalogSource {
    fn list_apps<'a>(&'a self) -> AppCatalogFuture<'a, Result<Vec<AppDescriptor>, String>> {
        Box::pin(async {
            let rows: Vec<ApiApp> = bridge::fetch_json(&api_url("/api/apps")).await?;
            Ok(descriptors_from_api(rows))
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ApiNote {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

impl ApiNote {
    fn into_document(self, slug: &str) -> NoteDocument {
        NoteDocument {
            slug: slug.to_string(),
            title: self
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| slug.to_string()),
            body: self.body.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Notes source backed by `GET /api/notes` and `GET /api/notes/:slug`.
pub struct HttpNotesSource;

impl NotesSource for HttpNotesSource {
    fn list_notes<'a>(&'a self) -> NotesFuture<'a, Result<Vec<NoteSummary>, String>> {
        Box::pin(async {
            let rows: Vec<ApiNoteSummary> = bridge::fetch_json(&api_url("/api/notes")).await?;
            Ok(note_summaries_from_api(rows))
        })
    }

    fn note<'a>(&'a self, slug: &'a str) -> NotesFuture<'a, Result<NoteDocument, String>> {
        Box::pin(async move {
            let path = format!("/api/notes/{}", bridge::encode_path_segment(slug));
            let note: ApiNote = bridge::fetch_json(&api_url(&path)).await?;
            Ok(note.into_document(slug))
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Project listing backed by `GET /api/projects`.
pub struct HttpProjectsSource;

impl ProjectsSource for HttpProjectsSource {
    fn list_projects<'a>(&'a self) -> ProjectsFuture<'a, Result<Vec<ProjectSummary>, String>> {
        Box::pin(async { bridge::fetch_json(&api_url("/api/projects")).await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn note_payload_falls_back_to_slug_title() {
        let note = ApiNote {
            title: Some("  ".to_string()),
            body: None,
        }
        .into_document("edu-kean");

        assert_eq!(
            note,
            NoteDocument {
                slug: "edu-kean".to_string(),
                title: "edu-kean".to_string(),
                body: String::new(),
            }
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn http_sources_report_unsupported_off_wasm() {
        assert!(block_on(HttpAppCatalogSource.list_apps()).is_err());
        assert!(block_on(HttpNotesSource.list_notes()).is_err());
        assert!(block_on(HttpNotesSource.note("about")).is_err());
        assert!(block_on(HttpProjectsSource.list_projects()).is_err());
    }
}
