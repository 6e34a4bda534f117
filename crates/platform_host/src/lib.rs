//! Typed host-domain contracts and shared models used across the desktop runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for everything the window manager consumes from outside
//! the shell: the launchable app catalog, notes and project content, and external navigation.
//! Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod apps;
pub mod external_url;
pub mod host;
pub mod notes;
pub mod projects;

pub use apps::{
    descriptors_from_api, ApiApp, AppCatalogFuture, AppCatalogSource, AppDescriptor, AppKind,
    CatalogOrigin, MemoryAppCatalogSource, NoopAppCatalogSource, WindowSize,
};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
pub use host::HostServices;
pub use notes::{
    note_summaries_from_api, ApiNoteSummary, MemoryNotesSource, NoopNotesSource, NoteDocument,
    NoteSummary, NotesFuture, NotesSource,
};
pub use projects::{
    sort_projects, MemoryProjectsSource, NoopProjectsSource, ProjectSummary, ProjectsFuture,
    ProjectsSource,
};
