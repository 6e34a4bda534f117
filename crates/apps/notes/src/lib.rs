//! Notes hub desktop app: a note list beside a reader pane.
//!
//! Content comes from the host [`NotesSource`]; when the source fails or returns nothing, the hub
//! falls back to a small built-in set so the window is never empty.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, rc::Rc};

use desktop_app_contract::{launch_param_str, AppMountContext, INITIAL_SLUG_PARAM};
use leptos::*;
use platform_host::{NoteDocument, NoteSummary, NotesSource};

/// Slug shown when nothing else was requested.
pub const DEFAULT_NOTE_SLUG: &str = "about";

const MISSING_NOTE_BODY: &str = "Note not available.";
const PENDING_BODY: &str = "Loading… (API unavailable fallback)";

const ABOUT_BODY: &str = "Junior software developer with hands-on experience building \
production-level React applications and custom web tools. Strong frontend foundation with \
growing full-stack skills, including API integration, authentication, and admin dashboards.

Currently expanding CS fundamentals through Harvard's CS50.";

const FALLBACK_NOTES: [(&str, &str, &str); 4] = [
    ("about", "About Me", ABOUT_BODY),
    ("edu-cs50", "Harvard CS50", PENDING_BODY),
    ("edu-learn-academy", "LEARN Academy (Frontend)", PENDING_BODY),
    ("edu-kean", "Kean University - Accounting", PENDING_BODY),
];

/// Mount entry used by the desktop app registry.
pub fn mount(context: AppMountContext) -> View {
    view! { <NotesHubApp context=context /> }.into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where the current note list came from.
pub enum NotesOrigin {
    /// Host content API.
    Api,
    /// Built-in fallback notes.
    Local,
}

impl NotesOrigin {
    fn badge(self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::Local => "Local",
        }
    }

    fn footer_label(self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::Local => "Local fallback",
        }
    }
}

/// Built-in notes used when the content API is unavailable.
pub fn fallback_notes() -> Vec<NoteDocument> {
    FALLBACK_NOTES
        .iter()
        .map(|(slug, title, body)| NoteDocument {
            slug: slug.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        })
        .collect()
}

/// Built-in note for `slug`, or a "not available" placeholder titled with the slug.
pub fn fallback_note(slug: &str) -> NoteDocument {
    fallback_notes()
        .into_iter()
        .find(|note| note.slug == slug)
        .unwrap_or_else(|| NoteDocument {
            slug: slug.to_string(),
            title: slug.to_string(),
            body: MISSING_NOTE_BODY.to_string(),
        })
}

/// Loads the note list, using the built-in list when the source errors or is empty.
pub async fn load_note_list(source: &dyn NotesSource) -> (Vec<NoteSummary>, NotesOrigin) {
    match source.list_notes().await {
        Ok(entries) if !entries.is_empty() => (entries, NotesOrigin::Api),
        Ok(_) => (fallback_summaries(), NotesOrigin::Local),
        Err(err) => {
            logging::debug_warn!("notes list unavailable: {err}");
            (fallback_summaries(), NotesOrigin::Local)
        }
    }
}

/// Loads one note, using [`fallback_note`] when the source cannot provide it.
pub async fn load_note(source: &dyn NotesSource, slug: &str) -> NoteDocument {
    match source.note(slug).await {
        Ok(note) => NoteDocument {
            slug: slug.to_string(),
            ..note
        },
        Err(_) => fallback_note(slug),
    }
}

fn fallback_summaries() -> Vec<NoteSummary> {
    fallback_notes().iter().map(NoteDocument::summary).collect()
}

/// Picks the slug to show once `list` is known.
///
/// A requested slug present in the list wins, then the current slug if still listed, then the
/// first entry.
pub fn select_active_slug(list: &[NoteSummary], requested: Option<&str>, current: &str) -> String {
    let listed = |slug: &str| list.iter().any(|entry| entry.slug == slug);
    match requested {
        Some(slug) if listed(slug) => slug.to_string(),
        _ if listed(current) => current.to_string(),
        _ => list
            .first()
            .map(|entry| entry.slug.clone())
            .unwrap_or_else(|| DEFAULT_NOTE_SLUG.to_string()),
    }
}

/// Splits a note body into blank-line separated paragraphs.
pub fn paragraphs(body: &str) -> Vec<String> {
    body.split("\n\n")
        .map(str::trim)
        .filter(|para| !para.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drops async results that arrive after unmount or after a newer request started.
#[derive(Clone)]
struct RequestGate {
    alive: Rc<Cell<bool>>,
    latest: Rc<Cell<u64>>,
}

impl RequestGate {
    fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
            latest: Rc::new(Cell::new(0)),
        }
    }

    fn begin(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.alive.get() && self.latest.get() == ticket
    }

    fn close(&self) {
        self.alive.set(false);
    }
}

#[component]
/// Notes hub window contents.
///
/// Follows the hosting window's `initial_slug` launch param, so retargeting the notes window
/// switches the visible note without remounting.
pub fn NotesHubApp(
    /// Runtime context of the hosting window.
    context: AppMountContext,
) -> impl IntoView {
    let launch_params = context.launch_params;
    let requested =
        create_memo(move |_| launch_params.with(|params| launch_param_str(params, INITIAL_SLUG_PARAM)));
    let active = create_rw_signal(
        requested
            .get_untracked()
            .unwrap_or_else(|| DEFAULT_NOTE_SLUG.to_string()),
    );
    let list = create_rw_signal(Vec::<NoteSummary>::new());
    let origin = create_rw_signal(None::<NotesOrigin>);
    let note = create_rw_signal(None::<NoteDocument>);
    let loading_note = create_rw_signal(true);

    let list_gate = RequestGate::new();
    let note_gate = RequestGate::new();
    on_cleanup({
        let list_gate = list_gate.clone();
        let note_gate = note_gate.clone();
        move || {
            list_gate.close();
            note_gate.close();
        }
    });

    create_effect(move |_| {
        if let Some(slug) = requested.get() {
            if active.get_untracked() != slug {
                active.set(slug);
            }
        }
    });

    let notes = context.host.notes.clone();
    create_effect({
        let notes = notes.clone();
        move |_| {
            let requested = requested.get();
            let notes = notes.clone();
            let gate = list_gate.clone();
            let ticket = gate.begin();
            origin.set(None);
            spawn_local(async move {
                let (entries, from) = load_note_list(notes.as_ref()).await;
                if !gate.is_current(ticket) {
                    return;
                }
                let next = select_active_slug(&entries, requested.as_deref(), &active.get_untracked());
                list.set(entries);
                origin.set(Some(from));
                if active.get_untracked() != next {
                    active.set(next);
                }
            });
        }
    });

    create_effect(move |_| {
        let slug = active.get();
        let notes = notes.clone();
        let gate = note_gate.clone();
        let ticket = gate.begin();
        loading_note.set(true);
        spawn_local(async move {
            let doc = load_note(notes.as_ref(), &slug).await;
            if gate.is_current(ticket) {
                note.set(Some(doc));
                loading_note.set(false);
            }
        });
    });

    let source_footer = move || {
        origin
            .get()
            .map(NotesOrigin::footer_label)
            .unwrap_or("Loading…")
    };

    view! {
        <div class="app-shell app-notes-shell">
            <aside class="notes-sidebar">
                <div class="notes-sidebar-header">
                    <span class="notes-sidebar-title">"Notes"</span>
                    <span class="notes-source-badge">
                        {move || origin.get().map(NotesOrigin::badge).unwrap_or("Loading…")}
                    </span>
                </div>
                <For
                    each=move || list.get()
                    key=|entry| entry.slug.clone()
                    children=move |entry| {
                        let slug = entry.slug.clone();
                        let is_active = {
                            let slug = slug.clone();
                            move || active.with(|current| *current == slug)
                        };
                        view! {
                            <button
                                type="button"
                                class="notes-entry"
                                class:active=is_active
                                on:click=move |_| active.set(slug.clone())
                            >
                                <div class="notes-entry-title">{entry.title}</div>
                                <div class="notes-entry-slug">{entry.slug}</div>
                            </button>
                        }
                    }
                />
            </aside>
            <section class="notes-viewer">
                {move || {
                    if loading_note.get() {
                        return view! { <div class="notes-status">"Loading note…"</div> }
                            .into_view();
                    }
                    match note.get() {
                        None => view! { <div class="notes-status">"Failed to load note."</div> }
                            .into_view(),
                        Some(doc) => view! {
                            <article class="notes-document">
                                <h3>{doc.title.clone()}</h3>
                                {paragraphs(&doc.body)
                                    .into_iter()
                                    .enumerate()
                                    .map(|(idx, para)| {
                                        let class = if idx == 0 {
                                            "notes-paragraph notes-paragraph-lead"
                                        } else {
                                            "notes-paragraph"
                                        };
                                        view! { <p class=class>{para}</p> }
                                    })
                                    .collect_view()}
                                <div class="notes-footer">
                                    {format!("Slug: {} • Source: ", doc.slug)}
                                    {source_footer}
                                </div>
                            </article>
                        }
                        .into_view(),
                    }
                }}
            </section>
        </div>
    }
}
