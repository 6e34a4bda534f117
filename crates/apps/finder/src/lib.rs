//! Finder desktop app: browsable shortcuts to projects, education notes, and profile links.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, rc::Rc};

use desktop_app_contract::{
    AppMountContext, LaunchOptions, Launcher, OpenNoteRequest, OpenUrlRequest, UrlKind,
};
use leptos::*;
use platform_host::{sort_projects, AppDescriptor, NoteSummary, ProjectSummary};

/// Mount entry used by the desktop app registry.
pub fn mount(context: AppMountContext) -> View {
    view! { <FinderApp context=context /> }.into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sidebar section.
pub enum FinderSection {
    /// Portfolio projects.
    Projects,
    /// Education notes.
    Education,
    /// Profile links.
    Links,
}

impl FinderSection {
    /// Sidebar order.
    pub const ALL: [Self; 3] = [Self::Projects, Self::Education, Self::Links];

    /// Sidebar label and section heading.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Links => "Links",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What clicking a finder item opens.
pub enum FinderTarget {
    /// Catalog app by id.
    App(String),
    /// Note in the notes hub.
    Note(OpenNoteRequest),
    /// Ad-hoc URL window.
    Url(OpenUrlRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One clickable finder tile.
pub struct FinderItem {
    /// Stable key within a section.
    pub id: String,
    /// Tile title.
    pub title: String,
    /// Secondary line.
    pub subtitle: Option<String>,
    /// Launch target.
    pub target: FinderTarget,
}

impl FinderItem {
    fn new(id: impl Into<String>, title: impl Into<String>, subtitle: Option<&str>, target: FinderTarget) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.map(str::to_string),
            target,
        }
    }
}

fn app_for_project_title(title: &str) -> &'static str {
    let title = title.to_lowercase();
    if title.contains("admin") {
        "admin"
    } else if title.contains("led") {
        "led-builder"
    } else if title.contains("resume") {
        "resume"
    } else {
        "about"
    }
}

/// Maps API projects to tiles: live sites embed, repositories open externally, and anything
/// without links opens the closest catalog app.
pub fn project_items(projects: &[ProjectSummary]) -> Vec<FinderItem> {
    let mut projects = projects.to_vec();
    sort_projects(&mut projects);
    projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let title = project
                .title
                .clone()
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| format!("Project {}", idx + 1));
            let subtitle = project
                .subtitle
                .as_deref()
                .or(project.tech_stack.as_deref())
                .unwrap_or("Click to open");
            let target = match (project.live_url.as_deref(), project.repo_url.as_deref()) {
                (Some(url), _) => FinderTarget::Url(OpenUrlRequest {
                    title: title.clone(),
                    url: url.to_string(),
                    kind: UrlKind::Iframe,
                }),
                (None, Some(url)) => FinderTarget::Url(OpenUrlRequest {
                    title: title.clone(),
                    url: url.to_string(),
                    kind: UrlKind::External,
                }),
                (None, None) => FinderTarget::App(app_for_project_title(&title).to_string()),
            };
            FinderItem::new(format!("api-{idx}"), title, Some(subtitle), target)
        })
        .collect()
}

/// Project tiles built from catalog apps when the projects API is unavailable.
pub fn fallback_project_items(catalog: &[AppDescriptor]) -> Vec<FinderItem> {
    let name = |id: &str, default: &str| {
        catalog
            .iter()
            .find(|app| app.id == id)
            .map(|app| app.name.clone())
            .unwrap_or_else(|| default.to_string())
    };
    vec![
        FinderItem::new(
            "p1",
            name("admin", "Admin Dashboard"),
            Some("Auth • Project tracking • Scheduling • CRM tools"),
            FinderTarget::App("admin".to_string()),
        ),
        FinderItem::new(
            "p2",
            name("led-builder", "Custom LED Builder"),
            Some("Live builder (iframe)"),
            FinderTarget::App("led-builder".to_string()),
        ),
        FinderItem::new(
            "p3",
            name("resume", "Resume.pdf"),
            Some("Open my resume (PDF)"),
            FinderTarget::App("resume".to_string()),
        ),
    ]
}

const EDUCATION: [(&str, &str, &str); 3] = [
    ("edu-cs50", "Harvard CS50", "Currently enrolled - CS fundamentals"),
    (
        "edu-learn-academy",
        "LEARN Academy (Frontend)",
        "JS • React • HTML/CSS • Tailwind",
    ),
    ("edu-kean", "Kean University - Accounting", "B.S. Accounting"),
];

fn note_item(slug: &str, title: &str, subtitle: Option<&str>) -> FinderItem {
    FinderItem::new(
        slug,
        title,
        subtitle,
        FinderTarget::Note(OpenNoteRequest {
            title: title.to_string(),
            slug: slug.to_string(),
        }),
    )
}

/// Education tiles: `edu-` notes from the notes list, or the built-in entries when none are listed.
pub fn education_items(notes: &[NoteSummary]) -> Vec<FinderItem> {
    let listed = notes
        .iter()
        .filter(|note| note.slug.starts_with("edu-"))
        .map(|note| {
            let subtitle = EDUCATION
                .iter()
                .find(|(slug, _, _)| *slug == note.slug)
                .map(|(_, _, subtitle)| *subtitle);
            note_item(&note.slug, &note.title, subtitle)
        })
        .collect::<Vec<_>>();
    if !listed.is_empty() {
        return listed;
    }
    EDUCATION
        .iter()
        .map(|(slug, title, subtitle)| note_item(slug, title, Some(subtitle)))
        .collect()
}

/// Profile link tiles.
pub fn link_items() -> Vec<FinderItem> {
    vec![
        FinderItem::new(
            "l1",
            "GitHub",
            Some("github.com/e-dvni"),
            FinderTarget::App("github".to_string()),
        ),
        FinderItem::new(
            "l2",
            "LinkedIn",
            Some("linkedin.com/in/daniel-lee-7157a31a8"),
            FinderTarget::App("linkedin".to_string()),
        ),
        FinderItem::new(
            "l3",
            "Contact (Mail)",
            Some("Send me an email"),
            FinderTarget::App("mail".to_string()),
        ),
    ]
}

fn launch(launcher: Launcher, target: FinderTarget) {
    let options = LaunchOptions::default();
    match target {
        FinderTarget::App(app_id) => launcher.open_app(app_id, options),
        FinderTarget::Note(request) => launcher.open_note(request, options),
        FinderTarget::Url(request) => launcher.open_url(request, options),
    }
}

#[component]
/// Finder window contents.
pub fn FinderApp(
    /// Runtime context of the hosting window.
    context: AppMountContext,
) -> impl IntoView {
    let launcher = context.launcher;
    let catalog = context.catalog;
    let active = create_rw_signal(FinderSection::Projects);
    let projects = create_rw_signal(None::<Vec<FinderItem>>);
    let notes = create_rw_signal(Vec::<NoteSummary>::new());

    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    let host = context.host.clone();
    spawn_local(async move {
        let loaded_projects = host.projects.list_projects().await;
        let loaded_notes = host.notes.list_notes().await;
        if !alive.get() {
            return;
        }
        match loaded_projects {
            Ok(rows) if !rows.is_empty() => projects.set(Some(project_items(&rows))),
            Ok(_) => {}
            Err(err) => logging::debug_warn!("finder projects unavailable: {err}"),
        }
        if let Ok(rows) = loaded_notes {
            notes.set(rows);
        }
    });

    let items = move || match active.get() {
        FinderSection::Projects => projects
            .get()
            .unwrap_or_else(|| catalog.with(|apps| fallback_project_items(apps))),
        FinderSection::Education => notes.with(|rows| education_items(rows)),
        FinderSection::Links => link_items(),
    };

    view! {
        <div class="app-shell app-finder-shell">
            <aside class="finder-sidebar">
                <div class="finder-sidebar-title">"Favorites"</div>
                {FinderSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                type="button"
                                class="finder-section"
                                class:active=move || active.get() == section
                                on:click=move |_| active.set(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <Show when=move || active.get() == FinderSection::Projects>
                    <div class="finder-source">
                        "Source: "
                        {move || if projects.with(Option::is_some) { "API" } else { "Local fallback" }}
                    </div>
                </Show>
            </aside>
            <section class="finder-main">
                <div class="finder-heading">
                    <h3>{move || active.get().label()}</h3>
                    <span class="finder-count">{move || format!("{} items", items().len())}</span>
                </div>
                <div class="finder-grid">
                    {move || {
                        items()
                            .into_iter()
                            .map(|item| {
                                let target = item.target.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="finder-item"
                                        on:click=move |_| launch(launcher, target.clone())
                                    >
                                        <div class="finder-item-title">{item.title}</div>
                                        {item
                                            .subtitle
                                            .map(|subtitle| {
                                                view! { <div class="finder-item-subtitle">{subtitle}</div> }
                                            })}
                                        <div class="finder-item-hint">"Click to open"</div>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn project(title: &str, live: Option<&str>, repo: Option<&str>) -> ProjectSummary {
        ProjectSummary {
            title: Some(title.to_string()),
            live_url: live.map(str::to_string),
            repo_url: repo.map(str::to_string),
            ..ProjectSummary::default()
        }
    }

    #[test]
    fn projects_prefer_live_then_repo_then_catalog_app() {
        let items = project_items(&[
            project("Portfolio", Some("https://example.dev"), Some("https://github.com/x")),
            project("Tools", None, Some("https://github.com/x/tools")),
            project("Sign Avenue Admin", None, None),
        ]);
        assert_eq!(
            items[0].target,
            FinderTarget::Url(OpenUrlRequest {
                title: "Portfolio".to_string(),
                url: "https://example.dev".to_string(),
                kind: UrlKind::Iframe,
            })
        );
        assert!(matches!(
            &items[1].target,
            FinderTarget::Url(OpenUrlRequest { kind: UrlKind::External, .. })
        ));
        assert_eq!(items[2].target, FinderTarget::App("admin".to_string()));
        assert_eq!(items[2].subtitle.as_deref(), Some("Click to open"));
    }

    #[test]
    fn untitled_projects_are_numbered() {
        let items = project_items(&[ProjectSummary::default()]);
        assert_eq!(items[0].title, "Project 1");
        assert_eq!(items[0].target, FinderTarget::App("about".to_string()));
    }

    #[test]
    fn education_uses_listed_edu_notes_or_builtins() {
        let listed = education_items(&[
            NoteSummary {
                slug: "about".to_string(),
                title: "About Me".to_string(),
            },
            NoteSummary {
                slug: "edu-cs50".to_string(),
                title: "CS50x".to_string(),
            },
        ]);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "CS50x");
        assert_eq!(
            listed[0].subtitle.as_deref(),
            Some("Currently enrolled - CS fundamentals")
        );

        let builtin = education_items(&[]);
        assert_eq!(builtin.len(), 3);
        assert_eq!(
            builtin[2].target,
            FinderTarget::Note(OpenNoteRequest {
                title: "Kean University - Accounting".to_string(),
                slug: "edu-kean".to_string(),
            })
        );
    }

    #[test]
    fn fallback_projects_take_names_from_catalog() {
        let items = fallback_project_items(&[]);
        assert_eq!(items[1].title, "Custom LED Builder");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn sections_render_in_sidebar_order() {
        let labels = FinderSection::ALL.map(FinderSection::label);
        assert_eq!(labels, ["Projects", "Education", "Links"]);
    }
}
