//! Built-in terminal commands.

use desktop_app_contract::{LaunchOptions, OpenNoteRequest, OpenUrlRequest, UrlKind};
use leptos::SignalGetUntracked;
use platform_host::{NoteSummary, ProjectSummary};

use crate::{
    format::table,
    parser::{looks_like_slug, normalize},
    session::{handler, CommandContext, CommandDescriptor, CommandRegistry},
    ShellError,
};

const COMMAND_COLUMN_WIDTH: usize = 13;
const COMMANDS_PER_ROW: usize = 5;

pub(crate) fn register_builtins(registry: &CommandRegistry) {
    registry.register(
        CommandDescriptor {
            name: "help",
            synopsis: "help [cmd]",
            usage: &["help", "help <command>", "Show available commands."],
        },
        handler(help),
    );
    registry.register(
        CommandDescriptor {
            name: "clear",
            synopsis: "clear",
            usage: &["clear", "Clear the terminal screen."],
        },
        handler(|ctx: CommandContext| async move {
            ctx.clear();
            Ok(())
        }),
    );
    registry.register(
        CommandDescriptor {
            name: "whoami",
            synopsis: "whoami",
            usage: &["whoami", "Print a short profile summary."],
        },
        handler(|ctx: CommandContext| async move {
            let profile = ctx.env.profile.clone();
            ctx.out_lines([
                profile.name,
                profile.tagline,
                "Type `projects` or `notes`.".to_string(),
            ]);
            Ok(())
        }),
    );
    registry.register(
        CommandDescriptor {
            name: "skills",
            synopsis: "skills",
            usage: &["skills", "Show a quick skill matrix."],
        },
        handler(|ctx: CommandContext| async move {
            ctx.out_lines([
                "Skill Matrix",
                "  Frontend:  Leptos, React, TypeScript, UI state management",
                "  Backend:   Rails APIs, auth flows, CRUD, data modeling",
                "  Product:   UX polish, OS-like windowing, live CMS",
                "  Workflow:  Git/GitHub, debugging, incremental delivery",
            ]);
            Ok(())
        }),
    );
    registry.register(
        CommandDescriptor {
            name: "time",
            synopsis: "time",
            usage: &["time", "Print the current time."],
        },
        handler(|ctx: CommandContext| async move {
            ctx.out((ctx.env.clock)());
            Ok(())
        }),
    );
    registry.register(
        CommandDescriptor {
            name: "projects",
            synopsis: "projects",
            usage: &["projects", "List projects loaded from the portfolio API."],
        },
        handler(list_projects),
    );
    registry.register(
        CommandDescriptor {
            name: "notes",
            synopsis: "notes",
            usage: &["notes", "List notes available from the portfolio API."],
        },
        handler(list_notes),
    );
    registry.register(
        CommandDescriptor {
            name: "apps",
            synopsis: "apps",
            usage: &["apps", "List desktop applications and their ids."],
        },
        handler(list_apps),
    );
    registry.register(
        CommandDescriptor {
            name: "open",
            synopsis: "open",
            usage: &[
                "open <#|project name|note-slug|app-id> [repo|live]",
                "open new <#|project name|note-slug|app-id> [repo|live]",
                "Examples:",
                "  open 1",
                "  open \"Custom LED Builder\" live",
                "  open about",
                "  open new edu-cs50",
                "  open finder",
            ],
        },
        handler(open),
    );
    registry.register(
        CommandDescriptor {
            name: "url",
            synopsis: "url",
            usage: &[
                "url [new] <iframe|external> <url> [title]",
                "Open a page in a desktop window.",
                "Example:",
                "  url iframe https://example.com \"Example\"",
            ],
        },
        handler(open_url),
    );
    registry.register(
        CommandDescriptor {
            name: "contact",
            synopsis: "contact",
            usage: &["contact", "Show contact shortcuts."],
        },
        handler(|ctx: CommandContext| async move {
            ctx.out_lines([
                "Contact shortcuts:",
                "  email     → open mailto",
                "  github    → open GitHub profile",
                "  linkedin  → open LinkedIn profile",
            ]);
            Ok(())
        }),
    );
    registry.register(
        CommandDescriptor {
            name: "github",
            synopsis: "github",
            usage: &["github", "Open GitHub in a new tab."],
        },
        handler(|ctx: CommandContext| async move {
            let url = ctx.env.profile.github_url.clone();
            ctx.open_external(&url).await?;
            ctx.out("Opened GitHub.");
            Ok(())
        }),
    );
    registry.register(
        CommandDescriptor {
            name: "linkedin",
            synopsis: "linkedin",
            usage: &["linkedin", "Open LinkedIn in a new tab."],
        },
        handler(|ctx: CommandContext| async move {
            let url = ctx.env.profile.linkedin_url.clone();
            ctx.open_external(&url).await?;
            ctx.out("Opened LinkedIn.");
            Ok(())
        }),
    );
    registry.register(
        CommandDescriptor {
            name: "email",
            synopsis: "email",
            usage: &["email", "Open a mailto link."],
        },
        handler(|ctx: CommandContext| async move {
            let url = ctx.env.profile.email_url.clone();
            ctx.open_external(&url).await?;
            ctx.out("Opened email.");
            Ok(())
        }),
    );
}

async fn help(ctx: CommandContext) -> Result<(), ShellError> {
    if let Some(topic) = ctx.arg(0).map(normalize) {
        if let Some(descriptor) = ctx.registry().descriptor(&topic) {
            let mut lines = descriptor.usage.iter();
            if let Some(first) = lines.next() {
                ctx.out(*first);
            }
            ctx.out_lines(lines.map(|line| format!("  {line}")));
            return Ok(());
        }
    }

    let names = ctx
        .registry()
        .descriptors()
        .into_iter()
        .map(|descriptor| descriptor.synopsis)
        .collect::<Vec<_>>();
    ctx.out("Commands:");
    ctx.out_lines(names.chunks(COMMANDS_PER_ROW).map(|row| {
        let row = row
            .iter()
            .map(|name| crate::format::pad_right(name, COMMAND_COLUMN_WIDTH))
            .collect::<String>();
        format!("  {}", row.trim_end())
    }));
    ctx.out_lines([
        "Tips:",
        "  • Use ↑ / ↓ for history",
        "  • Press Tab to autocomplete commands (and open targets)",
        "  • `open <slug>` reuses the current Notes window",
        "  • `open new <slug>` opens a separate Notes window",
    ]);
    Ok(())
}

async fn list_projects(ctx: CommandContext) -> Result<(), ShellError> {
    let projects = ctx.projects().await;
    if projects.is_empty() {
        ctx.out("No projects found.");
        return Ok(());
    }

    let rows = projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            vec![
                (idx + 1).to_string(),
                project.display_title().to_string(),
                project.tech_stack.clone().unwrap_or_else(|| "—".to_string()),
                format!(
                    "{} / {}",
                    if has_link(&project.repo_url) { "repo" } else { "—" },
                    if has_link(&project.live_url) { "live" } else { "—" },
                ),
            ]
        })
        .collect::<Vec<_>>();

    ctx.out("");
    ctx.out_lines(table(
        &[("#", 3), ("Title", 28), ("Stack", 22), ("Links", 11)],
        &rows,
    ));
    ctx.out("");
    ctx.out("Use `open <#>` or `open <name>` to open a project.");
    Ok(())
}

async fn list_notes(ctx: CommandContext) -> Result<(), ShellError> {
    let mut notes = ctx.notes().await;
    if notes.is_empty() {
        ctx.out("No notes found.");
        return Ok(());
    }
    notes.sort_by_key(|note| normalize(&note.title));

    let rows = notes
        .iter()
        .map(|note| vec![note.slug.clone(), note.title.clone()])
        .collect::<Vec<_>>();
    ctx.out("");
    ctx.out_lines(table(&[("Slug", 18), ("Title", 34)], &rows));
    ctx.out("");
    ctx.out("Use `open <slug>` to open a note. Example: `open about`");
    Ok(())
}

async fn list_apps(ctx: CommandContext) -> Result<(), ShellError> {
    let apps = ctx.env.catalog.get_untracked();
    if apps.is_empty() {
        ctx.out("No apps installed.");
        return Ok(());
    }
    let rows = apps
        .iter()
        .map(|app| vec![app.id.clone(), app.name.clone(), app.kind.as_str().to_string()])
        .collect::<Vec<_>>();
    ctx.out_lines(table(&[("Id", 14), ("Name", 24), ("Kind", 8)], &rows));
    Ok(())
}

async fn open(ctx: CommandContext) -> Result<(), ShellError> {
    let Some(first) = ctx.arg(0) else {
        return Err(ShellError::Usage(
            "Usage: open <#|project name|note-slug|app-id> [repo|live]".to_string(),
        ));
    };
    let new_window = normalize(first) == "new";
    let offset = usize::from(new_window);
    let Some(target) = ctx.arg(offset).map(str::to_string) else {
        return Err(ShellError::Usage(
            "Usage: open new <#|project name|note-slug|app-id> [repo|live]".to_string(),
        ));
    };
    let mode = ctx.arg(offset + 1).map(normalize).unwrap_or_default();
    let options = LaunchOptions { new_window };

    if mode == "repo" || mode == "live" {
        return open_project(&ctx, &target, &mode).await;
    }

    if looks_like_slug(&target) {
        let notes = ctx.notes().await;
        if let Some(note) = find_note(&notes, &target) {
            ctx.env.launcher.open_note(
                OpenNoteRequest {
                    title: note.title.clone(),
                    slug: note.slug.clone(),
                },
                options,
            );
            ctx.out(format!(
                "Opened note: {}{}",
                note.title,
                if new_window { " (new window)" } else { "" }
            ));
            return Ok(());
        }
    }

    let wanted = normalize(&target);
    let app = ctx
        .env
        .catalog
        .get_untracked()
        .into_iter()
        .find(|app| app.id == wanted);
    if let Some(app) = app {
        ctx.env.launcher.open_app(app.id.clone(), options);
        ctx.out(format!("Opened app: {}", app.name));
        return Ok(());
    }

    open_project(&ctx, &target, &mode).await
}

async fn open_project(ctx: &CommandContext, target: &str, mode: &str) -> Result<(), ShellError> {
    let projects = ctx.projects().await;
    let project = find_project(&projects, target)
        .ok_or_else(|| ShellError::NotFound(format!("Project not found: {target}")))?;
    let title = project.display_title().to_string();
    let repo = link(&project.repo_url);
    let live = link(&project.live_url);

    let (label, url) = match mode {
        "repo" => (
            "repo",
            repo.ok_or_else(|| ShellError::NotFound("That project has no repo URL.".to_string()))?,
        ),
        "live" => (
            "live",
            live.ok_or_else(|| ShellError::NotFound("That project has no live URL.".to_string()))?,
        ),
        _ => match (live, repo) {
            (Some(live), _) => ("live", live),
            (None, Some(repo)) => ("repo", repo),
            (None, None) => {
                return Err(ShellError::NotFound(
                    "No links found for that project (repo/live missing).".to_string(),
                ))
            }
        },
    };

    ctx.open_external(&url).await?;
    ctx.out(format!("Opened {label}: {title}"));
    Ok(())
}

async fn open_url(ctx: CommandContext) -> Result<(), ShellError> {
    const USAGE: &str = "Usage: url [new] <iframe|external> <url> [title]";
    let new_window = ctx.arg(0).map(normalize).as_deref() == Some("new");
    let offset = usize::from(new_window);

    let kind = ctx
        .arg(offset)
        .and_then(UrlKind::parse)
        .ok_or_else(|| ShellError::Usage(USAGE.to_string()))?;
    let url = ctx
        .arg(offset + 1)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ShellError::Usage(USAGE.to_string()))?
        .to_string();
    let title = ctx
        .arg(offset + 2)
        .map(str::to_string)
        .unwrap_or_else(|| url.clone());

    ctx.env.launcher.open_url(
        OpenUrlRequest {
            title: title.clone(),
            url,
            kind,
        },
        LaunchOptions { new_window },
    );
    ctx.out(format!("Opened {}: {title}", kind.as_str()));
    Ok(())
}

fn find_note<'a>(notes: &'a [NoteSummary], slug: &str) -> Option<&'a NoteSummary> {
    let wanted = normalize(slug);
    notes.iter().find(|note| normalize(&note.slug) == wanted)
}

/// Resolves a project by 1-based position (clamped into range) or by title.
pub(crate) fn find_project<'a>(
    projects: &'a [ProjectSummary],
    target: &str,
) -> Option<&'a ProjectSummary> {
    if projects.is_empty() {
        return None;
    }
    if let Ok(position) = target.trim().parse::<i64>() {
        let last = projects.len() as i64 - 1;
        let idx = (position - 1).clamp(0, last);
        return projects.get(idx as usize);
    }

    let wanted = normalize(target);
    projects
        .iter()
        .find(|project| normalize(project.display_title()) == wanted)
        .or_else(|| {
            projects
                .iter()
                .find(|project| normalize(project.display_title()).contains(&wanted))
        })
}

fn link(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

fn has_link(raw: &Option<String>) -> bool {
    link(raw).is_some()
}
