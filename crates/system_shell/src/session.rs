use std::{cell::RefCell, collections::BTreeMap, future::Future, rc::Rc};

use desktop_app_contract::Launcher;
use futures::future::LocalBoxFuture;
use leptos::{
    create_rw_signal, ReadSignal, RwSignal, Signal, SignalGetUntracked, SignalSet, SignalUpdate,
};
use platform_host::{AppDescriptor, HostServices, NoteSummary, ProjectSummary};
use serde::{Deserialize, Serialize};

use crate::{parser, ShellError};

/// Maximum number of commands kept in a session's recall history.
pub const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Presentation class of one terminal line.
pub enum LineKind {
    /// Regular command output.
    Out,
    /// Error output.
    Err,
    /// Echo of a submitted command.
    Cmd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One rendered terminal line.
pub struct TermLine {
    /// Presentation class.
    pub kind: LineKind,
    /// Line text.
    pub text: String,
}

impl TermLine {
    /// Regular output line.
    pub fn out(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Out,
            text: text.into(),
        }
    }

    /// Error line.
    pub fn err(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Err,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identity and contact links printed by the profile commands.
pub struct ShellProfile {
    /// Display name.
    pub name: String,
    /// One-line summary under the name.
    pub tagline: String,
    /// GitHub profile URL.
    pub github_url: String,
    /// LinkedIn profile URL.
    pub linkedin_url: String,
    /// Contact `mailto:` link.
    pub email_url: String,
}

impl Default for ShellProfile {
    fn default() -> Self {
        Self {
            name: "Daniel Lee".to_string(),
            tagline: "Builder mindset • Rust + Leptos • Product-oriented engineering".to_string(),
            github_url: "https://github.com/e-dvni".to_string(),
            linkedin_url: "https://www.linkedin.com/in/daniel-lee-7157a31a8/".to_string(),
            email_url: "mailto:danielslee078@gmail.com?subject=Portfolio%20Contact".to_string(),
        }
    }
}

#[derive(Clone)]
/// Everything a command may read or drive.
pub struct ShellEnvironment {
    /// Content sources and external navigation.
    pub host: HostServices,
    /// Window launcher.
    pub launcher: Launcher,
    /// Active app catalog.
    pub catalog: Signal<Vec<AppDescriptor>>,
    /// Profile links.
    pub profile: ShellProfile,
    /// Wall-clock text for `time` and the banner.
    pub clock: fn() -> String,
}

/// Async command handler.
pub type CommandHandler =
    Rc<dyn Fn(CommandContext) -> LocalBoxFuture<'static, Result<(), ShellError>>>;

/// Wraps an async fn into a [`CommandHandler`].
pub fn handler<F, Fut>(f: F) -> CommandHandler
where
    F: Fn(CommandContext) -> Fut + 'static,
    Fut: Future<Output = Result<(), ShellError>> + 'static,
{
    Rc::new(move |ctx| Box::pin(f(ctx)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Help metadata for a registered command.
pub struct CommandDescriptor {
    /// Command word.
    pub name: &'static str,
    /// Synopsis shown in the command list, e.g. `help [cmd]`.
    pub synopsis: &'static str,
    /// Detailed usage lines for `help <cmd>`.
    pub usage: &'static [&'static str],
}

#[derive(Clone)]
struct RegisteredCommand {
    descriptor: CommandDescriptor,
    handler: CommandHandler,
}

/// Shared command registry keyed by command word.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: Rc<RefCell<BTreeMap<&'static str, RegisteredCommand>>>,
}

impl CommandRegistry {
    /// Registers or replaces a command.
    pub fn register(&self, descriptor: CommandDescriptor, handler: CommandHandler) {
        self.commands.borrow_mut().insert(
            descriptor.name,
            RegisteredCommand {
                descriptor,
                handler,
            },
        );
    }

    /// Registered descriptors in registration-key order.
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        self.commands
            .borrow()
            .values()
            .map(|registered| registered.descriptor.clone())
            .collect()
    }

    /// Looks up a descriptor by command word.
    pub fn descriptor(&self, name: &str) -> Option<CommandDescriptor> {
        self.commands
            .borrow()
            .get(name)
            .map(|registered| registered.descriptor.clone())
    }

    fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands
            .borrow()
            .get(name)
            .map(|registered| registered.handler.clone())
    }
}

#[derive(Debug, Default)]
/// Recall history with an up/down cursor.
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Appends a command and resets the cursor.
    pub fn push(&mut self, command: &str) {
        self.cursor = None;
        if command.trim().is_empty() {
            return;
        }
        self.entries.push(command.to_string());
        if self.entries.len() > HISTORY_LIMIT {
            let overflow = self.entries.len() - HISTORY_LIMIT;
            self.entries.drain(0..overflow);
        }
    }

    /// Steps back to an older command.
    pub fn older(&mut self) -> Option<String> {
        let next = match self.cursor {
            None => self.entries.len().checked_sub(1)?,
            Some(idx) => idx.saturating_sub(1),
        };
        self.cursor = Some(next);
        self.entries.get(next).cloned()
    }

    /// Steps forward; returns an empty line once past the newest command.
    pub fn newer(&mut self) -> Option<String> {
        let idx = self.cursor?;
        if idx + 1 >= self.entries.len() {
            self.cursor = None;
            return Some(String::new());
        }
        self.cursor = Some(idx + 1);
        self.entries.get(idx + 1).cloned()
    }

    /// Recorded commands, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[derive(Clone, Default)]
struct ContentCache {
    notes: Rc<RefCell<Option<Vec<NoteSummary>>>>,
    projects: Rc<RefCell<Option<Vec<ProjectSummary>>>>,
}

#[derive(Clone)]
/// Per-invocation handle passed to command handlers.
pub struct CommandContext {
    /// Arguments after the command word.
    pub args: Vec<String>,
    /// Shared environment.
    pub env: ShellEnvironment,
    registry: CommandRegistry,
    lines: RwSignal<Vec<TermLine>>,
    cache: ContentCache,
}

impl CommandContext {
    /// Positional argument `idx`, if present.
    pub fn arg(&self, idx: usize) -> Option<&str> {
        self.args.get(idx).map(String::as_str)
    }

    /// Appends an output line.
    pub fn out(&self, text: impl Into<String>) {
        self.push(TermLine::out(text));
    }

    /// Appends an error line.
    pub fn err(&self, text: impl Into<String>) {
        self.push(TermLine::err(text));
    }

    /// Appends several output lines.
    pub fn out_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines.into_iter().map(TermLine::out).collect::<Vec<_>>();
        self.lines.update(|existing| existing.extend(lines));
    }

    /// Resets the screen to the banner.
    pub fn clear(&self) {
        self.lines.set(vec![banner(&self.env)]);
    }

    /// Command registry, for help output.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    fn push(&self, line: TermLine) {
        self.lines.update(|existing| existing.push(line));
    }

    /// Notes list, fetched once per session.
    ///
    /// A failed fetch prints an error and yields an empty list without caching, so a later
    /// command retries.
    pub async fn notes(&self) -> Vec<NoteSummary> {
        if let Some(cached) = self.cache.notes.borrow().clone() {
            return cached;
        }
        self.out("Fetching notes from API…");
        let source = self.env.host.notes.clone();
        match source.list_notes().await {
            Ok(notes) => {
                self.out(format!("Loaded {} note(s).", notes.len()));
                *self.cache.notes.borrow_mut() = Some(notes.clone());
                notes
            }
            Err(_) => {
                self.err("Failed to load notes (API unavailable). Try again later.");
                Vec::new()
            }
        }
    }

    /// Projects list sorted by order index, fetched once per session.
    pub async fn projects(&self) -> Vec<ProjectSummary> {
        if let Some(cached) = self.cache.projects.borrow().clone() {
            return cached;
        }
        self.out("Fetching projects from API…");
        let source = self.env.host.projects.clone();
        match source.list_projects().await {
            Ok(mut projects) => {
                platform_host::sort_projects(&mut projects);
                self.out(format!("Loaded {} project(s).", projects.len()));
                *self.cache.projects.borrow_mut() = Some(projects.clone());
                projects
            }
            Err(_) => {
                self.err("Failed to load projects (API unavailable). Try again later.");
                Vec::new()
            }
        }
    }

    /// Opens `url` outside the shell.
    pub async fn open_external(&self, url: &str) -> Result<(), ShellError> {
        let service = self.env.host.external_urls.clone();
        service
            .open_url(url)
            .await
            .map_err(ShellError::Unavailable)
    }
}

fn banner(env: &ShellEnvironment) -> TermLine {
    TermLine::out(format!("Portfolio OS Terminal - {}", (env.clock)()))
}

/// Root shell engine holding the command registry.
#[derive(Clone, Default)]
pub struct ShellEngine {
    registry: CommandRegistry,
}

impl ShellEngine {
    /// Creates an engine with no commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with every built-in command registered.
    pub fn with_builtins() -> Self {
        let engine = Self::new();
        crate::builtins::register_builtins(&engine.registry);
        engine
    }

    /// Shared registry.
    pub fn registry(&self) -> CommandRegistry {
        self.registry.clone()
    }

    /// Starts a terminal session with its own screen, history, and content cache.
    pub fn new_session(&self, env: ShellEnvironment) -> ShellSession {
        let lines = create_rw_signal(vec![
            banner(&env),
            TermLine::out("Type `help` to see commands. Try `projects` or `notes`."),
        ]);
        ShellSession {
            registry: self.registry.clone(),
            env,
            lines,
            history: Rc::new(RefCell::new(CommandHistory::default())),
            cache: ContentCache::default(),
        }
    }
}

/// One terminal session.
#[derive(Clone)]
pub struct ShellSession {
    registry: CommandRegistry,
    env: ShellEnvironment,
    lines: RwSignal<Vec<TermLine>>,
    history: Rc<RefCell<CommandHistory>>,
    cache: ContentCache,
}

impl ShellSession {
    /// Reactive screen contents.
    pub fn lines(&self) -> ReadSignal<Vec<TermLine>> {
        self.lines.read_only()
    }

    /// Current screen contents without tracking.
    pub fn snapshot(&self) -> Vec<TermLine> {
        self.lines.get_untracked()
    }

    /// Recalls an older command.
    pub fn history_previous(&self) -> Option<String> {
        self.history.borrow_mut().older()
    }

    /// Recalls a newer command.
    pub fn history_next(&self) -> Option<String> {
        self.history.borrow_mut().newer()
    }

    /// Runs `line` in the background.
    pub fn submit(&self, line: String) {
        leptos::spawn_local(self.execute(line));
    }

    /// Runs one command line to completion.
    pub fn execute(&self, line: String) -> LocalBoxFuture<'static, ()> {
        let session = self.clone();
        Box::pin(async move {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return;
            }
            session.history.borrow_mut().push(trimmed);
            session.lines.update(|lines| {
                lines.push(TermLine {
                    kind: LineKind::Cmd,
                    text: format!("> {trimmed}"),
                })
            });

            if let Err(err) = session.dispatch(trimmed).await {
                session
                    .lines
                    .update(|lines| lines.push(TermLine::err(err.to_string())));
            }
        })
    }

    async fn dispatch(&self, line: &str) -> Result<(), ShellError> {
        let mut words = parser::tokenize(line)?;
        if words.is_empty() {
            return Ok(());
        }
        let command = parser::normalize(&words.remove(0));
        let handler = self
            .registry
            .handler(&command)
            .ok_or_else(|| ShellError::UnknownCommand(command.clone()))?;
        handler(self.context(words)).await
    }

    /// Tab completion for `input`.
    ///
    /// Returns the replacement input when exactly one candidate matches; several candidates are
    /// printed instead.
    pub fn complete(&self, input: String) -> LocalBoxFuture<'static, Option<String>> {
        let ctx = self.context(Vec::new());
        Box::pin(async move {
            let outcome = crate::completion::complete(&ctx, &input).await;
            match outcome {
                crate::completion::Completion::Replace(line) => Some(line),
                crate::completion::Completion::Candidates(labels) => {
                    ctx.out(labels.join("   "));
                    None
                }
                crate::completion::Completion::Nothing => None,
            }
        })
    }

    /// Shared environment.
    pub fn env(&self) -> &ShellEnvironment {
        &self.env
    }

    fn context(&self, args: Vec<String>) -> CommandContext {
        CommandContext {
            args,
            env: self.env.clone(),
            registry: self.registry.clone(),
            lines: self.lines,
            cache: self.cache.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn history_walks_back_and_forward() {
        let mut history = CommandHistory::default();
        history.push("help");
        history.push("notes");
        history.push("   ");

        assert_eq!(history.older(), Some("notes".to_string()));
        assert_eq!(history.older(), Some("help".to_string()));
        assert_eq!(history.older(), Some("help".to_string()));
        assert_eq!(history.newer(), Some("notes".to_string()));
        assert_eq!(history.newer(), Some(String::new()));
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn history_is_bounded() {
        let mut history = CommandHistory::default();
        for idx in 0..(HISTORY_LIMIT + 5) {
            history.push(&format!("cmd {idx}"));
        }
        assert_eq!(history.entries().len(), HISTORY_LIMIT);
        assert_eq!(history.entries()[0], "cmd 5");
    }
}
