use leptos::SignalGetUntracked;

use crate::{
    parser::{normalize, tokenize},
    session::CommandContext,
};

const MAX_CANDIDATES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Completion {
    Replace(String),
    Candidates(Vec<String>),
    Nothing,
}

struct Candidate {
    key: String,
    label: String,
    value: String,
}

/// Completes a command word, or an `open` target against projects, notes, and apps.
pub(crate) async fn complete(ctx: &CommandContext, input: &str) -> Completion {
    let Ok(words) = tokenize(input) else {
        return Completion::Nothing;
    };

    if words.len() <= 1 && !input.contains(char::is_whitespace) {
        let prefix = normalize(input);
        let matches = ctx
            .registry()
            .descriptors()
            .into_iter()
            .map(|descriptor| descriptor.name)
            .filter(|name| name.starts_with(&prefix))
            .collect::<Vec<_>>();
        return match matches.as_slice() {
            [] => Completion::Nothing,
            [only] => Completion::Replace(format!("{only} ")),
            many => Completion::Candidates(many.iter().map(|name| name.to_string()).collect()),
        };
    }

    let command = words.first().map(|word| normalize(word)).unwrap_or_default();
    if command != "open" {
        return Completion::Nothing;
    }
    let new_window = words.get(1).map(|word| normalize(word)).as_deref() == Some("new");
    let prefix = normalize(
        words
            .get(if new_window { 2 } else { 1 })
            .map(String::as_str)
            .unwrap_or_default(),
    );

    let projects = ctx.projects().await;
    let mut notes = ctx.notes().await;
    notes.sort_by_key(|note| normalize(&note.slug));
    let apps = ctx.env.catalog.get_untracked();

    let project_candidates = projects.iter().enumerate().map(|(idx, project)| Candidate {
        key: (idx + 1).to_string(),
        label: format!("{}:{}", idx + 1, project.display_title()),
        value: format!("\"{}\"", project.display_title()),
    });
    let note_candidates = notes.iter().map(|note| Candidate {
        key: note.slug.clone(),
        label: format!("note:{}", note.slug),
        value: note.slug.clone(),
    });
    let app_candidates = apps.iter().map(|app| Candidate {
        key: app.id.clone(),
        label: format!("app:{}", app.id),
        value: app.id.clone(),
    });

    let matches = project_candidates
        .filter(|c| normalize(&c.key).starts_with(&prefix) || normalize(&c.value).contains(&prefix))
        .chain(note_candidates.filter(|c| normalize(&c.key).starts_with(&prefix)))
        .chain(app_candidates.filter(|c| normalize(&c.key).starts_with(&prefix)))
        .collect::<Vec<_>>();

    match matches.as_slice() {
        [] => Completion::Nothing,
        [only] => {
            let head = if new_window { "open new" } else { "open" };
            Completion::Replace(format!("{head} {} ", only.value))
        }
        many => Completion::Candidates(
            many.iter()
                .take(MAX_CANDIDATES)
                .map(|candidate| candidate.label.clone())
                .collect(),
        ),
    }
}
