//! Portfolio project listing contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`ProjectsSource`].
pub type ProjectsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Project row from `GET /api/projects`.
pub struct ProjectSummary {
    /// Project title.
    #[serde(default)]
    pub title: Option<String>,
    /// One-line subtitle.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Technology stack summary.
    #[serde(default)]
    pub tech_stack: Option<String>,
    /// Longer summary text.
    #[serde(default)]
    pub summary: Option<String>,
    /// Source repository link.
    #[serde(default)]
    pub repo_url: Option<String>,
    /// Live deployment link.
    #[serde(default)]
    pub live_url: Option<String>,
    /// Sort key; rows without one sort last.
    #[serde(default)]
    pub order_index: Option<i32>,
}

impl ProjectSummary {
    /// Title or a generic placeholder.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or("Untitled")
    }
}

/// Sorts projects by `order_index`, keeping API order for ties.
pub fn sort_projects(projects: &mut [ProjectSummary]) {
    projects.sort_by_key(|project| project.order_index.unwrap_or(999));
}

/// Read-only project listing source.
pub trait ProjectsSource {
    /// Lists portfolio projects.
    fn list_projects<'a>(&'a self) -> ProjectsFuture<'a, Result<Vec<ProjectSummary>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Projects source for hosts without a content API.
pub struct NoopProjectsSource;

impl ProjectsSource for NoopProjectsSource {
    fn list_projects<'a>(&'a self) -> ProjectsFuture<'a, Result<Vec<ProjectSummary>, String>> {
        Box::pin(async { Err("projects source unavailable on this host".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory projects source.
pub struct MemoryProjectsSource {
    inner: Rc<RefCell<Vec<ProjectSummary>>>,
}

impl MemoryProjectsSource {
    /// Creates a source preloaded with `projects`.
    pub fn new(projects: Vec<ProjectSummary>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(projects)),
        }
    }
}

impl ProjectsSource for MemoryProjectsSource {
    fn list_projects<'a>(&'a self) -> ProjectsFuture<'a, Result<Vec<ProjectSummary>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().clone()) })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn projects_sort_by_order_index_and_keep_ties_stable() {
        let project = |title: &str, order_index: Option<i32>| ProjectSummary {
            title: Some(title.to_string()),
            order_index,
            ..ProjectSummary::default()
        };
        let mut projects = vec![
            project("c", None),
            project("a", Some(1)),
            project("d", None),
            project("b", Some(2)),
        ];

        sort_projects(&mut projects);

        let titles: Vec<&str> = projects.iter().map(ProjectSummary::display_title).collect();
        assert_eq!(titles, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn blank_titles_render_as_untitled() {
        let project = ProjectSummary {
            title: Some(" ".to_string()),
            ..ProjectSummary::default()
        };
        assert_eq!(project.display_title(), "Untitled");
    }
}
