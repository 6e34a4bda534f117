use desktop_app_contract::{LaunchOptions, OpenNoteRequest};
use desktop_runtime::{use_desktop_runtime, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Daniel Lee - Portfolio OS" />
        <Meta name="description" content="A desktop-style portfolio with draggable windows and interactive apps." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/notes/:slug" view=NoteEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! { <DesktopLayout /> }
}

/// Desktop with the notes window opened at the routed slug.
#[component]
fn NoteEntry() -> impl IntoView {
    view! {
        <DesktopLayout>
            <OpenRoutedNote />
        </DesktopLayout>
    }
}

#[component]
fn DesktopLayout(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <DesktopShell />
            {children.map(|children| children())}
        </DesktopProvider>
    }
}

#[component]
fn OpenRoutedNote() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let params = use_params_map();
    let slug = move || params.with(|map| map.get("slug").cloned()).unwrap_or_default();

    create_effect(move |_| {
        let slug = slug();
        if slug.trim().is_empty() {
            return;
        }
        runtime.launcher.open_note(
            OpenNoteRequest {
                title: slug.clone(),
                slug,
            },
            LaunchOptions::default(),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_route_view<F, V>(_: F)
    where
        F: Fn() -> V + 'static,
        V: IntoView,
    {
    }

    #[test]
    fn route_entries_take_no_props() {
        assert_route_view(DesktopEntry);
        assert_route_view(NoteEntry);
    }
}
