//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the active app
//! catalog, and host bootstrap wiring. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use desktop_app_contract::{LaunchRequest, Launcher};
use leptos::*;
use platform_host::HostServices;

use crate::{
    apps::{AppCatalog, ExternalLaunchLedger},
    effect_executor,
    host::DesktopHostContext,
    launcher::launch_action,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Active app catalog; starts as the bundled fallback and is replaced once the API answers.
    pub catalog: RwSignal<AppCatalog>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Launch entry point shared with every mounted app.
    pub launcher: Launcher,
    pub(crate) external_launches: StoredValue<ExternalLaunchLedger>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Resolves and dispatches a launch request from any shell surface.
    pub fn launch(&self, request: LaunchRequest) {
        let jitter = self.host.with_value(|host| host.random_jitter());
        let action = self
            .catalog
            .with_untracked(|catalog| launch_action(request, catalog, jitter));
        match action {
            Ok(action) => self.dispatch_action(action),
            Err(err) => logging::debug_warn!("launch ignored: {err}"),
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and starts the catalog fetch.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let catalog = create_rw_signal(AppCatalog::fallback());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::debug_warn!("desktop reducer error: {err}"),
        }
    });

    let launch_slot = store_value(None::<DesktopRuntimeContext>);
    let launcher = Launcher::new(Callback::new(move |request: LaunchRequest| {
        if let Some(runtime) = launch_slot.get_value() {
            runtime.launch(request);
        }
    }));

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        catalog,
        dispatch,
        launcher,
        external_launches: store_value(ExternalLaunchLedger::default()),
    };
    launch_slot.set_value(Some(runtime));

    provide_context(runtime);

    host.with_value(|host| host.install_catalog_boot(catalog));
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{LaunchOptions, OpenNoteRequest};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowTarget;

    fn runtime_fixture() -> DesktopRuntimeContext {
        let host = store_value(DesktopHostContext::new(HostServices::offline()));
        let state = create_rw_signal(DesktopState::default());
        let interaction = create_rw_signal(InteractionState::default());
        let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
        let dispatch = Callback::new(move |action: DesktopAction| {
            state.update(|desktop| {
                interaction.update(|ui| {
                    let emitted = reduce_desktop(desktop, ui, action).expect("reduce");
                    effects.update(|queue| queue.extend(emitted));
                });
            });
        });
        DesktopRuntimeContext {
            host,
            state,
            interaction,
            effects,
            catalog: create_rw_signal(AppCatalog::fallback()),
            dispatch,
            launcher: Launcher::new(Callback::new(|_| {})),
            external_launches: store_value(ExternalLaunchLedger::default()),
        }
    }

    #[test]
    fn launch_opens_catalog_apps_and_notes() {
        let rt = create_runtime();
        let runtime = runtime_fixture();

        runtime.launch(LaunchRequest::App {
            app_id: "terminal".to_string(),
            options: LaunchOptions::default(),
        });
        runtime.launch(LaunchRequest::Note {
            request: OpenNoteRequest {
                title: "Harvard CS50".to_string(),
                slug: "edu-cs50".to_string(),
            },
            options: LaunchOptions::default(),
        });

        let desktop = runtime.state.get_untracked();
        let targets: Vec<_> = desktop.windows.iter().map(|w| w.target.clone()).collect();
        assert_eq!(targets, vec![WindowTarget::app("terminal"), WindowTarget::Notes]);
        assert_eq!(desktop.windows[1].title, "Notes - Harvard CS50");
        assert_eq!(runtime.effects.get_untracked().len(), 2);
        rt.dispose();
    }

    #[test]
    fn unknown_launches_leave_state_untouched() {
        let rt = create_runtime();
        let runtime = runtime_fixture();

        runtime.launch(LaunchRequest::App {
            app_id: "paint".to_string(),
            options: LaunchOptions::default(),
        });

        assert!(runtime.state.get_untracked().windows.is_empty());
        assert!(runtime.effects.get_untracked().is_empty());
        rt.dispose();
    }
}
