//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches the DOM, the network, or randomness runs
//! behind [`DesktopHostContext`].

mod boot;
mod effects;
mod host_ui;

use leptos::RwSignal;
use platform_host::HostServices;

pub(crate) use host_ui::{is_typing_target, measure_work_area};

use crate::{
    apps::AppCatalog,
    model::{Jitter, WindowId},
    reducer::RuntimeEffect,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
    host_strategy_name: &'static str,
}

impl DesktopHostContext {
    /// Wraps the service bundle assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self {
            services,
            host_strategy_name: platform_host_web::host_strategy_name(),
        }
    }

    /// Returns the injected host services.
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Starts the asynchronous app catalog fetch; the result is dropped if the provider unmounts
    /// first.
    pub fn install_catalog_boot(&self, catalog: RwSignal<AppCatalog>) {
        boot::install_catalog_boot(self.clone(), catalog);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), effect);
    }

    /// Focuses the primary input of `window_id` after the current render.
    pub fn focus_window_input(&self, window_id: WindowId) {
        host_ui::focus_window_input(window_id);
    }

    /// Samples a placement offset for a new window.
    pub fn random_jitter(&self) -> Jitter {
        host_ui::random_jitter()
    }
}
