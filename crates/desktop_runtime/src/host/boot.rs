use std::{cell::Cell, rc::Rc};

use leptos::{logging, on_cleanup, spawn_local, RwSignal, SignalSet};
use platform_host::AppCatalogSource;

use crate::{apps::AppCatalog, host::DesktopHostContext};

/// Fetches the API catalog; `None` means keep whatever is active.
pub(crate) async fn fetch_catalog(source: &dyn AppCatalogSource) -> Option<AppCatalog> {
    AppCatalog::from_fetch(source.list_apps().await)
}

pub(super) fn install_catalog_boot(host: DesktopHostContext, catalog: RwSignal<AppCatalog>) {
    logging::log!("desktop host strategy: {}", host.host_strategy_name());

    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    let source = host.services().apps.clone();
    spawn_local(async move {
        let fetched = fetch_catalog(source.as_ref()).await;
        if !alive.get() {
            return;
        }
        if let Some(next) = fetched {
            logging::log!("app catalog loaded from API ({} apps)", next.apps().len());
            catalog.set(next);
        }
    });
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{CatalogOrigin, MemoryAppCatalogSource, NoopAppCatalogSource};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unavailable_source_keeps_current_catalog() {
        assert_eq!(block_on(fetch_catalog(&NoopAppCatalogSource)), None);
        assert_eq!(
            block_on(fetch_catalog(&MemoryAppCatalogSource::default())),
            None
        );
    }

    #[test]
    fn populated_source_becomes_api_catalog() {
        let apps = AppCatalog::fallback().apps()[6..].to_vec();
        let source = MemoryAppCatalogSource::new(apps.clone());
        let catalog = block_on(fetch_catalog(&source)).expect("catalog");
        assert_eq!(catalog.origin(), CatalogOrigin::Api);
        assert_eq!(catalog.apps(), apps.as_slice());
    }
}
