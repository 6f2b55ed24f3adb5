use crate::app::state::PageHandle;
use foodguide_core::PageAction;
use yew::prelude::*;

/// Fetch the catalog once after the first render.
///
/// Skipped when the page was seeded with a catalog. The result, success or
/// failure, is dispatched exactly once; nothing is retried.
#[hook]
pub fn use_bootstrap(page: &PageHandle, enabled: bool) {
    let dispatcher = page.dispatcher();
    use_effect_with((), move |()| {
        if enabled {
            let url = crate::paths::catalog_url();
            log::debug!("fetching catalog from {url}");
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::data::fetch_catalog(&url).await;
                crate::data::log_outcome(&result);
                dispatcher.dispatch(PageAction::Loaded(result));
            });
        }
        || {}
    });
}
