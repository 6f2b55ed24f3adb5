use std::rc::Rc;

use crate::components::detail_modal::DetailModal;
use crate::components::food_list::FoodList;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::image_viewer::ImageViewer;
use crate::components::region_nav::RegionNav;
use foodguide_core::{Catalog, FoodId, PageAction, RegionFilter};
use yew::prelude::*;

pub mod bootstrap;
pub mod effects;
pub mod state;

#[function_component(App)]
pub fn app() -> Html {
    html! { <CatalogApp /> }
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct CatalogAppProps {
    /// Skip the network fetch and start from this catalog.
    #[prop_or_default]
    pub preloaded: Option<Rc<Catalog>>,
}

#[function_component(CatalogApp)]
pub fn catalog_app(props: &CatalogAppProps) -> Html {
    let page = state::use_page_state(props.preloaded.clone());
    bootstrap::use_bootstrap(&page, props.preloaded.is_none());
    effects::use_escape_listener(&page);
    effects::use_body_scroll_lock(page.0.view.is_detail_open());

    let on_select_region = {
        let page = page.dispatcher();
        Callback::from(move |filter: RegionFilter| page.dispatch(PageAction::SelectRegion(filter)))
    };
    let on_open_detail = {
        let page = page.dispatcher();
        Callback::from(move |id: FoodId| page.dispatch(PageAction::OpenDetail(id)))
    };
    let on_close_detail = {
        let page = page.dispatcher();
        Callback::from(move |()| page.dispatch(PageAction::CloseDetail))
    };
    let on_open_image = {
        let page = page.dispatcher();
        Callback::from(move |src: String| page.dispatch(PageAction::OpenViewer(src)))
    };
    let on_close_image = {
        let page = page.dispatcher();
        Callback::from(move |()| page.dispatch(PageAction::CloseViewer))
    };

    let model = &page.0;
    let regions: Vec<AttrValue> = model
        .store
        .catalog()
        .map(|c| c.region_keys().map(|k| AttrValue::from(k.to_string())).collect())
        .unwrap_or_default();
    let detail = model.detail().map(|listing| {
        (
            listing.item.clone(),
            AttrValue::from(listing.region.to_string()),
        )
    });

    html! {
        <>
            <Header />
            <main id="main" role="main">
                <section id="foods" class="foods-section">
                    <h2 class="section-title">{ crate::copy::SECTION_FOODS }</h2>
                    <RegionNav
                        regions={regions}
                        selected={AttrValue::from(model.region.key().to_string())}
                        on_select={on_select_region}
                    />
                    <FoodList store={model.store.clone()} region={model.region.clone()} on_open={on_open_detail} />
                </section>
            </main>
            <Footer />
            <DetailModal
                item={detail.as_ref().map(|(item, _)| item.clone())}
                region={detail.as_ref().map(|(_, region)| region.clone())}
                on_close={on_close_detail}
                on_open_image={on_open_image}
            />
            <ImageViewer src={model.view.viewer_src().map(|s| AttrValue::from(s.to_string()))} on_close={on_close_image} />
        </>
    }
}
