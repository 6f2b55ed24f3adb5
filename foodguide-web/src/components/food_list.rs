use crate::components::food_card::FoodCard;
use crate::copy;
use foodguide_core::{CatalogStore, FoodId, Listing, RegionFilter, select};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: CatalogStore,
    pub region: RegionFilter,
    pub on_open: Callback<FoodId>,
}

/// Ids are not guaranteed unique, so the position disambiguates the key.
fn card_key(index: usize, listing: &Listing<'_>) -> String {
    format!("{}-{}-{index}", listing.region, listing.item.id)
}

#[function_component(FoodList)]
pub fn food_list(p: &Props) -> Html {
    let body = match &p.store {
        CatalogStore::Loading => html! {
            <div class="loading" aria-busy="true">
                <div class="spinner"></div>
                <p>{ copy::LOADING }</p>
            </div>
        },
        CatalogStore::Failed(_) => html! {
            <div class="loading load-error" role="alert">
                <p>{ copy::LOAD_FAILED }</p>
            </div>
        },
        CatalogStore::Ready(catalog) => {
            let listings = select(catalog, &p.region);
            if listings.is_empty() {
                html! {
                    <div class="loading empty-state">
                        <p>{ copy::EMPTY_REGION }</p>
                    </div>
                }
            } else {
                html! {
                    <div class="food-grid">
                        { for listings.iter().enumerate().map(|(index, listing)| html! {
                            <FoodCard
                                key={card_key(index, listing)}
                                item={listing.item.clone()}
                                region={AttrValue::from(listing.region.to_string())}
                                on_open={p.on_open.clone()}
                            />
                        }) }
                    </div>
                }
            }
        }
    };

    html! {
        <div id="food-list" class="food-list" aria-live="polite">
            { body }
        </div>
    }
}
