use crate::components::star_rating::StarRating;
use crate::copy;
use foodguide_core::{CARD_EXCERPT_CHARS, FoodId, FoodItem, card_specialties, excerpt};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: FoodItem,
    /// Region the item was listed under.
    pub region: AttrValue,
    pub on_open: Callback<FoodId>,
}

#[function_component(FoodCard)]
pub fn food_card(p: &Props) -> Html {
    let id = p.item.id;
    let on_card_click = {
        let on_open = p.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    };
    // The card is also listening; stop here so the detail opens once.
    let on_details_click = {
        let on_open = p.on_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_open.emit(id);
        })
    };

    let item = &p.item;
    html! {
        <div class="food-card" data-district={p.region.clone()} data-id={id.to_string()} onclick={on_card_click}>
            <img src={item.main_image.clone()} alt={item.name.clone()} class="card-image" />
            <div class="card-content">
                <div class="card-header">
                    <div>
                        <h3 class="food-name">{ item.name.clone() }</h3>
                        <span class="food-type">{ item.kind.clone() }</span>
                    </div>
                </div>
                <div class="rating-price">
                    <StarRating rating={item.rating} />
                    <div class="price">{ item.price.clone() }</div>
                </div>
                <p class="description">{ excerpt(&item.description, CARD_EXCERPT_CHARS) }</p>
                <div class="specialties">
                    { for card_specialties(&item.specialties).iter().map(|s| html! {
                        <span class="specialty-tag">{ s.clone() }</span>
                    }) }
                </div>
                <div class="card-footer">
                    <div class="location">{ format!("{} {}", copy::LOCATION_PIN, item.location) }</div>
                    <button type="button" class="view-details" onclick={on_details_click}>
                        { copy::VIEW_DETAILS }
                    </button>
                </div>
            </div>
        </div>
    }
}
