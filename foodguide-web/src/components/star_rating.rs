use foodguide_core::{format_rating, star_glyphs};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub rating: f64,
}

#[function_component(StarRating)]
pub fn star_rating(p: &Props) -> Html {
    html! {
        <div class="rating" aria-label={format!("{} / 5", format_rating(p.rating))}>
            <span class="stars">{ star_glyphs(p.rating) }</span>
            <span class="rating-value">{ format_rating(p.rating) }</span>
        </div>
    }
}
