use crate::components::overlay::{backdrop_click, overlay_classes};
use crate::copy;
use foodguide_core::{DetailedInfo, FoodItem, format_rating, star_glyphs};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Item to show; `None` keeps the modal hidden.
    #[prop_or_default]
    pub item: Option<FoodItem>,
    #[prop_or_default]
    pub region: Option<AttrValue>,
    pub on_close: Callback<()>,
    /// Called with the full image URL of a clicked thumbnail.
    pub on_open_image: Callback<String>,
}

#[function_component(DetailModal)]
pub fn detail_modal(p: &Props) -> Html {
    let backdrop = use_node_ref();
    let on_backdrop = backdrop_click(backdrop.clone(), p.on_close.clone());
    let on_close_btn = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let content = p.item.as_ref().map_or_else(Html::default, |item| {
        html! {
            <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="modalTitle"
                data-district={p.region.clone()}>
                <button type="button" class="close-btn" aria-label={copy::CLOSE} onclick={on_close_btn}>
                    {"×"}
                </button>
                <h2 id="modalTitle">{ item.name.clone() }</h2>
                <img id="modalMainImage" class="modal-main-image" src={item.main_image.clone()} alt={item.name.clone()} />
                <div class="modal-info">
                    <p id="modalRating" class="stars">
                        { format!("{} {}", star_glyphs(item.rating), format_rating(item.rating)) }
                    </p>
                    { info_row(copy::LABEL_PRICE, "modalPrice", item.price.clone()) }
                    { info_row(copy::LABEL_HOURS, "modalHours", item.hours.clone()) }
                    { info_row(copy::LABEL_LOCATION, "modalLocation", item.location.clone()) }
                    { info_row(
                        copy::LABEL_PHONE,
                        "modalPhone",
                        item.phone().unwrap_or(copy::PHONE_MISSING).to_string(),
                    ) }
                    { info_row(copy::LABEL_TYPE, "modalType", item.kind.clone()) }
                </div>
                <p id="modalDescription" class="modal-description">{ item.description.clone() }</p>
                <h3>{ copy::LABEL_SPECIALTIES }</h3>
                <div id="modalSpecialties" class="modal-specialties">
                    { for item.specialties.iter().map(|s| html! {
                        <div class="specialty-item">{ s.clone() }</div>
                    }) }
                </div>
                <h3>{ copy::LABEL_GALLERY }</h3>
                <div id="modalGallery" class="modal-gallery">
                    { for item.gallery.iter().map(|src| gallery_thumb(src, &item.name, &p.on_open_image)) }
                </div>
                { item.detailed_info.as_ref().map(detailed_info_section).unwrap_or_default() }
            </div>
        }
    });

    html! {
        <div id="detailModal" ref={backdrop} class={overlay_classes("modal", p.item.is_some())} onclick={on_backdrop}>
            { content }
        </div>
    }
}

fn info_row(label: &'static str, id: &'static str, value: String) -> Html {
    html! {
        <div class="info-row">
            <span class="info-label">{ label }</span>
            <span id={id} class="info-value">{ value }</span>
        </div>
    }
}

fn gallery_thumb(src: &str, name: &str, on_open_image: &Callback<String>) -> Html {
    let onclick = {
        let cb = on_open_image.clone();
        let src = src.to_string();
        Callback::from(move |_: MouseEvent| cb.emit(src.clone()))
    };
    html! {
        <img src={src.to_string()} alt={name.to_string()} class="gallery-image" onclick={onclick} />
    }
}

fn text_block(title: &'static str, body: &str) -> Html {
    html! {
        <div class="detail-section">
            <h4>{ title }</h4>
            <p>{ body.to_string() }</p>
        </div>
    }
}

fn list_block(title: &'static str, entries: &[String]) -> Html {
    html! {
        <div class="detail-section">
            <h4>{ title }</h4>
            <ul>
                { for entries.iter().map(|e| html! { <li>{ e.clone() }</li> }) }
            </ul>
        </div>
    }
}

/// Extended section; each part shows only when its field has content.
fn detailed_info_section(info: &DetailedInfo) -> Html {
    html! {
        <div id="detailedInfoSection" class="detailed-info">
            <h3>{ copy::LABEL_DETAILED_INFO }</h3>
            <div id="detailedInfoContent">
                { info.history().map(|h| text_block(copy::INFO_HISTORY, h)).unwrap_or_default() }
                { info.environment().map(|e| text_block(copy::INFO_ENVIRONMENT, e)).unwrap_or_default() }
                { info.recommendations().map(|r| list_block(copy::INFO_RECOMMENDATIONS, r)).unwrap_or_default() }
                { info.tips().map(|t| list_block(copy::INFO_TIPS, t)).unwrap_or_default() }
            </div>
        </div>
    }
}
