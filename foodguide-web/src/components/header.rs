use crate::copy;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Page anchors reachable from the header.
const ANCHORS: &[(&str, &str)] = &[
    ("#top", copy::NAV_HOME),
    ("#foods", copy::NAV_FOODS),
    ("#about", copy::NAV_ABOUT),
];

/// In-page links scroll smoothly instead of jumping.
fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if !crate::dom::smooth_scroll_to(href) {
            log::debug!("no element for anchor {href}");
        }
    })
}

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header id="top" role="banner" class="site-header">
            <div class="header-content">
                <h1 class="site-title">{ copy::SITE_TITLE }</h1>
                <p class="site-tagline">{ copy::SITE_TAGLINE }</p>
                <nav class="site-nav">
                    { for ANCHORS.iter().map(|&(href, label)| html! {
                        <a href={href} class="nav-link" onclick={anchor_click(href)}>{ label }</a>
                    }) }
                </nav>
            </div>
        </header>
    }
}
