//! Backdrop handling shared by the detail modal and the image viewer.

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

/// Emit `on_close` only for clicks on the backdrop itself, not its content.
///
/// yew delegates listeners to the app root, so the backdrop is identified
/// through its `NodeRef` rather than `current_target`.
#[must_use]
pub fn backdrop_click(backdrop: NodeRef, on_close: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        let clicked = e.target().and_then(|t| t.dyn_into::<Element>().ok());
        let host = backdrop.cast::<Element>();
        if clicked.is_some() && clicked == host {
            on_close.emit(());
        }
    })
}

/// Class list for an overlay container; `active` makes it visible.
#[must_use]
pub fn overlay_classes(base: &'static str, active: bool) -> Classes {
    classes!(base, active.then_some("active"))
}
