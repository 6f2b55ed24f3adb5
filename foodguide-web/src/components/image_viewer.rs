use crate::components::overlay::{backdrop_click, overlay_classes};
use crate::copy;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Image to show full-screen; `None` keeps the viewer hidden.
    #[prop_or_default]
    pub src: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(ImageViewer)]
pub fn image_viewer(p: &Props) -> Html {
    let backdrop = use_node_ref();
    let on_backdrop = backdrop_click(backdrop.clone(), p.on_close.clone());
    let on_close_btn = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div id="imageViewer" ref={backdrop} class={overlay_classes("image-viewer", p.src.is_some())} onclick={on_backdrop}>
            if let Some(src) = p.src.clone() {
                <button type="button" class="close-viewer" aria-label={copy::CLOSE} onclick={on_close_btn}>
                    {"×"}
                </button>
                <img id="viewerImage" src={src} alt="" />
            }
        </div>
    }
}
