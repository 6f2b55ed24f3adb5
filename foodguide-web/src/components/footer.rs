use crate::copy;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="about" class="site-footer">{ copy::FOOTER }</footer>
    }
}
