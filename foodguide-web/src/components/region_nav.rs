use crate::copy;
use foodguide_core::{ALL_REGIONS, RegionFilter};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Region keys in catalog order; empty until the catalog is ready.
    pub regions: Vec<AttrValue>,
    /// Key of the selected filter (`all` for every region).
    pub selected: AttrValue,
    pub on_select: Callback<RegionFilter>,
}

#[derive(Properties, PartialEq, Clone)]
struct ButtonProps {
    key_value: AttrValue,
    label: AttrValue,
    active: bool,
    on_select: Callback<RegionFilter>,
}

#[function_component(RegionButton)]
fn region_button(p: &ButtonProps) -> Html {
    let onclick = {
        let on_select = p.on_select.clone();
        let key = p.key_value.clone();
        Callback::from(move |_| on_select.emit(RegionFilter::from_key(&key)))
    };
    html! {
        <button
            type="button"
            class={classes!("district-btn", p.active.then_some("active"))}
            data-district={p.key_value.clone()}
            aria-pressed={p.active.to_string()}
            onclick={onclick}
        >
            { p.label.clone() }
        </button>
    }
}

#[function_component(RegionNav)]
pub fn region_nav(p: &Props) -> Html {
    let all = AttrValue::from(ALL_REGIONS);
    html! {
        <nav class="district-nav" aria-label={copy::SECTION_FOODS}>
            <RegionButton
                key_value={all.clone()}
                label={AttrValue::from(copy::REGION_ALL)}
                active={p.selected == all}
                on_select={p.on_select.clone()}
            />
            { for p.regions.iter().map(|region| html! {
                <RegionButton
                    key={region.to_string()}
                    key_value={region.clone()}
                    label={region.clone()}
                    active={p.selected == *region}
                    on_select={p.on_select.clone()}
                />
            }) }
        </nav>
    }
}
