use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use foodguide_core::{FoodId, FoodItem};
use foodguide_web::components::food_card::{FoodCard, Props};
use foodguide_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::Renderer;
use yew::platform::time::sleep;
use yew::prelude::{AttrValue, Callback};

fn card_root() -> Element {
    let doc = dom::document().expect("document");
    let root = doc.create_element("div").expect("create card root");
    root.set_id("card-root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append card root");
    root
}

fn click_in(root: &Element, selector: &str) {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} should exist"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

#[wasm_bindgen_test]
async fn each_click_requests_the_detail_exactly_once() {
    let opened = Rc::new(Cell::new(0_u32));
    let last_id = Rc::new(Cell::new(FoodId::default()));
    let on_open = {
        let opened = Rc::clone(&opened);
        let last_id = Rc::clone(&last_id);
        Callback::from(move |id: FoodId| {
            opened.set(opened.get() + 1);
            last_id.set(id);
        })
    };

    let root = card_root();
    let handle = Renderer::<FoodCard>::with_root_and_props(
        root.clone(),
        Props {
            item: FoodItem {
                id: 7,
                name: "solo-dish".into(),
                ..FoodItem::default()
            },
            region: AttrValue::from("solo"),
            on_open,
        },
    )
    .render();
    sleep(Duration::from_millis(20)).await;

    click_in(&root, ".view-details");
    assert_eq!(opened.get(), 1, "details button must not also trigger the card");
    assert_eq!(last_id.get(), 7);

    opened.set(0);
    click_in(&root, ".food-name");
    assert_eq!(opened.get(), 1);

    opened.set(0);
    click_in(&root, ".food-card");
    assert_eq!(opened.get(), 1);

    handle.destroy();
    root.remove();
}
