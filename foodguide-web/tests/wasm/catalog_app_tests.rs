use std::rc::Rc;
use std::time::Duration;

use foodguide_core::Catalog;
use foodguide_web::app::{CatalogApp, CatalogAppProps};
use foodguide_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::Renderer;
use yew::platform::time::sleep;

const TWO_REGIONS: &str = r#"{
    "A": [{"id": 1, "name": "dish-one", "rating": 3.5, "gallery": ["a1.jpg"]}],
    "B": [{"id": 2, "name": "dish-two", "rating": 5, "gallery": ["b1.jpg", "b2.jpg"],
           "detailedInfo": {"tips": ["go early"]}}]
}"#;

fn ensure_app_root() -> Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

async fn render_app() {
    let catalog = Catalog::from_json(TWO_REGIONS).expect("test catalog");
    Renderer::<CatalogApp>::with_root_and_props(
        ensure_app_root(),
        CatalogAppProps {
            preloaded: Some(Rc::new(catalog)),
        },
    )
    .render();
    settle().await;
}

fn query(selector: &str) -> Option<Element> {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
}

fn click(selector: &str) {
    query(selector)
        .unwrap_or_else(|| panic!("{selector} should exist"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    dom::document()
        .expect("document")
        .dispatch_event(&event)
        .expect("dispatch keydown");
}

fn is_active(id: &str) -> bool {
    query(&format!("#{id}"))
        .is_some_and(|el| el.class_list().contains("active"))
}

fn card_ids() -> Vec<String> {
    let nodes = dom::document()
        .expect("document")
        .query_selector_all(".food-card")
        .expect("cards");
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .filter_map(|el| el.get_attribute("data-id"))
        .collect()
}

#[wasm_bindgen_test]
async fn all_filter_then_region_filter() {
    render_app().await;
    assert_eq!(card_ids(), ["1", "2"]);

    click(".district-btn[data-district='B']");
    settle().await;
    assert_eq!(card_ids(), ["2"]);
    assert!(
        query(".district-btn[data-district='B']")
            .is_some_and(|b| b.class_list().contains("active"))
    );
}

#[wasm_bindgen_test]
async fn detail_opens_and_escape_closes_it() {
    render_app().await;
    click(".food-card[data-id='2']");
    settle().await;
    assert!(is_active("detailModal"));
    assert_eq!(dom::body_overflow(), "hidden");
    let rating = query("#modalRating").expect("rating").text_content();
    assert_eq!(rating.as_deref(), Some("★★★★★ 5"));

    press_escape();
    settle().await;
    assert!(!is_active("detailModal"));
    assert_eq!(dom::body_overflow(), "auto");
}

#[wasm_bindgen_test]
async fn details_button_opens_detail_and_escape_prefers_viewer() {
    render_app().await;
    click(".food-card[data-id='2'] .view-details");
    settle().await;
    assert!(is_active("detailModal"));
    assert!(query("#detailedInfoSection").is_some());

    click("#modalGallery .gallery-image");
    settle().await;
    assert!(is_active("imageViewer"));
    assert_eq!(
        query("#viewerImage").and_then(|img| img.get_attribute("src")),
        Some("b1.jpg".to_string())
    );

    press_escape();
    settle().await;
    assert!(!is_active("imageViewer"));
    assert!(is_active("detailModal"), "detail stays open under the viewer");

    press_escape();
    settle().await;
    assert!(!is_active("detailModal"));
}

#[wasm_bindgen_test]
async fn backdrop_click_closes_but_content_click_does_not() {
    render_app().await;
    click(".food-card[data-id='1']");
    settle().await;

    click("#modalTitle");
    settle().await;
    assert!(is_active("detailModal"));

    click("#detailModal");
    settle().await;
    assert!(!is_active("detailModal"));
}
