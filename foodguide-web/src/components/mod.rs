pub mod detail_modal;
pub mod food_card;
pub mod food_list;
pub mod footer;
pub mod header;
pub mod image_viewer;
pub mod overlay;
pub mod region_nav;
pub mod star_rating;
