use std::rc::Rc;

use foodguide_core::{Catalog, PageAction, PageModel};
use yew::prelude::*;

/// Page model wrapped for `use_reducer`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState(pub PageModel);

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

pub type PageHandle = UseReducerHandle<PageState>;

/// Page state, optionally seeded with a catalog that is already loaded.
#[hook]
pub fn use_page_state(preloaded: Option<Rc<Catalog>>) -> PageHandle {
    use_reducer(move || {
        preloaded.map_or_else(PageState::default, |catalog| {
            PageState(PageModel::with_catalog((*catalog).clone()))
        })
    })
}
