use crate::catalog::{Catalog, FoodId};
use crate::filter::{Listing, RegionFilter, select};
use crate::store::{CatalogError, CatalogStore};
use crate::view::{ViewAction, ViewState};

/// Everything the page renders from: catalog load state, the selected region
/// and the overlay stack.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageModel {
    pub store: CatalogStore,
    pub region: RegionFilter,
    pub view: ViewState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    Loaded(Result<Catalog, CatalogError>),
    SelectRegion(RegionFilter),
    OpenDetail(FoodId),
    CloseDetail,
    OpenViewer(String),
    CloseViewer,
    Escape,
}

impl PageModel {
    /// A model whose catalog is already available.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            store: CatalogStore::from_result(Ok(catalog)),
            ..Self::default()
        }
    }

    /// Listings for the current filter, or `None` while there is no catalog.
    #[must_use]
    pub fn listings(&self) -> Option<Vec<Listing<'_>>> {
        self.store
            .catalog()
            .map(|catalog| select(catalog, &self.region))
    }

    /// The item shown in the detail modal.
    #[must_use]
    pub fn detail(&self) -> Option<Listing<'_>> {
        let id = self.view.detail_id()?;
        self.store.catalog()?.find(id)
    }

    #[must_use]
    pub fn apply(&self, action: PageAction) -> Self {
        let mut next = self.clone();
        match action {
            PageAction::Loaded(result) => {
                if self.store.is_loading() {
                    next.store = CatalogStore::from_result(result);
                } else {
                    log::debug!("ignoring repeated catalog load");
                }
            }
            PageAction::SelectRegion(region) => next.region = region,
            PageAction::OpenDetail(id) => {
                next.view = self
                    .view
                    .apply(ViewAction::OpenDetail(id), self.store.catalog());
                if next.view == self.view {
                    log::debug!("detail request for id {id} ignored");
                }
            }
            PageAction::CloseDetail => next.view = self.view.apply(ViewAction::CloseDetail, None),
            PageAction::OpenViewer(src) => {
                next.view = self.view.apply(ViewAction::OpenViewer(src), None);
            }
            PageAction::CloseViewer => next.view = self.view.apply(ViewAction::CloseViewer, None),
            PageAction::Escape => next.view = self.view.apply(ViewAction::Escape, None),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FoodItem;

    fn item(id: FoodId) -> FoodItem {
        FoodItem {
            id,
            ..FoodItem::default()
        }
    }

    #[test]
    fn listings_wait_for_catalog() {
        let model = PageModel::default();
        assert!(model.listings().is_none());
        let loaded = model.apply(PageAction::Loaded(Ok(Catalog::from_regions([(
            "A",
            vec![item(1)],
        )]))));
        assert_eq!(loaded.listings().map(|l| l.len()), Some(1));
    }

    #[test]
    fn failed_load_has_no_listings() {
        let model =
            PageModel::default().apply(PageAction::Loaded(Err(CatalogError::Network("down".into()))));
        assert!(model.listings().is_none());
        assert!(model.store.error().is_some());
    }

    #[test]
    fn second_load_is_ignored() {
        let first = PageModel::default().apply(PageAction::Loaded(Ok(Catalog::empty())));
        let second = first.apply(PageAction::Loaded(Err(CatalogError::Status(500))));
        assert!(second.store.is_ready());
    }

    #[test]
    fn detail_lookup_ignores_current_filter() {
        let model = PageModel::with_catalog(Catalog::from_regions([
            ("A", vec![item(1)]),
            ("B", vec![item(2)]),
        ]))
        .apply(PageAction::SelectRegion(RegionFilter::from_key("A")))
        .apply(PageAction::OpenDetail(2));
        let detail = model.detail().expect("detail open");
        assert_eq!(detail.region, "B");
        assert_eq!(detail.item.id, 2);
    }

    #[test]
    fn region_change_keeps_overlays() {
        let model = PageModel::with_catalog(Catalog::from_regions([("A", vec![item(1)])]))
            .apply(PageAction::OpenDetail(1))
            .apply(PageAction::SelectRegion(RegionFilter::from_key("Z")));
        assert_eq!(model.view, ViewState::Detail { id: 1 });
        assert_eq!(model.listings().map(|l| l.len()), Some(0));
    }
}
