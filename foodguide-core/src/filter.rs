use crate::catalog::{Catalog, FoodItem};

/// Key the region buttons use for the unfiltered view.
pub const ALL_REGIONS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Region(String),
}

impl RegionFilter {
    /// Interpret a region button key; `"all"` selects every region.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key == ALL_REGIONS {
            Self::All
        } else {
            Self::Region(key.to_string())
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_REGIONS,
            Self::Region(key) => key,
        }
    }
}

/// Read-only view of an item together with the region it was found under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Listing<'a> {
    pub region: &'a str,
    pub item: &'a FoodItem,
}

impl<'a> Listing<'a> {
    #[must_use]
    pub const fn new(region: &'a str, item: &'a FoodItem) -> Self {
        Self { region, item }
    }
}

/// Items to show for a filter, in region order then item order.
///
/// An unknown region yields an empty selection.
#[must_use]
pub fn select<'a>(catalog: &'a Catalog, filter: &'a RegionFilter) -> Vec<Listing<'a>> {
    match filter {
        RegionFilter::All => catalog
            .regions()
            .iter()
            .flat_map(|region| {
                region
                    .items
                    .iter()
                    .map(move |item| Listing::new(&region.key, item))
            })
            .collect(),
        RegionFilter::Region(key) => catalog
            .region(key)
            .unwrap_or_default()
            .iter()
            .map(|item| Listing::new(key, item))
            .collect(),
    }
}
