use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::filter::Listing;
use crate::lenient;

pub type FoodId = i64;

/// Optional long-form block shown in the detail modal.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct DetailedInfo {
    #[serde(deserialize_with = "lenient::optional_text")]
    pub history: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub environment: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text_list")]
    pub recommendations: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::optional_text_list")]
    pub tips: Option<Vec<String>>,
}

impl DetailedInfo {
    /// Recommendations, only when the list is present and non-empty.
    #[must_use]
    pub fn recommendations(&self) -> Option<&[String]> {
        non_empty(self.recommendations.as_deref())
    }

    /// Tips, only when the list is present and non-empty.
    #[must_use]
    pub fn tips(&self) -> Option<&[String]> {
        non_empty(self.tips.as_deref())
    }

    #[must_use]
    pub fn history(&self) -> Option<&str> {
        self.history.as_deref().filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref().filter(|s| !s.is_empty())
    }
}

fn non_empty(list: Option<&[String]>) -> Option<&[String]> {
    list.filter(|l| !l.is_empty())
}

/// A single listing as published in `foods.json`.
///
/// Every field falls back to its default when missing or of the wrong type,
/// so a malformed entry renders blank instead of failing the whole catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(deserialize_with = "lenient::id")]
    pub id: FoodId,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub hours: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub price: String,
    #[serde(deserialize_with = "lenient::text")]
    pub main_image: String,
    #[serde(deserialize_with = "lenient::text_list")]
    pub gallery: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub specialties: Vec<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub rating: f64,
    #[serde(deserialize_with = "lenient::detailed_info")]
    pub detailed_info: Option<DetailedInfo>,
}

impl FoodItem {
    /// Phone number, treating an empty string like a missing one.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionEntry {
    pub key: String,
    pub items: Vec<FoodItem>,
}

/// The full catalog, regions kept in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    regions: Vec<RegionEntry>,
}

impl Catalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from `(region, items)` pairs.
    ///
    /// A repeated key keeps its first position and takes the later items.
    pub fn from_regions<I, K>(regions: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<FoodItem>)>,
        K: Into<String>,
    {
        let mut catalog = Self::empty();
        for (key, items) in regions {
            catalog.insert(key.into(), items);
        }
        catalog
    }

    /// Parse the catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not an object of arrays. Entries
    /// inside a region never cause an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn insert(&mut self, key: String, items: Vec<FoodItem>) {
        if let Some(entry) = self.regions.iter_mut().find(|r| r.key == key) {
            entry.items = items;
        } else {
            self.regions.push(RegionEntry { key, items });
        }
    }

    #[must_use]
    pub fn regions(&self) -> &[RegionEntry] {
        &self.regions
    }

    pub fn region_keys(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.key.as_str())
    }

    /// Items of one region, `None` when the key is absent.
    #[must_use]
    pub fn region(&self, key: &str) -> Option<&[FoodItem]> {
        self.regions
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.items.as_slice())
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.regions.iter().map(|r| r.items.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Find an item by id across all regions.
    ///
    /// Ids are assumed unique. If two regions share one, the first match in
    /// region order wins.
    #[must_use]
    pub fn find(&self, id: FoodId) -> Option<Listing<'_>> {
        self.regions.iter().find_map(|region| {
            region
                .items
                .iter()
                .find(|item| item.id == id)
                .map(|item| Listing::new(&region.key, item))
        })
    }

    #[must_use]
    pub fn contains(&self, id: FoodId) -> bool {
        self.find(id).is_some()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping region keys to arrays of food items")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = Catalog::empty();
                while let Some((key, entries)) = map.next_entry::<String, Vec<Value>>()? {
                    let items = lenient::food_items(&key, entries);
                    catalog.insert(key, items);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
