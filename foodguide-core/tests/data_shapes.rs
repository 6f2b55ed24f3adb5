use foodguide_core::{Catalog, RegionFilter, select};

const SAMPLE: &str = include_str!("../../foodguide-web/static/data/foods.json");

#[test]
fn bundled_sample_catalog_parses() {
    let catalog = Catalog::from_json(SAMPLE).expect("sample catalog should parse");
    assert!(!catalog.is_empty());
    assert!(catalog.regions().len() >= 2);
}

#[test]
fn bundled_sample_ids_are_unique() {
    let catalog = Catalog::from_json(SAMPLE).expect("sample catalog should parse");
    let mut ids: Vec<_> = select(&catalog, &RegionFilter::All)
        .iter()
        .map(|l| l.item.id)
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total, "ids must be unique across regions");
}

#[test]
fn all_filter_length_is_sum_of_regions() {
    let catalog = Catalog::from_json(SAMPLE).expect("sample catalog should parse");
    let expected: usize = catalog.regions().iter().map(|r| r.items.len()).sum();
    let listings = select(&catalog, &RegionFilter::All);
    assert_eq!(listings.len(), expected);
    for listing in &listings {
        let owner = catalog
            .region(listing.region)
            .expect("tagged region exists");
        assert!(owner.iter().any(|item| item.id == listing.item.id));
    }
}

#[test]
fn every_region_lookup_reports_its_owner() {
    let catalog = Catalog::from_json(SAMPLE).expect("sample catalog should parse");
    for region in catalog.regions() {
        for item in &region.items {
            let found = catalog.find(item.id).expect("id present");
            assert_eq!(found.region, region.key);
        }
    }
}
