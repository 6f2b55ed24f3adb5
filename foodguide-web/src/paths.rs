//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/food` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// stay relative to the page, like `./data/foods.json`.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Location of the catalog document.
#[must_use]
pub fn catalog_url() -> String {
    asset_path(CATALOG_PATH)
}

pub const CATALOG_PATH: &str = "data/foods.json";

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches("./").trim_start_matches('/');

    if base.is_empty() {
        format!("./{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, catalog_url};

    #[test]
    fn builds_relative_path_when_base_missing() {
        assert_eq!(asset_path("data/foods.json"), "./data/foods.json");
        assert_eq!(asset_path("/data/foods.json"), "./data/foods.json");
        assert_eq!(catalog_url(), "./data/foods.json");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("data/foods.json", "/food"),
            "/food/data/foods.json"
        );
        assert_eq!(
            super::asset_path_with_base("./data/foods.json", "/food/"),
            "/food/data/foods.json"
        );
    }
}
