//! # Catalog Commands
//!
//! Category list and category grids.

use tracing::debug;
use urban_core::catalog::{CategoryInfo, Tile};
use urban_core::Category;

use crate::bridge::HostBridge;
use crate::session::MenuSession;

/// Categories in display order.
pub fn list_categories<B: HostBridge>(session: &MenuSession<B>) -> Vec<CategoryInfo> {
    debug!("list_categories command");
    session.catalog.categories().to_vec()
}

/// Tiles of one category.
///
/// ## Visibility
/// ```text
///  customer: stopped products are left out
///  admin:    every product, stopped ones flagged `stopped: true`
/// ```
///
/// Image names are resolved against the configured image base URL.
pub fn browse<B: HostBridge>(session: &MenuSession<B>, category: Category) -> Vec<Tile> {
    debug!(%category, admin = session.admin.is_enabled(), "browse command");

    session
        .catalog
        .browse(category, session.admin.stop_list(), session.admin.is_enabled())
        .into_iter()
        .map(|tile| Tile {
            img: tile.img.as_deref().map(|img| session.config.image_url(img)),
            ..tile
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::{session, session_with};
    use crate::state::ConfigState;
    use urban_core::StopList;

    #[test]
    fn test_list_categories() {
        let categories = list_categories(&session());
        let ids: Vec<Category> = categories.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                Category::Coffee,
                Category::Seasonal,
                Category::Tea,
                Category::Punsh,
                Category::Ice,
                Category::Drinks,
                Category::Food,
            ]
        );
        assert_eq!(categories[0].label, "Кофе");
    }

    #[test]
    fn test_browse_tiles() {
        let tiles = browse(&session(), Category::Coffee);
        let names: Vec<&str> = tiles.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Эспрессо", "Американо", "Капучино", "Латте", "Флэт уайт"]);

        assert_eq!(tiles[0].price_hint, "120 ₽");
        assert_eq!(tiles[1].price_hint, "от 130 ₽");
        assert_eq!(
            tiles[0].img.as_deref(),
            Some("https://cdn.urban-lunch.ru/menu/espresso.jpg")
        );
    }

    #[test]
    fn test_browse_hides_stopped_for_customers() {
        let s = session_with(ConfigState::default(), StopList::parse("19,21"));
        let tiles = browse(&s, Category::Food);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].product_id, 20);
    }

    #[test]
    fn test_browse_flags_stopped_for_admin() {
        let mut s = session_with(ConfigState::default(), StopList::parse("19"));
        s.admin.unlock("7654", "7654");

        let tiles = browse(&s, Category::Food);
        assert_eq!(tiles.len(), 3);
        assert!(tiles[0].stopped);
        assert!(!tiles[1].stopped);
    }
}
