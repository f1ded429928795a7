//! # Stop List
//!
//! Products temporarily hidden from ordinary users.
//!
//! The list arrives with the launch URL (`...?stop=3,7,12`), is edited in
//! admin mode, and goes back to the bot in an `admin_sync` payload. It only
//! affects browsing; pricing and validation never look at it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreResult, ValidationError};
use crate::types::ProductId;

/// Query parameter carrying the stop list.
pub const STOP_QUERY_PARAM: &str = "stop";

/// Ordered set of unavailable product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopList(Vec<ProductId>);

impl StopList {
    /// Builds a list from ids, dropping duplicates but keeping first-seen order.
    pub fn from_ids<I: IntoIterator<Item = ProductId>>(ids: I) -> Self {
        let mut list = StopList::default();
        for id in ids {
            if !list.contains(id) {
                list.0.push(id);
            }
        }
        list
    }

    /// Parses the comma-separated parameter value.
    ///
    /// Entries that are not integers (including empty ones) are skipped.
    ///
    /// ```rust
    /// use urban_core::stop_list::StopList;
    ///
    /// let list = StopList::parse("3, 7,,x,3,12");
    /// assert_eq!(list.ids(), &[3, 7, 12]);
    /// ```
    pub fn parse(value: &str) -> Self {
        StopList::from_ids(
            value
                .split(',')
                .filter_map(|part| part.trim().parse::<ProductId>().ok()),
        )
    }

    /// Reads the `stop` parameter from a raw query string (`a=1&stop=2,3`).
    pub fn from_query(query: &str) -> Self {
        url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == STOP_QUERY_PARAM)
            .map(|(_, value)| StopList::parse(&value))
            .unwrap_or_default()
    }

    /// Reads the `stop` parameter from the Mini App launch URL.
    ///
    /// A URL without the parameter yields an empty list.
    pub fn from_launch_url(launch_url: &str) -> CoreResult<Self> {
        let url = Url::parse(launch_url).map_err(|e| ValidationError::InvalidFormat {
            field: "launch url".to_string(),
            reason: e.to_string(),
        })?;
        Ok(StopList::from_query(url.query().unwrap_or_default()))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.0.contains(&id)
    }

    /// Adds the id if absent, removes it if present.
    ///
    /// Returns `true` if the product is stopped afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(pos) = self.0.iter().position(|s| *s == id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_garbage() {
        assert_eq!(StopList::parse("1,2,3").ids(), &[1, 2, 3]);
        assert_eq!(StopList::parse("").ids(), &[] as &[ProductId]);
        assert_eq!(StopList::parse("a,-1,4.5, 9 ").ids(), &[9]);
    }

    #[test]
    fn test_parse_dedupes() {
        assert_eq!(StopList::parse("5,5,2,5").ids(), &[5, 2]);
    }

    #[test]
    fn test_from_launch_url() {
        let list = StopList::from_launch_url("https://menu.example/app?tgWebAppStartParam=x&stop=4%2C8").unwrap();
        assert_eq!(list.ids(), &[4, 8]);

        let empty = StopList::from_launch_url("https://menu.example/app").unwrap();
        assert!(empty.is_empty());

        assert!(StopList::from_launch_url("not a url").is_err());
    }

    #[test]
    fn test_from_query() {
        assert_eq!(StopList::from_query("?stop=1,2").ids(), &[1, 2]);
        assert_eq!(StopList::from_query("other=1").len(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut list = StopList::parse("1,2");
        assert!(list.toggle(3));
        assert!(!list.toggle(1));
        assert_eq!(list.ids(), &[2, 3]);
        assert!(list.contains(3));
        assert!(!list.contains(1));
    }

    #[test]
    fn test_serializes_as_array() {
        let list = StopList::parse("7,3");
        assert_eq!(serde_json::to_string(&list).unwrap(), "[7,3]");
    }
}
