// crates/foodframe-core/src/selector.rs

//! # Recommendation Selector
//!
//! Picks the current record out of a list and rotates through it.

use crate::table::{RecommendationRecord, RecommendationTable};
use crate::text::city_key;

/// Returns `list[index mod len]`.
///
/// # Panics
///
/// Panics if `list` is empty. Lists handed out by [`RecommendationTable`]
/// never are.
#[inline]
pub fn current(list: &[RecommendationRecord], index: usize) -> &RecommendationRecord {
    &list[index % list.len()]
}

/// `(index + 1) mod len`, wrapping to `0` past the last record.
///
/// Total: an empty list always yields `0`, and `index` may be any value.
#[inline]
pub fn advance(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + 1) % len
}

/// Search text for the map deep link: `"{name} {place} {city}"`, fields
/// taken literally.
pub fn map_query(record: &RecommendationRecord, city: &str) -> String {
    format!("{} {} {}", record.name, record.place, city)
}

/// `base` followed by the percent-encoded `query`.
///
/// ```rust
/// use foodframe_core::selector::map_search_url;
///
/// assert_eq!(
///     map_search_url("https://www.google.com/maps/search/", "Ramen Ichiran Tokyo"),
///     "https://www.google.com/maps/search/Ramen%20Ichiran%20Tokyo"
/// );
/// ```
pub fn map_search_url(base: &str, query: &str) -> String {
    format!("{base}{}", urlencoding::encode(query))
}

/// The record pointer of the widget: which city list, and where in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    city_key: String,
    index: usize,
}

impl Selection {
    pub fn new(city: &str) -> Self {
        Self {
            city_key: city_key(city),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Points the selection at `city`. The index goes back to `0` only when
    /// the city key actually changes. Returns whether it did.
    pub fn retarget(&mut self, city: &str) -> bool {
        let key = city_key(city);
        if key == self.city_key {
            return false;
        }
        self.city_key = key;
        self.index = 0;
        true
    }

    pub fn list(&self, table: &RecommendationTable) -> &'static [RecommendationRecord] {
        table.resolve_list(&self.city_key)
    }

    pub fn current(&self, table: &RecommendationTable) -> &'static RecommendationRecord {
        current(self.list(table), self.index)
    }

    /// Moves to the next record and returns the new index.
    pub fn advance(&mut self, table: &RecommendationTable) -> usize {
        self.index = advance(self.index, self.list(table).len());
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_after_len_steps() {
        for len in 1..=7 {
            for start in 0..len {
                let mut i = start;
                for _ in 0..len {
                    i = advance(i, len);
                }
                assert_eq!(i, start, "len={len} start={start}");
            }
        }
        assert_eq!(advance(usize::MAX, 3), (usize::MAX % 3 + 1) % 3);
        assert_eq!(advance(5, 0), 0);
    }

    #[test]
    fn current_applies_modulo() {
        let list = RecommendationTable::builtin().resolve_list("tokyo");
        assert_eq!(current(list, 0).name, "Ramen");
        assert_eq!(current(list, 4).name, "Sushi");
        assert_eq!(current(list, usize::MAX).name, list[usize::MAX % 3].name);
    }

    #[test]
    fn map_query_joins_fields_literally() {
        let rec = RecommendationTable::builtin().resolve_list("chicago")[0];
        assert_eq!(map_query(&rec, "Chicago"), "Deep Dish Pizza Lou Malnati's Chicago");
        assert_eq!(
            map_search_url("https://www.google.com/maps/search/", &map_query(&rec, "Chicago")),
            "https://www.google.com/maps/search/Deep%20Dish%20Pizza%20Lou%20Malnati%27s%20Chicago"
        );
    }

    #[test]
    fn retarget_only_resets_on_a_new_key() {
        let table = RecommendationTable::builtin();
        let mut sel = Selection::new("Chicago");
        sel.advance(table);
        assert_eq!(sel.current(table).name, "Italian Beef");

        assert!(!sel.retarget("CHICAGO"));
        assert_eq!(sel.index(), 1);

        assert!(sel.retarget("Tokyo"));
        assert_eq!(sel.index(), 0);
        assert_eq!(sel.current(table).name, "Ramen");
    }
}
