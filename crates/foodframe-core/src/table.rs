// crates/foodframe-core/src/table.rs

//! # Recommendation Table
//!
//! Static food recommendations keyed by a lowercased city name, plus the
//! `default` list used for every key the table does not know.

use crate::text::city_key;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Key of the fallback list.
pub const DEFAULT_KEY: &str = "default";

/// A single dish recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecommendationRecord {
    pub name: &'static str,
    pub place: &'static str,
    pub description: &'static str,
}

impl RecommendationRecord {
    const fn new(name: &'static str, place: &'static str, description: &'static str) -> Self {
        Self {
            name,
            place,
            description,
        }
    }
}

type Rec = RecommendationRecord;

static CHICAGO: [Rec; 3] = [
    Rec::new("Deep Dish Pizza", "Lou Malnati's", "Classic Chicago-style deep dish pizza"),
    Rec::new("Italian Beef", "Portillo's", "Juicy beef sandwich with giardiniera"),
    Rec::new("Chicago Dog", "Superdawg", "Hot dog with all the fixings (no ketchup!)"),
];

static TOKYO: [Rec; 3] = [
    Rec::new("Ramen", "Ichiran", "Authentic tonkotsu ramen experience"),
    Rec::new("Sushi", "Tsukiji Market", "Fresh sushi from the famous fish market"),
    Rec::new("Yakitori", "Omoide Yokocho", "Grilled chicken skewers in Memory Lane"),
];

static SEOUL: [Rec; 3] = [
    Rec::new("Korean BBQ", "Maple Tree House", "Premium grilled meats with banchan"),
    Rec::new("Bibimbap", "Jeonju Yuhalmeoni", "Rice bowl with vegetables and gochujang"),
    Rec::new("Street Food", "Gwangjang Market", "Try bindaetteok and mung bean pancakes"),
];

static DEFAULT: [Rec; 3] = [
    Rec::new(
        "Local Specialty",
        "Ask locals for recommendations",
        "The best food is often where locals eat",
    ),
    Rec::new("Street Food", "Local markets", "Authentic flavors at affordable prices"),
    Rec::new("Fusion Cuisine", "Trendy districts", "Modern takes on traditional dishes"),
];

static BUILTIN: Lazy<RecommendationTable> = Lazy::new(|| {
    RecommendationTable::from_static(
        &[
            ("chicago", &CHICAGO[..]),
            ("tokyo", &TOKYO[..]),
            ("seoul", &SEOUL[..]),
        ],
        &DEFAULT,
    )
});

/// Simple aggregate counts for a table, not counting the `default` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub cities: usize,
    pub records: usize,
}

/// Immutable mapping from city key to a non-empty, ordered list of records.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    by_city: BTreeMap<&'static str, &'static [RecommendationRecord]>,
    default: &'static [RecommendationRecord],
}

impl RecommendationTable {
    /// The table compiled into the crate. Built once per process.
    pub fn builtin() -> &'static RecommendationTable {
        &BUILTIN
    }

    /// Builds a table from static lists. Empty lists are skipped so a lookup
    /// always lands on a list with at least one record.
    fn from_static(
        entries: &[(&'static str, &'static [RecommendationRecord])],
        default: &'static [RecommendationRecord],
    ) -> Self {
        debug_assert!(!default.is_empty(), "default list must not be empty");
        let by_city = entries
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .copied()
            .collect();
        Self { by_city, default }
    }

    /// Returns the list for `city`, matched on its lowercased name, or the
    /// `default` list when the key is unknown (or the city is empty).
    ///
    /// ```rust
    /// use foodframe_core::RecommendationTable;
    ///
    /// let table = RecommendationTable::builtin();
    /// assert_eq!(table.resolve_list("TOKYO")[0].name, "Ramen");
    /// assert_eq!(table.resolve_list("Atlantis")[0].name, "Local Specialty");
    /// ```
    pub fn resolve_list(&self, city: &str) -> &'static [RecommendationRecord] {
        if city.is_empty() {
            return self.default;
        }
        self.by_city
            .get(city_key(city).as_str())
            .copied()
            .unwrap_or(self.default)
    }

    /// The fallback list.
    pub fn default_list(&self) -> &'static [RecommendationRecord] {
        self.default
    }

    /// `true` when `city` has its own list (the fallback does not count).
    pub fn contains(&self, city: &str) -> bool {
        self.by_city.contains_key(city_key(city).as_str())
    }

    /// Known city keys with their lists, sorted by key.
    pub fn cities(
        &self,
    ) -> impl Iterator<Item = (&'static str, &'static [RecommendationRecord])> + '_ {
        self.by_city.iter().map(|(&key, &list)| (key, list))
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            cities: self.by_city.len(),
            records: self.by_city.values().map(|list| list.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = RecommendationTable::builtin();
        for city in ["Chicago", "CHICAGO", "chicago", "cHiCaGo"] {
            assert_eq!(table.resolve_list(city), table.resolve_list(&city.to_lowercase()));
            assert_eq!(table.resolve_list(city)[0].place, "Lou Malnati's");
        }
    }

    #[test]
    fn unknown_and_empty_fall_back_to_default() {
        let table = RecommendationTable::builtin();
        assert_eq!(table.resolve_list("Atlantis"), table.resolve_list(DEFAULT_KEY));
        assert_eq!(table.resolve_list(""), table.default_list());
        assert_eq!(table.resolve_list("")[0].name, "Local Specialty");
        assert!(!table.contains("Atlantis"));
        assert!(!table.contains(DEFAULT_KEY));
    }

    #[test]
    fn only_lowercase_matches() {
        let table = RecommendationTable::builtin();
        for city in ["Séoul", "서울", "Tōkyō", "\u{0422}okyo", "Chicagö", " tokyo"] {
            assert!(!table.contains(city), "{city}");
            assert_eq!(table.resolve_list(city), table.default_list(), "{city}");
            assert_eq!(table.resolve_list(city)[0].name, "Local Specialty");
        }
    }

    #[test]
    fn every_list_is_non_empty() {
        let table = RecommendationTable::builtin();
        assert!(table.cities().all(|(_, list)| !list.is_empty()));
        assert!(!table.default_list().is_empty());
        assert_eq!(table.stats(), TableStats { cities: 3, records: 9 });
        let keys: Vec<_> = table.cities().map(|(key, _)| key).collect();
        assert_eq!(keys, ["chicago", "seoul", "tokyo"]);
    }
}
