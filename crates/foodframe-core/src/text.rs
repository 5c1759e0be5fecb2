// crates/foodframe-core/src/text.rs

/// The key a city name is looked up under: the name, lowercased.
///
/// Nothing else is normalized. Accents, other scripts and whitespace are
/// kept, so `"Séoul"` and `" tokyo"` are keys of their own.
///
/// # Examples
///
/// ```rust
/// use foodframe_core::city_key;
///
/// assert_eq!(city_key("TOKYO"), "tokyo");
/// assert_eq!(city_key("Séoul"), "séoul");
/// ```
pub fn city_key(s: &str) -> String {
    s.to_lowercase()
}
