// crates/foodframe-core/src/resolver.rs

//! # City Resolver
//!
//! Decides which city the widget shows. Sources, strongest first:
//!
//! 1. the persisted city, read once at activation
//! 2. the city typed into the input, once the user requests recommendations
//! 3. the detected city, when the input is empty
//!
//! Storage is fallible: read or write failures are logged and the
//! resolver carries on with in-memory state.

use crate::detect::DetectedCity;
use crate::traits::CityStore;
use serde::Serialize;
use tracing::{debug, warn};

/// Which source a recommendation request resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Resolution {
    /// The typed city. `persisted` is false when the store was missing or
    /// the write failed.
    Typed { persisted: bool },
    Detected,
    /// Nothing to go on; the default list applies and no city is active.
    Default,
}

#[derive(Debug, Clone)]
pub struct CityResolver {
    storage_key: String,
    typed: String,
    active: Option<String>,
    detected: DetectedCity,
}

impl CityResolver {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            typed: String::new(),
            active: None,
            detected: DetectedCity::new(),
        }
    }

    /// Reads the persisted city. A non-empty value becomes both the active
    /// and the typed city. Returns `true` when one was found, in which case
    /// detection is skipped.
    pub fn load_persisted<S: CityStore + ?Sized>(&mut self, store: Option<&S>) -> bool {
        let Some(store) = store else {
            debug!("no storage context, skipping persisted city");
            return false;
        };

        match store.get(&self.storage_key) {
            Ok(Some(city)) if !city.is_empty() => {
                debug!(city = %city, "restored persisted city");
                self.typed = city.clone();
                self.active = Some(city);
                true
            }
            Ok(_) => false,
            Err(err) => {
                warn!(error = %err, "failed to read persisted city, continuing without it");
                false
            }
        }
    }

    /// Updates the input text only.
    pub fn type_city(&mut self, text: &str) {
        self.typed = text.to_string();
    }

    /// Resolves the active city for a recommendation request.
    ///
    /// A non-empty typed city is persisted raw (case untouched) and used.
    /// Otherwise the detected city is used without persisting it.
    pub fn request<S: CityStore + ?Sized>(&mut self, store: Option<&mut S>) -> Resolution {
        if !self.typed.is_empty() {
            let persisted = match store {
                Some(store) => match store.set(&self.storage_key, &self.typed) {
                    Ok(()) => true,
                    Err(err) => {
                        warn!(error = %err, "failed to persist city, keeping it in memory");
                        false
                    }
                },
                None => false,
            };
            self.active = Some(self.typed.clone());
            return Resolution::Typed { persisted };
        }

        if let Some(city) = self.detected.get() {
            self.typed = city.to_string();
            self.active = Some(city.to_string());
            return Resolution::Detected;
        }

        self.active = None;
        Resolution::Default
    }

    /// The "use detected location" affordance. Returns `false` when nothing
    /// was detected.
    pub fn use_detected(&mut self) -> bool {
        match self.detected.get() {
            Some(city) => {
                self.typed = city.to_string();
                self.active = Some(city.to_string());
                true
            }
            None => false,
        }
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn detected(&self) -> Option<&str> {
        self.detected.get()
    }

    /// Handle on the detected-city slot for a detection task.
    pub fn detected_slot(&self) -> DetectedCity {
        self.detected.clone()
    }
}
