// crates/foodframe-core/src/lib.rs

//! # foodframe-core
//!
//! The logic behind a small embeddable "frame" that shows food
//! recommendations for a city.
//!
//! - [`table`]: the static, city-keyed recommendation data
//! - [`selector`]: which record is current, rotation, map links
//! - [`resolver`]: which city is active (persisted > detected > typed)
//! - [`detect`]: the best-effort detected-city heuristic
//! - [`controller`]: the widget state machine and its render-ready view
//!
//! Hosts plug in through the collaborator traits in [`traits`]: a key-value
//! [`CityStore`], an async [`HostContext`] and [`ExternalActions`].
//!
//! ```rust
//! use foodframe_core::prelude::*;
//!
//! let mut frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
//! let _detection = frame.on_ready();
//! frame.type_city("Chicago");
//! frame.request_recommendations();
//!
//! let card = frame.view().card().cloned().unwrap();
//! assert_eq!(card.recommendation.unwrap().name, "Deep Dish Pizza");
//! ```

pub mod config;
pub mod controller;
pub mod detect;
pub mod error;
pub mod prelude;
pub mod resolver;
pub mod selector;
pub mod storage;
pub mod table;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::config::FrameConfig;
pub use crate::controller::{CardView, FrameView, WidgetController};
pub use crate::detect::{CityDetector, DetectedCity, DetectionRule, DetectionTask};
pub use crate::error::{FrameError, Result};
pub use crate::resolver::{CityResolver, Resolution};
pub use crate::selector::Selection;
pub use crate::storage::{MemoryStore, UrlLog};
pub use crate::table::{RecommendationRecord, RecommendationTable, TableStats};
pub use crate::text::city_key;
pub use crate::traits::{CityStore, ExternalActions, FrameContext, FrameUser, HostContext};
