//! foodframe prelude: bring the common types and traits into scope for hosts and demos.

#![allow(unused_imports)]

pub use crate::config::FrameConfig;
pub use crate::controller::{CardView, FrameView, WidgetController};
pub use crate::detect::{CityDetector, DetectedCity, DetectionRule, DetectionTask};
pub use crate::error::{FrameError, Result};
pub use crate::resolver::{CityResolver, Resolution};
pub use crate::selector::{advance, current, map_query, map_search_url, Selection};
pub use crate::storage::{MemoryStore, UrlLog};
pub use crate::table::{RecommendationRecord, RecommendationTable};
pub use crate::text::city_key;
pub use crate::traits::{CityStore, ExternalActions, FrameContext, FrameUser, HostContext};
