// crates/foodframe-core/src/controller.rs

//! # Widget Controller
//!
//! Composes the table, selector and resolver into one widget instance and
//! turns user actions into state transitions. All actions are no-ops until
//! the host signals readiness via [`WidgetController::on_ready`].

use crate::config::FrameConfig;
use crate::detect::{CityDetector, DetectionTask};
use crate::resolver::{CityResolver, Resolution};
use crate::selector::{map_query, map_search_url, Selection};
use crate::table::{RecommendationRecord, RecommendationTable};
use crate::traits::{CityStore, ExternalActions};
use serde::Serialize;
use tracing::debug;

pub const CARD_TITLE: &str = "Food Recommendations";
pub const INPUT_PLACEHOLDER: &str = "Enter your city";
const PROMPT_DESCRIPTION: &str = "Enter your location for food recommendations";

/// What the host should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FrameView {
    /// The host SDK is not ready yet.
    Loading,
    Card(CardView),
}

impl FrameView {
    pub fn card(&self) -> Option<&CardView> {
        match self {
            FrameView::Card(card) => Some(card),
            FrameView::Loading => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub title: &'static str,
    pub description: String,
    pub input: String,
    pub placeholder: &'static str,
    /// The active city, if any.
    pub city: Option<String>,
    pub recommendation: Option<RecommendationRecord>,
    /// 1-based position of the shown record and the list length.
    pub position: Option<(usize, usize)>,
    pub next_enabled: bool,
    pub map_enabled: bool,
    /// `"Use detected location: {city}"` when that affordance is offered.
    pub detected_prompt: Option<String>,
}

/// One activation of the frame.
pub struct WidgetController<S, A> {
    config: FrameConfig,
    table: &'static RecommendationTable,
    store: Option<S>,
    actions: A,
    resolver: CityResolver,
    detector: CityDetector,
    selection: Selection,
    /// Set by the first `on_ready`; also the once-per-activation guard for
    /// handing out the detection task.
    ready: bool,
}

impl<S: CityStore, A: ExternalActions> WidgetController<S, A> {
    /// A controller with the default configuration and a storage context.
    pub fn new(store: S, actions: A) -> Self {
        Self::with_config(FrameConfig::default(), Some(store), actions)
    }

    /// `store` is `None` when the host has no browser-like storage; the
    /// frame then keeps its city in memory only.
    pub fn with_config(config: FrameConfig, store: Option<S>, actions: A) -> Self {
        Self {
            resolver: CityResolver::new(config.storage_key.clone()),
            detector: CityDetector::new(config.detection.clone()),
            config,
            table: RecommendationTable::builtin(),
            store,
            actions,
            selection: Selection::default(),
            ready: false,
        }
    }

    /// Host readiness signal. Restores the persisted city and, when there is
    /// none, hands out the detection task for this activation.
    ///
    /// Only the first call does anything.
    pub fn on_ready(&mut self) -> Option<DetectionTask> {
        if self.ready {
            return None;
        }
        self.ready = true;
        debug!("frame ready");

        if self.resolver.load_persisted(self.store.as_ref()) {
            self.sync_selection();
            return None;
        }

        Some(DetectionTask::new(
            self.detector.clone(),
            self.resolver.detected_slot(),
        ))
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Input change. No lookup, no persistence.
    pub fn type_city(&mut self, text: &str) {
        if self.ready {
            self.resolver.type_city(text);
        }
    }

    /// The "Go" button. Returns `None` before readiness.
    pub fn request_recommendations(&mut self) -> Option<Resolution> {
        if !self.ready {
            return None;
        }
        let resolution = self.resolver.request(self.store.as_mut());
        debug!(?resolution, city = self.resolver.active(), "recommendations requested");
        self.sync_selection();
        Some(resolution)
    }

    /// The "Next Recommendation" button. Returns the new index, or `None`
    /// while disabled.
    pub fn next_recommendation(&mut self) -> Option<usize> {
        if !self.ready || self.resolver.active().is_none() {
            return None;
        }
        Some(self.selection.advance(self.table))
    }

    /// The "View on Map" button. Opens the map search for the current
    /// record and returns the URL, or `None` while disabled.
    pub fn view_on_map(&mut self) -> Option<String> {
        let url = self.map_url()?;
        debug!(url = %url, "opening map");
        self.actions.open_url(&url);
        Some(url)
    }

    /// The map search URL the "View on Map" button would open.
    pub fn map_url(&self) -> Option<String> {
        let record = self.current_recommendation()?;
        let city = self.resolver.active()?;
        Some(map_search_url(
            &self.config.maps_search_base,
            &map_query(record, city),
        ))
    }

    /// The "Use detected location" link.
    pub fn use_detected_city(&mut self) -> bool {
        if !self.ready || !self.resolver.use_detected() {
            return false;
        }
        self.sync_selection();
        true
    }

    /// The record on screen. Only shown while a city is active.
    pub fn current_recommendation(&self) -> Option<&'static RecommendationRecord> {
        if !self.ready || self.resolver.active().is_none() {
            return None;
        }
        Some(self.selection.current(self.table))
    }

    pub fn active_city(&self) -> Option<&str> {
        self.resolver.active()
    }

    pub fn detected_city(&self) -> Option<&str> {
        self.resolver.detected()
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn view(&self) -> FrameView {
        if !self.ready {
            return FrameView::Loading;
        }

        let city = self.resolver.active().map(str::to_string);
        let list = self.selection.list(self.table);
        let recommendation = self.current_recommendation().copied();
        let position = recommendation.map(|_| (self.selection.index() + 1, list.len()));
        let description = match &city {
            Some(city) => format!("Recommendations for {city}"),
            None => PROMPT_DESCRIPTION.to_string(),
        };
        let detected_prompt = match self.resolver.detected() {
            Some(detected) if city.is_none() && self.resolver.typed().is_empty() => {
                Some(format!("Use detected location: {detected}"))
            }
            _ => None,
        };

        FrameView::Card(CardView {
            title: CARD_TITLE,
            description,
            input: self.resolver.typed().to_string(),
            placeholder: INPUT_PLACEHOLDER,
            next_enabled: city.is_some(),
            map_enabled: city.is_some(),
            city,
            recommendation,
            position,
            detected_prompt,
        })
    }

    fn sync_selection(&mut self) {
        let city = self.resolver.active().unwrap_or_default();
        if self.selection.retarget(city) {
            debug!(city, "selection reset");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, UrlLog};
    use crate::traits::FrameContext;

    fn ready_frame() -> WidgetController<MemoryStore, UrlLog> {
        let mut frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
        let task = frame.on_ready();
        assert!(task.is_some());
        frame
    }

    #[test]
    fn loading_until_ready() {
        let mut frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
        assert_eq!(frame.view(), FrameView::Loading);

        frame.type_city("Tokyo");
        assert_eq!(frame.request_recommendations(), None);
        assert_eq!(frame.next_recommendation(), None);
        assert_eq!(frame.view_on_map(), None);
        assert!(frame.actions().opened.is_empty());

        let _ = frame.on_ready();
        let card = frame.view().card().cloned().unwrap();
        assert_eq!(card.input, "");
        assert_eq!(card.city, None);
    }

    #[test]
    fn readiness_is_handled_once() {
        let mut frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
        let task = frame.on_ready().unwrap();
        assert!(frame.on_ready().is_none());
        assert!(frame.on_ready().is_none());

        task.complete(Ok(Some(FrameContext::with_username("kompreni"))));
        assert_eq!(frame.detected_city(), Some("Chicago"));
    }

    #[test]
    fn typing_does_not_resolve() {
        let mut frame = ready_frame();
        frame.type_city("Tokyo");
        let card = frame.view().card().cloned().unwrap();
        assert_eq!(card.input, "Tokyo");
        assert_eq!(card.city, None);
        assert_eq!(card.recommendation, None);
        assert!(!card.next_enabled);
        assert_eq!(frame.store().unwrap().peek("userCity"), None);
    }

    #[test]
    fn prompt_card_without_city() {
        let frame = ready_frame();
        let card = frame.view().card().cloned().unwrap();
        assert_eq!(card.title, "Food Recommendations");
        assert_eq!(card.description, "Enter your location for food recommendations");
        assert!(!card.map_enabled);
        assert_eq!(card.position, None);
    }

    #[test]
    fn next_is_disabled_without_city() {
        let mut frame = ready_frame();
        assert_eq!(frame.next_recommendation(), None);
        assert_eq!(frame.view_on_map(), None);
    }

    #[test]
    fn same_city_keeps_the_index() {
        let mut frame = ready_frame();
        frame.type_city("Chicago");
        frame.request_recommendations();
        frame.next_recommendation();

        frame.type_city("chicago");
        frame.request_recommendations();
        assert_eq!(frame.current_recommendation().unwrap().name, "Italian Beef");

        frame.type_city("Seoul");
        frame.request_recommendations();
        assert_eq!(frame.current_recommendation().unwrap().name, "Korean BBQ");
    }

    #[test]
    fn map_link_for_current_record() {
        let mut frame = ready_frame();
        frame.type_city("Tokyo");
        frame.request_recommendations();
        frame.next_recommendation();

        let url = frame.view_on_map().unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps/search/Sushi%20Tsukiji%20Market%20Tokyo"
        );
        assert_eq!(frame.actions().opened, vec![url]);
    }

    #[test]
    fn detected_prompt_and_late_detection() {
        let mut frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
        let task = frame.on_ready().unwrap();
        assert_eq!(frame.view().card().unwrap().detected_prompt, None);

        task.complete(Ok(Some(FrameContext::with_username("kompreni"))));
        assert_eq!(
            frame.view().card().unwrap().detected_prompt.as_deref(),
            Some("Use detected location: Chicago")
        );

        assert!(frame.use_detected_city());
        let card = frame.view().card().cloned().unwrap();
        assert_eq!(card.city.as_deref(), Some("Chicago"));
        assert_eq!(card.detected_prompt, None);
        assert_eq!(card.position, Some((1, 3)));
    }

    #[test]
    fn view_serializes_with_kind_tag() {
        let frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
        let json = serde_json::to_value(frame.view()).unwrap();
        assert_eq!(json["kind"], "loading");

        let mut frame = ready_frame();
        frame.type_city("Seoul");
        frame.request_recommendations();
        let json = serde_json::to_value(frame.view()).unwrap();
        assert_eq!(json["kind"], "card");
        assert_eq!(json["recommendation"]["place"], "Maple Tree House");
        assert_eq!(json["nextEnabled"], true);
    }
}
