// crates/foodframe-core/src/detect.rs

//! # Detected city
//!
//! A best-effort guess at the user's city from the host context. The
//! heuristic is closed: one configured username maps to one city, every
//! other context yields nothing.

use crate::error::Result;
use crate::traits::{FrameContext, HostContext};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

/// Username → city pairing used by the detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionRule {
    /// Matched exactly, case-sensitive.
    pub username: String,
    pub city: String,
}

impl Default for DetectionRule {
    fn default() -> Self {
        Self {
            username: "kompreni".to_string(),
            city: "Chicago".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CityDetector {
    rule: DetectionRule,
}

impl CityDetector {
    pub fn new(rule: DetectionRule) -> Self {
        Self { rule }
    }

    /// Applies the heuristic to the outcome of a context query.
    ///
    /// A rejected query is logged and treated like an absent context.
    pub fn evaluate(&self, outcome: Result<Option<FrameContext>>) -> Option<String> {
        let context = match outcome {
            Ok(context) => context,
            Err(err) => {
                error!(error = %err, "Error detecting location");
                return None;
            }
        };

        let username = context.as_ref().and_then(FrameContext::username)?;
        if username != self.rule.username || self.rule.city.is_empty() {
            debug!(username, "no detected city for user");
            return None;
        }
        Some(self.rule.city.clone())
    }

    /// Queries `host` and applies the heuristic. Never fails.
    pub async fn detect(&self, host: &dyn HostContext) -> Option<String> {
        self.evaluate(host.context().await)
    }
}

/// One-shot slot for the detected city, shared between the widget and
/// the detection task.
///
/// The first offered value sticks; later offers are ignored.
#[derive(Debug, Clone, Default)]
pub struct DetectedCity(Arc<OnceCell<String>>);

impl DetectedCity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set-if-not-already-set. Returns `true` when `city` was stored.
    pub fn offer(&self, city: String) -> bool {
        self.0.set(city).is_ok()
    }

    pub fn get(&self) -> Option<&str> {
        self.0.get().map(String::as_str)
    }
}

/// A pending detection, handed out at most once per activation.
///
/// Hosts either await [`DetectionTask::run`] against a [`HostContext`], or
/// resolve the context themselves and pass the outcome to
/// [`DetectionTask::complete`].
#[derive(Debug)]
#[must_use = "a detection task does nothing until it is run or completed"]
pub struct DetectionTask {
    detector: CityDetector,
    slot: DetectedCity,
}

impl DetectionTask {
    pub fn new(detector: CityDetector, slot: DetectedCity) -> Self {
        Self { detector, slot }
    }

    pub async fn run(self, host: &dyn HostContext) -> Option<String> {
        let detected = self.detector.detect(host).await;
        self.settle(detected)
    }

    /// Feeds an already-resolved context query into the slot and returns
    /// what the slot holds afterwards.
    pub fn complete(self, outcome: Result<Option<FrameContext>>) -> Option<String> {
        let detected = self.detector.evaluate(outcome);
        self.settle(detected)
    }

    fn settle(self, detected: Option<String>) -> Option<String> {
        if let Some(city) = detected {
            if self.slot.offer(city) {
                debug!(city = self.slot.get(), "detected city");
            }
        }
        self.slot.get().map(str::to_string)
    }
}
