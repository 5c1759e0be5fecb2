// crates/foodframe-core/src/traits.rs

//! Collaborator seams between the frame and its host.
//!
//! Platform implementations:
//! - Tests and in-memory fallback: [`MemoryStore`](crate::storage::MemoryStore)
//! - CLI: a JSON file store and a static host context
//! - Browser (WASM): `localStorage` and the SDK context object

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Opaque key-value storage, e.g. browser `localStorage`.
pub trait CityStore {
    /// Reads `key`.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - the key is set
    /// * `Ok(None)` - the key is not set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing what was there.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The user context the host runtime exposes to an embedded frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameContext {
    #[serde(default)]
    pub user: Option<FrameUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameUser {
    #[serde(default)]
    pub fid: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl FrameContext {
    /// Shorthand for a context whose user only carries a username.
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            user: Some(FrameUser {
                username: Some(username.into()),
                ..FrameUser::default()
            }),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref()?.username.as_deref()
    }
}

/// Asynchronous access to the host's current user context. May reject.
#[async_trait(?Send)]
pub trait HostContext {
    async fn context(&self) -> Result<Option<FrameContext>>;
}

/// Fire-and-forget actions the host performs on the frame's behalf.
pub trait ExternalActions {
    fn open_url(&mut self, url: &str);
}
