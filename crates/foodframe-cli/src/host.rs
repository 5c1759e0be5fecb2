//! Host-side collaborators for the terminal.

use async_trait::async_trait;
use foodframe_core::{ExternalActions, FrameContext, HostContext, Result};

/// A host context whose user is fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    username: Option<String>,
}

impl StaticHost {
    pub fn new(username: Option<String>) -> Self {
        Self { username }
    }
}

#[async_trait(?Send)]
impl HostContext for StaticHost {
    async fn context(&self) -> Result<Option<FrameContext>> {
        Ok(self.username.clone().map(FrameContext::with_username))
    }
}

/// Prints URLs instead of opening them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintUrl;

impl ExternalActions for PrintUrl {
    fn open_url(&mut self, url: &str) {
        println!("open: {url}");
    }
}
