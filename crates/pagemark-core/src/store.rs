//! Page store abstraction.
//!
//! The store owns page entities and persists logo changes. It is the single
//! source of truth for a page's [`LogoDescriptor`]; the controller only reads
//! through it and writes through [`PageStore::update_logo`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::header::SaveStatus;
use crate::logo::LogoDescriptor;

/// A page entity as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page identifier.
    pub id: String,
    /// Page name, if one has been set.
    #[serde(default)]
    pub name: Option<String>,
    /// Page logo.
    #[serde(default)]
    pub logo_props: LogoDescriptor,
    /// Whether the current user may edit the content.
    #[serde(default)]
    pub is_content_editable: bool,
    /// Content save state.
    #[serde(default)]
    pub save_status: SaveStatus,
}

impl Page {
    /// Create a page with no logo.
    pub fn new(id: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
            logo_props: LogoDescriptor::default(),
            is_content_editable: false,
            save_status: SaveStatus::default(),
        }
    }
}

/// Trait for page persistence operations.
/// This trait allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Current logo of the page.
    async fn logo_props(&self) -> Result<LogoDescriptor>;

    /// Persist a new logo for the page.
    async fn update_logo(&self, descriptor: LogoDescriptor) -> Result<()>;
}

#[derive(Debug)]
struct StoreState {
    page: Page,
    failure: Option<String>,
}

/// Page store held in memory.
///
/// Writes are serialized through an internal lock. Rejection and latency can
/// be injected to exercise failure and overlapping updates.
#[derive(Debug, Clone)]
pub struct InMemoryPageStore {
    state: Arc<RwLock<StoreState>>,
    latency: Option<Duration>,
}

impl InMemoryPageStore {
    /// Create a store holding the given page.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                page,
                failure: None,
            })),
            latency: None,
        }
    }

    /// Delay every update by `latency` before applying it.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Reject subsequent updates with the given reason.
    pub async fn fail_updates(&self, reason: impl Into<String>) {
        self.state.write().await.failure = Some(reason.into());
    }

    /// Accept subsequent updates again.
    pub async fn clear_failure(&self) {
        self.state.write().await.failure = None;
    }

    /// Snapshot of the stored page.
    pub async fn page(&self) -> Page {
        self.state.read().await.page.clone()
    }
}

#[async_trait]
impl PageStore for InMemoryPageStore {
    async fn logo_props(&self) -> Result<LogoDescriptor> {
        Ok(self.state.read().await.page.logo_props.clone())
    }

    async fn update_logo(&self, descriptor: LogoDescriptor) -> Result<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let mut state = self.state.write().await;
        if let Some(reason) = &state.failure {
            debug!("Rejecting logo update for page {}: {}", state.page.id, reason);
            return Err(Error::UpdateFailed(reason.clone()));
        }

        info!("Updated logo for page {} (in use: {:?})", state.page.id, descriptor.in_use);
        state.page.logo_props = descriptor;
        Ok(())
    }
}
