//! Shared application state and the global allocator.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::sync::Arc;

use axum::extract::State;

use launchboard_core::api::schema::InstanceInfo;
use launchboard_core::dataset::LaunchTable;

/// Everything handlers need: the table plus instance metadata. The table is
/// read-only after start-up, so a plain `Arc` with no lock suffices.
pub(crate) struct WebAppInner {
    pub(crate) table: LaunchTable,
    pub(crate) instance: InstanceInfo,
}

pub(crate) type SharedState = Arc<WebAppInner>;

pub(crate) type AppState = State<SharedState>;
