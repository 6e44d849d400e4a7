//! Dashboard service: owns the dashboard state and fills it from the home API.
//!
//! The dashboard starts out showing fixtures. [`Dashboard::mount`] fires the
//! three reads once, each in its own task; every completion replaces its own
//! slot wholesale or, on any failure or empty payload, leaves it alone.
//! [`Dashboard::teardown`] aborts whatever is still in flight, and a
//! completion that races past the abort is discarded because it checks the
//! phase under the same lock it writes with.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use eve_domain::fixtures;
use eve_domain::fridge::FridgeState;
use eve_domain::mode::Mode;
use eve_domain::occupant::OccupantMetric;
use eve_domain::room::{self, RoomState};
use eve_domain::time::now;

use crate::ports::{FetchError, HomeApi};
use crate::services::mode_controller::ModeController;

/// Lifecycle of a [`Dashboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, fetches not started.
    Idle,
    /// Fetches started; completions are applied.
    Mounted,
    /// Torn down; completions are discarded.
    TornDown,
}

/// What happened to a slot when a fetch completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Live data replaced the slot.
    Replaced,
    /// The fetch failed or returned nothing; the slot kept its value.
    Kept,
    /// The dashboard was not mounted; the result was dropped.
    Discarded,
}

/// Immutable copy of everything the dashboard displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub rooms: Vec<RoomState>,
    pub fridge: FridgeState,
    pub metrics: Vec<OccupantMetric>,
    pub mode: Mode,
    pub alert: &'static str,
    pub accent_color: &'static str,
}

#[derive(Debug)]
struct DashboardState {
    phase: Phase,
    rooms: Vec<RoomState>,
    fridge: FridgeState,
    metrics: Vec<OccupantMetric>,
    mode: ModeController,
}

impl DashboardState {
    fn from_fixtures() -> Self {
        Self {
            phase: Phase::Idle,
            rooms: fixtures::rooms(),
            fridge: fixtures::fridge(),
            metrics: fixtures::occupant_metrics(now()),
            mode: ModeController::default(),
        }
    }

    fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            rooms: self.rooms.clone(),
            fridge: self.fridge.clone(),
            metrics: self.metrics.clone(),
            mode: self.mode.mode(),
            alert: self.mode.alert(),
            accent_color: self.mode.accent_color(),
        }
    }

    fn apply_rooms(&mut self, result: Result<Vec<RoomState>, FetchError>) -> Outcome {
        if self.phase != Phase::Mounted {
            return Outcome::Discarded;
        }
        let checked = result.and_then(|rooms| {
            room::validate_collection(&rooms)?;
            Ok(rooms)
        });
        match usable("rooms", checked) {
            Some(rooms) => {
                tracing::info!(count = rooms.len(), "rooms replaced with live data");
                self.rooms = rooms;
                Outcome::Replaced
            }
            None => Outcome::Kept,
        }
    }

    fn apply_fridges(&mut self, result: Result<Vec<FridgeState>, FetchError>) -> Outcome {
        if self.phase != Phase::Mounted {
            return Outcome::Discarded;
        }
        match usable("fridge", result).and_then(|fridges| fridges.into_iter().next()) {
            Some(fridge) => {
                tracing::info!(room = %fridge.room, "fridge replaced with live data");
                self.fridge = fridge;
                Outcome::Replaced
            }
            None => Outcome::Kept,
        }
    }

    fn apply_metrics(&mut self, result: Result<Vec<OccupantMetric>, FetchError>) -> Outcome {
        if self.phase != Phase::Mounted {
            return Outcome::Discarded;
        }
        match usable("metrics", result) {
            Some(metrics) => {
                tracing::info!(count = metrics.len(), "occupant metrics replaced with live data");
                self.metrics = metrics;
                Outcome::Replaced
            }
            None => Outcome::Kept,
        }
    }
}

/// Turn a fetch result into a replacement value: `Some` only for a
/// non-empty collection.
fn usable<T>(endpoint: &'static str, result: Result<Vec<T>, FetchError>) -> Option<Vec<T>> {
    match result {
        Ok(items) if items.is_empty() => {
            tracing::debug!(endpoint, "empty response, keeping previous value");
            None
        }
        Ok(items) => Some(items),
        Err(err) => {
            tracing::debug!(endpoint, error = %err, "fetch failed, keeping previous value");
            None
        }
    }
}

/// Single owner of the dashboard state.
pub struct Dashboard<A> {
    api: Arc<A>,
    person: String,
    state: Arc<RwLock<DashboardState>>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl<A> Dashboard<A>
where
    A: HomeApi + 'static,
{
    /// Create an idle dashboard showing fixtures, reading metrics for `person`.
    pub fn new(api: A, person: impl Into<String>) -> Self {
        Self {
            api: Arc::new(api),
            person: person.into(),
            state: Arc::new(RwLock::new(DashboardState::from_fixtures())),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub async fn phase(&self) -> Phase {
        self.state.read().await.phase
    }

    /// Start the three fetches. Only the first call on an idle dashboard
    /// does anything; returns whether fetches were started.
    pub async fn mount(&self) -> bool {
        {
            let mut state = self.state.write().await;
            if state.phase != Phase::Idle {
                tracing::warn!(phase = ?state.phase, "dashboard already mounted, ignoring");
                return false;
            }
            state.phase = Phase::Mounted;
        }

        let rooms = {
            let api = Arc::clone(&self.api);
            let state = Arc::clone(&self.state);
            tokio::spawn(async move {
                let result = api.fetch_rooms().await;
                state.write().await.apply_rooms(result);
            })
        };

        let fridge = {
            let api = Arc::clone(&self.api);
            let state = Arc::clone(&self.state);
            tokio::spawn(async move {
                let result = api.fetch_fridges().await;
                state.write().await.apply_fridges(result);
            })
        };

        let metrics = {
            let api = Arc::clone(&self.api);
            let state = Arc::clone(&self.state);
            let person = self.person.clone();
            tokio::spawn(async move {
                let result = api.fetch_occupant_metrics(&person).await;
                state.write().await.apply_metrics(result);
            })
        };

        self.tasks.lock().await.extend([rooms, fridge, metrics]);
        tracing::info!(person = %self.person, "dashboard mounted, fetching live data");
        true
    }

    /// Wait for every in-flight fetch to finish (or be aborted).
    pub async fn settle(&self) {
        let handles = std::mem::take(&mut *self.tasks.lock().await);
        for handle in handles {
            if let Err(err) = handle.await
                && !err.is_cancelled()
            {
                tracing::warn!(error = %err, "dashboard fetch task failed");
            }
        }
    }

    /// Stop applying fetch results and abort those still in flight.
    pub async fn teardown(&self) {
        self.state.write().await.phase = Phase::TornDown;
        let mut tasks = self.tasks.lock().await;
        let pending = tasks.len();
        for handle in tasks.drain(..) {
            handle.abort();
        }
        tracing::info!(pending, "dashboard torn down");
    }

    /// Switch the household mode. Returns `true` when it changed.
    pub async fn select_mode(&self, mode: Mode) -> bool {
        let changed = self.state.write().await.mode.select(mode);
        if changed {
            tracing::info!(%mode, "mode changed");
        }
        changed
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.state.read().await.snapshot()
    }
}

impl<A> Drop for Dashboard<A> {
    fn drop(&mut self) {
        for handle in self.tasks.get_mut().drain(..) {
            handle.abort();
        }
    }
}
