use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};

use crate::{
    entities::*,
    gateways::{geocode::ReverseGeocodingGateway, position::PositionSource, report::LocationReportGateway},
    state::LocationState,
    usecases::{acquire_and_report, CycleOptions},
};

struct Gateways<P, G, R> {
    position: P,
    geocoding: G,
    report: R,
    options: CycleOptions,
}

/// Reports the live location of the current actor.
///
/// A cycle is started whenever the role of the actor changes and
/// on every [`retry`](Self::retry). The outcome of a cycle is only
/// applied if no other cycle has been started in the meantime and
/// the updater has not been dropped.
pub struct LiveLocationUpdater<P, G, R> {
    gateways: Arc<Gateways<P, G, R>>,
    state: Arc<watch::Sender<LocationState>>,
    actor: Option<Actor>,
}

impl<P, G, R> std::fmt::Debug for LiveLocationUpdater<P, G, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveLocationUpdater")
            .field("actor", &self.actor)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl<P, G, R> LiveLocationUpdater<P, G, R>
where
    P: PositionSource + Send + Sync + 'static,
    G: ReverseGeocodingGateway + Send + Sync + 'static,
    R: LocationReportGateway + Send + Sync + 'static,
{
    pub fn new(position: P, geocoding: G, report: R, options: CycleOptions) -> Self {
        let gateways = Gateways {
            position,
            geocoding,
            report,
            options,
        };
        let (state, _) = watch::channel(LocationState::default());
        Self {
            gateways: Arc::new(gateways),
            state: Arc::new(state),
            actor: None,
        }
    }

    /// Replace the current actor.
    ///
    /// Only a change of the role tag starts a new cycle. The returned
    /// handle resolves to `true` if the outcome has been applied.
    pub fn set_actor(&mut self, actor: Option<Actor>) -> Option<JoinHandle<bool>> {
        let role_changed = self.actor.as_ref().map(|a| a.user_type.as_str())
            != actor.as_ref().map(|a| a.user_type.as_str());
        self.actor = actor;
        if !role_changed {
            return None;
        }
        self.trigger()
    }

    /// Run a new cycle, regardless of the outcome of the previous one.
    pub fn retry(&self) -> Option<JoinHandle<bool>> {
        self.trigger()
    }

    pub fn snapshot(&self) -> LocationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LocationState> {
        self.state.subscribe()
    }

    /// Tear down the updater.
    ///
    /// Cycles that are still pending will not touch the state anymore.
    pub fn shutdown(self) -> LocationState {
        self.snapshot()
    }

    fn trigger(&self) -> Option<JoinHandle<bool>> {
        let mut token = None;
        self.state
            .send_modify(|state| token = state.begin(self.actor.as_ref()));
        let token = token?;
        let actor = self.actor.clone()?;
        log::debug!(
            "Starting location cycle #{} for {}",
            self.state.borrow().generation(),
            actor.user_type
        );
        let gateways = Arc::clone(&self.gateways);
        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            let Gateways {
                position,
                geocoding,
                report,
                options,
            } = &*gateways;
            let outcome =
                acquire_and_report(Some(&actor), position, geocoding, report, options).await;
            state.send_if_modified(|state| state.commit(token, outcome))
        });
        Some(handle)
    }
}

impl<P, G, R> Drop for LiveLocationUpdater<P, G, R> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| {
            state.invalidate();
            false
        });
    }
}
