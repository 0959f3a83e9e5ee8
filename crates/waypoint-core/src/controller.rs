//! Navigation event controller
//!
//! The orchestrator invoked on every router lifecycle event. Owns the
//! per-navigation timing, the previous-location memory, and the instant
//! navigation chain, and drives classification, session flag updates,
//! listener notification, metadata refresh, and stats reporting in order.
//!
//! Event handling is synchronous: each pass runs to completion before the
//! host dispatches the next event. The host guarantees one started event
//! per navigation attempt and at most one resolved event before the next
//! attempt begins; an abandoned attempt simply never resolves, and the next
//! started event classifies correctly against the last resolved location.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde_json::json;

use waypoint_session::{NavigationSession, SessionKey};

use crate::chain::InstantNavigationChain;
use crate::classify::{classify, should_skip_load, Transition};
use crate::config::NavigationOptions;
use crate::error::NavigationError;
use crate::events::{MatchPayload, RouterEvent};
use crate::hooks::{BeforeNavigateArgs, NavigateArgs, NavigationStats, PageLoadedArgs};
use crate::meta::MetadataRefresher;
use crate::routes::Routes;
use crate::state::{StateAccess, StateSink, StateUpdate};
use crate::Result;

use waypoint_location::Location;

pub struct NavigationController {
    routes: Routes,
    options: NavigationOptions,
    session: NavigationSession,
    metadata: Arc<dyn MetadataRefresher>,
    chain: InstantNavigationChain,
    started_at: Option<Instant>,
    previous_location: Option<Location>,
    previous_route_indices: Option<Vec<usize>>,
    /// A started event has been handled and its resolve is still pending.
    in_flight: bool,
}

impl NavigationController {
    pub fn new(
        routes: Routes,
        options: NavigationOptions,
        session: NavigationSession,
        metadata: Arc<dyn MetadataRefresher>,
    ) -> Result<Self> {
        routes.validate()?;
        Ok(Self {
            routes,
            options,
            session,
            metadata,
            chain: InstantNavigationChain::new(),
            started_at: None,
            previous_location: None,
            previous_route_indices: None,
            in_flight: false,
        })
    }

    pub fn session(&self) -> &NavigationSession {
        &self.session
    }

    pub fn chain(&self) -> &InstantNavigationChain {
        &self.chain
    }

    pub fn previous_location(&self) -> Option<&Location> {
        self.previous_location.as_ref()
    }

    /// Handle one router lifecycle event. Callers serialize invocations;
    /// a full pass completes before the next event is handled.
    pub fn handle(
        &mut self,
        event: RouterEvent,
        dispatch: &dyn StateSink,
        state: &dyn StateAccess,
    ) -> Result<()> {
        match event {
            RouterEvent::NavigationStarted(payload) => self.on_started(payload, dispatch, state),
            RouterEvent::NavigationResolved(payload) | RouterEvent::ResolvedFallback(payload) => {
                self.on_resolved(payload, dispatch, state)
            }
        }
    }

    fn on_started(
        &mut self,
        payload: MatchPayload,
        dispatch: &dyn StateSink,
        state: &dyn StateAccess,
    ) -> Result<()> {
        // Anchor-link navigation: the router emits duplicate events for a
        // fragment-only change, so the whole pass is skipped. Does not
        // apply under code-split, which bypasses the global loader.
        if let Some(previous) = &self.previous_location {
            if should_skip_load(previous, &payload.location) && !self.options.code_split {
                tracing::debug!(
                    path = %payload.location.url(),
                    "skipping anchor-link navigation"
                );
                return Ok(());
            }
        }

        // The router never emits a resolve for first render. Stash the
        // payload so the host can synthesize a `ResolvedFallback` from it.
        if !self.session.has_rendered() {
            match serde_json::to_value(&payload) {
                Ok(value) => self
                    .session
                    .set(SessionKey::PendingFirstResolvePayload, value),
                Err(error) => tracing::warn!(
                    %error,
                    "failed to stash the first-resolve payload"
                ),
            }
        }

        if self.in_flight {
            tracing::debug!("previous navigation was abandoned before resolving");
        }
        self.started_at = Some(Instant::now());
        self.in_flight = true;

        let MatchPayload {
            location,
            params,
            route_indices,
            ..
        } = payload;

        let instant_back_marked = self.session.take_instant_back_marker();
        let transition = classify(
            self.previous_location.as_ref(),
            &location,
            &self.chain,
            instant_back_marked,
        );

        tracing::debug!(
            path = %location.pathname,
            action = %location.action,
            transition = %transition,
            "navigation started"
        );

        self.session
            .set_instant_navigation(transition == Transition::Instant);

        match transition {
            Transition::InstantBack => {
                if let Some(previous) = self.previous_location.clone() {
                    self.chain.add_instant_back(
                        location.clone(),
                        previous,
                        route_indices.unwrap_or_default(),
                        self.previous_route_indices.clone().unwrap_or_default(),
                    );
                }
            }
            Transition::Instant => self.chain.update_index(&location),
            // Only an unbroken run of qualifying transitions preserves
            // instant-Back capability.
            Transition::Regular => self.chain.reset(),
        }

        if transition.is_instant() {
            self.session.set_instant_back();
        }

        self.session.notify_navigation_start();

        if let Some(hook) = &self.options.on_before_navigate {
            hook(BeforeNavigateArgs {
                dispatch,
                state,
                location: &location,
                params: &params,
                app_context: self.options.app_context.as_ref(),
            });
        }

        dispatch.dispatch(StateUpdate::SetPendingLocation {
            location: location.clone(),
        });

        if self.session.has_rendered() {
            dispatch.dispatch(StateUpdate::LoadingStarted { location });
        }
        // Before the first render nothing is listening for loading state;
        // initial-load UI is the host's configuration concern.

        Ok(())
    }

    fn on_resolved(
        &mut self,
        payload: MatchPayload,
        dispatch: &dyn StateSink,
        state: &dyn StateAccess,
    ) -> Result<()> {
        // Redirect-then-Back produces a duplicate resolve with no matched
        // route chain; the armed flag swallows exactly one.
        if self.session.take_ignore_next_resolve() {
            tracing::debug!("suppressing duplicate resolve after redirect");
            return Ok(());
        }

        if let Some(previous) = &self.previous_location {
            if should_skip_load(previous, &payload.location) && !self.options.code_split {
                return Ok(());
            }
        }

        // Host-ordering precondition: every resolve belongs to a started
        // pass. Fails loudly in tests instead of silently assuming.
        if !self.in_flight {
            debug_assert!(
                false,
                "resolve event received with no navigation in flight"
            );
            tracing::warn!(
                path = %payload.location.pathname,
                "resolve event received with no navigation in flight"
            );
        }

        let MatchPayload {
            location,
            params,
            route_indices,
            route_params,
        } = payload;

        let route_indices = route_indices
            .ok_or_else(|| NavigationError::routing_mismatch(&location.pathname))?;

        self.previous_location = Some(location.clone());
        self.previous_route_indices = Some(route_indices.clone());

        self.session.mark_rendered();

        let route_chain = self.routes.by_indices(&route_indices)?;
        let route_path = Routes::route_path(&route_chain);

        // Under code-split, routes carry no globally registered component
        // and there is nothing to call.
        if !self.options.code_split {
            if let Some(hook) = route_chain.last().and_then(|leaf| leaf.on_loaded.as_ref()) {
                hook(PageLoadedArgs {
                    dispatch,
                    state,
                    location: &location,
                });
            }
        }

        self.metadata.refresh_metadata(&route_chain, state);
        self.session.mark_initial_meta_applied();

        // The new route is current: snapshot the page and drive the
        // before-render listeners. Must precede clearing the instant-back
        // flag so the snapshot still carries it.
        self.session
            .announce_page(location.clone(), route_path.clone(), params.clone());

        let url = location.url();

        if let Some(hook) = &self.options.on_navigate {
            hook(NavigateArgs {
                url: &url,
                location: &location,
                params: &params,
                app_context: self.options.app_context.as_ref(),
                dispatch,
                state,
            });
        }

        self.session.notify_navigation_end();

        self.session.clear_instant_back();

        self.session.set(SessionKey::PreviousRoutes, json!(route_indices));
        self.session
            .set(SessionKey::PreviousRouteParams, json!(route_params));

        let elapsed = self
            .started_at
            .map(|started_at| started_at.elapsed())
            .unwrap_or_default();

        if let Some(report) = &self.options.report_stats {
            report(&NavigationStats {
                url: url.clone(),
                route_path,
                load_and_render: elapsed,
                at: Utc::now(),
            });
        }

        dispatch.dispatch(StateUpdate::LoadingFinished);

        if elapsed > self.options.slow_navigation_threshold {
            tracing::debug!(
                path = %location.pathname,
                elapsed_ms = elapsed.as_millis() as u64,
                "page loaded and rendered over the diagnostic threshold"
            );
        }

        self.in_flight = false;

        Ok(())
    }
}
