// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Administration control surface.
//!
//! Receives decoded administration requests from the mesh transport, applies
//! them against the node store, and composes at most one outgoing reply per
//! request.
//!
//! # Control flow
//!
//! One inbound request runs to completion: the dispatcher inspects the
//! request tag, validates channel indices where one is carried, invokes the
//! matching getter/setter/lifecycle handler, and falls through to
//! [`fallback`] delegation for tags it does not recognize. Handlers return
//! their response as a value; the dispatcher owns the single reply slot.

pub mod fallback;
pub mod lifecycle;
pub mod secret;

mod getters;
mod setters;

#[cfg(test)]
mod tests;

use crate::config::MAX_NUM_CHANNELS;
use crate::proto::{AdminRequest, OutboundReply, PacketMeta, RouteError};
use crate::state::channels::ChannelTable;
use crate::state::SharedStore;
use fallback::{AdminHandleResult, AdminHandler, HandlerRegistry};
use lifecycle::LifecycleScheduler;
use std::sync::Arc;

// ============================================================================
// External collaborators
// ============================================================================

/// Side-effect collaborators invoked after a mutation.
///
/// Implemented by the surrounding firmware: broadcasting the owner record,
/// reconfiguring the radio, persisting state. The admin core calls these
/// synchronously and assumes they complete before returning.
pub trait NodeServices {
    /// Broadcast the owner record on the mesh and persist it.
    fn reload_owner(&mut self);

    /// Apply the current configuration node-wide (radio reconfiguration,
    /// device-preference persistence, broadcast).
    fn reload_config(&mut self);

    /// Tell the radio layer the channel table changed.
    fn channels_changed(&mut self);

    /// Persist only the channel table.
    fn persist_channels(&mut self);
}

// ============================================================================
// Dispatch outcome
// ============================================================================

/// Result of dispatching one administration request.
#[derive(Debug)]
pub struct DispatchOutcome {
    /// Whether a fallback handler claimed the request. Explicitly matched
    /// cases report `false` so other interested modules may still observe the
    /// same message afterwards.
    pub consumed: bool,
    /// The reply to hand to the transport, if any.
    pub reply: Option<OutboundReply>,
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Top-level administration request router.
///
/// Owns the reply slot for each request and the ordered registry of fallback
/// handlers. The store is shared with the rest of the firmware; processing is
/// single-threaded run-to-completion.
pub struct AdminModule<S: NodeServices> {
    store: SharedStore,
    services: S,
    scheduler: Arc<LifecycleScheduler>,
    fallback: HandlerRegistry,
}

impl<S: NodeServices> AdminModule<S> {
    /// Dispatcher over `store` with a fresh lifecycle scheduler.
    pub fn new(store: SharedStore, services: S) -> Self {
        Self::with_scheduler(store, services, Arc::new(LifecycleScheduler::new()))
    }

    /// Dispatcher sharing an externally owned scheduler (the timer loop holds
    /// the other reference).
    pub fn with_scheduler(
        store: SharedStore,
        services: S,
        scheduler: Arc<LifecycleScheduler>,
    ) -> Self {
        Self {
            store,
            services,
            scheduler,
            fallback: HandlerRegistry::new(),
        }
    }

    /// Handle to the lifecycle scheduler, for the external timer loop.
    #[must_use]
    pub fn scheduler(&self) -> Arc<LifecycleScheduler> {
        self.scheduler.clone()
    }

    /// Register a feature-module fallback handler. Delegation visits handlers
    /// in registration order.
    pub fn register_fallback(&mut self, handler: Box<dyn AdminHandler>) {
        self.fallback.register(handler);
    }

    /// Dispatch one decoded administration request.
    ///
    /// At most one reply is produced per call; it is the only channel by
    /// which a response reaches the transport layer.
    pub fn handle_request(&mut self, meta: &PacketMeta, req: AdminRequest) -> DispatchOutcome {
        let mut consumed = false;
        let mut reply: Option<OutboundReply> = None;

        match req {
            // Getters
            AdminRequest::GetOwner => {
                log::debug!("[admin] client is getting owner");
                reply = getters::get_owner(&self.store.read(), meta)
                    .map(|r| OutboundReply::data(meta, r));
            }
            AdminRequest::GetRadio => {
                log::debug!("[admin] client is getting radio");
                reply = getters::get_radio(&self.store.read(), meta)
                    .map(|r| OutboundReply::data(meta, r));
            }
            AdminRequest::GetConfig(kind) => {
                log::debug!("[admin] client is getting config");
                reply = getters::get_config(meta, kind).map(|r| OutboundReply::data(meta, r));
            }
            AdminRequest::GetModuleConfig(kind) => {
                log::debug!("[admin] client is getting module config");
                reply = getters::get_module_config(&self.store.read(), meta, kind)
                    .map(|r| OutboundReply::data(meta, r));
            }
            AdminRequest::GetChannel(index) => {
                log::debug!("[admin] client is getting channel {}", index);
                if index >= MAX_NUM_CHANNELS as u32 {
                    reply = Some(OutboundReply::error(meta, RouteError::BadRequest));
                } else {
                    reply = getters::get_channel(&self.store.read(), meta, index)
                        .map(|r| OutboundReply::data(meta, r));
                }
            }

            // Setters
            AdminRequest::SetOwner(o) => {
                log::debug!("[admin] client is setting owner");
                let mut store = self.store.write();
                setters::set_owner(&mut store, &mut self.services, o);
            }
            AdminRequest::SetRadio(r) => {
                log::debug!("[admin] client is setting radio");
                let mut store = self.store.write();
                setters::set_radio(&mut store, &mut self.services, r);
            }
            AdminRequest::SetConfig(payload) => {
                log::debug!("[admin] client is setting the config");
                setters::set_config(&mut self.services, payload);
            }
            AdminRequest::SetModuleConfig(payload) => {
                log::debug!("[admin] client is setting the module config");
                setters::set_module_config(&mut self.services, payload);
            }
            AdminRequest::SetChannel(cc) => {
                log::debug!("[admin] client is setting channel {}", cc.index);
                if !ChannelTable::contains_index(cc.index) {
                    reply = Some(OutboundReply::error(meta, RouteError::BadRequest));
                } else {
                    let mut store = self.store.write();
                    setters::set_channel(&mut store, &mut self.services, cc);
                }
            }

            // Lifecycle
            AdminRequest::RebootSeconds(secs) => {
                log::debug!("[admin] rebooting in {} seconds", secs);
                self.scheduler.schedule_reboot(secs);
            }
            AdminRequest::ShutdownSeconds(secs) => {
                log::debug!("[admin] shutdown in {} seconds", secs);
                self.scheduler.schedule_shutdown(secs);
            }
            #[cfg(feature = "simulator")]
            AdminRequest::ExitSimulator => {
                log::debug!("[admin] exiting simulator");
                lifecycle::exit_simulator();
            }

            // Everything else belongs to feature modules.
            other => match self.fallback.delegate(meta, &other) {
                AdminHandleResult::HandledWithResponse(response) => {
                    reply = Some(OutboundReply::data(meta, response));
                    consumed = true;
                }
                AdminHandleResult::Handled => {
                    consumed = true;
                    if meta.want_response {
                        log::debug!(
                            "[admin] request wanted a response but none was produced: {:?}",
                            other
                        );
                    }
                }
                AdminHandleResult::NotHandled => {
                    if meta.want_response {
                        log::debug!(
                            "[admin] request wanted a response but none was produced: {:?}",
                            other
                        );
                    } else {
                        // Probably a message this node originated itself.
                        log::debug!("[admin] ignoring nonrelevant admin request: {:?}", other);
                    }
                }
            },
        }

        DispatchOutcome { consumed, reply }
    }
}
