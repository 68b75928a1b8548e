// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fallback delegation to feature-module handlers.
//!
//! Feature modules (canned messages, store-and-forward, ...) understand
//! administration requests of their own. When the dispatcher finds no explicit
//! case for a request tag, it broadcasts the request to every registered
//! handler in registration order and aggregates a single outcome. Broadcast,
//! not first-match: every module sees every delegated request.

use crate::proto::{AdminRequest, AdminResponse, PacketMeta};

/// Outcome of offering a request to one handler, or the aggregate of a whole
/// delegation round.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminHandleResult {
    /// The request is not relevant to this handler.
    NotHandled,
    /// The request was acted upon; no response payload was produced.
    Handled,
    /// The request was acted upon and produced a response.
    HandledWithResponse(AdminResponse),
}

/// A feature module offering to handle administration requests the dispatcher
/// does not recognize itself.
pub trait AdminHandler: Send {
    /// Module name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Offer `req` to this handler.
    fn handle_admin(&mut self, meta: &PacketMeta, req: &AdminRequest) -> AdminHandleResult;
}

/// Ordered collection of fallback handlers.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn AdminHandler>>,
}

impl HandlerRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler`; delegation visits handlers in registration order.
    pub fn register(&mut self, handler: Box<dyn AdminHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Broadcast `req` to every handler and aggregate the strongest outcome.
    ///
    /// A later `HandledWithResponse` overwrites an earlier one (single reply
    /// slot, last write wins); a plain `Handled` never downgrades a response
    /// produced earlier in the round.
    pub(crate) fn delegate(
        &mut self,
        meta: &PacketMeta,
        req: &AdminRequest,
    ) -> AdminHandleResult {
        let mut outcome = AdminHandleResult::NotHandled;

        for handler in &mut self.handlers {
            match handler.handle_admin(meta, req) {
                AdminHandleResult::NotHandled => {}
                AdminHandleResult::Handled => {
                    log::debug!("[admin] {} handled delegated request", handler.name());
                    if !matches!(outcome, AdminHandleResult::HandledWithResponse(_)) {
                        outcome = AdminHandleResult::Handled;
                    }
                }
                AdminHandleResult::HandledWithResponse(response) => {
                    log::debug!("[admin] {} responded to delegated request", handler.name());
                    outcome = AdminHandleResult::HandledWithResponse(response);
                }
            }
        }

        outcome
    }
}
