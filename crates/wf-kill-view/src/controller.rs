//! Selection state machine
//!
//! One cycle runs from a `kill_view` request to the first pointer button
//! press on a grabbed output:
//!
//! ```text
//!   Idle --begin--> Grabbing --press--> Resolving --idle tick--> Idle
//!                      |                    |
//!                      +-- SetCursor        +-- ViewPid(pid) | Cancel | nothing
//!                          (idle tick)
//! ```
//!
//! The controller knows nothing about Wayland resources. It returns a
//! [`Report`] and the protocol layer broadcasts it.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};
use wayland_server::DisplayHandle;
use wf_kill_config::KillViewConfig;

use crate::backend::{GrabBackend, OutputId};
use crate::error::KillViewError;
use crate::grab::GrabHandle;
use crate::idle::IdleCall;

/// Work postponed to the next idle tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Show the selection cursor
    SetCursor,
    /// Resolve the click made with `button`
    Resolve { button: u32 },
}

/// Terminal outcome of a cycle, to be sent to every bound client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    ViewPid(i32),
    Cancel,
}

/// Grabs, pending deferred work and settings of the view picker
#[derive(Debug)]
pub struct GrabController {
    config: KillViewConfig,
    grabs: BTreeMap<OutputId, GrabHandle>,
    idle: IdleCall<Deferred>,
}

impl GrabController {
    pub fn new(config: KillViewConfig) -> Self {
        Self {
            config,
            grabs: BTreeMap::new(),
            idle: IdleCall::default(),
        }
    }

    /// Whether a cycle is grabbing or waiting to resolve a click
    pub fn is_busy(&self) -> bool {
        !self.grabs.is_empty() || matches!(self.idle.pending(), Some(Deferred::Resolve { .. }))
    }

    pub fn is_grabbed(&self, output: OutputId) -> bool {
        self.grabs.contains_key(&output)
    }

    pub fn grabbed_outputs(&self) -> impl Iterator<Item = OutputId> + '_ {
        self.grabs.keys().copied()
    }

    pub fn pending(&self) -> Option<Deferred> {
        self.idle.pending().copied()
    }

    /// Start a cycle: grab every output that accepts the claim
    ///
    /// Outputs that refuse are skipped. Returns the number of grabbed outputs.
    pub fn begin<B: GrabBackend>(&mut self, backend: &mut B) -> Result<usize, KillViewError> {
        if self.is_busy() {
            return Err(KillViewError::RequestPending);
        }

        let outputs = backend.outputs();
        for output in &outputs {
            if let Some(handle) = GrabHandle::claim(*output, &self.config.grab_name, backend) {
                self.grabs.insert(*output, handle);
            }
        }

        if self.grabs.is_empty() {
            return Err(KillViewError::NoOutputGrabbed {
                outputs: outputs.len(),
            });
        }

        if self.grabs.len() < outputs.len() {
            warn!(
                grabbed = self.grabs.len(),
                outputs = outputs.len(),
                "Some outputs refused the grab, continuing without them"
            );
        }

        self.idle.schedule(Deferred::SetCursor);
        info!(outputs = self.grabs.len(), "Waiting for a view to be clicked");

        Ok(self.grabs.len())
    }

    /// Feed a pointer button event seen on `output`
    ///
    /// Returns `true` when the event belongs to the grab and must not reach
    /// clients. A press ends the grab on every output.
    pub fn pointer_button<B: GrabBackend>(
        &mut self,
        output: OutputId,
        button: u32,
        pressed: bool,
        backend: &mut B,
    ) -> bool {
        if !self.is_grabbed(output) {
            return false;
        }

        if pressed {
            self.end_grab(button, backend);
        }

        true
    }

    /// Release every grab and schedule resolution of the click
    pub fn end_grab<B: GrabBackend>(&mut self, button: u32, backend: &mut B) {
        self.release_all(backend);
        backend.set_cursor(&self.config.default_cursor);
        self.idle.schedule(Deferred::Resolve { button });
    }

    fn release_all<B: GrabBackend>(&mut self, backend: &mut B) {
        for (_, handle) in std::mem::take(&mut self.grabs) {
            handle.release(backend);
        }
    }

    /// See [`IdleCall::arm`]
    pub fn arm_idle(&mut self) -> bool {
        self.idle.arm()
    }

    /// Run the deferred action, if one is still pending
    pub fn run_idle<B: GrabBackend>(
        &mut self,
        backend: &mut B,
        dh: &DisplayHandle,
    ) -> Option<Report> {
        let action = self.idle.take()?;
        debug!(?action, "Running deferred action");

        match action {
            Deferred::SetCursor => {
                backend.set_cursor(&self.config.cursor);
                None
            }
            Deferred::Resolve { button } if button == self.config.select_button => {
                self.resolve_view(backend, dh)
            }
            Deferred::Resolve { button } => {
                debug!(button, "Selection cancelled");
                Some(Report::Cancel)
            }
        }
    }

    fn resolve_view<B: GrabBackend>(
        &mut self,
        backend: &mut B,
        dh: &DisplayHandle,
    ) -> Option<Report> {
        let Some(view) = backend.cursor_focus_view() else {
            debug!("No view under the cursor, nothing to report");
            return None;
        };

        let pid = backend.view_origin(&view).pid(dh);
        if self.config.close_view {
            backend.close_view(&view);
        }

        info!(pid, "Resolved view under the cursor");
        Some(Report::ViewPid(pid))
    }

    /// Release everything and forget any pending action
    pub fn shutdown<B: GrabBackend>(&mut self, backend: &mut B) {
        self.release_all(backend);
        self.idle.cancel();
    }
}
