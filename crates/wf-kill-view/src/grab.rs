//! Per-output pointer grabs

use tracing::debug;

use crate::backend::{GrabBackend, OutputId};

/// A pointer grab held on one output for the length of one selection cycle
///
/// A handle only exists while its output is claimed: [`GrabHandle::claim`]
/// returns `None` when the claim is refused, and [`GrabHandle::release`]
/// consumes the handle.
#[derive(Debug, PartialEq, Eq)]
pub struct GrabHandle {
    output: OutputId,
}

impl GrabHandle {
    /// Claim `output` and start capturing its pointer buttons
    pub fn claim<B: GrabBackend>(output: OutputId, name: &str, backend: &mut B) -> Option<Self> {
        if !backend.activate_plugin(output, name) {
            debug!(output, grab = name, "Output refused the grab claim");
            return None;
        }

        backend.grab_input(output);
        debug!(output, grab = name, "Grabbed pointer input");

        Some(Self { output })
    }

    /// Drop the claim and the input capture
    pub fn release<B: GrabBackend>(self, backend: &mut B) {
        backend.deactivate_plugin(self.output);
        backend.ungrab_input(self.output);
        debug!(output = self.output, "Released pointer grab");
    }
}
