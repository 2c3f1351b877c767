//! Compositor-side view picker
//!
//! Implements the server side of the `wf_kill_view_base` protocol: a client
//! sends `kill_view`, the compositor grabs the pointer on every output, and the
//! next button press either reports the pid of the view under the cursor or
//! cancels.
//!
//! ## Architecture
//!
//! - [`GrabBackend`]: what the picker needs from the host compositor
//!   (outputs, grab claims, input capture, cursor, focus, close)
//! - [`GrabController`]: the selection state machine, independent of Wayland
//! - [`KillViewState`]: the advertised global, bound endpoints and controller
//! - [`KillViewHandler`]: implemented by the host state; wire it up with
//!   [`delegate_kill_view!`]
//!
//! ## Host integration
//!
//! ```ignore
//! struct Compositor { kill_view: KillViewState, backend: Backend, handle: LoopHandle<'static, Self> }
//!
//! impl KillViewHandler for Compositor {
//!     type Backend = Backend;
//!     fn kill_view_parts(&mut self) -> (&mut KillViewState, &mut Backend) {
//!         (&mut self.kill_view, &mut self.backend)
//!     }
//!     fn loop_handle(&self) -> LoopHandle<'static, Self> {
//!         self.handle.clone()
//!     }
//! }
//! delegate_kill_view!(Compositor);
//!
//! // on activation
//! let kill_view = KillViewState::new::<Compositor>(&display_handle, config.kill_view);
//! // from the input pipeline
//! if wf_kill_view::pointer_button(&mut state, output, button, pressed) { return; }
//! // on deactivation
//! wf_kill_view::deactivate(&mut state);
//! ```
//!
//! ## Known gaps
//!
//! Events go to every bound client, including ones that never sent
//! `kill_view`. A click on empty space, or a request no output would accept,
//! produces no event at all and leaves waiting clients blocked.

mod backend;
mod controller;
mod endpoint;
mod error;
mod grab;
mod idle;
mod state;

pub use backend::{GrabBackend, OutputId, ViewOrigin};
pub use controller::{Deferred, GrabController, Report};
pub use endpoint::EndpointSet;
pub use error::KillViewError;
pub use grab::GrabHandle;
pub use idle::IdleCall;
pub use state::{deactivate, pointer_button, KillViewHandler, KillViewState};

pub mod reexports {
    pub use calloop;
    pub use wayland_server;
    pub use wf_kill_protocol;
}

/// Implement the `wf_kill_view_base` dispatch traits for a
/// [`KillViewHandler`] type by delegating to [`KillViewState`]
#[macro_export]
macro_rules! delegate_kill_view {
    ($ty: ty) => {
        $crate::reexports::wayland_server::delegate_global_dispatch!($ty: [
            $crate::reexports::wf_kill_protocol::server::wf_kill_view_base::WfKillViewBase: ()
        ] => $crate::KillViewState);
        $crate::reexports::wayland_server::delegate_dispatch!($ty: [
            $crate::reexports::wf_kill_protocol::server::wf_kill_view_base::WfKillViewBase: ()
        ] => $crate::KillViewState);
    };
}
