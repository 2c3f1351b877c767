//! Host compositor interface
//!
//! The picker never touches the scene graph, outputs or surfaces directly.
//! Everything it needs from the compositor goes through [`GrabBackend`].

use wayland_server::{Client, DisplayHandle};
use wf_kill_protocol::UNKNOWN_PID;

/// Stable identifier of a display output
///
/// Grabs are keyed by this value rather than by a reference to the output so
/// the bookkeeping survives outputs being hot-plugged mid-cycle.
pub type OutputId = u32;

/// Operations the picker needs from the host compositor
pub trait GrabBackend {
    /// Compositor-side handle to a mapped view
    type View;

    /// All outputs currently in the layout
    fn outputs(&self) -> Vec<OutputId>;

    /// Claim input exclusivity on `output` under `name`.
    ///
    /// Returns `false` when another extension already holds the output.
    fn activate_plugin(&mut self, output: OutputId, name: &str) -> bool;

    /// Release a claim made by [`GrabBackend::activate_plugin`]
    fn deactivate_plugin(&mut self, output: OutputId);

    /// Route pointer button events on `output` to the picker, ahead of
    /// everything below the overlay layer.
    fn grab_input(&mut self, output: OutputId);

    /// Undo [`GrabBackend::grab_input`]
    fn ungrab_input(&mut self, output: OutputId);

    /// Set the pointer cursor by theme name
    fn set_cursor(&mut self, name: &str);

    /// The view that has pointer focus right now, if any
    fn cursor_focus_view(&self) -> Option<Self::View>;

    /// Where the view's surface comes from
    fn view_origin(&self, view: &Self::View) -> ViewOrigin;

    /// Ask the view to close. This is a request, the client may ignore it.
    fn close_view(&mut self, view: &Self::View);
}

/// Origin of a view's surface, which decides how its pid is found
#[derive(Debug, Clone)]
pub enum ViewOrigin {
    /// A native Wayland client; the pid comes from its socket credentials
    Native(Client),
    /// A surface from the X11 compatibility layer; the pid comes from the
    /// X11 surface metadata, when the X client set it
    Xwayland { pid: Option<u32> },
}

impl ViewOrigin {
    /// Owning process id, or [`UNKNOWN_PID`] when it cannot be determined
    pub fn pid(&self, dh: &DisplayHandle) -> i32 {
        let pid = match self {
            Self::Native(client) => client.get_credentials(dh).ok().map(|c| c.pid),
            Self::Xwayland { pid } => pid.and_then(|pid| i32::try_from(pid).ok()),
        };

        match pid {
            Some(pid) if pid > 0 => pid,
            _ => UNKNOWN_PID,
        }
    }
}
