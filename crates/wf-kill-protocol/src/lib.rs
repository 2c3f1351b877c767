//! Wayland bindings for the `wf_kill_view_base` protocol
//!
//! The protocol lets a client ask the compositor to grab the pointer, wait for
//! the user to click a view, and report the process that owns it.
//!
//! ## Wire contract (version 1)
//!
//! - Request `kill_view()` starts a selection cycle. It has no direct reply.
//! - Event `view_pid(pid: int)` reports the owning process of the clicked view.
//!   A pid of [`UNKNOWN_PID`] or less means the owner could not be determined.
//! - Event `cancel()` is sent instead of `view_pid` when the selection is aborted.
//!
//! Exactly one of the two events ends a cycle, and it is broadcast to every
//! bound object.
//!
//! The bindings are generated from `protocols/wf-kill-view.xml` by
//! `wayland-scanner`. Enable the `client` feature for the proxy side and the
//! `server` feature for the resource side.

#![cfg_attr(rustfmt, rustfmt_skip)]

/// Interface name advertised in the registry
pub const INTERFACE_NAME: &str = "wf_kill_view_base";

/// Protocol version implemented by both sides
pub const VERSION: u32 = 1;

/// Pid sent in `view_pid` when the owning process is unknown
pub const UNKNOWN_PID: i32 = 0;

#[cfg(feature = "client")]
pub mod client {
    //! Client-side proxies

    use wayland_client;

    pub mod __interfaces {
        wayland_scanner::generate_interfaces!("protocols/wf-kill-view.xml");
    }
    use self::__interfaces::*;

    wayland_scanner::generate_client_code!("protocols/wf-kill-view.xml");
}

#[cfg(feature = "server")]
pub mod server {
    //! Server-side resources

    use wayland_server;

    pub mod __interfaces {
        wayland_scanner::generate_interfaces!("protocols/wf-kill-view.xml");
    }
    use self::__interfaces::*;

    wayland_scanner::generate_server_code!("protocols/wf-kill-view.xml");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_pid_is_not_a_valid_pid() {
        assert!(UNKNOWN_PID <= 0);
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_server_interface_matches_constants() {
        let interface = &server::__interfaces::WF_KILL_VIEW_BASE_INTERFACE;
        assert_eq!(interface.name, INTERFACE_NAME);
        assert_eq!(interface.version, VERSION);
        assert_eq!(interface.requests.len(), 1);
        assert_eq!(interface.events.len(), 2);
        assert_eq!(interface.requests[0].name, "kill_view");
        assert_eq!(interface.events[0].name, "view_pid");
        assert_eq!(interface.events[1].name, "cancel");
    }

    #[cfg(feature = "client")]
    #[test]
    fn test_client_interface_matches_constants() {
        let interface = &client::__interfaces::WF_KILL_VIEW_BASE_INTERFACE;
        assert_eq!(interface.name, INTERFACE_NAME);
        assert_eq!(interface.version, VERSION);
    }
}
