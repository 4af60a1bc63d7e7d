//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit UI interaction logs (e.g., analyze clicks, window changes).
    pub print_ui_interactions: bool,
    /// Emit one line per outgoing request and its completion.
    pub print_request_lifecycle: bool,
    /// Emit every applied or discarded state transition.
    pub print_state_transitions: bool,
    /// Emit details of UI state serialization/deserialization logs.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_request_lifecycle: true,
    print_state_transitions: false,
    print_state_serde: false,
    print_shutdown: false,
};
