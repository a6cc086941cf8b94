//! Logging facilities for Typeahead.
//!
//! Typeahead uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in the host
//! application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // ...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=typeahead::panel=trace`.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "typeahead_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "typeahead_core::signal";
    /// Field controller target.
    pub const FIELD: &str = "typeahead::field";
    /// Match engine target.
    pub const FILTER: &str = "typeahead::filter";
    /// Panel geometry target.
    pub const PANEL: &str = "typeahead::panel";
}
