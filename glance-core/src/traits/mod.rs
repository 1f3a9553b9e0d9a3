//! Domain provider query interfaces
//!
//! Each subsystem that feeds the status model exposes a synchronous
//! snapshot of its current value. Queries are cheap reads of cached
//! subsystem state and must be callable at any time, including at widget
//! registration before any notification has fired.

pub mod battery;
pub mod endpoints;
pub mod keymap;

pub use battery::BatterySource;
pub use endpoints::EndpointSource;
pub use keymap::KeymapSource;
