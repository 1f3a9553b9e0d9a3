//! Output endpoint and wireless profile queries

use crate::status::Endpoint;

/// Synchronous queries against the connectivity subsystem
pub trait EndpointSource {
    /// Currently selected output endpoint
    fn selected_endpoint(&self) -> Endpoint;

    /// Index of the active wireless profile
    fn active_profile_index(&self) -> u8;

    /// Whether the active profile's peer is currently connected
    fn active_profile_connected(&self) -> bool;

    /// Whether the active profile is open: advertising with no bond yet.
    /// A profile that is not open is bonded.
    fn active_profile_open(&self) -> bool;
}
