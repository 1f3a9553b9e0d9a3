//! Battery subsystem queries

/// Synchronous queries against the battery subsystem
pub trait BatterySource {
    /// Last sampled state of charge in percent (0-100), or None when no
    /// reading has been taken yet. A missing reading displays as 0 %.
    fn state_of_charge(&self) -> Option<u8>;

    /// Whether external power is present on VBUS
    #[cfg(feature = "vbus-detect")]
    fn vbus_present(&self) -> bool;
}
