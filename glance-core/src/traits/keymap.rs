//! Keymap layer queries

/// Synchronous queries against the keymap subsystem
pub trait KeymapSource {
    /// Highest-priority currently active layer
    fn highest_active_layer(&self) -> u8;

    /// Display label for a layer, if the keymap names it. Layer names are
    /// compile-time data, hence the static lifetime.
    fn layer_label(&self, layer: u8) -> Option<&'static str>;
}
