//! Status model and per-domain partial states
//!
//! The model is a passive container: the merge step writes it, the frame
//! composer reads it. Validation happens at extraction, not here.

/// Active output endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Endpoint {
    #[default]
    Usb,
    Wireless,
}

impl Endpoint {
    pub fn is_wireless(&self) -> bool {
        matches!(self, Endpoint::Wireless)
    }
}

/// The unified status snapshot, one per live widget
///
/// Fully populated from direct provider queries when a widget registers;
/// afterwards only the merge step writes it, one domain at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusState {
    /// Battery state of charge, 0-100
    pub battery_level: u8,
    /// External power present
    #[cfg(feature = "vbus-detect")]
    pub charging: bool,
    /// Currently selected output endpoint
    pub selected_endpoint: Endpoint,
    /// Active wireless profile, meaningful for the wireless endpoint only
    pub active_profile_index: u8,
    pub active_profile_connected: bool,
    pub active_profile_bonded: bool,
    /// Highest-priority active keymap layer
    pub layer_index: u8,
    /// Keymap label for that layer; None falls back to the numeric format
    pub layer_label: Option<&'static str>,
}

/// Battery domain snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryStatus {
    pub level: u8,
    #[cfg(feature = "vbus-detect")]
    pub charging: bool,
}

/// Output domain snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputStatus {
    pub selected_endpoint: Endpoint,
    pub profile_index: u8,
    pub profile_connected: bool,
    pub profile_bonded: bool,
}

/// Layer domain snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerStatus {
    pub index: u8,
    pub label: Option<&'static str>,
}

/// One domain's contribution to the status model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusUpdate {
    Battery(BatteryStatus),
    Output(OutputStatus),
    Layer(LayerStatus),
}

impl StatusState {
    /// Merge one domain's partial state; the other domains' fields keep
    /// their last written value.
    pub fn apply(&mut self, update: &StatusUpdate) {
        match update {
            StatusUpdate::Battery(battery) => {
                self.battery_level = battery.level;
                #[cfg(feature = "vbus-detect")]
                {
                    self.charging = battery.charging;
                }
            }
            StatusUpdate::Output(output) => {
                self.selected_endpoint = output.selected_endpoint;
                self.active_profile_index = output.profile_index;
                self.active_profile_connected = output.profile_connected;
                self.active_profile_bonded = output.profile_bonded;
            }
            StatusUpdate::Layer(layer) => {
                self.layer_index = layer.index;
                self.layer_label = layer.label;
            }
        }
    }
}
