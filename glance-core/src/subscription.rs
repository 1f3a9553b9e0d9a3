//! Subscription matrix
//!
//! Binds each notification kind to the domains interested in it, and
//! holds the per-domain state extractors. An extractor may read fields
//! straight from its native notification; for any other trigger (or no
//! trigger at all, as at widget registration) it falls back to querying
//! the domain provider directly instead of showing stale data.

use crate::events::{Notification, NotificationKind};
use crate::status::{BatteryStatus, LayerStatus, OutputStatus, StatusUpdate};
use crate::traits::{BatterySource, EndpointSource, KeymapSource};

/// The three independent state domains feeding the status model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Domain {
    Battery,
    Output,
    Layer,
}

impl Domain {
    /// All domains, in extraction order
    pub const ALL: [Domain; 3] = [Domain::Battery, Domain::Output, Domain::Layer];

    /// Compile-time subscription table: which notification kinds trigger
    /// this domain's extractor. A kind may trigger more than one domain
    /// (a power change affects both the charging flag and the output
    /// token).
    pub fn subscribed_to(self, kind: NotificationKind) -> bool {
        match (self, kind) {
            (Domain::Battery, NotificationKind::BatteryStateChanged) => true,
            #[cfg(feature = "vbus-detect")]
            (Domain::Battery, NotificationKind::PowerStateChanged) => true,
            (Domain::Output, NotificationKind::EndpointChanged) => true,
            #[cfg(feature = "vbus-detect")]
            (Domain::Output, NotificationKind::PowerStateChanged) => true,
            (Domain::Output, NotificationKind::ProfileChanged) => true,
            (Domain::Layer, NotificationKind::LayerStateChanged) => true,
            _ => false,
        }
    }
}

/// Battery domain extractor
///
/// The native notification carries the new state of charge; every other
/// trigger re-queries the subsystem. Levels above 100 clamp.
pub fn battery_status<P: BatterySource>(
    sources: &P,
    event: Option<&Notification>,
) -> BatteryStatus {
    let level = match event {
        Some(Notification::BatteryStateChanged { state_of_charge }) => *state_of_charge,
        _ => sources.state_of_charge().unwrap_or(0),
    };
    BatteryStatus {
        level: level.min(100),
        #[cfg(feature = "vbus-detect")]
        charging: sources.vbus_present(),
    }
}

/// Output domain extractor
///
/// Always re-queries; the notification only selects the moment. The
/// bonded flag is derived from the profile not being open.
pub fn output_status<P: EndpointSource>(
    sources: &P,
    _event: Option<&Notification>,
) -> OutputStatus {
    OutputStatus {
        selected_endpoint: sources.selected_endpoint(),
        profile_index: sources.active_profile_index(),
        profile_connected: sources.active_profile_connected(),
        profile_bonded: !sources.active_profile_open(),
    }
}

/// Layer domain extractor
pub fn layer_status<P: KeymapSource>(sources: &P, _event: Option<&Notification>) -> LayerStatus {
    let index = sources.highest_active_layer();
    LayerStatus {
        index,
        label: sources.layer_label(index),
    }
}

/// Run the extractor for `domain`
pub fn extract<P>(domain: Domain, sources: &P, event: Option<&Notification>) -> StatusUpdate
where
    P: BatterySource + EndpointSource + KeymapSource,
{
    match domain {
        Domain::Battery => StatusUpdate::Battery(battery_status(sources, event)),
        Domain::Output => StatusUpdate::Output(output_status(sources, event)),
        Domain::Layer => StatusUpdate::Layer(layer_status(sources, event)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Endpoint;

    struct FakeSources {
        soc: Option<u8>,
        vbus: bool,
        endpoint: Endpoint,
        profile: u8,
        connected: bool,
        open: bool,
        layer: u8,
        label: Option<&'static str>,
    }

    impl Default for FakeSources {
        fn default() -> Self {
            Self {
                soc: Some(50),
                vbus: false,
                endpoint: Endpoint::Usb,
                profile: 0,
                connected: false,
                open: true,
                layer: 0,
                label: None,
            }
        }
    }

    impl BatterySource for FakeSources {
        fn state_of_charge(&self) -> Option<u8> {
            self.soc
        }
        #[cfg(feature = "vbus-detect")]
        fn vbus_present(&self) -> bool {
            self.vbus
        }
    }

    impl EndpointSource for FakeSources {
        fn selected_endpoint(&self) -> Endpoint {
            self.endpoint
        }
        fn active_profile_index(&self) -> u8 {
            self.profile
        }
        fn active_profile_connected(&self) -> bool {
            self.connected
        }
        fn active_profile_open(&self) -> bool {
            self.open
        }
    }

    impl KeymapSource for FakeSources {
        fn highest_active_layer(&self) -> u8 {
            self.layer
        }
        fn layer_label(&self, layer: u8) -> Option<&'static str> {
            if layer == self.layer {
                self.label
            } else {
                None
            }
        }
    }

    #[test]
    fn test_battery_reads_native_event() {
        let sources = FakeSources { soc: Some(77), ..Default::default() };
        let event = Notification::BatteryStateChanged { state_of_charge: 42 };
        let status = battery_status(&sources, Some(&event));
        assert_eq!(status.level, 42);
    }

    #[test]
    fn test_battery_queries_on_foreign_event() {
        let sources = FakeSources { soc: Some(77), ..Default::default() };
        let event = Notification::PowerStateChanged { vbus_present: true };
        let status = battery_status(&sources, Some(&event));
        assert_eq!(status.level, 77);
    }

    #[test]
    fn test_battery_queries_without_event() {
        let sources = FakeSources { soc: Some(63), ..Default::default() };
        assert_eq!(battery_status(&sources, None).level, 63);
    }

    #[test]
    fn test_battery_missing_reading_defaults_to_zero() {
        let sources = FakeSources { soc: None, ..Default::default() };
        assert_eq!(battery_status(&sources, None).level, 0);
    }

    #[test]
    fn test_battery_clamps_overrange() {
        let sources = FakeSources::default();
        let event = Notification::BatteryStateChanged { state_of_charge: 200 };
        assert_eq!(battery_status(&sources, Some(&event)).level, 100);
        let full = Notification::BatteryStateChanged { state_of_charge: 100 };
        assert_eq!(battery_status(&sources, Some(&full)).level, 100);
        let empty = Notification::BatteryStateChanged { state_of_charge: 0 };
        assert_eq!(battery_status(&sources, Some(&empty)).level, 0);
    }

    #[cfg(feature = "vbus-detect")]
    #[test]
    fn test_battery_always_requeries_charging() {
        let sources = FakeSources { vbus: true, ..Default::default() };
        let event = Notification::BatteryStateChanged { state_of_charge: 10 };
        assert!(battery_status(&sources, Some(&event)).charging);
    }

    #[test]
    fn test_output_bonded_is_not_open() {
        let sources = FakeSources { open: false, ..Default::default() };
        assert!(output_status(&sources, None).profile_bonded);
        let sources = FakeSources { open: true, ..Default::default() };
        assert!(!output_status(&sources, None).profile_bonded);
    }

    #[test]
    fn test_layer_label_follows_index() {
        let sources = FakeSources {
            layer: 2,
            label: Some("SYM"),
            ..Default::default()
        };
        let status = layer_status(&sources, None);
        assert_eq!(status.index, 2);
        assert_eq!(status.label, Some("SYM"));
    }

    #[test]
    fn test_subscription_table() {
        use NotificationKind::*;

        assert!(Domain::Battery.subscribed_to(BatteryStateChanged));
        assert!(!Domain::Battery.subscribed_to(EndpointChanged));
        assert!(!Domain::Battery.subscribed_to(LayerStateChanged));

        assert!(Domain::Output.subscribed_to(EndpointChanged));
        assert!(Domain::Output.subscribed_to(ProfileChanged));
        assert!(!Domain::Output.subscribed_to(BatteryStateChanged));

        assert!(Domain::Layer.subscribed_to(LayerStateChanged));
        assert!(!Domain::Layer.subscribed_to(ProfileChanged));

        #[cfg(feature = "vbus-detect")]
        {
            assert!(Domain::Battery.subscribed_to(PowerStateChanged));
            assert!(Domain::Output.subscribed_to(PowerStateChanged));
            assert!(!Domain::Layer.subscribed_to(PowerStateChanged));
        }
    }

    #[test]
    fn test_extract_tags_match_domain() {
        let sources = FakeSources::default();
        assert!(matches!(
            extract(Domain::Battery, &sources, None),
            StatusUpdate::Battery(_)
        ));
        assert!(matches!(
            extract(Domain::Output, &sources, None),
            StatusUpdate::Output(_)
        ));
        assert!(matches!(
            extract(Domain::Layer, &sources, None),
            StatusUpdate::Layer(_)
        ));
    }
}
