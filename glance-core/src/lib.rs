//! Board-agnostic core of the Glance status widget
//!
//! This crate contains the whole update pipeline between subsystem
//! notifications and a finished frame:
//!
//! - Status model and per-domain partial states
//! - Change notification types
//! - Domain provider query traits (battery, endpoints, keymap)
//! - Subscription matrix binding notification kinds to extractors
//! - Widget registry with broadcast merge-and-redraw
//! - Frame composer
//!
//! Everything runs synchronously on the caller's dispatch context; the
//! core never spawns tasks and never blocks. Pixel output goes through the
//! `Surface` trait from `glance-display`.

#![no_std]
#![deny(unsafe_code)]

pub mod compose;
pub mod events;
pub mod status;
pub mod subscription;
pub mod traits;
pub mod widget;

// Re-export key types
pub use events::{Notification, NotificationKind};
pub use status::{Endpoint, StatusState, StatusUpdate};
pub use widget::{StatusScreen, StatusWidget, WidgetHandle, MAX_WIDGETS};
