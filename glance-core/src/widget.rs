//! Widget instances, the live-widget registry, and update broadcast
//!
//! Every registered widget holds its own surface and model copy. One
//! notification updates all of them: each subscribed domain extracts once
//! and the result is merged into every live widget, followed by one full
//! redraw per widget. Redraws run to completion on the caller's dispatch
//! context, so two redraws of the same widget never interleave.

use glance_display::surface::Surface;

use crate::compose::draw_status;
use crate::events::Notification;
use crate::status::{StatusState, StatusUpdate};
use crate::subscription::{extract, Domain};
use crate::traits::{BatterySource, EndpointSource, KeymapSource};

/// Maximum number of concurrently registered widgets
pub const MAX_WIDGETS: usize = 4;

/// Handle to a registered widget slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetHandle(u8);

/// One live widget: its drawing surface and its own model copy
pub struct StatusWidget<S: Surface> {
    surface: S,
    state: StatusState,
}

impl<S: Surface> StatusWidget<S> {
    /// The widget's current model
    pub fn state(&self) -> &StatusState {
        &self.state
    }

    /// The widget's drawable
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// The status screen: provider handles plus the registry of live widgets
///
/// Slots are a fixed arena; a freed slot is reused by the next
/// registration. Registration and teardown happen between event
/// dispatches, never from inside one.
pub struct StatusScreen<S: Surface, P> {
    sources: P,
    slots: [Option<StatusWidget<S>>; MAX_WIDGETS],
}

impl<S, P> StatusScreen<S, P>
where
    S: Surface,
    P: BatterySource + EndpointSource + KeymapSource,
{
    /// Create a screen with no widgets registered
    pub fn new(sources: P) -> Self {
        Self {
            sources,
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Register a widget drawing to `surface`
    ///
    /// The widget's model is filled from direct provider queries and the
    /// first frame is drawn before the handle is returned, so the model
    /// is never visible in a partially initialized state. When every slot
    /// is taken the surface is handed back.
    pub fn add_widget(&mut self, surface: S) -> Result<WidgetHandle, S> {
        let Some(index) = self.slots.iter().position(|slot| slot.is_none()) else {
            return Err(surface);
        };

        let mut widget = StatusWidget {
            surface,
            state: StatusState::default(),
        };
        for domain in Domain::ALL {
            widget.state.apply(&extract(domain, &self.sources, None));
        }
        let _ = draw_status(&mut widget.surface, &widget.state);

        self.slots[index] = Some(widget);
        Ok(WidgetHandle(index as u8))
    }

    /// Remove a widget, returning its surface to the caller
    pub fn remove_widget(&mut self, handle: WidgetHandle) -> Option<S> {
        self.slots
            .get_mut(handle.0 as usize)?
            .take()
            .map(|widget| widget.surface)
    }

    /// Access a registered widget
    pub fn widget(&self, handle: WidgetHandle) -> Option<&StatusWidget<S>> {
        self.slots.get(handle.0 as usize)?.as_ref()
    }

    /// Number of live widgets
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The domain providers
    pub fn sources(&self) -> &P {
        &self.sources
    }

    pub fn sources_mut(&mut self) -> &mut P {
        &mut self.sources
    }

    /// Deliver one notification
    ///
    /// Runs every subscribed domain's extractor exactly once and
    /// broadcasts the result to all live widgets, in delivery order, with
    /// no coalescing.
    pub fn notify(&mut self, event: &Notification) {
        let kind = event.kind();
        for domain in Domain::ALL {
            if domain.subscribed_to(kind) {
                let update = extract(domain, &self.sources, Some(event));
                self.broadcast(&update);
            }
        }
    }

    /// Re-query every domain and redraw all widgets
    pub fn refresh(&mut self) {
        for domain in Domain::ALL {
            let update = extract(domain, &self.sources, None);
            self.broadcast(&update);
        }
    }

    fn broadcast(&mut self, update: &StatusUpdate) {
        for widget in self.slots.iter_mut().flatten() {
            widget.state.apply(update);
            // Fire and forget: a failed draw is the backend's concern and
            // is never reported back to the event producer.
            let _ = draw_status(&mut widget.surface, &widget.state);
        }
    }
}
