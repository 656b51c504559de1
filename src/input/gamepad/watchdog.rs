//! Stale contact detection
//!
//! The controller never lets go of a control on its own: a contact whose
//! release was lost (focus change mid-touch, dropped event) keeps its control
//! claimed forever. Hosts that can lose releases feed their events through a
//! [`ContactWatchdog`] and periodically hand the stale ids to
//! [`GamepadController::release_contacts`](super::GamepadController::release_contacts).
//! Only contacts that hold a control should be observed
//! ([`GamepadController::holds_contact`](super::GamepadController::holds_contact)).
//!
//! Time is passed in as an offset from any fixed origin, which keeps the
//! watchdog deterministic under replay.

use std::collections::BTreeMap;
use std::time::Duration;
use tracing::warn;

use crate::input::touch::{ContactId, TouchEvent, TouchKind};

#[derive(Debug, Clone)]
pub struct ContactWatchdog {
    stale_after: Duration,
    last_seen: BTreeMap<ContactId, Duration>,
}

impl ContactWatchdog {
    pub fn new(stale_after: Duration) -> Self {
        Self { stale_after, last_seen: BTreeMap::new() }
    }

    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }

    /// Record activity for the event's contact. Releases forget the contact.
    pub fn observe(&mut self, event: &TouchEvent, at: Duration) {
        match event.kind {
            TouchKind::Press | TouchKind::Move => {
                self.last_seen.insert(event.contact, at);
            }
            TouchKind::Release => {
                self.last_seen.remove(&event.contact);
            }
        }
    }

    /// Contacts currently being tracked
    pub fn tracked(&self) -> impl Iterator<Item = ContactId> + '_ {
        self.last_seen.keys().copied()
    }

    /// Remove and return every contact idle for longer than the threshold
    pub fn take_stale(&mut self, at: Duration) -> Vec<ContactId> {
        let stale_after = self.stale_after;
        let stale: Vec<ContactId> = self
            .last_seen
            .iter()
            .filter(|(_, seen)| at.saturating_sub(**seen) > stale_after)
            .map(|(id, _)| *id)
            .collect();

        for id in &stale {
            self.last_seen.remove(id);
            warn!("Contact {} idle for over {:?}, forcing release", id, stale_after);
        }

        stale
    }
}
