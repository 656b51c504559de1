//! Touch event types fed into the gamepad
//!
//! A contact is one finger (or pointer) tracked from press to release under a
//! small integer id. Hosts forward every raw event; the gamepad decides which
//! ones matter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of concurrently tracked contacts.
///
/// Events carrying an id at or above this limit are dropped by the controller.
pub const MAX_TOUCH_CONTACTS: u32 = 10;

/// Phase of a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchKind {
    Press,
    Move,
    Release,
}

impl FromStr for TouchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "press" | "down" => Ok(TouchKind::Press),
            "move" => Ok(TouchKind::Move),
            "release" | "up" => Ok(TouchKind::Release),
            other => Err(format!("unknown touch kind: {}", other)),
        }
    }
}

impl fmt::Display for TouchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TouchKind::Press => "press",
            TouchKind::Move => "move",
            TouchKind::Release => "release",
        };
        f.write_str(name)
    }
}

/// Identifier of a tracked touch contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u32);

impl ContactId {
    pub fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for ContactId {
    fn from(id: u32) -> Self {
        ContactId(id)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One raw touch event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub x: i32,
    pub y: i32,
    pub kind: TouchKind,
    pub contact: ContactId,
}

impl TouchEvent {
    pub fn new(x: i32, y: i32, kind: TouchKind, contact: u32) -> Self {
        Self { x, y, kind, contact: ContactId(contact) }
    }

    pub fn press(x: i32, y: i32, contact: u32) -> Self {
        Self::new(x, y, TouchKind::Press, contact)
    }

    pub fn moved(x: i32, y: i32, contact: u32) -> Self {
        Self::new(x, y, TouchKind::Move, contact)
    }

    /// Controls ignore the position of a release
    pub fn release(x: i32, y: i32, contact: u32) -> Self {
        Self::new(x, y, TouchKind::Release, contact)
    }
}
