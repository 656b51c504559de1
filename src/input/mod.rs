//! Touch input and the virtual gamepad it drives

pub mod gamepad;
pub mod touch;

pub use touch::{ContactId, TouchEvent, TouchKind, MAX_TOUCH_CONTACTS};
