//! Virtual gamepad controls
//!
//! Buttons and joysticks hit-tested against touch input, plus the controller
//! that routes events to them and draws them.

pub mod button;
pub mod controller;
pub mod joystick;
pub mod normalize;
pub mod shared;
pub mod watchdog;

pub use button::{ButtonState, VirtualButton};
pub use controller::GamepadController;
pub use joystick::VirtualJoystick;
pub use shared::SharedGamepad;
pub use watchdog::ContactWatchdog;
