//! Virtual Gamepad
//!
//! On-screen buttons and analog joysticks driven by multi-touch input.
//!
//! The host forwards every touch event to [`GamepadController::dispatch`],
//! polls button and joystick state for game logic, and calls
//! [`GamepadController::render`] once per frame with its own
//! [`SpriteRenderer`].

pub mod atlas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod replay;

pub use atlas::TextureAtlas;
pub use config::GamepadLayout;
pub use error::LayoutError;
pub use geometry::{Rect, TexCoords, Vector2};
pub use input::gamepad::{ButtonState, ContactWatchdog, GamepadController, SharedGamepad};
pub use input::touch::{ContactId, TouchEvent, TouchKind, MAX_TOUCH_CONTACTS};
pub use render::{RecordingRenderer, SpriteRenderer, Tint};
