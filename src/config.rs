//! Gamepad layout configuration
//!
//! Handles loading, validating and saving YAML layout files, and building a
//! ready-to-use controller from them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::atlas::TextureAtlas;
use crate::error::LayoutError;
use crate::geometry::{Rect, TexCoords};
use crate::input::gamepad::{ContactWatchdog, GamepadController};
use crate::input::touch::MAX_TOUCH_CONTACTS;

/// Root layout document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GamepadLayout {
    pub atlas: TextureAtlas,
    #[serde(default = "default_max_contacts")]
    pub max_contacts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchdog: Option<WatchdogConfig>,
    #[serde(default)]
    pub buttons: Vec<ButtonConfig>,
    #[serde(default)]
    pub joysticks: Vec<JoystickConfig>,
}

/// Button placement; images name atlas regions
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ButtonConfig {
    pub name: String,
    pub region: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

/// Joystick placement; `inner.x/y` is the anchor, `outer.x/y` the ring center
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JoystickConfig {
    pub name: String,
    pub inner: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_image: Option<String>,
    pub outer: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_image: Option<String>,
    pub radius: f32,
}

/// Stale contact watchdog settings
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct WatchdogConfig {
    #[serde(default = "default_stale_after_ms")]
    pub stale_after_ms: u64,
}

impl WatchdogConfig {
    pub fn build(&self) -> ContactWatchdog {
        ContactWatchdog::new(Duration::from_millis(self.stale_after_ms))
    }
}

impl GamepadLayout {
    /// Load and validate a layout file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|source| LayoutError::Io { path: path.to_path_buf(), source })?;

        let layout = Self::from_yaml_str(&contents)?;
        info!(
            "Loaded layout {} ({} buttons, {} joysticks)",
            path.display(),
            layout.buttons.len(),
            layout.joysticks.len()
        );
        Ok(layout)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, LayoutError> {
        let layout: GamepadLayout = serde_yaml::from_str(contents)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Save layout to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|source| LayoutError::Io { path: path.to_path_buf(), source })
    }

    /// Validate layout content
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.atlas.check_size()?;

        if self.max_contacts == 0 {
            return Err(LayoutError::NoContacts);
        }

        let mut names = HashSet::new();
        for (idx, button) in self.buttons.iter().enumerate() {
            if button.name.trim().is_empty() {
                return Err(LayoutError::EmptyName { kind: "button", index: idx });
            }
            if !names.insert(button.name.as_str()) {
                return Err(LayoutError::DuplicateName { kind: "button", name: button.name.clone() });
            }
            self.check_image(button.default.as_deref())?;
            self.check_image(button.focus.as_deref())?;
        }

        let mut names = HashSet::new();
        for (idx, joystick) in self.joysticks.iter().enumerate() {
            if joystick.name.trim().is_empty() {
                return Err(LayoutError::EmptyName { kind: "joystick", index: idx });
            }
            if !names.insert(joystick.name.as_str()) {
                return Err(LayoutError::DuplicateName { kind: "joystick", name: joystick.name.clone() });
            }
            if !(joystick.radius.is_finite() && joystick.radius > 0.0) {
                return Err(LayoutError::InvalidRadius {
                    name: joystick.name.clone(),
                    radius: joystick.radius,
                });
            }
            self.check_image(joystick.inner_image.as_deref())?;
            self.check_image(joystick.outer_image.as_deref())?;
        }

        Ok(())
    }

    fn check_image(&self, name: Option<&str>) -> Result<(), LayoutError> {
        match name {
            Some(name) if !self.atlas.has_region(name) => Err(LayoutError::UnknownRegion(name.to_string())),
            _ => Ok(()),
        }
    }

    fn image_uvs(&self, name: Option<&str>) -> Result<Option<TexCoords>, LayoutError> {
        name.map(|n| self.atlas.region_uvs(n)).transpose()
    }

    /// Build a fully configured controller. Control order follows the file,
    /// which is also the order presses are offered in.
    pub fn build(&self) -> Result<GamepadController, LayoutError> {
        self.validate()?;

        let mut pad = GamepadController::new(self.buttons.len(), self.joysticks.len())
            .with_contact_limit(self.max_contacts);

        for (idx, b) in self.buttons.iter().enumerate() {
            let default = self.image_uvs(b.default.as_deref())?;
            let focus = self.image_uvs(b.focus.as_deref())?;
            pad.configure_button(idx, b.region, default, focus);
        }

        for (idx, j) in self.joysticks.iter().enumerate() {
            let inner = self.image_uvs(j.inner_image.as_deref())?;
            let outer = self.image_uvs(j.outer_image.as_deref())?;
            pad.configure_joystick(idx, j.inner, inner, j.outer, outer, j.radius);
        }

        info!("Gamepad ready: {} buttons, {} joysticks", pad.button_count(), pad.joystick_count());
        Ok(pad)
    }

    pub fn index_of_button(&self, name: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.name == name)
    }

    pub fn index_of_joystick(&self, name: &str) -> Option<usize> {
        self.joysticks.iter().position(|j| j.name == name)
    }
}

// Default value functions
fn default_max_contacts() -> u32 { MAX_TOUCH_CONTACTS }
fn default_stale_after_ms() -> u64 { 3000 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::gamepad::ButtonState;
    use crate::input::touch::TouchKind;
    use tempfile::TempDir;

    const LAYOUT: &str = r#"
atlas:
  width: 256
  height: 256
  regions:
    a_up: { x: 0, y: 0, width: 64, height: 64 }
    a_down: { x: 64, y: 0, width: 64, height: 64 }
    ring: { x: 0, y: 128, width: 128, height: 128 }
    knob: { x: 128, y: 128, width: 64, height: 64 }
watchdog:
  stale_after_ms: 1500
buttons:
  - name: a
    region: { x: 600, y: 300, width: 64, height: 64 }
    default: a_up
    focus: a_down
  - name: b
    region: { x: 680, y: 300, width: 64, height: 64 }
joysticks:
  - name: move
    inner: { x: 120, y: 320, width: 48, height: 48 }
    inner_image: knob
    outer: { x: 120, y: 320, width: 128, height: 128 }
    outer_image: ring
    radius: 40
"#;

    #[test]
    fn test_parse_and_build() {
        let layout = GamepadLayout::from_yaml_str(LAYOUT).unwrap();
        assert_eq!(layout.max_contacts, MAX_TOUCH_CONTACTS);
        assert_eq!(layout.watchdog.unwrap().stale_after_ms, 1500);
        assert_eq!(layout.index_of_button("b"), Some(1));
        assert_eq!(layout.index_of_joystick("move"), Some(0));
        assert_eq!(layout.index_of_button("move"), None);

        let mut pad = layout.build().unwrap();
        assert_eq!(pad.button_count(), 2);
        assert_eq!(pad.joystick_count(), 1);

        pad.dispatch(610, 310, TouchKind::Press, 0);
        assert_eq!(pad.button_state(0), ButtonState::Pressed);

        pad.dispatch(120, 320, TouchKind::Press, 1);
        pad.dispatch(160, 320, TouchKind::Move, 1);
        assert!((pad.joystick_direction(0).x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_unknown_region_rejected() {
        let yaml = LAYOUT.replace("focus: a_down", "focus: a_pressed");
        let err = GamepadLayout::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, LayoutError::UnknownRegion(name) if name == "a_pressed"));
    }

    #[test]
    fn test_bad_radius_rejected() {
        let yaml = LAYOUT.replace("radius: 40", "radius: 0");
        let err = GamepadLayout::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidRadius { .. }));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let yaml = LAYOUT.replace("name: b", "name: a");
        let err = GamepadLayout::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateName { kind: "button", .. }));
    }

    #[test]
    fn test_unloaded_texture_rejected() {
        let yaml = LAYOUT.replace("width: 256", "width: 0");
        let err = GamepadLayout::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidAtlas { .. }));
    }

    #[test]
    fn test_zero_contacts_rejected() {
        let yaml = format!("max_contacts: 0\n{}", LAYOUT);
        let err = GamepadLayout::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, LayoutError::NoContacts));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("layout.yaml");

        let layout = GamepadLayout::from_yaml_str(LAYOUT).unwrap();
        layout.save(&path).unwrap();

        let reloaded = GamepadLayout::load(&path).unwrap();
        assert_eq!(reloaded.buttons.len(), 2);
        assert_eq!(reloaded.atlas, layout.atlas);
        assert_eq!(reloaded.joysticks[0].radius, 40.0);
    }

    #[test]
    fn test_missing_file() {
        let err = GamepadLayout::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, LayoutError::Io { .. }));
    }
}
