//! Scripted touch replay
//!
//! Reads a CSV touch script and plays it through a controller frame by frame,
//! rendering after each frame and reporting what game code would observe.
//!
//! Script format (header required):
//!
//! ```text
//! frame,time_ms,x,y,kind,contact
//! 0,0,120,320,press,0
//! 1,16,140,320,move,0
//! 2,33,140,320,release,0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::config::GamepadLayout;
use crate::error::LayoutError;
use crate::geometry::Vector2;
use crate::input::gamepad::{ContactWatchdog, GamepadController};
use crate::input::touch::{ContactId, TouchEvent, TouchKind};
use crate::render::{RecordingRenderer, SpriteDraw, Tint};

/// One row of a touch script
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScriptRow {
    pub frame: u64,
    #[serde(default)]
    pub time_ms: u64,
    pub x: i32,
    pub y: i32,
    pub kind: String,
    pub contact: u32,
}

/// A parsed, frame-ordered touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedTouch {
    pub frame: u64,
    pub at: Duration,
    pub event: TouchEvent,
}

/// Ordered list of scripted touches
#[derive(Debug, Clone, Default)]
pub struct TouchScript {
    touches: Vec<ScriptedTouch>,
}

impl TouchScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path)?;
        let script = Self::from_reader(reader)?;
        debug!("Loaded {} scripted touches from {}", script.len(), path.display());
        Ok(script)
    }

    pub fn from_csv_str(contents: &str) -> Result<Self, LayoutError> {
        Self::from_reader(csv::Reader::from_reader(contents.as_bytes()))
    }

    fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self, LayoutError> {
        let mut touches = Vec::new();
        let mut last_frame = 0;

        for (idx, row) in reader.deserialize::<ScriptRow>().enumerate() {
            // Row 1 is the header
            let line = idx + 2;
            let row = row?;

            let kind: TouchKind = row
                .kind
                .parse()
                .map_err(|message| LayoutError::Script { row: line, message })?;

            if row.frame < last_frame {
                return Err(LayoutError::Script {
                    row: line,
                    message: format!("frame {} goes backwards (after {})", row.frame, last_frame),
                });
            }
            last_frame = row.frame;

            touches.push(ScriptedTouch {
                frame: row.frame,
                at: Duration::from_millis(row.time_ms),
                event: TouchEvent::new(row.x, row.y, kind, row.contact),
            });
        }

        Ok(Self { touches })
    }

    pub fn touches(&self) -> &[ScriptedTouch] {
        &self.touches
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }
}

/// Button state as seen at the end of a frame
#[derive(Debug, Clone, Serialize)]
pub struct ButtonReport {
    pub name: String,
    pub pressed: bool,
    pub contact: Option<ContactId>,
}

/// Joystick state as seen at the end of a frame
#[derive(Debug, Clone, Serialize)]
pub struct JoystickReport {
    pub name: String,
    pub active: bool,
    pub direction: Vector2,
    pub displacement: Vector2,
}

/// Everything observable after one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub buttons: Vec<ButtonReport>,
    pub joysticks: Vec<JoystickReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub released_stale: Vec<ContactId>,
    pub draws: Vec<SpriteDraw>,
}

/// Play `script` through `pad`, one report per frame that has events.
///
/// With a watchdog, stale contacts are force-released at the end of each frame
/// before rendering. Only contacts holding a control are watched.
///
/// # Panics
/// If `pad` was not built from `layout`.
pub fn replay(
    layout: &GamepadLayout,
    pad: &mut GamepadController,
    script: &TouchScript,
    mut watchdog: Option<&mut ContactWatchdog>,
) -> Vec<FrameReport> {
    assert_eq!(
        (pad.button_count(), pad.joystick_count()),
        (layout.buttons.len(), layout.joysticks.len()),
        "controller (buttons, joysticks) does not match layout"
    );

    let mut reports = Vec::new();
    let mut renderer = RecordingRenderer::new();
    let touches = script.touches();
    let mut start = 0;

    while start < touches.len() {
        let frame = touches[start].frame;
        let end = touches[start..]
            .iter()
            .position(|t| t.frame != frame)
            .map_or(touches.len(), |offset| start + offset);

        let mut frame_time = Duration::ZERO;
        for touch in &touches[start..end] {
            pad.dispatch_event(&touch.event);
            if let Some(dog) = watchdog.as_deref_mut() {
                let event = &touch.event;
                if event.kind == TouchKind::Release || pad.holds_contact(event.contact) {
                    dog.observe(event, touch.at);
                }
            }
            frame_time = frame_time.max(touch.at);
        }

        let released_stale = match watchdog.as_deref_mut() {
            Some(dog) => {
                let stale = dog.take_stale(frame_time);
                pad.release_contacts(stale.iter().copied());
                stale
            }
            None => Vec::new(),
        };

        pad.render(&mut renderer, Tint::WHITE);
        let draws = renderer.take_batches().pop().unwrap_or_default();

        reports.push(FrameReport {
            frame,
            buttons: layout
                .buttons
                .iter()
                .enumerate()
                .map(|(idx, b)| ButtonReport {
                    name: b.name.clone(),
                    pressed: pad.button_state(idx).is_pressed(),
                    contact: pad.button_owner(idx),
                })
                .collect(),
            joysticks: layout
                .joysticks
                .iter()
                .enumerate()
                .map(|(idx, j)| JoystickReport {
                    name: j.name.clone(),
                    active: pad.is_joystick_active(idx),
                    direction: pad.joystick_direction(idx),
                    displacement: pad.joystick_displacement(idx),
                })
                .collect(),
            released_stale,
            draws,
        });

        start = end;
    }

    reports
}
