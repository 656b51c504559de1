//! Gamepad controller - routes touch events to buttons and joysticks
//!
//! Owns a fixed set of controls allocated up front. Every event is offered to
//! the controls in a fixed priority order: buttons first, then joysticks, each
//! by ascending index. A press is taken by the first free control it hits and
//! by nothing else, so overlapping regions resolve toward the earlier control.
//!
//! The controller is single-threaded and never blocks; hosts that share it
//! across threads wrap it (see [`super::shared::SharedGamepad`]).

use tracing::{debug, trace};

use super::button::{ButtonState, VirtualButton};
use super::joystick::VirtualJoystick;
use crate::geometry::{Rect, TexCoords, Vector2};
use crate::input::touch::{ContactId, TouchEvent, TouchKind, MAX_TOUCH_CONTACTS};
use crate::render::{SpriteRenderer, Tint};

/// Virtual gamepad: buttons and joysticks driven by touch
#[derive(Debug, Clone)]
pub struct GamepadController {
    buttons: Vec<VirtualButton>,
    joysticks: Vec<VirtualJoystick>,
    contact_limit: u32,
}

impl GamepadController {
    /// Allocate `button_count` buttons and `joystick_count` joysticks.
    ///
    /// Every control must be configured before the first dispatch or render.
    pub fn new(button_count: usize, joystick_count: usize) -> Self {
        debug!("Allocating gamepad with {} buttons, {} joysticks", button_count, joystick_count);
        Self {
            buttons: (0..button_count).map(VirtualButton::new).collect(),
            joysticks: (0..joystick_count).map(VirtualJoystick::new).collect(),
            contact_limit: MAX_TOUCH_CONTACTS,
        }
    }

    /// Override how many concurrent contacts are tracked (ids `0..limit`)
    ///
    /// # Panics
    /// If `limit` is zero.
    pub fn with_contact_limit(mut self, limit: u32) -> Self {
        assert!(limit > 0, "contact limit must be at least 1");
        self.contact_limit = limit;
        self
    }

    pub fn contact_limit(&self) -> u32 {
        self.contact_limit
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn joystick_count(&self) -> usize {
        self.joysticks.len()
    }

    pub fn buttons(&self) -> &[VirtualButton] {
        &self.buttons
    }

    pub fn joysticks(&self) -> &[VirtualJoystick] {
        &self.joysticks
    }

    /// Set a button's hit region and artwork.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn configure_button(
        &mut self,
        index: usize,
        region: Rect,
        default_image: Option<TexCoords>,
        focus_image: Option<TexCoords>,
    ) {
        let count = self.buttons.len();
        let button = self
            .buttons
            .get_mut(index)
            .unwrap_or_else(|| panic!("button index {} out of range (have {})", index, count));
        button.configure(region, default_image, focus_image);
        debug!("Configured button {} at {:?}", index, region);
    }

    /// Set a joystick's regions, artwork and travel radius.
    ///
    /// # Panics
    /// If `index` is out of range or `radius` is not positive.
    pub fn configure_joystick(
        &mut self,
        index: usize,
        region_inner: Rect,
        inner_image: Option<TexCoords>,
        region_outer: Rect,
        outer_image: Option<TexCoords>,
        radius: f32,
    ) {
        let count = self.joysticks.len();
        let joystick = self
            .joysticks
            .get_mut(index)
            .unwrap_or_else(|| panic!("joystick index {} out of range (have {})", index, count));
        joystick.configure(region_inner, inner_image, region_outer, outer_image, radius);
        debug!("Configured joystick {} at {:?} (radius {})", index, region_inner, radius);
    }

    /// Feed one raw touch event.
    ///
    /// Events whose contact id is at or above the contact limit, or that hit
    /// nothing, are dropped without a trace.
    ///
    /// # Panics
    /// If any control has not been configured yet.
    pub fn dispatch(&mut self, x: i32, y: i32, kind: TouchKind, contact: u32) {
        if contact >= self.contact_limit {
            return;
        }
        let contact = ContactId(contact);
        self.assert_configured();

        let (fx, fy) = (x as f32, y as f32);

        match kind {
            TouchKind::Press => {
                // `any` stops at the first control that takes the press
                let taken = self.buttons.iter_mut().any(|b| b.on_press(fx, fy, contact));
                if !taken {
                    self.joysticks.iter_mut().any(|j| j.on_press(fx, fy, contact));
                }
            }
            TouchKind::Move => {
                for joystick in &mut self.joysticks {
                    joystick.on_move(fx, fy, contact);
                }
            }
            TouchKind::Release => {
                for button in &mut self.buttons {
                    button.on_release(contact);
                }
                for joystick in &mut self.joysticks {
                    joystick.on_release(contact);
                }
            }
        }
    }

    pub fn dispatch_event(&mut self, event: &TouchEvent) {
        self.dispatch(event.x, event.y, event.kind, event.contact.index());
    }

    /// Synthesize a release for each contact, as if the host had sent it
    pub fn release_contacts(&mut self, contacts: impl IntoIterator<Item = ContactId>) {
        for contact in contacts {
            self.dispatch(0, 0, TouchKind::Release, contact.index());
        }
    }

    /// Drop every button back to released. Joysticks are left alone.
    pub fn release_all_buttons(&mut self) {
        for button in &mut self.buttons {
            if button.owner().is_some() {
                trace!("Force-releasing button {}", button.index());
            }
            button.force_release();
        }
    }

    pub fn button_state(&self, index: usize) -> ButtonState {
        self.button(index).state()
    }

    pub fn button_owner(&self, index: usize) -> Option<ContactId> {
        self.button(index).owner()
    }

    pub fn joystick_direction(&self, index: usize) -> Vector2 {
        self.joystick(index).direction()
    }

    pub fn joystick_displacement(&self, index: usize) -> Vector2 {
        self.joystick(index).displacement()
    }

    pub fn is_joystick_active(&self, index: usize) -> bool {
        self.joystick(index).is_active()
    }

    pub fn joystick_owner(&self, index: usize) -> Option<ContactId> {
        self.joystick(index).owner()
    }

    /// Whether `contact` currently owns any button or joystick
    pub fn holds_contact(&self, contact: ContactId) -> bool {
        self.buttons.iter().any(|b| b.owner() == Some(contact))
            || self.joysticks.iter().any(|j| j.owner() == Some(contact))
    }

    /// Issue one sprite batch for the whole pad.
    ///
    /// Buttons draw their focus image while pressed (when they have one),
    /// their default image otherwise. Joysticks draw the ring, then the knob
    /// offset by the current displacement.
    ///
    /// # Panics
    /// If any control has not been configured yet.
    pub fn render<R: SpriteRenderer + ?Sized>(&self, renderer: &mut R, tint: Tint) {
        self.assert_configured();

        renderer.begin_batch();

        for button in &self.buttons {
            if let Some(uvs) = button.current_image() {
                renderer.draw_sprite(button.region(), uvs, tint);
            }
        }

        for joystick in &self.joysticks {
            if let Some((dest, uvs)) = joystick.outer_sprite() {
                renderer.draw_sprite(dest, uvs, tint);
            }
            if let Some((dest, uvs)) = joystick.inner_sprite() {
                renderer.draw_sprite(dest, uvs, tint);
            }
        }

        renderer.end_batch();
    }

    fn button(&self, index: usize) -> &VirtualButton {
        self.buttons
            .get(index)
            .unwrap_or_else(|| panic!("button index {} out of range (have {})", index, self.buttons.len()))
    }

    fn joystick(&self, index: usize) -> &VirtualJoystick {
        self.joysticks
            .get(index)
            .unwrap_or_else(|| panic!("joystick index {} out of range (have {})", index, self.joysticks.len()))
    }

    fn assert_configured(&self) {
        if let Some(b) = self.buttons.iter().find(|b| !b.is_configured()) {
            panic!("button {} used before configure", b.index());
        }
        if let Some(j) = self.joysticks.iter().find(|j| !j.is_configured()) {
            panic!("joystick {} used before configure", j.index());
        }
    }
}
