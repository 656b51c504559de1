//! Virtual push button
//!
//! A rectangle that a single contact can hold down. While one contact owns
//! the button, presses from any other contact are ignored; only a release
//! from the owner lets go.

use tracing::trace;

use crate::geometry::{Rect, TexCoords};
use crate::input::touch::ContactId;

/// Discrete button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl ButtonState {
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

/// One on-screen button
#[derive(Debug, Clone)]
pub struct VirtualButton {
    index: usize,
    region: Rect,
    state: ButtonState,
    owner: Option<ContactId>,
    default_image: Option<TexCoords>,
    focus_image: Option<TexCoords>,
    configured: bool,
}

impl VirtualButton {
    /// Create an unconfigured, released button
    pub fn new(index: usize) -> Self {
        Self {
            index,
            region: Rect::ZERO,
            state: ButtonState::Released,
            owner: None,
            default_image: None,
            focus_image: None,
            configured: false,
        }
    }

    /// Set the hit region and optional artwork.
    ///
    /// `None` for an image leaves a previously configured image untouched.
    pub fn configure(&mut self, region: Rect, default_image: Option<TexCoords>, focus_image: Option<TexCoords>) {
        self.region = region;
        if default_image.is_some() {
            self.default_image = default_image;
        }
        if focus_image.is_some() {
            self.focus_image = focus_image;
        }
        self.configured = true;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn owner(&self) -> Option<ContactId> {
        self.owner
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.region.contains(x, y)
    }

    /// Claim the button for `contact` if it is free and the point hits.
    ///
    /// Returns whether the press was taken.
    pub fn on_press(&mut self, x: f32, y: f32, contact: ContactId) -> bool {
        if self.owner.is_some() || !self.contains_point(x, y) {
            return false;
        }

        self.owner = Some(contact);
        self.state = ButtonState::Pressed;
        trace!("Button {} pressed by contact {}", self.index, contact);
        true
    }

    /// Let go if `contact` is the owner. Returns whether anything changed.
    pub fn on_release(&mut self, contact: ContactId) -> bool {
        if self.owner != Some(contact) {
            return false;
        }

        self.force_release();
        trace!("Button {} released by contact {}", self.index, contact);
        true
    }

    /// Unconditional release, regardless of owner
    pub fn force_release(&mut self) {
        self.owner = None;
        self.state = ButtonState::Released;
    }

    /// Artwork to draw this frame: focus while pressed (if any), else default
    pub fn current_image(&self) -> Option<TexCoords> {
        match (self.state, self.focus_image) {
            (ButtonState::Pressed, Some(focus)) => Some(focus),
            _ => self.default_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> VirtualButton {
        let mut b = VirtualButton::new(0);
        b.configure(Rect::new(0.0, 0.0, 50.0, 50.0), None, None);
        b
    }

    #[test]
    fn test_press_inside_claims() {
        let mut b = button();
        assert!(b.on_press(10.0, 10.0, ContactId(0)));
        assert_eq!(b.state(), ButtonState::Pressed);
        assert_eq!(b.owner(), Some(ContactId(0)));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut b = button();
        assert!(!b.on_press(60.0, 10.0, ContactId(0)));
        assert_eq!(b.state(), ButtonState::Released);
        assert_eq!(b.owner(), None);
    }

    #[test]
    fn test_press_on_far_edge_registers() {
        let mut b = button();
        assert!(b.on_press(50.0, 50.0, ContactId(3)));
    }

    #[test]
    fn test_second_contact_cannot_steal() {
        let mut b = button();
        b.on_press(10.0, 10.0, ContactId(0));
        assert!(!b.on_press(20.0, 20.0, ContactId(1)));
        assert_eq!(b.owner(), Some(ContactId(0)));

        // Release from the intruder does nothing either
        assert!(!b.on_release(ContactId(1)));
        assert_eq!(b.state(), ButtonState::Pressed);

        assert!(b.on_release(ContactId(0)));
        assert_eq!(b.state(), ButtonState::Released);
        assert_eq!(b.owner(), None);
    }

    #[test]
    fn test_release_when_free_is_noop() {
        let mut b = button();
        assert!(!b.on_release(ContactId(0)));
        assert_eq!(b.state(), ButtonState::Released);
    }

    #[test]
    fn test_image_selection() {
        let default = TexCoords::new(0.0, 1.0, 0.5, 0.5);
        let focus = TexCoords::new(0.5, 1.0, 1.0, 0.5);

        let mut b = VirtualButton::new(0);
        b.configure(Rect::new(0.0, 0.0, 10.0, 10.0), Some(default), None);
        b.on_press(1.0, 1.0, ContactId(0));
        // No focus image: pressed falls back to default
        assert_eq!(b.current_image(), Some(default));

        b.configure(Rect::new(0.0, 0.0, 10.0, 10.0), None, Some(focus));
        assert_eq!(b.current_image(), Some(focus));

        b.on_release(ContactId(0));
        assert_eq!(b.current_image(), Some(default));
    }

    #[test]
    fn test_no_images_draws_nothing() {
        let mut b = button();
        assert_eq!(b.current_image(), None);
        b.on_press(1.0, 1.0, ContactId(0));
        assert_eq!(b.current_image(), None);
    }
}
