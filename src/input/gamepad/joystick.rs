//! Virtual analog joystick
//!
//! Made of an inner knob and an outer ring. The inner region's position is the
//! anchor: presses within `radius` of it (tested against the bounding square,
//! not the circle) claim the stick, and every subsequent move from the same
//! contact is measured relative to it.

use tracing::trace;

use super::normalize::{clamp_to_radius, joystick_direction};
use crate::geometry::{Rect, TexCoords, Vector2};
use crate::input::touch::ContactId;

/// One on-screen joystick
#[derive(Debug, Clone)]
pub struct VirtualJoystick {
    index: usize,
    region_inner: Rect,
    region_outer: Rect,
    radius: f32,
    inner_image: Option<TexCoords>,
    outer_image: Option<TexCoords>,
    displacement: Vector2,
    direction: Vector2,
    owner: Option<ContactId>,
    configured: bool,
}

impl VirtualJoystick {
    /// Create an unconfigured, idle joystick
    pub fn new(index: usize) -> Self {
        Self {
            index,
            region_inner: Rect::ZERO,
            region_outer: Rect::ZERO,
            radius: 0.0,
            inner_image: None,
            outer_image: None,
            displacement: Vector2::ZERO,
            direction: Vector2::ZERO,
            owner: None,
            configured: false,
        }
    }

    /// Set both regions, optional artwork and the travel radius.
    ///
    /// # Panics
    /// If `radius` is not a positive finite number.
    pub fn configure(
        &mut self,
        region_inner: Rect,
        inner_image: Option<TexCoords>,
        region_outer: Rect,
        outer_image: Option<TexCoords>,
        radius: f32,
    ) {
        assert!(
            radius.is_finite() && radius > 0.0,
            "joystick {} radius must be positive, got {}",
            self.index,
            radius
        );

        self.region_inner = region_inner;
        self.region_outer = region_outer;
        self.radius = radius;
        if inner_image.is_some() {
            self.inner_image = inner_image;
        }
        if outer_image.is_some() {
            self.outer_image = outer_image;
        }
        self.configured = true;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn region_inner(&self) -> Rect {
        self.region_inner
    }

    pub fn region_outer(&self) -> Rect {
        self.region_outer
    }

    pub fn owner(&self) -> Option<ContactId> {
        self.owner
    }

    pub fn is_active(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Raw pixel offset of the owning contact from the anchor
    pub fn displacement(&self) -> Vector2 {
        self.displacement
    }

    /// Bounded analog output, y positive up, `|direction| <= 1`
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    fn anchor(&self) -> Vector2 {
        Vector2::new(self.region_inner.x, self.region_inner.y)
    }

    /// Square of half-width `radius` around the anchor
    pub fn activation_test(&self, x: f32, y: f32) -> bool {
        let a = self.anchor();
        x >= a.x - self.radius && x <= a.x + self.radius && y >= a.y - self.radius && y <= a.y + self.radius
    }

    /// Claim the stick if it is free and the point lies in the activation zone.
    ///
    /// The press point itself does not move the stick; that takes a move.
    pub fn on_press(&mut self, x: f32, y: f32, contact: ContactId) -> bool {
        if self.owner.is_some() || !self.activation_test(x, y) {
            return false;
        }

        self.owner = Some(contact);
        self.displacement = Vector2::ZERO;
        self.direction = Vector2::ZERO;
        trace!("Joystick {} grabbed by contact {}", self.index, contact);
        true
    }

    /// Track the owner's finger. Other contacts are ignored.
    pub fn on_move(&mut self, x: f32, y: f32, contact: ContactId) -> bool {
        if self.owner != Some(contact) {
            return false;
        }

        let anchor = self.anchor();
        let dx = x - anchor.x;
        let dy = y - anchor.y;

        self.displacement = Vector2::new(dx, dy);
        self.direction = joystick_direction(dx, dy, self.radius);
        true
    }

    /// Let go if `contact` is the owner, recentering the stick
    pub fn on_release(&mut self, contact: ContactId) -> bool {
        if self.owner != Some(contact) {
            return false;
        }

        self.owner = None;
        self.displacement = Vector2::ZERO;
        self.direction = Vector2::ZERO;
        trace!("Joystick {} released by contact {}", self.index, contact);
        true
    }

    /// Where to draw the outer ring, if it has artwork
    pub fn outer_sprite(&self) -> Option<(Rect, TexCoords)> {
        let image = self.outer_image?;
        let r = self.region_outer;
        Some((r.centered_on(r.x, r.y), image))
    }

    /// Where to draw the knob, if it has artwork: the anchor offset by the
    /// displacement clamped to the travel circle
    pub fn inner_sprite(&self) -> Option<(Rect, TexCoords)> {
        let image = self.inner_image?;
        let offset = clamp_to_radius(self.displacement.x, self.displacement.y, self.radius);
        let center = self.anchor() + offset;
        Some((self.region_inner.centered_on(center.x, center.y), image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn stick() -> VirtualJoystick {
        let mut j = VirtualJoystick::new(0);
        j.configure(
            Rect::new(100.0, 100.0, 16.0, 16.0),
            Some(TexCoords::new(0.0, 1.0, 0.25, 0.75)),
            Rect::new(100.0, 100.0, 48.0, 48.0),
            Some(TexCoords::new(0.25, 1.0, 0.75, 0.5)),
            20.0,
        );
        j
    }

    #[test]
    fn test_press_move_release_cycle() {
        let mut j = stick();
        let c = ContactId(2);

        assert!(j.on_press(105.0, 105.0, c));
        assert!(j.is_active());
        assert_eq!(j.displacement(), Vector2::ZERO);
        assert_eq!(j.direction(), Vector2::ZERO);

        assert!(j.on_move(110.0, 100.0, c));
        assert_eq!(j.displacement(), Vector2::new(10.0, 0.0));
        assert!(close(j.direction().x, 0.5));
        assert!(close(j.direction().y, 0.0));

        assert!(j.on_move(140.0, 100.0, c));
        assert_eq!(j.displacement(), Vector2::new(40.0, 0.0));
        assert!(close(j.direction().x, 1.0));

        assert!(j.on_release(c));
        assert!(!j.is_active());
        assert_eq!(j.displacement(), Vector2::ZERO);
        assert_eq!(j.direction(), Vector2::ZERO);
    }

    #[test]
    fn test_activation_square_corners() {
        let j = stick();
        // Corner of the bounding square is outside the circle but still counts
        assert!(j.activation_test(120.0, 120.0));
        assert!(j.activation_test(80.0, 80.0));
        assert!(!j.activation_test(120.5, 100.0));
    }

    #[test]
    fn test_move_from_stranger_ignored() {
        let mut j = stick();
        j.on_press(100.0, 100.0, ContactId(0));
        assert!(!j.on_move(140.0, 100.0, ContactId(1)));
        assert_eq!(j.direction(), Vector2::ZERO);
    }

    #[test]
    fn test_move_without_press_ignored() {
        let mut j = stick();
        assert!(!j.on_move(110.0, 100.0, ContactId(0)));
        assert!(!j.is_active());
    }

    #[test]
    fn test_second_press_does_not_reset() {
        let mut j = stick();
        j.on_press(100.0, 100.0, ContactId(0));
        j.on_move(110.0, 100.0, ContactId(0));
        assert!(!j.on_press(100.0, 100.0, ContactId(1)));
        assert_eq!(j.displacement(), Vector2::new(10.0, 0.0));
        assert_eq!(j.owner(), Some(ContactId(0)));
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_zero_radius_panics() {
        let mut j = VirtualJoystick::new(3);
        j.configure(Rect::ZERO, None, Rect::ZERO, None, 0.0);
    }

    #[test]
    fn test_sprites_are_center_anchored() {
        let mut j = stick();
        let (outer, _) = j.outer_sprite().unwrap();
        assert_eq!(outer, Rect::new(76.0, 76.0, 48.0, 48.0));

        let (inner, _) = j.inner_sprite().unwrap();
        assert_eq!(inner, Rect::new(92.0, 92.0, 16.0, 16.0));

        // Knob follows the finger, but stops at the rim
        j.on_press(100.0, 100.0, ContactId(0));
        j.on_move(110.0, 100.0, ContactId(0));
        let (inner, _) = j.inner_sprite().unwrap();
        assert_eq!(inner, Rect::new(102.0, 92.0, 16.0, 16.0));

        j.on_move(100.0, 300.0, ContactId(0));
        let (inner, _) = j.inner_sprite().unwrap();
        assert!(close(inner.x, 92.0));
        assert!(close(inner.y, 112.0));
    }

    #[test]
    fn test_no_artwork_no_sprites() {
        let mut j = VirtualJoystick::new(0);
        j.configure(Rect::ZERO, None, Rect::ZERO, None, 10.0);
        assert!(j.outer_sprite().is_none());
        assert!(j.inner_sprite().is_none());
    }
}
