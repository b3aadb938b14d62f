//! Virtual thumb stick: pointer gestures in, unit-disk vectors out.

/// Host-assigned identity of a mouse or touch contact.
pub type PointerId = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickVector {
    pub x: f32,
    pub y: f32,
}

impl StickVector {
    pub const ZERO: StickVector = StickVector { x: 0.0, y: 0.0 };

    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    pointer: PointerId,
    center: [f32; 2], // captured once at press time
}

#[derive(Debug, Clone)]
pub struct Joystick {
    radius: f32,
    hit_radius: f32,
    center: [f32; 2],
    gesture: Option<Gesture>,
    knob: [f32; 2],
}

impl Joystick {
    /// `radius` is the knob travel; `hit_radius` is the widget disc that accepts presses.
    pub fn new(center: [f32; 2], radius: f32, hit_radius: f32) -> Self {
        Self {
            radius,
            hit_radius: hit_radius.max(radius),
            center,
            gesture: None,
            knob: [0.0, 0.0],
        }
    }

    /// Layout moved the widget. An in-flight gesture keeps the centre it started with.
    pub fn set_center(&mut self, center: [f32; 2]) {
        self.center = center;
    }

    pub fn center(&self) -> [f32; 2] {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.gesture.map(|gesture| gesture.pointer)
    }

    /// Knob displacement in pixels from the widget centre; presentation only.
    pub fn knob_offset(&self) -> [f32; 2] {
        self.knob
    }

    pub fn contains(&self, position: [f32; 2]) -> bool {
        let dx = position[0] - self.center[0];
        let dy = position[1] - self.center[1];
        dx.hypot(dy) <= self.hit_radius
    }

    /// Start a gesture. Returns the first sample, or `None` when the press is
    /// outside the widget or another contact already owns it.
    pub fn press(&mut self, pointer: PointerId, position: [f32; 2]) -> Option<StickVector> {
        if self.gesture.is_some() || !self.contains(position) {
            return None;
        }

        self.gesture = Some(Gesture {
            pointer,
            center: self.center,
        });
        self.drag(pointer, position)
    }

    pub fn drag(&mut self, pointer: PointerId, position: [f32; 2]) -> Option<StickVector> {
        let gesture = self.gesture.filter(|gesture| gesture.pointer == pointer)?;

        let dx = position[0] - gesture.center[0];
        let dy = position[1] - gesture.center[1];
        let distance = dx.hypot(dy);
        let angle = dy.atan2(dx);
        let clamped = distance.min(self.radius);

        self.knob = [angle.cos() * clamped, angle.sin() * clamped];
        Some(StickVector {
            x: self.knob[0] / self.radius,
            y: self.knob[1] / self.radius,
        })
    }

    pub fn release(&mut self, pointer: PointerId) -> Option<StickVector> {
        if self.active_pointer() != Some(pointer) {
            return None;
        }
        self.cancel()
    }

    /// Drop whatever gesture is in flight (view teardown, lost focus).
    pub fn cancel(&mut self) -> Option<StickVector> {
        self.gesture.take()?;
        self.knob = [0.0, 0.0];
        Some(StickVector::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f32 = 50.0;

    fn stick() -> Joystick {
        Joystick::new([100.0, 100.0], R, 64.0)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn press_emits_initial_sample() {
        let mut stick = stick();
        let sample = stick.press(1, [125.0, 100.0]).unwrap();
        assert!(close(sample.x, 0.5));
        assert!(close(sample.y, 0.0));
        assert!(stick.is_active());
    }

    #[test]
    fn drag_past_radius_saturates_in_drag_direction() {
        let mut stick = stick();
        stick.press(1, [100.0, 100.0]);
        let sample = stick.drag(1, [100.0, 100.0 - 2.0 * R]).unwrap();
        assert!(close(sample.magnitude(), 1.0));
        assert!(close(sample.x, 0.0));
        assert!(close(sample.y, -1.0));

        let offset = stick.knob_offset();
        assert!(close(offset[1], -R));
    }

    #[test]
    fn half_radius_drag_is_half_deflection() {
        let mut stick = stick();
        stick.press(1, [100.0, 100.0]);
        let d = R / 2.0 / std::f32::consts::SQRT_2;
        let sample = stick.drag(1, [100.0 + d, 100.0 + d]).unwrap();
        assert!(close(sample.magnitude(), 0.5));
        assert!(close(sample.x, sample.y));
    }

    #[test]
    fn press_outside_widget_is_ignored() {
        let mut stick = stick();
        assert!(stick.press(1, [300.0, 300.0]).is_none());
        assert!(!stick.is_active());
        assert!(stick.drag(1, [110.0, 100.0]).is_none());
    }

    #[test]
    fn second_contact_does_not_steal_the_stick() {
        let mut stick = stick();
        stick.press(1, [100.0, 100.0]);
        assert!(stick.press(2, [110.0, 110.0]).is_none());
        assert!(stick.drag(2, [140.0, 100.0]).is_none());
        assert!(stick.release(2).is_none());
        assert_eq!(stick.active_pointer(), Some(1));
    }

    #[test]
    fn release_recentres_knob() {
        let mut stick = stick();
        stick.press(7, [120.0, 90.0]);
        assert_eq!(stick.release(7), Some(StickVector::ZERO));
        assert_eq!(stick.knob_offset(), [0.0, 0.0]);
        assert!(!stick.is_active());
        assert!(stick.release(7).is_none());
    }

    #[test]
    fn gesture_keeps_centre_captured_at_press() {
        let mut stick = stick();
        stick.press(1, [100.0, 100.0]);
        stick.set_center([400.0, 400.0]);
        let sample = stick.drag(1, [125.0, 100.0]).unwrap();
        assert!(close(sample.x, 0.5));

        stick.release(1);
        assert!(stick.press(1, [100.0, 100.0]).is_none());
        assert!(stick.press(1, [400.0, 400.0]).is_some());
    }
}
