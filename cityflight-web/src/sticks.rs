use cityflight_core::{Host, InputAxes, InputConfig, Joystick, StickVector};
use macroquad::prelude::*;

use crate::input::PointerEvent;

const BASE_FILL: Color = Color::new(1.0, 1.0, 1.0, 0.2);
const BASE_RING: Color = Color::new(1.0, 1.0, 1.0, 0.45);
const KNOB_FILL: Color = Color::new(1.0, 1.0, 1.0, 0.8);
const LABEL_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.7);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickRole {
    /// Yaw on x, throttle on y.
    Left,
    /// Roll on x, pitch on y.
    Right,
}

impl StickRole {
    pub fn axes(self, sample: StickVector) -> InputAxes {
        match self {
            StickRole::Left => InputAxes::left_stick(sample.x, sample.y),
            StickRole::Right => InputAxes::right_stick(sample.x, sample.y),
        }
    }

    fn label(self) -> &'static str {
        match self {
            StickRole::Left => "ALT / YAW",
            StickRole::Right => "MOVE",
        }
    }
}

struct StickWidget {
    role: StickRole,
    stick: Joystick,
}

/// The two on-screen flight sticks.
pub struct StickPad {
    widgets: [StickWidget; 2],
    knob_radius: f32,
}

impl StickPad {
    pub fn new(host: Host, input: &InputConfig) -> Self {
        let hit_radius = host.stick_hit_radius(input);
        let make = |role| StickWidget {
            role,
            stick: Joystick::new([0.0, 0.0], input.stick_radius, hit_radius),
        };
        Self {
            widgets: [make(StickRole::Left), make(StickRole::Right)],
            knob_radius: input.stick_radius * 0.4,
        }
    }

    /// Anchor the sticks in the bottom corners of a `width x height` view.
    pub fn layout(&mut self, width: f32, height: f32) {
        let inset = self.widgets[0].stick.hit_radius() + 24.0;
        let y = height - inset;
        self.widgets[0].stick.set_center([inset, y]);
        self.widgets[1].stick.set_center([width - inset, y]);
    }

    pub fn center(&self, role: StickRole) -> [f32; 2] {
        self.widget(role).stick.center()
    }

    pub fn is_active(&self, role: StickRole) -> bool {
        self.widget(role).stick.is_active()
    }

    fn widget(&self, role: StickRole) -> &StickWidget {
        match role {
            StickRole::Left => &self.widgets[0],
            StickRole::Right => &self.widgets[1],
        }
    }

    /// Feed pointer activity, returning one axes update per stick sample.
    pub fn handle(&mut self, events: &[PointerEvent]) -> Vec<InputAxes> {
        let mut updates = Vec::new();

        for event in events {
            match *event {
                PointerEvent::Down(pointer, position) => {
                    // First stick that claims the contact owns it.
                    for widget in &mut self.widgets {
                        if let Some(sample) = widget.stick.press(pointer, position) {
                            updates.push(widget.role.axes(sample));
                            break;
                        }
                    }
                }
                PointerEvent::Move(pointer, position) => {
                    for widget in &mut self.widgets {
                        if let Some(sample) = widget.stick.drag(pointer, position) {
                            updates.push(widget.role.axes(sample));
                        }
                    }
                }
                PointerEvent::Up(pointer) => {
                    for widget in &mut self.widgets {
                        if let Some(sample) = widget.stick.release(pointer) {
                            updates.push(widget.role.axes(sample));
                        }
                    }
                }
            }
        }

        updates
    }

    /// Abandon any in-flight gestures, e.g. when leaving the flight screen.
    pub fn cancel_all(&mut self) -> Vec<InputAxes> {
        self.widgets
            .iter_mut()
            .filter_map(|widget| widget.stick.cancel().map(|sample| widget.role.axes(sample)))
            .collect()
    }

    pub fn draw(&self) {
        for widget in &self.widgets {
            let [cx, cy] = widget.stick.center();
            let [kx, ky] = widget.stick.knob_offset();
            let radius = widget.stick.radius();

            draw_circle(cx, cy, radius, BASE_FILL);
            draw_circle_lines(cx, cy, radius, 2.0, BASE_RING);
            draw_circle(cx + kx, cy + ky, self.knob_radius, KNOB_FILL);

            let label = widget.role.label();
            let size = measure_text(label, None, 16, 1.0);
            draw_text(
                label,
                cx - size.width / 2.0,
                cy + radius + 20.0,
                16.0,
                LABEL_COLOR,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MOUSE_POINTER;

    fn pad() -> StickPad {
        let mut pad = StickPad::new(Host::Browser, &InputConfig::default());
        pad.layout(800.0, 600.0);
        pad
    }

    #[test]
    fn each_contact_drives_its_own_stick() {
        let mut pad = pad();
        let [lx, ly] = pad.center(StickRole::Left);
        let [rx, ry] = pad.center(StickRole::Right);

        let updates = pad.handle(&[
            PointerEvent::Down(1, [lx, ly - 50.0]),
            PointerEvent::Down(2, [rx + 50.0, ry]),
        ]);

        assert_eq!(updates.len(), 2);
        assert!(updates[0].yaw.unwrap().abs() < 1e-4);
        assert!((updates[0].throttle.unwrap() + 1.0).abs() < 1e-4);
        assert_eq!(updates[0].roll, None);
        assert!((updates[1].roll.unwrap() - 1.0).abs() < 1e-4);
        assert!(pad.is_active(StickRole::Left) && pad.is_active(StickRole::Right));
    }

    #[test]
    fn release_recenters_only_the_owner() {
        let mut pad = pad();
        let [lx, ly] = pad.center(StickRole::Left);
        pad.handle(&[PointerEvent::Down(7, [lx + 10.0, ly])]);

        assert!(pad.handle(&[PointerEvent::Up(8)]).is_empty());
        let updates = pad.handle(&[PointerEvent::Up(7)]);
        assert_eq!(updates, vec![InputAxes::left_stick(0.0, 0.0)]);
        assert!(!pad.is_active(StickRole::Left));
    }

    #[test]
    fn click_within_one_frame_leaves_stick_neutral() {
        let mut pad = pad();
        let [lx, ly] = pad.center(StickRole::Left);
        let updates = pad.handle(&[
            PointerEvent::Down(MOUSE_POINTER, [lx + 40.0, ly]),
            PointerEvent::Up(MOUSE_POINTER),
        ]);

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1], InputAxes::left_stick(0.0, 0.0));
        assert!(!pad.is_active(StickRole::Left));
    }

    #[test]
    fn presses_outside_both_sticks_are_ignored() {
        let mut pad = pad();
        assert!(pad.handle(&[PointerEvent::Down(1, [400.0, 100.0])]).is_empty());
        assert!(pad.cancel_all().is_empty());
    }

    #[test]
    fn cancel_all_zeroes_live_sticks() {
        let mut pad = pad();
        let [rx, ry] = pad.center(StickRole::Right);
        pad.handle(&[PointerEvent::Down(4, [rx, ry + 30.0])]);
        assert_eq!(pad.cancel_all(), vec![InputAxes::right_stick(0.0, 0.0)]);
        assert!(!pad.is_active(StickRole::Right));
    }
}
