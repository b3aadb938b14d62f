use cityflight_core::PointerId;
use macroquad::prelude::*;

/// The mouse behaves as one more contact so widgets track it like a finger.
pub const MOUSE_POINTER: PointerId = u64::MAX;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(PointerId, [f32; 2]),
    Move(PointerId, [f32; 2]),
    Up(PointerId),
}

/// Drain this frame's touch (and optionally mouse) activity in arrival order.
pub fn pointer_events(include_mouse: bool) -> Vec<PointerEvent> {
    let mut events = Vec::new();

    for touch in touches() {
        let position = [touch.position.x, touch.position.y];
        let event = match touch.phase {
            TouchPhase::Started => PointerEvent::Down(touch.id, position),
            TouchPhase::Moved | TouchPhase::Stationary => PointerEvent::Move(touch.id, position),
            TouchPhase::Ended | TouchPhase::Cancelled => PointerEvent::Up(touch.id),
        };
        events.push(event);
    }

    if include_mouse {
        let (mouse_x, mouse_y) = mouse_position();
        push_mouse_events(
            &mut events,
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_released(MouseButton::Left),
            is_mouse_button_down(MouseButton::Left),
            [mouse_x, mouse_y],
        );
    }

    events
}

/// A click that starts and ends within one frame yields both `Down` and `Up`.
fn push_mouse_events(
    events: &mut Vec<PointerEvent>,
    pressed: bool,
    released: bool,
    down: bool,
    position: [f32; 2],
) {
    if pressed {
        events.push(PointerEvent::Down(MOUSE_POINTER, position));
    } else if down && !released {
        events.push(PointerEvent::Move(MOUSE_POINTER, position));
    }
    if released {
        events.push(PointerEvent::Up(MOUSE_POINTER));
    }
}

/// Circular tap target (back / reset buttons).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapTarget {
    pub center: [f32; 2],
    pub radius: f32,
}

impl TapTarget {
    pub fn hit(&self, position: [f32; 2]) -> bool {
        let dx = position[0] - self.center[0];
        let dy = position[1] - self.center[1];
        dx.hypot(dy) <= self.radius
    }

    pub fn tapped(&self, events: &[PointerEvent]) -> bool {
        events.iter().any(|event| match *event {
            PointerEvent::Down(_, position) => self.hit(position),
            _ => false,
        })
    }
}

/// Rectangular tap target (intro start button).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl TapRect {
    pub fn hit(&self, position: [f32; 2]) -> bool {
        (self.x..=self.x + self.w).contains(&position[0])
            && (self.y..=self.y + self.h).contains(&position[1])
    }

    pub fn tapped(&self, events: &[PointerEvent]) -> bool {
        events.iter().any(|event| match *event {
            PointerEvent::Down(_, position) => self.hit(position),
            _ => false,
        })
    }
}
