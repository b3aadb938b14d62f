use cityflight_core::{Affine2, Color as SceneColor, Painter, TransformStack, dash_segments};
use macroquad::prelude::*;

pub fn to_mq_color(color: SceneColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Draws the shared scene with macroquad immediate-mode primitives.
///
/// The painter covers the region `origin..origin + size` of the window; points
/// are mapped through the canvas-style transform stack before drawing.
pub struct MacroquadPainter {
    origin: Vec2,
    size: Vec2,
    stack: TransformStack,
}

impl MacroquadPainter {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            origin,
            size,
            stack: TransformStack::new(),
        }
    }

    pub fn full_window() -> Self {
        Self::new(Vec2::ZERO, vec2(screen_width(), screen_height()))
    }

    fn to_screen(&self, point: [f32; 2]) -> Vec2 {
        let mapped = self.stack.apply(point);
        vec2(mapped[0], mapped[1]) + self.origin
    }

    fn axis_aligned(&self) -> bool {
        is_axis_aligned(&self.stack.current())
    }
}

/// True when local `(x, y)` still maps to the screen top-left of a rect, so no
/// flip or turn is in effect.
fn is_axis_aligned(m: &Affine2) -> bool {
    m.a > 0.0 && m.d > 0.0 && m.b.abs() <= f32::EPSILON && m.c.abs() <= f32::EPSILON
}

impl Painter for MacroquadPainter {
    fn viewport(&self) -> [f32; 2] {
        [self.size.x, self.size.y]
    }

    fn clear(&mut self, color: SceneColor) {
        self.stack.reset();
        draw_rectangle(
            self.origin.x,
            self.origin.y,
            self.size.x,
            self.size.y,
            to_mq_color(color),
        );
    }

    fn save(&mut self) {
        self.stack.save();
    }

    fn restore(&mut self) {
        self.stack.restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.stack.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f32) {
        self.stack.rotate(radians);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: SceneColor) {
        let color = to_mq_color(color);
        if self.axis_aligned() {
            let top_left = self.to_screen([x, y]);
            draw_rectangle(top_left.x, top_left.y, w, h, color);
            return;
        }

        let a = self.to_screen([x, y]);
        let b = self.to_screen([x + w, y]);
        let c = self.to_screen([x + w, y + h]);
        let d = self.to_screen([x, y + h]);
        draw_triangle(a, b, c, color);
        draw_triangle(a, c, d, color);
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: SceneColor) {
        let center = self.to_screen(center);
        let radius = radius * self.stack.current().scale();
        draw_circle(center.x, center.y, radius, to_mq_color(color));
    }

    fn stroke_circle(&mut self, center: [f32; 2], radius: f32, thickness: f32, color: SceneColor) {
        let center = self.to_screen(center);
        let scale = self.stack.current().scale();
        draw_circle_lines(
            center.x,
            center.y,
            radius * scale,
            thickness * scale,
            to_mq_color(color),
        );
    }

    fn stroke_line(
        &mut self,
        from: [f32; 2],
        to: [f32; 2],
        thickness: f32,
        color: SceneColor,
        dash: Option<[f32; 2]>,
    ) {
        let color = to_mq_color(color);
        let thickness = thickness * self.stack.current().scale();
        let segments = match dash {
            Some(pattern) => dash_segments(from, to, pattern),
            None => vec![(from, to)],
        };

        for (start, end) in segments {
            let start = self.to_screen(start);
            let end = self.to_screen(end);
            draw_line(start.x, start.y, end.x, end.y, thickness, color);
        }
    }

    fn fill_triangle(&mut self, a: [f32; 2], b: [f32; 2], c: [f32; 2], color: SceneColor) {
        draw_triangle(
            self.to_screen(a),
            self.to_screen(b),
            self.to_screen(c),
            to_mq_color(color),
        );
    }
}
