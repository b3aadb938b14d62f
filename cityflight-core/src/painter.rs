//! Drawing surface shared by every host adapter.
//!
//! The scene is described once against [`Painter`]; hosts only translate these
//! calls into their own primitives. Coordinates passed to a painter are in the
//! current local frame, which [`TransformStack`] maps to surface pixels.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// `#rrggbb` in the form the palette is written in.
    pub const fn hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }
}

pub trait Painter {
    /// Surface size in logical pixels. Zero on either axis means not laid out yet.
    fn viewport(&self) -> [f32; 2];

    fn clear(&mut self, color: Color);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, radians: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Color);
    fn stroke_circle(&mut self, center: [f32; 2], radius: f32, thickness: f32, color: Color);
    /// `dash` is `[on, off]` lengths along the line; `None` draws it solid.
    fn stroke_line(
        &mut self,
        from: [f32; 2],
        to: [f32; 2],
        thickness: f32,
        color: Color,
        dash: Option<[f32; 2]>,
    );
    fn fill_triangle(&mut self, a: [f32; 2], b: [f32; 2], c: [f32; 2], color: Color);
}

/// Row-major 2x3 affine: `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine2 {
    pub const IDENTITY: Affine2 = Affine2 {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn apply(&self, point: [f32; 2]) -> [f32; 2] {
        [
            self.a * point[0] + self.c * point[1] + self.e,
            self.b * point[0] + self.d * point[1] + self.f,
        ]
    }

    /// Post-multiply: later operations act in the already transformed frame.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            e: self.a * dx + self.c * dy + self.e,
            f: self.b * dx + self.d * dy + self.f,
            ..*self
        }
    }

    pub fn rotated(&self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            e: self.e,
            f: self.f,
        }
    }

    /// Length scale of the linear part; translate/rotate stacks keep this at 1.
    pub fn scale(&self) -> f32 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }

    /// Maps surface pixels back into this local frame. `None` for a degenerate transform.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() <= f32::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Canvas-style save/restore stack that painter adapters embed.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Affine2,
    saved: Vec<Affine2>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Affine2 {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores are ignored, matching canvas behaviour.
    pub fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.current = self.current.translated(dx, dy);
    }

    pub fn rotate(&mut self, radians: f32) {
        self.current = self.current.rotated(radians);
    }

    pub fn apply(&self, point: [f32; 2]) -> [f32; 2] {
        self.current.apply(point)
    }

    pub fn reset(&mut self) {
        self.current = Affine2::IDENTITY;
        self.saved.clear();
    }
}

/// Split a line into its visible dash segments. Dashes restart at `from`.
pub fn dash_segments(from: [f32; 2], to: [f32; 2], dash: [f32; 2]) -> Vec<([f32; 2], [f32; 2])> {
    let dx = to[0] - from[0];
    let dy = to[1] - from[1];
    let length = dx.hypot(dy);
    let [on, off] = dash;
    if length <= f32::EPSILON || on <= 0.0 {
        return Vec::new();
    }
    if off <= 0.0 {
        return vec![(from, to)];
    }

    let ux = dx / length;
    let uy = dy / length;
    let point_at = |t: f32| [from[0] + ux * t, from[1] + uy * t];

    let mut segments = Vec::with_capacity((length / (on + off)).ceil() as usize);
    let mut start = 0.0;
    while start < length {
        let end = (start + on).min(length);
        segments.push((point_at(start), point_at(end)));
        start += on + off;
    }
    segments
}
