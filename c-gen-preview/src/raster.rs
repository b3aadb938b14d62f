use cityflight_core::{Affine2, Color, Painter, TransformStack, dash_segments};
use image::{Rgba, RgbaImage};

const AA_SAMPLES_PER_AXIS: u32 = 4;
const AA_SAMPLE_COUNT: u32 = AA_SAMPLES_PER_AXIS * AA_SAMPLES_PER_AXIS;

#[derive(Debug, Clone, Copy)]
enum Shape {
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Disc { center: [f32; 2], radius: f32 },
    Ring { center: [f32; 2], radius: f32, half_width: f32 },
    Segment { from: [f32; 2], to: [f32; 2], half_width: f32 },
    Triangle { a: [f32; 2], b: [f32; 2], c: [f32; 2] },
}

impl Shape {
    /// Local-frame axis-aligned bounds as `(min, max)`.
    fn bounds(&self) -> ([f32; 2], [f32; 2]) {
        match *self {
            Shape::Rect { x, y, w, h } => ([x, y], [x + w, y + h]),
            Shape::Disc { center, radius } => (
                [center[0] - radius, center[1] - radius],
                [center[0] + radius, center[1] + radius],
            ),
            Shape::Ring {
                center,
                radius,
                half_width,
            } => {
                let reach = radius + half_width;
                (
                    [center[0] - reach, center[1] - reach],
                    [center[0] + reach, center[1] + reach],
                )
            }
            Shape::Segment {
                from,
                to,
                half_width,
            } => (
                [from[0].min(to[0]) - half_width, from[1].min(to[1]) - half_width],
                [from[0].max(to[0]) + half_width, from[1].max(to[1]) + half_width],
            ),
            Shape::Triangle { a, b, c } => (
                [a[0].min(b[0]).min(c[0]), a[1].min(b[1]).min(c[1])],
                [a[0].max(b[0]).max(c[0]), a[1].max(b[1]).max(c[1])],
            ),
        }
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        match *self {
            Shape::Rect { x: rx, y: ry, w, h } => {
                (rx..=rx + w).contains(&x) && (ry..=ry + h).contains(&y)
            }
            Shape::Disc { center, radius } => (x - center[0]).hypot(y - center[1]) <= radius,
            Shape::Ring {
                center,
                radius,
                half_width,
            } => ((x - center[0]).hypot(y - center[1]) - radius).abs() <= half_width,
            Shape::Segment {
                from,
                to,
                half_width,
            } => point_on_segment(from, to, half_width, x, y),
            Shape::Triangle { a, b, c } => point_in_triangle(a, b, c, x, y),
        }
    }
}

/// Butt-capped stroke test, as canvas lines are drawn by default.
fn point_on_segment(from: [f32; 2], to: [f32; 2], half_width: f32, x: f32, y: f32) -> bool {
    if half_width <= 0.0 {
        return false;
    }

    let dx = to[0] - from[0];
    let dy = to[1] - from[1];
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return false;
    }

    let t = ((x - from[0]) * dx + (y - from[1]) * dy) / len_sq;
    let proj_x = from[0] + dx * t;
    let proj_y = from[1] + dy * t;
    let dist_sq = (x - proj_x).powi(2) + (y - proj_y).powi(2);
    (0.0..=1.0).contains(&t) && dist_sq <= half_width * half_width
}

fn point_in_triangle(a: [f32; 2], b: [f32; 2], c: [f32; 2], x: f32, y: f32) -> bool {
    let edge = |p: [f32; 2], q: [f32; 2]| (q[0] - p[0]) * (y - p[1]) - (q[1] - p[1]) * (x - p[0]);
    let d1 = edge(a, b);
    let d2 = edge(b, c);
    let d3 = edge(c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Source-over blend of `color` at `coverage` onto `dst`.
fn blend(dst: Rgba<u8>, color: Color, coverage: f32) -> Rgba<u8> {
    let src_a = (color.a as f32 / 255.0) * coverage;
    if src_a <= 0.0 {
        return dst;
    }
    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    let channel = |src: u8, dst: u8| -> u8 {
        let value = (src as f32 * src_a + dst as f32 * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(color.r, dst.0[0]),
        channel(color.g, dst.0[1]),
        channel(color.b, dst.0[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

/// Software painter that supersamples each primitive into an RGBA image.
pub struct RasterPainter {
    image: RgbaImage,
    stack: TransformStack,
}

impl RasterPainter {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
            stack: TransformStack::new(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn screen_bounds(&self, shape: &Shape, transform: &Affine2) -> Option<(u32, u32, u32, u32)> {
        let (min, max) = shape.bounds();
        let corners = [
            transform.apply([min[0], min[1]]),
            transform.apply([max[0], min[1]]),
            transform.apply([max[0], max[1]]),
            transform.apply([min[0], max[1]]),
        ];

        let (mut lo_x, mut lo_y) = (f32::INFINITY, f32::INFINITY);
        let (mut hi_x, mut hi_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for [cx, cy] in corners {
            lo_x = lo_x.min(cx);
            lo_y = lo_y.min(cy);
            hi_x = hi_x.max(cx);
            hi_y = hi_y.max(cy);
        }

        let width = self.image.width() as f32;
        let height = self.image.height() as f32;
        if hi_x < 0.0 || hi_y < 0.0 || lo_x >= width || lo_y >= height {
            return None;
        }

        let x0 = lo_x.floor().max(0.0) as u32;
        let y0 = lo_y.floor().max(0.0) as u32;
        let x1 = (hi_x.ceil().min(width) as u32).max(x0);
        let y1 = (hi_y.ceil().min(height) as u32).max(y0);
        Some((x0, y0, x1, y1))
    }

    fn fill_shape(&mut self, shape: Shape, color: Color) {
        let transform = self.stack.current();
        let Some(inverse) = transform.inverse() else {
            return;
        };
        let Some((x0, y0, x1, y1)) = self.screen_bounds(&shape, &transform) else {
            return;
        };

        let samples_per_axis = AA_SAMPLES_PER_AXIS as f32;
        let inv_sample_count = 1.0 / AA_SAMPLE_COUNT as f32;

        for y in y0..y1 {
            for x in x0..x1 {
                let mut hits = 0u32;
                for sy in 0..AA_SAMPLES_PER_AXIS {
                    for sx in 0..AA_SAMPLES_PER_AXIS {
                        let sample_x = x as f32 + (sx as f32 + 0.5) / samples_per_axis;
                        let sample_y = y as f32 + (sy as f32 + 0.5) / samples_per_axis;
                        let [local_x, local_y] = inverse.apply([sample_x, sample_y]);
                        if shape.contains(local_x, local_y) {
                            hits += 1;
                        }
                    }
                }

                if hits > 0 {
                    let coverage = hits as f32 * inv_sample_count;
                    let pixel = blend(*self.image.get_pixel(x, y), color, coverage);
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }
}

impl Painter for RasterPainter {
    fn viewport(&self) -> [f32; 2] {
        [self.image.width() as f32, self.image.height() as f32]
    }

    fn clear(&mut self, color: Color) {
        self.stack.reset();
        let rgba = Rgba([color.r, color.g, color.b, color.a]);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
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

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.fill_shape(Shape::Rect { x, y, w, h }, color);
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Color) {
        self.fill_shape(Shape::Disc { center, radius }, color);
    }

    fn stroke_circle(&mut self, center: [f32; 2], radius: f32, thickness: f32, color: Color) {
        let half_width = thickness * 0.5;
        self.fill_shape(
            Shape::Ring {
                center,
                radius,
                half_width,
            },
            color,
        );
    }

    fn stroke_line(
        &mut self,
        from: [f32; 2],
        to: [f32; 2],
        thickness: f32,
        color: Color,
        dash: Option<[f32; 2]>,
    ) {
        let half_width = thickness * 0.5;
        let segments = match dash {
            Some(pattern) => dash_segments(from, to, pattern),
            None => vec![(from, to)],
        };
        for (from, to) in segments {
            self.fill_shape(
                Shape::Segment {
                    from,
                    to,
                    half_width,
                },
                color,
            );
        }
    }

    fn fill_triangle(&mut self, a: [f32; 2], b: [f32; 2], c: [f32; 2], color: Color) {
        self.fill_shape(Shape::Triangle { a, b, c }, color);
    }
}
