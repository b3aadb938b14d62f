use crate::city::CityLayout;
use crate::drone::{DroneState, MAX_HEIGHT};
use crate::painter::{Color, Painter};

/// Fill behind the world where the camera looks past its edge.
pub const BACKDROP_COLOR: Color = Color::hex(0x1e293b);

#[derive(Debug, Clone)]
pub struct DroneGlyph {
    pub body_radius: f32,
    pub arm_reach: f32, // rotor hubs sit at (±reach, ±reach)
    pub arm_thickness: f32,
    pub rotor_radius: f32,
    pub shadow_radius: f32,
    pub shadow_offset: [f32; 2],
    /// Height at which the shadow reaches its minimum size.
    pub shadow_full_height: f32,
    pub chevron: [[f32; 2]; 3],
    pub body_color: Color,
    pub arm_color: Color,
    pub rotor_color: Color,
    pub shadow_color: Color,
    pub chevron_color: Color,
}

impl Default for DroneGlyph {
    fn default() -> Self {
        Self {
            body_radius: 10.0,
            arm_reach: 15.0,
            arm_thickness: 4.0,
            rotor_radius: 8.0,
            shadow_radius: 15.0,
            shadow_offset: [5.0, 5.0],
            shadow_full_height: MAX_HEIGHT,
            // Points along local +X, which is the direction pitch-forward flies.
            chevron: [[10.0, 0.0], [0.0, -5.0], [0.0, 5.0]],
            body_color: Color::hex(0xef4444),
            arm_color: Color::hex(0x333333),
            rotor_color: Color::rgba(255, 255, 255, 204),
            shadow_color: Color::rgba(0, 0, 0, 51),
            chevron_color: Color::hex(0xfbbf24),
        }
    }
}

/// Shadow shrinks with altitude but is never less than half size.
pub fn shadow_scale(height: f32, full_height: f32) -> f32 {
    if full_height <= 0.0 {
        return 0.5;
    }
    1.0 - (height / full_height).clamp(0.0, 0.5)
}

/// Translation that puts the drone at the centre of the viewport.
pub fn camera_offset(viewport: [f32; 2], state: &DroneState) -> [f32; 2] {
    [viewport[0] / 2.0 - state.x, viewport[1] / 2.0 - state.y]
}

pub fn surface_ready(viewport: [f32; 2]) -> bool {
    viewport[0] > 0.0 && viewport[1] > 0.0
}

#[derive(Debug, Clone)]
pub struct SceneRenderer {
    layout: CityLayout,
    glyph: DroneGlyph,
}

impl SceneRenderer {
    pub fn new(layout: CityLayout) -> Self {
        Self::with_glyph(layout, DroneGlyph::default())
    }

    pub fn with_glyph(layout: CityLayout, glyph: DroneGlyph) -> Self {
        Self { layout, glyph }
    }

    pub fn layout(&self) -> &CityLayout {
        &self.layout
    }

    pub fn glyph(&self) -> &DroneGlyph {
        &self.glyph
    }

    /// Paint one frame from the state as it is right now.
    pub fn draw_frame<P: Painter + ?Sized>(&self, painter: &mut P, state: &DroneState) {
        painter.clear(BACKDROP_COLOR);

        let camera = camera_offset(painter.viewport(), state);
        painter.save();
        painter.translate(camera[0], camera[1]);
        self.draw_city(painter);
        self.draw_drone(painter, state);
        painter.restore();
    }

    pub fn draw_city<P: Painter + ?Sized>(&self, painter: &mut P) {
        let layout = &self.layout;
        let [width, height] = layout.size;
        painter.fill_rect(0.0, 0.0, width, height, layout.ground);

        let roads = &layout.roads;
        for x in roads.positions(width) {
            self.draw_road(painter, [x, 0.0], [x, height]);
        }
        for y in roads.positions(height) {
            self.draw_road(painter, [0.0, y], [width, y]);
        }

        for lot in layout.buildings.iter().chain(layout.parks.iter()) {
            let r = lot.rect;
            painter.fill_rect(r.x, r.y, r.w, r.h, lot.color);
        }
        for tree in &layout.trees {
            painter.fill_circle(tree.center, tree.radius, tree.color);
        }
    }

    fn draw_road<P: Painter + ?Sized>(&self, painter: &mut P, from: [f32; 2], to: [f32; 2]) {
        let roads = &self.layout.roads;
        painter.stroke_line(from, to, roads.width, roads.color, None);
        if let Some(lane) = roads.lane {
            painter.stroke_line(from, to, lane.width, lane.color, Some(lane.dash));
        }
    }

    pub fn draw_drone<P: Painter + ?Sized>(&self, painter: &mut P, state: &DroneState) {
        let g = &self.glyph;
        painter.save();
        painter.translate(state.x, state.y);
        painter.rotate(state.rotation.to_radians());

        let scale = shadow_scale(state.height, g.shadow_full_height);
        let shadow_center = [g.shadow_offset[0], g.shadow_offset[1] + state.height / 2.0];
        painter.fill_circle(shadow_center, g.shadow_radius * scale, g.shadow_color);

        painter.fill_circle([0.0, 0.0], g.body_radius, g.body_color);

        let reach = g.arm_reach;
        painter.stroke_line([-reach, -reach], [reach, reach], g.arm_thickness, g.arm_color, None);
        painter.stroke_line([reach, -reach], [-reach, reach], g.arm_thickness, g.arm_color, None);

        for [sx, sy] in [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]] {
            let hub = [sx * reach, sy * reach];
            painter.fill_circle(hub, g.rotor_radius, g.rotor_color);
            painter.stroke_circle(hub, g.rotor_radius, g.arm_thickness, g.arm_color);
        }

        let [a, b, c] = g.chevron;
        painter.fill_triangle(a, b, c, g.chevron_color);

        painter.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    AwaitingSurface,
    Running,
    Stopped,
}

/// Start/stop gate for the per-frame redraw.
///
/// The loop waits for a laid-out surface before its first frame, then draws
/// every frame until stopped.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    phase: LoopPhase,
    frames: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            phase: LoopPhase::AwaitingSurface,
            frames: 0,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Decide whether this frame should be drawn.
    pub fn begin_frame(&mut self, viewport: [f32; 2]) -> bool {
        match self.phase {
            LoopPhase::Stopped => false,
            LoopPhase::AwaitingSurface => {
                if !surface_ready(viewport) {
                    return false;
                }
                log::info!(
                    "surface ready at {}x{}, starting render loop",
                    viewport[0],
                    viewport[1]
                );
                self.phase = LoopPhase::Running;
                self.frames += 1;
                true
            }
            LoopPhase::Running => {
                if !surface_ready(viewport) {
                    return false;
                }
                self.frames += 1;
                true
            }
        }
    }

    pub fn stop(&mut self) {
        self.phase = LoopPhase::Stopped;
    }

    pub fn restart(&mut self) {
        self.phase = LoopPhase::AwaitingSurface;
        self.frames = 0;
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}
