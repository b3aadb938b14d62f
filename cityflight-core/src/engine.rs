use crate::config::PhysicsConfig;
use crate::drone::{DroneState, FlightSnapshot, InputAxes};

/// Owns the drone and advances it one fixed step at a time.
///
/// The pose fields are written only by [`FlightEngine::tick`]; the input axes
/// only by [`FlightEngine::set_inputs`]. Readers borrow [`FlightEngine::state`].
#[derive(Debug, Clone)]
pub struct FlightEngine {
    params: PhysicsConfig,
    state: DroneState,
}

impl FlightEngine {
    pub fn new(params: PhysicsConfig) -> Self {
        let state = DroneState::at_spawn(params.spawn);
        Self { params, state }
    }

    pub fn with_state(params: PhysicsConfig, state: DroneState) -> Self {
        Self { params, state }
    }

    pub fn state(&self) -> &DroneState {
        &self.state
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        self.state.snapshot()
    }

    pub fn set_inputs(&mut self, inputs: InputAxes) {
        self.state.apply_inputs(inputs);
    }

    pub fn reset(&mut self) {
        self.state = DroneState::at_spawn(self.params.spawn);
    }

    pub fn tick(&mut self) {
        let p = &self.params;
        let s = &mut self.state;

        // Axes under the dead-zone freeze their component for this tick.
        if s.yaw.abs() > p.dead_zone {
            s.rotation += s.yaw * p.rotation_speed;
        }

        if s.throttle.abs() > p.dead_zone {
            s.height = (s.height - s.throttle * p.lift_speed).clamp(0.0, p.max_height);
        }

        if s.pitch.abs() > p.dead_zone || s.roll.abs() > p.dead_zone {
            let (sin, cos) = s.rotation.to_radians().sin_cos();
            // Stick up reads as negative pitch, so forward is inverted; roll is not.
            let forward = -s.pitch * p.speed;
            let side = s.roll * p.speed;
            s.x += forward * cos - side * sin;
            s.y += forward * sin + side * cos;
        }

        s.x = s.x.clamp(0.0, p.world_size);
        s.y = s.y.clamp(0.0, p.world_size);
    }
}

impl Default for FlightEngine {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn full_yaw_turns_two_degrees_per_tick() {
        let mut engine = FlightEngine::default();
        engine.set_inputs(InputAxes::left_stick(1.0, 0.0));
        engine.tick();
        assert_eq!(engine.state().rotation, 2.0);

        for _ in 1..45 {
            engine.tick();
        }
        assert_eq!(engine.state().rotation, 90.0);
    }

    #[test]
    fn negative_throttle_climbs() {
        let mut engine = FlightEngine::default();
        engine.set_inputs(InputAxes::left_stick(0.0, -0.5));
        engine.tick();
        engine.tick();
        assert_eq!(engine.state().height, 1.0);
    }

    #[test]
    fn height_never_drops_below_ground() {
        let mut engine = FlightEngine::default();
        engine.set_inputs(InputAxes::left_stick(0.0, 1.0));
        engine.tick();
        assert_eq!(engine.state().height, 0.0);
    }

    #[test]
    fn roll_strafes_to_the_right_of_heading() {
        let mut engine = FlightEngine::default();
        engine.set_inputs(InputAxes::right_stick(1.0, 0.0));
        engine.tick();
        let s = engine.state();
        assert!(close(s.x, 300.0));
        assert!(close(s.y, 302.0));
    }

    #[test]
    fn dead_zone_on_one_group_leaves_others_active() {
        let mut engine = FlightEngine::default();
        engine.set_inputs(InputAxes {
            yaw: Some(0.05),
            throttle: Some(-1.0),
            pitch: Some(0.09),
            roll: Some(-0.09),
        });
        engine.tick();

        let s = engine.state();
        assert_eq!(s.rotation, 0.0);
        assert_eq!(s.height, 1.0);
        assert_eq!((s.x, s.y), (300.0, 300.0));
    }

    #[test]
    fn small_pitch_moves_when_roll_exceeds_dead_zone() {
        let mut engine = FlightEngine::default();
        engine.set_inputs(InputAxes::right_stick(0.5, -0.05));
        engine.tick();
        let s = engine.state();
        // Both axes contribute once the pair is active.
        assert!(close(s.x, 300.1));
        assert!(close(s.y, 301.0));
    }

    #[test]
    fn inputs_persist_across_ticks() {
        let mut engine = FlightEngine::default();
        engine.set_inputs(InputAxes::right_stick(0.0, -1.0));
        for _ in 0..10 {
            engine.tick();
        }
        assert!(close(engine.state().x, 320.0));
    }

    #[test]
    fn reset_returns_to_configured_spawn() {
        let params = PhysicsConfig {
            spawn: [50.0, 75.0],
            ..PhysicsConfig::default()
        };
        let mut engine = FlightEngine::new(params);
        engine.set_inputs(InputAxes::right_stick(1.0, 1.0));
        engine.tick();
        engine.reset();
        assert_eq!(*engine.state(), DroneState::at_spawn([50.0, 75.0]));
    }
}
