use serde::{Deserialize, Serialize};

pub const WORLD_SIZE: f32 = 2000.0;
pub const MAX_HEIGHT: f32 = 200.0;
pub const DEFAULT_SPAWN: [f32; 2] = [300.0, 300.0];

/// Authoritative flight state: world pose plus the last input received on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneState {
    pub x: f32,
    pub y: f32,
    pub height: f32,
    pub rotation: f32, // degrees, accumulates without wrapping
    pub throttle: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl DroneState {
    pub fn at_spawn(spawn: [f32; 2]) -> Self {
        Self {
            x: spawn[0],
            y: spawn[1],
            height: 0.0,
            rotation: 0.0,
            throttle: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }

    pub fn apply_inputs(&mut self, inputs: InputAxes) {
        if let Some(yaw) = inputs.yaw {
            self.yaw = yaw;
        }
        if let Some(throttle) = inputs.throttle {
            self.throttle = throttle;
        }
        if let Some(pitch) = inputs.pitch {
            self.pitch = pitch;
        }
        if let Some(roll) = inputs.roll {
            self.roll = roll;
        }
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        FlightSnapshot {
            x: self.x,
            y: self.y,
            height: self.height,
            rotation: self.rotation,
        }
    }
}

impl Default for DroneState {
    fn default() -> Self {
        Self::at_spawn(DEFAULT_SPAWN)
    }
}

/// Partial input update. `None` keeps whatever the axis held before.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputAxes {
    pub yaw: Option<f32>,
    pub throttle: Option<f32>,
    pub pitch: Option<f32>,
    pub roll: Option<f32>,
}

impl InputAxes {
    /// Left stick: horizontal turns, vertical climbs (stick up is negative screen Y).
    pub fn left_stick(x: f32, y: f32) -> Self {
        Self {
            yaw: Some(x),
            throttle: Some(y),
            ..Self::default()
        }
    }

    /// Right stick: horizontal strafes, vertical moves forward/back.
    pub fn right_stick(x: f32, y: f32) -> Self {
        Self {
            roll: Some(x),
            pitch: Some(y),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.yaw.is_none() && self.throttle.is_none() && self.pitch.is_none() && self.roll.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub x: f32,
    pub y: f32,
    pub height: f32,
    pub rotation: f32,
}

impl FlightSnapshot {
    /// Heading folded into `[0, 360)` for display; `rotation` itself is left untouched.
    pub fn heading_degrees(&self) -> f32 {
        self.rotation.rem_euclid(360.0)
    }

    /// Non-finite fields are written as `null`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for FlightSnapshot {
    fn default() -> Self {
        DroneState::default().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_spawn_tuple() {
        let state = DroneState::default();
        assert_eq!(state.x, 300.0);
        assert_eq!(state.y, 300.0);
        assert_eq!(state.height, 0.0);
        assert_eq!(state.rotation, 0.0);
        assert_eq!(
            [state.throttle, state.yaw, state.pitch, state.roll],
            [0.0; 4]
        );
    }

    #[test]
    fn partial_inputs_keep_unspecified_axes() {
        let mut state = DroneState::default();
        state.apply_inputs(InputAxes::left_stick(0.5, -0.25));
        state.apply_inputs(InputAxes::right_stick(1.0, -1.0));
        state.apply_inputs(InputAxes {
            yaw: Some(0.0),
            ..InputAxes::default()
        });

        assert_eq!(state.yaw, 0.0);
        assert_eq!(state.throttle, -0.25);
        assert_eq!(state.roll, 1.0);
        assert_eq!(state.pitch, -1.0);
    }

    #[test]
    fn heading_wraps_for_display_only() {
        let mut state = DroneState::default();
        state.rotation = -90.0;
        assert_eq!(state.snapshot().heading_degrees(), 270.0);
        state.rotation = 725.0;
        let snapshot = state.snapshot();
        assert_eq!(snapshot.heading_degrees(), 5.0);
        assert_eq!(snapshot.rotation, 725.0);
    }

    #[test]
    fn snapshot_serializes_pose_fields_only() {
        let json = DroneState::default().snapshot().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["x"], 300.0);
        assert_eq!(value["height"], 0.0);
        assert!(value.get("throttle").is_none());
    }
}
