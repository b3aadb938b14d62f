use cityflight_core::{DroneState, FlightEngine, Host, InputAxes, PhysicsConfig};

/// One baked screenshot: which host's city, what surface size, which moment of flight.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    pub name: &'static str,
    pub host: Host,
    pub size: [u32; 2],
    pub state: DroneState,
}

impl PreviewFrame {
    pub fn file_name(&self) -> String {
        format!("preview-{}.png", self.name)
    }
}

/// Fly the stock engine from spawn with `steps` of `(inputs, ticks)`.
pub fn fly(steps: &[(InputAxes, u32)]) -> DroneState {
    let mut engine = FlightEngine::new(PhysicsConfig::default());
    for (inputs, ticks) in steps {
        engine.set_inputs(*inputs);
        for _ in 0..*ticks {
            engine.tick();
        }
    }
    *engine.state()
}

pub fn preview_frames() -> Vec<PreviewFrame> {
    let cruise = fly(&[
        (InputAxes::left_stick(0.0, -0.8), 90),
        (InputAxes::left_stick(0.6, 0.0), 30),
        (
            InputAxes {
                yaw: Some(0.0),
                pitch: Some(-1.0),
                ..InputAxes::default()
            },
            120,
        ),
    ]);

    vec![
        PreviewFrame {
            name: "browser",
            host: Host::Browser,
            size: [1280, 720],
            state: DroneState::default(),
        },
        PreviewFrame {
            name: "browser-cruise",
            host: Host::Browser,
            size: [1280, 720],
            state: cruise,
        },
        PreviewFrame {
            name: "mini",
            host: Host::Mini,
            size: [390, 844],
            state: DroneState::default(),
        },
    ]
}
