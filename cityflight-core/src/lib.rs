pub mod city;
pub mod config;
pub mod drone;
pub mod engine;
pub mod host;
pub mod hud;
pub mod joystick;
pub mod painter;
pub mod scene;
pub mod session;
pub mod ticker;

pub use city::{CityLayout, Disc, LaneMarking, Lot, Rect, RoadGrid};
pub use config::{
    CONFIG_FILE_NAME, ConfigError, DebugConfig, FlightConfig, InputConfig, PhysicsConfig,
};
pub use drone::{DEFAULT_SPAWN, DroneState, FlightSnapshot, InputAxes, MAX_HEIGHT, WORLD_SIZE};
pub use engine::FlightEngine;
pub use host::Host;
pub use joystick::{Joystick, PointerId, StickVector};
pub use painter::{Affine2, Color, Painter, TransformStack, dash_segments};
pub use scene::{DroneGlyph, LoopPhase, RenderLoop, SceneRenderer, camera_offset, shadow_scale};
pub use session::FlightSession;
pub use ticker::FixedTicker;
