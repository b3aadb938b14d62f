use crate::config::FlightConfig;
use crate::drone::{DroneState, FlightSnapshot, InputAxes};
use crate::engine::FlightEngine;
use crate::host::Host;
use crate::painter::Painter;
use crate::scene::{LoopPhase, RenderLoop, SceneRenderer};
use crate::ticker::FixedTicker;

/// One game view: the engine plus its two periodic activities.
///
/// Everything runs on the host's single frame loop. Each frame the host feeds
/// input, then [`FlightSession::advance`] runs the due physics steps, then
/// [`FlightSession::render`] paints the state those steps produced. No reader
/// ever observes a half-applied step.
#[derive(Debug, Clone)]
pub struct FlightSession {
    host: Host,
    engine: FlightEngine,
    ticker: FixedTicker,
    render_loop: RenderLoop,
    renderer: SceneRenderer,
}

impl FlightSession {
    pub fn new(config: &FlightConfig, host: Host) -> Self {
        let mut render_loop = RenderLoop::new();
        render_loop.stop();
        Self {
            host,
            engine: FlightEngine::new(config.physics),
            ticker: FixedTicker::from_config(&config.physics),
            render_loop,
            renderer: SceneRenderer::new(host.layout()),
        }
    }

    pub fn host(&self) -> Host {
        self.host
    }

    pub fn is_mounted(&self) -> bool {
        self.ticker.is_running()
    }

    /// Enter the game view: fresh state, both loops armed.
    pub fn mount(&mut self) {
        self.engine.reset();
        self.ticker.start();
        self.render_loop.restart();
        log::info!("flight view mounted on {} host", self.host.name());
    }

    /// Leave the game view: both loops cancelled, state discarded.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.ticker.stop();
        self.render_loop.stop();
        self.engine.reset();
        log::info!(
            "flight view unmounted after {} ticks, {} frames",
            self.ticker.ticks(),
            self.render_loop.frames()
        );
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn set_inputs(&mut self, inputs: InputAxes) {
        if inputs.is_empty() {
            return;
        }
        self.engine.set_inputs(inputs);
    }

    /// Run every physics step that is due after `frame_seconds` of wall time.
    pub fn advance(&mut self, frame_seconds: f32) -> u32 {
        let due = self.ticker.advance(frame_seconds);
        for _ in 0..due {
            self.engine.tick();
        }
        due
    }

    /// Draw the current state if the render loop is live. Returns whether a frame was painted.
    pub fn render<P: Painter + ?Sized>(&mut self, painter: &mut P) -> bool {
        if !self.render_loop.begin_frame(painter.viewport()) {
            return false;
        }
        self.renderer.draw_frame(painter, self.engine.state());
        true
    }

    pub fn render_phase(&self) -> LoopPhase {
        self.render_loop.phase()
    }

    pub fn state(&self) -> &DroneState {
        self.engine.state()
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        self.engine.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::tests::RecordingPainter;

    fn mounted() -> FlightSession {
        let mut session = FlightSession::new(&FlightConfig::default(), Host::Browser);
        session.mount();
        session
    }

    #[test]
    fn unmounted_session_neither_ticks_nor_draws() {
        let mut session = FlightSession::new(&FlightConfig::default(), Host::Mini);
        session.set_inputs(InputAxes::left_stick(1.0, 0.0));
        assert_eq!(session.advance(1.0), 0);
        let mut painter = RecordingPainter::new([320.0, 480.0]);
        assert!(!session.render(&mut painter));
        assert!(painter.ops.is_empty());
    }

    #[test]
    fn frame_time_drives_fixed_steps() {
        let mut session = mounted();
        session.set_inputs(InputAxes::left_stick(1.0, 0.0));
        assert_eq!(session.advance(0.05), 3);
        assert_eq!(session.state().rotation, 6.0);
    }

    #[test]
    fn render_reads_state_after_latest_tick() {
        let mut session = mounted();
        let mut painter = RecordingPainter::new([600.0, 400.0]);
        session.set_inputs(InputAxes::right_stick(0.0, -1.0));
        session.advance(0.016);
        assert!(session.render(&mut painter));

        // Camera follows the drone that has already moved 2 units.
        let ground = painter
            .ops
            .iter()
            .find_map(|op| match op {
                crate::scene::tests::Op::Rect(rect, _) => Some([rect[0], rect[1]]),
                _ => None,
            })
            .unwrap();
        assert!((ground[0] - (300.0 - 302.0)).abs() < 1e-3);
    }

    #[test]
    fn render_waits_for_surface() {
        let mut session = mounted();
        let mut hidden = RecordingPainter::new([0.0, 0.0]);
        assert!(!session.render(&mut hidden));
        assert_eq!(session.render_phase(), LoopPhase::AwaitingSurface);

        let mut shown = RecordingPainter::new([100.0, 100.0]);
        assert!(session.render(&mut shown));
        assert_eq!(session.render_phase(), LoopPhase::Running);
    }

    #[test]
    fn unmount_cancels_loops_and_resets() {
        let mut session = mounted();
        session.set_inputs(InputAxes::left_stick(0.0, -1.0));
        session.advance(0.16);
        assert!(session.state().height > 0.0);

        session.unmount();
        assert!(!session.is_mounted());
        assert_eq!(*session.state(), DroneState::default());
        assert_eq!(session.advance(1.0), 0);
        assert_eq!(session.render_phase(), LoopPhase::Stopped);
    }

    #[test]
    fn reset_mid_flight_keeps_session_running() {
        let mut session = mounted();
        session.set_inputs(InputAxes::right_stick(1.0, -1.0));
        session.set_inputs(InputAxes::left_stick(0.0, -1.0));
        session.advance(0.1);
        assert_ne!(*session.state(), DroneState::default());

        session.reset();
        assert_eq!(*session.state(), DroneState::default());
        assert!(session.is_mounted());
        assert_eq!(session.advance(0.016), 1);
    }

    #[test]
    fn remount_starts_from_defaults() {
        let mut session = mounted();
        session.set_inputs(InputAxes::right_stick(1.0, 1.0));
        session.advance(0.1);
        session.unmount();
        session.mount();
        assert_eq!(*session.state(), DroneState::default());
        assert_eq!(session.advance(0.016), 1);
    }
}
