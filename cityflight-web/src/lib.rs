mod bridge;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod input;
pub mod logging;
pub mod overlay;
pub mod painter;
pub mod sticks;

use cityflight_core::{FlightConfig, FlightSession, Host};
use macroquad::prelude::*;

use crate::input::PointerEvent;
use crate::painter::MacroquadPainter;
use crate::sticks::StickPad;

pub use bridge::{
    flight_active, flight_height, flight_request_exit, flight_request_reset, flight_rotation,
    flight_snapshot_json_len, flight_snapshot_json_ptr, flight_x, flight_y,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Intro,
    Flight,
}

struct GameApp {
    host: Host,
    show_fps: bool,
    screen: Screen,
    session: FlightSession,
    sticks: StickPad,
    fps: f32,
    fps_frame_count: u32,
    fps_last_update_time: f64,
}

impl GameApp {
    fn new(host: Host, config: &FlightConfig) -> Self {
        Self {
            host,
            show_fps: config.debug.show_fps,
            screen: Screen::Intro,
            session: FlightSession::new(config, host),
            sticks: StickPad::new(host, &config.input),
            fps: 0.0,
            fps_frame_count: 0,
            fps_last_update_time: get_time(),
        }
    }

    fn enter_flight(&mut self) {
        self.screen = Screen::Flight;
        self.session.mount();
    }

    fn leave_flight(&mut self) {
        for axes in self.sticks.cancel_all() {
            self.session.set_inputs(axes);
        }
        self.session.unmount();
        self.screen = Screen::Intro;
    }

    fn update_fps_if_due(&mut self) {
        let now = get_time();
        self.fps_frame_count += 1;
        let elapsed = now - self.fps_last_update_time;
        if elapsed >= 1.0 {
            self.fps = self.fps_frame_count as f32 / elapsed as f32;
            self.fps_frame_count = 0;
            self.fps_last_update_time = now;
        }
    }

    fn frame(&mut self) {
        let events = input::pointer_events(self.host.accepts_mouse());
        match self.screen {
            Screen::Intro => self.intro_frame(&events),
            Screen::Flight => self.flight_frame(&events),
        }
        bridge::publish(self.session.snapshot(), self.session.is_mounted());
    }

    fn intro_frame(&mut self, events: &[PointerEvent]) {
        // The page may ask to leave while no flight is running.
        bridge::take_exit_request();
        bridge::take_reset_request();

        overlay::draw_intro(self.host);
        let start = overlay::start_button(screen_width(), screen_height());
        let keyboard_start = self.host == Host::Browser && is_key_pressed(KeyCode::Enter);
        if start.tapped(events) || keyboard_start {
            self.enter_flight();
        }
    }

    fn flight_frame(&mut self, events: &[PointerEvent]) {
        let width = screen_width();
        let height = screen_height();
        let back = overlay::back_button();
        let reset = overlay::reset_button(self.host, width);

        if back.tapped(events) || bridge::take_exit_request() || is_key_pressed(KeyCode::Escape) {
            self.leave_flight();
            return;
        }
        let reset_tapped = reset.is_some_and(|button| button.tapped(events));
        if reset_tapped || bridge::take_reset_request() {
            self.session.reset();
        }

        // Presses on the buttons never reach the sticks.
        let stick_events: Vec<PointerEvent> = events
            .iter()
            .copied()
            .filter(|event| match *event {
                PointerEvent::Down(_, position) => {
                    !back.hit(position) && !reset.is_some_and(|button| button.hit(position))
                }
                _ => true,
            })
            .collect();

        self.sticks.layout(width, height);
        for axes in self.sticks.handle(&stick_events) {
            self.session.set_inputs(axes);
        }

        self.session.advance(get_frame_time());

        let mut painter = MacroquadPainter::full_window();
        if !self.session.render(&mut painter) {
            clear_background(BLACK);
        }

        let snapshot = self.session.snapshot();
        match self.host {
            Host::Browser => overlay::draw_browser_hud(&snapshot),
            Host::Mini => overlay::draw_mini_hud(&snapshot),
        }
        overlay::draw_button(&back, "<");
        if let Some(reset) = reset {
            overlay::draw_button(&reset, "R");
        }
        self.sticks.draw();

        if self.show_fps {
            overlay::draw_fps(self.fps);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn startup_config() -> FlightConfig {
    let (config, warnings) = cli::load_config();
    logging::init_logging(&config.debug.log_level);
    for warning in warnings {
        logging::warn(&warning);
    }
    config
}

// No filesystem or argv in the browser; the page ships with defaults.
#[cfg(target_arch = "wasm32")]
fn startup_config() -> FlightConfig {
    let config = FlightConfig::default();
    logging::init_logging(&config.debug.log_level);
    config
}

pub async fn run(host: Host) {
    logging::install_panic_hook();
    let config = startup_config();
    logging::info(&format!("starting {} host", host.name()));

    // Touches are handled as touches; emulated mouse presses would double them.
    simulate_mouse_with_touch(false);

    let mut app = GameApp::new(host, &config);

    loop {
        app.update_fps_if_due();
        app.frame();
        next_frame().await;
    }
}
