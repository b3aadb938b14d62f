use cityflight_core::Host;
use macroquad::prelude::*;

// Portrait phone frame.
fn window_conf() -> Conf {
    Conf {
        window_title: "City Flight Mini".to_owned(),
        window_width: 390,
        window_height: 844,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    cityflight_web_lib::run(Host::Mini).await;
}
