//! Screen-space chrome drawn over the scene: HUD, buttons, intro card.

use cityflight_core::hud::{battery_readout, heading_readout, height_readout, position_readout};
use cityflight_core::{FlightSnapshot, Host};
use macroquad::prelude::*;

use crate::input::{TapRect, TapTarget};

const PANEL: Color = Color::new(0.0, 0.0, 0.0, 0.5);
const PANEL_TEXT: Color = WHITE;
const ACCENT: Color = Color::new(0.984, 0.749, 0.141, 1.0);
const CROSSHAIR: Color = Color::new(1.0, 1.0, 1.0, 0.6);
const BATTERY_GREEN: Color = Color::new(0.133, 0.773, 0.369, 1.0);

pub const BUTTON_RADIUS: f32 = 24.0;
const BUTTON_MARGIN: f32 = 16.0;

pub fn back_button() -> TapTarget {
    TapTarget {
        center: [BUTTON_MARGIN + BUTTON_RADIUS, BUTTON_MARGIN + BUTTON_RADIUS],
        radius: BUTTON_RADIUS,
    }
}

/// Only the browser host offers a reset button; the mini host relies on re-entering the view.
pub fn reset_button(host: Host, view_width: f32) -> Option<TapTarget> {
    match host {
        Host::Browser => Some(TapTarget {
            center: [
                view_width - BUTTON_MARGIN - BUTTON_RADIUS,
                BUTTON_MARGIN + BUTTON_RADIUS,
            ],
            radius: BUTTON_RADIUS,
        }),
        Host::Mini => None,
    }
}

pub fn start_button(view_width: f32, view_height: f32) -> TapRect {
    let w = 200.0_f32.min(view_width - 40.0);
    let h = 56.0;
    TapRect {
        x: (view_width - w) / 2.0,
        y: view_height * 0.62,
        w,
        h,
    }
}

fn centered_text(text: &str, center_x: f32, baseline: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(text, center_x - dims.width / 2.0, baseline, size as f32, color);
}

pub fn draw_button(target: &TapTarget, glyph: &str) {
    let [x, y] = target.center;
    draw_circle(x, y, target.radius, PANEL);
    draw_circle_lines(x, y, target.radius, 2.0, PANEL_TEXT);
    let dims = measure_text(glyph, None, 24, 1.0);
    draw_text(
        glyph,
        x - dims.width / 2.0,
        y + dims.offset_y / 2.0,
        24.0,
        PANEL_TEXT,
    );
}

pub fn draw_intro(host: Host) {
    let w = screen_width();
    let h = screen_height();
    clear_background(Color::from_hex(0x1e293b));

    centered_text("City Flight", w / 2.0, h * 0.25, 48, ACCENT);
    let lines = [
        "Left stick: push up to climb, sideways to turn",
        "Right stick: push up to fly forward, sideways to strafe",
        "Release a stick to hold that axis at neutral",
    ];
    for (i, line) in lines.iter().enumerate() {
        centered_text(line, w / 2.0, h * 0.38 + i as f32 * 28.0, 20, PANEL_TEXT);
    }

    let start = start_button(w, h);
    draw_rectangle(start.x, start.y, start.w, start.h, ACCENT);
    centered_text("START", w / 2.0, start.y + start.h * 0.66, 28, BLACK);

    if host == Host::Browser {
        centered_text("Enter also starts", w / 2.0, start.y + start.h + 28.0, 16, GRAY);
    }
}

pub fn draw_browser_hud(snapshot: &FlightSnapshot) {
    let text = position_readout(snapshot);
    let heading = heading_readout(snapshot);
    let dims = measure_text(&text, None, 22, 1.0);
    let panel_w = dims.width + 140.0;
    let x = (screen_width() - panel_w) / 2.0;
    draw_rectangle(x, 16.0, panel_w, 40.0, PANEL);
    draw_text(&text, x + 16.0, 43.0, 22.0, PANEL_TEXT);
    draw_text(&heading, x + dims.width + 40.0, 43.0, 22.0, ACCENT);
}

pub fn draw_mini_hud(snapshot: &FlightSnapshot) {
    let w = screen_width();
    let h = screen_height();

    let height = height_readout(snapshot.height);
    let dims = measure_text(&height, None, 32, 1.0);
    let panel_w = dims.width + 32.0;
    draw_rectangle((w - panel_w) / 2.0, 16.0, panel_w, 48.0, PANEL);
    centered_text(&height, w / 2.0, 50.0, 32, PANEL_TEXT);

    let battery = battery_readout();
    let badge_w = 64.0;
    let badge_x = w - badge_w - 16.0;
    draw_rectangle(badge_x, 72.0, badge_w, 28.0, PANEL);
    draw_rectangle_lines(badge_x, 72.0, badge_w, 28.0, 2.0, BATTERY_GREEN);
    centered_text(&battery, badge_x + badge_w / 2.0, 92.0, 20, BATTERY_GREEN);

    let (cx, cy) = (w / 2.0, h / 2.0);
    draw_line(cx - 12.0, cy, cx + 12.0, cy, 1.5, CROSSHAIR);
    draw_line(cx, cy - 12.0, cx, cy + 12.0, 1.5, CROSSHAIR);
    draw_circle_lines(cx, cy, 20.0, 1.0, CROSSHAIR);
}

pub fn draw_fps(fps: f32) {
    draw_text(
        &format!("fps: {:.1}", fps),
        16.0,
        screen_height() - 12.0,
        18.0,
        PANEL_TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_button_only_on_browser() {
        assert!(reset_button(Host::Mini, 390.0).is_none());
        let reset = reset_button(Host::Browser, 1280.0).unwrap();
        assert!(reset.hit([1280.0 - 40.0, 40.0]));
        assert!(!back_button().hit(reset.center));
    }

    #[test]
    fn start_button_fits_narrow_views() {
        let start = start_button(180.0, 600.0);
        assert!(start.x >= 0.0);
        assert!(start.x + start.w <= 180.0);
    }
}
