//! Exports read and called by the page (or mini-program shell) around the canvas.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};

use cityflight_core::FlightSnapshot;
#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;

static PENDING_RESET: AtomicBool = AtomicBool::new(false);
static PENDING_EXIT: AtomicBool = AtomicBool::new(false);
static FLIGHT_ACTIVE: AtomicBool = AtomicBool::new(false);

#[derive(Default)]
struct PublishedFlight {
    snapshot: FlightSnapshot,
    json: String,
}

fn published() -> MutexGuard<'static, PublishedFlight> {
    static PUBLISHED: OnceLock<Mutex<PublishedFlight>> = OnceLock::new();
    PUBLISHED
        .get_or_init(|| {
            let snapshot = FlightSnapshot::default();
            Mutex::new(PublishedFlight {
                json: snapshot.to_json(),
                snapshot,
            })
        })
        .lock()
        // A panic mid-publish leaves plain data behind; keep serving it.
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Called once per frame after the physics steps ran.
pub fn publish(snapshot: FlightSnapshot, active: bool) {
    FLIGHT_ACTIVE.store(active, Ordering::SeqCst);
    let mut slot = published();
    if slot.snapshot == snapshot && !slot.json.is_empty() {
        return;
    }
    slot.snapshot = snapshot;
    slot.json = snapshot.to_json();
}

pub fn take_reset_request() -> bool {
    PENDING_RESET.swap(false, Ordering::SeqCst)
}

pub fn take_exit_request() -> bool {
    PENDING_EXIT.swap(false, Ordering::SeqCst)
}

fn log_bridge_call(label: &str) {
    #[cfg(target_arch = "wasm32")]
    miniquad::info!("{}", label);
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("{}", label);
}

#[unsafe(no_mangle)]
pub extern "C" fn flight_active() -> i32 {
    if FLIGHT_ACTIVE.load(Ordering::SeqCst) { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn flight_height() -> f32 {
    published().snapshot.height
}

#[unsafe(no_mangle)]
pub extern "C" fn flight_x() -> f32 {
    published().snapshot.x
}

#[unsafe(no_mangle)]
pub extern "C" fn flight_y() -> f32 {
    published().snapshot.y
}

#[unsafe(no_mangle)]
pub extern "C" fn flight_rotation() -> f32 {
    published().snapshot.rotation
}

/// Pointer stays valid until the next frame republishes; read it together with the length.
#[unsafe(no_mangle)]
pub extern "C" fn flight_snapshot_json_ptr() -> *const u8 {
    published().json.as_ptr()
}

#[unsafe(no_mangle)]
pub extern "C" fn flight_snapshot_json_len() -> usize {
    published().json.len()
}

#[unsafe(no_mangle)]
pub extern "C" fn flight_request_reset() {
    log_bridge_call("bridge: reset requested");
    PENDING_RESET.store(true, Ordering::SeqCst);
}

#[unsafe(no_mangle)]
pub extern "C" fn flight_request_exit() {
    log_bridge_call("bridge: exit requested");
    PENDING_EXIT.store(true, Ordering::SeqCst);
}
