use crate::drone::FlightSnapshot;

/// Battery is cosmetic; there is no energy model behind it.
pub const BATTERY_PERCENT: u8 = 85;

pub fn height_readout(height: f32) -> String {
    format!("{height:.1} m")
}

pub fn position_readout(snapshot: &FlightSnapshot) -> String {
    format!(
        "X: {} Y: {} H: {}",
        snapshot.x.round() as i32,
        snapshot.y.round() as i32,
        snapshot.height.round() as i32
    )
}

pub fn heading_readout(snapshot: &FlightSnapshot) -> String {
    format!("HDG {:03}", snapshot.heading_degrees().round() as i32 % 360)
}

pub fn battery_readout() -> String {
    format!("{BATTERY_PERCENT}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(x: f32, y: f32, height: f32, rotation: f32) -> FlightSnapshot {
        FlightSnapshot {
            x,
            y,
            height,
            rotation,
        }
    }

    #[test]
    fn height_has_one_decimal() {
        assert_eq!(height_readout(0.0), "0.0 m");
        assert_eq!(height_readout(12.345), "12.3 m");
        assert_eq!(height_readout(200.0), "200.0 m");
    }

    #[test]
    fn position_rounds_each_axis() {
        assert_eq!(
            position_readout(&snapshot(301.6, 299.4, 10.5, 0.0)),
            "X: 302 Y: 299 H: 11"
        );
    }

    #[test]
    fn heading_is_folded_for_display() {
        assert_eq!(heading_readout(&snapshot(0.0, 0.0, 0.0, -90.0)), "HDG 270");
        assert_eq!(heading_readout(&snapshot(0.0, 0.0, 0.0, 719.8)), "HDG 000");
        assert_eq!(heading_readout(&snapshot(0.0, 0.0, 0.0, 45.0)), "HDG 045");
    }

    #[test]
    fn battery_badge_is_static() {
        assert_eq!(battery_readout(), "85%");
    }
}
