use crate::city::CityLayout;
use crate::config::InputConfig;

/// Presentation surface the game is embedded in. Physics and drawing are
/// identical across hosts; only layout, widget sizes and HUD chrome differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    Browser,
    Mini,
}

impl Host {
    pub fn name(self) -> &'static str {
        match self {
            Host::Browser => "browser",
            Host::Mini => "mini",
        }
    }

    pub fn layout(self) -> CityLayout {
        match self {
            Host::Browser => CityLayout::downtown(),
            Host::Mini => CityLayout::suburb(),
        }
    }

    pub fn stick_hit_radius(self, input: &InputConfig) -> f32 {
        match self {
            Host::Browser => input.browser_hit_radius,
            Host::Mini => input.mini_hit_radius,
        }
    }

    /// Whether a plain mouse drag can drive the sticks.
    pub fn accepts_mouse(self) -> bool {
        matches!(self, Host::Browser)
    }
}
