//! Static, decorative city layouts. Nothing here is collidable.

use crate::drone::WORLD_SIZE;
use crate::painter::Color;

pub const GROUND_COLOR: Color = Color::hex(0xe5e5e5);
pub const ROAD_COLOR: Color = Color::hex(0x9ca3af);
pub const LANE_COLOR: Color = Color::hex(0xffffff);
pub const BUILDING_COLOR: Color = Color::hex(0x64748b);
pub const BUILDING_DARK_COLOR: Color = Color::hex(0x475569);
pub const PARK_COLOR: Color = Color::hex(0x86efac);
pub const TREE_COLOR: Color = Color::hex(0x22c55e);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lot {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneMarking {
    pub width: f32,
    pub dash: [f32; 2],
    pub color: Color,
}

/// Roads run both ways at `offset + k * pitch` for every position below the world edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadGrid {
    pub offset: f32,
    pub pitch: f32,
    pub width: f32,
    pub color: Color,
    pub lane: Option<LaneMarking>,
}

impl RoadGrid {
    pub fn positions(&self, extent: f32) -> impl Iterator<Item = f32> + '_ {
        let pitch = self.pitch.max(1.0);
        (0..)
            .map(move |index| self.offset + index as f32 * pitch)
            .take_while(move |&position| position < extent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityLayout {
    pub size: [f32; 2],
    pub ground: Color,
    pub roads: RoadGrid,
    pub buildings: Vec<Lot>,
    pub parks: Vec<Lot>,
    pub trees: Vec<Disc>,
}

impl CityLayout {
    /// Dense downtown grid with dashed lane markings.
    pub fn downtown() -> Self {
        Self {
            size: [WORLD_SIZE, WORLD_SIZE],
            ground: GROUND_COLOR,
            roads: RoadGrid {
                offset: 100.0,
                pitch: 200.0,
                width: 40.0,
                color: ROAD_COLOR,
                lane: Some(LaneMarking {
                    width: 2.0,
                    dash: [20.0, 20.0],
                    color: LANE_COLOR,
                }),
            },
            buildings: vec![
                lot(20.0, 20.0, 60.0, 60.0, BUILDING_COLOR),
                lot(220.0, 20.0, 160.0, 60.0, BUILDING_COLOR),
                lot(20.0, 220.0, 60.0, 160.0, BUILDING_COLOR),
                lot(220.0, 220.0, 160.0, 160.0, BUILDING_DARK_COLOR),
            ],
            parks: vec![lot(420.0, 20.0, 100.0, 100.0, PARK_COLOR)],
            trees: vec![Disc {
                center: [470.0, 70.0],
                radius: 30.0,
                color: TREE_COLOR,
            }],
        }
    }

    /// Coarse grid with large blocks, sized for a phone screen.
    pub fn suburb() -> Self {
        Self {
            size: [WORLD_SIZE, WORLD_SIZE],
            ground: GROUND_COLOR,
            roads: RoadGrid {
                offset: 0.0,
                pitch: 400.0,
                width: 40.0,
                color: ROAD_COLOR,
                lane: None,
            },
            buildings: vec![
                lot(100.0, 100.0, 200.0, 200.0, BUILDING_COLOR),
                lot(500.0, 500.0, 300.0, 300.0, BUILDING_COLOR),
                lot(800.0, 200.0, 150.0, 400.0, BUILDING_COLOR),
            ],
            parks: vec![lot(500.0, 100.0, 200.0, 200.0, PARK_COLOR)],
            trees: Vec::new(),
        }
    }
}

fn lot(x: f32, y: f32, w: f32, h: f32, color: Color) -> Lot {
    Lot {
        rect: Rect::new(x, y, w, h),
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downtown_roads_start_off_edge() {
        let layout = CityLayout::downtown();
        let roads: Vec<f32> = layout.roads.positions(layout.size[0]).collect();
        assert_eq!(roads.len(), 10);
        assert_eq!(roads[0], 100.0);
        assert_eq!(roads[9], 1900.0);
    }

    #[test]
    fn suburb_roads_start_on_edge() {
        let layout = CityLayout::suburb();
        let roads: Vec<f32> = layout.roads.positions(layout.size[1]).collect();
        assert_eq!(roads, vec![0.0, 400.0, 800.0, 1200.0, 1600.0]);
        assert!(layout.roads.lane.is_none());
    }

    #[test]
    fn lots_fit_inside_world() {
        for layout in [CityLayout::downtown(), CityLayout::suburb()] {
            for lot in layout.buildings.iter().chain(layout.parks.iter()) {
                assert!(lot.rect.x >= 0.0 && lot.rect.x + lot.rect.w <= layout.size[0]);
                assert!(lot.rect.y >= 0.0 && lot.rect.y + lot.rect.h <= layout.size[1]);
            }
        }
    }
}
