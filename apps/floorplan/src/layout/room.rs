//! Room value types shared by the catalog, the placer and the renderer.

use serde::Serialize;

/// Width × height in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomSize {
    pub width: f64,
    pub height: f64,
}

impl RoomSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when both sides are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Size used for any room the catalog does not know.
pub const DEFAULT_ROOM_SIZE: RoomSize = RoomSize::new(3.0, 3.0);

/// One requested room: a name plus an optional explicit size that
/// overrides the catalog (e.g. from a `Kitchen: 4x3` line).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<RoomSize>,
}

impl RoomSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    pub fn sized(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            size: Some(RoomSize::new(width, height)),
        }
    }
}

impl From<&str> for RoomSpec {
    fn from(name: &str) -> Self {
        RoomSpec::new(name)
    }
}

/// A placed room. `(x, y)` is the top-left corner in meters; y grows downward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomInstance {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area: f64,
}

impl RoomInstance {
    pub fn new(name: impl Into<String>, x: f64, y: f64, size: RoomSize) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width: size.width,
            height: size.height,
            area: size.area(),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Extent of a layout measured from the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// The ordered rooms produced by one placer run. Order is placement order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub rooms: Vec<RoomInstance>,
}

impl Layout {
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoomInstance> {
        self.rooms.iter()
    }

    pub fn bounds(&self) -> Bounds {
        self.rooms.iter().fold(Bounds::default(), |acc, r| Bounds {
            width: acc.width.max(r.right()),
            height: acc.height.max(r.bottom()),
        })
    }

    pub fn total_area(&self) -> f64 {
        self.rooms.iter().map(|r| r.area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_derives_area() {
        let room = RoomInstance::new("bathroom", 0.0, 0.0, RoomSize::new(2.0, 2.5));
        assert!((room.area - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_cover_all_rooms() {
        let layout = Layout {
            rooms: vec![
                RoomInstance::new("a", 0.0, 0.0, RoomSize::new(4.0, 5.0)),
                RoomInstance::new("b", 5.0, 6.0, RoomSize::new(3.0, 3.0)),
            ],
        };
        assert_eq!(
            layout.bounds(),
            Bounds {
                width: 8.0,
                height: 9.0
            }
        );
        assert!((layout.total_area() - 29.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_layout_has_zero_bounds() {
        let layout = Layout::default();
        assert!(layout.is_empty());
        assert_eq!(layout.bounds(), Bounds::default());
    }

    #[test]
    fn test_room_size_validity() {
        assert!(RoomSize::new(1.0, 0.5).is_valid());
        assert!(!RoomSize::new(0.0, 2.0).is_valid());
        assert!(!RoomSize::new(f64::NAN, 2.0).is_valid());
        assert!(!RoomSize::new(3.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_spec_size_is_omitted_when_absent() {
        let json = serde_json::to_string(&RoomSpec::new("kitchen")).unwrap();
        assert_eq!(json, r#"{"name":"kitchen"}"#);
    }
}
