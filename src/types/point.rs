use std::hash::{Hash, Hasher};

/// Planar map position
///
/// Coordinates are kept exactly as written in the mission file (meters).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// Mission coordinates are finite, so equality is reflexive in practice
impl Eq for Point2D {}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coordinate(self.x, state);
        hash_coordinate(self.y, state);
    }
}

/// Map position with altitude
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drop the altitude
    pub fn to_2d(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl Eq for Point3D {}

impl Hash for Point3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coordinate(self.x, state);
        hash_coordinate(self.y, state);
        hash_coordinate(self.z, state);
    }
}

// `0.0 == -0.0`, so both must hash the same
fn hash_coordinate<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits().hash(state);
}
