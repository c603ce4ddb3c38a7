use crate::types::{Point2D, TargetPriority, TargetType};

/// Mission objective from `Target`
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub target_type: TargetType,
    pub priority: TargetPriority,
    pub in_sleep_mode: bool,
    /// Minutes
    pub delay: i32,
    /// `None` for target types without known extra fields
    pub extension: Option<TargetExtension>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TargetExtension {
    /// Destroy, escort or cover a unit or flight
    Object(ObjectTarget),
    /// Destroy or cover a bridge
    Bridge(BridgeTarget),
    /// Destroy or cover everything in an area
    Area(AreaTarget),
    Recon(ReconTarget),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTarget {
    /// Percent of the object to destroy
    pub destruction_level: i32,
    pub pos: Point2D,
    pub object: TargetObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeTarget {
    pub pos: Point2D,
    pub object: BridgeObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaTarget {
    pub destruction_level: i32,
    pub pos: Point2D,
    pub radius: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReconTarget {
    pub requires_landing: bool,
    pub pos: Point2D,
    pub radius: i32,
    pub object: Option<TargetObject>,
}

/// Unit or flight referenced by a target
#[derive(Debug, Clone, PartialEq)]
pub struct TargetObject {
    /// Route point of the object the target refers to
    pub waypoint: i32,
    pub id: String,
    pub pos: Point2D,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeObject {
    pub id: String,
    pub pos: Point2D,
}
