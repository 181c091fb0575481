//! Supporting enums and the shared error type.

use crate::identifiers::*;

/// Coarse passenger-load indicator for a vehicle.
///
/// Three levels only; nothing in the core derives it quantitatively,
/// it is carried through from the fleet roster for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupancy {
    Low,
    Medium,
    High,
}

impl Occupancy {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Amenity available at a stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facility {
    Shelter,
    Bench,
    Lighting,
    DigitalDisplay,
    WheelchairAccess,
    Wifi,
    BikeRack,
}

impl Facility {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "shelter" => Some(Self::Shelter),
            "bench" => Some(Self::Bench),
            "lighting" => Some(Self::Lighting),
            "digital_display" => Some(Self::DigitalDisplay),
            "wheelchair_access" => Some(Self::WheelchairAccess),
            "wifi" => Some(Self::Wifi),
            "bike_rack" => Some(Self::BikeRack),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Shelter => "shelter",
            Self::Bench => "bench",
            Self::Lighting => "lighting",
            Self::DigitalDisplay => "digital_display",
            Self::WheelchairAccess => "wheelchair_access",
            Self::Wifi => "wifi",
            Self::BikeRack => "bike_rack",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(VehicleIdentifier),

    #[error("Route not found: {0}")]
    RouteNotFound(RouteIdentifier),

    #[error("Stop not found: {0}")]
    StopNotFound(StopIdentifier),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
