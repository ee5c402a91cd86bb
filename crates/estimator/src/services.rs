//! The five ecosystem-service indicators shown on the equalizer.
//!
//! Timber is the driver: it is the only service the user sets directly. The
//! other four are always derived from it through the regime's correlation row.

use serde::{Deserialize, Serialize};

/// Number of services on the equalizer (and the dimension of every
/// correlation matrix).
pub const SERVICE_COUNT: usize = 5;

/// Ecosystem service indicator, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    Timber,
    ClimateControl,
    HabitatMaintenance,
    WaterControl,
    Recreation,
}

impl Service {
    /// All services in index order.
    pub const ALL: [Service; SERVICE_COUNT] = [
        Service::Timber,
        Service::ClimateControl,
        Service::HabitatMaintenance,
        Service::WaterControl,
        Service::Recreation,
    ];

    /// Position of this service in output vectors and matrix rows.
    pub fn index(self) -> usize {
        match self {
            Service::Timber => 0,
            Service::ClimateControl => 1,
            Service::HabitatMaintenance => 2,
            Service::WaterControl => 3,
            Service::Recreation => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Service::Timber => "Timber",
            Service::ClimateControl => "Climate Control",
            Service::HabitatMaintenance => "Habitat Maintenance",
            Service::WaterControl => "Water Control",
            Service::Recreation => "Recreation",
        }
    }

    /// Slider colour as an `(r, g, b)` triple.
    pub fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Service::Timber => (0x8B, 0x45, 0x13),
            Service::ClimateControl => (0x8A, 0x2B, 0xE2),
            Service::HabitatMaintenance => (0x22, 0x8B, 0x22),
            Service::WaterControl => (0x1E, 0x90, 0xFF),
            Service::Recreation => (0xFF, 0xA5, 0x00),
        }
    }

    /// True for the one user-controlled service.
    pub fn is_driver(self) -> bool {
        self == Service::Timber
    }
}
