use serde::{Deserialize, Serialize};

/// The two stable Lagrange points a trojan can librate around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LagrangePoint {
    /// 60 degrees ahead of the planet.
    L4,
    /// 60 degrees behind the planet.
    L5,
}

impl LagrangePoint {
    /// Angular offset from the planet along its orbit, in radians.
    pub fn angle_offset(&self) -> f64 {
        match self {
            LagrangePoint::L4 => std::f64::consts::FRAC_PI_3,
            LagrangePoint::L5 => -std::f64::consts::FRAC_PI_3,
        }
    }
}

/// A co-orbital body jittered around its planet's L4 or L5 point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trojan {
    pub lagrange_point: LagrangePoint,
    /// Angular spread around the Lagrange point, in radians.
    pub offset_angle: f64,
    /// Radial spread in display units.
    pub offset_radius: f64,
    pub size: f64,
    pub color: String,
}
