use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Kroner per kilowatt-hour.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::Sum,
)]
pub struct KronerPerKilowattHour(pub f64);

impl KronerPerKilowattHour {
    pub const ZERO: Self = Self(0.0);
}

impl Display for KronerPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} kr/kWh", self.0)
    }
}

impl Debug for KronerPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}kr/kWh", self.0)
    }
}

/// Øre per kilowatt-hour, the sub-unit form in which the supplier markup
/// is billed (100 øre = 1 krone).
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct OerePerKilowattHour(pub f64);

impl OerePerKilowattHour {
    pub const ZERO: Self = Self(0.0);

    /// Convert to main-unit currency for blending.
    pub fn to_kroner(self) -> KronerPerKilowattHour {
        KronerPerKilowattHour(self.0 / 100.0)
    }
}

impl Display for OerePerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} øre/kWh", self.0)
    }
}

impl Debug for OerePerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}øre/kWh", self.0)
    }
}
