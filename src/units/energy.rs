use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use serde::{Deserialize, Serialize};

use crate::units::{Kroner, KronerPerKilowattHour};

/// Energy in kilowatt-hours.
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
pub struct KilowattHours(pub f64);

impl KilowattHours {
    pub const ZERO: Self = Self(0.0);
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}kWh", self.0)
    }
}

impl Mul<KronerPerKilowattHour> for KilowattHours {
    type Output = Kroner;

    fn mul(self, rhs: KronerPerKilowattHour) -> Self::Output {
        Kroner(self.0 * rhs.0)
    }
}
