use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use serde::{Deserialize, Serialize};

use crate::units::{KilowattHours, KronerPerKilowattHour};

/// An amount of money in Norwegian kroner.
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
pub struct Kroner(pub f64);

impl Kroner {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Kroner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kr", self.0)
    }
}

impl Debug for Kroner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}kr", self.0)
    }
}

impl Div<KilowattHours> for Kroner {
    type Output = KronerPerKilowattHour;

    fn div(self, rhs: KilowattHours) -> Self::Output {
        KronerPerKilowattHour(self.0 / rhs.0)
    }
}
