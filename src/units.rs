mod currency;
mod energy;
mod rate;

pub use self::{
    currency::Kroner,
    energy::KilowattHours,
    rate::{KronerPerKilowattHour, OerePerKilowattHour},
};
