pub mod length;
pub mod number_density;
pub mod time;

#[cfg(test)]
mod number_density_test;
#[cfg(test)]
mod time_test;

pub use length::Length;
pub use number_density::NumberDensity;
pub use time::Time;
