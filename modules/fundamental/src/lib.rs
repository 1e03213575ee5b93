pub mod endpoints;
pub mod error;
pub mod hero;
pub mod hero_power;
pub mod openapi;
pub mod power;

pub use endpoints::configure;
pub use error::Error;
pub use openapi::openapi;

#[cfg(test)]
pub mod test;
