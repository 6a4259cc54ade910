#[cfg(test)]
mod tests;
mod utils;
mod uuid;
mod wildcard;

pub use self::uuid::*;
pub use self::wildcard::*;
