mod uuid;
mod wildcard;

pub use self::uuid::*;
