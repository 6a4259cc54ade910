mod encode;
mod interface;

pub use encode::*;
