pub mod align;
pub mod config;
pub mod distance;
pub mod neighbors;
