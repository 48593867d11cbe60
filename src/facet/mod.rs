pub mod ordinals;
pub mod counts;
