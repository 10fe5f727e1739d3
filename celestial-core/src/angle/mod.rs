pub mod normalize;

pub use normalize::wrap_0_2pi;
