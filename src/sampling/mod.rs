//! Stratified sampling: proportion rounding and the constrained draw.

pub mod rounding;
pub mod stratified;

pub use rounding::largest_remainder;
pub use stratified::StratifiedSampler;
