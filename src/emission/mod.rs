//! 배출계수 표와 CO₂ 환산 지표 모듈 모음.

pub mod country_factors;
pub mod equivalence;

pub use country_factors::*;
pub use equivalence::*;
