//! 에너지/비용 기본 지표와 월별 분배 계산 모듈 모음.

pub mod core_metrics;
pub mod monthly;

pub use core_metrics::*;
pub use monthly::*;
