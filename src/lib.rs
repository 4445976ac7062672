//! 에너지 절감량으로부터 비용, CO₂ 감축량, 환산 지표, 투자 회수를 계산하는 라이브러리.
//! 계산 로직만 담고 있어 CLI 외의 화면에서도 그대로 쓸 수 있다.

pub mod app;
pub mod config;
pub mod economics;
pub mod emission;
pub mod energy;
pub mod engine;
pub mod error;
pub mod params;
pub mod report;
pub mod ui_cli;

pub use engine::{CalculationEngine, DerivedMetrics};
pub use error::CalcError;
pub use params::{InputParameters, InvestmentInput, SavingsScale};
