//! 투자 경제성(현금흐름, 회수기간) 계산 모듈 모음.

pub mod cash_flow;

pub use cash_flow::*;
