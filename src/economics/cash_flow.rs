use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_finite_result, ensure_non_negative, CalcError};

/// 한 해의 현금흐름.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowYear {
    /// 0부터 시작하는 연차. 0년차에 초기 투자비가 들어간다.
    pub year: u32,
    /// 순 절감액 [USD] = 연간 절감액 - 해당 연도 총비용
    pub annual_net_usd: f64,
    /// 누적 순 절감액 [USD]
    pub cumulative_net_usd: f64,
}

/// 분석 기간 전체의 현금흐름.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    pub annual_savings_usd: f64,
    pub years: Vec<CashFlowYear>,
}

impl CashFlowProjection {
    pub fn final_cumulative_usd(&self) -> Option<f64> {
        self.years.last().map(|y| y.cumulative_net_usd)
    }
}

/// 연도별 순 절감액과 누적액을 계산한다.
///
/// 총비용은 0년차에 초기 투자비 + 사용료, 이후에는 사용료만이다.
/// 누적액은 0년차부터 순서대로 더한 값이다.
pub fn compute_cash_flow_projection(
    initial_investment_usd: f64,
    annual_software_fee_usd: f64,
    annual_savings_usd: f64,
    projection_years: u32,
) -> Result<CashFlowProjection, CalcError> {
    let investment = ensure_non_negative("initial_investment_usd", initial_investment_usd)?;
    let fee = ensure_non_negative("annual_software_fee_usd", annual_software_fee_usd)?;
    let savings = ensure_non_negative("annual_savings_usd", annual_savings_usd)?;
    if projection_years == 0 {
        return Err(CalcError::invalid(
            "projection_years",
            0.0,
            "1년 이상이어야 합니다",
        ));
    }

    let mut years = Vec::with_capacity(projection_years as usize);
    let mut cumulative = 0.0;
    for year in 0..projection_years {
        let total_cost = if year == 0 { investment + fee } else { fee };
        let net = ensure_finite_result(savings - total_cost, "initial_investment_usd", investment)?;
        cumulative = ensure_finite_result(cumulative + net, "annual_savings_usd", savings)?;
        years.push(CashFlowYear {
            year,
            annual_net_usd: net,
            cumulative_net_usd: cumulative,
        });
    }
    debug!(
        projection_years,
        final_cumulative = cumulative,
        "현금흐름 계산 완료"
    );
    Ok(CashFlowProjection {
        annual_savings_usd: savings,
        years,
    })
}

/// 단순 회수기간 [년] = 초기 투자비 / 연간 절감액
pub fn simple_payback_years(
    initial_investment_usd: f64,
    annual_savings_usd: f64,
) -> Result<f64, CalcError> {
    let investment = ensure_non_negative("initial_investment_usd", initial_investment_usd)?;
    let savings = ensure_non_negative("annual_savings_usd", annual_savings_usd)?;
    if savings == 0.0 {
        return Err(CalcError::DivisionByZero {
            quantity: "annual_savings_usd",
        });
    }
    Ok(investment / savings)
}

/// 누적 순 절감액이 처음으로 0 이상이 되는 연차. 기간 내에 없으면 `None`.
pub fn break_even_year(projection: &CashFlowProjection) -> Option<u32> {
    projection
        .years
        .iter()
        .find(|y| y.cumulative_net_usd >= 0.0)
        .map(|y| y.year)
}
