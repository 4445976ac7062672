//! 입력 값 묶음을 받아 파생 지표 전체를 만드는 계산 엔진.
//!
//! 엔진은 호출 사이에 상태를 갖지 않으므로 여러 스레드에서 동시에 호출해도 된다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::economics::{
    break_even_year, compute_cash_flow_projection, simple_payback_years, CashFlowProjection,
};
use crate::emission::{CountryFactorTable, EmissionFactorSource};
use crate::energy::{compute_core_metrics, compute_monthly_breakdown, MONTHS};
use crate::error::CalcError;
use crate::params::InputParameters;

/// 계산 결과. 만들어진 뒤에는 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// 절감 전 총 에너지 사용량 [kWh/년]
    pub total_energy_before_kwh: f64,
    /// 절감 후 에너지 사용량 [kWh/년]
    pub energy_after_kwh: f64,
    /// 절감 전 전기 요금 [USD/년]
    pub electricity_cost_before_usd: f64,
    /// 절감 후 전기 요금 [USD/년]
    pub electricity_cost_after_usd: f64,
    /// 연간 CO₂ 감축량 [kg/년]
    pub annual_co2_reduction_kg: f64,
    pub trees_planted_equivalent: f64,
    pub flats_equivalent: f64,
    pub cars_removed_equivalent: f64,
    /// 월별 절감량 [kWh] (가중치가 주어진 경우만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_energy_kwh: Option<[f64; MONTHS]>,
    /// 현금흐름 (투자 입력이 주어진 경우만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_flow: Option<CashFlowProjection>,
    /// 단순 회수기간 [년]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payback_period_years: Option<f64>,
}

impl DerivedMetrics {
    /// 연간 CO₂ 감축량 [t/년]
    pub fn annual_co2_reduction_tonnes(&self) -> f64 {
        self.annual_co2_reduction_kg / 1000.0
    }

    /// 누적 순 절감액이 처음 0 이상이 되는 연차.
    pub fn break_even_year(&self) -> Option<u32> {
        self.cash_flow.as_ref().and_then(break_even_year)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CalculationEngine {
    factors: &'static CountryFactorTable,
}

impl Default for CalculationEngine {
    fn default() -> Self {
        Self::new(CountryFactorTable::standard())
    }
}

impl CalculationEngine {
    pub fn new(factors: &'static CountryFactorTable) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &'static CountryFactorTable {
        self.factors
    }

    pub fn emission_factor(&self, source: &EmissionFactorSource) -> Result<f64, CalcError> {
        self.factors.resolve(source)
    }

    /// 기본 지표, 월별 분배, 현금흐름/회수기간을 차례로 계산한다.
    ///
    /// 어느 단계든 실패하면 부분 결과 없이 오류를 돌려준다.
    pub fn calculate(&self, input: &InputParameters) -> Result<DerivedMetrics, CalcError> {
        let mut metrics = compute_core_metrics(input)?;

        if let Some(weights) = &input.monthly_weights {
            metrics.monthly_energy_kwh = Some(compute_monthly_breakdown(
                input.energy_savings_kwh_per_year,
                weights,
            )?);
        }

        if let Some(investment) = &input.investment {
            let annual_savings = input.annual_savings_usd();
            let projection = compute_cash_flow_projection(
                investment.initial_investment_usd,
                investment.annual_software_fee_usd,
                annual_savings,
                investment.projection_years,
            )?;
            let payback = simple_payback_years(investment.initial_investment_usd, annual_savings)?;
            debug!(annual_savings, payback, "투자 회수 분석 완료");
            metrics.cash_flow = Some(projection);
            metrics.payback_period_years = Some(payback);
        }

        Ok(metrics)
    }
}
