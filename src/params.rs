use serde::{Deserialize, Serialize};

use crate::energy::MonthlyWeights;
use crate::error::{ensure_non_negative, CalcError};

/// ROI 분석 기본 기간 [년]
pub const DEFAULT_PROJECTION_YEARS: u32 = 10;

/// 절감률 입력의 표기 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsScale {
    /// 0~1 사이 소수 (0.05 = 5%)
    #[default]
    Fraction,
    /// 백분율 (5 = 5%), 계산 전에 100으로 나눈다.
    Percent,
}

impl SavingsScale {
    pub fn to_fraction(self, value: f64) -> f64 {
        match self {
            SavingsScale::Fraction => value,
            SavingsScale::Percent => value / 100.0,
        }
    }
}

/// 투자 회수(ROI) 분석 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// 초기 투자비 [USD]
    pub initial_investment_usd: f64,
    /// 연간 소프트웨어 사용료 [USD/년]
    pub annual_software_fee_usd: f64,
    /// 분석 기간 [년]
    #[serde(default = "default_projection_years")]
    pub projection_years: u32,
}

fn default_projection_years() -> u32 {
    DEFAULT_PROJECTION_YEARS
}

impl InvestmentInput {
    pub fn new(initial_investment_usd: f64, annual_software_fee_usd: f64) -> Self {
        Self {
            initial_investment_usd,
            annual_software_fee_usd,
            projection_years: DEFAULT_PROJECTION_YEARS,
        }
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        ensure_non_negative("initial_investment_usd", self.initial_investment_usd)?;
        ensure_non_negative("annual_software_fee_usd", self.annual_software_fee_usd)?;
        if self.projection_years == 0 {
            return Err(CalcError::invalid(
                "projection_years",
                0.0,
                "1년 이상이어야 합니다",
            ));
        }
        Ok(())
    }
}

/// 한 번의 계산에 쓰이는 입력 값 묶음. 계산 도중에는 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    /// 연간 에너지 절감량 [kWh/년]
    pub energy_savings_kwh_per_year: f64,
    /// 전력 배출계수 [kg CO₂/kWh]
    pub carbon_emission_factor_kg_per_kwh: f64,
    /// 전기 요금 단가 [USD/kWh]
    pub electricity_rate_usd_per_kwh: f64,
    /// 절감률 (0, 1]
    pub savings_percentage: f64,
    /// 있으면 현금흐름/회수기간까지 계산한다.
    #[serde(default)]
    pub investment: Option<InvestmentInput>,
    /// 있으면 월별 분배까지 계산한다.
    #[serde(default)]
    pub monthly_weights: Option<MonthlyWeights>,
}

impl InputParameters {
    pub fn new(
        energy_savings_kwh_per_year: f64,
        carbon_emission_factor_kg_per_kwh: f64,
        electricity_rate_usd_per_kwh: f64,
        savings_percentage: f64,
    ) -> Self {
        Self {
            energy_savings_kwh_per_year,
            carbon_emission_factor_kg_per_kwh,
            electricity_rate_usd_per_kwh,
            savings_percentage,
            investment: None,
            monthly_weights: None,
        }
    }

    /// 절감률이 백분율로 들어왔다면 소수로 바꾼다.
    pub fn with_savings_scale(mut self, scale: SavingsScale) -> Self {
        self.savings_percentage = scale.to_fraction(self.savings_percentage);
        self
    }

    pub fn with_investment(mut self, investment: InvestmentInput) -> Self {
        self.investment = Some(investment);
        self
    }

    pub fn with_monthly_weights(mut self, weights: MonthlyWeights) -> Self {
        self.monthly_weights = Some(weights);
        self
    }

    /// 연간 절감액 [USD/년] = 절감량 × 요금 단가
    pub fn annual_savings_usd(&self) -> f64 {
        self.energy_savings_kwh_per_year * self.electricity_rate_usd_per_kwh
    }

    /// 기본 계산에 필요한 입력을 검사한다.
    pub fn validate(&self) -> Result<(), CalcError> {
        ensure_non_negative("energy_savings_kwh_per_year", self.energy_savings_kwh_per_year)?;
        ensure_non_negative(
            "carbon_emission_factor_kg_per_kwh",
            self.carbon_emission_factor_kg_per_kwh,
        )?;
        ensure_non_negative(
            "electricity_rate_usd_per_kwh",
            self.electricity_rate_usd_per_kwh,
        )?;
        validate_savings_percentage(self.savings_percentage)?;
        if let Some(investment) = &self.investment {
            investment.validate()?;
        }
        Ok(())
    }
}

fn validate_savings_percentage(value: f64) -> Result<f64, CalcError> {
    if value == 0.0 {
        return Err(CalcError::DivisionByZero {
            quantity: "savings_percentage",
        });
    }
    let value = ensure_non_negative("savings_percentage", value)?;
    if value > 1.0 {
        return Err(CalcError::invalid(
            "savings_percentage",
            value,
            "1 이하의 비율이어야 합니다 (백분율이면 SavingsScale::Percent 사용)",
        ));
    }
    Ok(value)
}
