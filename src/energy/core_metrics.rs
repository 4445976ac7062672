use tracing::debug;

use crate::emission::equivalences;
use crate::engine::DerivedMetrics;
use crate::error::{ensure_finite_result, CalcError};
use crate::params::InputParameters;

/// 절감 전후 에너지/비용, CO₂ 감축량과 환산 지표를 계산한다.
///
/// 각 단계는 앞 단계 값이나 입력만 사용한다. 월별 분배와 현금흐름은 채우지 않는다.
pub fn compute_core_metrics(input: &InputParameters) -> Result<DerivedMetrics, CalcError> {
    input.validate()?;

    let energy_savings = input.energy_savings_kwh_per_year;
    let rate = input.electricity_rate_usd_per_kwh;
    let factor = input.carbon_emission_factor_kg_per_kwh;

    let total_energy_before_kwh = ensure_finite_result(
        energy_savings / input.savings_percentage,
        "savings_percentage",
        input.savings_percentage,
    )?;
    let energy_after_kwh = total_energy_before_kwh - energy_savings;
    let electricity_cost_before_usd = ensure_finite_result(
        total_energy_before_kwh * rate,
        "electricity_rate_usd_per_kwh",
        rate,
    )?;
    let electricity_cost_after_usd = energy_after_kwh * rate;
    let annual_co2_reduction_kg = ensure_finite_result(
        energy_savings * factor,
        "carbon_emission_factor_kg_per_kwh",
        factor,
    )?;
    let eq = equivalences(annual_co2_reduction_kg);

    debug!(
        total_energy_before_kwh,
        energy_after_kwh, annual_co2_reduction_kg, "기본 지표 계산 완료"
    );

    Ok(DerivedMetrics {
        total_energy_before_kwh,
        energy_after_kwh,
        electricity_cost_before_usd,
        electricity_cost_after_usd,
        annual_co2_reduction_kg,
        trees_planted_equivalent: eq.trees_planted,
        flats_equivalent: eq.flats,
        cars_removed_equivalent: eq.cars_removed,
        monthly_energy_kwh: None,
        cash_flow: None,
        payback_period_years: None,
    })
}
