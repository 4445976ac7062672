use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite_result, ensure_non_negative, CalcError};

pub const MONTHS: usize = 12;

/// 기본 월별 부하 가중치 (1월~12월). 냉방 부하가 큰 한여름에 높다.
pub const DEFAULT_MONTHLY_WEIGHTS: [f64; MONTHS] =
    [0.85, 0.85, 0.95, 1.0, 1.05, 1.1, 1.15, 1.15, 1.05, 1.0, 0.95, 0.9];

/// 12개월 상대 부하 가중치. 모든 값은 0보다 큰 유한값이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct MonthlyWeights([f64; MONTHS]);

impl MonthlyWeights {
    pub fn new(weights: [f64; MONTHS]) -> Result<Self, CalcError> {
        for &w in &weights {
            if !w.is_finite() || w <= 0.0 {
                return Err(CalcError::invalid(
                    "monthly_weights",
                    w,
                    "월별 가중치는 0보다 큰 유한값이어야 합니다",
                ));
            }
        }
        let sum: f64 = weights.iter().sum();
        if !sum.is_finite() {
            return Err(CalcError::invalid(
                "monthly_weights",
                sum,
                "월별 가중치 합계가 f64 범위를 넘습니다",
            ));
        }
        Ok(Self(weights))
    }

    pub fn as_array(&self) -> &[f64; MONTHS] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Default for MonthlyWeights {
    fn default() -> Self {
        Self(DEFAULT_MONTHLY_WEIGHTS)
    }
}

impl TryFrom<Vec<f64>> for MonthlyWeights {
    type Error = CalcError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        let len = value.len();
        let weights: [f64; MONTHS] = value.try_into().map_err(|_| {
            CalcError::invalid("monthly_weights", len as f64, "정확히 12개여야 합니다")
        })?;
        Self::new(weights)
    }
}

impl TryFrom<&[f64]> for MonthlyWeights {
    type Error = CalcError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Self::try_from(value.to_vec())
    }
}

impl From<MonthlyWeights> for Vec<f64> {
    fn from(value: MonthlyWeights) -> Self {
        value.0.to_vec()
    }
}

/// 연간 절감량을 월별 가중치 비율로 나눈다. 합계는 연간 절감량과 같다.
///
/// 비율(w / 합계)을 먼저 구하므로 각 월 값은 연간 절감량을 넘지 않는다.
pub fn compute_monthly_breakdown(
    energy_savings_kwh_per_year: f64,
    weights: &MonthlyWeights,
) -> Result<[f64; MONTHS], CalcError> {
    let energy = ensure_non_negative("energy_savings_kwh_per_year", energy_savings_kwh_per_year)?;
    let weight_sum = weights.sum();
    let mut monthly = [0.0; MONTHS];
    for (out, w) in monthly.iter_mut().zip(weights.as_array()) {
        *out = ensure_finite_result(energy * (w / weight_sum), "monthly_weights", *w)?;
    }
    Ok(monthly)
}
