//! 국가별 전력 배출계수 표 [kg CO₂/kWh].
//! 프로세스 전체에서 공유하는 불변 표이며 호출마다 다시 만들지 않는다.

use crate::error::{ensure_non_negative, CalcError};

/// 사용자 입력 계수를 뜻하는 표의 특수 항목 이름.
pub const CUSTOM_SENTINEL: &str = "Custom";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryFactor {
    pub country: &'static str,
    /// `None`이면 표에서 값을 찾지 않고 사용자가 직접 입력해야 한다.
    pub factor_kg_per_kwh: Option<f64>,
}

impl CountryFactor {
    const fn new(country: &'static str, factor_kg_per_kwh: f64) -> Self {
        Self {
            country,
            factor_kg_per_kwh: Some(factor_kg_per_kwh),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.factor_kg_per_kwh.is_none()
    }
}

/// 배출계수를 어디서 가져올지 나타낸다.
#[derive(Debug, Clone, PartialEq)]
pub enum EmissionFactorSource {
    /// 표에서 국가 이름으로 조회
    Country(String),
    /// 사용자가 직접 입력한 계수 [kg CO₂/kWh]
    Custom(f64),
}

#[derive(Debug)]
pub struct CountryFactorTable {
    entries: &'static [CountryFactor],
}

static STANDARD: CountryFactorTable = CountryFactorTable { entries: FACTORS };

impl CountryFactorTable {
    /// 기본 제공 표를 반환한다.
    pub fn standard() -> &'static CountryFactorTable {
        &STANDARD
    }

    pub fn entries(&self) -> &'static [CountryFactor] {
        self.entries
    }

    /// 표 순서대로 국가 이름을 돌려준다. 마지막은 `Custom` 항목이다.
    pub fn countries(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.country)
    }

    /// 대소문자와 앞뒤 공백을 무시하고 국가를 찾는다.
    pub fn lookup(&self, name: &str) -> Option<&'static CountryFactor> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|e| e.country.eq_ignore_ascii_case(name))
    }

    pub fn resolve(&self, source: &EmissionFactorSource) -> Result<f64, CalcError> {
        match source {
            EmissionFactorSource::Country(name) => self.resolve_selection(name, None),
            EmissionFactorSource::Custom(value) => {
                ensure_non_negative("carbon_emission_factor_kg_per_kwh", *value)
            }
        }
    }

    /// 화면의 국가 선택값과 (있다면) 사용자 입력 계수로 배출계수를 결정한다.
    ///
    /// 국가 항목을 고르면 `custom`은 무시된다. `Custom` 항목은 사용자 값이 반드시 있어야 한다.
    pub fn resolve_selection(&self, name: &str, custom: Option<f64>) -> Result<f64, CalcError> {
        let entry = self
            .lookup(name)
            .ok_or_else(|| CalcError::UnknownCountry(name.trim().to_string()))?;
        match (entry.factor_kg_per_kwh, custom) {
            (Some(factor), _) => Ok(factor),
            (None, Some(value)) => ensure_non_negative("carbon_emission_factor_kg_per_kwh", value),
            (None, None) => Err(CalcError::invalid(
                "carbon_emission_factor_kg_per_kwh",
                f64::NAN,
                "Custom 선택 시 배출계수를 직접 입력해야 합니다",
            )),
        }
    }
}

const FACTORS: &[CountryFactor] = &[
    CountryFactor::new("Indonesia", 0.87),
    CountryFactor::new("Singapore", 0.408),
    CountryFactor::new("Malaysia", 0.585),
    CountryFactor::new("Thailand", 0.513),
    CountryFactor::new("Vietnam", 0.618),
    CountryFactor::new("Philippines", 0.65),
    CountryFactor::new("China", 0.555),
    CountryFactor::new("Japan", 0.474),
    CountryFactor::new("South Korea", 0.405),
    CountryFactor::new("India", 0.82),
    CountryFactor::new("Australia", 0.79),
    CountryFactor::new("United States", 0.42),
    CountryFactor::new("United Kingdom", 0.233),
    CountryFactor::new("Germany", 0.338),
    CountryFactor {
        country: CUSTOM_SENTINEL,
        factor_kg_per_kwh: None,
    },
];
