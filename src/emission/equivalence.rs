/// 나무 한 그루의 연간 CO₂ 흡수량 [kg/년]
pub const TREE_ABSORPTION_KG_PER_YEAR: f64 = 22.0;
/// 주택(세대) 한 곳의 연간 CO₂ 배출량 [kg/년]
pub const FLAT_EMISSION_KG_PER_YEAR: f64 = 320.0;
/// 승용차 한 대의 연간 CO₂ 배출량 [kg/년]
pub const CAR_EMISSION_KG_PER_YEAR: f64 = 200.0;

/// CO₂ 감축량을 직관적인 비교 단위로 환산한 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equivalences {
    /// 나무 심기 환산 [그루]
    pub trees_planted: f64,
    /// 주택 환산 [세대]
    pub flats: f64,
    /// 차량 제거 환산 [대]
    pub cars_removed: f64,
}

/// 연간 CO₂ 감축량 [kg]을 나무/주택/차량 수로 환산한다.
pub fn equivalences(annual_co2_reduction_kg: f64) -> Equivalences {
    Equivalences {
        trees_planted: annual_co2_reduction_kg / TREE_ABSORPTION_KG_PER_YEAR,
        flats: annual_co2_reduction_kg / FLAT_EMISSION_KG_PER_YEAR,
        cars_removed: annual_co2_reduction_kg / CAR_EMISSION_KG_PER_YEAR,
    }
}
