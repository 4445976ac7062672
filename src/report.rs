//! 계산 결과를 사람이 읽는 텍스트 또는 JSON으로 출력한다.
//! 자릿수 구분/소수 자릿수 같은 표시 형식은 여기서만 다룬다.

use serde::{Deserialize, Serialize};

use crate::emission::{
    CAR_EMISSION_KG_PER_YEAR, FLAT_EMISSION_KG_PER_YEAR, TREE_ABSORPTION_KG_PER_YEAR,
};
use crate::engine::DerivedMetrics;
use crate::params::InputParameters;

const MONTH_NAMES: [&str; 12] = [
    "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON 출력용 묶음.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    inputs: &'a InputParameters,
    annual_savings_usd: f64,
    annual_co2_reduction_tonnes: f64,
    break_even_year: Option<u32>,
    metrics: &'a DerivedMetrics,
}

/// 천 단위 구분 기호를 넣어 소수 `decimals` 자리로 표시한다.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn render(
    format: OutputFormat,
    input: &InputParameters,
    metrics: &DerivedMetrics,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(input, metrics)),
        OutputFormat::Json => render_json(input, metrics),
    }
}

pub fn render_json(
    input: &InputParameters,
    metrics: &DerivedMetrics,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        inputs: input,
        annual_savings_usd: input.annual_savings_usd(),
        annual_co2_reduction_tonnes: metrics.annual_co2_reduction_tonnes(),
        break_even_year: metrics.break_even_year(),
        metrics,
    };
    serde_json::to_string_pretty(&report)
}

pub fn render_text(input: &InputParameters, m: &DerivedMetrics) -> String {
    let mut lines = vec![
        "=== CO₂ 감축 계산 결과 ===".to_string(),
        String::new(),
        "-- 에너지 지표 --".to_string(),
        format!(
            "절감 전 총 에너지 사용량: {} kWh/년",
            format_thousands(m.total_energy_before_kwh, 2)
        ),
        format!(
            "절감 후 에너지 사용량: {} kWh/년",
            format_thousands(m.energy_after_kwh, 2)
        ),
        format!(
            "절감 전 전기 요금: ${}",
            format_thousands(m.electricity_cost_before_usd, 2)
        ),
        format!(
            "절감 후 전기 요금: ${}",
            format_thousands(m.electricity_cost_after_usd, 2)
        ),
        String::new(),
        "-- 환경 영향 --".to_string(),
        format!(
            "연간 CO₂ 감축량: {} kg CO₂/년 ({:.1} tCO₂e/년)",
            format_thousands(m.annual_co2_reduction_kg, 2),
            m.annual_co2_reduction_tonnes()
        ),
        format!(
            "나무 심기 환산: {} 그루",
            format_thousands(m.trees_planted_equivalent, 2)
        ),
        format!("주택 환산: {} 세대", format_thousands(m.flats_equivalent, 2)),
        format!(
            "차량 제거 환산: {} 대",
            format_thousands(m.cars_removed_equivalent, 2)
        ),
        format!(
            "에너지 절감량: {:.0}k kWh/년",
            input.energy_savings_kwh_per_year / 1000.0
        ),
    ];

    if let Some(monthly) = &m.monthly_energy_kwh {
        lines.push(String::new());
        lines.push("-- 월별 절감량 --".to_string());
        for (name, kwh) in MONTH_NAMES.iter().zip(monthly) {
            lines.push(format!("{name:>4}: {} kWh", format_thousands(*kwh, 2)));
        }
    }

    if let Some(cash_flow) = &m.cash_flow {
        lines.push(String::new());
        lines.push("-- 현금흐름 --".to_string());
        lines.push(format!(
            "연간 절감액: ${}",
            format_thousands(cash_flow.annual_savings_usd, 2)
        ));
        lines.push(format!("{:>4} {:>18} {:>18}", "연차", "순 절감액($)", "누적($)"));
        for y in &cash_flow.years {
            lines.push(format!(
                "{:>4} {:>18} {:>18}",
                y.year,
                format_thousands(y.annual_net_usd, 2),
                format_thousands(y.cumulative_net_usd, 2)
            ));
        }
        if let Some(payback) = m.payback_period_years {
            lines.push(format!("단순 회수기간: {payback:.2} 년"));
        }
        lines.push(match m.break_even_year() {
            Some(year) => format!("누적 손익분기 연차: {year}"),
            None => "분석 기간 내 손익분기 없음".to_string(),
        });
    }

    lines.push(String::new());
    lines.push("참고:".to_string());
    lines.push(format!(
        "- 나무 한 그루는 연간 {TREE_ABSORPTION_KG_PER_YEAR} kg CO₂를 흡수한다고 가정"
    ));
    lines.push(format!(
        "- 주택 한 세대는 연간 {FLAT_EMISSION_KG_PER_YEAR} kg CO₂를 배출한다고 가정"
    ));
    lines.push(format!(
        "- 승용차 한 대는 연간 {CAR_EMISSION_KG_PER_YEAR} kg CO₂를 배출한다고 가정"
    ));
    lines.join("\n")
}
