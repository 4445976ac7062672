use thiserror::Error;
use tracing::info;

use crate::config;
use crate::engine::CalculationEngine;
use crate::error::CalcError;
use crate::report;
use crate::ui_cli::{self, Cli};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 인자와 설정으로 한 번 계산하고 출력할 문자열을 돌려준다.
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let engine = CalculationEngine::default();
    if cli.list_countries {
        return Ok(ui_cli::country_list(engine.factors()));
    }

    let cfg = config::load_or_default(&cli.config)?;
    let input = ui_cli::build_input(cli, &cfg, engine.factors())?;
    info!(
        energy_savings = input.energy_savings_kwh_per_year,
        emission_factor = input.carbon_emission_factor_kg_per_kwh,
        rate = input.electricity_rate_usd_per_kwh,
        savings_percentage = input.savings_percentage,
        roi = input.investment.is_some(),
        "계산 입력 확정"
    );

    let metrics = engine.calculate(&input)?;
    let rendered = report::render(cli.output_format(&cfg), &input, &metrics)?;
    Ok(rendered)
}
