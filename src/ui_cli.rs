use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::emission::CountryFactorTable;
use crate::error::CalcError;
use crate::params::{InputParameters, InvestmentInput, SavingsScale};
use crate::report::OutputFormat;

/// 명령행 인자. 주어지지 않은 값은 설정 파일에서 가져온다.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about = "CO₂ 감축량 및 투자 회수 계산기", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 연간 에너지 절감량 [kWh/년]
    #[arg(long)]
    pub energy_savings: Option<f64>,
    /// 배출계수 표의 국가 이름 (Custom 가능)
    #[arg(long)]
    pub country: Option<String>,
    /// 사용자 입력 배출계수 [kg CO₂/kWh]. 지정하면 국가 대신 이 값을 쓴다.
    #[arg(long)]
    pub emission_factor: Option<f64>,
    /// 전기 요금 단가 [USD/kWh]
    #[arg(long)]
    pub rate: Option<f64>,
    /// 절감률 (기본은 0~1 소수)
    #[arg(long)]
    pub savings_percentage: Option<f64>,
    /// `--savings-percentage` 값을 백분율(5 = 5%)로 해석
    #[arg(long, default_value_t = false, requires = "savings_percentage")]
    pub percent: bool,
    /// 초기 투자비 [USD]
    #[arg(long)]
    pub investment: Option<f64>,
    /// 연간 소프트웨어 사용료 [USD/년]
    #[arg(long)]
    pub software_fee: Option<f64>,
    /// 분석 기간 [년]
    #[arg(long)]
    pub years: Option<u32>,
    /// ROI 분석 생략
    #[arg(long, default_value_t = false, conflicts_with_all = ["investment", "software_fee", "years"])]
    pub no_roi: bool,
    /// 월별 분배 출력
    #[arg(long, default_value_t = false)]
    pub monthly: bool,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// 배출계수 표를 출력하고 종료
    #[arg(long, default_value_t = false)]
    pub list_countries: bool,
}

impl Cli {
    pub fn output_format(&self, cfg: &Config) -> OutputFormat {
        self.format.unwrap_or(cfg.output.format)
    }
}

/// 설정값 위에 CLI 인자를 덮어써서 계산 입력을 만든다.
pub fn build_input(
    cli: &Cli,
    cfg: &Config,
    table: &CountryFactorTable,
) -> Result<InputParameters, CalcError> {
    let defaults = &cfg.inputs;

    let factor = match cli.emission_factor {
        Some(custom) => table.resolve_selection(crate::emission::CUSTOM_SENTINEL, Some(custom))?,
        None => {
            let country = cli.country.as_deref().unwrap_or(&defaults.country);
            table.resolve_selection(country, defaults.custom_emission_factor_kg_per_kwh)?
        }
    };

    // `--percent`는 CLI로 받은 절감률에만 적용된다. 설정값은 자신의 표기 방식을 따른다.
    let (savings_percentage, scale) = match cli.savings_percentage {
        Some(value) if cli.percent => (value, SavingsScale::Percent),
        Some(value) => (value, SavingsScale::Fraction),
        None => (defaults.savings_percentage, defaults.savings_scale),
    };

    let mut input = InputParameters::new(
        cli.energy_savings
            .unwrap_or(defaults.energy_savings_kwh_per_year),
        factor,
        cli.rate.unwrap_or(defaults.electricity_rate_usd_per_kwh),
        savings_percentage,
    )
    .with_savings_scale(scale);

    if !cli.no_roi {
        if let Some(investment) = merge_investment(cli, cfg.investment) {
            input = input.with_investment(investment);
        }
    }
    if cli.monthly || cfg.monthly.enabled {
        input = input.with_monthly_weights(cfg.monthly.weights);
    }
    Ok(input)
}

fn merge_investment(cli: &Cli, base: Option<InvestmentInput>) -> Option<InvestmentInput> {
    let overridden = cli.investment.is_some() || cli.software_fee.is_some() || cli.years.is_some();
    if base.is_none() && !overridden {
        return None;
    }
    let mut investment = base.unwrap_or_else(|| InvestmentInput::new(0.0, 0.0));
    if let Some(v) = cli.investment {
        investment.initial_investment_usd = v;
    }
    if let Some(v) = cli.software_fee {
        investment.annual_software_fee_usd = v;
    }
    if let Some(v) = cli.years {
        investment.projection_years = v;
    }
    Some(investment)
}

/// 국가별 배출계수 표를 출력용 문자열로 만든다.
pub fn country_list(table: &CountryFactorTable) -> String {
    let mut out = String::from("국가별 배출계수 [kg CO₂/kWh]\n");
    for entry in table.entries() {
        match entry.factor_kg_per_kwh {
            Some(f) => out.push_str(&format!("  {:<16} {f:.3}\n", entry.country)),
            None => out.push_str(&format!("  {:<16} (직접 입력)\n", entry.country)),
        }
    }
    out
}
