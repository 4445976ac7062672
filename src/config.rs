use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::energy::MonthlyWeights;
use crate::params::{InvestmentInput, SavingsScale};
use crate::report::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 입력 기본값. CLI 인자가 주어지면 그 값이 우선한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    /// 연간 에너지 절감량 [kWh/년]
    pub energy_savings_kwh_per_year: f64,
    /// 배출계수 표의 국가 이름 (`Custom`이면 `custom_emission_factor` 사용)
    pub country: String,
    /// 사용자 입력 배출계수 [kg CO₂/kWh]
    #[serde(default)]
    pub custom_emission_factor_kg_per_kwh: Option<f64>,
    /// 전기 요금 단가 [USD/kWh]
    pub electricity_rate_usd_per_kwh: f64,
    pub savings_percentage: f64,
    #[serde(default)]
    pub savings_scale: SavingsScale,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            energy_savings_kwh_per_year: 1_040_249.0,
            country: "Indonesia".to_string(),
            custom_emission_factor_kg_per_kwh: Some(0.82),
            electricity_rate_usd_per_kwh: 0.14,
            savings_percentage: 0.05,
            savings_scale: SavingsScale::Fraction,
        }
    }
}

/// 월별 분배 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySettings {
    pub enabled: bool,
    #[serde(default)]
    pub weights: MonthlyWeights,
}

impl Default for MonthlySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            weights: MonthlyWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inputs: InputDefaults,
    /// 없으면 ROI 분석을 하지 않는다.
    #[serde(default)]
    pub investment: Option<InvestmentInput>,
    #[serde(default)]
    pub monthly: MonthlySettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: InputDefaults::default(),
            investment: Some(InvestmentInput::new(16_000.0, 72_817.0)),
            monthly: MonthlySettings::default(),
            output: OutputSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        warn!(path = %path.display(), "설정 파일이 없어 기본 설정을 생성합니다");
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
