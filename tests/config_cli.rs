//! 설정 파일, CLI 인자 병합, 출력 형식 테스트.
use approx::assert_relative_eq;
use clap::Parser;
use co2_reduction_calculator::config::{self, Config};
use co2_reduction_calculator::emission::CountryFactorTable;
use co2_reduction_calculator::report::{self, format_thousands, OutputFormat};
use co2_reduction_calculator::ui_cli::{build_input, Cli};
use co2_reduction_calculator::{app, CalcError, CalculationEngine, SavingsScale};
use rstest::rstest;

#[test]
fn config_round_trips_through_toml() {
    let mut cfg = Config::default();
    cfg.monthly.enabled = true;
    cfg.inputs.savings_scale = SavingsScale::Percent;
    cfg.output.format = OutputFormat::Json;
    let text = toml::to_string_pretty(&cfg).unwrap();
    let back: Config = toml::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn missing_config_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    assert!(!path.exists());
    let cfg = config::load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(config::load_or_default(&path).unwrap(), cfg);
}

#[test]
fn partial_config_uses_defaults_and_rejects_bad_weights() {
    let cfg: Config = toml::from_str(
        r#"
        [inputs]
        energy_savings_kwh_per_year = 5000.0
        country = "Japan"
        electricity_rate_usd_per_kwh = 0.2
        savings_percentage = 10.0
        savings_scale = "percent"
        "#,
    )
    .unwrap();
    assert!(cfg.investment.is_none());
    assert!(!cfg.monthly.enabled);

    let bad = toml::from_str::<Config>("[monthly]\nenabled = true\nweights = [1.0, 2.0]\n");
    assert!(bad.is_err());
}

#[test]
fn cli_overrides_config_defaults() {
    let cfg = Config::default();
    let cli = Cli {
        energy_savings: Some(2_000.0),
        country: Some("Germany".into()),
        rate: Some(0.3),
        savings_percentage: Some(20.0),
        percent: true,
        years: Some(5),
        monthly: true,
        ..Cli::default()
    };
    let input = build_input(&cli, &cfg, CountryFactorTable::standard()).unwrap();
    assert_eq!(input.energy_savings_kwh_per_year, 2_000.0);
    assert_eq!(input.carbon_emission_factor_kg_per_kwh, 0.338);
    assert_eq!(input.electricity_rate_usd_per_kwh, 0.3);
    assert_relative_eq!(input.savings_percentage, 0.2);
    let investment = input.investment.unwrap();
    assert_eq!(investment.projection_years, 5);
    assert_eq!(investment.initial_investment_usd, 16_000.0);
    assert!(input.monthly_weights.is_some());
}

#[test]
fn percent_flag_does_not_rescale_config_default() {
    let cli = Cli {
        percent: true,
        ..Cli::default()
    };
    let input = build_input(&cli, &Config::default(), CountryFactorTable::standard()).unwrap();
    assert_eq!(input.savings_percentage, 0.05);
}

#[test]
fn percent_flag_requires_savings_percentage() {
    assert!(Cli::try_parse_from(["co2_reduction_calculator", "--percent"]).is_err());
    let cli = Cli::try_parse_from([
        "co2_reduction_calculator",
        "--percent",
        "--savings-percentage",
        "5",
    ])
    .unwrap();
    let input = build_input(&cli, &Config::default(), CountryFactorTable::standard()).unwrap();
    assert_relative_eq!(input.savings_percentage, 0.05);
}

#[test]
fn config_percent_scale_applies_to_config_value() {
    let mut cfg = Config::default();
    cfg.inputs.savings_percentage = 5.0;
    cfg.inputs.savings_scale = SavingsScale::Percent;
    let input = build_input(&Cli::default(), &cfg, CountryFactorTable::standard()).unwrap();
    assert_relative_eq!(input.savings_percentage, 0.05);
}

#[test]
fn custom_emission_factor_and_no_roi() {
    let cli = Cli {
        emission_factor: Some(0.61),
        no_roi: true,
        ..Cli::default()
    };
    let input = build_input(&cli, &Config::default(), CountryFactorTable::standard()).unwrap();
    assert_eq!(input.carbon_emission_factor_kg_per_kwh, 0.61);
    assert!(input.investment.is_none());
    assert!(input.monthly_weights.is_none());
}

#[test]
fn custom_country_in_config_without_value_fails() {
    let mut cfg = Config::default();
    cfg.inputs.country = "Custom".into();
    cfg.inputs.custom_emission_factor_kg_per_kwh = None;
    let err = build_input(&Cli::default(), &cfg, CountryFactorTable::standard()).unwrap_err();
    assert!(matches!(err, CalcError::InvalidParameter { .. }));
}

#[rstest]
#[case(20_804_980.0, 2, "20,804,980.00")]
#[case(853_004.18, 2, "853,004.18")]
#[case(999.999, 2, "1,000.00")]
#[case(-56_817.0, 0, "-56,817")]
#[case(-0.001, 2, "0.00")]
#[case(12.0, 1, "12.0")]
fn thousands_formatting(#[case] value: f64, #[case] decimals: usize, #[case] expected: &str) {
    assert_eq!(format_thousands(value, decimals), expected);
}

#[test]
fn text_and_json_reports() {
    let mut cfg = Config::default();
    cfg.monthly.enabled = true;
    let input = build_input(&Cli::default(), &cfg, CountryFactorTable::standard()).unwrap();
    let metrics = CalculationEngine::default().calculate(&input).unwrap();

    let text = report::render(OutputFormat::Text, &input, &metrics).unwrap();
    assert!(text.contains("20,804,980.00"));
    assert!(text.contains("12월"));
    assert!(text.contains("단순 회수기간"));

    let json = report::render(OutputFormat::Json, &input, &metrics).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metrics"]["cash_flow"]["years"].as_array().unwrap().len(), 10);
    assert_eq!(value["break_even_year"], 0);
    assert_eq!(
        value["metrics"]["monthly_energy_kwh"].as_array().unwrap().len(),
        12
    );
}

#[test]
fn app_run_lists_countries_without_config() {
    let cli = Cli {
        list_countries: true,
        ..Cli::default()
    };
    let out = app::run(&cli).unwrap();
    assert!(out.contains("Indonesia"));
    assert!(out.contains("Custom"));
}

#[test]
fn app_run_reports_calculation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    Config::default().save(&path).unwrap();
    let cli = Cli {
        config: path,
        savings_percentage: Some(0.0),
        ..Cli::default()
    };
    let err = app::run(&cli).unwrap_err();
    assert!(matches!(
        err,
        app::AppError::Calc(CalcError::DivisionByZero { .. })
    ));
}
