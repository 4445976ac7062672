use clap::Parser;
use co2_reduction_calculator::{app, ui_cli::Cli};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 로그를 설정한 뒤 계산 결과를 출력한다.
fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match app::run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}
