use clap::Parser;
use roster_balancer::adapters::export::export_to_file;
use roster_balancer::utils::error::ErrorSeverity;
use roster_balancer::utils::{logger, validation::Validate};
use roster_balancer::{CliConfig, ConsoleReporter, RosterEngine, RosterError};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roster-balancer CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Roster balancing failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), RosterError> {
    // 驗證配置
    config.validate()?;
    let league = config.load_league()?;
    tracing::info!("✅ League '{}' loaded", league.name());

    let engine = RosterEngine::new(league);
    let roster = engine.build()?;

    if let Some(path) = &config.export {
        export_to_file(&roster, path, config.format)?;
        println!("📁 Roster saved to: {}", path.display());
        return Ok(());
    }

    let stdin = io::stdin();
    let mut reporter = ConsoleReporter::new(stdin.lock(), io::stdout());
    reporter.run(&roster)
}
