use clap::Parser;
use menu_manager::utils::error::{ErrorSeverity, MenuError};
use menu_manager::utils::{logger, validation::Validate};
use menu_manager::{CliConfig, MenuSession, Renderer, Shell};
use std::io::{self, IsTerminal};

fn exit_code(e: &MenuError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(context: &str, e: MenuError) -> ! {
    eprintln!("❌ {}: {}", context, e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e).max(1));
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        fail("Invalid arguments", e);
    }

    // 載入設定檔
    let config = match cli.load_settings() {
        Ok(config) => config,
        Err(e) => fail("Failed to load settings", e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        fail("Invalid settings", e);
    }

    // 初始化日誌
    let level = config.logging.level.as_deref();
    if config.logging.json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting menu-manager");
    tracing::debug!("CLI config: {:?}", cli);

    let renderer = Renderer::new(cli.output, config.menu.currency_symbol.clone());
    let session = MenuSession::new(config.menu);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut shell = Shell::new(session, renderer).with_prompt(interactive);

    if interactive {
        println!("{} - type 'help' for commands", shell.session().settings().title);
    }

    let mut stdout = io::stdout().lock();
    match shell.run(stdin.lock(), &mut stdout) {
        Ok(summary) => {
            tracing::debug!("Session summary: {:?}", summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Shell stopped: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail("Shell stopped", e);
        }
    }
}
