use std::path::PathBuf;

use clap::Parser;
mod commands;
use commands::cli;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use triage_core::config::{AppConfig, LoggingConfig, OutputFormat};
use triage_core::error;
use triage_core::event::time::now_millis;
use triage_core::timeline::LayerFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, error::CliError> {
    let args = cli::Args::parse();
    let cfg = triage_core::config::load_default()?;
    init_tracing(&cfg.logging).map_err(error::CliError::Command)?;

    dispatch(args, &cfg).await
}

fn exit_code_for_error(e: &error::CliError) -> i32 {
    // 0: success
    // 11: config error
    // 20: input / IO error
    // 50: internal/uncategorized
    match e {
        error::CliError::Config(_) => 11,
        error::CliError::Input(_) => 20,
        error::CliError::Io(_) => 20,
        error::CliError::Command(_) => 50,
        error::CliError::Anyhow(_) => 50,
    }
}

async fn dispatch(args: cli::Args, cfg: &AppConfig) -> Result<i32, error::CliError> {
    let format: OutputFormat = args.format.map(Into::into).unwrap_or(cfg.output.format);

    match args.command {
        cli::Commands::Structure(s) => {
            let input = commands::run::load(&s.input)?;
            let now = s.input.now_ms.unwrap_or_else(now_millis);
            let filter: LayerFilter = s.filter.map(Into::into).unwrap_or(cfg.output.filter);
            println!(
                "{}",
                commands::run::render_structure(&input, now, format, filter)?
            );
            Ok(0)
        }
        cli::Commands::Flat(i) => {
            let input = commands::run::load(&i)?;
            let now = i.now_ms.unwrap_or_else(now_millis);
            println!("{}", commands::run::render_flat(&input, now, format)?);
            Ok(0)
        }
        cli::Commands::Counts(i) => {
            let input = commands::run::load(&i)?;
            let now = i.now_ms.unwrap_or_else(now_millis);
            println!("{}", commands::run::render_counts(&input, now, format)?);
            Ok(0)
        }
        cli::Commands::Watch(w) => {
            let interval = w.interval_ms.unwrap_or(cfg.watch.interval_ms);
            let filter: LayerFilter = w
                .structure
                .filter
                .map(Into::into)
                .unwrap_or(cfg.output.filter);
            tracing::info!(events = %w.structure.input.events, interval, "watching");
            let ctrl_c = async {
                let _ = tokio::signal::ctrl_c().await;
            };
            commands::watch::watch_loop(
                &w.structure.input,
                interval,
                format,
                filter,
                ctrl_c,
                &mut std::io::stdout(),
            )
            .await?;
            Ok(0)
        }
    }
}

/// 日志输出目录；未配置或为空白时落到系统临时目录
fn log_dir(logging: &LoggingConfig) -> PathBuf {
    logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("triage"))
}

fn file_writer(logging: &LoggingConfig) -> Result<NonBlocking, String> {
    let dir = log_dir(logging);
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("create log dir {} failed: {e}", dir.display()))?;
    let appender =
        tracing_appender::rolling::never(&dir, format!("triage.{}.log", std::process::id()));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Ok(writer)
}

/// 安装全局 subscriber。`RUST_LOG` 优先于配置中的级别；
/// console 与 file 都关闭时只提示一次，不视为错误。
fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }
    if !logging.console && !logging.file {
        eprintln!("triage: logging enabled but no output selected; logs are discarded");
        return Ok(());
    }

    let directives = std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| logging.level.clone());
    let filter =
        EnvFilter::try_new(&directives).map_err(|e| format!("invalid log filter {directives:?}: {e}"))?;

    let file = if logging.file {
        Some(file_writer(logging)?)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.console.then(|| {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(atty::is(atty::Stream::Stderr))
        }))
        .with(file.map(|w| {
            tracing_subscriber::fmt::layer()
                .with_writer(w)
                .with_ansi(false)
                .with_target(false)
        }))
        .init();

    Ok(())
}
