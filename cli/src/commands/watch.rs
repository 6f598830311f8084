use std::future::Future;
use std::io::Write;
use std::time::Duration;

use triage_core::config::OutputFormat;
use triage_core::error::CliError;
use triage_core::event::time::now_millis;
use triage_core::timeline::LayerFilter;

use super::cli::InputArgs;
use super::run::{load, render_structure};

/// 轮询驱动：每个周期重新读取输入并整体重算，输出变化时才写出
///
/// “当前时间”在进入循环前取一次，推理链无锚点时不会因时钟走动而反复重印。
/// `shutdown` 完成即退出。
pub async fn watch_loop<W: Write>(
    args: &InputArgs,
    interval_ms: u64,
    format: OutputFormat,
    filter: LayerFilter,
    shutdown: impl Future<Output = ()>,
    out: &mut W,
) -> Result<(), CliError> {
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(100)));
    let now = args.now_ms.unwrap_or_else(now_millis);
    let mut last: Option<String> = None;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => {
                tracing::info!("watch interrupted");
                return Ok(());
            }
        }

        let input = match load(args) {
            Ok(input) => input,
            Err(e) => {
                // 后端可能正在写文件，下个周期再试
                tracing::warn!("reload failed: {}", e);
                continue;
            }
        };

        let rendered = render_structure(&input, now, format, filter)?;
        if last.as_deref() != Some(rendered.as_str()) {
            tracing::debug!(events = input.events.len(), "timeline changed");
            writeln!(out, "{rendered}")?;
            out.flush()?;
            last = Some(rendered);
        }
    }
}
