// ==========================================
// 教案时间编排引擎 - 命令行入口
// ==========================================
// 用途: 供生成服务/导出流程等外部协作方以 JSON 文件调用引擎
// 输出: 结果 JSON 写入 stdout,日志写入 stderr
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lesson_balance::api::{AllocationRequest, BalanceApi, BalanceRequest, DurationChangeRequest};
use lesson_balance::config::ConfigManager;
use lesson_balance::logging::{self, LogFormat};
use lesson_balance::{BloomLevel, GradeLevel};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lesson-balance", version, about = "Lesson phase time allocation and auto-balance")]
struct Cli {
    /// 配置文件路径（默认: <config_dir>/lesson-balance/config.json）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 日志输出格式
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Text)]
    log_format: LogFormatArg,

    /// 格式化输出 JSON
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebalance phase durations toward a target total (BalanceRequest JSON)
    Rebalance {
        /// Request file ("-" for stdin)
        #[arg(long)]
        input: PathBuf,
    },
    /// Change the total lesson duration (DurationChangeRequest JSON)
    ChangeDuration {
        /// Request file ("-" for stdin)
        #[arg(long)]
        input: PathBuf,
    },
    /// Compute the initial time allocation for a new lesson
    Allocate {
        /// Total lesson minutes
        #[arg(long)]
        total: i32,
        /// Comma-separated cognitive levels, e.g. apply,create
        #[arg(long, value_delimiter = ',')]
        levels: Vec<String>,
        /// Grade level (freshman..postgrad)
        #[arg(long)]
        grade: Option<String>,
    },
    /// Print the effective configuration
    ShowConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_with_format(match cli.log_format {
        LogFormatArg::Text => LogFormat::Text,
        LogFormatArg::Json => LogFormat::Json,
    });

    let manager = ConfigManager::load_or_default(cli.config.as_deref())
        .context("无法加载配置")?;
    tracing::debug!(source = ?manager.source(), "配置就绪");

    match cli.command {
        Commands::ShowConfig => {
            println!("{}", manager.snapshot_json()?);
        }
        Commands::Rebalance { input } => {
            let api = BalanceApi::new(Arc::new(manager));
            let request: BalanceRequest = read_json(&input)?;
            let result = api.rebalance(&request)?;
            print_json(&result, cli.pretty)?;
        }
        Commands::ChangeDuration { input } => {
            let api = BalanceApi::new(Arc::new(manager));
            let request: DurationChangeRequest = read_json(&input)?;
            let result = api.change_duration(&request)?;
            print_json(&result, cli.pretty)?;
        }
        Commands::Allocate {
            total,
            levels,
            grade,
        } => {
            let api = BalanceApi::new(Arc::new(manager));
            let request = AllocationRequest {
                total_minutes: total,
                selected_cognitive_levels: parse_levels(&levels)?,
                grade_level: grade
                    .as_deref()
                    .map(str::parse::<GradeLevel>)
                    .transpose()
                    .map_err(anyhow::Error::msg)?,
            };
            let response = api.allocate(&request)?;
            print_json(&response, cli.pretty)?;
        }
    }

    Ok(())
}

fn parse_levels(raw: &[String]) -> Result<BTreeSet<BloomLevel>> {
    raw.iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<BloomLevel>().map_err(anyhow::Error::msg))
        .collect()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("无法读取 stdin")?
    } else {
        fs::read_to_string(path).with_context(|| format!("无法读取请求文件: {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("请求 JSON 解析失败: {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
