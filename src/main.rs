// ==========================================
// BOM 工时展开工具 - 命令行入口
// ==========================================
// 对应原上传界面: 上传 → 预览 → 处理 → 预览 → 下载
// ==========================================

use anyhow::Context;
use bom_processing::api::{render_failure, ProcessApi};
use bom_processing::config::ConfigManager;
use bom_processing::i18n::{self, t, t_with_args};
use bom_processing::logging;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bom-processing", version, about = "Expand BOM / sales order rows into per-workcenter time estimates")]
struct Cli {
    /// 上传的 BOM / 销售订单文件（.xlsx / .xls）
    input: PathBuf,

    /// 输出 Excel 路径（默认: 配置中的 output_file_name）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 参考工时表 CSV（覆盖配置）
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// 配置文件（JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 界面语言: en / zh-CN
    #[arg(long)]
    locale: Option<String>,

    /// 不打印预览表格
    #[arg(long)]
    no_preview: bool,

    /// 运行报告（JSON）输出路径
    #[arg(long)]
    report: Option<PathBuf>,

    /// JSON 格式日志
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "处理失败");
            eprintln!("{}", render_failure(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut manager = ConfigManager::load(cli.config.as_deref()).context("loading configuration")?;
    tracing::debug!(source = ?manager.source(), "配置已加载");

    // 命令行参数覆盖配置文件
    let config = manager.config_mut();
    if let Some(reference) = &cli.reference {
        config.reference_path = reference.clone();
    }
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }
    config.validate().context("validating command-line overrides")?;
    let config = manager.into_config();

    i18n::set_locale(&config.locale);
    tracing::info!(version = bom_processing::VERSION, "{}", t("app.title"));

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_file_name));

    let api = ProcessApi::new(config);

    println!("{}", t("process.processing"));
    let response = api
        .process_upload(&cli.input)
        .with_context(|| cli.input.display().to_string())?;
    println!(
        "{}",
        t_with_args("process.uploaded", &[("path", &response.input_file)])
    );

    if !cli.no_preview {
        println!();
        println!("{}", t("process.input_preview"));
        println!("{}", api.input_preview(&response));
    }

    let stats = &response.stats;
    println!();
    println!(
        "{}",
        t_with_args(
            "process.summary",
            &[
                ("input", &stats.input_rows.to_string()),
                ("unknown", &stats.unknown_parts.to_string()),
                ("expanded", &stats.expanded_rows.to_string()),
                ("cleaned", &stats.cleaned_rows.to_string()),
            ],
        )
    );
    println!(
        "{}",
        t_with_args("process.complete", &[("rows", &response.rows.len().to_string())])
    );

    if !cli.no_preview {
        println!();
        println!("{}", t("process.output_preview"));
        if response.rows.is_empty() {
            println!("{}", t("process.empty_preview"));
        } else {
            println!("{}", api.output_preview(&response));
        }
    }

    api.export(&response, &output_path)
        .with_context(|| format!("writing {}", output_path.display()))?;
    println!();
    println!(
        "{}",
        t_with_args("process.saved", &[("path", &output_path.display().to_string())])
    );

    if let Some(report_path) = &cli.report {
        api.write_report(&response, report_path)
            .with_context(|| format!("writing {}", report_path.display()))?;
        println!(
            "{}",
            t_with_args("process.report_saved", &[("path", &report_path.display().to_string())])
        );
    }

    Ok(())
}
