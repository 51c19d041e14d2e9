//! 程序入口：解析参数、初始化日志、创建翻译服务并执行翻译任务

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use locale_fanyi::config::{DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};
use locale_fanyi::{BackendKind, FanyiConfig, PlaceholderTranslator, TranslationJob};

#[derive(Parser)]
#[command(name = "locale_fanyi")]
#[command(about = "Translate every string in a JSON locale file, keeping {{placeholders}} intact")]
#[command(version)]
struct Cli {
    /// Input JSON file
    input: PathBuf,
    /// Output JSON file (overwritten if it exists)
    #[arg(short, long)]
    output: PathBuf,
    /// Source language tag
    #[arg(long = "from", default_value = DEFAULT_SOURCE_LANG)]
    source_lang: String,
    /// Target language tag
    #[arg(long = "to", default_value = DEFAULT_TARGET_LANG)]
    target_lang: String,
    /// Translation service
    #[arg(long, value_enum, default_value_t = BackendKind::Google)]
    backend: BackendKind,
    /// Override the translation service base URL
    #[arg(long, env = "FANYI_ENDPOINT")]
    endpoint: Option<String>,
    /// Bearer token for the translation service
    #[arg(long, env = "FANYI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> FanyiConfig {
        FanyiConfig {
            source_lang: self.source_lang.clone(),
            target_lang: self.target_lang.clone(),
            backend: self.backend,
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = SubscriberBuilder::default()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();

    let config = cli.config();
    let backend = config
        .build_backend()
        .context("翻译服务初始化失败")?;
    let translator = PlaceholderTranslator::new(backend, config.source_lang, config.target_lang);

    let job = TranslationJob::new(&cli.input, &cli.output);
    let report = job
        .run(&translator)
        .with_context(|| format!("翻译 {} 失败", cli.input.display()))?;

    println!("翻译完成，已写入: {}", job.output_path().display());
    if report.has_failures() {
        println!(
            "共 {} 条文本，其中 {} 条翻译失败并保留原文",
            report.total_strings(),
            report.failed.len()
        );
        for leaf in &report.failed {
            println!("  {}: {}", leaf.path, leaf.reason);
        }
    }
    Ok(())
}
