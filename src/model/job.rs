//! TranslationJob：读取 → 遍历翻译 → 写回 的一次完整运行

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::backend::Translate;
use crate::model::translator::PlaceholderTranslator;
use crate::model::walker::{DocumentWalker, WalkReport};
use crate::utils::fs::{read_json_file, write_json_file};

#[derive(Error, Debug)]
pub enum FanyiError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("HTTP请求失败: {0}")]
    Http(#[from] reqwest::Error),
    #[error("翻译服务错误: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct TranslationJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl TranslationJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 执行翻译任务
    ///
    /// 单条文本翻译失败只计入报告；读取、解析、写出失败直接返回错误。
    pub fn run<T: Translate>(
        &self,
        translator: &PlaceholderTranslator<T>,
    ) -> Result<WalkReport, FanyiError> {
        let dom = read_json_file(&self.input_path)?;
        tracing::info!(
            "已加载 {}，开始翻译 ({} -> {})",
            self.input_path.display(),
            translator.source_lang(),
            translator.target_lang()
        );

        let mut walker = DocumentWalker::new(translator);
        let translated = walker.walk(&dom);
        let report = walker.into_report();

        write_json_file(&self.output_path, &translated)?;
        tracing::info!(
            "JSON文件已保存到: {}，翻译 {} 条，跳过 {} 条，失败 {} 条",
            self.output_path.display(),
            report.translated,
            report.skipped,
            report.failed.len()
        );
        Ok(report)
    }
}
