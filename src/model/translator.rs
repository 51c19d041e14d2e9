//! 保留占位符的单条文本翻译

use crate::backend::Translate;
use crate::model::placeholder::{mask, restore};

/// 单条文本的翻译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateOutcome {
    /// 翻译成功，占位符已还原
    Translated(String),
    /// 空串或纯空白，未调用翻译服务
    Skipped(String),
    /// 翻译服务出错，保留原文
    Failed { original: String, reason: String },
}

impl TranslateOutcome {
    /// 写回文档时使用的文本
    pub fn text(&self) -> &str {
        match self {
            Self::Translated(s) | Self::Skipped(s) => s,
            Self::Failed { original, .. } => original,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Translated(s) | Self::Skipped(s) => s,
            Self::Failed { original, .. } => original,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// 绑定固定源/目标语言的翻译器，翻译服务由调用方注入
#[derive(Debug, Clone)]
pub struct PlaceholderTranslator<T> {
    backend: T,
    source_lang: String,
    target_lang: String,
}

impl<T: Translate> PlaceholderTranslator<T> {
    pub fn new(backend: T, source_lang: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            backend,
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// 遮蔽占位符 → 调用翻译服务 → 按顺序还原占位符
    ///
    /// 翻译服务出错时记录警告并返回原文，不重试也不向上传播。
    pub fn translate(&self, text: &str) -> TranslateOutcome {
        if text.trim().is_empty() {
            return TranslateOutcome::Skipped(text.to_string());
        }

        let unit = mask(text);
        match self
            .backend
            .translate(&unit.masked, &self.source_lang, &self.target_lang)
        {
            Ok(translated) => {
                let restored = restore(&translated, &unit.tokens);
                tracing::debug!("翻译完成: {:?} -> {:?}", text, restored);
                TranslateOutcome::Translated(restored)
            }
            Err(e) => {
                tracing::warn!("翻译失败，保留原文 {:?}: {}", text, e);
                TranslateOutcome::Failed {
                    original: text.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// 只关心最终文本时使用
    pub fn translate_text(&self, text: &str) -> String {
        self.translate(text).into_text()
    }
}
