//! 翻译服务：外部翻译能力的抽象与具体实现

pub mod deeplx;
pub mod google;

pub use deeplx::DeepLxTranslator;
pub use google::GoogleTranslator;

use crate::model::job::FanyiError;

/// 外部翻译能力：`(文本, 源语言, 目标语言) -> 译文`
///
/// 任意 `Fn(&str, &str, &str) -> Result<String, FanyiError>` 都可直接作为翻译服务注入。
pub trait Translate {
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str)
        -> Result<String, FanyiError>;
}

impl<F> Translate for F
where
    F: Fn(&str, &str, &str) -> Result<String, FanyiError>,
{
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String, FanyiError> {
        self(text, source_lang, target_lang)
    }
}

/// 运行时选定的翻译服务，整个运行期间只创建一次
#[derive(Debug)]
pub enum Backend {
    Google(GoogleTranslator),
    DeepLx(DeepLxTranslator),
    /// 原样返回，用于试运行
    Echo,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google(_) => "google",
            Self::DeepLx(_) => "deeplx",
            Self::Echo => "echo",
        }
    }
}

impl Translate for Backend {
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String, FanyiError> {
        match self {
            Self::Google(t) => t.translate(text, source_lang, target_lang),
            Self::DeepLx(t) => t.translate(text, source_lang, target_lang),
            Self::Echo => Ok(text.to_string()),
        }
    }
}
