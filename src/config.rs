//! 运行配置：语言与翻译服务选择

use clap::ValueEnum;

use crate::backend::{Backend, DeepLxTranslator, GoogleTranslator};
use crate::model::job::FanyiError;

pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_TARGET_LANG: &str = "zh-CN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Google 网页翻译接口
    Google,
    /// DeepLX 兼容服务
    Deeplx,
    /// 不翻译，原样输出
    Echo,
}

#[derive(Debug, Clone)]
pub struct FanyiConfig {
    pub source_lang: String,
    pub target_lang: String,
    pub backend: BackendKind,
    /// 覆盖翻译服务的默认地址
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl Default for FanyiConfig {
    fn default() -> Self {
        Self {
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
            backend: BackendKind::Google,
            endpoint: None,
            api_key: None,
        }
    }
}

impl FanyiConfig {
    /// 创建翻译服务实例
    pub fn build_backend(&self) -> Result<Backend, FanyiError> {
        let endpoint = self.endpoint.as_deref();
        let backend = match self.backend {
            BackendKind::Google => {
                if self.api_key.is_some() {
                    tracing::warn!("google 翻译服务不使用 api key，已忽略");
                }
                Backend::Google(GoogleTranslator::new(endpoint)?)
            }
            BackendKind::Deeplx => Backend::DeepLx(DeepLxTranslator::new(endpoint, self.api_key.clone())?),
            BackendKind::Echo => Backend::Echo,
        };
        tracing::debug!("使用翻译服务: {}", backend.name());
        Ok(backend)
    }
}
