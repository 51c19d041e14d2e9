//! DeepLX 兼容服务（POST /translate）

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::Translate;
use crate::model::job::FanyiError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:1188";

#[derive(Debug, Clone)]
pub struct DeepLxTranslator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeepLxRequest<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct DeepLxResponse {
    code: u16,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl DeepLxTranslator {
    pub fn new(endpoint: Option<&str>, api_key: Option<String>) -> Result<Self, FanyiError> {
        let client = Client::builder()
            .user_agent(concat!("locale_fanyi/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint
                .unwrap_or(DEFAULT_ENDPOINT)
                .trim_end_matches('/')
                .to_string(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translate for DeepLxTranslator {
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String, FanyiError> {
        let source = deepl_lang(source_lang, false);
        let target = deepl_lang(target_lang, true);
        let body = DeepLxRequest {
            text,
            source_lang: &source,
            target_lang: &target,
        };
        let mut req = self
            .client
            .post(format!("{}/translate", self.endpoint))
            .json(&body);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        let resp = req.send()?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(FanyiError::Backend(format!("DeepLX ({}): {}", status, text)));
        }

        let body = resp.text()?;
        parse_response(&body)
    }
}

/// 将 BCP 47 风格标签（`zh-CN`、`en_us`）转为 DeepL 语言代码
///
/// 源语言只取主语言；目标语言保留 DeepL 支持的变体（`EN-US`、`PT-BR`、`ZH-HANT`）。
pub fn deepl_lang(tag: &str, is_target: bool) -> String {
    let upper = tag.trim().replace('_', "-").to_ascii_uppercase();
    let (base, region) = match upper.split_once('-') {
        Some((base, region)) => (base, Some(region)),
        None => (upper.as_str(), None),
    };
    match (base, region) {
        ("ZH", Some("TW" | "HK" | "MO" | "HANT")) if is_target => "ZH-HANT".to_string(),
        ("EN" | "PT", Some(region)) if is_target => format!("{}-{}", base, region),
        (base, _) => base.to_string(),
    }
}

/// 解析 `{"code": 200, "data": "..."}`
pub fn parse_response(body: &str) -> Result<String, FanyiError> {
    let resp: DeepLxResponse = serde_json::from_str(body)?;
    if resp.code != 200 {
        return Err(FanyiError::Backend(format!(
            "DeepLX code {}: {}",
            resp.code,
            resp.message.unwrap_or_default()
        )));
    }
    resp.data
        .ok_or_else(|| FanyiError::Backend("DeepLX响应缺少data字段".into()))
}
