//! Google 网页翻译接口（translate_a/single，client=gtx）

use reqwest::blocking::Client;
use serde_json::Value;

use super::Translate;
use crate::model::job::FanyiError;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: Option<&str>) -> Result<Self, FanyiError> {
        let client = Client::builder()
            .user_agent(concat!("locale_fanyi/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint
                .unwrap_or(DEFAULT_ENDPOINT)
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translate for GoogleTranslator {
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String, FanyiError> {
        let resp = self
            .client
            .get(format!("{}/translate_a/single", self.endpoint))
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            return Err(FanyiError::Backend(format!("Google ({}): {}", status, body)));
        }

        let body = resp.text()?;
        parse_response(&body)
    }
}

/// 解析 `[[["译文","原文",...], ...], ...]`，拼接所有分段译文
pub fn parse_response(body: &str) -> Result<String, FanyiError> {
    let value: Value = serde_json::from_str(body)?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| FanyiError::Backend(format!("Google响应格式异常: {}", body)))?;

    let mut out = String::new();
    for seg in segments {
        if let Some(s) = seg.get(0).and_then(Value::as_str) {
            out.push_str(s);
        }
    }
    Ok(out)
}
