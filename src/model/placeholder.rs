//! 占位符遮蔽与还原：翻译前把 `{{ name }}` 换成固定哨兵，翻译后按原顺序放回

use std::sync::LazyLock;

use regex::Regex;

/// 送往翻译服务的哨兵文本
pub const SENTINEL: &str = "###PLACEHOLDER###";

// 双花括号 + 可选空白 + 非花括号内容（非贪婪）+ 可选空白 + 双花括号
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*[^{}]+?\s*\}\}").unwrap());

/// 遮蔽后的翻译单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedText {
    /// 占位符已替换为哨兵的文本
    pub masked: String,
    /// 按出现顺序提取的原始占位符
    pub tokens: Vec<String>,
}

impl MaskedText {
    pub fn has_placeholders(&self) -> bool {
        !self.tokens.is_empty()
    }
}

/// 从左到右提取所有不重叠的占位符
pub fn extract(text: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// 提取占位符并用哨兵替换
pub fn mask(text: &str) -> MaskedText {
    let tokens: Vec<String> = extract(text).into_iter().map(str::to_owned).collect();
    let masked = PLACEHOLDER_REGEX.replace_all(text, SENTINEL).into_owned();
    MaskedText { masked, tokens }
}

/// 将译文中的哨兵依次替换回占位符
///
/// 第 i 个哨兵对应第 i 个占位符。哨兵少于占位符时，多出的占位符直接丢弃；
/// 哨兵多于占位符时，多出的哨兵原样保留。
pub fn restore(translated: &str, tokens: &[String]) -> String {
    let mut out = String::with_capacity(translated.len());
    let mut tokens = tokens.iter();
    let mut pieces = translated.split(SENTINEL);

    if let Some(first) = pieces.next() {
        out.push_str(first);
    }
    for piece in pieces {
        match tokens.next() {
            Some(token) => out.push_str(token),
            None => out.push_str(SENTINEL),
        }
        out.push_str(piece);
    }

    if tokens.len() > 0 {
        tracing::debug!("译文缺少 {} 个哨兵，对应占位符未能还原", tokens.len());
    }
    out
}
