//! 深度遍历：对JSON中每个字符串叶子调用翻译器，重建同构文档

use serde_json::{Map, Value};

use crate::backend::Translate;
use crate::model::translator::{PlaceholderTranslator, TranslateOutcome};

/// 翻译失败的叶子节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedLeaf {
    /// JSONPath（如 `$.user.name`、`$['key with spaces']`、`$.items[0]`）
    pub path: String,
    pub reason: String,
}

/// 一次遍历的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    pub translated: usize,
    pub skipped: usize,
    pub failed: Vec<FailedLeaf>,
}

impl WalkReport {
    pub fn total_strings(&self) -> usize {
        self.translated + self.skipped + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// 遍历文档并翻译所有字符串叶子，只返回新文档
pub fn walk<T: Translate>(value: &Value, translator: &PlaceholderTranslator<T>) -> Value {
    DocumentWalker::new(translator).walk(value)
}

/// 带统计的文档遍历器
pub struct DocumentWalker<'a, T> {
    translator: &'a PlaceholderTranslator<T>,
    report: WalkReport,
}

impl<'a, T: Translate> DocumentWalker<'a, T> {
    pub fn new(translator: &'a PlaceholderTranslator<T>) -> Self {
        Self {
            translator,
            report: WalkReport::default(),
        }
    }

    pub fn into_report(self) -> WalkReport {
        self.report
    }

    /// 从根节点 `$` 开始遍历
    pub fn walk(&mut self, value: &Value) -> Value {
        self.walk_at(value, "$")
    }

    fn walk_at(&mut self, value: &Value, path: &str) -> Value {
        match value {
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (k, child) in map {
                    let field_path = field_path(path, k);
                    out.insert(k.clone(), self.walk_at(child, &field_path));
                }
                Value::Object(out)
            }
            Value::Array(arr) => Value::Array(
                arr.iter()
                    .enumerate()
                    .map(|(idx, child)| self.walk_at(child, &format!("{}[{}]", path, idx)))
                    .collect(),
            ),
            Value::String(s) => Value::String(self.translate_leaf(s, path)),
            // 数字、布尔、null 原样返回
            other => other.clone(),
        }
    }

    fn translate_leaf(&mut self, text: &str, path: &str) -> String {
        let outcome = self.translator.translate(text);
        match &outcome {
            TranslateOutcome::Translated(_) => self.report.translated += 1,
            TranslateOutcome::Skipped(_) => self.report.skipped += 1,
            TranslateOutcome::Failed { reason, .. } => {
                tracing::debug!("节点 {} 翻译失败，已保留原文", path);
                self.report.failed.push(FailedLeaf {
                    path: path.to_string(),
                    reason: reason.clone(),
                });
            }
        }
        outcome.into_text()
    }
}

// JSONPath 字段含特殊字符时使用 bracket-notation
fn field_path(parent: &str, key: &str) -> String {
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        format!("{}.{}", parent, key)
    } else {
        let escaped = key.replace('\\', "\\\\").replace('\'', "\\'");
        format!("{}['{}']", parent, escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::job::FanyiError;
    use serde_json::json;
    use std::cell::Cell;

    fn identity(text: &str, _: &str, _: &str) -> Result<String, FanyiError> {
        Ok(text.to_string())
    }

    fn upper(text: &str, _: &str, _: &str) -> Result<String, FanyiError> {
        Ok(text.to_uppercase())
    }

    /// 只比较结构：键、数组长度、标量类型
    fn same_shape(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Object(x), Value::Object(y)) => {
                x.len() == y.len()
                    && x.iter()
                        .zip(y.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && same_shape(va, vb))
            }
            (Value::Array(x), Value::Array(y)) => {
                x.len() == y.len() && x.iter().zip(y).all(|(va, vb)| same_shape(va, vb))
            }
            (Value::String(_), Value::String(_)) => true,
            (Value::Number(x), Value::Number(y)) => x == y,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }

    #[test]
    fn test_greeting_end_to_end() {
        let translator = PlaceholderTranslator::new(upper, "en", "zh-CN");
        let input = json!({"greeting": "Hello {{name}}, you have {{count}} items"});
        let output = walk(&input, &translator);
        assert_eq!(
            output,
            json!({"greeting": "HELLO {{name}}, YOU HAVE {{count}} ITEMS"})
        );
    }

    #[test]
    fn test_identity_backend_yields_equal_document() {
        let translator = PlaceholderTranslator::new(identity, "en", "zh-CN");
        let input = json!({"empty": "", "n": 42, "list": ["a {{x}} b"]});
        assert_eq!(walk(&input, &translator), input);
    }

    #[test]
    fn test_shape_is_preserved() {
        let translator = PlaceholderTranslator::new(upper, "en", "ja");
        let input = json!({
            "common": {
                "ok": "OK",
                "cancel": "Cancel",
                "nested": {"deep": ["one", {"two": "two"}, [3, "three"]]}
            },
            "flags": [true, false, null],
            "ratio": 0.5,
            "count": -7
        });
        let output = walk(&input, &translator);
        assert!(same_shape(&input, &output), "遍历前后结构应一致");
        assert_eq!(output["common"]["nested"]["deep"][2][1], json!("THREE"));
        assert_eq!(output["ratio"], json!(0.5));
    }

    #[test]
    fn test_key_order_is_preserved() {
        let translator = PlaceholderTranslator::new(identity, "en", "ko");
        let input: Value = serde_json::from_str(r#"{"zeta": "z", "alpha": "a", "mid": "m"}"#).unwrap();
        let output = walk(&input, &translator);
        let keys: Vec<&String> = output.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_scalars_pass_through_without_backend_calls() {
        let calls = Cell::new(0);
        let counting = |text: &str, _: &str, _: &str| -> Result<String, FanyiError> {
            calls.set(calls.get() + 1);
            Ok(text.to_string())
        };
        let translator = PlaceholderTranslator::new(counting, "en", "ko");

        for scalar in [json!(42), json!(1.25), json!(true), json!(false), json!(null)] {
            assert_eq!(walk(&scalar, &translator), scalar);
        }
        assert_eq!(walk(&json!([1, null, {"a": false}]), &translator), json!([1, null, {"a": false}]));
        assert_eq!(calls.get(), 0, "标量不应调用翻译服务");
    }

    #[test]
    fn test_root_string_is_translated() {
        let translator = PlaceholderTranslator::new(upper, "en", "ko");
        assert_eq!(walk(&json!("hi {{x}}"), &translator), json!("HI {{x}}"));
    }

    #[test]
    fn test_report_counts_and_failed_paths() {
        let flaky = |text: &str, _: &str, _: &str| -> Result<String, FanyiError> {
            if text.contains("boom") {
                Err(FanyiError::Backend("service unavailable".into()))
            } else {
                Ok(text.to_uppercase())
            }
        };
        let translator = PlaceholderTranslator::new(flaky, "en", "ko");
        let input = json!({
            "ok": "fine",
            "blank": "  ",
            "bad": "boom {{x}}",
            "key with spaces": ["fine", "boom"]
        });

        let mut walker = DocumentWalker::new(&translator);
        let output = walker.walk(&input);
        let report = walker.into_report();

        assert_eq!(output["bad"], json!("boom {{x}}"), "失败节点应保留原文");
        assert_eq!(output["key with spaces"], json!(["FINE", "boom"]));
        assert_eq!(report.translated, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.total_strings(), 5);
        assert!(report.has_failures());

        let paths: Vec<&str> = report.failed.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["$.bad", "$['key with spaces'][1]"]);
        assert!(report.failed[0].reason.contains("service unavailable"));
    }

    #[test]
    fn test_field_path_notation() {
        assert_eq!(field_path("$", "normal_key"), "$.normal_key");
        assert_eq!(field_path("$.a", "key-with-dashes"), "$.a['key-with-dashes']");
        assert_eq!(field_path("$", "key.with.dots"), "$['key.with.dots']");
        assert_eq!(field_path("$", "key'with'quotes"), "$['key\\'with\\'quotes']");
        assert_eq!(field_path("$", ""), "$['']");
    }

    #[test]
    fn test_field_path_escapes_backslash_before_quote() {
        assert_eq!(field_path("$", "a\\"), r"$['a\\']");
        assert_eq!(field_path("$", r"a\'b"), r"$['a\\\'b']");
    }

    #[test]
    fn test_numbers_keep_exact_text() {
        let translator = PlaceholderTranslator::new(identity, "en", "ko");
        let raw = r#"{"id":12345678901234567890123,"p":0.10000000000000000000001,"big":18446744073709551616}"#;
        let input: Value = serde_json::from_str(raw).unwrap();
        let output = walk(&input, &translator);
        assert_eq!(serde_json::to_string(&output).unwrap(), raw, "数字叶子应原样保留");
    }
}
