//! JSON本地化文件翻译工具库
//!
//! 递归遍历JSON文档，逐个翻译字符串叶子节点，
//! 翻译前后对 `{{ 占位符 }}` 进行遮蔽与还原，保证插值变量不被破坏

pub mod backend;
pub mod config;
pub mod model;
pub mod utils;

// 重新导出主要类型
pub use backend::{Backend, Translate};
pub use config::{BackendKind, FanyiConfig};
pub use model::job::{FanyiError, TranslationJob};
pub use model::translator::{PlaceholderTranslator, TranslateOutcome};
pub use model::walker::{walk, DocumentWalker, FailedLeaf, WalkReport};
