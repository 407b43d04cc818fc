//! `compound_core`：纯逻辑层，不做任何 I/O。
//!
//! 问题：在一份词表里找出最长的“合成词”，即能按顺序由词表中**其他** ≥2 个条目拼接而成的条目。
//!
//! 分层：
//! - `lexicon`：词表抽象（文件/内存来源由上层决定）
//! - `model`：搜索状态与结果
//! - `frontier`：best-first 搜索的优先队列
//! - `matcher`：搜索本体
//!
//! ```
//! use compound_core::matcher::Matcher;
//!
//! let matcher = Matcher::new(["cat", "dog", "catdog"]).unwrap();
//! assert_eq!(matcher.find_longest_compound().unwrap().as_deref(), Some("catdog"));
//! ```
pub mod error;
mod frontier;
pub mod lexicon;
pub mod matcher;
pub mod model;

pub use error::{MatchError, MatchResult};
pub use lexicon::Lexicon;
pub use matcher::{DEFAULT_MAX_STATES, Matcher};
pub use model::{Compound, MatchState, SearchOutcome, Span, WordId};
