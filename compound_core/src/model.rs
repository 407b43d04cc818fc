/// 词表条目的身份：条目在词表中的下标。
///
/// 注意：两个值相同的条目是**不同**的 `WordId`，其中一个可以作为另一个的切分段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub usize);

/// 一段文本的长度：`bytes` 用于切片与前缀比较，`chars` 用于排序（按字符数比较长短）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub bytes: usize,
    pub chars: usize,
}

impl Span {
    pub fn of(text: &str) -> Self {
        Self {
            bytes: text.len(),
            chars: text.chars().count(),
        }
    }
}

impl std::ops::Add for Span {
    type Output = Span;

    fn add(self, other: Span) -> Span {
        Span {
            bytes: self.bytes + other.bytes,
            chars: self.chars + other.chars,
        }
    }
}

impl std::ops::Sub for Span {
    type Output = Span;

    fn sub(self, other: Span) -> Span {
        Span {
            bytes: self.bytes - other.bytes,
            chars: self.chars - other.chars,
        }
    }
}

/// 搜索状态：条目 `word` 的前缀 `[0, matched_until)` 已被其他条目拼接覆盖。
///
/// 状态不可变：`extend` 总是生成新状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchState {
    /// 被匹配的条目
    pub word: WordId,
    /// 已确认前缀的长度（字节偏移 + 字符数）
    pub matched_until: Span,
    /// 条目长度，排序时使用，避免回查词表
    pub word_len: Span,
}

impl MatchState {
    /// 初始状态：什么都还没匹配。
    pub fn seed(word: WordId, word_len: Span) -> Self {
        Self {
            word,
            matched_until: Span::default(),
            word_len,
        }
    }

    /// 再接上一段长度为 `segment` 的条目。调用方保证不越界。
    pub fn extend(&self, segment: Span) -> Self {
        debug_assert!(segment.bytes <= self.remaining().bytes);
        Self {
            matched_until: self.matched_until + segment,
            ..*self
        }
    }

    /// 尚未匹配的后缀长度。
    pub fn remaining(&self) -> Span {
        self.word_len - self.matched_until
    }

    pub fn is_solution(&self) -> bool {
        self.matched_until.bytes == self.word_len.bytes
    }

    /// 优先级：先比已匹配字符数，再比条目字符数，都是越大越优先。
    pub fn priority(&self) -> (usize, usize) {
        (self.matched_until.chars, self.word_len.chars)
    }
}

/// 找到的合成词及其切分。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    /// 合成词本身
    pub word: String,
    /// 按顺序拼接后等于 `word` 的切分段（至少一段）
    pub segments: Vec<String>,
}

/// 一次搜索的完整结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// 第一个被弹出的完整匹配；没有则为 None
    pub compound: Option<Compound>,
    /// 创建过的状态数（含初始状态）
    pub states_created: usize,
    /// 被弹出并展开过的状态数
    pub states_expanded: usize,
}
