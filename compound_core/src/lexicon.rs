/// 词表抽象：core 不关心词表来自文件/内存/网络。
///
/// 约定：
/// - `words()` 按原始顺序返回全部条目（不去重）
/// - 条目的“身份”是它在切片中的下标，而不是字符串值
/// - 条目应当已经 trim 且非空（空串会在 `Matcher` 构造时被拒绝）
pub trait Lexicon: Send + Sync {
    fn words(&self) -> &[String];
}

impl Lexicon for [String] {
    fn words(&self) -> &[String] {
        self
    }
}

impl Lexicon for Vec<String> {
    fn words(&self) -> &[String] {
        self.as_slice()
    }
}
