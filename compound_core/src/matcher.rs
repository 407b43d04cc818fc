use tracing::{debug, trace};

use crate::{
    error::{MatchError, MatchResult},
    frontier::Frontier,
    lexicon::Lexicon,
    model::{Compound, MatchState, SearchOutcome, Span, WordId},
};

/// 单次搜索默认最多创建的状态数（含初始状态，每个条目一个）。
///
/// 每个状态约占 100 字节（arena 节点 + 堆元素 + 去重表项），默认上限约对应 100 MB。
/// 词表条目数超过上限时，搜索在播种阶段就会返回 `ResourceExhausted`。
pub const DEFAULT_MAX_STATES: usize = 1 << 20;

/// 匹配器：持有词表，找出“能由其他 ≥2 个条目拼成”的最长条目。
///
/// 搜索是 best-first：
/// - 每个条目一个初始状态（matched_until = 0）
/// - 每次弹出已匹配最多的状态（同分时条目更长者优先，再同分时先创建者优先）
/// - 对弹出的状态，尝试用词表里**其他**条目去接当前位置；接得上就入队新状态
/// - 第一个被弹出的完整匹配即为结果
#[derive(Debug, Clone)]
pub struct Matcher {
    /// 词表（原样保存，不去重）
    words: Vec<String>,
    /// 每个条目的长度（字节 + 字符），与 `words` 一一对应
    spans: Vec<Span>,
    /// 单次搜索的状态上限，超出即 `ResourceExhausted`
    max_states: usize,
    /// 是否按 (条目, matched_until) 去重
    dedup_states: bool,
}

impl Matcher {
    /// 按原始顺序保存词表；空串会被拒绝。
    pub fn new<I, S>(words: I) -> MatchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if let Some(index) = words.iter().position(String::is_empty) {
            return Err(MatchError::EmptyWord { index });
        }
        let spans: Vec<Span> = words.iter().map(|w| Span::of(w)).collect();
        Ok(Self {
            words,
            spans,
            max_states: DEFAULT_MAX_STATES,
            dedup_states: true,
        })
    }

    pub fn from_lexicon<L>(lexicon: &L) -> MatchResult<Self>
    where
        L: Lexicon + ?Sized,
    {
        Self::new(lexicon.words().iter().cloned())
    }

    /// 限制单次搜索最多创建多少个状态；0 会被当作 1。
    pub fn max_states(mut self, limit: usize) -> Self {
        self.max_states = limit.max(1);
        self
    }

    /// 打开/关闭状态去重。只影响性能，不影响结果。
    pub fn dedup_states(mut self, enabled: bool) -> Self {
        self.dedup_states = enabled;
        self
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// 返回最先被找到的合成词；没有则 `Ok(None)`。
    pub fn find_longest_compound(&self) -> MatchResult<Option<String>> {
        Ok(self.search()?.compound.map(|c| c.word))
    }

    /// 完整搜索：结果 + 切分段 + 状态计数。
    pub fn search(&self) -> MatchResult<SearchOutcome> {
        let mut frontier = Frontier::new(self.words.len(), self.max_states, self.dedup_states);
        for (index, span) in self.spans.iter().enumerate() {
            frontier.push(MatchState::seed(WordId(index), *span), None)?;
        }

        let mut states_expanded: usize = 0;
        while let Some(node) = frontier.pop() {
            let state: MatchState = frontier.state(node);
            if state.is_solution() {
                let compound = Compound {
                    word: self.words[state.word.0].clone(),
                    segments: frontier
                        .segments(node)
                        .into_iter()
                        .map(|id| self.words[id.0].clone())
                        .collect(),
                };
                debug!(
                    word = %compound.word,
                    segments = compound.segments.len(),
                    states_created = frontier.created(),
                    states_expanded,
                    "compound found"
                );
                return Ok(SearchOutcome {
                    compound: Some(compound),
                    states_created: frontier.created(),
                    states_expanded,
                });
            }

            states_expanded += 1;
            self.expand(&mut frontier, node, state)?;
        }

        debug!(
            words = self.words.len(),
            states_created = frontier.created(),
            states_expanded,
            "no compound word in list"
        );
        Ok(SearchOutcome {
            compound: None,
            states_created: frontier.created(),
            states_expanded,
        })
    }

    /// 在 `state.matched_until` 处逐个尝试其他条目。
    fn expand(&self, frontier: &mut Frontier, node: usize, state: MatchState) -> MatchResult<()> {
        let rest: &[u8] = &self.words[state.word.0].as_bytes()[state.matched_until.bytes..];
        let remaining: Span = state.remaining();
        trace!(word = state.word.0, matched_chars = state.matched_until.chars, "expand");

        for (index, (candidate, span)) in self.words.iter().zip(&self.spans).enumerate() {
            let id = WordId(index);
            // 按身份跳过自己；值相同的其他条目照样可用
            if id == state.word {
                continue;
            }
            if span.chars > remaining.chars {
                continue;
            }
            if rest.starts_with(candidate.as_bytes()) {
                frontier.push(state.extend(*span), Some((node, id)))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Vec<&'static str> {
        vec![
            "cat",
            "cats",
            "catsdogcats",
            "catxdogcatsrat",
            "dog",
            "dogcatsdog",
            "hippopotamuses",
            "rat",
            "ratcatdogcat",
        ]
    }

    #[test]
    fn test_builder_defaults() {
        let matcher = Matcher::new(["a", "b"]).unwrap();
        assert_eq!(matcher.max_states, DEFAULT_MAX_STATES);
        assert_eq!(DEFAULT_MAX_STATES, 1 << 20);
        assert!(matcher.dedup_states);
        assert_eq!(matcher.max_states(0).max_states, 1);
    }

    #[test]
    fn test_words_kept_in_order() {
        let matcher = Matcher::new(["b", "a", "b"]).unwrap();
        assert_eq!(matcher.words(), ["b", "a", "b"]);
    }

    #[test]
    fn test_from_lexicon() {
        let words: Vec<String> = vec!["cat".into(), "dog".into(), "catdog".into()];
        let matcher = Matcher::from_lexicon(&words).unwrap();
        assert_eq!(matcher.find_longest_compound().unwrap().as_deref(), Some("catdog"));
    }

    #[test]
    fn test_segments_of_classic() {
        let outcome = Matcher::new(classic()).unwrap().search().unwrap();
        let compound = outcome.compound.unwrap();
        assert_eq!(compound.word, "ratcatdogcat");
        assert_eq!(compound.segments, vec!["rat", "cat", "dog", "cat"]);
        assert_eq!(compound.segments.concat(), compound.word);
        assert!(outcome.states_expanded > 0);
        assert!(outcome.states_created >= classic().len());
    }

    fn found_with_and_without_dedup(words: &[&str]) -> (Option<String>, Option<String>) {
        let with = Matcher::new(words.iter().copied())
            .unwrap()
            .dedup_states(true)
            .find_longest_compound()
            .unwrap();
        let without = Matcher::new(words.iter().copied())
            .unwrap()
            .dedup_states(false)
            .find_longest_compound()
            .unwrap();
        (with, without)
    }

    #[test]
    fn test_dedup_does_not_change_result() {
        // "aaaa" 可以有很多种切法，去重与否结果一致
        let words = ["a", "aa", "aaa", "aaaa", "b"];
        let with = Matcher::new(words).unwrap().dedup_states(true).search().unwrap();
        let without = Matcher::new(words).unwrap().dedup_states(false).search().unwrap();
        assert_eq!(
            with.compound.as_ref().map(|c| c.word.as_str()),
            without.compound.as_ref().map(|c| c.word.as_str())
        );
        assert_eq!(with.compound.unwrap().word, "aaaa");
        assert!(with.states_created <= without.states_created);
    }

    #[test]
    fn test_dedup_agrees_on_harder_lists() {
        let cases: [(&[&str], Option<&str>); 8] = [
            // 重复条目互为切分段
            (&["ab", "ab", "a", "b"], Some("ab")),
            (&["abab", "ab", "ab", "a", "b", "ba"], Some("abab")),
            // 多个等长合成词，按词表顺序取第一个
            (&["ab", "cd", "abcd", "cdab", "acbd"], Some("abcd")),
            (&["x", "y", "xy", "yx", "xyxy", "yxyx", "xyyx"], Some("xyxy")),
            // 最长条目有大量切法，全部在最后一个字符走不通
            (&["a", "aa", "aaa", "aaaa", "aaaaaaab"], Some("aaaa")),
            (&["ba", "baa", "aa", "baaab"], None),
            // 同一位置可由不同顺序的切分到达
            (&["ab", "c", "a", "bc", "abc", "abcabc"], Some("abcabc")),
            // 混合多字节字符
            (&["é", "éé", "a", "aaa", "éa", "aé"], Some("aaa")),
        ];
        for (words, expected) in cases {
            let (with, without) = found_with_and_without_dedup(words);
            assert_eq!(with, without, "dedup changed result for {words:?}");
            assert_eq!(with.as_deref(), expected, "unexpected result for {words:?}");
        }
    }

    #[test]
    fn test_budget_exhausted() {
        let matcher = Matcher::new(classic()).unwrap().max_states(12);
        assert_eq!(
            matcher.find_longest_compound(),
            Err(MatchError::ResourceExhausted { limit: 12 })
        );
    }

    #[test]
    fn test_budget_smaller_than_word_list() {
        let matcher = Matcher::new(["a", "b", "c"]).unwrap().max_states(2);
        assert_eq!(
            matcher.search(),
            Err(MatchError::ResourceExhausted { limit: 2 })
        );
    }

    #[test]
    fn test_multibyte_words() {
        let matcher = Matcher::new(["北京", "大学", "北京大学", "学"]).unwrap();
        let compound = matcher.search().unwrap().compound.unwrap();
        assert_eq!(compound.word, "北京大学");
        assert_eq!(compound.segments, vec!["北京", "大学"]);
    }
}
