//! `frontier`：best-first 搜索的待展开队列。
//!
//! - 所有状态都放进 `nodes`（arena），堆里只存 `Pending`（优先级 + arena 下标）
//! - arena 下标同时就是创建顺序：优先级相同时先创建的先弹出（FIFO），结果可复现
//! - 每个节点记录“父节点 + 最后一段”，命中后沿父链回溯出完整切分

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::{
    error::{MatchError, MatchResult},
    model::{MatchState, WordId},
};

/// 堆元素：字段顺序即比较顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    /// (已匹配字符数, 条目字符数)，越大越优先
    priority: (usize, usize),
    /// 创建顺序，越小越优先
    order: Reverse<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    state: MatchState,
    /// (父节点下标, 接上的那一段)；初始状态为 None
    link: Option<(usize, WordId)>,
}

pub(crate) struct Frontier {
    heap: BinaryHeap<Pending>,
    nodes: Vec<Node>,
    /// 去重表：(word, matched_until 字节偏移)；None 表示关闭去重
    visited: Option<HashSet<(WordId, usize)>>,
    max_states: usize,
}

impl Frontier {
    pub(crate) fn new(capacity: usize, max_states: usize, dedup_states: bool) -> Self {
        let capacity = capacity.min(max_states);
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            visited: dedup_states.then(HashSet::new),
            max_states,
        }
    }

    /// 入队一个新状态。已访问过的 (word, matched_until) 直接丢弃。
    pub(crate) fn push(&mut self, state: MatchState, link: Option<(usize, WordId)>) -> MatchResult<()> {
        if let Some(visited) = &mut self.visited {
            if !visited.insert((state.word, state.matched_until.bytes)) {
                return Ok(());
            }
        }
        if self.nodes.len() >= self.max_states {
            return Err(MatchError::ResourceExhausted {
                limit: self.max_states,
            });
        }
        let index = self.nodes.len();
        self.nodes.push(Node { state, link });
        self.heap.push(Pending {
            priority: state.priority(),
            order: Reverse(index),
        });
        Ok(())
    }

    /// 弹出优先级最高的节点下标。
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|p| p.order.0)
    }

    pub(crate) fn state(&self, index: usize) -> MatchState {
        self.nodes[index].state
    }

    /// 已创建的状态总数。
    pub(crate) fn created(&self) -> usize {
        self.nodes.len()
    }

    /// 沿父链回溯，按顺序给出切分段。
    pub(crate) fn segments(&self, mut index: usize) -> Vec<WordId> {
        let mut out = Vec::new();
        while let Some((parent, segment)) = self.nodes[index].link {
            out.push(segment);
            index = parent;
        }
        out.reverse();
        out
    }
}
