//! # 有界撤销/重做历史
//!
//! 两个固定容量的环形栈：`undo` 与 `redo`，栈顶最新，
//! 容量写满后推入新项时静默覆盖最旧一项。
//! 容量上限由配置的 `history_limit` 给定；非正数的上限
//! 表示历史完全停用（record 为 no-op，撤销/重做永远不可用）。
//!
//! **不变量**：两栈长度任何时刻都不超过容量；
//! 任何非撤销/重做的编辑都会清空 `redo`。

use crate::core::canvas::MapState;

/// 固定容量环形栈。
///
/// `head` 指向下一次写入的槽位；写满后该槽位恰好是最旧项，
/// 覆盖即淘汰，无需搬移数组。
#[derive(Debug)]
struct BoundedStack {
    slots: Vec<Option<MapState>>,
    head: usize,
    len: usize,
}

impl BoundedStack {
    fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            head: 0,
            len: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, state: MapState) {
        if self.slots.is_empty() {
            return;
        }
        self.slots[self.head] = Some(state);
        self.head = (self.head + 1) % self.slots.len();
        if self.len < self.slots.len() {
            self.len += 1;
        }
    }

    fn pop(&mut self) -> Option<MapState> {
        if self.len == 0 {
            return None;
        }
        let cap = self.slots.len();
        self.head = (self.head + cap - 1) % cap;
        self.len -= 1;
        self.slots[self.head].take()
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }
}

/// 撤销/重做状态机。
///
/// 快照的交换协议：撤销把"当前"压入 redo 再弹出 undo 顶，
/// 重做对称。两个方向都不清空对侧栈；只有 [`History::record`]
/// （即一次新编辑）清空 redo。
#[derive(Debug)]
pub struct History {
    undo: BoundedStack,
    redo: BoundedStack,
}

impl History {
    /// `limit <= 0` 时历史停用。
    pub fn new(limit: i64) -> Self {
        let capacity = limit.max(0) as usize;
        Self {
            undo: BoundedStack::new(capacity),
            redo: BoundedStack::new(capacity),
        }
    }

    /// 一次离散编辑动作前调用（每笔划/清空/导入/新建各一次，
    /// 不是每个采样点一次）。
    pub fn record(&mut self, current: MapState) {
        if self.undo.capacity() == 0 {
            return;
        }
        self.undo.push(current);
        self.redo.clear();
    }

    /// 无可撤销时返回 None 且不动任何栈。
    pub fn undo(&mut self, current: MapState) -> Option<MapState> {
        if self.undo.is_empty() {
            return None;
        }
        self.redo.push(current);
        self.undo.pop()
    }

    /// 与 [`History::undo`] 对称。
    pub fn redo(&mut self, current: MapState) -> Option<MapState> {
        if self.redo.is_empty() {
            return None;
        }
        self.undo.push(current);
        self.redo.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canvas::Canvas;
    use crate::core::color::LAND;

    /// 造一个内容随 tag 变化的快照，便于断言取回的是哪一份。
    fn state(tag: i32) -> MapState {
        let mut canvas = Canvas::new(4, 1);
        canvas.set_terrain(0, 0, LAND);
        canvas.adjust_elevation(0, 0, tag);
        canvas.snapshot()
    }

    #[test]
    fn test_empty_history_reports_nothing() {
        let mut history = History::new(50);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(state(0)), None);
        assert_eq!(history.redo(state(0)), None);
    }

    #[test]
    fn test_undo_redo_roundtrip_is_bit_exact() {
        let mut history = History::new(50);
        let s0 = state(0);
        let s1 = state(1);

        history.record(s0.clone());
        let back = history.undo(s1.clone()).unwrap();
        assert_eq!(back, s0);

        let forward = history.redo(back).unwrap();
        assert_eq!(forward, s1);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new(50);
        history.record(state(0));
        history.undo(state(1)).unwrap();
        assert!(history.can_redo());

        history.record(state(2));
        assert!(!history.can_redo());
        assert_eq!(history.redo(state(3)), None);
    }

    #[test]
    fn test_undo_does_not_clear_undo_stack() {
        let mut history = History::new(50);
        history.record(state(0));
        history.record(state(1));
        history.undo(state(2)).unwrap();
        assert!(history.can_undo());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_bounded_push_evicts_oldest() {
        let limit = 3;
        let mut history = History::new(limit);
        for i in 0..limit + 2 {
            history.record(state(i as i32));
        }
        assert_eq!(history.undo_len(), limit as usize);

        // 留下的应当恰好是最新的 limit 份，LIFO 弹出
        for expected in (2..limit + 2).rev() {
            let got = history.undo(state(99)).unwrap();
            assert_eq!(got, state(expected as i32));
        }
        assert_eq!(history.undo(state(99)), None);
    }

    #[test]
    fn test_limit_one_keeps_only_latest() {
        let mut history = History::new(1);
        history.record(state(0)); // 第一笔编辑前的快照，将被淘汰
        history.record(state(1)); // 第二笔编辑前的快照

        let back = history.undo(state(2)).unwrap();
        assert_eq!(back, state(1));
        assert_eq!(history.undo(state(2)), None);
    }

    #[test]
    fn test_nonpositive_limit_disables_history() {
        let mut history = History::new(0);
        history.record(state(0));
        assert!(!history.can_undo());
        assert_eq!(history.undo(state(1)), None);

        let mut history = History::new(-5);
        history.record(state(0));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_redo_stack_is_bounded_too() {
        let limit = 2;
        let mut history = History::new(limit);
        // 积累 2 份可撤销，再全部撤销并反复 redo/undo 不会越界
        history.record(state(0));
        history.record(state(1));
        history.undo(state(2)).unwrap();
        history.undo(state(1)).unwrap();
        assert_eq!(history.redo_len(), limit as usize);
        assert_eq!(history.undo_len(), 0);
    }
}
