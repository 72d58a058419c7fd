use crate::seq::LazySeq;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::cmp::Reverse;
use std::hash::Hash;
use std::rc::Rc;
use tracing::debug;

impl<'a, T: 'a> LazySeq<'a, T> {
    /// 过滤，只保留满足条件的元素，保持原有顺序。
    pub fn filter(self, predicate: impl FnMut(&T) -> bool + 'a) -> LazySeq<'a, T> {
        let upstream = self.into_producer();
        let predicate = Rc::new(RefCell::new(predicate));
        LazySeq::from_producer(move || {
            let predicate = Rc::clone(&predicate);
            Box::new(upstream().filter(move |item| (*predicate.borrow_mut())(item)))
        })
    }

    /// 映射，每个元素一对一转换。
    pub fn map<U: 'a>(self, transform: impl FnMut(T) -> U + 'a) -> LazySeq<'a, U> {
        let upstream = self.into_producer();
        let transform = Rc::new(RefCell::new(transform));
        LazySeq::from_producer(move || {
            let transform = Rc::clone(&transform);
            Box::new(upstream().map(move |item| (*transform.borrow_mut())(item)))
        })
    }

    /// 映射并展开一层，按上游顺序拼接每个元素产生的零个或多个子元素。
    pub fn flat_map<U, F>(self, transform: F) -> LazySeq<'a, U::Item>
    where
        U: IntoIterator + 'a,
        U::IntoIter: 'a,
        F: FnMut(T) -> U + 'a,
    {
        let upstream = self.into_producer();
        let transform = Rc::new(RefCell::new(transform));
        LazySeq::from_producer(move || {
            let transform = Rc::clone(&transform);
            Box::new(upstream().flat_map(move |item| (*transform.borrow_mut())(item)))
        })
    }

    /// 访问每个被拉取的元素，不改变元素。
    pub fn inspect(self, f: impl FnMut(&T) + 'a) -> LazySeq<'a, T> {
        let upstream = self.into_producer();
        let f = Rc::new(RefCell::new(f));
        LazySeq::from_producer(move || {
            let f = Rc::clone(&f);
            Box::new(upstream().inspect(move |item| (*f.borrow_mut())(item)))
        })
    }

    /// 去重，只保留首次出现的元素。
    ///
    /// 已出现元素的集合归属于单次拉取，重复拉取同一序列时每次都从空集合开始。
    pub fn distinct(self) -> LazySeq<'a, T>
    where
        T: Eq + Hash + Clone,
    {
        let upstream = self.into_producer();
        LazySeq::from_producer(move || {
            let mut seen = FxHashSet::default();
            Box::new(upstream().filter(move |item| seen.insert(item.clone())))
        })
    }

    /// 排序，非惰性操作：调用时立即拉取全部上游元素，上游必须是有限的。
    ///
    /// 排序是稳定的，逆序时相等元素仍保持原有的相对顺序。排序结果只能被拉取一次。
    pub fn sorted(self, reverse: bool) -> LazySeq<'a, T>
    where
        T: Ord,
    {
        let source = self.pull();
        let sorted = if reverse { source.sorted_by(|l, r| r.cmp(l)) } else { source.sorted() };
        debug!(len = sorted.len(), reverse, "sequence materialized for sorting");
        LazySeq::wrap_once(sorted)
    }

    /// 按照键排序，非惰性操作，语义同[`LazySeq::sorted`]。
    pub fn sorted_by_key<K, F>(self, mut key: F, reverse: bool) -> LazySeq<'a, T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let source = self.pull();
        let sorted = if reverse {
            source.sorted_by_key(|item| Reverse(key(item)))
        } else {
            source.sorted_by_key(key)
        };
        debug!(len = sorted.len(), reverse, "sequence materialized for sorting by key");
        LazySeq::wrap_once(sorted)
    }

    /// 与另一个数据源按位置配对，任意一方耗尽时结束。每次拉取都从克隆的`other`开始。
    pub fn zip<I>(self, other: I) -> LazySeq<'a, (T, I::Item)>
    where
        I: IntoIterator + Clone + 'a,
        I::IntoIter: 'a,
    {
        let upstream = self.into_producer();
        LazySeq::from_producer(move || Box::new(upstream().zip(other.clone())))
    }

    /// 为每个元素附加从0开始的位置。
    pub fn enumerate(self) -> LazySeq<'a, (usize, T)> {
        let upstream = self.into_producer();
        LazySeq::from_producer(move || Box::new(upstream().enumerate()))
    }
}
