use crate::seq::LazySeq;
use indexmap::IndexMap;
use itertools::Itertools;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;
use tracing::trace;

/// 分组结果，键按照首次出现的顺序排列。
pub type Groups<K, T> = IndexMap<K, Vec<T>, FxBuildHasher>;

impl<'a, T: 'a> LazySeq<'a, T> {
    /// 拉取全部元素。无限序列必须先通过[`LazySeq::take`]限定数量，否则不会返回。
    pub fn collect(self) -> Vec<T> {
        self.pull().collect()
    }

    /// 第一个元素，空序列返回`None`，最多只拉取一个元素。
    pub fn first(self) -> Option<T> {
        self.pull().next()
    }

    /// 拉取全部元素并计数。
    pub fn count(self) -> usize {
        self.pull().count()
    }

    /// 从`initial`开始按顺序左折叠，空序列直接返回`initial`。
    pub fn reduce<A>(self, reducer: impl FnMut(A, T) -> A, initial: A) -> A {
        self.pull().fold(initial, reducer)
    }

    /// 是否存在满足条件的元素，遇到第一个满足条件的元素即停止拉取。
    pub fn any(self, predicate: impl FnMut(T) -> bool) -> bool {
        self.pull().any(predicate)
    }

    /// 是否存在任意元素，最多只拉取一个元素。
    pub fn non_empty(self) -> bool {
        self.pull().next().is_some()
    }

    /// 是否所有元素都满足条件，遇到第一个不满足条件的元素即停止拉取，空序列返回`true`。
    pub fn all(self, predicate: impl FnMut(T) -> bool) -> bool {
        self.pull().all(predicate)
    }

    /// 拉取全部元素并按键分组，组内元素保持原有顺序。
    pub fn group_by<K, F>(self, mut key_fn: F) -> Groups<K, T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups = Groups::default();
        for item in self.pull() {
            groups.entry(key_fn(&item)).or_insert_with(Vec::new).push(item);
        }
        trace!(groups = groups.len(), "sequence grouped");
        groups
    }
}

impl<'a, T: 'a, E: 'a> LazySeq<'a, Result<T, E>> {
    /// 拉取全部元素，遇到第一个错误时停止拉取并原样返回该错误。
    pub fn try_collect(self) -> Result<Vec<T>, E> {
        Itertools::try_collect(self.pull())
    }

    /// 同[`LazySeq::reduce`]，遇到第一个错误时停止拉取并原样返回该错误。
    pub fn try_reduce<A>(self, reducer: impl FnMut(A, T) -> A, initial: A) -> Result<A, E> {
        self.pull().fold_ok(initial, reducer)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Integer, LazySeq};
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_lazy_pipeline() {
        let result = LazySeq::range_to(1_000_000).filter(|x| x % 2 == 0).map(|x| x * 2).take(10).collect();
        assert_eq!(result, vec![0, 4, 8, 12, 16, 20, 24, 28, 32, 36]);
    }

    #[test]
    fn test_first() {
        assert_eq!(LazySeq::range(5, 10).first(), Some(5));
        assert_eq!(LazySeq::<Integer>::empty().first(), None);
    }

    #[test]
    fn test_first_short_circuit() {
        let tested = Cell::new(0);
        let first = LazySeq::range(-1_000_000, 1_000_000)
            .filter(|x| {
                tested.set(tested.get() + 1);
                *x > 0
            })
            .first();
        assert_eq!(first, Some(1));
        // 谓词恰好执行到首个匹配所在的位置，之后的元素既不拉取也不缓存
        assert_eq!(tested.get(), 1_000_002);
    }

    #[test]
    fn test_terminal_repeatable() {
        let odd = LazySeq::range_to(10).filter(|x| x % 2 == 1);
        assert_eq!(odd.clone().count(), 5);
        assert_eq!(odd.clone().first(), Some(1));
        assert_eq!(odd.clone().reduce(|acc: Integer, x| acc + x, 0), 25);
        assert_eq!(odd.collect(), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    #[should_panic(expected = "bad element 3")]
    fn test_transform_panic_propagates() {
        LazySeq::range_to(10).map(|x| if x == 3 { panic!("bad element {x}") } else { x }).take(5).collect();
    }

    #[test]
    fn test_transform_panic_stops_pulling() {
        let pulled = Cell::new(0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            LazySeq::range_to(Integer::MAX)
                .inspect(|_| pulled.set(pulled.get() + 1))
                .map(|x| if x == 3 { panic!("bad element {x}") } else { x })
                .take(5)
                .collect()
        }));
        assert!(result.is_err());
        // 失败元素之后的元素不会被拉取
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_first_pulls_one() {
        let pulled = Cell::new(0);
        let first = LazySeq::range_to(Integer::MAX).inspect(|_| pulled.set(pulled.get() + 1)).first();
        assert_eq!(first, Some(0));
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_count() {
        assert_eq!(LazySeq::range_to(100).filter(|x| x % 3 == 0).count(), 34);
        assert_eq!(LazySeq::<Integer>::empty().count(), 0);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(LazySeq::range_to(5).reduce(|acc: Integer, x| acc + x * x, 0), 30);
        assert_eq!(LazySeq::wrap(vec!["a", "b"]).reduce(|acc: String, x| acc + x, String::from(">")), ">ab");
        assert_eq!(LazySeq::<Integer>::empty().reduce(|acc: Integer, x| acc * x, 7), 7);
    }

    #[test]
    fn test_any() {
        assert!(LazySeq::range_to(10).any(|x| x == 9));
        assert!(!LazySeq::range_to(10).any(|x| x > 9));
        assert!(!LazySeq::<Integer>::empty().any(|_| true));
        assert!(LazySeq::range_to(1).non_empty());
        assert!(!LazySeq::<Integer>::empty().non_empty());
    }

    #[test]
    fn test_any_short_circuit() {
        let pulled = Cell::new(0);
        assert!(LazySeq::range_to(Integer::MAX).inspect(|_| pulled.set(pulled.get() + 1)).any(|x| x == 3));
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_all() {
        assert!(LazySeq::range_to(10).all(|x| x < 10));
        assert!(!LazySeq::range_to(10).all(|x| x < 9));
        assert!(LazySeq::<Integer>::empty().all(|_| false));
    }

    #[test]
    fn test_all_short_circuit() {
        let pulled = Cell::new(0);
        assert!(!LazySeq::range_to(Integer::MAX).inspect(|_| pulled.set(pulled.get() + 1)).all(|x| x < 2));
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_group_by() {
        let grouped = LazySeq::wrap(vec!["apple", "banana", "cherry", "date"]).group_by(|s| s.len());
        assert_eq!(grouped.into_iter().collect::<Vec<_>>(), vec![
            (5, vec!["apple"]),
            (6, vec!["banana", "cherry"]),
            (4, vec!["date"]),
        ]);
    }

    #[test]
    fn test_group_by_empty() {
        assert!(LazySeq::<Integer>::empty().group_by(|x| x % 2).is_empty());
    }

    #[test]
    fn test_try_collect() {
        let parsed = LazySeq::wrap(vec!["1", "2", "3"]).map(str::parse::<Integer>).try_collect();
        assert_eq!(parsed, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_try_collect_stops_at_err() {
        let pulled = Cell::new(0);
        let parsed = LazySeq::wrap(vec!["1", "x", "3"])
            .inspect(|_| pulled.set(pulled.get() + 1))
            .map(|s| s.parse::<Integer>().map_err(|_| format!("bad item `{s}`")))
            .try_collect();
        assert_eq!(parsed, Err(String::from("bad item `x`")));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_try_reduce() {
        let items: Vec<Result<Integer, &str>> = vec![Ok(1), Ok(2), Ok(3)];
        assert_eq!(LazySeq::wrap(items).try_reduce(|acc: Integer, x| acc + x, 0), Ok(6));
        let items: Vec<Result<Integer, &str>> = vec![Ok(1), Err("boom"), Ok(3)];
        let sum = LazySeq::wrap(items).try_reduce(|acc: Integer, x| acc + x, 0);
        assert_eq!(sum, Err("boom"));
        let sum = LazySeq::<Result<Integer, &str>>::empty().try_reduce(|acc: Integer, x| acc + x, 10);
        assert_eq!(sum, Ok(10));
    }
}
