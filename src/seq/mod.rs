mod slice;
mod terminal;
mod transform;

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

pub use terminal::Groups;

type Cursor<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// 每次调用都开始一次新的拉取。
type Producer<'a, T> = Rc<dyn Fn() -> Cursor<'a, T> + 'a>;

/// 惰性序列。
///
/// 每个节点持有上游的生产者以及需要延迟执行的操作，非终端操作都返回新的节点，
/// 只有终端操作或迭代才会真正从根数据源拉取元素。
///
/// 能否重复拉取取决于根数据源：[`LazySeq::wrap`]、[`LazySeq::range`]等可重复的数据源每次拉取都从头开始，
/// [`LazySeq::wrap_once`]包装的数据源只能被拉取一次，之后的拉取不再产生元素。
/// 通过[`Clone`]得到共享同一生产者的新序列，克隆总是从头开始拉取，不继承当前游标位置。
pub struct LazySeq<'a, T> {
    producer: Producer<'a, T>,
    cursor: Option<Cursor<'a, T>>,
}

impl<'a, T: 'a> LazySeq<'a, T> {
    pub(crate) fn from_producer(producer: impl Fn() -> Cursor<'a, T> + 'a) -> LazySeq<'a, T> {
        LazySeq { producer: Rc::new(producer), cursor: None }
    }

    /// 包装可重复拉取的数据源，每次拉取时克隆数据源，不会提前消费其中的任何元素。
    ///
    /// 包装一个已经被部分消费的迭代器是合法的，此时只会产生其剩余的元素。
    pub fn wrap<I>(source: I) -> LazySeq<'a, T>
    where
        I: IntoIterator<Item = T> + Clone + 'a,
        I::IntoIter: 'a,
    {
        LazySeq::from_producer(move || Box::new(source.clone().into_iter()))
    }

    /// 包装只能拉取一次的数据源，例如生成器或IO读取，首次拉取耗尽后再次拉取不再产生元素。
    pub fn wrap_once<I>(source: I) -> LazySeq<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let slot: RefCell<Option<Cursor<'a, T>>> = RefCell::new(Some(Box::new(source.into_iter())));
        LazySeq::from_producer(move || slot.borrow_mut().take().unwrap_or_else(|| Box::new(std::iter::empty())))
    }

    /// 空序列。
    pub fn empty() -> LazySeq<'a, T> {
        LazySeq::from_producer(|| Box::new(std::iter::empty()))
    }

    /// 只包含一个元素的序列。
    pub fn once(item: T) -> LazySeq<'a, T>
    where
        T: Clone,
    {
        LazySeq::from_producer(move || Box::new(std::iter::once(item.clone())))
    }

    /// 作为上游交给下一个节点。已经通过[`Iterator::next`]开始的拉取只会继续一次，不会重新开始。
    pub(crate) fn into_producer(self) -> Producer<'a, T> {
        match self.cursor {
            Some(cursor) => LazySeq::wrap_once(cursor).producer,
            None => self.producer,
        }
    }

    /// 终端操作的拉取入口：继续已开始的游标，否则开始一次新的拉取。
    pub(crate) fn pull(self) -> Cursor<'a, T> {
        match self.cursor {
            Some(cursor) => cursor,
            None => (self.producer)(),
        }
    }
}

impl<T> Clone for LazySeq<'_, T> {
    fn clone(&self) -> Self {
        LazySeq { producer: Rc::clone(&self.producer), cursor: None }
    }
}

impl<'a, T: 'a> Iterator for LazySeq<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let producer = &self.producer;
        self.cursor.get_or_insert_with(|| producer()).next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            Some(cursor) => cursor.size_hint(),
            None => (0, None),
        }
    }
}

/// 物化全部元素后包装，得到可重复拉取的序列。
impl<'a, T: Clone + 'a> FromIterator<T> for LazySeq<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LazySeq::wrap(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Debug for LazySeq<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LazySeq(...)")
    }
}
