use crate::err::SeqErr;
use crate::seq::LazySeq;
use crate::Integer;

impl<'a> LazySeq<'a, Integer> {
    /// 生成`[0, stop)`范围内的整数。
    pub fn range_to(stop: Integer) -> LazySeq<'a, Integer> {
        LazySeq::range(0, stop)
    }

    /// 生成`[start, stop)`范围内的整数，`start`不小于`stop`时无数据生成。每次拉取都从`start`重新开始。
    pub fn range(start: Integer, stop: Integer) -> LazySeq<'a, Integer> {
        LazySeq::from_producer(move || Box::new(RangeIter { next: Some(start), stop, step: 1 }))
    }

    /// 按照步长生成整数，不包含`stop`。
    ///
    /// 步长为正时正序生成，为负时逆序生成，步长方向与`start`、`stop`的大小关系不一致时无数据生成。
    /// 例如：
    /// ```
    /// use lazyseq::LazySeq;
    ///
    /// assert_eq!(LazySeq::range_step(0, 10, 3).map(LazySeq::collect), Ok(vec![0, 3, 6, 9]));
    /// assert_eq!(LazySeq::range_step(5, 0, -2).map(LazySeq::collect), Ok(vec![5, 3, 1]));
    /// assert_eq!(LazySeq::range_step(0, 10, -1).map(LazySeq::collect), Ok(vec![]));
    /// ```
    pub fn range_step(start: Integer, stop: Integer, step: Integer) -> Result<LazySeq<'a, Integer>, SeqErr> {
        if step == 0 {
            Err(SeqErr::ZeroStep { start, stop })
        } else {
            Ok(LazySeq::from_producer(move || Box::new(RangeIter { next: Some(start), stop, step })))
        }
    }
}

/// 按步长生成整数的数据源，不包含结束值，步长不为0。
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct RangeIter {
    next: Option<Integer>,
    stop: Integer,
    step: Integer,
}

impl RangeIter {
    fn remaining(&self) -> i128 {
        let (step, stop) = (self.step as i128, self.stop as i128);
        match self.next.map(i128::from) {
            Some(next) if step > 0 && next < stop => (stop - next - 1) / step + 1,
            Some(next) if step < 0 && next > stop => (next - stop - 1) / -step + 1,
            _ => 0,
        }
    }
}

impl Iterator for RangeIter {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if (self.step > 0 && current < self.stop) || (self.step < 0 && current > self.stop) {
            // 溢出时说明已越过结束值
            self.next = current.checked_add(self.step);
            Some(current)
        } else {
            self.next = None;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
