use crate::err::SeqErr;
use crate::seq::LazySeq;
use std::iter::Fuse;

impl<'a, T: 'a> LazySeq<'a, T> {
    /// 最多获取前`n`个元素，满足数量后不再向上游拉取。
    pub fn take(self, n: usize) -> LazySeq<'a, T> {
        let upstream = self.into_producer();
        LazySeq::from_producer(move || Box::new(upstream().take(n)))
    }

    /// 跳过前`n`个元素，被跳过的元素仍会从上游拉取。
    pub fn skip(self, n: usize) -> LazySeq<'a, T> {
        let upstream = self.into_producer();
        LazySeq::from_producer(move || Box::new(upstream().skip(n)))
    }

    /// 将连续元素按照固定大小分组，最后一组可能不足`size`个。
    ///
    /// # Panics
    ///
    /// `size`为0时，在首次拉取时以[`SeqErr::InvalidChunkSize`]终止；需要提前校验时使用[`LazySeq::try_chunk`]。
    pub fn chunk(self, size: usize) -> LazySeq<'a, Vec<T>> {
        let upstream = self.into_producer();
        LazySeq::from_producer(move || Box::new(Chunks { source: upstream().fuse(), size }))
    }

    /// 同[`LazySeq::chunk`]，但在构建时校验分组大小。
    pub fn try_chunk(self, size: usize) -> Result<LazySeq<'a, Vec<T>>, SeqErr> {
        if size == 0 { Err(SeqErr::InvalidChunkSize { size }) } else { Ok(self.chunk(size)) }
    }

    /// 分页，`page`从1开始，等价于`skip((page - 1) * per_page).take(per_page)`。
    ///
    /// 超出范围的页产生空序列，`page`为0时按第1页处理。
    pub fn paginate(self, page: usize, per_page: usize) -> LazySeq<'a, T> {
        self.skip(page.saturating_sub(1).saturating_mul(per_page)).take(per_page)
    }
}

struct Chunks<I: Iterator> {
    source: Fuse<I>,
    size: usize,
}

impl<I> Iterator for Chunks<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            SeqErr::InvalidChunkSize { size: self.size }.raise();
        }
        // 预分配不超过上游确定剩余的元素数
        let mut chunk = Vec::with_capacity(self.size.min(self.source.size_hint().0.max(1)));
        for _ in 0..self.size {
            if let Some(item) = self.source.next() {
                chunk.push(item);
            } else {
                break;
            }
        }
        if chunk.is_empty() { None } else { Some(chunk) }
    }
}
