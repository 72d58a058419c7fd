//! 惰性求值的序列流水线。
//!
//! [`LazySeq`] 包装任意有限或无限的数据源，链式组合过滤、映射、展开、截取、分块、分页等操作时
//! 不会物化任何中间结果，只有在调用终端操作（如 [`LazySeq::collect`]、[`LazySeq::first`]）时
//! 才按需逐个拉取元素。
//!
//! ```
//! use lazyseq::LazySeq;
//!
//! let result = LazySeq::range_to(1_000_000).filter(|x| x % 2 == 0).map(|x| x * 2).take(10).collect();
//! assert_eq!(result, vec![0, 4, 8, 12, 16, 20, 24, 28, 32, 36]);
//! ```
//!
//! 数据源可重复拉取时，组合出的序列也可以通过克隆重复拉取：
//!
//! ```
//! use lazyseq::LazySeq;
//!
//! let words = LazySeq::wrap(["b", "a", "b"]).distinct();
//! assert_eq!(words.clone().count(), 2);
//! assert_eq!(words.collect(), vec!["b", "a"]);
//! ```

mod err;
mod range;
mod seq;

pub use err::SeqErr;
pub use seq::{Groups, LazySeq};

/// 整数类型
pub type Integer = i64;
