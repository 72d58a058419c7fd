use crate::Integer;
use thiserror::Error;

/// 序列使用错误，在求值时（而非链式构建时）暴露。
#[derive(Error, Debug, Eq, PartialEq)]
pub enum SeqErr {
    #[error("[Chunk] Invalid chunk size `{size}`, it must be a positive integer")]
    InvalidChunkSize { size: usize },

    #[error("[Range] Step of range `{start}..{stop}` must not be zero")]
    ZeroStep { start: Integer, stop: Integer },
}

impl SeqErr {
    /// 在求值点以使用错误终止当前拉取。
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self)
    }
}
