use crate::pull::Pull;
use crate::sequence::Sequence;

/// 支持向前查看一个元素的序列。
///
/// 缓存最多一个拉取结果，只由[`Peekable::peek`]填充，由下一次`pull`取走。
/// 任意时刻上游最多只比读取位置超前一次拉取。
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Peekable<S: Sequence> {
    upstream: S,
    peeked: Option<Pull<S::Item>>,
}

impl<S: Sequence> Peekable<S> {
    pub(crate) fn new(upstream: S) -> Peekable<S> {
        Peekable { upstream, peeked: None }
    }

    /// 查看下一次`pull`将返回的结果，但不消费它。
    ///
    /// 缓存为空时从上游拉取一次并缓存，`Done`同样会被缓存，
    /// 因此在末尾反复查看不会继续推进上游。
    pub fn peek(&mut self) -> &Pull<S::Item> {
        let upstream = &mut self.upstream;
        self.peeked.get_or_insert_with(|| upstream.pull())
    }

    /// 同[`Peekable::peek`]，但返回可变引用，修改会反映到下一次`pull`的结果中。
    pub fn peek_mut(&mut self) -> &mut Pull<S::Item> {
        let upstream = &mut self.upstream;
        self.peeked.get_or_insert_with(|| upstream.pull())
    }
}

impl<S: Sequence> Sequence for Peekable<S> {
    type Item = S::Item;

    #[inline]
    fn pull(&mut self) -> Pull<S::Item> {
        match self.peeked.take() {
            Some(pull) => pull,
            None => self.upstream.pull(),
        }
    }

    #[inline]
    fn close(&mut self) {
        self.upstream.close()
    }
}
