use crate::pull::Pull;
use crate::sequence::Sequence;

/// 跳过开头满足谓词的元素。
///
/// 遇到第一个不满足谓词的元素后永久停止跳过，此后直接转发上游，不再调用谓词。
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct SkipWhile<S, P> {
    upstream: S,
    predicate: P,
    skipping: bool,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> SkipWhile<S, P> {
        SkipWhile { upstream, predicate, skipping: true }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        if !self.skipping {
            return self.upstream.pull();
        }
        loop {
            match self.upstream.pull() {
                // 上游耗尽时仍处于跳过状态
                Pull::Done => return Pull::Done,
                Pull::Item(value) => {
                    if !(self.predicate)(&value) {
                        self.skipping = false;
                        return Pull::Item(value);
                    }
                }
            }
        }
    }

    #[inline]
    fn close(&mut self) {
        self.upstream.close()
    }
}
