use crate::pull::Pull;
use crate::sequence::Sequence;

/// 对每个元素应用转换函数。
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Map<S, F> {
    upstream: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, f: F) -> Map<S, F> {
        Map { upstream, f }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn pull(&mut self) -> Pull<U> {
        match self.upstream.pull() {
            Pull::Done => Pull::Done,
            Pull::Item(value) => Pull::Item((self.f)(value)),
        }
    }

    #[inline]
    fn close(&mut self) {
        self.upstream.close()
    }
}
