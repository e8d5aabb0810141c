use crate::pull::Pull;
use crate::sequence::Sequence;

/// 仅保留满足谓词的元素。
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Filter<S, P> {
        Filter { upstream, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        // 手动拉取，不能让丢弃元素的过程关闭上游
        loop {
            match self.upstream.pull() {
                Pull::Done => return Pull::Done,
                Pull::Item(value) => {
                    if (self.predicate)(&value) {
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

#[cfg(test)]
mod tests {
    use crate::test_utils::Guarded;
    use crate::{Chain, Pull, Sequence, iter_chain};
    use itertools::Itertools;

    #[test]
    fn test_filter_odd() {
        let filtered = iter_chain(vec![1, 2, 3, 4, 5, 6]).filter(|x| x % 2 != 0);
        assert_eq!(filtered.iter().collect_vec(), vec![1, 3, 5]);
    }

    #[test]
    fn test_filter_none_match() {
        let mut filtered = iter_chain(vec![2, 4, 6]).filter(|x| x % 2 != 0);
        assert_eq!(filtered.pull(), Pull::Done);
    }

    #[test]
    fn test_filter_does_not_close_upstream() {
        let (source, closed) = Guarded::new(vec![1, 2, 3, 4]);
        let mut filtered = iter_chain(source).filter(|x| *x > 2);
        assert_eq!(filtered.pull(), Pull::Item(3));
        assert_eq!(closed.get(), 0);
        filtered.close();
        assert_eq!(closed.get(), 1);
    }
}
