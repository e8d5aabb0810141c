use crate::pull::Pull;
use crate::sequence::Sequence;
use tracing::trace;

/// 获取开头满足谓词的元素。
///
/// 第一个不满足谓词的元素被丢弃，同时关闭并释放上游，此后永久视为耗尽，
/// 不会再访问原来的上游。
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct TakeWhile<S, P> {
    upstream: Option<S>,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> TakeWhile<S, P> {
        TakeWhile { upstream: Some(upstream), predicate }
    }

    /// 谓词是否已经失败过。
    pub fn is_finished(&self) -> bool {
        self.upstream.is_none()
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<S::Item> {
        let Some(upstream) = self.upstream.as_mut() else {
            return Pull::Done;
        };
        match upstream.pull() {
            Pull::Done => Pull::Done,
            Pull::Item(value) => {
                if (self.predicate)(&value) {
                    Pull::Item(value)
                } else {
                    if let Some(mut upstream) = self.upstream.take() {
                        upstream.close();
                    }
                    trace!("take_while predicate failed, upstream closed");
                    Pull::Done
                }
            }
        }
    }

    fn close(&mut self) {
        if let Some(upstream) = self.upstream.as_mut() {
            upstream.close();
        }
    }
}
