use crate::pull::Pull;
use crate::sequence::Sequence;
use tracing::trace;

/// 入口适配器，把任意标准库迭代器包装为[`Sequence`]。
///
/// `close`取出并丢弃被包装的迭代器，由迭代器自身的`Drop`释放资源；
/// 没有需要释放的资源的迭代器其`Drop`什么也不做，此时`close`等同于空操作。
/// 无论通过`close`还是随链一起被丢弃，被包装的迭代器都只会被丢弃一次。
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct IterChain<I> {
    iter: Option<I>,
}

impl<I: Iterator> IterChain<I> {
    pub fn new(iter: I) -> IterChain<I> {
        IterChain { iter: Some(iter) }
    }

    /// 被包装的迭代器是否已经释放。
    pub fn is_closed(&self) -> bool {
        self.iter.is_none()
    }
}

impl<I: Iterator> Sequence for IterChain<I> {
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Pull<I::Item> {
        match self.iter.as_mut() {
            Some(iter) => iter.next().into(),
            None => Pull::Done,
        }
    }

    fn close(&mut self) {
        if let Some(iter) = self.iter.take() {
            drop(iter);
            trace!("iter chain source released");
        }
    }
}

/// 从任意可迭代的值构建链的根节点，这是库唯一的入口。
///
/// ```rust
/// use iter_chain::{Chain, Num, iter_chain};
///
/// let sum = iter_chain(1..=1000).filter(|x| x % 2 == 0).map(|x| x * 2).sum();
/// assert_eq!(sum, Num::Integer(501000));
/// ```
pub fn iter_chain<T: IntoIterator>(source: T) -> IterChain<T::IntoIter> {
    IterChain::new(source.into_iter())
}
