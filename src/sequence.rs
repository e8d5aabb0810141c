use crate::pull::Pull;

/// 拉取式序列协议，入口适配器和所有组合器都实现此协议。
///
/// - `pull`：推进一次并返回结果，在返回[`Pull::Done`]之前可以反复调用。
/// - `close`：提前终止并释放资源。包装节点将其转发给当前持有的上游；
///   没有可关闭上游的节点什么也不做。重复调用或在耗尽后调用都是安全的。
pub trait Sequence {
    type Item;

    fn pull(&mut self) -> Pull<Self::Item>;

    fn close(&mut self) {}
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }

    #[inline]
    fn close(&mut self) {
        (**self).close()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }

    #[inline]
    fn close(&mut self) {
        (**self).close()
    }
}
