use crate::pull::Pull;
use crate::sequence::Sequence;

/// 擦除了具体类型的序列节点。
///
/// 组合器的类型随链的加深而嵌套，需要存放或在循环中逐步构建链时，可以先转为`Pipe`。
pub struct Pipe<'a, T> {
    seq: Box<dyn Sequence<Item = T> + 'a>,
}

impl<'a, T> Pipe<'a, T> {
    pub fn new(seq: impl Sequence<Item = T> + 'a) -> Pipe<'a, T> {
        Pipe { seq: Box::new(seq) }
    }
}

impl<T> Sequence for Pipe<'_, T> {
    type Item = T;

    #[inline]
    fn pull(&mut self) -> Pull<T> {
        self.seq.pull()
    }

    #[inline]
    fn close(&mut self) {
        self.seq.close()
    }
}
