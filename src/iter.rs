//! 序列到标准库迭代器的桥接。
//!
//! [`Iter`]在被丢弃时关闭其包装的序列，因此在`for`循环中提前`break`会释放源的资源：
//! ```rust
//! use iter_chain::{Chain, iter_chain};
//!
//! let mut seen = Vec::new();
//! for value in iter_chain(1..).map(|x| x * 10) {
//!     if value > 30 {
//!         break;
//!     }
//!     seen.push(value);
//! }
//! assert_eq!(seen, vec![10, 20, 30]);
//! ```

use crate::input::IterChain;
use crate::op::{Filter, Map, Peekable, SkipWhile, TakeWhile};
use crate::pipe::Pipe;
use crate::pull::Pull;
use crate::sequence::Sequence;
use std::iter::FusedIterator;

/// 标准库迭代器适配器，驱动包装的序列直到`Done`，被丢弃时调用`close`。
///
/// `Iter`和`&mut Iter`都实现了`Iterator`。
pub struct Iter<S: Sequence> {
    seq: S,
    done: bool,
}

impl<S: Sequence> Iter<S> {
    pub fn new(seq: S) -> Self {
        Self { seq, done: false }
    }

    /// 取回包装的序列，序列不会被关闭。
    pub fn into_inner(self) -> S {
        let this = std::mem::ManuallyDrop::new(self);
        // SAFETY: `this`不会再被使用，也不会运行`Drop`，`seq`只被读出一次。
        unsafe { std::ptr::read(&this.seq) }
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.seq
    }
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.seq.pull() {
            Pull::Done => {
                self.done = true;
                None
            }
            Pull::Item(value) => Some(value),
        }
    }
}

impl<S: Sequence> FusedIterator for Iter<S> {}

impl<S: Sequence> Drop for Iter<S> {
    fn drop(&mut self) {
        self.seq.close();
    }
}

macro_rules! impl_into_iter {
    ($([$($g:tt)*] $t:ty),* $(,)?) => {
        $(impl<$($g)*> IntoIterator for $t
        where
            $t: Sequence,
        {
            type Item = <$t as Sequence>::Item;
            type IntoIter = Iter<$t>;

            fn into_iter(self) -> Self::IntoIter {
                Iter::new(self)
            }
        })*
    };
}

impl_into_iter!(
    [I] IterChain<I>,
    [S, F] Map<S, F>,
    [S, P] Filter<S, P>,
    [S: Sequence] Peekable<S>,
    [S, P] SkipWhile<S, P>,
    [S, P] TakeWhile<S, P>,
    ['a, T] Pipe<'a, T>,
);
