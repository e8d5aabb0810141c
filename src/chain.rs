use crate::err::ChainErr;
use crate::iter::Iter;
use crate::num::{Num, ToNum};
use crate::op::{Filter, Map, Peekable, SkipWhile, TakeWhile};
use crate::pipe::Pipe;
use crate::pull::Pull;
use crate::sequence::Sequence;
use std::fmt::Debug;

/// 所有序列共享的组合操作和终结操作，对任意[`Sequence`]自动实现。
///
/// 构建类操作按值获取`self`并返回包装后的新节点；终结操作只借用`self`，
/// 因此可以在已经部分消费的节点上继续调用。终结操作都不会关闭序列。
pub trait Chain: Sequence {
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// 为每个元素附加从0开始递增的位置，计数器由返回的节点持有。
    fn enumerate(self) -> Map<Self, impl FnMut(Self::Item) -> (usize, Self::Item)>
    where
        Self: Sized,
    {
        let mut index = 0usize;
        self.map(move |value| {
            let position = index;
            index += 1;
            (position, value)
        })
    }

    /// 累加所有剩余元素，无法转为数值的元素按0处理。空序列的结果为`Num::Integer(0)`。
    fn sum(&mut self) -> Num
    where
        Self::Item: ToNum,
    {
        let mut sum = Num::default();
        loop {
            match self.pull() {
                Pull::Done => return sum,
                Pull::Item(value) => sum = sum + Num::coerce(&value),
            }
        }
    }

    /// 同[`Chain::sum`]，但遇到无法转为数值的元素时立即返回错误，位置相对于当前读取位置。
    fn try_sum(&mut self) -> Result<Num, ChainErr>
    where
        Self::Item: ToNum + Debug,
    {
        let mut sum = Num::default();
        let mut position = 0usize;
        loop {
            match self.pull() {
                Pull::Done => return Ok(sum),
                Pull::Item(value) => {
                    let num = value
                        .to_num()
                        .ok_or_else(|| ChainErr::SumNotANumber { position, value: format!("{value:?}") })?;
                    sum = sum + num;
                    position += 1;
                }
            }
        }
    }

    /// 消费所有剩余元素并返回最后一个，没有元素时返回`None`。
    fn last(&mut self) -> Option<Self::Item> {
        let mut last = None;
        while let Pull::Item(value) = self.pull() {
            last = Some(value);
        }
        last
    }

    /// 返回相对当前读取位置的第`n`个元素（从0开始）。
    ///
    /// 不关闭序列，返回后读取位置紧随返回的元素，因此连续调用`nth(0)`得到的是相邻的两个元素。
    fn nth(&mut self, mut n: usize) -> Option<Self::Item> {
        loop {
            match self.pull() {
                Pull::Done => return None,
                Pull::Item(value) => {
                    if n == 0 {
                        return Some(value);
                    }
                    n -= 1;
                }
            }
        }
    }

    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// 擦除具体类型，便于存放或在循环中逐步构建。
    fn boxed<'a>(self) -> Pipe<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Pipe::new(self)
    }

    /// 转为标准库迭代器，迭代器被丢弃时关闭序列。
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

impl<S: Sequence + ?Sized> Chain for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter_chain;
    use crate::test_utils::Guarded;
    use itertools::Itertools;

    #[test]
    fn test_sum() {
        assert_eq!(iter_chain(vec![1, 2, 3, 4, 5, 6]).sum(), Num::Integer(21));
        assert_eq!(iter_chain(Vec::<i32>::new()).sum(), Num::Integer(0));
    }

    #[test]
    fn test_sum_permissive() {
        assert_eq!(iter_chain(["1", "2.5", "abc", "3"]).sum(), Num::from(6.5));
        assert_eq!(iter_chain([Some(1), None, Some(2)]).sum(), Num::Integer(3));
    }

    #[test]
    fn test_try_sum() {
        assert_eq!(iter_chain(["1", "2", "3"]).try_sum(), Ok(Num::Integer(6)));
        assert_eq!(
            iter_chain(["1", "x", "3"]).try_sum(),
            Err(ChainErr::SumNotANumber { position: 1, value: "\"x\"".to_owned() })
        );
    }

    #[test]
    fn test_try_sum_stops_at_bad_element() {
        let mut chain = iter_chain(["1", "x", "3"]);
        assert!(chain.try_sum().is_err());
        assert_eq!(chain.pull(), Pull::Item("3"));
    }

    #[test]
    fn test_last() {
        assert_eq!(iter_chain(vec![1, 2, 3]).last(), Some(3));
        assert_eq!(iter_chain(Vec::<i32>::new()).last(), None);
    }

    #[test]
    fn test_last_distinguishes_falsy_value() {
        assert_eq!(iter_chain(vec![Some(1), None]).last(), Some(None));
        assert_eq!(iter_chain(vec![0]).last(), Some(0));
    }

    #[test]
    fn test_nth() {
        assert_eq!(iter_chain(vec![1, 2, 3]).nth(1), Some(2));
        assert_eq!(iter_chain(vec![1, 2, 3]).nth(333), None);
    }

    #[test]
    fn test_nth_does_not_close() {
        let (source, closed) = Guarded::new(vec![1, 2, 3]);
        let mut chain = iter_chain(source);
        assert_eq!(chain.nth(0), Some(1));
        assert_eq!(chain.nth(0), Some(2));
        assert_eq!(closed.get(), 0);
        assert_eq!(chain.pull(), Pull::Item(3));
    }

    #[test]
    fn test_terminal_on_exhausted() {
        let mut chain = iter_chain(vec![1, 2]);
        assert_eq!(chain.last(), Some(2));
        assert_eq!(chain.last(), None);
        assert_eq!(chain.nth(0), None);
        assert_eq!(chain.sum(), Num::Integer(0));
    }

    #[test]
    fn test_terminal_on_closed() {
        let (source, closed) = Guarded::repeat(5);
        let mut chain = iter_chain(source).map(|x| x * 2);
        chain.close();
        assert_eq!(closed.get(), 1);
        assert_eq!(chain.nth(3), None);
        assert_eq!(chain.last(), None);
        assert_eq!(chain.sum(), Num::Integer(0));
    }

    #[test]
    fn test_enumerate() {
        let mut iter = iter_chain(['a', 'b', 'c']).enumerate();
        assert_eq!(iter.pull(), Pull::Item((0, 'a')));
        assert_eq!(iter.pull(), Pull::Item((1, 'b')));
        assert_eq!(iter.pull(), Pull::Item((2, 'c')));
        assert_eq!(iter.pull(), Pull::Done);
    }

    #[test]
    fn test_enumerate_counts_from_own_start() {
        let mut chain = iter_chain(vec!['a', 'b', 'c', 'd']);
        chain.nth(1);
        let iter = chain.enumerate();
        assert_eq!(iter.iter().collect_vec(), vec![(0, 'c'), (1, 'd')]);
    }

    #[test]
    fn test_by_ref() {
        let mut chain = iter_chain(vec![1, 2, 3, 4, 5]);
        assert_eq!(chain.by_ref().take_while(|x| *x < 3).iter().collect_vec(), vec![1, 2]);
        assert_eq!(chain.pull(), Pull::Done);
    }

    #[test]
    fn test_chain_filter_map_sum() {
        let summed = iter_chain(1..=1000).filter(|x| x % 2 == 0).map(|x| x * 2).sum();
        assert_eq!(summed, Num::Integer(501000));
    }

    #[test]
    fn test_map_preserves_order_and_length() {
        let source = vec![5, -3, 8, 0, 2];
        let mapped = iter_chain(source.clone()).map(|x| x * x - 1).iter().collect_vec();
        assert_eq!(mapped, source.iter().map(|x| x * x - 1).collect_vec());
    }

    #[test]
    fn test_filter_is_subsequence() {
        let source = (0..50).collect_vec();
        let filtered = iter_chain(source.clone()).filter(|x| x % 7 == 3).iter().collect_vec();
        assert_eq!(filtered, source.into_iter().filter(|x| x % 7 == 3).collect_vec());
    }
}
