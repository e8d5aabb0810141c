/// 一次拉取的结果：已结束，或者得到一个元素。
///
/// 与`Option`可以互相转换，但在[`Peekable`](crate::Peekable)的缓存中，`Done`本身也是一个有效的缓存值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T> {
    /// 序列已结束，没有更多元素。
    Done,
    /// 拉取到的元素。
    Item(T),
}

impl<T> Pull<T> {
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Pull::Done)
    }

    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Pull::Item(_))
    }

    /// 转为`Option`，`Done`对应`None`。
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Pull::Done => None,
            Pull::Item(value) => Some(value),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Pull<&T> {
        match self {
            Pull::Done => Pull::Done,
            Pull::Item(value) => Pull::Item(value),
        }
    }

    /// 对元素应用`f`，`Done`保持不变。
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Pull<U> {
        match self {
            Pull::Done => Pull::Done,
            Pull::Item(value) => Pull::Item(f(value)),
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Pull::Item(value),
            None => Pull::Done,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    #[inline]
    fn from(pull: Pull<T>) -> Self {
        pull.into_option()
    }
}
