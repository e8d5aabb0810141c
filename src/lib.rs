//! 惰性的拉取式序列组合器。
//!
//! 用[`iter_chain`]包装任意可迭代的值，得到链的根节点，然后按需链式组合：
//!
//! ```rust
//! use iter_chain::{Chain, Pull, Sequence, iter_chain};
//!
//! let mut chain = iter_chain(vec![-1, 2, 3, -4, 5]).skip_while(|x| *x < 0).peekable();
//! assert_eq!(chain.peek(), &Pull::Item(2));
//! assert_eq!(chain.nth(0), Some(2));
//! assert_eq!(chain.nth(0), Some(3));
//! assert_eq!(chain.last(), Some(5));
//! chain.close();
//! ```
//!
//! - [`Sequence`]：拉取协议，`pull`返回[`Pull::Done`]或[`Pull::Item`]，`close`提前终止并释放资源。
//! - [`Chain`]：对所有序列自动实现的组合操作（`map`、`filter`、`peekable`、`skip_while`、
//!   `take_while`、`enumerate`）和终结操作（`sum`、`last`、`nth`）。
//! - `close`沿所有权链逐层转发，最终由入口适配器释放被包装的迭代器。

mod chain;
mod err;
mod input;
mod iter;
mod num;
mod op;
mod pipe;
mod pull;
mod sequence;
#[cfg(test)]
mod test_utils;

pub use chain::Chain;
pub use err::ChainErr;
pub use input::{IterChain, iter_chain};
pub use iter::Iter;
pub use num::{Float, Integer, Num, ToNum};
pub use op::{Filter, Map, Peekable, SkipWhile, TakeWhile};
pub use pipe::Pipe;
pub use pull::Pull;
pub use sequence::Sequence;
