mod filter;
mod map;
mod peekable;
mod skip_while;
mod take_while;

pub use filter::Filter;
pub use map::Map;
pub use peekable::Peekable;
pub use skip_while::SkipWhile;
pub use take_while::TakeWhile;
