use crate::err::ChainErr;
use ordered_float::OrderedFloat;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// 整数类型
pub type Integer = i64;

/// 浮点数类型
pub type Float = f64;

/// 数值，整数或浮点数。
///
/// 相等性按结构比较：`Num::Integer(1)`与`Num::Float(1.0)`不相等。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Num {
    Integer(Integer),
    Float(OrderedFloat<Float>),
}

impl Num {
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Num::Integer(_))
    }

    #[inline]
    pub fn as_float(&self) -> Float {
        match self {
            Num::Integer(integer) => *integer as Float,
            Num::Float(float) => float.0,
        }
    }

    /// 宽松转换，无法转为数值的按0处理。
    #[inline]
    pub fn coerce<T: ToNum + ?Sized>(value: &T) -> Num {
        value.to_num().unwrap_or_default()
    }
}

impl Default for Num {
    fn default() -> Self {
        Num::Integer(0)
    }
}

impl From<Integer> for Num {
    fn from(value: Integer) -> Self {
        Num::Integer(value)
    }
}

impl From<Float> for Num {
    fn from(value: Float) -> Self {
        Num::Float(OrderedFloat(value))
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Num::Integer(integer) => write!(f, "{integer}"),
            Num::Float(float) => write!(f, "{}", float.0),
        }
    }
}

impl Add for Num {
    type Output = Num;

    /// 两个整数相加且未溢出时结果仍为整数，否则按浮点数相加。
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Num::Integer(l), Num::Integer(r)) => match l.checked_add(r) {
                Some(sum) => Num::Integer(sum),
                None => Num::from(l as Float + r as Float),
            },
            (l, r) => Num::from(l.as_float() + r.as_float()),
        }
    }
}

impl Sum for Num {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Num::default(), Add::add)
    }
}

impl FromStr for Num {
    type Err = ChainErr;

    /// 去除首尾空白后，优先解析为整数，其次解析为浮点数。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(integer) = trimmed.parse::<Integer>() {
            Ok(Num::Integer(integer))
        } else if let Ok(float) = trimmed.parse::<Float>() {
            Ok(Num::from(float))
        } else {
            Err(ChainErr::NotANumber { value: s.to_owned() })
        }
    }
}

/// 可转为[`Num`]的值，`sum`使用此特征对元素做数值转换。
pub trait ToNum {
    /// 无法转换时返回`None`。
    fn to_num(&self) -> Option<Num>;
}

macro_rules! impl_to_num_lossless {
    ($($t:ty),*) => {
        $(impl ToNum for $t {
            #[inline]
            fn to_num(&self) -> Option<Num> {
                Some(Num::Integer(Integer::from(*self)))
            }
        })*
    };
}

macro_rules! impl_to_num_wide {
    ($($t:ty),*) => {
        $(impl ToNum for $t {
            #[inline]
            fn to_num(&self) -> Option<Num> {
                match Integer::try_from(*self) {
                    Ok(integer) => Some(Num::Integer(integer)),
                    Err(_) => Some(Num::from(*self as Float)),
                }
            }
        })*
    };
}

impl_to_num_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_to_num_wide!(isize, usize, u64, i128, u128);

impl ToNum for f32 {
    #[inline]
    fn to_num(&self) -> Option<Num> {
        Some(Num::from(Float::from(*self)))
    }
}

impl ToNum for f64 {
    #[inline]
    fn to_num(&self) -> Option<Num> {
        Some(Num::from(*self))
    }
}

impl ToNum for bool {
    #[inline]
    fn to_num(&self) -> Option<Num> {
        Some(Num::Integer(Integer::from(*self)))
    }
}

impl ToNum for char {
    fn to_num(&self) -> Option<Num> {
        self.to_digit(10).map(|digit| Num::Integer(Integer::from(digit)))
    }
}

impl ToNum for str {
    fn to_num(&self) -> Option<Num> {
        self.parse::<Num>().ok()
    }
}

impl ToNum for String {
    fn to_num(&self) -> Option<Num> {
        self.as_str().to_num()
    }
}

impl ToNum for Num {
    #[inline]
    fn to_num(&self) -> Option<Num> {
        Some(*self)
    }
}

/// 空值按0处理。
impl<T: ToNum> ToNum for Option<T> {
    fn to_num(&self) -> Option<Num> {
        match self {
            Some(value) => value.to_num(),
            None => Some(Num::default()),
        }
    }
}

impl<T: ToNum + ?Sized> ToNum for &T {
    #[inline]
    fn to_num(&self) -> Option<Num> {
        (**self).to_num()
    }
}
