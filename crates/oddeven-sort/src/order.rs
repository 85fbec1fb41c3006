use core::fmt;
use core::str::FromStr;

use crate::SortError;

/// Direction a sorted sequence runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Non-increasing: a pair is swapped when its left element is smaller.
    #[default]
    Descending,
    /// Non-decreasing: a pair is swapped when its left element is larger.
    Ascending,
}

impl Order {
    /// Whether `left` may sit directly before `right`.
    #[inline]
    pub fn in_order<T: Ord>(self, left: &T, right: &T) -> bool {
        match self {
            Order::Descending => left >= right,
            Order::Ascending => left <= right,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Descending => f.write_str("descending"),
            Order::Ascending => f.write_str("ascending"),
        }
    }
}

impl FromStr for Order {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "descending" | "desc" => Ok(Order::Descending),
            "ascending" | "asc" => Ok(Order::Ascending),
            _ => Err(SortError::UnknownOrder(s.to_string())),
        }
    }
}
