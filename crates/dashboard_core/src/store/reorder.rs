//! Adjacent-swap reordering.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Direction of a single-step move within an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Towards index 0.
    Up,
    /// Towards the end of the list.
    Down,
}

impl Display for MoveDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

impl FromStr for MoveDirection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(format!("unsupported move direction `{other}`; expected up|down")),
        }
    }
}

/// Returns the neighbor index for a move, or `None` when it falls outside `0..len`.
pub fn adjacent_target(index: usize, direction: MoveDirection, len: usize) -> Option<usize> {
    if index >= len {
        return None;
    }
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => index + 1,
    };
    (target < len).then_some(target)
}

/// Swaps the record at `index` with its neighbor in `direction`.
///
/// Returns the input order unchanged when the neighbor is out of bounds.
pub fn move_adjacent<T: Clone>(records: &[T], index: usize, direction: MoveDirection) -> Vec<T> {
    let mut moved = records.to_vec();
    if let Some(target) = adjacent_target(index, direction, records.len()) {
        moved.swap(index, target);
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::{adjacent_target, move_adjacent, MoveDirection};

    #[test]
    fn first_up_and_last_down_are_noops() {
        let items = vec!["a", "b", "c"];
        assert_eq!(move_adjacent(&items, 0, MoveDirection::Up), items);
        assert_eq!(move_adjacent(&items, 2, MoveDirection::Down), items);
    }

    #[test]
    fn moves_swap_with_direct_neighbor() {
        let items = vec!["a", "b", "c"];
        assert_eq!(move_adjacent(&items, 1, MoveDirection::Up), vec!["b", "a", "c"]);
        assert_eq!(move_adjacent(&items, 1, MoveDirection::Down), vec!["a", "c", "b"]);
    }

    #[test]
    fn out_of_range_index_has_no_target() {
        assert_eq!(adjacent_target(5, MoveDirection::Up, 3), None);
        assert_eq!(adjacent_target(0, MoveDirection::Down, 0), None);
        assert!(move_adjacent::<u8>(&[], 0, MoveDirection::Down).is_empty());
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!(" UP ".parse::<MoveDirection>().unwrap(), MoveDirection::Up);
        assert!("left".parse::<MoveDirection>().is_err());
    }
}
