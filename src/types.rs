use std::fmt;
use std::str::FromStr;

/// Which side of the transfer lives on this machine.
///
/// - `Push`: the source tree is local, so per-task logs live under
///   `source_root + source_path`.
/// - `Pull`: the destination tree is local, so logs live under
///   `dest_root + dest_path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Push,
    Pull,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "push" => Ok(Direction::Push),
            "pull" => Ok(Direction::Pull),
            other => Err(format!(
                "Unrecognized direction: {other} (expected \"push\" or \"pull\")"
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Push => f.write_str("push"),
            Direction::Pull => f.write_str("pull"),
        }
    }
}
