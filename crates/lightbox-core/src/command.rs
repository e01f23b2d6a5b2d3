use serde::{Deserialize, Serialize};

/// Navigation step through the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Maps the `-1 / +1` convention used by page scripts.
    /// Zero has no direction.
    pub fn from_offset(offset: i32) -> Option<Self> {
        match offset.signum() {
            -1 => Some(Direction::Previous),
            1 => Some(Direction::Next),
            _ => None,
        }
    }

    pub fn step(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// An input event translated into a navigator operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    Open { index: usize },
    Advance { direction: Direction },
    Close,
}

impl Command {
    /// Keyboard shortcuts available while the lightbox is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Command::Close),
            "ArrowLeft" => Some(Command::Advance {
                direction: Direction::Previous,
            }),
            "ArrowRight" => Some(Command::Advance {
                direction: Direction::Next,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_offset() {
        assert_eq!(Direction::from_offset(-1), Some(Direction::Previous));
        assert_eq!(Direction::from_offset(1), Some(Direction::Next));
        assert_eq!(Direction::from_offset(-7), Some(Direction::Previous));
        assert_eq!(Direction::from_offset(0), None);
    }

    #[test]
    fn test_from_key_known_keys() {
        assert_eq!(Command::from_key("Escape"), Some(Command::Close));
        assert_eq!(
            Command::from_key("ArrowLeft"),
            Some(Command::Advance {
                direction: Direction::Previous
            })
        );
        assert_eq!(
            Command::from_key("ArrowRight"),
            Some(Command::Advance {
                direction: Direction::Next
            })
        );
    }

    #[test]
    fn test_from_key_ignores_others() {
        for key in ["Enter", " ", "ArrowUp", "escape", "a", ""] {
            assert_eq!(Command::from_key(key), None, "key {:?}", key);
        }
    }

    #[test]
    fn test_command_deserializes_open() {
        let json = r#"{"type":"Open","index":4}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(cmd, Command::Open { index: 4 });
    }

    #[test]
    fn test_command_deserializes_advance() {
        let json = r#"{"type":"Advance","direction":"Previous"}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            Command::Advance {
                direction: Direction::Previous
            }
        );
    }

    #[test]
    fn test_command_serializes_close() {
        let json = serde_json::to_string(&Command::Close).unwrap();
        assert_eq!(json, r#"{"type":"Close"}"#);
    }
}
