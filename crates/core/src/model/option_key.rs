use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building an option key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionKeyError {
    #[error("option index {0} is out of the supported A-Z range")]
    IndexOutOfRange(usize),

    #[error("invalid option key: {0:?}")]
    InvalidKey(String),
}

/// Single-letter identifier assigned to a question's choices by position.
///
/// The first option is `A`, the second `B`, and so on. All conversions
/// between positions and letters go through this type; nothing else in
/// the codebase does character arithmetic on option keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionKey(char);

impl OptionKey {
    /// Converts a zero-based option position to its letter key.
    ///
    /// # Errors
    ///
    /// Returns `OptionKeyError::IndexOutOfRange` for indexes past `Z`.
    pub fn from_index(index: usize) -> Result<Self, OptionKeyError> {
        if index >= 26 {
            return Err(OptionKeyError::IndexOutOfRange(index));
        }
        let letter = char::from(b'A' + u8::try_from(index).map_err(|_| OptionKeyError::IndexOutOfRange(index))?);
        Ok(Self(letter))
    }

    /// Returns the zero-based option position this key refers to.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 as u8 - b'A')
    }

    /// Returns the key letter.
    #[must_use]
    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for OptionKey {
    type Error = OptionKeyError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let upper = value.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Self(upper))
        } else {
            Err(OptionKeyError::InvalidKey(value.to_string()))
        }
    }
}

impl FromStr for OptionKey {
    type Err = OptionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::try_from(letter),
            _ => Err(OptionKeyError::InvalidKey(s.to_string())),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_to_key_assigns_letters_by_position() {
        assert_eq!(OptionKey::from_index(0).unwrap().letter(), 'A');
        assert_eq!(OptionKey::from_index(3).unwrap().letter(), 'D');
        assert_eq!(OptionKey::from_index(25).unwrap().letter(), 'Z');
    }

    #[test]
    fn index_past_z_is_rejected() {
        let err = OptionKey::from_index(26).unwrap_err();
        assert!(matches!(err, OptionKeyError::IndexOutOfRange(26)));
    }

    #[test]
    fn key_round_trips_through_index() {
        for index in 0..26 {
            let key = OptionKey::from_index(index).unwrap();
            assert_eq!(key.index(), index);
        }
    }

    #[test]
    fn parse_accepts_single_letters_only() {
        assert_eq!("B".parse::<OptionKey>().unwrap().index(), 1);
        assert_eq!("c".parse::<OptionKey>().unwrap().letter(), 'C');
        assert!("AB".parse::<OptionKey>().is_err());
        assert!("".parse::<OptionKey>().is_err());
        assert!("3".parse::<OptionKey>().is_err());
    }
}
