use core::fmt::Debug;
use std::fmt::Display;

use crate::{HpoError, HpoResult};

/// Number of digits of the numerical part of an [`HpoTermId`]
const ID_WIDTH: usize = 7;

/// The unique identifier of an [`HpoTerm`](crate::HpoTerm)
///
/// The id is stored as integer, e.g. `HP:0001363` is stored as `1363`
/// and always rendered as zero-padded 7-digit code.
///
/// # Examples
///
/// ```
/// use nosology::HpoTermId;
///
/// let id = HpoTermId::try_from("HP:0001363").unwrap();
/// assert_eq!(id.as_u32(), 1363);
/// assert_eq!(id.to_string(), "HP:0001363");
///
/// // Rule files often use the underscore notation
/// assert_eq!(HpoTermId::try_from("HP_0001363").unwrap(), id);
///
/// // The numerical part must have exactly 7 digits
/// assert!(HpoTermId::try_from("HP:1363").is_err());
/// ```
#[derive(Copy, Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HpoTermId {
    inner: u32,
}

impl HpoTermId {
    /// Constructs a new [`HpoTermId`] from its integer representation
    pub const fn from_u32(inner: u32) -> HpoTermId {
        HpoTermId { inner }
    }

    /// Returns the integer representation of the id
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for HpoTermId {
    type Error = HpoError;
    fn try_from(s: &str) -> HpoResult<Self> {
        let invalid = || HpoError::InvalidTermId(s.to_string());

        let Some(code) = s.strip_prefix("HP:").or_else(|| s.strip_prefix("HP_")) else {
            return Err(invalid());
        };
        let code = code.trim();
        if code.len() != ID_WIDTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        Ok(HpoTermId {
            inner: code.parse::<u32>()?,
        })
    }
}

impl From<u32> for HpoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Debug for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HpoTermId({self})")
    }
}

impl Display for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HP:{:07}", self.inner)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_colon_and_underscore() {
        assert_eq!(HpoTermId::try_from("HP:0000118").unwrap().as_u32(), 118);
        assert_eq!(HpoTermId::try_from("HP_0000118").unwrap().as_u32(), 118);
        assert_eq!(HpoTermId::try_from("HP: 0000118").unwrap().as_u32(), 118);
    }

    #[test]
    fn reject_wrong_width() {
        assert_eq!(
            HpoTermId::try_from("HP:000118"),
            Err(HpoError::InvalidTermId("HP:000118".to_string()))
        );
        assert!(HpoTermId::try_from("HP:00001180").is_err());
    }

    #[test]
    fn reject_wrong_prefix() {
        assert!(HpoTermId::try_from("0000118").is_err());
        assert!(HpoTermId::try_from("MP:0000118").is_err());
        assert!(HpoTermId::try_from("").is_err());
    }

    #[test]
    fn reject_non_digits() {
        assert!(HpoTermId::try_from("HP:000011A").is_err());
        assert!(HpoTermId::try_from("HP:+000118").is_err());
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(HpoTermId::from(1u32).to_string(), "HP:0000001");
        assert_eq!(format!("{:?}", HpoTermId::from(3674u32)), "HpoTermId(HP:0003674)");
    }
}
