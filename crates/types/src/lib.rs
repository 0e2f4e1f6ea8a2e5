/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when creating a [`Severity`].
#[derive(Debug, thiserror::Error)]
pub enum SeverityError {
    /// The value was outside the documented 1-10 range
    #[error("Severity must be between 1 and 10, got {0}")]
    OutOfRange(i64),
}

/// A patient-reported severity rating, guaranteed to be in the range 1-10.
///
/// The triage scorer's severity multiplier is only defined over this range;
/// out-of-range input is rejected here so scoring never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Severity(u8);

impl Severity {
    /// Creates a new `Severity` from the given rating.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Severity)` for values 1 through 10 inclusive,
    /// or `Err(SeverityError::OutOfRange)` otherwise.
    pub fn new(rating: i64) -> Result<Self, SeverityError> {
        if !(1..=10).contains(&rating) {
            return Err(SeverityError::OutOfRange(rating));
        }
        Ok(Self(rating as u8))
    }

    /// Returns the rating as an integer.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Severity::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_and_accepts() {
        let text = NonEmptyText::new("  fever  ").expect("valid text");
        assert_eq!(text.as_str(), "fever");
    }

    #[test]
    fn non_empty_text_rejects_whitespace_only() {
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
    }

    #[test]
    fn severity_accepts_bounds() {
        assert_eq!(Severity::new(1).expect("valid").get(), 1);
        assert_eq!(Severity::new(10).expect("valid").get(), 10);
    }

    #[test]
    fn severity_rejects_out_of_range() {
        assert!(matches!(
            Severity::new(0),
            Err(SeverityError::OutOfRange(0))
        ));
        assert!(matches!(
            Severity::new(11),
            Err(SeverityError::OutOfRange(11))
        ));
        assert!(matches!(
            Severity::new(-3),
            Err(SeverityError::OutOfRange(-3))
        ));
    }
}
