//! Holder for the identifier the user is typing.

/// Current identifier text.
///
/// Updates overwrite the held value unconditionally. The text is neither
/// trimmed nor validated; an empty identifier is passed through to the
/// remote call as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierInput {
    value: String,
}

impl IdentifierInput {
    /// Create an empty holder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: String::new(),
        }
    }

    /// Return the held value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Replace the held value.
    ///
    /// # Examples
    /// ```
    /// use gitfind::domain::IdentifierInput;
    ///
    /// let mut input = IdentifierInput::new();
    /// input.update(" octocat ");
    /// assert_eq!(input.value(), " octocat ");
    /// ```
    pub fn update(&mut self, next: impl Into<String>) {
        self.value = next.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(IdentifierInput::new().value(), "");
    }

    #[test]
    fn update_overwrites_including_with_empty_text() {
        let mut input = IdentifierInput::new();
        input.update("octocat");
        input.update("");
        assert_eq!(input.value(), "");
    }
}
