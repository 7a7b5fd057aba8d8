//! Profile and sub-resource records produced by a lookup.
//!
//! These are domain records, decoupled from the upstream JSON field names.
//! Outbound adapters decode into their own DTOs and map into these types.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Summary record returned for an identifier.
///
/// A record only exists after a successful lookup; it is replaced wholesale by
/// the next successful lookup and never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    /// Human-readable name. GitHub allows this to be unset.
    pub display_name: Option<String>,
    /// Login handle the profile is registered under.
    pub login_name: String,
    /// Location of the avatar image.
    pub avatar_reference: String,
    /// Free-form biography, when the user wrote one.
    pub biography: Option<String>,
}

impl ProfileRecord {
    /// Return the display name when it is present and not blank.
    ///
    /// A whitespace-only name counts as unset, so a profile named `" "` is
    /// not shown at all rather than shown with an invisible heading.
    ///
    /// # Examples
    /// ```
    /// use gitfind::domain::ProfileRecord;
    ///
    /// let record = ProfileRecord {
    ///     display_name: Some("  ".to_owned()),
    ///     login_name: "octocat".to_owned(),
    ///     avatar_reference: "u.png".to_owned(),
    ///     biography: None,
    /// };
    /// assert_eq!(record.visible_display_name(), None);
    /// ```
    #[must_use]
    pub fn visible_display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// Identity of one sub-resource within the current sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubResourceId(u64);

impl SubResourceId {
    /// Wrap an upstream numeric identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SubResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubResourceId {
    type Err = ParseIntError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim().parse::<u64>().map(Self)
    }
}

/// One item in the ordered list associated with a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubResource {
    /// Identity, assumed unique within the current sequence.
    pub id: SubResourceId,
    /// Display title.
    pub title: String,
    /// Optional description supplied upstream.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", 42)]
    #[case(" 7 ", 7)]
    fn sub_resource_id_parses_decimal_text(#[case] raw: &str, #[case] expected: u64) {
        let id: SubResourceId = raw.parse().expect("id should parse");
        assert_eq!(id, SubResourceId::new(expected));
    }

    #[rstest]
    #[case("")]
    #[case("-1")]
    #[case("abc")]
    fn sub_resource_id_rejects_non_numeric_text(#[case] raw: &str) {
        assert!(raw.parse::<SubResourceId>().is_err());
    }

    #[test]
    fn visible_display_name_returns_present_names() {
        let record = ProfileRecord {
            display_name: Some("The Octocat".to_owned()),
            login_name: "octocat".to_owned(),
            avatar_reference: "u.png".to_owned(),
            biography: None,
        };
        assert_eq!(record.visible_display_name(), Some("The Octocat"));
    }
}
