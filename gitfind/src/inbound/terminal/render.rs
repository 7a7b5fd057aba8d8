//! Plain-text rendering of a lookup view.

use crate::domain::{LookupView, ProfileRecord, SubResource};

const IDENTIFIER_PLACEHOLDER: &str = "@username";
const MISSING_BIOGRAPHY: &str = "No biography available";
const NO_SUB_RESOURCES: &str = "No repositories found";

/// Render `view` as terminal text without a trailing newline.
///
/// The profile block, and the repository list under it, only appear when the
/// committed profile has a display name. Whitespace-only names and
/// biographies are treated as missing, so a blank biography renders the
/// fallback text.
///
/// # Examples
/// ```
/// use gitfind::domain::LookupView;
/// use gitfind::inbound::terminal::render;
///
/// assert_eq!(render(&LookupView::default()), "Search: @username");
/// ```
#[must_use]
pub fn render(view: &LookupView) -> String {
    let mut out = String::new();
    let identifier = if view.identifier.is_empty() {
        IDENTIFIER_PLACEHOLDER
    } else {
        view.identifier.as_str()
    };
    out.push_str("Search: ");
    out.push_str(identifier);

    let Some((profile, name)) = view
        .profile
        .as_ref()
        .and_then(|profile| profile.visible_display_name().map(|name| (profile, name)))
    else {
        return out;
    };

    render_profile(&mut out, profile, name);
    render_sub_resources(&mut out, &view.sub_resources);
    out
}

fn render_profile(out: &mut String, profile: &ProfileRecord, name: &str) {
    let biography = profile
        .biography
        .as_deref()
        .filter(|bio| !bio.trim().is_empty())
        .unwrap_or(MISSING_BIOGRAPHY);
    out.push_str(&format!(
        "\n{name} (@{login})\nAvatar: {avatar}\nBio: {biography}\nRepositories:",
        login = profile.login_name,
        avatar = profile.avatar_reference,
    ));
}

fn render_sub_resources(out: &mut String, sub_resources: &[SubResource]) {
    if sub_resources.is_empty() {
        out.push_str("\n  ");
        out.push_str(NO_SUB_RESOURCES);
        return;
    }
    for entry in sub_resources {
        out.push_str(&format!("\n  [{}] {}", entry.id, entry.title));
        if let Some(description) = entry.description.as_deref().filter(|text| !text.is_empty()) {
            out.push_str(" - ");
            out.push_str(description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubResourceId;
    use insta::assert_snapshot;

    fn octocat(display_name: Option<&str>, biography: Option<&str>) -> ProfileRecord {
        ProfileRecord {
            display_name: display_name.map(str::to_owned),
            login_name: "octocat".to_owned(),
            avatar_reference: "u.png".to_owned(),
            biography: biography.map(str::to_owned),
        }
    }

    fn repo(id: u64, title: &str, description: Option<&str>) -> SubResource {
        SubResource {
            id: SubResourceId::new(id),
            title: title.to_owned(),
            description: description.map(str::to_owned),
        }
    }

    #[test]
    fn renders_profile_and_repositories() {
        let view = LookupView {
            identifier: "octocat".to_owned(),
            profile: Some(octocat(Some("The Octocat"), None)),
            sub_resources: vec![
                repo(1, "Hello-World", Some("demo")),
                repo(2, "Spoon-Knife", None),
            ],
        };

        assert_snapshot!(render(&view), @r"
        Search: octocat
        The Octocat (@octocat)
        Avatar: u.png
        Bio: No biography available
        Repositories:
          [1] Hello-World - demo
          [2] Spoon-Knife
        ");
    }

    #[test]
    fn renders_empty_repository_message() {
        let view = LookupView {
            identifier: "octocat".to_owned(),
            profile: Some(octocat(Some("The Octocat"), Some("GitHub mascot"))),
            sub_resources: Vec::new(),
        };

        assert_snapshot!(render(&view), @r"
        Search: octocat
        The Octocat (@octocat)
        Avatar: u.png
        Bio: GitHub mascot
        Repositories:
          No repositories found
        ");
    }

    #[test]
    fn hides_profile_without_display_name() {
        let view = LookupView {
            identifier: "nameless".to_owned(),
            profile: Some(octocat(None, None)),
            sub_resources: vec![repo(1, "Hello-World", None)],
        };

        assert_eq!(render(&view), "Search: nameless");
    }

    #[test]
    fn blank_name_hides_profile() {
        let view = LookupView {
            identifier: "blank".to_owned(),
            profile: Some(octocat(Some("   "), Some("bio"))),
            sub_resources: Vec::new(),
        };

        assert_eq!(render(&view), "Search: blank");
    }

    #[test]
    fn blank_biography_uses_fallback() {
        let view = LookupView {
            identifier: "octocat".to_owned(),
            profile: Some(octocat(Some("The Octocat"), Some(" \n "))),
            sub_resources: Vec::new(),
        };

        assert!(render(&view).contains("\nBio: No biography available\n"));
    }
}
