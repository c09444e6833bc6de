use serde::{Deserialize, Deserializer};

/// Image shown when a member has no picture of their own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamMember {
    pub id: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, deserialize_with = "non_empty_url")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "non_empty_url")]
    pub github: Option<String>,
}

impl TeamMember {
    /// Image source for rendering, falling back to the placeholder.
    pub fn image_src(&self) -> &str {
        if self.image_url.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image_url
        }
    }

    /// Role with surrounding whitespace removed.
    pub fn role(&self) -> &str {
        self.subtitle.trim()
    }

    /// Profile links in display order (LinkedIn first). Absent links are skipped.
    pub fn profile_links(&self) -> Vec<ProfileLink<'_>> {
        let mut links = Vec::with_capacity(2);
        if let Some(url) = self.linkedin.as_deref() {
            links.push(ProfileLink {
                kind: ProfileKind::LinkedIn,
                url,
            });
        }
        if let Some(url) = self.github.as_deref() {
            links.push(ProfileLink {
                kind: ProfileKind::GitHub,
                url,
            });
        }
        links
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    LinkedIn,
    GitHub,
}

impl ProfileKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLink<'a> {
    pub kind: ProfileKind,
    pub url: &'a str,
}

/// `null`, missing and `""` all mean "no link".
fn non_empty_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|url| !url.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::{PLACEHOLDER_IMAGE, ProfileKind, TeamMember};
    use serde_json::json;

    fn member(value: serde_json::Value) -> TeamMember {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let m = member(json!({ "id": "1", "title": "Ada", "subtitle": "President" }));
        assert_eq!(m.image_src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn empty_image_uses_placeholder() {
        let m = member(json!({ "id": "1", "imageUrl": "", "title": "Ada", "subtitle": "" }));
        assert_eq!(m.image_src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn present_image_is_kept() {
        let m = member(json!({ "id": "1", "imageUrl": "/a.png", "title": "Ada", "subtitle": "" }));
        assert_eq!(m.image_src(), "/a.png");
    }

    #[test]
    fn whitespace_only_values_are_kept() {
        let m = member(json!({
            "id": "1",
            "imageUrl": " ",
            "title": "Ada",
            "subtitle": "",
            "linkedin": "  "
        }));
        assert_eq!(m.image_src(), " ");
        assert_eq!(m.linkedin.as_deref(), Some("  "));
        assert_eq!(m.profile_links().len(), 1);
    }

    #[test]
    fn absent_links_produce_nothing() {
        let m = member(json!({ "id": "1", "title": "Ada", "subtitle": "Member" }));
        assert!(m.profile_links().is_empty());
    }

    #[test]
    fn null_and_empty_links_are_absent() {
        let m = member(json!({
            "id": "1",
            "title": "Ada",
            "subtitle": "Member",
            "linkedin": null,
            "github": ""
        }));
        assert_eq!(m.linkedin, None);
        assert_eq!(m.github, None);
        assert!(m.profile_links().is_empty());
    }

    #[test]
    fn links_listed_linkedin_first() {
        let m = member(json!({
            "id": "1",
            "title": "Ada",
            "subtitle": "Member",
            "github": "https://github.com/ada",
            "linkedin": "https://linkedin.com/in/ada"
        }));
        let kinds: Vec<ProfileKind> = m.profile_links().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![ProfileKind::LinkedIn, ProfileKind::GitHub]);
        assert_eq!(m.profile_links()[1].url, "https://github.com/ada");
    }

    #[test]
    fn only_github_present() {
        let m = member(json!({
            "id": "7",
            "title": "Grace",
            "subtitle": "Member",
            "github": "https://github.com/grace"
        }));
        let links = m.profile_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, ProfileKind::GitHub);
    }

    #[test]
    fn role_is_trimmed() {
        let m = member(json!({ "id": "1", "title": "Ada", "subtitle": "  President \n" }));
        assert_eq!(m.role(), "President");
    }
}
