use leads_shared::ProfileKind;

pub const CLOSE_SVG: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M18 6 6 18"/><path d="m6 6 12 12"/></svg>"#;

pub const SPARKLES_SVG: &str = r#"<svg width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M9.94 14.06 8 21l-1.94-6.94L0 12l6.06-1.94L8 3l1.94 7.06L16 12z"/><path d="M20 3v4"/><path d="M22 5h-4"/></svg>"#;

const LINKEDIN_SVG: &str = r#"<svg width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/></svg>"#;

const GITHUB_SVG: &str = r#"<svg width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/></svg>"#;

pub fn profile_icon(kind: ProfileKind) -> &'static str {
    match kind {
        ProfileKind::LinkedIn => LINKEDIN_SVG,
        ProfileKind::GitHub => GITHUB_SVG,
    }
}

#[cfg(test)]
mod tests {
    use super::profile_icon;
    use leads_shared::ProfileKind;

    #[test]
    fn each_profile_has_its_own_icon() {
        assert_ne!(
            profile_icon(ProfileKind::LinkedIn),
            profile_icon(ProfileKind::GitHub)
        );
        assert!(profile_icon(ProfileKind::GitHub).starts_with("<svg"));
    }
}
