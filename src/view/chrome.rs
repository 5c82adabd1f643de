/// Shared header and footer shown on every page
use crate::config::SiteIdentity;
use crate::route::PageRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: PageRef,
    /// Highlighted when it points at the current page
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Owner name, links home
    pub wordmark: String,
    pub home: PageRef,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub name: String,
    pub tagline: String,
    pub email: String,
}

/// Header navigation for `current`; home and detail pages highlight nothing
pub fn header(identity: &SiteIdentity, current: &PageRef) -> HeaderView {
    let item = |label, target: PageRef| NavItem {
        label,
        active: &target == current,
        target,
    };

    HeaderView {
        wordmark: identity.owner.clone(),
        home: PageRef::Home,
        items: vec![
            item("Projects", PageRef::Projects),
            item("About", PageRef::About),
        ],
    }
}

pub fn footer(identity: &SiteIdentity) -> FooterView {
    FooterView {
        name: identity.owner.clone(),
        tagline: identity.tagline.clone(),
        email: identity.email.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn active(header: &HeaderView) -> Vec<&str> {
        header.items.iter().filter(|i| i.active).map(|i| i.label).collect()
    }

    #[test]
    fn test_active_item_follows_page() {
        let identity = SiteIdentity::default();

        assert_eq!(active(&header(&identity, &PageRef::Projects)), vec!["Projects"]);
        assert_eq!(active(&header(&identity, &PageRef::About)), vec!["About"]);
        assert!(active(&header(&identity, &PageRef::project("a"))).is_empty());
    }

    #[test]
    fn test_home_highlights_nothing() {
        let identity = SiteIdentity::default();
        let header = header(&identity, &PageRef::parse("index.html"));

        assert!(active(&header).is_empty());
        assert_eq!(header.home, PageRef::Home);
        let targets: Vec<_> = header.items.iter().map(|i| i.target.clone()).collect();
        assert_eq!(targets, vec![PageRef::Projects, PageRef::About]);
    }

    #[test]
    fn test_footer_uses_identity() {
        let identity = SiteIdentity {
            owner: "Jo Turner".to_string(),
            email: "jo@example.com".to_string(),
            ..SiteIdentity::default()
        };

        let footer = footer(&identity);
        assert_eq!(footer.name, "Jo Turner");
        assert_eq!(footer.email, "jo@example.com");
        assert_eq!(header(&identity, &PageRef::About).wordmark, "Jo Turner");
    }
}
