//! Authored page content. Everything here is static data: the components
//! render it read-only and never mutate it.

/// Anchor id of the lead-capture section. Nav links and the hero call to
/// action both jump here.
pub const LEAD_CAPTURE_ID: &str = "request-access";

/// One content block of the landing page: a tag line, a title with an
/// optional highlighted tail, body copy, an image, and optionally some
/// extra markup (the feature grid, the privacy points). The `id` doubles
/// as the in-page anchor target and must be unique across the page.
#[derive(Clone, PartialEq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub tag: &'static str,
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub reversed: bool,
    pub extra: Option<ExtraContent>,
}

/// Supplementary blocks a section can carry under its body copy.
#[derive(Clone, PartialEq)]
pub enum ExtraContent {
    FeatureGrid(&'static [FeatureCard]),
    PrivacyPoints(&'static [PrivacyPoint]),
}

#[derive(Clone, PartialEq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: bool,
}

#[derive(Clone, PartialEq)]
pub struct PrivacyPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub fn nav_links() -> &'static [NavLink] {
    &NAV_LINKS
}

pub fn sections() -> &'static [SectionDescriptor] {
    &SECTIONS
}

/// Anchor correctness: every nav target must resolve to a section id or
/// the lead-capture section, and no two sections may share an id.
pub fn ids_are_unique(sections: &[SectionDescriptor]) -> bool {
    sections.iter().enumerate().all(|(i, section)| {
        section.id != LEAD_CAPTURE_ID
            && sections[..i].iter().all(|earlier| earlier.id != section.id)
    })
}

static NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Features", target: "features" },
    NavLink { label: "Data Privacy", target: "privacy" },
    NavLink { label: "Request Access", target: LEAD_CAPTURE_ID },
];

static FEATURES: [FeatureCard; 6] = [
    FeatureCard {
        icon: "fa-solid fa-shield-halved",
        title: "Plaid Integration",
        description: "Securely sync with 12,000+ financial institutions. Your data is encrypted and protected.",
        highlight: false,
    },
    FeatureCard {
        icon: "fa-solid fa-arrow-trend-up",
        title: "Equity & RSUs",
        description: "Specialized tracking for stock grants, options, and complex holdings often missed by other apps.",
        highlight: false,
    },
    FeatureCard {
        icon: "fa-solid fa-calculator",
        title: "Smart Tax Calculations",
        description: "High-precision tax estimation and optimization. Plan your exits and sales with confidence.",
        highlight: true,
    },
    FeatureCard {
        icon: "fa-solid fa-layer-group",
        title: "What-if Simulations",
        description: "Project your financial future. Model house purchases, career changes, or market crashes.",
        highlight: false,
    },
    FeatureCard {
        icon: "fa-solid fa-wand-magic-sparkles",
        title: "AI Financial Advisor",
        description: "Personalized insights driven by your actual spending habits. Optimize your cash flow instantly.",
        highlight: false,
    },
    FeatureCard {
        icon: "fa-solid fa-arrow-right",
        title: "And much more...",
        description: "Custom labels, multi-user support, real-time analytics, and automated rules.",
        highlight: false,
    },
];

static PRIVACY_POINTS: [PrivacyPoint; 2] = [
    PrivacyPoint {
        icon: "fa-solid fa-server",
        title: "No External Servers",
        description: "Your data never leaves your home network. Complete isolation from data breaches.",
    },
    PrivacyPoint {
        icon: "fa-solid fa-lock",
        title: "Open Source",
        description: "Transparent codebase. Verify every line of code to ensure your privacy is never compromised.",
    },
];

static SECTIONS: [SectionDescriptor; 2] = [
    SectionDescriptor {
        id: "features",
        tag: "Features",
        title: "Built for the next generation of",
        title_highlight: "investors.",
        description: "Everything you need to understand your money in one place: accounts, \
            equity, taxes, and projections, updated as your life changes.",
        image: "/assets/features.png",
        image_alt: "Portfolio dashboard overview",
        reversed: false,
        extra: Some(ExtraContent::FeatureGrid(&FEATURES)),
    },
    SectionDescriptor {
        id: "privacy",
        tag: "Privacy First",
        title: "Your Data.",
        title_highlight: "Your Infrastructure.",
        description: "Lune Capital is the only financial tracking platform designed to be \
            100% self-hosted. While other apps store your sensitive financial history on \
            their servers, Lune Capital runs entirely on your own hardware.",
        image: "/assets/privacy.png",
        image_alt: "Data Privacy Visualization",
        reversed: true,
        extra: Some(ExtraContent::PrivacyPoints(&PRIVACY_POINTS)),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique_across_the_page() {
        assert!(ids_are_unique(sections()));
    }

    #[test]
    fn duplicate_or_reserved_ids_are_rejected() {
        let mut doubled = sections().to_vec();
        doubled.extend(sections().iter().cloned());
        assert!(!ids_are_unique(&doubled));

        let mut clash = sections().to_vec();
        clash[0].id = LEAD_CAPTURE_ID;
        assert!(!ids_are_unique(&clash));
    }

    #[test]
    fn every_nav_target_resolves_to_an_anchor() {
        for link in nav_links() {
            let resolves = link.target == LEAD_CAPTURE_ID
                || sections().iter().any(|section| section.id == link.target);
            assert!(resolves, "dead nav link: #{}", link.target);
        }
    }
}
