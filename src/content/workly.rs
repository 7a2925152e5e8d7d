use crate::models::{Benefit, Faq, FooterColumn, NavLink, Plan, Step, Testimonial};

pub const BRAND: &str = "Workly";

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home", icon: None },
    NavLink { href: "#benefits", label: "About us", icon: None },
    NavLink { href: "#testimonials", label: "Testimonials", icon: None },
    NavLink { href: "#pricing", label: "Pricing", icon: None },
];

/// Anchor ids rendered by the page, top to bottom.
pub static SECTION_IDS: &[&str] = &[
    "home",
    "trusted",
    "benefits",
    "how-it-works",
    "testimonials",
    "pricing",
    "faq",
    "get-started",
];

pub static TRUSTED_BY: &[&str] = &["Airbnb", "Figma", "Stripe", "Google", "GitHub", "Amazon", "Twitch"];

/// Outer-to-inner arc sizes behind the hero headline, in Tailwind units.
pub static HERO_ARCS: &[u32] = &[64, 80, 96, 112];
pub static CTA_ARCS: &[u32] = &[80, 96, 112];

pub static BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Team Workflow",
        description: "Assign tasks and set priorities in real time for smoother collaboration.",
        graphic: "Kanban Board / Task List UI",
    },
    Benefit {
        title: "Cloud Backup",
        description: "Your projects are safely stored in the cloud, always up-to-date and recoverable.",
        graphic: "Cloud Icon with Sync Arrows",
    },
    Benefit {
        title: "All-in-One Search",
        description: "Quickly find tasks, messages, and docs with a single search across your workspace.",
        graphic: "Search Bar UI with Results",
    },
    Benefit {
        title: "App Integrations",
        description: "Seamlessly connect your favorite tools for a smooth and unified experience.",
        graphic: "Grid of App Logos",
    },
];

pub static STEPS: &[Step] = &[
    Step {
        number: "1",
        title: "Join & Build Team",
        description: "Invite your team members and set up your organization structure.",
    },
    Step {
        number: "2",
        title: "Create Project",
        description: "Start your first project, define tasks, and set milestones.",
    },
    Step {
        number: "3",
        title: "Track Progress",
        description: "Monitor progress, collaborate effectively, and achieve your goals.",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Workly has revolutionized how our team collaborates. Everything is streamlined and so much easier to manage!",
        author: "Sarah L.",
        role: Some("Project Manager"),
        initials: Some("SL"),
    },
    Testimonial {
        quote: "The integrations are seamless and the search functionality is incredibly powerful. A huge productivity boost for us.",
        author: "Mike R.",
        role: Some("Lead Developer"),
        initials: Some("MR"),
    },
    Testimonial {
        quote: "Finally, a tool that understands the needs of a dynamic marketing team. We're more organized than ever.",
        author: "Jessica P.",
        role: Some("Marketing Director"),
        initials: Some("JP"),
    },
];

pub static PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$0",
        period: None,
        blurb: Some("For individuals & small teams"),
        features: &["Up to 5 users", "Basic task management", "1GB storage", "Community support"],
        highlight: false,
        accent: None,
    },
    Plan {
        name: "Pro",
        price: "$9",
        period: Some("/user/mo"),
        blurb: Some("For growing teams"),
        features: &[
            "Up to 50 users",
            "Advanced task management",
            "Unlimited projects",
            "50GB storage",
            "Priority support",
            "Integrations",
        ],
        highlight: true,
        accent: None,
    },
    Plan {
        name: "Enterprise",
        price: "$19",
        period: Some("/user/mo"),
        blurb: Some("For large organizations"),
        features: &[
            "Unlimited users",
            "Custom workflows",
            "1TB storage",
            "Dedicated support",
            "SSO & advanced security",
        ],
        highlight: false,
        accent: None,
    },
];

pub static FAQS: &[Faq] = &[
    Faq {
        question: "How long does it take to onboard my team?",
        answer: "Onboarding is designed to be quick and intuitive. Most teams are up and running within a day, and full integration can be achieved in under a week.",
    },
    Faq {
        question: "Is Workly really free to use?",
        answer: "Yes, Workly offers a generous free forever plan for small teams and individuals. Paid plans unlock advanced features and higher limits.",
    },
    Faq {
        question: "Is my data secure on Workly?",
        answer: "Absolutely. We use industry-standard encryption, regular backups, and robust security protocols to ensure your data is always safe and private.",
    },
    Faq {
        question: "Can I integrate Workly with my existing tools?",
        answer: "Yes! Workly offers a wide range of integrations with popular tools like Slack, GitHub, Google Workspace, and many more. We're always adding new integrations.",
    },
    Faq {
        question: "Can I cancel or change my plan at any time?",
        answer: "Yes, you can upgrade, downgrade, or cancel your plan at any time directly from your account settings. No long-term contracts required.",
    },
];

pub static FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn { title: "Product", links: &["Link 1", "Link 2", "Link 3", "Link 4"] },
    FooterColumn { title: "Company", links: &["Link 1", "Link 2", "Link 3", "Link 4"] },
    FooterColumn { title: "Support", links: &["Link 1", "Link 2", "Link 3", "Link 4"] },
    FooterColumn { title: "Features", links: &["Link 1", "Link 2", "Link 3", "Link 4"] },
];

pub static SOCIAL_LINKS: &[&str] = &["Twitter", "LinkedIn", "Instagram", "GitHub"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::unresolved_anchors;

    #[test]
    fn nav_links_resolve() {
        let hrefs = NAV_LINKS.iter().map(|l| l.href);
        assert!(unresolved_anchors(hrefs, SECTION_IDS).is_empty());
    }

    #[test]
    fn exactly_one_recommended_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.highlight).count(), 1);
    }
}
