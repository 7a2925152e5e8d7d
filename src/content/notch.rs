use crate::models::{Feature, NavLink, Plan, Testimonial};

pub const BRAND: &str = "notch";
pub const COMPANY: &str = "Notch Site";

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#features", label: "Features", icon: None },
    NavLink { href: "#testimonials", label: "Testimonials", icon: None },
    NavLink { href: "#pricing", label: "Pricing", icon: None },
    NavLink { href: "#cta", label: "Contact", icon: None },
];

pub static SECTION_IDS: &[&str] = &["hero", "features", "testimonials", "pricing", "cta"];

pub static FEATURES: &[Feature] = &[
    Feature {
        title: "Fast Performance",
        description: "Experience lightning-quick load times and seamless browsing.",
        animation_url: "https://assets10.lottiefiles.com/packages/lf20_jcikwtux.json",
    },
    Feature {
        title: "Secure by Design",
        description: "Top-tier security built into every layer of our product.",
        animation_url: "https://assets4.lottiefiles.com/packages/lf20_myejiggj.json",
    },
    Feature {
        title: "Intuitive UI",
        description: "An interface so easy you already know how to use it.",
        animation_url: "https://assets3.lottiefiles.com/packages/lf20_touohxv0.json",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "This product transformed our workflow and doubled conversions.",
        author: "Jordan",
        role: Some("Growth Lead"),
        initials: None,
    },
    Testimonial {
        quote: "The animations and UX feel world-class. Our team loves it!",
        author: "Avery",
        role: Some("Product Manager"),
        initials: None,
    },
];

pub static PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$19/mo",
        period: None,
        blurb: None,
        features: &["Basic analytics", "Email support", "Single user"],
        highlight: false,
        accent: Some("from-cyan-400 to-blue-500"),
    },
    Plan {
        name: "Pro",
        price: "$49/mo",
        period: None,
        blurb: None,
        features: &["Advanced analytics", "Priority support", "Up to 5 users"],
        highlight: true,
        accent: Some("from-pink-500 to-yellow-400"),
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: None,
        blurb: None,
        features: &["Full analytics", "Dedicated support", "Unlimited users"],
        highlight: false,
        accent: Some("from-green-400 to-teal-500"),
    },
];

/// Blurred background blobs: (size and position classes, gradient classes).
pub static FLOATING_SHAPES: &[(&str, &str)] = &[
    ("w-24 h-24 top-32 left-10 opacity-30", "from-pink-500 to-yellow-400"),
    ("w-32 h-32 top-1/2 right-10 opacity-20", "from-cyan-400 to-blue-500"),
    ("w-20 h-20 bottom-24 left-1/3 opacity-20", "from-green-400 to-teal-500"),
    ("w-28 h-28 bottom-10 right-1/4 opacity-20", "from-purple-500 to-pink-500"),
];

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
    fn feature_animations_are_https_json() {
        for feature in FEATURES {
            assert!(feature.animation_url.starts_with("https://"));
            assert!(feature.animation_url.ends_with(".json"));
        }
    }
}
