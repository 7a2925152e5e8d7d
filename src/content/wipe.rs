use crate::models::{
    Cta, ImageRef, NavLink, SectionData, SectionExtra, ServiceCard, TextSide, WipeDirection,
};

pub const BRAND: &str = "WIPE.IO";
pub const COMPANY: &str = "Advanced Wipes Inc.";

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#hero", label: "Home", icon: Some("🏠") },
    NavLink { href: "#features", label: "Features", icon: Some("✨") },
    NavLink { href: "#services", label: "Services", icon: Some("🛠️") },
    NavLink { href: "#process", label: "Process", icon: Some("⚙️") },
    NavLink { href: "#vision", label: "Vision", icon: Some("🚀") },
    NavLink { href: "#contact", label: "Contact", icon: Some("📬") },
];

pub static SERVICES: &[ServiceCard] = &[
    ServiceCard {
        title: "Strategy & Consulting",
        icon: "💡",
        description: "Expert insights for impactful digital roadmaps.",
    },
    ServiceCard {
        title: "UX/UI Design",
        icon: "🎨",
        description: "Intuitive interfaces that captivate and convert.",
    },
    ServiceCard {
        title: "Web & App Development",
        icon: "💻",
        description: "Robust and scalable solutions, built to perform.",
    },
];

pub static SECTIONS: &[SectionData] = &[
    SectionData {
        id: "hero",
        title: "Innovate with Unrivaled Precision",
        subtitle: None,
        description: "Dive into the future with solutions crafted for tomorrow. We merge breakthrough technology with inspired creativity to forge unparalleled digital experiences.",
        image: Some(ImageRef {
            label: "Innovate",
            size: "1200x800",
            alt: "Abstract representation of innovation and code",
        }),
        text_side: TextSide::Left,
        wipe: WipeDirection::TopLeft,
        background: None,
        cta: Some(Cta { text: "Discover Our Edge", href: "#features" }),
        extra: SectionExtra::None,
    },
    SectionData {
        id: "features",
        title: "Dynamic Capabilities Unleashed",
        subtitle: Some("Engineered for Excellence, Designed for You"),
        description: "Our platform is a symphony of power and adaptability. Experience a suite of features that seamlessly integrate and elevate your performance to new heights.",
        image: Some(ImageRef {
            label: "Dynamic Tech",
            size: "800x600",
            alt: "Sleek display of modern electronic components",
        }),
        text_side: TextSide::Right,
        wipe: WipeDirection::TopRight,
        background: Some("#101010"),
        cta: None,
        extra: SectionExtra::None,
    },
    SectionData {
        id: "services",
        title: "Tailored Services, Transformative Outcomes",
        subtitle: None,
        description: "From concept to execution, we offer a comprehensive range of services to bring your vision to life.",
        image: None,
        text_side: TextSide::Center,
        wipe: WipeDirection::BottomLeft,
        background: Some("#080808"),
        cta: None,
        extra: SectionExtra::Services(SERVICES),
    },
    SectionData {
        id: "process",
        title: "Our Streamlined & Agile Process",
        subtitle: None,
        description: "We follow a meticulous and agile process: Discover, Design, Develop, Deploy, and Iterate. This ensures quality, efficiency, and client satisfaction at every stage.",
        image: Some(ImageRef {
            label: "Our Process",
            size: "800x600",
            alt: "Diagram of a streamlined development process",
        }),
        text_side: TextSide::Left,
        wipe: WipeDirection::BottomRight,
        background: Some("#121212"),
        cta: None,
        extra: SectionExtra::None,
    },
    SectionData {
        id: "vision",
        title: "Charting the Course for a Bold Future",
        subtitle: Some("Innovation is Our Compass, Progress Our Destination"),
        description: "Embark with us on a journey to redefine boundaries. Our unwavering commitment is to pioneer next-generation advancements and craft experiences that resonate and transform industries.",
        image: Some(ImageRef {
            label: "Future Vision",
            size: "1200x800",
            alt: "A visionary and futuristic cityscape at dusk",
        }),
        text_side: TextSide::Right,
        wipe: WipeDirection::TopLeft,
        background: None,
        cta: Some(Cta { text: "Let's Build Tomorrow", href: "#contact" }),
        extra: SectionExtra::None,
    },
    SectionData {
        id: "contact",
        title: "Connect With Us",
        subtitle: None,
        description: "Ready to start your next project or have a question? We're here to help.",
        image: None,
        text_side: TextSide::Center,
        wipe: WipeDirection::BottomLeft,
        background: Some("#0F0F0F"),
        cta: None,
        extra: SectionExtra::ContactForm,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::unresolved_anchors;

    fn ids() -> Vec<&'static str> {
        SECTIONS.iter().map(|s| s.id).collect()
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids = ids();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn nav_links_and_ctas_resolve() {
        let hrefs = NAV_LINKS
            .iter()
            .map(|l| l.href)
            .chain(SECTIONS.iter().filter_map(|s| s.cta).map(|c| c.href));
        assert!(unresolved_anchors(hrefs, &ids()).is_empty());
    }

    #[test]
    fn only_side_sections_show_images() {
        let shown: Vec<_> = SECTIONS.iter().filter(|s| s.shows_image()).map(|s| s.id).collect();
        assert_eq!(shown, ["hero", "features", "process", "vision"]);
    }
}
