//! Descriptor types for the static page content.

/// Placeholder image host colours: dark background, green text.
const PLACEHOLDER_BG: &str = "0A0A0A";
const PLACEHOLDER_FG: &str = "05C15C";
const PLACEHOLDER_FONT: &str = "montserrat";

/// Which grid column the text of a wipe section occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSide {
    Left,
    Right,
    Center,
}

impl TextSide {
    pub fn text_class(self, has_image: bool) -> &'static str {
        match (self, has_image) {
            (TextSide::Center, _) => "md:col-span-2 text-center",
            (TextSide::Left, true) => "md:order-1",
            (TextSide::Right, true) => "md:order-2",
            _ => "",
        }
    }

    pub fn image_class(self) -> &'static str {
        match self {
            TextSide::Left => "md:order-2",
            _ => "md:order-1",
        }
    }
}

/// Corner the green wipe overlay sweeps in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeDirection {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl WipeDirection {
    pub fn overlay_class(self) -> &'static str {
        match self {
            WipeDirection::TopLeft => "wipe-overlay-tl",
            WipeDirection::TopRight => "wipe-overlay-tr",
            WipeDirection::BottomLeft => "wipe-overlay-bl",
            WipeDirection::BottomRight => "wipe-overlay-br",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub text: &'static str,
    pub href: &'static str,
}

/// A generated placeholder image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub label: &'static str,
    pub size: &'static str,
    pub alt: &'static str,
}

impl ImageRef {
    pub fn url(&self) -> String {
        format!(
            "https://placehold.co/{}/{}/{}/png?text={}&font={}",
            self.size,
            PLACEHOLDER_BG,
            PLACEHOLDER_FG,
            urlencoding::encode(self.label),
            PLACEHOLDER_FONT
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Extra content rendered under a section's text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionExtra {
    None,
    Services(&'static [ServiceCard]),
    ContactForm,
}

/// One full-height section of the wipe page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionData {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub image: Option<ImageRef>,
    pub text_side: TextSide,
    pub wipe: WipeDirection,
    pub background: Option<&'static str>,
    pub cta: Option<Cta>,
    pub extra: SectionExtra,
}

impl SectionData {
    /// Centered sections never show their image column.
    pub fn shows_image(&self) -> bool {
        self.image.is_some() && self.text_side != TextSide::Center
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
}

/// Feature card backed by a remote Lottie animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub animation_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub graphic: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: Option<&'static str>,
    pub initials: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: Option<&'static str>,
    pub blurb: Option<&'static str>,
    pub features: &'static [&'static str],
    pub highlight: bool,
    pub accent: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_url_encodes_label() {
        let image = ImageRef {
            label: "Dynamic Tech",
            size: "800x600",
            alt: "",
        };
        assert_eq!(
            image.url(),
            "https://placehold.co/800x600/0A0A0A/05C15C/png?text=Dynamic%20Tech&font=montserrat"
        );
    }

    #[test]
    fn centered_text_spans_both_columns() {
        assert_eq!(TextSide::Center.text_class(true), "md:col-span-2 text-center");
        assert_eq!(TextSide::Left.text_class(true), "md:order-1");
        assert_eq!(TextSide::Left.text_class(false), "");
        assert_eq!(TextSide::Left.image_class(), "md:order-2");
        assert_eq!(TextSide::Right.image_class(), "md:order-1");
    }
}
