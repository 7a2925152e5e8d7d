use chrono::Datelike;
use leptos::prelude::*;

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// `© <year> <owner>. All rights reserved.` plus an optional tail.
pub fn copyright(owner: &str, tail: Option<&str>) -> String {
    let mut line = format!("© {} {owner}", current_year());
    if !owner.ends_with('.') {
        line.push('.');
    }
    match tail {
        Some(tail) => format!("{line} {tail}"),
        None => format!("{line} All rights reserved."),
    }
}

#[component]
pub fn Copyright(owner: &'static str, #[prop(optional)] tail: Option<&'static str>) -> impl IntoView {
    view! { <p class="copyright">{copyright(owner, tail)}</p> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_current_year() {
        let year = current_year();
        assert!(year >= 2024);
        assert_eq!(
            copyright("Notch Site", None),
            format!("© {year} Notch Site. All rights reserved.")
        );
    }

    #[test]
    fn owner_ending_in_period_is_not_doubled() {
        let line = copyright("Advanced Wipes Inc.", Some("Crafted with Precision."));
        assert!(line.ends_with("Advanced Wipes Inc. Crafted with Precision."));
    }
}
