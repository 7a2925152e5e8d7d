//! Static content for the three landing pages.
//!
//! Each page module exposes its tables as `static` slices plus the list of
//! anchor ids it renders, so navigation targets can be checked in tests.

pub mod notch;
pub mod wipe;
pub mod workly;

/// Every in-page `#id` link in `hrefs` names one of `ids`.
#[cfg(test)]
pub(crate) fn unresolved_anchors<'a>(
    hrefs: impl IntoIterator<Item = &'a str>,
    ids: &[&str],
) -> Vec<&'a str> {
    hrefs
        .into_iter()
        .filter_map(crate::navigation::anchor_target)
        .filter(|id| !ids.contains(id))
        .collect()
}
