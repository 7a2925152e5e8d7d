/// Accordion toggle: clicking the open item closes it, clicking any other
/// item opens that one instead.
pub fn toggle_faq(active: Option<usize>, index: usize) -> Option<usize> {
    if active == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_one_at_a_time() {
        let open = toggle_faq(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_faq(open, 4), Some(4));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_faq(Some(1), 1), None);
    }
}
