//! Chrome detection shared by the content selector and the harvester.

use dom_query::Selection;

use crate::dom;
use crate::patterns::SKIPPABLE_NAV_NAME;

/// Check if a navigation-looking element is page chrome rather than a
/// sidebar of sibling pages.
///
/// An element is skippable when its ARIA role marks it as a banner or
/// footer landmark, its id/class names it as header/footer/navbar chrome,
/// or it sits directly inside a `header`/`footer` element.
#[must_use]
pub fn is_skippable_nav(sel: &Selection) -> bool {
    if let Some(role) = dom::get_attribute(sel, "role") {
        if role.eq_ignore_ascii_case("banner") || role.eq_ignore_ascii_case("contentinfo") {
            return true;
        }
    }

    if SKIPPABLE_NAV_NAME.is_match(&dom::id_class(sel)) {
        return true;
    }

    let parent = dom::parent(sel);
    matches!(
        dom::tag_name(&parent).as_deref(),
        Some("header") | Some("footer")
    )
}
