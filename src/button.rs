use log::error;

use crate::dom::{Anchor, Dom};
use crate::source::PriceOffer;

/// Toolbar region on the host page that carries the action buttons.
const TOOLBAR_ACTIONS: &str = ".toolbar-actions";
/// Action slot inside the toolbar that receives the injected button.
const TOOLBAR_ACTION: &str = ".toolbar-action";
/// Marker for the injected button, used to replace an earlier one.
const BUY_BUTTON: &str = ".buy-btn";

const BUTTON_CLASSES: &str = "buy-btn btn btn-sm";
const BUTTON_TITLE: &str = "Se alle priser på braetspilspriser.dk";
const CART_GLYPH: &str = "<i class=\"fi-shopping-cart\"></i>";

/// Adds or replaces the buy button in the page toolbar.
///
/// Safe to call repeatedly: an earlier button is removed before the new one
/// is appended, so at most one is ever present.
pub fn update_buy_button(dom: &mut impl Dom, offer: &PriceOffer) {
    let Some(toolbar) = dom.query(TOOLBAR_ACTIONS) else {
        error!("Could not find toolbar to add price button");
        return;
    };

    let Some(slot) = dom.query_within(toolbar, TOOLBAR_ACTION) else {
        error!("Could not find toolbar action to add price button");
        return;
    };

    if let Some(existing) = dom.query_within(slot, BUY_BUTTON) {
        dom.remove(existing);
    }

    dom.append_anchor(
        slot,
        Anchor {
            classes: BUTTON_CLASSES.to_owned(),
            title: BUTTON_TITLE.to_owned(),
            href: offer.url.clone(),
            label: format!("{CART_GLYPH} fra {} kr", offer.price.round() as i64),
        },
    );
}
