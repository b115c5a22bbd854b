//! Adds a lowest-price button to BoardGameGeek game pages, sourced from
//! braetspilspriser.dk.
//!
//! One shot per page load: read the game id from the page path, fetch the
//! price summary, inject the button. The network and the document are
//! injected seams ([`source::PriceSource`], [`dom::Dom`]) so the host
//! embedding decides how to bind them.

use log::error;

use crate::dom::Dom;
use crate::page::GameId;
use crate::source::PriceSource;

pub mod button;
pub mod dom;
pub mod page;
pub mod source;
pub mod sources;

/// One full pass for a page load. Every failure is contained here; the host
/// page never sees a panic, only the absence of the button.
pub async fn run(path: &str, source: &impl PriceSource, dom: &mut impl Dom) {
    // Only game pages carry a numeric id; everything else is skipped quietly.
    let Some(game) = GameId::from_path(path) else {
        return;
    };

    match source.lowest_offer(game).await {
        Ok(offer) => button::update_buy_button(dom, &offer),
        Err(e) => error!("Error fetching price data: {:?}", e),
    }
}
