// tests/flow.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use bgg_price_button::dom::{MemoryDom, NodeId};
use bgg_price_button::page::GameId;
use bgg_price_button::source::{PriceOffer, PriceSource, PricingError};

/// Stub source that records how many lookups were issued.
struct StubSource {
    calls: AtomicUsize,
    response: Result<PriceOffer, PricingError>,
}

impl StubSource {
    fn offering(url: &str, price: f64) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Ok(PriceOffer {
                url: url.to_owned(),
                price,
            }),
        }
    }

    fn failing(error: PricingError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Err(error),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PriceSource for StubSource {
    async fn lowest_offer(&self, _game: GameId) -> Result<PriceOffer, PricingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

fn page_dom() -> (MemoryDom, NodeId) {
    let mut dom = MemoryDom::new();
    let toolbar = dom.add_element(None, "toolbar-actions");
    let slot = dom.add_element(Some(toolbar), "toolbar-action");
    (dom, slot)
}

#[tokio::test]
async fn game_page_gets_a_button() {
    let source = StubSource::offering("https://braetspilspriser.dk/x", 199.9);
    let (mut dom, slot) = page_dom();

    bgg_price_button::run("/boardgame/1234/example", &source, &mut dom).await;

    assert_eq!(source.call_count(), 1);

    let children = dom.children(slot);
    assert_eq!(children.len(), 1);

    let anchor = dom.anchor(children[0]).unwrap();
    assert_eq!(anchor.href, "https://braetspilspriser.dk/x");
    assert!(anchor.label.contains("200 kr"));
}

#[tokio::test]
async fn non_numeric_id_issues_no_lookup() {
    let source = StubSource::offering("https://braetspilspriser.dk/x", 100.0);
    let (mut dom, slot) = page_dom();

    bgg_price_button::run("/boardgame/abc/example", &source, &mut dom).await;

    assert_eq!(source.call_count(), 0);
    assert!(dom.children(slot).is_empty());
}

#[tokio::test]
async fn short_path_issues_no_lookup() {
    let source = StubSource::offering("https://braetspilspriser.dk/x", 100.0);
    let (mut dom, slot) = page_dom();

    bgg_price_button::run("/", &source, &mut dom).await;

    assert_eq!(source.call_count(), 0);
    assert!(dom.children(slot).is_empty());
}

#[tokio::test]
async fn lookup_failure_adds_no_button() {
    let source = StubSource::failing(PricingError::ServerError);
    let (mut dom, slot) = page_dom();

    bgg_price_button::run("/boardgame/1234/example", &source, &mut dom).await;

    assert_eq!(source.call_count(), 1);
    assert!(dom.children(slot).is_empty());
}

#[tokio::test]
async fn empty_payload_adds_no_button() {
    let source = StubSource::failing(PricingError::NoOffers);
    let (mut dom, slot) = page_dom();

    bgg_price_button::run("/boardgame/1234/example", &source, &mut dom).await;

    assert!(dom.children(slot).is_empty());
}

#[tokio::test]
async fn missing_toolbar_is_contained() {
    let source = StubSource::offering("https://braetspilspriser.dk/x", 100.0);
    let mut dom = MemoryDom::new();

    // No panic may escape; the lookup still happens, only rendering is skipped.
    bgg_price_button::run("/boardgame/1234/example", &source, &mut dom).await;

    assert_eq!(source.call_count(), 1);
}
