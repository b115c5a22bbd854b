use bgg_price_button::dom::MemoryDom;
use bgg_price_button::sources::bsp::Braetspilspriser;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/boardgame/224517/brass-birmingham".to_owned());

    // Toolbar skeleton matching the host page structure.
    let mut dom = MemoryDom::new();
    let toolbar = dom.add_element(None, "toolbar-actions");
    let slot = dom.add_element(Some(toolbar), "toolbar-action");

    let bsp = Braetspilspriser::new().unwrap();
    bgg_price_button::run(&path, &bsp, &mut dom).await;

    let children = dom.children(slot);
    match children.last().and_then(|&node| dom.anchor(node)) {
        Some(anchor) => println!("{} -> {}", anchor.label, anchor.href),
        None => println!("no price button for {path}"),
    }
}
