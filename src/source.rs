use crate::page::GameId;

#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    ServerError,
    InternalError,
    InvalidConfig,
    NoOffers,
}

/// Lowest known listing for a game: where to buy it and for how much.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceOffer {
    pub url: String,
    pub price: f64,
}

pub trait PriceSource {
    fn lowest_offer(
        &self,
        game: GameId,
    ) -> impl std::future::Future<Output = Result<PriceOffer, PricingError>> + Send;
}
