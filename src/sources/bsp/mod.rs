use log::error;
use reqwest::Client;

use self::types::InfoResponse;
use crate::page::GameId;
use crate::source::{PriceOffer, PriceSource, PricingError};

pub mod types;

const BASE_URL: &str = "https://braetspilspriser.dk/api";

// Fixed lookup parameters; there is no per-user configuration.
const CURRENCY: &str = "DKK";
const DESTINATION: &str = "DK";
const DELIVERY: &str = "PACKAGE,POSTOFFICE";
const SORT: &str = "SMART";
const SITENAME: &str = "lillefar.com";

/// Builds the `/info` lookup URL for a game. A plain function so the URL
/// contract can be checked without touching the network.
pub fn info_url(game: GameId) -> String {
    format!(
        "{BASE_URL}/info?eid={game}&currency={CURRENCY}&destination={DESTINATION}\
         &delivery={DELIVERY}&sort={SORT}&sitename={SITENAME}"
    )
}

#[derive(Clone)]
pub struct Braetspilspriser {
    req_client: Client,
}

impl Braetspilspriser {
    pub fn new() -> Result<Self, PricingError> {
        let Ok(client) = reqwest::ClientBuilder::new().build() else {
            return Err(PricingError::InvalidConfig);
        };

        Ok(Self { req_client: client })
    }

    /// Requests the price summary for the given game from braetspilspriser.dk.
    /// One GET against the fixed endpoint; no retries, no cache.
    pub async fn get_info(&self, game: GameId) -> Result<InfoResponse, PricingError> {
        let req = match self.req_client.get(info_url(game)).send().await {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to send request to braetspilspriser.dk: {:?}", e);
                return Err(PricingError::InternalError);
            }
        };

        if req.status().is_server_error() {
            return Err(PricingError::ServerError);
        }

        if req.status() != 200 {
            error!(
                "Failed to get price from braetspilspriser.dk: {:?}, {:?}",
                req.status(),
                req.text().await.unwrap_or_default()
            );
            return Err(PricingError::InternalError);
        }

        match req.json().await {
            Ok(res) => Ok(res),
            Err(e) => {
                error!("Failed to parse JSON from request: {:?}", e);
                Err(PricingError::InternalError)
            }
        }
    }
}

impl PriceSource for Braetspilspriser {
    async fn lowest_offer(&self, game: GameId) -> Result<PriceOffer, PricingError> {
        let info = self.get_info(game).await?;

        match info.lowest_offer() {
            Some(offer) => Ok(offer),
            None => {
                error!("No price data available for game {}", game);
                Err(PricingError::NoOffers)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_url_fills_the_fixed_template() {
        let game = GameId::from_path("/boardgame/1234/example").unwrap();

        assert_eq!(
            info_url(game),
            "https://braetspilspriser.dk/api/info?eid=1234&currency=DKK&destination=DK\
             &delivery=PACKAGE,POSTOFFICE&sort=SMART&sitename=lillefar.com"
        );
    }
}
