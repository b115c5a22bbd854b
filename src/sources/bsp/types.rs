use serde::{Deserialize, Serialize};
use serde_aux::prelude::deserialize_number_from_string;

use crate::source::PriceOffer;

/// Payload of `/api/info`. Every list level is treated as optional: a
/// missing `items` or `prices` deserializes the same as an empty one.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InfoResponse {
    #[serde(default)]
    pub items: Vec<GameListing>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GameListing {
    pub url: String,
    #[serde(default)]
    pub prices: Vec<ShopPrice>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShopPrice {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub product: f64,
}

impl InfoResponse {
    /// First price of the first item; the API already sorts by its own
    /// "smart" ordering. `None` when the payload has no usable price chain.
    pub fn lowest_offer(&self) -> Option<PriceOffer> {
        let item = self.items.first()?;
        let price = item.prices.first()?;

        Some(PriceOffer {
            url: item.url.clone(),
            price: price.product,
        })
    }
}
