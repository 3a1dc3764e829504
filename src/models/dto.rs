// request/response shapes for the trades API

use serde::{Deserialize, Serialize};
use crate::models::trade;

// Create and update carry the same three fields; neither has an id,
// so a client-supplied identifier can never reach the store.
#[derive(Debug, Deserialize)]
pub struct CreateTradeRequest {
    pub symbol: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTradeRequest {
    pub symbol: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct TradeResponse {
    pub id: i64,
    pub symbol: String,
    pub quantity: i32,
    pub price: f64,
}

impl From<trade::Model> for TradeResponse {
    fn from(t: trade::Model) -> Self {
        TradeResponse {
            id: t.id,
            symbol: t.symbol,
            quantity: t.quantity,
            price: t.price,
        }
    }
}
