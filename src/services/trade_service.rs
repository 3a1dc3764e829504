use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::DbErr;

use crate::models::dto::{CreateTradeRequest, UpdateTradeRequest};
use crate::models::trade;
use crate::storage::trade_store::TradeStore;

/// Business layer between the routes and the store. Applies the
/// merge-update policy and the existence checks for update/delete;
/// storage errors propagate untouched.
#[derive(Clone)]
pub struct TradeService {
    store: TradeStore,
}

impl TradeService {
    pub fn new(store: TradeStore) -> Self {
        Self { store }
    }

    pub async fn get_all_trades(&self) -> Result<Vec<trade::Model>, DbErr> {
        self.store.find_all().await
    }

    pub async fn get_trade_by_id(&self, id: i64) -> Result<Option<trade::Model>, DbErr> {
        self.store.find_by_id(id).await
    }

    /// Creates a trade with a fresh id. The id stays unset here so the
    /// store always inserts, never overwrites an existing row.
    pub async fn create_trade(&self, request: CreateTradeRequest) -> Result<trade::Model, DbErr> {
        let new_trade = trade::ActiveModel {
            id: NotSet,
            symbol: Set(request.symbol),
            quantity: Set(request.quantity),
            price: Set(request.price),
        };

        self.store.save(new_trade).await
    }

    /// Copies symbol, quantity and price onto the existing record,
    /// keeping its id. `None` when the id is unknown.
    pub async fn update_trade(
        &self,
        id: i64,
        details: UpdateTradeRequest,
    ) -> Result<Option<trade::Model>, DbErr> {
        let existing = match self.store.find_by_id(id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut active: trade::ActiveModel = existing.into();
        active.symbol = Set(details.symbol);
        active.quantity = Set(details.quantity);
        active.price = Set(details.price);

        let updated = self.store.save(active).await?;
        Ok(Some(updated))
    }

    /// `false` when the id is unknown, so a second delete of the same id
    /// is a quiet no-op for the caller.
    pub async fn delete_trade(&self, id: i64) -> Result<bool, DbErr> {
        match self.store.find_by_id(id).await? {
            Some(existing) => {
                self.store.delete(existing).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
