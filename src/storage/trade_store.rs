use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder,
};

use crate::models::trade;

/// Durable CRUD primitives for trade records, keyed by id.
/// The only component that touches the database.
#[derive(Clone)]
pub struct TradeStore {
    db: DatabaseConnection,
}

impl TradeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<trade::Model>, DbErr> {
        trade::Entity::find()
            .order_by_asc(trade::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<trade::Model>, DbErr> {
        trade::Entity::find_by_id(id).one(&self.db).await
    }

    /// Upsert: an unset id inserts and lets the database assign the key,
    /// a set id overwrites the existing row.
    pub async fn save(&self, trade: trade::ActiveModel) -> Result<trade::Model, DbErr> {
        match trade.id {
            ActiveValue::NotSet => trade.insert(&self.db).await,
            _ => trade.update(&self.db).await,
        }
    }

    /// Removes the row matching the record's id. Callers check existence first.
    pub async fn delete(&self, trade: trade::Model) -> Result<(), DbErr> {
        trade.delete(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveValue::Set, ConnectOptions, ConnectionTrait, Database, Schema};

    async fn setup() -> TradeStore {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.unwrap();

        let schema = Schema::new(db.get_database_backend());
        let stmt = schema.create_table_from_entity(trade::Entity);
        db.execute(db.get_database_backend().build(&stmt))
            .await
            .unwrap();

        TradeStore::new(db)
    }

    fn new_trade(symbol: &str, quantity: i32, price: f64) -> trade::ActiveModel {
        trade::ActiveModel {
            id: ActiveValue::NotSet,
            symbol: Set(symbol.to_string()),
            quantity: Set(quantity),
            price: Set(price),
        }
    }

    #[tokio::test]
    async fn save_with_unset_id_inserts_and_assigns_id() {
        let store = setup().await;

        let first = store.save(new_trade("AAPL", 10, 150.5)).await.unwrap();
        let second = store.save(new_trade("TSLA", 5, 230.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.symbol, "AAPL");
    }

    #[tokio::test]
    async fn save_with_set_id_overwrites_existing_row() {
        let store = setup().await;
        let created = store.save(new_trade("AAPL", 10, 150.5)).await.unwrap();

        let mut active: trade::ActiveModel = created.clone().into();
        active.quantity = Set(20);
        active.price = Set(155.0);
        let updated = store.save(active).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.quantity, 20);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_absent() {
        let store = setup().await;
        assert_eq!(store.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let store = setup().await;
        store.save(new_trade("AAPL", 10, 150.5)).await.unwrap();
        store.save(new_trade("TSLA", 5, 230.0)).await.unwrap();
        store.save(new_trade("MSFT", 7, 410.2)).await.unwrap();

        let all = store.find_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let store = setup().await;
        let created = store.save(new_trade("AAPL", 10, 150.5)).await.unwrap();

        store.delete(created.clone()).await.unwrap();

        assert_eq!(store.find_by_id(created.id).await.unwrap(), None);
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
