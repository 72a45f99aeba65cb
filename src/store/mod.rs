//! Owner-scoped records-store operations.
//!
//! Every collection in the system is read and deleted the same way: filter
//! to the signed-in user, optionally narrow by field equality, order by one
//! column, optionally limit. Instead of repeating those four queries per
//! feature module, each entity implements [`OwnedEntity`] and the generic
//! functions here do the work. Creates and updates stay typed per feature,
//! where the validation lives.

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::errors::{Error, Result};

/// An entity whose records are owned by exactly one user.
pub trait OwnedEntity: EntityTrait {
    /// Column holding the owning user's ID.
    fn owner_column() -> Self::Column;
    /// Primary-key column.
    fn id_column() -> Self::Column;
    /// Singular record name used in error messages.
    fn record_name() -> &'static str;
}

macro_rules! impl_owned_entity {
    ($module:ident, $name:literal) => {
        impl OwnedEntity for crate::entities::$module::Entity {
            fn owner_column() -> Self::Column {
                crate::entities::$module::Column::UserId
            }
            fn id_column() -> Self::Column {
                crate::entities::$module::Column::Id
            }
            fn record_name() -> &'static str {
                $name
            }
        }
    };
}

impl_owned_entity!(budget, "budget");
impl_owned_entity!(expense, "expense");
impl_owned_entity!(habit, "habit");
impl_owned_entity!(habit_completion, "habit completion");
impl_owned_entity!(income, "income");
impl_owned_entity!(note, "note");
impl_owned_entity!(savings_goal, "savings goal");
impl_owned_entity!(subscription, "subscription");
impl_owned_entity!(task, "task");
impl_owned_entity!(workout, "workout");

/// Lists a user's records ordered by one column.
pub async fn list_for_user<E: OwnedEntity>(
    db: &DatabaseConnection,
    user_id: &str,
    order_by: E::Column,
    direction: Order,
    limit: Option<u64>,
) -> Result<Vec<E::Model>> {
    E::find()
        .filter(E::owner_column().eq(user_id))
        .order_by(order_by, direction)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists a user's records narrowed by an extra condition.
pub async fn list_for_user_where<E: OwnedEntity>(
    db: &DatabaseConnection,
    user_id: &str,
    condition: Condition,
    order_by: E::Column,
    direction: Order,
    limit: Option<u64>,
) -> Result<Vec<E::Model>> {
    E::find()
        .filter(E::owner_column().eq(user_id))
        .filter(condition)
        .order_by(order_by, direction)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Counts a user's records in a collection.
pub async fn count_for_user<E: OwnedEntity>(db: &DatabaseConnection, user_id: &str) -> Result<u64>
where
    E::Model: Send + Sync,
{
    E::find()
        .filter(E::owner_column().eq(user_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Counts a user's records matching an extra condition.
pub async fn count_for_user_where<E: OwnedEntity>(
    db: &DatabaseConnection,
    user_id: &str,
    condition: Condition,
) -> Result<u64>
where
    E::Model: Send + Sync,
{
    E::find()
        .filter(E::owner_column().eq(user_id))
        .filter(condition)
        .count(db)
        .await
        .map_err(Into::into)
}

/// Finds one of a user's records by ID. Records owned by other users are
/// invisible, not an error.
pub async fn find_owned<E: OwnedEntity>(
    db: &DatabaseConnection,
    user_id: &str,
    id: i64,
) -> Result<Option<E::Model>> {
    E::find()
        .filter(E::id_column().eq(id))
        .filter(E::owner_column().eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Like [`find_owned`], but a missing record is an error.
pub async fn fetch_owned<E: OwnedEntity>(
    db: &DatabaseConnection,
    user_id: &str,
    id: i64,
) -> Result<E::Model> {
    find_owned::<E>(db, user_id, id)
        .await?
        .ok_or(Error::NotFound {
            entity: E::record_name(),
            id,
        })
}

/// Deletes one of a user's records by ID.
pub async fn delete_owned<E: OwnedEntity>(
    db: &DatabaseConnection,
    user_id: &str,
    id: i64,
) -> Result<()> {
    let result = E::delete_many()
        .filter(E::id_column().eq(id))
        .filter(E::owner_column().eq(user_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: E::record_name(),
            id,
        });
    }
    Ok(())
}
