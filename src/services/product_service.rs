use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set, Statement, TransactionTrait,
};

use crate::{
    dto::products::{CreateProductRequest, ReplaceProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

pub async fn find_all(state: &AppState) -> AppResult<Vec<Product>> {
    let products = Products::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(products)
}

pub async fn find_by_id(state: &AppState, id: i32) -> AppResult<Option<Product>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(product_from_entity);
    Ok(product)
}

pub async fn create(state: &AppState, payload: CreateProductRequest) -> AppResult<Product> {
    // The zero-price check applies on creation only; replace skips it.
    if payload.price == 0 {
        return Err(AppError::InvalidPrice);
    }

    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        price: Set(payload.price),
        purchase_cost: Set(payload.purchase_cost),
        created_at: NotSet,
    };
    let product = active.insert(&state.orm).await?;

    Ok(product_from_entity(product))
}

/// Full-record upsert keyed on id: inserts when the id is new, otherwise
/// overwrites the stored record in place.
pub async fn replace(state: &AppState, payload: ReplaceProductRequest) -> AppResult<()> {
    let active = ActiveModel {
        id: Set(payload.id),
        name: Set(payload.name),
        price: Set(payload.price),
        purchase_cost: Set(payload.purchase_cost),
        created_at: NotSet,
    };

    let txn = state.orm.begin().await?;

    Products::insert(active)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([Column::Name, Column::Price, Column::PurchaseCost])
                .to_owned(),
        )
        .exec(&txn)
        .await?;

    // The id comes from the caller here, bypassing the serial sequence. Keep
    // the sequence at the table maximum so create never hands out an id that
    // a replace already wrote.
    let backend = txn.get_database_backend();
    txn.execute(Statement::from_string(
        backend,
        "SELECT setval('products_id_seq', (SELECT GREATEST(MAX(id), 1) FROM products))",
    ))
    .await?;

    txn.commit().await?;

    Ok(())
}

pub async fn delete(state: &AppState, id: i32) -> AppResult<()> {
    // Deleting an id that was never stored is a silent no-op.
    Products::delete_by_id(id).exec(&state.orm).await?;
    Ok(())
}

pub async fn find_all_ordered_by_name(state: &AppState) -> AppResult<Vec<Product>> {
    let products = Products::find()
        .order_by_asc(Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(products)
}

pub async fn find_above_or_equal_price(
    state: &AppState,
    threshold: i64,
) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, purchase_cost, created_at FROM products WHERE price >= $1",
    )
    .bind(threshold)
    .fetch_all(&state.pool)
    .await?;
    Ok(products)
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
        purchase_cost: model.purchase_cost,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
