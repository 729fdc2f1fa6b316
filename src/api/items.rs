use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::extract::JsonBody;
use super::AppState;
use crate::domain::{Item, NewItem};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<Value>,
    pub quantity: Option<i64>,
    pub expiration_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Body of a quantity update. Any integer, zero and negatives included, is
/// accepted.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.repo.list_items().await?;
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateItemRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let name = required_name(payload.name)?;

    let item = NewItem::new(name, payload.quantity, payload.expiration_date);
    let id = state.repo.create_item(&item).await?;
    tracing::debug!(id, name = %item.name, "item created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Missing ids are not an error: the response is the same whether or not a
/// row was removed.
pub async fn delete_item(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let removed = state.repo.delete_item(&id).await?;
    tracing::debug!(id = %id, removed, "delete item");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all_items(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let removed = state.repo.delete_all_items().await?;
    tracing::debug!(removed, "delete all items");
    Ok(StatusCode::NO_CONTENT)
}

/// An explicit `"quantity": null` is rejected like a missing field rather
/// than reaching the store, where the column is `NOT NULL`.
pub async fn update_item_quantity(
    Path(id): Path<String>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateQuantityRequest>,
) -> Result<Json<OkResponse>, AppError> {
    let quantity = payload
        .quantity
        .ok_or_else(|| AppError::BadRequest("quantity required".into()))?;

    let updated = state.repo.update_quantity(&id, quantity).await?;
    tracing::debug!(id = %id, quantity, updated, "update item quantity");

    Ok(Json(OkResponse { ok: true }))
}

/// `name` must be a non-empty string. Absent, `null`, `false`, `0` and `""`
/// all count as missing; any other non-string value is rejected outright.
fn required_name(name: Option<Value>) -> Result<String, AppError> {
    match name {
        Some(Value::String(name)) if !name.is_empty() => Ok(name),
        None | Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) => {
            Err(AppError::BadRequest("name required".into()))
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            Err(AppError::BadRequest("name required".into()))
        }
        Some(_) => Err(AppError::BadRequest("name must be a string".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rejection(name: Option<Value>) -> String {
        match required_name(name) {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_required_name_accepts_non_empty_string() {
        assert_eq!(required_name(Some(json!("Milk"))).unwrap(), "Milk");
    }

    #[test]
    fn test_required_name_falsy_values() {
        for value in [
            None,
            Some(json!(null)),
            Some(json!(false)),
            Some(json!(0)),
            Some(json!(0.0)),
            Some(json!("")),
        ] {
            assert_eq!(rejection(value), "name required");
        }
    }

    #[test]
    fn test_required_name_non_string_values() {
        for value in [json!(true), json!(5), json!(["Milk"]), json!({"en": "Milk"})] {
            assert_eq!(rejection(Some(value)), "name must be a string");
        }
    }
}
