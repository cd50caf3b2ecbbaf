//! Memo CRUD endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use memo_core::{Memo, MemoInput};

use crate::envelope::{data, Envelope};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Parse a path id. Anything that is not an integer is a client error; a
/// negative id is well formed and simply matches no memo.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::invalid_id())
}

fn parse_body(body: Result<Json<MemoInput>, JsonRejection>) -> ApiResult<MemoInput> {
    body.map(|Json(input)| input)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

/// List memos.
/// GET /memos
pub async fn list_memos(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Memo>>>> {
    let memos = state
        .store()
        .list_all()
        .await
        .map_err(|e| state.store_error(e))?;

    Ok(data(memos))
}

/// Get a specific memo by ID.
/// GET /memos/:id
pub async fn get_memo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Envelope<Memo>>> {
    let id = parse_id(&raw_id)?;

    let memo = state
        .store()
        .get_by_id(id)
        .await
        .map_err(|e| state.store_error(e))?;

    Ok(data(memo))
}

/// Create a memo.
/// POST /memos
pub async fn create_memo(
    State(state): State<AppState>,
    body: Result<Json<MemoInput>, JsonRejection>,
) -> ApiResult<Json<Envelope<Memo>>> {
    let input = parse_body(body)?;

    let memo = state
        .store()
        .create(&input.content)
        .await
        .map_err(|e| state.store_error(e))?;

    Ok(data(memo))
}

/// Replace a memo's content.
/// PUT /memos/:id
pub async fn update_memo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<MemoInput>, JsonRejection>,
) -> ApiResult<Json<Envelope<Memo>>> {
    let id = parse_id(&raw_id)?;
    let input = parse_body(body)?;

    let memo = state
        .store()
        .update_content(id, &input.content)
        .await
        .map_err(|e| state.store_error(e))?;

    Ok(data(memo))
}

/// Soft-delete a memo.
/// DELETE /memos/:id
pub async fn delete_memo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Envelope<bool>>> {
    let id = parse_id(&raw_id)?;

    state
        .store()
        .delete_by_id(id)
        .await
        .map_err(|e| state.store_error(e))?;

    Ok(data(true))
}
