use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use eduadmin_core::pagination::{ListQuery, Pagination};

use crate::envelope::Payload;
use crate::error::ApiError;
use crate::http::ApiClient;

use super::require_id;

/// Keys under which list endpoints nest their rows when `data` is an object.
const LIST_KEYS: [&str; 3] = ["items", "docs", "results"];

/// CRUD service for one REST collection.
pub struct Resource<T> {
    client: ApiClient,
    path: &'static str,
    entity: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            path: self.path,
            entity: self.entity,
            _record: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Resource<T> {
    pub fn new(client: ApiClient, path: &'static str, entity: &'static str) -> Self {
        Self {
            client,
            path,
            entity,
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Human-readable entity name ("Course", "FAQ", ...).
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// `GET {path}?page&limit&search&...`
    pub async fn list(&self, query: &ListQuery) -> Result<Payload<Vec<T>>, ApiError> {
        let payload: Payload<Value> = self.client.get(self.path, &query.to_pairs()).await?;
        list_from_value(payload)
    }

    /// `GET {path}/{id}`
    pub async fn get(&self, id: &str) -> Result<Payload<T>, ApiError> {
        let id = require_id(self.entity, id)?;
        self.client.get(&self.item_path(id), &[]).await
    }

    /// `POST {path}`
    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<Payload<T>, ApiError> {
        tracing::debug!(entity = self.entity, "Creating record");
        self.client.post(self.path, body).await
    }

    /// `PUT {path}/{id}`
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<Payload<T>, ApiError> {
        let id = require_id(self.entity, id)?;
        tracing::debug!(entity = self.entity, id = %id, "Updating record");
        self.client.put(&self.item_path(id), body).await
    }

    /// `DELETE {path}/{id}`. The response data is ignored.
    pub async fn delete(&self, id: &str) -> Result<Payload<()>, ApiError> {
        let id = require_id(self.entity, id)?;
        tracing::info!(entity = self.entity, id = %id, "Deleting record");
        let payload: Payload<Value> = self.client.delete(&self.item_path(id)).await?;
        Ok(payload.map(|_| ()))
    }

    pub(crate) fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }
}

/// Decode list data that is either a bare array or an object wrapping the
/// rows (plus, sometimes, its own pagination). An object with no array field
/// is a decode error.
pub fn list_from_value<T: DeserializeOwned>(
    payload: Payload<Value>,
) -> Result<Payload<Vec<T>>, ApiError> {
    let Payload {
        data,
        message,
        pagination,
    } = payload;

    let (rows, nested_pagination) = match data {
        Value::Array(_) => (data, None),
        Value::Null => (Value::Array(Vec::new()), None),
        Value::Object(mut map) => {
            let nested_pagination = map
                .remove("pagination")
                .and_then(|p| serde_json::from_value::<Pagination>(p).ok());
            let key = LIST_KEYS
                .iter()
                .find(|k| map.get(**k).is_some_and(Value::is_array))
                .map(|k| k.to_string())
                .or_else(|| {
                    map.iter()
                        .find(|(_, v)| v.is_array())
                        .map(|(k, _)| k.clone())
                });
            match key.and_then(|k| map.remove(&k)) {
                Some(rows) => (rows, nested_pagination),
                None => (Value::Object(map), None),
            }
        }
        other => (other, None),
    };

    Ok(Payload {
        data: serde_json::from_value(rows)?,
        message,
        pagination: pagination.or(nested_pagination),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn payload(data: Value) -> Payload<Value> {
        Payload {
            data,
            message: None,
            pagination: None,
        }
    }

    #[test]
    fn bare_array() {
        let list: Payload<Vec<String>> = list_from_value(payload(json!(["a", "b"]))).unwrap();
        assert_eq!(list.data, vec!["a", "b"]);
    }

    #[test]
    fn wrapped_rows_with_nested_pagination() {
        let list: Payload<Vec<u32>> = list_from_value(payload(json!({
            "trainers": [1, 2, 3],
            "pagination": {"page": 2, "limit": 3, "total": 9, "totalPages": 3}
        })))
        .unwrap();
        assert_eq!(list.data, vec![1, 2, 3]);
        assert_eq!(list.pagination.unwrap().page, 2);
    }

    #[test]
    fn known_key_wins_over_other_arrays() {
        let list: Payload<Vec<u32>> = list_from_value(payload(json!({
            "aaa": [9],
            "items": [1]
        })))
        .unwrap();
        assert_eq!(list.data, vec![1]);
    }

    #[test]
    fn null_is_empty_list() {
        let list: Payload<Vec<u32>> = list_from_value(payload(Value::Null)).unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn object_without_rows_is_decode_error() {
        let result: Result<Payload<Vec<u32>>, _> =
            list_from_value(payload(json!({"month": 7, "total": 0})));
        assert_matches!(result, Err(ApiError::Decode(_)));
    }

    #[test]
    fn scalar_is_decode_error() {
        let result: Result<Payload<Vec<u32>>, _> = list_from_value(payload(json!("nope")));
        assert_matches!(result, Err(ApiError::Decode(_)));
    }
}
