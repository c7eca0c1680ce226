use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::resource::OrderedResource;
use crate::shared::validation::ValidationError;

/// One entry of a bulk reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub order: i32,
}

/// `max + 1`, or 0 for an empty collection.
pub fn next_order(current_max: Option<i32>) -> i32 {
    current_max.map_or(0, |max| max + 1)
}

pub fn check_reorder(items: &[ReorderItem]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(ValidationError::single(
                "_id",
                format!("Duplicate id {} in reorder request", item.id),
            ));
        }
    }
    Ok(())
}

/// Assigns `order = position` and returns the matching reorder request.
pub fn resequence<R: OrderedResource>(items: &mut [R]) -> Vec<ReorderItem> {
    items
        .iter_mut()
        .enumerate()
        .map(|(position, item)| {
            let order = position as i32;
            item.set_order(order);
            ReorderItem {
                id: item.id(),
                order,
            }
        })
        .collect()
}

/// Accepts `3`, `"3"` or blank for an optional order; multipart forms send text.
pub fn deserialize_order<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawOrder {
        Number(i32),
        Text(String),
    }

    match Option::<RawOrder>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawOrder::Number(n)) => Ok(Some(n)),
        Some(RawOrder::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawOrder::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("order must be an integer, got {text}"))),
    }
}
