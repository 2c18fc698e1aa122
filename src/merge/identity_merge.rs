//! Identity merge
//!
//! Imported categories replace existing ones with the same id and are
//! appended otherwise. Existing order is kept. Destructive: a replaced
//! category loses whatever it had that the import lacks.

use std::collections::HashMap;

use crate::domain::Category;
use super::stamp_missing;

pub fn identity_merge(existing: &[Category], imported: Vec<Category>, now: i64) -> Vec<Category> {
    let mut result = existing.to_vec();
    let mut index: HashMap<String, usize> = result
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.clone(), i))
        .collect();

    for mut category in imported {
        stamp_missing(&mut category, now);
        match index.get(&category.id) {
            Some(&i) => result[i] = category,
            None => {
                index.insert(category.id.clone(), result.len());
                result.push(category);
            }
        }
    }

    result
}
