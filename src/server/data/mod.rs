//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod achievement;
pub mod admin_profile;
pub mod alumni_profile;
pub mod donation;
pub mod event;
pub mod event_registration;
pub mod job;
pub mod job_application;
pub mod mentorship;
pub mod user;

use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

const LIKE_ESCAPE: char = '\\';

/// Substring match on a text column that treats `%`, `_` and `\` in the term literally.
///
/// Matching uses SQLite's `LIKE`, which ignores case for ASCII letters only.
pub(crate) fn contains_literal<C: ColumnTrait>(column: C, term: &str) -> Expr {
    column.like(LikeExpr::new(format!("%{}%", escape_like(term))).escape(LIKE_ESCAPE))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Counts rows per foreign key value for the given IDs.
///
/// Selects only the foreign key column and tallies the values, so one query serves a
/// whole page of parents.
pub(crate) async fn count_by_foreign_key<E, C>(
    db: &DatabaseConnection,
    column: C,
    ids: &[i32],
) -> Result<HashMap<i32, u64>, DbErr>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    let mut counts = HashMap::new();
    if ids.is_empty() {
        return Ok(counts);
    }

    let keys: Vec<i32> = E::find()
        .select_only()
        .column(column)
        .filter(column.is_in(ids.to_vec()))
        .into_tuple()
        .all(db)
        .await?;

    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Loads user names for the given IDs.
pub(crate) async fn user_names(
    db: &DatabaseConnection,
    ids: &[i32],
) -> Result<HashMap<i32, String>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let users = entity::prelude::User::find()
        .filter(entity::user::Column::Id.is_in(ids.to_vec()))
        .all(db)
        .await?;

    Ok(users.into_iter().map(|u| (u.id, u.name)).collect())
}

#[cfg(test)]
mod test;
