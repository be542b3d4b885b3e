use sea_orm::DbErr;

/// True when Postgres rejected a write because of a unique index (SQLSTATE 23505).
///
/// `hint` narrows the match to a column or index name so that unrelated
/// unique constraints are not reported as the one the caller cares about.
pub fn is_unique_violation(err: &DbErr, hint: &str) -> bool {
    let msg = err.to_string().to_lowercase();

    (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains(&hint.to_lowercase())
}
