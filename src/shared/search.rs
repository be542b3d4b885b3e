use sea_orm::sea_query::LikeExpr;

const LIKE_ESCAPE: char = '\\';

/// `%term%` with the LIKE wildcards inside `term` matched literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Substring match for `ILIKE`, carrying its own `ESCAPE` clause.
pub fn contains(term: &str) -> LikeExpr {
    LikeExpr::new(contains_pattern(term)).escape(LIKE_ESCAPE)
}
