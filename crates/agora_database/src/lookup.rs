//! Result-set policy for exact-match lookups.

use agora_error::{AgoraResult, DatabaseError, DatabaseErrorKind};

/// Enforce the at-most-one contract on an exact-match result set.
///
/// Zero rows is simply "not found". More than one row means the storage
/// lost an assumed uniqueness property, which is surfaced as a hard
/// integrity failure rather than silently truncated.
pub(crate) fn at_most_one<T>(rows: Vec<T>, lookup: &str) -> AgoraResult<Option<T>> {
    if rows.len() > 1 {
        tracing::error!(lookup, rows = rows.len(), "Exact-match lookup returned multiple rows");
        return Err(DatabaseError::new(DatabaseErrorKind::Integrity {
            lookup: lookup.to_string(),
            rows: rows.len(),
        })
        .into());
    }
    Ok(rows.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::at_most_one;
    use agora_error::{AgoraError, DatabaseErrorKind};

    #[test]
    fn empty_result_set_is_none() {
        let result = at_most_one(Vec::<i32>::new(), "test lookup").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn single_row_passes_through() {
        let result = at_most_one(vec![7], "test lookup").unwrap();
        assert_eq!(result, Some(7));
    }

    #[test]
    fn two_rows_are_an_integrity_failure() {
        let err = at_most_one(vec![1, 2], "profile by email").unwrap_err();
        match err {
            AgoraError::Database(db) => match db.kind {
                DatabaseErrorKind::Integrity { lookup, rows } => {
                    assert_eq!(lookup, "profile by email");
                    assert_eq!(rows, 2);
                }
                other => panic!("expected integrity violation, got {other:?}"),
            },
            other => panic!("expected database error, got {other:?}"),
        }
    }
}
