//! List Filter
//!
//! Case-insensitive substring match over each record's searchable fields.
//! Lists are small, so every query change rescans the whole list.

use dash_common::Searchable;

/// Trimmed, lowercased query, or `None` when it matches everything.
fn needle(query: &str) -> Option<String> {
    let q = query.trim();
    (!q.is_empty()).then(|| q.to_lowercase())
}

fn is_match<T: Searchable>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Indices of the records matching `query`, in list order.
pub fn filter_indices<T: Searchable>(records: &[T], query: &str) -> Vec<usize> {
    match needle(query) {
        None => (0..records.len()).collect(),
        Some(needle) => records
            .iter()
            .enumerate()
            .filter(|(_, r)| is_match(*r, &needle))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Records matching `query`, in list order. An empty or whitespace-only query
/// returns every record.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    filter_indices(records, query)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use dash_common::{Match, Timestamps, User, UserStatus};

    use super::*;

    fn users() -> Vec<User> {
        vec![
            User::new("u1", "Sarah Johnson", "sarah@email.com", UserStatus::Active),
            User::new("u2", "Michael Chen", "michael@email.com", UserStatus::Active),
            User::new("u3", "Emily Davis", "emily@email.com", UserStatus::Inactive),
        ]
    }

    #[test]
    fn test_sarah_matches_only_sarah() {
        let list = users();
        let found = filter(&list, "sarah");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name, "Sarah Johnson");
    }

    #[test]
    fn test_case_insensitive_on_both_sides() {
        let list = users();
        assert_eq!(filter(&list, "CHEN").len(), 1);
        assert_eq!(filter(&list, "  Emily@ ").len(), 1);
    }

    #[test]
    fn test_matches_email_field() {
        let list = users();
        let found = filter(&list, "michael@");
        assert_eq!(found[0].id, "u2");
    }

    #[test]
    fn test_blank_query_returns_list_unchanged() {
        let list = users();
        for q in ["", "   ", "\t\n"] {
            let found: Vec<User> = filter(&list, q).into_iter().cloned().collect();
            assert_eq!(found, list);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let list = users();
        for q in ["", "e", "email.com", "son", "zzz", "A"] {
            let once: Vec<User> = filter(&list, q).into_iter().cloned().collect();
            let twice: Vec<User> = filter(&once, q).into_iter().cloned().collect();
            assert_eq!(once, twice, "query {q:?}");
        }
    }

    #[test]
    fn test_matches_search_both_participants() {
        let list = vec![Match {
            id: "m1".into(),
            full_name1: "Sarah Johnson".into(),
            avatar1: None,
            full_name2: "David Lee".into(),
            avatar2: None,
            timestamps: Timestamps::default(),
        }];
        assert_eq!(filter(&list, "david").len(), 1);
        assert_eq!(filter(&list, "sarah").len(), 1);
        assert!(filter(&list, "michael").is_empty());
    }
}
