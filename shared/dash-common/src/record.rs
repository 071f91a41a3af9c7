//! Record Traits
//!
//! Keys and search fields shared by every list the admin views hold.

/// A record addressable by a backend identifier.
pub trait Record: Clone {
    /// Backend identifier of the record.
    fn id(&self) -> &str;
}

/// A record that can be matched by the free-text list filter.
pub trait Searchable {
    /// Fields matched against the query, in display order.
    fn search_fields(&self) -> Vec<&str>;
}
