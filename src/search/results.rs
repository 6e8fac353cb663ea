use crate::models::{Agency, Property};

use super::filters::{term_matches, SearchFilters};
use super::query::SearchQuery;

/// Applies the predicate across the full collection. Output keeps the
/// stable input order; filtering never re-sorts or paginates.
pub fn filter_properties<'a>(
    properties: &'a [Property],
    term: &str,
    filters: &SearchFilters,
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| term_matches(term, &p.title) && filters.matches_property(p))
        .collect()
}

pub fn filter_agencies<'a>(
    agencies: &'a [Agency],
    term: &str,
    filters: &SearchFilters,
) -> Vec<&'a Agency> {
    agencies
        .iter()
        .filter(|a| term_matches(term, &a.name) && filters.matches_agency(a))
        .collect()
}

pub fn run_property_query<'a>(
    properties: &'a [Property],
    query: &SearchQuery,
) -> Vec<&'a Property> {
    filter_properties(properties, query.term(), query.filters())
}

pub fn run_agency_query<'a>(agencies: &'a [Agency], query: &SearchQuery) -> Vec<&'a Agency> {
    filter_agencies(agencies, query.term(), query.filters())
}
