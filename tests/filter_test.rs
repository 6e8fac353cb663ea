#[cfg(test)]
mod filter_engine {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;

    use estatehub::models::{Agency, Property, PropertyStatus, SubscriptionPlan};
    use estatehub::search::results::{run_agency_query, run_property_query};
    use estatehub::search::{filter_agencies, filter_properties, SearchFilters, SearchQuery, Selection};

    fn property(id: &str, title: &str, price: f64) -> Property {
        Property {
            id: id.to_string(),
            title: title.to_string(),
            description: "A perfectly ordinary listing used in tests.".to_string(),
            price,
            bedrooms: Some(2),
            bathrooms: Some(1.0),
            area: Some(900.0),
            images: Vec::new(),
            address: "1 Test St".to_string(),
            city: "New York".to_string(),
            state: Some("NY".to_string()),
            country: "USA".to_string(),
            zip_code: None,
            property_type: "Apartment".to_string(),
            status: PropertyStatus::Approved,
            featured: false,
            agent_id: None,
            agency_id: None,
            created_at: Utc::now(),
        }
    }

    fn agency(id: &str, name: &str, location: &str, plan: SubscriptionPlan) -> Agency {
        Agency {
            id: id.to_string(),
            user_id: format!("u-{id}"),
            name: name.to_string(),
            logo: None,
            website: None,
            facebook: None,
            instagram: None,
            location: location.to_string(),
            address: "1 Test Ave".to_string(),
            subscription_plan: plan,
            verified: true,
            agent_ids: Vec::new(),
            property_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn ids(result: &[&Property]) -> Vec<String> {
        result.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn empty_filters_return_input_unchanged_in_order() {
        let properties = vec![
            property("1", "First", 100.0),
            property("2", "Second", 200.0),
            property("3", "Third", 300.0),
        ];
        let filters = SearchFilters::default();
        assert!(filters.is_empty());

        let result = filter_properties(&properties, "", &filters);

        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let properties = vec![
            property("1", "Loft A", 100_000.0),
            property("2", "Villa B", 900_000.0),
        ];
        let mut filters = SearchFilters::default();
        filters.max_price = Some(500_000.0);

        let first = ids(&filter_properties(&properties, "", &filters));
        let second = ids(&filter_properties(&properties, "", &filters));

        assert_eq!(first, second);
        assert_eq!(first, vec!["1"]);
    }

    #[test]
    fn all_defined_fields_must_pass() {
        let mut matching = property("1", "Downtown Loft", 400_000.0);
        matching.city = "Los Angeles".to_string();
        matching.property_type = "Loft".to_string();

        let mut wrong_city = matching.clone();
        wrong_city.id = "2".to_string();
        wrong_city.city = "Chicago".to_string();

        let mut too_expensive = matching.clone();
        too_expensive.id = "3".to_string();
        too_expensive.price = 2_000_000.0;

        let properties = vec![matching, wrong_city, too_expensive];

        let mut filters = SearchFilters::default();
        filters.location = Some(Selection::One("los angeles".to_string()));
        filters.property_type = Some(Selection::One("loft".to_string()));
        filters.max_price = Some(1_000_000.0);

        let result = filter_properties(&properties, "", &filters);

        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let properties = vec![property("1", "Exact", 250_000.0)];

        let mut filters = SearchFilters::default();
        filters.min_price = Some(250_000.0);
        assert_eq!(filter_properties(&properties, "", &filters).len(), 1);

        let mut filters = SearchFilters::default();
        filters.max_price = Some(250_000.0);
        assert_eq!(filter_properties(&properties, "", &filters).len(), 1);
    }

    #[test]
    fn price_range_scenario() {
        let properties = vec![
            property("1", "Cheap", 100_000.0),
            property("2", "Middle", 300_000.0),
            property("3", "Expensive", 1_000_000.0),
        ];

        let mut filters = SearchFilters::default();
        filters.min_price = Some(100_000.0);
        filters.max_price = Some(500_000.0);

        let result = filter_properties(&properties, "", &filters);

        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn term_matches_title_case_insensitively() {
        let properties = vec![
            property("1", "Modern Loft in Downtown", 100.0),
            property("2", "Luxury Penthouse", 200.0),
        ];
        let filters = SearchFilters::default();

        let lower = filter_properties(&properties, "loft", &filters);
        assert_eq!(ids(&lower), vec!["1"]);

        let upper = filter_properties(&properties, "LOFT", &filters);
        assert_eq!(ids(&upper), vec!["1"]);
    }

    #[test]
    fn term_does_not_match_description() {
        let mut p = property("1", "Luxury Penthouse", 100.0);
        p.description = "A loft-style space.".to_string();

        let properties = [p];
        let result = filter_properties(&properties, "loft", &SearchFilters::default());

        assert!(result.is_empty());
    }

    #[test]
    fn min_bedrooms_excludes_unknown_counts() {
        let mut unknown = property("1", "Mystery", 100.0);
        unknown.bedrooms = None;
        let mut small = property("2", "Small", 100.0);
        small.bedrooms = Some(2);
        let mut big = property("3", "Big", 100.0);
        big.bedrooms = Some(3);

        let mut filters = SearchFilters::default();
        filters.min_bedrooms = Some(3);

        let properties = [unknown, small, big];
        let result = filter_properties(&properties, "", &filters);

        assert_eq!(ids(&result), vec!["3"]);
    }

    #[test]
    fn min_bathrooms_excludes_unknown_counts() {
        let mut unknown = property("1", "Mystery", 100.0);
        unknown.bathrooms = None;
        let mut enough = property("2", "Roomy", 100.0);
        enough.bathrooms = Some(2.5);

        let mut filters = SearchFilters::default();
        filters.min_bathrooms = Some(2.0);

        let properties = [unknown, enough];
        let result = filter_properties(&properties, "", &filters);

        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn featured_false_is_no_constraint() {
        let mut featured = property("1", "Starred", 100.0);
        featured.featured = true;
        let plain = property("2", "Plain", 100.0);
        let properties = vec![featured, plain];

        let filters = SearchFilters::default();
        assert_eq!(filter_properties(&properties, "", &filters).len(), 2);

        let mut filters = SearchFilters::default();
        filters.featured = true;
        assert_eq!(ids(&filter_properties(&properties, "", &filters)), vec!["1"]);
    }

    #[test]
    fn status_filter_is_exact() {
        let mut sold = property("1", "Gone", 100.0);
        sold.status = PropertyStatus::Sold;
        let listed = property("2", "Available", 100.0);

        let mut filters = SearchFilters::default();
        filters.status = Some(PropertyStatus::Sold);

        let properties = [sold, listed];
        let result = filter_properties(&properties, "", &filters);

        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn multi_select_matches_membership() {
        let mut ny = property("1", "NY", 100.0);
        ny.city = "New York".to_string();
        let mut miami = property("2", "MIA", 100.0);
        miami.city = "Miami".to_string();
        let mut chicago = property("3", "CHI", 100.0);
        chicago.city = "Chicago".to_string();

        let mut filters = SearchFilters::default();
        filters.location = Some(Selection::AnyOf(vec![
            "new york".to_string(),
            "miami".to_string(),
        ]));

        let properties = [ny, miami, chicago];
        let result = filter_properties(&properties, "", &filters);

        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn empty_multi_select_imposes_no_constraint() {
        let properties = vec![property("1", "Anything", 100.0)];

        let mut filters = SearchFilters::default();
        filters.location = Some(Selection::AnyOf(Vec::new()));

        assert_eq!(filter_properties(&properties, "", &filters).len(), 1);
    }

    #[test]
    fn agencies_filter_on_term_location_and_plan() {
        let agencies = vec![
            agency("1", "Luxury Homes", "New York, NY", SubscriptionPlan::Premium),
            agency("2", "Urban Living", "Los Angeles, CA", SubscriptionPlan::Standard),
            agency("3", "Coastal Realty", "Miami, FL", SubscriptionPlan::Premium),
        ];

        let mut filters = SearchFilters::default();
        filters.subscription_plan = Some(SubscriptionPlan::Premium);

        let premium = filter_agencies(&agencies, "", &filters);
        assert_eq!(premium.len(), 2);

        let named = filter_agencies(&agencies, "coastal", &filters);
        assert_eq!(named.len(), 1);
        assert_eq!(named[0].id, "3");

        let mut filters = SearchFilters::default();
        filters.location = Some(Selection::One("new york, ny".to_string()));
        let located = filter_agencies(&agencies, "", &filters);
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].id, "1");
    }

    #[test]
    fn property_only_fields_do_not_constrain_agencies() {
        let agencies = vec![agency("1", "Anywhere Realty", "Austin", SubscriptionPlan::Basic)];

        let mut filters = SearchFilters::default();
        filters.min_bedrooms = Some(4);
        filters.status = Some(PropertyStatus::Sold);
        filters.featured = true;

        assert_eq!(filter_agencies(&agencies, "", &filters).len(), 1);
    }

    #[test]
    fn active_count_skips_unset_and_false_fields() {
        let mut filters = SearchFilters::default();
        assert_eq!(filters.active_count(), 0);

        filters.location = Some(Selection::One("Miami".to_string()));
        filters.min_price = Some(100.0);
        filters.featured = false;
        assert_eq!(filters.active_count(), 2);

        filters.featured = true;
        assert_eq!(filters.active_count(), 3);
    }

    #[test]
    fn clearing_filters_keeps_the_search_term() {
        let mut query = SearchQuery::new();
        query.set_term("loft");
        let mut filters = SearchFilters::default();
        filters.min_price = Some(100.0);
        query.set_filters(filters);
        assert_eq!(query.active_filters_count(), 1);

        query.clear_filters();

        assert_eq!(query.active_filters_count(), 0);
        assert!(query.filters().is_empty());
        assert_eq!(query.term(), "loft");
    }

    #[test]
    fn every_change_bumps_the_generation() {
        let mut query = SearchQuery::new();
        let start = query.generation();

        query.set_term("villa");
        query.set_filters(SearchFilters::default());
        query.clear_filters();

        assert_eq!(query.generation(), start + 3);
    }

    #[test]
    fn change_hook_fires_on_every_change() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();

        let mut query = SearchQuery::new();
        query.set_on_change(Box::new(move |q| {
            sink.lock()
                .unwrap()
                .push((q.generation(), q.active_filters_count()));
        }));

        query.set_term("villa");
        let mut filters = SearchFilters::default();
        filters.featured = true;
        query.set_filters(filters);
        query.clear_filters();

        // The hook observes the state after each change has applied.
        assert_eq!(*log.lock().unwrap(), vec![(1, 0), (2, 1), (3, 0)]);
    }

    #[test]
    fn queries_drive_both_materializers() {
        let properties = vec![
            property("1", "Modern Loft in Downtown", 400_000.0),
            property("2", "Luxury Penthouse", 900_000.0),
        ];
        let agencies = vec![
            agency("1", "Luxury Homes", "New York, NY", SubscriptionPlan::Premium),
            agency("2", "Urban Living", "Los Angeles, CA", SubscriptionPlan::Standard),
        ];

        let mut query = SearchQuery::new();
        query.set_term("luxury");

        assert_eq!(ids(&run_property_query(&properties, &query)), vec!["2"]);

        let agency_hits = run_agency_query(&agencies, &query);
        assert_eq!(agency_hits.len(), 1);
        assert_eq!(agency_hits[0].id, "1");
    }
}
