#[cfg(test)]
mod catalog {
    use estatehub::data::mock;
    use estatehub::error::MarketError;
    use estatehub::models::PropertyStatus;
    use estatehub::store;

    #[test]
    fn seed_contains_the_demo_dataset() {
        let catalog = mock::seed();

        assert_eq!(catalog.properties.len(), 6);
        assert_eq!(catalog.agents.len(), 4);
        assert_eq!(catalog.agencies.len(), 4);
        assert!(!catalog.users.is_empty());
    }

    #[test]
    fn link_wires_derived_relation_lists() {
        let mut catalog = mock::seed();
        catalog.link();

        let sarah = store::agent::get(&catalog, "1").unwrap();
        assert_eq!(sarah.property_ids, vec!["1", "5"]);

        let luxury_homes = store::agency::get(&catalog, "1").unwrap();
        assert_eq!(luxury_homes.agent_ids, vec!["1"]);
        assert_eq!(luxury_homes.property_ids, vec!["1", "5"]);
    }

    #[test]
    fn link_is_a_recompute_not_an_append() {
        let mut catalog = mock::seed();
        catalog.link();
        catalog.link();

        let sarah = store::agent::get(&catalog, "1").unwrap();
        assert_eq!(sarah.property_ids, vec!["1", "5"]);
    }

    #[test]
    fn lookup_miss_is_not_found() {
        let catalog = mock::seed();

        let err = store::property::get(&catalog, "999").unwrap_err();
        assert!(matches!(err, MarketError::NotFound("property", _)));

        let err = store::agency::get(&catalog, "999").unwrap_err();
        assert!(matches!(err, MarketError::NotFound("agency", _)));
    }

    #[test]
    fn delete_removes_the_listing() {
        let mut catalog = mock::seed();

        store::property::delete(&mut catalog, "4").unwrap();

        assert_eq!(catalog.properties.len(), 5);
        assert!(store::property::get(&catalog, "4").is_err());
        assert!(store::property::delete(&mut catalog, "4").is_err());
    }

    #[test]
    fn set_status_moves_a_listing_through_moderation() {
        let mut catalog = mock::seed();

        store::property::set_status(&mut catalog, "1", PropertyStatus::Pending).unwrap();
        assert_eq!(store::property::pending(&catalog).len(), 1);

        store::property::set_status(&mut catalog, "1", PropertyStatus::Approved).unwrap();
        assert!(store::property::pending(&catalog).is_empty());
    }

    #[test]
    fn featured_returns_the_home_page_strip() {
        let catalog = mock::seed();

        let featured = store::property::featured(&catalog);
        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2", "3", "6"]);
    }

    #[test]
    fn per_agency_queries_follow_the_foreign_keys() {
        let catalog = mock::seed();

        assert_eq!(store::property::for_agency(&catalog, "2").len(), 2);
        assert_eq!(store::property::for_agent(&catalog, "3").len(), 1);
        assert_eq!(store::agent::for_agency(&catalog, "4").len(), 1);
    }

    #[test]
    fn verification_flag_can_be_toggled() {
        let mut catalog = mock::seed();

        store::agency::set_verified(&mut catalog, "1", false).unwrap();
        assert_eq!(store::agency::pending(&catalog).len(), 1);

        store::agency::set_verified(&mut catalog, "1", true).unwrap();
        assert!(store::agency::pending(&catalog).is_empty());
    }
}
