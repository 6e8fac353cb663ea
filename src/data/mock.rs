//! Demo dataset the catalog is seeded from. Static and in-memory only.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Agency, Agent, Property, PropertyStatus, SubscriptionPlan, User, UserRole,
};
use crate::store::Catalog;

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_default()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

/// Builds the demo catalog. Derived relation lists are left empty here;
/// callers run [`Catalog::link`] once after seeding.
pub fn seed() -> Catalog {
    Catalog {
        properties: seed_properties(),
        agents: seed_agents(),
        agencies: seed_agencies(),
        users: seed_users(),
    }
}

fn seed_agencies() -> Vec<Agency> {
    vec![
        Agency {
            id: "1".into(),
            user_id: "101".into(),
            name: "Luxury Homes Real Estate".into(),
            logo: Some("https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=100".into()),
            website: Some("https://luxuryhomes.example.com".into()),
            facebook: Some("luxuryhomes".into()),
            instagram: Some("luxuryhomesrealestate".into()),
            location: "New York, NY".into(),
            address: "123 Fifth Avenue, New York, NY 10001".into(),
            subscription_plan: SubscriptionPlan::Premium,
            verified: true,
            agent_ids: Vec::new(),
            property_ids: Vec::new(),
            created_at: seed_date(2023, 1, 15),
        },
        Agency {
            id: "2".into(),
            user_id: "102".into(),
            name: "Urban Living Properties".into(),
            logo: Some("https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=100".into()),
            website: Some("https://urbanliving.example.com".into()),
            facebook: Some("urbanlivingproperties".into()),
            instagram: Some("urbanlivingre".into()),
            location: "Los Angeles, CA".into(),
            address: "456 Wilshire Blvd, Los Angeles, CA 90024".into(),
            subscription_plan: SubscriptionPlan::Standard,
            verified: true,
            agent_ids: Vec::new(),
            property_ids: Vec::new(),
            created_at: seed_date(2023, 2, 20),
        },
        Agency {
            id: "3".into(),
            user_id: "103".into(),
            name: "Coastal Realty Group".into(),
            logo: Some("https://images.unsplash.com/photo-1502005229762-cf1b2da7c5d6?q=80&w=100".into()),
            website: Some("https://coastalrealty.example.com".into()),
            facebook: Some("coastalrealtygroup".into()),
            instagram: Some("coastalrealty".into()),
            location: "Miami, FL".into(),
            address: "789 Ocean Drive, Miami, FL 33139".into(),
            subscription_plan: SubscriptionPlan::Basic,
            verified: true,
            agent_ids: Vec::new(),
            property_ids: Vec::new(),
            created_at: seed_date(2023, 3, 10),
        },
        Agency {
            id: "4".into(),
            user_id: "104".into(),
            name: "Metropolitan Properties".into(),
            logo: Some("https://images.unsplash.com/photo-1555980457-13dd21a13870?q=80&w=100".into()),
            website: Some("https://metropolitan.example.com".into()),
            facebook: Some("metropolitanproperties".into()),
            instagram: Some("metropolitan_re".into()),
            location: "Chicago, IL".into(),
            address: "321 Michigan Ave, Chicago, IL 60601".into(),
            subscription_plan: SubscriptionPlan::Premium,
            verified: true,
            agent_ids: Vec::new(),
            property_ids: Vec::new(),
            created_at: seed_date(2023, 4, 5),
        },
    ]
}

fn seed_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "1".into(),
            user_id: "201".into(),
            name: "Sarah Johnson".into(),
            email: "sarah@luxuryhomes.example.com".into(),
            phone: "+1 (212) 555-1234".into(),
            photo: Some("https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=100".into()),
            bio: Some("Specializing in luxury properties in Manhattan with over 10 years of experience.".into()),
            agency_id: Some("1".into()),
            property_ids: Vec::new(),
            verified: true,
            created_at: seed_date(2023, 1, 20),
        },
        Agent {
            id: "2".into(),
            user_id: "202".into(),
            name: "Michael Chen".into(),
            email: "michael@urbanliving.example.com".into(),
            phone: "+1 (323) 555-5678".into(),
            photo: Some("https://images.unsplash.com/photo-1566492031773-4f4e44671857?q=80&w=100".into()),
            bio: Some("Focused on urban lofts and condos throughout Los Angeles.".into()),
            agency_id: Some("2".into()),
            property_ids: Vec::new(),
            verified: true,
            created_at: seed_date(2023, 2, 25),
        },
        Agent {
            id: "3".into(),
            user_id: "203".into(),
            name: "Sophia Rodriguez".into(),
            email: "sophia@coastalrealty.example.com".into(),
            phone: "+1 (305) 555-9876".into(),
            photo: Some("https://images.unsplash.com/photo-1508214751196-bcfd4ca60f91?q=80&w=100".into()),
            bio: Some("Miami native with expertise in waterfront properties and vacation homes.".into()),
            agency_id: Some("3".into()),
            property_ids: Vec::new(),
            verified: true,
            created_at: seed_date(2023, 3, 15),
        },
        Agent {
            id: "4".into(),
            user_id: "204".into(),
            name: "David Williams".into(),
            email: "david@metropolitan.example.com".into(),
            phone: "+1 (312) 555-4321".into(),
            photo: Some("https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=100".into()),
            bio: Some("Commercial real estate specialist with a focus on downtown Chicago properties.".into()),
            agency_id: Some("4".into()),
            property_ids: Vec::new(),
            verified: true,
            created_at: seed_date(2023, 4, 10),
        },
    ]
}

fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".into(),
            title: "Luxury Penthouse with City Views".into(),
            description: "Stunning penthouse with panoramic views of the Manhattan skyline, featuring high-end finishes and a private roof terrace.".into(),
            price: 4_500_000.0,
            bedrooms: Some(3),
            bathrooms: Some(3.5),
            area: Some(2800.0),
            images: vec![
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=500".into(),
                "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?q=80&w=500".into(),
            ],
            address: "150 Central Park South".into(),
            city: "New York".into(),
            state: Some("NY".into()),
            country: "USA".into(),
            zip_code: Some("10019".into()),
            property_type: "Apartment".into(),
            status: PropertyStatus::Approved,
            featured: true,
            agent_id: Some("1".into()),
            agency_id: Some("1".into()),
            created_at: seed_date(2023, 1, 25),
        },
        Property {
            id: "2".into(),
            title: "Modern Loft in Downtown".into(),
            description: "Industrial-chic loft with exposed brick walls, high ceilings, and state-of-the-art appliances in the heart of downtown.".into(),
            price: 1_750_000.0,
            bedrooms: Some(2),
            bathrooms: Some(2.0),
            area: Some(1600.0),
            images: vec![
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=500".into(),
                "https://images.unsplash.com/photo-1600566752355-35792bedcfea?q=80&w=500".into(),
            ],
            address: "520 Broadway".into(),
            city: "Los Angeles".into(),
            state: Some("CA".into()),
            country: "USA".into(),
            zip_code: Some("90013".into()),
            property_type: "Loft".into(),
            status: PropertyStatus::Approved,
            featured: true,
            agent_id: Some("2".into()),
            agency_id: Some("2".into()),
            created_at: seed_date(2023, 3, 1),
        },
        Property {
            id: "3".into(),
            title: "Beachfront Villa with Private Pool".into(),
            description: "Exquisite beachfront villa offering direct access to the white sand beaches, with a private infinity pool and lush tropical gardens.".into(),
            price: 6_800_000.0,
            bedrooms: Some(5),
            bathrooms: Some(5.5),
            area: Some(4500.0),
            images: vec![
                "https://images.unsplash.com/photo-1600607687644-c7f34c52d337?q=80&w=500".into(),
                "https://images.unsplash.com/photo-1584738766473-61c083514bf4?q=80&w=500".into(),
            ],
            address: "2300 Collins Avenue".into(),
            city: "Miami".into(),
            state: Some("FL".into()),
            country: "USA".into(),
            zip_code: Some("33139".into()),
            property_type: "Villa".into(),
            status: PropertyStatus::Approved,
            featured: true,
            agent_id: Some("3".into()),
            agency_id: Some("3".into()),
            created_at: seed_date(2023, 3, 20),
        },
        Property {
            id: "4".into(),
            title: "High-Rise Condo in the Loop".into(),
            description: "Elegant high-rise condo featuring floor-to-ceiling windows with stunning views of Lake Michigan and Millennium Park.".into(),
            price: 2_200_000.0,
            bedrooms: Some(3),
            bathrooms: Some(2.0),
            area: Some(1800.0),
            images: vec![
                "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea?q=80&w=500".into(),
                "https://images.unsplash.com/photo-1598928506311-c55ded91a20c?q=80&w=500".into(),
            ],
            address: "400 E Randolph St".into(),
            city: "Chicago".into(),
            state: Some("IL".into()),
            country: "USA".into(),
            zip_code: Some("60601".into()),
            property_type: "Condo".into(),
            status: PropertyStatus::Approved,
            featured: false,
            agent_id: Some("4".into()),
            agency_id: Some("4".into()),
            created_at: seed_date(2023, 4, 15),
        },
        Property {
            id: "5".into(),
            title: "Classic Brownstone Townhouse".into(),
            description: "Historic brownstone townhouse with original details beautifully preserved, featuring a renovated kitchen and private garden.".into(),
            price: 3_750_000.0,
            bedrooms: Some(4),
            bathrooms: Some(3.5),
            area: Some(3200.0),
            images: vec![
                "https://images.unsplash.com/photo-1600585152220-90363fe7e115?q=80&w=500".into(),
                "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?q=80&w=500".into(),
            ],
            address: "25 W 88th St".into(),
            city: "New York".into(),
            state: Some("NY".into()),
            country: "USA".into(),
            zip_code: Some("10024".into()),
            property_type: "Townhouse".into(),
            status: PropertyStatus::Approved,
            featured: false,
            agent_id: Some("1".into()),
            agency_id: Some("1".into()),
            created_at: seed_date(2023, 5, 10),
        },
        Property {
            id: "6".into(),
            title: "Contemporary Hollywood Hills Home".into(),
            description: "Architectural masterpiece in the Hollywood Hills with sweeping views, an infinity pool, and a home theater.".into(),
            price: 8_500_000.0,
            bedrooms: Some(5),
            bathrooms: Some(6.0),
            area: Some(5200.0),
            images: vec![
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?q=80&w=500".into(),
                "https://images.unsplash.com/photo-1600585154526-990dced4db0d?q=80&w=500".into(),
            ],
            address: "1500 Blue Jay Way".into(),
            city: "Los Angeles".into(),
            state: Some("CA".into()),
            country: "USA".into(),
            zip_code: Some("90069".into()),
            property_type: "House".into(),
            status: PropertyStatus::Approved,
            featured: true,
            agent_id: Some("2".into()),
            agency_id: Some("2".into()),
            created_at: seed_date(2023, 5, 25),
        },
    ]
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            email: "admin@estatehub.example.com".into(),
            name: "Site Admin".into(),
            role: UserRole::Admin,
            created_at: seed_date(2023, 1, 1),
        },
        User {
            id: "101".into(),
            email: "contact@luxuryhomes.example.com".into(),
            name: "Luxury Homes Real Estate".into(),
            role: UserRole::Agency,
            created_at: seed_date(2023, 1, 15),
        },
        User {
            id: "102".into(),
            email: "contact@urbanliving.example.com".into(),
            name: "Urban Living Properties".into(),
            role: UserRole::Agency,
            created_at: seed_date(2023, 2, 20),
        },
        User {
            id: "103".into(),
            email: "contact@coastalrealty.example.com".into(),
            name: "Coastal Realty Group".into(),
            role: UserRole::Agency,
            created_at: seed_date(2023, 3, 10),
        },
        User {
            id: "104".into(),
            email: "contact@metropolitan.example.com".into(),
            name: "Metropolitan Properties".into(),
            role: UserRole::Agency,
            created_at: seed_date(2023, 4, 5),
        },
        User {
            id: "201".into(),
            email: "sarah@luxuryhomes.example.com".into(),
            name: "Sarah Johnson".into(),
            role: UserRole::Agent,
            created_at: seed_date(2023, 1, 20),
        },
        User {
            id: "202".into(),
            email: "michael@urbanliving.example.com".into(),
            name: "Michael Chen".into(),
            role: UserRole::Agent,
            created_at: seed_date(2023, 2, 25),
        },
        User {
            id: "203".into(),
            email: "sophia@coastalrealty.example.com".into(),
            name: "Sophia Rodriguez".into(),
            role: UserRole::Agent,
            created_at: seed_date(2023, 3, 15),
        },
        User {
            id: "204".into(),
            email: "david@metropolitan.example.com".into(),
            name: "David Williams".into(),
            role: UserRole::Agent,
            created_at: seed_date(2023, 4, 10),
        },
    ]
}
