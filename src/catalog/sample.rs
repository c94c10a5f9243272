//! Sample business records for development and tests.
//!
//! Five listings around Nutley, NJ, with one in Summit for queries that need
//! an out-of-town record.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{BusinessCategory, BusinessRecord, ContactInfo, GeoPoint, StreetAddress};

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    description: &str,
    category: BusinessCategory,
    subcategory: &str,
    street: &str,
    city: &str,
    postal_code: &str,
    position: GeoPoint,
    phone: &str,
    email: &str,
    rating: f64,
    review_count: u32,
    service_radius_miles: f64,
    tags: &[&str],
    created_at: DateTime<Utc>,
) -> BusinessRecord {
    let mut business = BusinessRecord::new(
        id,
        name,
        category,
        StreetAddress {
            address: street.to_string(),
            city: city.to_string(),
            state: "NJ".to_string(),
            postal_code: postal_code.to_string(),
            country: "US".to_string(),
        },
        position,
    );

    business.description = description.to_string();
    business.subcategory = Some(subcategory.to_string());
    business.contact = Some(ContactInfo {
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
        website: None,
    });
    business.rating = rating;
    business.review_count = review_count;
    business.service_radius_miles = service_radius_miles;
    business.verified = true;
    business.created_at = created_at;
    business.updated_at = day(2024, 12, 1);
    for tag in tags {
        business.add_tag(tag);
    }

    business
}

fn day(year: i32, month: u32, dom: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, dom, 0, 0, 0).unwrap()
}

/// The sample data set, in catalog order.
pub fn sample_businesses() -> Vec<BusinessRecord> {
    vec![
        record(
            "1",
            "Joe's Plumbing Services",
            "Professional plumbing services for residential and commercial properties.",
            BusinessCategory::HomeServices,
            "Plumbing",
            "123 Main St",
            "Nutley",
            "07110",
            GeoPoint::new(40.8126, -74.1526),
            "(973) 555-0123",
            "joe@joesplumbing.com",
            4.8,
            42,
            15.0,
            &["emergency service", "licensed", "insured"],
            day(2024, 1, 15),
        ),
        record(
            "2",
            "Maria's Catering",
            "Authentic Italian cuisine for your special events and gatherings.",
            BusinessCategory::FoodDining,
            "Catering",
            "456 Park Ave",
            "Nutley",
            "07110",
            GeoPoint::new(40.8156, -74.1496),
            "(973) 555-0124",
            "maria@mariascatering.com",
            4.9,
            67,
            25.0,
            &["italian cuisine", "wedding catering", "corporate events"],
            day(2024, 2, 20),
        ),
        record(
            "3",
            "Tech Repair Pro",
            "Computer and smartphone repair services. Same-day service available.",
            BusinessCategory::Technology,
            "Computer Repair",
            "789 Franklin Ave",
            "Nutley",
            "07110",
            GeoPoint::new(40.8096, -74.1556),
            "(973) 555-0125",
            "mike@techrepairpro.com",
            4.7,
            28,
            10.0,
            &["same-day service", "data recovery", "warranty"],
            day(2024, 3, 10),
        ),
        record(
            "4",
            "Bella's Beauty Salon",
            "Full-service hair salon and spa. Expert stylists and latest trends.",
            BusinessCategory::Beauty,
            "Hair Salon",
            "321 Washington Ave",
            "Nutley",
            "07110",
            GeoPoint::new(40.8136, -74.1506),
            "(973) 555-0126",
            "bella@bellasbeauty.com",
            4.6,
            35,
            8.0,
            &["color specialist", "bridal packages", "organic products"],
            day(2024, 4, 5),
        ),
        record(
            "5",
            "Summit Auto Repair",
            "Trusted auto repair shop serving the community for over 20 years.",
            BusinessCategory::Automotive,
            "Auto Repair",
            "567 Springfield Ave",
            "Summit",
            "07901",
            GeoPoint::new(40.7156, -74.3606),
            "(908) 555-0127",
            "bob@summitauto.com",
            4.5,
            89,
            20.0,
            &["ASE certified", "family owned", "towing service"],
            day(2024, 1, 8),
        ),
    ]
}
