#![allow(dead_code)]

use std::sync::Once;

use gig_core::Posting;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(gig_logging::initialize_for_tests);
}

pub fn posting(id: &str, profession: &str, employer: &str, salary: f64) -> Posting {
    Posting {
        id: id.to_string(),
        profession: profession.to_string(),
        employer: employer.to_string(),
        salary,
        posted_at: "2023-11-06T01:52:23Z".to_string(),
        logo_url: None,
        selected: None,
    }
}

/// A slice of the listing the production endpoint serves.
pub fn sample_postings() -> Vec<Posting> {
    let mut logo = posting("2", "Кассир", "Пятёрочка", 900.0);
    logo.logo_url = Some("https://i.imgur.com/x8DcFXl.png".to_string());
    let mut loader = posting("5", "Грузчик", "Пятёрочка", 1500.0);
    loader.logo_url = Some("https://i.imgur.com/x8DcFXl.png".to_string());
    let mut merch = posting("3", "Мерчендайзер", "Магнит", 800.0);
    merch.logo_url = Some("https://i.imgur.com/wIPhLsM.jpg".to_string());
    vec![
        posting("1", "Слесарь", "Наша Мебель", 500.0),
        logo,
        merch,
        posting("4", "iOS-разработчик", "MyGig", 111.11),
        loader,
    ]
}
