//! Sample posts shown until something has been saved

use chrono::NaiveDate;
use fanpage_core::types::{Post, PostId};

fn post(id: &str, title: &str, excerpt: &str, (y, m, d): (i32, u32, u32)) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

/// The seed sequence, in display order
pub fn seed_posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "Melancholy at Bar Sinister",
            "This Saturday see Melancholy at Bar Sinister. Bring your best black clothes.",
            (2025, 10, 17),
        ),
        post(
            "2",
            "Top Melancholy tracks to headbang to",
            "Curated upbeat tracks to thrash around to.",
            (2025, 8, 15),
        ),
        post(
            "3",
            "Album review: Eris",
            "A deep dive into the textures and motifs of the new release.",
            (2025, 9, 1),
        ),
    ]
}
