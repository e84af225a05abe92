use super::PostId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Title used when a post is created without one
pub const UNTITLED: &str = "Untitled";

/// A blog-style post shown on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Publication date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Post {
    /// Merge the present fields of `update` over this post
    pub fn apply(&mut self, update: UpdatePost) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(excerpt) = update.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
    }

    /// Case-insensitive match of an already lowercased needle against
    /// `title + " " + excerpt`
    pub fn matches(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        format!("{} {}", self.title, self.excerpt)
            .to_lowercase()
            .contains(needle_lower)
    }
}

/// Fields for a new post; every field falls back to a default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl CreatePost {
    /// Build the post, applying the title/excerpt/date defaults
    pub fn into_post(self, id: PostId, today: NaiveDate) -> Post {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());

        Post {
            id,
            title,
            excerpt: self.excerpt.unwrap_or_default(),
            date: self.date.unwrap_or(today),
        }
    }
}

/// Partial update of a post; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl UpdatePost {
    /// True when the update would change nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.excerpt.is_none() && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Post {
        Post {
            id: PostId::new("p1"),
            title: "Melancholy at Bar Sinister".to_string(),
            excerpt: "Bring your best black clothes.".to_string(),
            date: date(2025, 10, 17),
        }
    }

    #[test]
    fn apply_keeps_unspecified_fields() {
        let mut post = sample();
        post.apply(UpdatePost {
            title: Some("X".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "X");
        assert_eq!(post.excerpt, "Bring your best black clothes.");
        assert_eq!(post.date, date(2025, 10, 17));
    }

    #[test]
    fn create_defaults() {
        let post = CreatePost::default().into_post(PostId::new("p9"), date(2026, 1, 2));
        assert_eq!(post.title, UNTITLED);
        assert_eq!(post.excerpt, "");
        assert_eq!(post.date, date(2026, 1, 2));
    }

    #[test]
    fn create_blank_title_becomes_untitled() {
        let post = CreatePost {
            title: Some("   ".to_string()),
            ..Default::default()
        }
        .into_post(PostId::new("p9"), date(2026, 1, 2));
        assert_eq!(post.title, UNTITLED);
    }

    #[test]
    fn matches_title_and_excerpt() {
        let post = sample();
        assert!(post.matches("bar sinister"));
        assert!(post.matches("black clothes"));
        assert!(post.matches(""));
        assert!(!post.matches("eris"));
    }

    #[test]
    fn date_serializes_as_iso_day() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2025-10-17");
    }
}
