/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog loader and the UI layer.

use serde::Deserialize;

/// Represents a single movie in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    /// Display title, never empty once loaded
    pub title: String,
    /// Free-form running time (e.g., "120 min")
    #[serde(rename = "duration")]
    pub duration_text: String,
    /// Synopsis, may be empty
    pub summary: String,
    /// Name of the poster asset (e.g., "avengers.jpg" or just "avengers")
    #[serde(rename = "image_name")]
    pub image_reference: String,
    /// Score out of 10.0 (not clamped)
    pub rating: f64,
    /// Genre labels in file order
    pub categories: Vec<String>,
}

impl Movie {
    /// Rating formatted the way the list rows show it
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// Categories joined for a single-line label
    pub fn categories_label(&self) -> String {
        self.categories.join(" · ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie {
            title: "Arrival".to_string(),
            duration_text: "116 min".to_string(),
            summary: String::new(),
            image_reference: "arrival".to_string(),
            rating: 8.0,
            categories: vec!["Drama".to_string(), "Sci-Fi".to_string()],
        }
    }

    #[test]
    fn test_rating_label_keeps_one_decimal() {
        let mut movie = sample();
        assert_eq!(movie.rating_label(), "8.0");

        movie.rating = 7.25;
        assert_eq!(movie.rating_label(), "7.2");
    }

    #[test]
    fn test_categories_label() {
        let mut movie = sample();
        assert_eq!(movie.categories_label(), "Drama · Sci-Fi");

        movie.categories.clear();
        assert_eq!(movie.categories_label(), "");
    }
}
