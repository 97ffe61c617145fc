//! Data models for Kinoflow

use std::collections::BTreeSet;

pub const YEAR_LOWER_BOUND: i32 = 1950;
pub const YEAR_UPPER_BOUND: i32 = 2030;
pub const DEFAULT_YEAR_MIN: i32 = 1990;
pub const DEFAULT_YEAR_MAX: i32 = 2025;

/// A single catalog entry (movie or show)
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: &'static str,
    pub title: &'static str,
    pub original_title: &'static str,
    pub year: i32,
    pub duration_minutes: u32,
    pub rating: f64,
    pub genres: &'static [&'static str],
    pub trend_score: i32,
    pub age_rating: &'static str,
    pub description: &'static str,
}

impl CatalogItem {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| *g == genre)
    }
}

/// Grid ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Trending,
    Rating,
    Year,
    Title,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Trending,
        SortMode::Rating,
        SortMode::Year,
        SortMode::Title,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Trending => "В тренде",
            SortMode::Rating => "По рейтингу",
            SortMode::Year => "По году",
            SortMode::Title => "По названию",
        }
    }
}

/// Navigation section in the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavSection {
    #[default]
    Home,
    Movies,
    Series,
    MyList,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Home,
        NavSection::Movies,
        NavSection::Series,
        NavSection::MyList,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Home => "Главная",
            NavSection::Movies => "Фильмы",
            NavSection::Series => "Сериалы",
            NavSection::MyList => "Мой список",
        }
    }
}

/// Color theme, persisted as "light" / "dark"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Anything other than "light" is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Current filter/sort/navigation state of the catalog view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub sort: SortMode,
    pub year_min: i32,
    pub year_max: i32,
    pub genres: BTreeSet<String>,
    pub nav: NavSection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortMode::Trending,
            year_min: DEFAULT_YEAR_MIN,
            year_max: DEFAULT_YEAR_MAX,
            genres: BTreeSet::new(),
            nav: NavSection::Home,
        }
    }
}

impl ViewState {
    pub fn set_year_min(&mut self, year: i32) {
        self.year_min = clamp_year(year);
    }

    pub fn set_year_max(&mut self, year: i32) {
        self.year_max = clamp_year(year);
    }

    /// Apply raw text from the "from" year field
    pub fn set_year_min_input(&mut self, input: &str) {
        self.set_year_min(parse_year_input(input, DEFAULT_YEAR_MIN));
    }

    /// Apply raw text from the "to" year field
    pub fn set_year_max_input(&mut self, input: &str) {
        self.set_year_max(parse_year_input(input, DEFAULT_YEAR_MAX));
    }

    /// Select or deselect a genre chip. Returns true when the genre is now selected.
    pub fn toggle_genre(&mut self, genre: &str) -> bool {
        if self.genres.remove(genre) {
            false
        } else {
            self.genres.insert(genre.to_string());
            true
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn clamp_year(year: i32) -> i32 {
    year.clamp(YEAR_LOWER_BOUND, YEAR_UPPER_BOUND)
}

/// Parse the leading integer of a year field.
///
/// Whitespace around the value is ignored, as is anything after the digits
/// ("2001г" reads as 2001). Empty or non-numeric input yields `default`.
pub fn parse_year_input(input: &str, default: i32) -> i32 {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return default;
    }

    // Saturate on absurdly long input; clamping brings it back into range anyway
    let value = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -value } else { value };
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_input() {
        assert_eq!(parse_year_input("2001", 1990), 2001);
        assert_eq!(parse_year_input("  1999 ", 1990), 1999);
        assert_eq!(parse_year_input("2001г", 1990), 2001);
        assert_eq!(parse_year_input("", 1990), 1990);
        assert_eq!(parse_year_input("abc", 2025), 2025);
        assert_eq!(parse_year_input("-5", 1990), -5);
        assert_eq!(parse_year_input("+", 1990), 1990);
    }

    #[test]
    fn test_year_inputs_are_clamped() {
        let mut state = ViewState::default();
        state.set_year_min_input("1800");
        state.set_year_max_input("99999999999999999999");
        assert_eq!(state.year_min, YEAR_LOWER_BOUND);
        assert_eq!(state.year_max, YEAR_UPPER_BOUND);

        state.set_year_min_input("not a year");
        state.set_year_max_input("");
        assert_eq!(state.year_min, DEFAULT_YEAR_MIN);
        assert_eq!(state.year_max, DEFAULT_YEAR_MAX);
    }

    #[test]
    fn test_year_bounds_clamp_independently() {
        let mut state = ViewState::default();
        state.set_year_min(2100);
        assert_eq!(state.year_min, YEAR_UPPER_BOUND);
        assert_eq!(state.year_max, DEFAULT_YEAR_MAX);
    }

    #[test]
    fn test_toggle_genre() {
        let mut state = ViewState::default();
        assert!(state.toggle_genre("Драма"));
        assert!(state.genres.contains("Драма"));
        assert!(!state.toggle_genre("Драма"));
        assert!(state.genres.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = ViewState::default();
        state.query = "дюна".to_string();
        state.sort = SortMode::Title;
        state.set_year_min(1950);
        state.set_year_max(2000);
        state.toggle_genre("Фэнтези");
        state.toggle_genre("Боевик");
        state.nav = NavSection::MyList;

        state.reset();

        assert_eq!(state, ViewState::default());
        assert_eq!(state.query, "");
        assert_eq!(state.sort, SortMode::Trending);
        assert_eq!(state.year_min, 1990);
        assert_eq!(state.year_max, 2025);
        assert!(state.genres.is_empty());
        assert_eq!(state.nav, NavSection::Home);
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }
}
