//! View-models: what the UI shows for a card, the hero and the details overlay

use crate::models::CatalogItem;

pub const FAVORITE_ON: &str = "❤";
pub const FAVORITE_OFF: &str = "♡";

/// Which picture of an item to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Poster,
    Backdrop,
}

impl ImageKind {
    /// File name under the covers source
    pub fn file_name(&self, id: &str) -> String {
        match self {
            ImageKind::Poster => format!("{}.jpg", id),
            ImageKind::Backdrop => format!("{}-backdrop.jpg", id),
        }
    }

    /// Size of the generated placeholder
    pub fn placeholder_size(&self) -> [usize; 2] {
        match self {
            ImageKind::Poster => [300, 450],
            ImageKind::Backdrop => [1280, 720],
        }
    }
}

pub fn rating_badge(item: &CatalogItem) -> String {
    format!("★ {}", item.rating)
}

/// "2010 • 148 мин • Фантастика, Триллер • 16+"
pub fn format_meta(item: &CatalogItem) -> String {
    format!(
        "{} • {} мин • {} • {}",
        item.year,
        item.duration_minutes,
        item.genres.join(", "),
        item.age_rating
    )
}

pub fn favorite_glyph(is_favorite: bool) -> &'static str {
    if is_favorite {
        FAVORITE_ON
    } else {
        FAVORITE_OFF
    }
}

pub fn favorite_button_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Убрать из списка"
    } else {
        "В мой список"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: &'static str,
    pub title: &'static str,
    pub rating: String,
    pub favorite: &'static str,
}

impl CardView {
    pub fn new(item: &'static CatalogItem, is_favorite: bool) -> Self {
        Self {
            id: item.id,
            title: item.title,
            rating: rating_badge(item),
            favorite: favorite_glyph(is_favorite),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub meta: String,
}

impl HeroView {
    pub fn new(item: &'static CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            meta: format!("{} • {}", item.original_title, rating_badge(item)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub id: &'static str,
    pub title: &'static str,
    pub rating: String,
    pub meta: String,
    pub description: &'static str,
    pub favorite_label: &'static str,
}

impl DetailsView {
    pub fn new(item: &'static CatalogItem, is_favorite: bool) -> Self {
        Self {
            id: item.id,
            title: item.title,
            rating: rating_badge(item),
            meta: format_meta(item),
            description: item.description,
            favorite_label: favorite_button_label(is_favorite),
        }
    }
}

/// Project the filtered list into grid cards
pub fn cards(
    items: &[&'static CatalogItem],
    is_favorite: impl Fn(&str) -> bool,
) -> Vec<CardView> {
    items
        .iter()
        .map(|&item| CardView::new(item, is_favorite(item.id)))
        .collect()
}
