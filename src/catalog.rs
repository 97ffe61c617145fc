//! Built-in catalog: seed data, genre index and ordering helpers

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::CatalogItem;

/// Number of items shown in the trending strip
pub const TRENDING_COUNT: usize = 10;

static MOVIES: &[CatalogItem] = &[
    CatalogItem {
        id: "inception",
        title: "Начало",
        original_title: "Inception",
        year: 2010,
        duration_minutes: 148,
        rating: 8.8,
        genres: &["Фантастика", "Триллер"],
        trend_score: 94,
        age_rating: "16+",
        description: "Вор, который проникает в подсознание, получает шанс очистить имя, внедрив идею в чужой мозг.",
    },
    CatalogItem {
        id: "interstellar",
        title: "Интерстеллар",
        original_title: "Interstellar",
        year: 2014,
        duration_minutes: 169,
        rating: 8.6,
        genres: &["Фантастика", "Драма"],
        trend_score: 91,
        age_rating: "12+",
        description: "Команда исследователей отправляется за пределы галактики в поисках нового дома для человечества.",
    },
    CatalogItem {
        id: "matrix",
        title: "Матрица",
        original_title: "The Matrix",
        year: 1999,
        duration_minutes: 136,
        rating: 8.7,
        genres: &["Фантастика", "Боевик"],
        trend_score: 86,
        age_rating: "16+",
        description: "Хакер Нео узнаёт истину о мире и вступает в борьбу против машин.",
    },
    CatalogItem {
        id: "mad-max-fury-road",
        title: "Безумный Макс: Дорога ярости",
        original_title: "Mad Max: Fury Road",
        year: 2015,
        duration_minutes: 120,
        rating: 8.1,
        genres: &["Боевик", "Приключения"],
        trend_score: 84,
        age_rating: "16+",
        description: "В пустоши Макс и Фуриоса спасают людей, бросая вызов тирану.",
    },
    CatalogItem {
        id: "john-wick",
        title: "Джон Уик",
        original_title: "John Wick",
        year: 2014,
        duration_minutes: 101,
        rating: 7.4,
        genres: &["Боевик", "Триллер"],
        trend_score: 78,
        age_rating: "18+",
        description: "Бывший наёмный убийца возвращается в бизнес после трагедии.",
    },
    CatalogItem {
        id: "parasite",
        title: "Паразиты",
        original_title: "Parasite",
        year: 2019,
        duration_minutes: 132,
        rating: 8.5,
        genres: &["Драма", "Триллер"],
        trend_score: 83,
        age_rating: "18+",
        description: "Семья бедняков внедряется в дом богачей, что приводит к непредсказуемым последствиям.",
    },
    CatalogItem {
        id: "spirited-away",
        title: "Унесённые призраками",
        original_title: "Spirited Away",
        year: 2001,
        duration_minutes: 125,
        rating: 8.6,
        genres: &["Анимация", "Фэнтези"],
        trend_score: 75,
        age_rating: "6+",
        description: "Девочка попадает в загадочный мир духов и ищет путь домой.",
    },
    CatalogItem {
        id: "the-dark-knight",
        title: "Тёмный рыцарь",
        original_title: "The Dark Knight",
        year: 2008,
        duration_minutes: 152,
        rating: 9.0,
        genres: &["Боевик", "Криминал"],
        trend_score: 92,
        age_rating: "16+",
        description: "Бэтмен сталкивается с Джокером, который разрушает устои Готэма.",
    },
    CatalogItem {
        id: "dune",
        title: "Дюна",
        original_title: "Dune",
        year: 2021,
        duration_minutes: 155,
        rating: 8.2,
        genres: &["Фантастика", "Приключения"],
        trend_score: 89,
        age_rating: "12+",
        description: "Наследник дома Атрейдесов сражается за судьбу пустынной планеты Арракис.",
    },
    CatalogItem {
        id: "blade-runner-2049",
        title: "Бегущий по лезвию 2049",
        original_title: "Blade Runner 2049",
        year: 2017,
        duration_minutes: 164,
        rating: 8.0,
        genres: &["Фантастика", "Драма"],
        trend_score: 74,
        age_rating: "16+",
        description: "Новый бегущий раскрывает тайну, способную изменить остатки общества.",
    },
    CatalogItem {
        id: "shawshank",
        title: "Побег из Шоушенка",
        original_title: "The Shawshank Redemption",
        year: 1994,
        duration_minutes: 142,
        rating: 9.1,
        genres: &["Драма"],
        trend_score: 88,
        age_rating: "16+",
        description: "История надежды и дружбы за стенами тюрьмы Шоушенк.",
    },
    CatalogItem {
        id: "forrest-gump",
        title: "Форрест Гамп",
        original_title: "Forrest Gump",
        year: 1994,
        duration_minutes: 142,
        rating: 8.8,
        genres: &["Драма", "Роман"],
        trend_score: 80,
        age_rating: "12+",
        description: "Необычная жизнь простодушного, но доброго Форреста.",
    },
    CatalogItem {
        id: "pulp-fiction",
        title: "Криминальное чтиво",
        original_title: "Pulp Fiction",
        year: 1994,
        duration_minutes: 154,
        rating: 8.9,
        genres: &["Криминал", "Драма"],
        trend_score: 82,
        age_rating: "18+",
        description: "Переплетение историй бандитов, боксера и пары грабителей.",
    },
    CatalogItem {
        id: "fight-club",
        title: "Бойцовский клуб",
        original_title: "Fight Club",
        year: 1999,
        duration_minutes: 139,
        rating: 8.8,
        genres: &["Драма", "Триллер"],
        trend_score: 77,
        age_rating: "18+",
        description: "Клерк создает тайный клуб, чтобы выплеснуть внутреннюю пустоту.",
    },
    CatalogItem {
        id: "whiplash",
        title: "Одержимость",
        original_title: "Whiplash",
        year: 2014,
        duration_minutes: 107,
        rating: 8.5,
        genres: &["Драма", "Музыка"],
        trend_score: 70,
        age_rating: "16+",
        description: "Молодой барабанщик сталкивается с жестким наставником.",
    },
    CatalogItem {
        id: "social-network",
        title: "Социальная сеть",
        original_title: "The Social Network",
        year: 2010,
        duration_minutes: 120,
        rating: 7.8,
        genres: &["Драма", "Биография"],
        trend_score: 66,
        age_rating: "12+",
        description: "История создания Facebook и конфликтов вокруг него.",
    },
    CatalogItem {
        id: "la-la-land",
        title: "Ла-Ла Ленд",
        original_title: "La La Land",
        year: 2016,
        duration_minutes: 128,
        rating: 8.0,
        genres: &["Мюзикл", "Роман"],
        trend_score: 69,
        age_rating: "12+",
        description: "Любовь музыканта и актрисы в Лос-Анджелесе.",
    },
    CatalogItem {
        id: "her",
        title: "Она",
        original_title: "Her",
        year: 2013,
        duration_minutes: 126,
        rating: 8.0,
        genres: &["Роман", "Драма"],
        trend_score: 65,
        age_rating: "16+",
        description: "Мужчина влюбляется в интеллектуальную операционную систему.",
    },
    CatalogItem {
        id: "wolf-of-wall-street",
        title: "Волк с Уолл-стрит",
        original_title: "The Wolf of Wall Street",
        year: 2013,
        duration_minutes: 180,
        rating: 8.2,
        genres: &["Комедия", "Биография"],
        trend_score: 71,
        age_rating: "18+",
        description: "Взлет и падение брокера Джордана Белфорта.",
    },
    CatalogItem {
        id: "lotr-fellowship",
        title: "Властелин колец: Братство Кольца",
        original_title: "The Lord of the Rings: The Fellowship of the Ring",
        year: 2001,
        duration_minutes: 178,
        rating: 8.8,
        genres: &["Фэнтези", "Приключения"],
        trend_score: 90,
        age_rating: "12+",
        description: "Хоббит Фродо отправляется уничтожить Кольцо Всевластия.",
    },
    CatalogItem {
        id: "lotr-two-towers",
        title: "Властелин колец: Две крепости",
        original_title: "The Lord of the Rings: The Two Towers",
        year: 2002,
        duration_minutes: 179,
        rating: 8.7,
        genres: &["Фэнтези", "Приключения"],
        trend_score: 88,
        age_rating: "12+",
        description: "Битвы Средиземья набирают обороты.",
    },
    CatalogItem {
        id: "lotr-return-king",
        title: "Властелин колец: Возвращение короля",
        original_title: "The Lord of the Rings: The Return of the King",
        year: 2003,
        duration_minutes: 201,
        rating: 8.9,
        genres: &["Фэнтези", "Приключения"],
        trend_score: 92,
        age_rating: "12+",
        description: "Заключительная битва за судьбу Средиземья.",
    },
    CatalogItem {
        id: "your-name",
        title: "Твоё имя",
        original_title: "Your Name",
        year: 2016,
        duration_minutes: 106,
        rating: 8.4,
        genres: &["Анимация", "Роман"],
        trend_score: 72,
        age_rating: "6+",
        description: "Двое подростков странно связаны и пытаются встретиться.",
    },
    CatalogItem {
        id: "spirited-heart",
        title: "Шёпот сердца",
        original_title: "Whisper of the Heart",
        year: 1995,
        duration_minutes: 111,
        rating: 7.9,
        genres: &["Анимация", "Драма"],
        trend_score: 63,
        age_rating: "6+",
        description: "Девочка находит вдохновение и свой путь.",
    },
    CatalogItem {
        id: "the-godfather",
        title: "Крёстный отец",
        original_title: "The Godfather",
        year: 1972,
        duration_minutes: 175,
        rating: 9.2,
        genres: &["Криминал", "Драма"],
        trend_score: 87,
        age_rating: "18+",
        description: "Сага о семье Корлеоне и мире мафии.",
    },
    CatalogItem {
        id: "oppenheimer",
        title: "Оппенгеймер",
        original_title: "Oppenheimer",
        year: 2023,
        duration_minutes: 180,
        rating: 8.4,
        genres: &["Драма", "Биография"],
        trend_score: 85,
        age_rating: "16+",
        description: "История создателя атомной бомбы и моральной дилеммы века.",
    },
];

/// Read-only item repository
pub struct Catalog {
    items: &'static [CatalogItem],
    genres: Vec<&'static str>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::new(MOVIES)
    }

    pub fn new(items: &'static [CatalogItem]) -> Self {
        let mut seen = HashSet::new();
        let mut genres: Vec<&'static str> = items
            .iter()
            .flat_map(|item| item.genres.iter().copied())
            .filter(|genre| seen.insert(*genre))
            .collect();
        genres.sort_by(|a, b| collate(a, b));

        Self { items, genres }
    }

    pub fn items(&self) -> &'static [CatalogItem] {
        self.items
    }

    /// Distinct genres across all items, in collation order
    pub fn genres(&self) -> &[&'static str] {
        &self.genres
    }

    pub fn find(&self, id: &str) -> Option<&'static CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Top `count` items by trend score, independent of any filter
    pub fn trending(&self, count: usize) -> Vec<&'static CatalogItem> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| b.trend_score.cmp(&a.trend_score));
        items.truncate(count);
        items
    }

    /// The most trending item, promoted in the hero section
    pub fn hero(&self) -> Option<&'static CatalogItem> {
        self.trending(1).into_iter().next()
    }

    /// Check id invariants. Returns a human-readable problem per violation.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for item in self.items {
            if !seen.insert(item.id) {
                problems.push(format!("duplicate id '{}'", item.id));
            }
            if slug(item.id) != item.id {
                problems.push(format!("id '{}' is not a slug", item.id));
            }
            if item.genres.is_empty() {
                problems.push(format!("'{}' has no genres", item.id));
            }
        }

        problems
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('а'..='я').contains(&c) || ('А'..='Я').contains(&c)
}

/// Lowercase slug: runs of anything but Latin/Cyrillic letters and digits become '-'
pub fn slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut pending_dash = false;

    for c in lower.chars() {
        if is_slug_char(c) {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }

    out
}

fn collation_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}

/// Russian-aware string ordering: case-insensitive, 'ё' sorts with 'е'.
/// Ties on that level fall back to code-point order so the order is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
