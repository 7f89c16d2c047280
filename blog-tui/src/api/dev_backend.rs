use blogapi::domain::{Article, ArticleFilter, CategoryTaxonomy};
use chrono::NaiveDate;
use std::collections::HashMap;

/// In-memory stand-in for the scraper backend, used by `blog-tui dev`
/// and by tests. Applies the same filter semantics the backend does:
/// inclusive date range, case-insensitive substring match on author and
/// title, exact match on category and sub-category.
#[derive(Debug, Clone)]
pub struct DevBackend {
    articles: Vec<DevArticle>,
}

/// The backend indexes articles by sub-category even though the wire
/// `Article` only carries the category, so the dev store keeps it as an
/// extra column.
#[derive(Debug, Clone)]
struct DevArticle {
    article: Article,
    sub_category: String,
}

impl DevBackend {
    pub fn new() -> Self {
        Self {
            articles: seed_articles(),
        }
    }

    pub fn categories(&self) -> CategoryTaxonomy {
        [
            (
                "Tech".to_string(),
                vec!["AI".to_string(), "Web".to_string()],
            ),
            ("Sport".to_string(), vec![]),
            (
                "Culture".to_string(),
                vec!["Cinéma".to_string(), "Livres".to_string()],
            ),
        ]
        .into_iter()
        .collect()
    }

    pub fn search(&self, filter: &ArticleFilter) -> Vec<Article> {
        self.articles
            .iter()
            .filter(|entry| matches(entry, filter))
            .map(|entry| entry.article.clone())
            .collect()
    }
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(entry: &DevArticle, filter: &ArticleFilter) -> bool {
    let article = &entry.article;

    if filter.date_start.is_some() || filter.date_end.is_some() {
        let Ok(published) = NaiveDate::parse_from_str(&article.published, "%Y-%m-%d") else {
            return false;
        };
        if filter.date_start.is_some_and(|from| published < from) {
            return false;
        }
        if filter.date_end.is_some_and(|to| published > to) {
            return false;
        }
    }

    if let Some(author) = &filter.author {
        if !contains_ci(&article.author, author) {
            return false;
        }
    }
    if let Some(title) = &filter.title {
        if !contains_ci(&article.title, title) {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if &article.category != category {
            return false;
        }
    }
    if let Some(sub_category) = &filter.sub_category {
        if &entry.sub_category != sub_category {
            return false;
        }
    }

    true
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn seed_articles() -> Vec<DevArticle> {
    let mut seeded = Vec::new();
    let mut push = |title: &str,
                    author: &str,
                    published: &str,
                    category: &str,
                    sub_category: &str,
                    summary: &str| {
        let slug = title.to_lowercase().replace(' ', "-");
        seeded.push(DevArticle {
            article: Article {
                url: format!("https://blog.example/posts/{}", slug),
                title: title.to_string(),
                author: author.to_string(),
                published: published.to_string(),
                category: category.to_string(),
                summary: summary.to_string(),
                thumbnail: Some(format!("https://blog.example/img/{}.jpg", slug)),
                images: HashMap::new(),
            },
            sub_category: sub_category.to_string(),
        });
    };

    push(
        "Les transformeurs en pratique",
        "Camille Dupont",
        "2024-11-03",
        "Tech",
        "AI",
        "Un tour d'horizon des architectures récentes et de leurs usages concrets.",
    );
    push(
        "WebAssembly côté serveur",
        "Nadia Benali",
        "2024-09-18",
        "Tech",
        "Web",
        "Pourquoi le wasm sort du navigateur, et ce que ça change pour vos services.",
    );
    push(
        "Roland-Garros sous la pluie",
        "Marc Lefèvre",
        "2024-06-02",
        "Sport",
        "",
        "Retour sur une quinzaine perturbée mais riche en surprises.",
    );
    push(
        "Le retour du cinéma de quartier",
        "Camille Dupont",
        "2024-03-14",
        "Culture",
        "Cinéma",
        "Petites salles, grandes programmations : enquête sur un renouveau.",
    );
    push(
        "Relire Giono aujourd'hui",
        "Hélène Moreau",
        "2023-12-24",
        "Culture",
        "Livres",
        "Ce que les collines ont encore à nous dire.",
    );
    push(
        "Agents autonomes, promesses et limites",
        "Nadia Benali",
        "2025-01-20",
        "Tech",
        "AI",
        "Entre démos spectaculaires et déploiements réels, où en est-on ?",
    );

    seeded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_filter_returns_everything() {
        let dev = DevBackend::new();
        assert_eq!(dev.search(&ArticleFilter::default()).len(), 6);
    }

    #[test]
    fn category_filter_is_exact() {
        let dev = DevBackend::new();
        let results = dev.search(&ArticleFilter {
            category: Some("Tech".to_string()),
            ..Default::default()
        });
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|a| a.category == "Tech"));
    }

    #[test]
    fn sub_category_narrows_within_category() {
        let dev = DevBackend::new();
        let results = dev.search(&ArticleFilter {
            category: Some("Tech".to_string()),
            sub_category: Some("AI".to_string()),
            ..Default::default()
        });
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn author_match_is_case_insensitive_substring() {
        let dev = DevBackend::new();
        let results = dev.search(&ArticleFilter {
            author: Some("dupont".to_string()),
            ..Default::default()
        });
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn date_range_is_inclusive() {
        let dev = DevBackend::new();
        let results = dev.search(&ArticleFilter {
            date_start: NaiveDate::from_ymd_opt(2024, 6, 2),
            date_end: NaiveDate::from_ymd_opt(2024, 9, 18),
            ..Default::default()
        });
        let titles: Vec<&str> = results.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["WebAssembly côté serveur", "Roland-Garros sous la pluie"]
        );
    }

    #[test]
    fn no_match_yields_empty_list() {
        let dev = DevBackend::new();
        let results = dev.search(&ArticleFilter {
            title: Some("introuvable".to_string()),
            ..Default::default()
        });
        assert!(results.is_empty());
    }

    #[test]
    fn taxonomy_matches_seeded_categories() {
        let dev = DevBackend::new();
        let taxonomy = dev.categories();
        let categories: Vec<&str> = taxonomy.categories().collect();
        assert_eq!(categories, vec!["Tech", "Sport", "Culture"]);
        assert!(taxonomy.sub_categories("Sport").is_empty());
    }
}
