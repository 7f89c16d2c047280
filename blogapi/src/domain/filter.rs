use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Search constraints, sent verbatim as the body of
/// `POST /api/articles/search`.
///
/// The backend treats an empty string as "no constraint" and expects
/// every field to be present, so unset fields serialize as `""` rather
/// than being omitted. Client-side, absence is modeled as `None`; the
/// wire convention lives entirely in the serde modules below.
///
/// A sub-category only makes sense within a category; callers changing
/// the category must clear the sub-category in the same step (the form
/// layer enforces this).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleFilter {
    #[serde(rename = "dateStart", default, with = "empty_date")]
    pub date_start: Option<NaiveDate>,
    #[serde(rename = "dateEnd", default, with = "empty_date")]
    pub date_end: Option<NaiveDate>,
    #[serde(rename = "auteur", default, with = "empty_str")]
    pub author: Option<String>,
    #[serde(rename = "categorie", default, with = "empty_str")]
    pub category: Option<String>,
    #[serde(rename = "sousCategorie", default, with = "empty_str")]
    pub sub_category: Option<String>,
    #[serde(rename = "titre", default, with = "empty_str")]
    pub title: Option<String>,
}

impl ArticleFilter {
    /// True when no constraint is set, i.e. the search matches everything.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// `Option<String>` ↔ wire string, `None` ↔ `""` (whitespace counts as empty).
mod empty_str {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }
}

/// `Option<NaiveDate>` ↔ wire string, formatted `%Y-%m-%d`, `None` ↔ `""`.
mod empty_date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(trimmed, FORMAT)
            .map(Some)
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn empty_filter_sends_all_fields_as_empty_strings() {
        let body = serde_json::to_value(ArticleFilter::default()).unwrap();
        assert_eq!(
            body,
            json!({
                "dateStart": "",
                "dateEnd": "",
                "auteur": "",
                "categorie": "",
                "sousCategorie": "",
                "titre": ""
            })
        );
    }

    #[test]
    fn dates_format_as_iso() {
        let filter = ArticleFilter {
            date_start: NaiveDate::from_ymd_opt(2024, 3, 1),
            date_end: NaiveDate::from_ymd_opt(2024, 3, 31),
            ..Default::default()
        };
        let body: Value = serde_json::to_value(&filter).unwrap();
        assert_eq!(body["dateStart"], "2024-03-01");
        assert_eq!(body["dateEnd"], "2024-03-31");
    }

    #[test]
    fn round_trips_field_for_field() {
        let filter = ArticleFilter {
            date_start: NaiveDate::from_ymd_opt(2023, 12, 24),
            date_end: None,
            author: Some("Camille Dupont".to_string()),
            category: Some("Tech".to_string()),
            sub_category: Some("AI".to_string()),
            title: Some("transformeurs".to_string()),
        };

        let body = serde_json::to_string(&filter).unwrap();
        let parsed: ArticleFilter = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, filter);
    }

    #[test]
    fn whitespace_only_strings_deserialize_as_unset() {
        let parsed: ArticleFilter = serde_json::from_str(
            r#"{"dateStart":"","dateEnd":"  ","auteur":"  ","categorie":"","sousCategorie":"","titre":""}"#,
        )
        .unwrap();
        assert!(parsed.is_unconstrained());
    }

    #[test]
    fn missing_fields_deserialize_as_unset() {
        let parsed: ArticleFilter = serde_json::from_str(r#"{"auteur":"Ana"}"#).unwrap();
        assert_eq!(parsed.author.as_deref(), Some("Ana"));
        assert_eq!(parsed.date_start, None);
        assert_eq!(parsed.title, None);
    }
}
