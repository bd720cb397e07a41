use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// List endpoints answer either a bare array or a paginated `{"results": [...]}` page.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Plain(Vec<T>),
    Page { results: Vec<T> },
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Plain(items) | Listing::Page { results: items } => items,
        }
    }
}

/// Ratings come back as numbers, decimal strings or null depending on the serializer.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Rated {
        #[serde(default, deserialize_with = "lenient_f64")]
        rating: Option<f64>,
    }

    #[test]
    fn should_read_plain_and_paginated_lists() {
        let plain: Listing<u32> = serde_json::from_str("[1, 2]").unwrap();
        let page: Listing<u32> =
            serde_json::from_str(r#"{"count": 1, "next": null, "results": [3]}"#).unwrap();

        assert_eq!(plain.into_vec(), vec![1, 2]);
        assert_eq!(page.into_vec(), vec![3]);
    }

    #[test]
    fn should_read_rating_in_any_shape() {
        let parse = |json: &str| serde_json::from_str::<Rated>(json).unwrap().rating;

        assert_eq!(parse(r#"{"rating": 4.5}"#), Some(4.5));
        assert_eq!(parse(r#"{"rating": "4.50"}"#), Some(4.5));
        assert_eq!(parse(r#"{"rating": null}"#), None);
        assert_eq!(parse("{}"), None);
    }
}
