//! Translation catalogs bundled with the app.
//!
//! Catalogs are nested JSON objects. Lookups use dotted keys such as
//! `components.transactions_table.received`, falling back to English and
//! then to the key itself.

use api::prefs::locale::Locale;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

const EN_CATALOG: &str = include_str!("../locales/en.json");
const ES_CATALOG: &str = include_str!("../locales/es.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog for {locale} is not valid JSON: {source}")]
    Json {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog for {locale} has a non-string value at {key}")]
    NonString { locale: &'static str, key: String },
}

/// One language's strings, flattened to dotted keys.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog(HashMap<String, String>);

impl Catalog {
    pub fn parse(locale: Locale, json: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(json).map_err(|source| CatalogError::Json {
            locale: locale.tag(),
            source,
        })?;
        let mut entries = HashMap::new();
        flatten(locale, "", &root, &mut entries)?;
        Ok(Self(entries))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn flatten(
    locale: Locale,
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(locale, &key, v, out)?;
            }
            Ok(())
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
            Ok(())
        }
        _ => Err(CatalogError::NonString {
            locale: locale.tag(),
            key: prefix.to_string(),
        }),
    }
}

/// All bundled catalogs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalogs {
    en: Catalog,
    es: Catalog,
}

impl Catalogs {
    pub fn bundled() -> Result<Self, CatalogError> {
        Ok(Self {
            en: Catalog::parse(Locale::En, EN_CATALOG)?,
            es: Catalog::parse(Locale::Es, ES_CATALOG)?,
        })
    }

    pub fn catalog(&self, locale: Locale) -> &Catalog {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }

    pub fn translate(&self, locale: Locale, key: &str) -> String {
        self.catalog(locale)
            .get(key)
            .or_else(|| self.en.get(key))
            .unwrap_or(key)
            .to_string()
    }
}

/// Translates keys under a fixed `namespace.prefix`, e.g.
/// `components.transactions_table`.
#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    catalogs: Arc<Catalogs>,
    locale: Locale,
    prefix: String,
}

impl Translator {
    pub fn new(catalogs: Arc<Catalogs>, locale: Locale, namespace: &str, key_prefix: &str) -> Self {
        Self {
            catalogs,
            locale,
            prefix: format!("{namespace}.{key_prefix}"),
        }
    }

    pub fn t(&self, key: &str) -> String {
        let full_key = format!("{}.{}", self.prefix, key);
        let text = self.catalogs.translate(self.locale, &full_key);
        if text == full_key {
            // untranslated; show the short key rather than the full path.
            key.to_string()
        } else {
            text
        }
    }
}
