use crate::domain::{
    catalog::CatalogSource,
    models::{Catalog, KeywordRecord},
};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    File(PathBuf),
    Url(String),
}

impl CatalogLocation {
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Reads the keyword catalog from a local JSON file or over HTTP.
pub struct CatalogLoader {
    location: CatalogLocation,
    http: HttpClient,
}

impl CatalogLoader {
    pub fn new(location: &str, timeout: Duration) -> Result<Self> {
        if location.trim().is_empty() {
            bail!("catalog.location must not be empty");
        }
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;
        Ok(Self {
            location: CatalogLocation::parse(location),
            http,
        })
    }

    async fn read_raw(&self) -> Result<String> {
        match &self.location {
            CatalogLocation::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("read catalog {}", path.display())),
            CatalogLocation::Url(url) => {
                let response = self
                    .http
                    .get(url)
                    .send()
                    .await
                    .with_context(|| format!("fetch catalog {url}"))?;
                let status = response.status();
                if !status.is_success() {
                    bail!("catalog server returned {}", status.as_u16());
                }
                response.text().await.context("read catalog body")
            }
        }
    }
}

#[async_trait]
impl CatalogSource for CatalogLoader {
    async fn load(&self) -> Result<Catalog> {
        let raw = self.read_raw().await?;
        parse_catalog(&raw).with_context(|| format!("parse catalog {}", self.location))
    }

    fn describe(&self) -> String {
        self.location.to_string()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRow {
    Columns(Vec<Option<String>>),
    Named {
        label: String,
        #[serde(default)]
        tag: String,
        #[serde(default, rename = "matchText", alias = "match_text", alias = "match")]
        match_text: Option<String>,
    },
}

/// Parses a catalog, JSON when the text opens with `[` or `{`, CSV otherwise.
///
/// JSON rows are `[label, tag, matchText]` arrays or `{label, tag, matchText}`
/// objects. CSV has a header row followed by `label,tag,matchText` records.
/// Rows without a label are dropped and rows without match text are kept but
/// never match.
pub fn parse_catalog(raw: &str) -> Result<Catalog> {
    let trimmed = raw.trim_start_matches('\u{feff}').trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        parse_json_catalog(trimmed)
    } else {
        parse_csv_catalog(trimmed)
    }
}

fn parse_json_catalog(raw: &str) -> Result<Catalog> {
    let rows: Vec<RawRow> = serde_json::from_str(raw).context("catalog is not a JSON row list")?;
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let (label, tag, match_text) = match row {
            RawRow::Columns(columns) => {
                let mut columns = columns.into_iter();
                let Some(Some(label)) = columns.next() else {
                    continue;
                };
                let tag = columns.next().flatten().unwrap_or_default();
                (label, tag, columns.next().flatten())
            }
            RawRow::Named {
                label,
                tag,
                match_text,
            } => (label, tag, match_text),
        };
        push_record(&mut records, label, tag, match_text);
    }
    Ok(records)
}

fn parse_csv_catalog(raw: &str) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());
    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        // Header is line 1
        let row = row.with_context(|| format!("catalog CSV row {}", line + 2))?;
        let column = |idx: usize| row.get(idx).filter(|value| !value.is_empty());
        let Some(label) = column(0) else {
            continue;
        };
        push_record(
            &mut records,
            label.to_string(),
            column(1).unwrap_or_default().to_string(),
            column(2).map(str::to_string),
        );
    }
    Ok(records)
}

fn push_record(records: &mut Catalog, label: String, tag: String, match_text: Option<String>) {
    if label.trim().is_empty() {
        return;
    }
    records.push(KeywordRecord {
        label,
        tag,
        match_text: match_text.map(|text| text.to_lowercase()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parsing() {
        assert_eq!(
            CatalogLocation::parse("https://example.org/keywords.json"),
            CatalogLocation::Url("https://example.org/keywords.json".to_string())
        );
        assert_eq!(
            CatalogLocation::parse("data/keywords.json"),
            CatalogLocation::File(PathBuf::from("data/keywords.json"))
        );
    }

    #[test]
    fn test_parse_mixed_rows() {
        let raw = r#"[
            ["Enrol now", "enrolment", "Enrol Now"],
            {"label": "Fees", "tag": "money", "matchText": "fees payments"},
            ["Orphan label"],
            [null, "tag", "text"],
            ["", "tag", "text"]
        ]"#;
        let catalog = parse_catalog(raw).unwrap();
        assert_eq!(
            catalog,
            vec![
                KeywordRecord::new("Enrol now", "enrolment", "enrol now"),
                KeywordRecord::new("Fees", "money", "fees payments"),
                KeywordRecord {
                    label: "Orphan label".to_string(),
                    tag: String::new(),
                    match_text: None,
                },
            ]
        );
    }

    #[test]
    fn test_parse_rejects_non_list() {
        assert!(parse_catalog(r#"{"rows": []}"#).is_err());
        assert!(parse_catalog(r#"["Enrol now", "enrolment"]"#).is_err());
    }

    #[test]
    fn test_parse_csv_skips_header() {
        let raw = "label,tag,matchText\n\
                   Enrol now,enrolment,Enrol Now\n\
                   \"Fees, payments\",money,fees payments\n\
                   Orphan label\n\
                   ,tag,text\n";
        let catalog = parse_catalog(raw).unwrap();
        assert_eq!(
            catalog,
            vec![
                KeywordRecord::new("Enrol now", "enrolment", "enrol now"),
                KeywordRecord::new("Fees, payments", "money", "fees payments"),
                KeywordRecord {
                    label: "Orphan label".to_string(),
                    tag: String::new(),
                    match_text: None,
                },
            ]
        );
    }

    #[test]
    fn test_parse_csv_header_only_is_empty() {
        assert!(parse_catalog("label,tag,matchText\n").unwrap().is_empty());
    }
}
