use std::str::FromStr;

use anyhow::Result;
use punkapi::types::Beer;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::validation::ValidationError;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(ValidationError::OutputFormat(s.to_string())),
        }
    }
}

#[derive(Tabled, Serialize)]
struct BeerRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Tagline")]
    #[serde(rename = "Tagline")]
    tagline: String,
    #[tabled(rename = "First Brewed")]
    #[serde(rename = "First Brewed")]
    first_brewed: String,
    #[tabled(rename = "ABV")]
    #[serde(rename = "ABV")]
    abv: String,
    #[tabled(rename = "IBU")]
    #[serde(rename = "IBU")]
    ibu: String,
    #[tabled(rename = "EBC")]
    #[serde(rename = "EBC")]
    ebc: String,
}

fn build_beer_rows(beers: &[Beer]) -> Vec<BeerRow> {
    beers
        .iter()
        .map(|b| BeerRow {
            id: b.id,
            name: b.name.clone(),
            tagline: b.tagline.clone(),
            first_brewed: b.first_brewed.clone(),
            abv: format_abv(b.abv),
            ibu: format_metric(b.ibu),
            ebc: format_metric(b.ebc),
        })
        .collect()
}

pub fn print_beers(beers: &[Beer], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_beers_table(beers),
        OutputFormat::Json => print_json(&beers)?,
        OutputFormat::Csv => print_beers_csv(beers)?,
        OutputFormat::Markdown => print_beers_markdown(beers),
    }
    Ok(())
}

pub fn print_beers_table(beers: &[Beer]) {
    println!("{}", Table::new(build_beer_rows(beers)));
}

pub fn print_beers_markdown(beers: &[Beer]) {
    let mut table = Table::new(build_beer_rows(beers));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_beers_csv(beers: &[Beer]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_beer_rows(beers) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    println!("{}", render_json(data)?);
    Ok(())
}

fn render_json<T: serde::Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {}", e))
}

fn format_abv(abv: Option<f64>) -> String {
    match abv {
        Some(abv) => format!("{:.1}%", abv),
        None => "-".to_string(),
    }
}

fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_beers_fixture() -> Vec<Beer> {
        let json_str = include_str!("../../punkapi/tests/fixtures/beers.json");
        serde_json::from_str(json_str).unwrap()
    }

    #[test]
    fn test_format_abv() {
        assert_eq!(format_abv(Some(6.0)), "6.0%");
        assert_eq!(format_abv(Some(13.2)), "13.2%");
        assert_eq!(format_abv(None), "-");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(Some(60.0)), "60");
        assert_eq!(format_metric(Some(8.5)), "8.5");
        assert_eq!(format_metric(None), "-");
    }

    #[test]
    fn test_build_beer_rows_mapping() {
        let beers = load_beers_fixture();
        let rows = build_beer_rows(&beers);
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.id, 192);
        assert_eq!(row.name, "Punk IPA 2007 - 2010");
        assert_eq!(row.first_brewed, "04/2007");
        assert_eq!(row.abv, "6.0%");
        assert_eq!(row.ibu, "60");
        assert_eq!(row.ebc, "17");

        let row = &rows[1];
        assert_eq!(row.ibu, "-");
        assert_eq!(row.ebc, "-");
    }

    #[test]
    fn test_build_beer_rows_empty() {
        assert!(build_beer_rows(&[]).is_empty());
    }

    #[test]
    fn test_markdown_table_has_headers() {
        let beers = load_beers_fixture();
        let mut table = Table::new(build_beer_rows(&beers));
        table.with(Style::markdown());
        let rendered = table.to_string();
        assert!(rendered.contains("| Id"));
        assert!(rendered.contains("First Brewed"));
        assert!(rendered.contains("AB:20"));
    }

    #[test]
    fn test_render_json_propagates_errors() {
        let beers = load_beers_fixture();
        let json = render_json(&beers).unwrap();
        assert!(json.contains("\"name\": \"AB:20\""));

        let mut bad = std::collections::HashMap::new();
        bad.insert(vec![1u8], "non-string map keys cannot be JSON");
        assert!(render_json(&bad).is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
