//! Readers for the tab-delimited files the browser consumes
//!
//! - MeSH terms: `name \t ids \t description`, where `ids` is a `;`-separated
//!   list of dotted paths
//! - Enrichment results: `name \t query_mapped \t reference_mapped \t p_value \t enrichment_score`
//! - Compound annotations: `cid;name`
//!
//! None of the files carries a header row.

use crate::enrichment::EnrichmentStat;
use mesh_common::{MeshError, Result, Term};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Separator between the path identifiers of one term
pub const ID_LIST_SEPARATOR: char = ';';

/// A compound identifier paired with a heading name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub cid: String,
    pub name: String,
}

fn delimited<R: Read>(reader: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

/// Borrow exactly `N` fields of a record or fail naming the record number
fn fields<const N: usize>(record: &csv::StringRecord, number: usize) -> Result<[&str; N]> {
    if record.len() != N {
        return Err(MeshError::parse(format!(
            "record {}: expected {} fields, found {}",
            number,
            N,
            record.len()
        )));
    }
    Ok(std::array::from_fn(|i| &record[i]))
}

/// Read MeSH term records
pub fn read_terms<R: Read>(reader: R) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    for (i, record) in delimited(reader, b'\t').records().enumerate() {
        let record = record?;
        let [name, ids, description] = fields::<3>(&record, i + 1)?;
        terms.push(Term {
            name: name.to_string(),
            description: description.to_string(),
            ids: ids
                .split(ID_LIST_SEPARATOR)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
        });
    }
    Ok(terms)
}

/// Load MeSH term records from a file
pub fn load_terms(path: impl AsRef<Path>) -> Result<Vec<Term>> {
    let path = path.as_ref();
    let terms = read_terms(File::open(path)?)?;
    debug!(path = %path.display(), terms = terms.len(), "Loaded MeSH terms");
    Ok(terms)
}

/// Read `(term name, statistic)` enrichment results
pub fn read_results<R: Read>(reader: R) -> Result<Vec<(String, EnrichmentStat)>> {
    let mut results = Vec::new();
    for (i, record) in delimited(reader, b'\t').records().enumerate() {
        let record = record?;
        let [name, query_mapped, reference_mapped, p_value, enrichment_score] =
            fields::<5>(&record, i + 1)?;
        let stat = EnrichmentStat {
            query_mapped: number(query_mapped, "query_mapped", i + 1)?,
            reference_mapped: number(reference_mapped, "reference_mapped", i + 1)?,
            p_value: number(p_value, "p_value", i + 1)?,
            enrichment_score: number(enrichment_score, "enrichment_score", i + 1)?,
        };
        results.push((name.to_string(), stat));
    }
    Ok(results)
}

fn number<T>(raw: &str, column: &str, record: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e| {
        MeshError::parse(format!(
            "record {}: invalid {} '{}': {}",
            record, column, raw, e
        ))
    })
}

/// Load enrichment results from a file
pub fn load_results(path: impl AsRef<Path>) -> Result<Vec<(String, EnrichmentStat)>> {
    let path = path.as_ref();
    let results = read_results(File::open(path)?)?;
    debug!(path = %path.display(), results = results.len(), "Loaded enrichment results");
    Ok(results)
}

/// Read `cid;name` compound annotations
pub fn read_annotations<R: Read>(reader: R) -> Result<Vec<Annotation>> {
    let mut annotations = Vec::new();
    for (i, record) in delimited(reader, b';').records().enumerate() {
        let record = record?;
        let [cid, name] = fields::<2>(&record, i + 1)?;
        annotations.push(Annotation {
            cid: cid.to_string(),
            name: name.to_string(),
        });
    }
    Ok(annotations)
}

/// Load compound annotations from a file
pub fn load_annotations(path: impl AsRef<Path>) -> Result<Vec<Annotation>> {
    let path = path.as_ref();
    let annotations = read_annotations(File::open(path)?)?;
    debug!(path = %path.display(), annotations = annotations.len(), "Loaded annotations");
    Ok(annotations)
}
