//! Readers for the files the pipeline emits, for tools downstream of it.
//!
//! Unlike input ingestion these are strict: the files are expected to have been
//! written by `encode` and `IndexMap::assign`, so any line that does not look
//! like theirs is an `InvalidData` error.

use std::io::{BufRead, Error, ErrorKind, Result};
use std::str::FromStr;

use edges::Edge;

/// One line of the csparse edge file.
pub type WeightedEdge = (usize, usize, u32);

pub fn read_weighted_edges<R: BufRead>(reader: R) -> Result<Vec<WeightedEdge>> {
    let mut edges = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let elts: Vec<&str> = line.split_whitespace().collect();
        if elts.len() != 3 {
            return Err(malformed(number, &line));
        }
        edges.push((field(elts[0], number, &line)?, field(elts[1], number, &line)?, field(elts[2], number, &line)?));
    }
    Ok(edges)
}

/// Reads an index map file into a vector whose position `i` holds the original
/// id given index `i`. Indices must be dense and in order, ids ascending.
pub fn read_index_map<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut ids: Vec<i64> = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let elts: Vec<&str> = line.split_whitespace().collect();
        if elts.len() != 2 {
            return Err(malformed(number, &line));
        }
        let index: usize = field(elts[0], number, &line)?;
        let id: i64 = field(elts[1], number, &line)?;
        if index != ids.len() {
            return Err(Error::new(ErrorKind::InvalidData, format!("line {}: expected index {}, found {}", number + 1, ids.len(), index)));
        }
        if ids.last().map_or(false, |&last| last >= id) {
            return Err(Error::new(ErrorKind::InvalidData, format!("line {}: id {} is not ascending", number + 1, id)));
        }
        ids.push(id);
    }
    Ok(ids)
}

/// Maps weighted edges back to the original (key image id, output id) pairs.
pub fn restore(edges: &[WeightedEdge], keyimages: &[i64], outputs: &[i64]) -> Result<Vec<Edge>> {
    edges.iter().map(|&(source, target, _weight)| {
        match (keyimages.get(source), outputs.get(target)) {
            (Some(&keyimage), Some(&output)) => Ok((keyimage, output)),
            _ => Err(Error::new(ErrorKind::InvalidData, format!("edge ({}, {}) is outside the index maps", source, target))),
        }
    }).collect()
}

fn field<T: FromStr>(text: &str, number: usize, line: &str) -> Result<T> {
    text.parse().map_err(|_| malformed(number, line))
}

fn malformed(number: usize, line: &str) -> Error {
    Error::new(ErrorKind::InvalidData, format!("line {}: malformed record {:?}", number + 1, line))
}

#[test]
fn reads_weighted_edges() {
    let edges = read_weighted_edges("0 0 1\n0 1 1\n1 0 1\n".as_bytes()).unwrap();
    assert_eq!(edges, vec![(0, 0, 1), (0, 1, 1), (1, 0, 1)]);
}

#[test]
fn rejects_short_weighted_edge() {
    let err = read_weighted_edges("0 0 1\n0 1\n".as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn reads_index_map() {
    assert_eq!(read_index_map("0 10\n1 11\n2 57\n".as_bytes()).unwrap(), vec![10, 11, 57]);
    assert!(read_index_map("".as_bytes()).unwrap().is_empty());
}

#[test]
fn rejects_gaps_and_disorder() {
    assert_eq!(read_index_map("0 10\n2 11\n".as_bytes()).unwrap_err().kind(), ErrorKind::InvalidData);
    assert_eq!(read_index_map("0 11\n1 10\n".as_bytes()).unwrap_err().kind(), ErrorKind::InvalidData);
    assert_eq!(read_index_map("0 -1\n1 -1\n".as_bytes()).unwrap_err().kind(), ErrorKind::InvalidData);
}

#[test]
fn restores_original_ids() {
    let restored = restore(&[(0, 0, 1), (0, 1, 1), (1, 0, 1)], &[10, 11], &[20, 21]).unwrap();
    assert_eq!(restored, vec![(10, 20), (10, 21), (11, 20)]);
    assert!(restore(&[(2, 0, 1)], &[10, 11], &[20, 21]).is_err());
}
