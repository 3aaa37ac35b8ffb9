use std::io::{Error, ErrorKind, Result, Write};

use edges::Edge;
use indexmap::IndexMap;

/// Edge weight written on every line; there is no weighting logic.
pub const WEIGHT: u32 = 1;

/// Writes `edges` in their original order as `<keyimage_index> <output_index> 1`
/// lines, translating each endpoint through its index map. Duplicate edges are
/// written as many times as they occur.
pub fn write<W: Write>(writer: &mut W, edges: &[Edge], keyimages: &IndexMap, outputs: &IndexMap) -> Result<()> {
    for &(keyimage, output) in edges {
        let source = keyimages.index(keyimage).ok_or_else(|| unmapped("key image", keyimage))?;
        let target = outputs.index(output).ok_or_else(|| unmapped("output", output))?;
        writeln!(writer, "{} {} {}", source, target, WEIGHT)?;
    }
    Ok(())
}

fn unmapped(kind: &str, id: i64) -> Error {
    Error::new(ErrorKind::InvalidData, format!("{} id {} has no index", kind, id))
}

#[cfg(test)]
fn maps(keyimages: &[i64], outputs: &[i64]) -> (IndexMap, IndexMap) {
    use std::collections::BTreeSet;
    let mut sink = ::std::io::sink();
    let keyimages: BTreeSet<i64> = keyimages.iter().cloned().collect();
    let outputs: BTreeSet<i64> = outputs.iter().cloned().collect();
    let k = IndexMap::assign(&keyimages, &mut sink).unwrap();
    let o = IndexMap::assign(&outputs, &mut sink).unwrap();
    (k, o)
}

#[test]
fn writes_in_read_order_with_duplicates() {
    let (k, o) = maps(&[10, 11], &[20, 21]);
    let edges = [(11, 21), (10, 20), (11, 21)];
    let mut text = Vec::new();
    write(&mut text, &edges, &k, &o).unwrap();
    assert_eq!(String::from_utf8(text).unwrap(), "1 1 1\n0 0 1\n1 1 1\n");
}

#[test]
fn index_spaces_are_separate() {
    // the same raw id ranks differently on each side
    let (k, o) = maps(&[5], &[1, 5]);
    let mut text = Vec::new();
    write(&mut text, &[(5, 5)], &k, &o).unwrap();
    assert_eq!(String::from_utf8(text).unwrap(), "0 1 1\n");
}

#[test]
fn unmapped_endpoint_is_an_error() {
    let (k, o) = maps(&[10], &[20]);
    let mut text = Vec::new();
    let err = write(&mut text, &[(10, 20), (10, 99)], &k, &o).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}
