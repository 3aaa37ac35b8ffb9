use std::collections::{BTreeMap, BTreeSet};
use std::io::{Result, Write};

/// Dense zero-based ranks for a set of ids: the smallest id gets 0, the next 1,
/// and so on. Key images and outputs each get their own, unrelated map.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IndexMap {
    ranks: BTreeMap<i64, usize>,
}

impl IndexMap {
    /// Ranks `ids` in ascending order, writing one `<index> <id>` line per id
    /// to `writer` as it goes.
    pub fn assign<W: Write>(ids: &BTreeSet<i64>, writer: &mut W) -> Result<IndexMap> {
        let mut ranks = BTreeMap::new();
        for (index, &id) in ids.iter().enumerate() {
            writeln!(writer, "{} {}", index, id)?;
            ranks.insert(id, index);
        }
        Ok(IndexMap { ranks: ranks })
    }

    pub fn index(&self, id: i64) -> Option<usize> { self.ranks.get(&id).cloned() }
    pub fn len(&self) -> usize { self.ranks.len() }
    pub fn is_empty(&self) -> bool { self.ranks.is_empty() }
}

#[cfg(test)]
fn assign(ids: &[i64]) -> (IndexMap, String) {
    let set: BTreeSet<i64> = ids.iter().cloned().collect();
    let mut text = Vec::new();
    let map = IndexMap::assign(&set, &mut text).unwrap();
    (map, String::from_utf8(text).unwrap())
}

#[test]
fn ranks_in_ascending_id_order() {
    let (map, text) = assign(&[900, -5, 42]);
    assert_eq!(text, "0 -5\n1 42\n2 900\n");
    assert_eq!(map.index(-5), Some(0));
    assert_eq!(map.index(42), Some(1));
    assert_eq!(map.index(900), Some(2));
    assert_eq!(map.index(43), None);
    assert_eq!(map.len(), 3);
}

#[test]
fn empty_set_writes_nothing() {
    let (map, text) = assign(&[]);
    assert!(map.is_empty());
    assert_eq!(text, "");
}

#[test]
fn ranks_are_monotone_and_dense() {
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let ids: Vec<i64> = (0..500).map(|_| rng.gen_range(-10_000..10_000)).collect();
    let (map, _) = assign(&ids);

    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(map.len(), sorted.len());
    for (rank, &id) in sorted.iter().enumerate() {
        assert_eq!(map.index(id), Some(rank));
    }
}
