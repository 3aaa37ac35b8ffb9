use std::collections::{BTreeSet, VecDeque};
use std::io::{BufRead, Split};
use std::str;

/// A (key image id, output id) pair, as read from the input edge file.
pub type Edge = (i64, i64);

/// Reads whitespace separated integer pairs from `reader`.
///
/// Pairs need not sit one per line; tokens are consumed in order regardless of
/// line breaks. The stream ends at end of input, at the first token that is not
/// an integer (including one that is not UTF-8), at a trailing unpaired token,
/// or at a read error. Nothing after that point is looked at.
pub struct Pairs<R> {
    lines:   Split<R>,
    pending: VecDeque<Vec<u8>>,
    done:    bool,
}

impl<R: BufRead> Pairs<R> {
    pub fn new(reader: R) -> Pairs<R> {
        Pairs {
            lines: reader.split(b'\n'),
            pending: VecDeque::new(),
            done: false,
        }
    }

    fn token(&mut self) -> Option<Vec<u8>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            match self.lines.next() {
                Some(Ok(line)) => {
                    self.pending.extend(line.split(|b| b.is_ascii_whitespace())
                                            .filter(|x| !x.is_empty())
                                            .map(|x| x.to_vec()));
                }
                _ => return None,
            }
        }
    }

    fn integer(&mut self) -> Option<i64> {
        self.token().and_then(|token| str::from_utf8(&token).ok().and_then(|x| x.parse().ok()))
    }
}

impl<R: BufRead> Iterator for Pairs<R> {
    type Item = Edge;
    fn next(&mut self) -> Option<Edge> {
        if self.done { return None; }
        let pair = match self.integer() {
            Some(keyimage) => self.integer().map(|output| (keyimage, output)),
            None => None,
        };
        if pair.is_none() { self.done = true; }
        pair
    }
}

/// Everything ingestion learns about the input: the edges in read order and
/// the distinct ids seen on each side, in ascending order.
#[derive(Debug, Default)]
pub struct EdgeList {
    pub edges:     Vec<Edge>,
    pub keyimages: BTreeSet<i64>,
    pub outputs:   BTreeSet<i64>,
}

impl EdgeList {
    pub fn push(&mut self, (keyimage, output): Edge) {
        self.keyimages.insert(keyimage);
        self.outputs.insert(output);
        self.edges.push((keyimage, output));
    }
}

pub fn ingest<I: Iterator<Item=Edge>>(pairs: I) -> EdgeList {
    let mut list = EdgeList::default();
    for edge in pairs {
        list.push(edge);
    }
    list
}

#[cfg(test)]
fn read(text: &str) -> Vec<Edge> {
    Pairs::new(text.as_bytes()).collect()
}

#[test]
fn reads_pairs_per_line() {
    assert_eq!(read("10 20\n10 21\n11 20\n"), vec![(10, 20), (10, 21), (11, 20)]);
}

#[test]
fn ignores_line_structure() {
    assert_eq!(read("  1\t2 3\n\n4\n5   6"), vec![(1, 2), (3, 4), (5, 6)]);
}

#[test]
fn accepts_signs() {
    assert_eq!(read("-3 +4\n"), vec![(-3, 4)]);
}

#[test]
fn stops_at_malformed_token() {
    assert_eq!(read("1 2\n3 x\n5 6\n"), vec![(1, 2)]);
    assert_eq!(read("1 2\n# comment\n5 6\n"), vec![(1, 2)]);
    assert!(read("1 2.5\n").is_empty());
}

#[test]
fn stops_at_non_utf8_token() {
    let pairs: Vec<Edge> = Pairs::new(&b"1 2\n3 4 \xff\n5 6\n"[..]).collect();
    assert_eq!(pairs, vec![(1, 2), (3, 4)]);
    let pairs: Vec<Edge> = Pairs::new(&b"\xfe1 2\n3 4\n"[..]).collect();
    assert!(pairs.is_empty());
}

#[test]
fn drops_unpaired_tail() {
    assert_eq!(read("1 2\n3\n"), vec![(1, 2)]);
}

#[test]
fn stays_finished() {
    let mut pairs = Pairs::new("1 2 x 3 4".as_bytes());
    assert_eq!(pairs.next(), Some((1, 2)));
    assert_eq!(pairs.next(), None);
    assert_eq!(pairs.next(), None);
}

#[test]
fn ingest_collects_distinct_sorted_ids() {
    let list = ingest(vec![(11, 20), (10, 21), (10, 20), (10, 20)].into_iter());
    assert_eq!(list.edges, vec![(11, 20), (10, 21), (10, 20), (10, 20)]);
    assert_eq!(list.keyimages.iter().cloned().collect::<Vec<_>>(), vec![10, 11]);
    assert_eq!(list.outputs.iter().cloned().collect::<Vec<_>>(), vec![20, 21]);
}

#[test]
fn ingest_empty() {
    let list = ingest(read("").into_iter());
    assert!(list.edges.is_empty());
    assert!(list.keyimages.is_empty());
    assert!(list.outputs.is_empty());
}
