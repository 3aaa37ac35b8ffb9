extern crate time;
#[cfg(test)]
extern crate tempdir;
#[cfg(test)]
extern crate rand;

pub mod filenames;
pub mod edges;
pub mod indexmap;
pub mod encode;
pub mod decode;

use std::fs::File;
use std::io::{BufReader, BufWriter, Error, Result, Write};
use std::path::Path;

use edges::{EdgeList, Pairs};
use filenames::FileNames;
use indexmap::IndexMap;

/// Counts reported at the end of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub keyimages: usize,
    pub outputs:   usize,
    pub edges:     usize,
}

impl Summary {
    pub fn vertices(&self) -> usize { self.keyimages + self.outputs }
}

/// Relabels the edge file named by `files` into csparse form.
///
/// All three output files are created before the input is read, so they exist
/// (possibly empty) after any run that gets that far. An input file that cannot
/// be opened reads as empty, unless `strict` is set, in which case the open
/// error is returned and no output file is touched.
pub fn run(files: &FileNames, strict: bool) -> Result<Summary> {

    let input = match File::open(&files.edges) {
        Ok(file) => Some(BufReader::new(file)),
        Err(err) => {
            if strict { return Err(at(&files.edges, err)); }
            println!("could not open {}: {}; treating it as empty", files.edges.display(), err);
            None
        }
    };

    let mut csparse_writer = create(&files.csparse)?;
    let mut keyimage_writer = create(&files.keyimages)?;
    let mut output_writer = create(&files.outputs)?;

    println!("Reading edge file");
    let start = time::precise_time_s();
    let list = match input {
        Some(reader) => edges::ingest(Pairs::new(reader)),
        None => EdgeList::default(),
    };
    println!("Finished reading edge file in {:.3}s", time::precise_time_s() - start);

    let summary = Summary {
        keyimages: list.keyimages.len(),
        outputs: list.outputs.len(),
        edges: list.edges.len(),
    };
    println!("Number of key images: {}", summary.keyimages);
    println!("Number of outputs: {}", summary.outputs);
    println!("Number of vertices: {}", summary.vertices());
    println!("Number of edges: {}", summary.edges);

    println!("Creating keyimage index map");
    let start = time::precise_time_s();
    let keyimages = IndexMap::assign(&list.keyimages, &mut keyimage_writer).map_err(|e| at(&files.keyimages, e))?;
    keyimage_writer.flush().map_err(|e| at(&files.keyimages, e))?;
    println!("Finished creating keyimage index map in {:.3}s", time::precise_time_s() - start);

    println!("Creating output index map");
    let start = time::precise_time_s();
    let outputs = IndexMap::assign(&list.outputs, &mut output_writer).map_err(|e| at(&files.outputs, e))?;
    output_writer.flush().map_err(|e| at(&files.outputs, e))?;
    println!("Finished creating output index map in {:.3}s", time::precise_time_s() - start);

    println!("Adding edges to graph");
    let start = time::precise_time_s();
    encode::write(&mut csparse_writer, &list.edges, &keyimages, &outputs).map_err(|e| at(&files.csparse, e))?;
    csparse_writer.flush().map_err(|e| at(&files.csparse, e))?;
    println!("Finished adding edges to graph in {:.3}s", time::precise_time_s() - start);

    Ok(summary)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new).map_err(|e| at(path, e))
}

// keeps the kind, adds the file name
fn at(path: &Path, err: Error) -> Error {
    Error::new(err.kind(), format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {

    use std::fs::{self, File};
    use std::io::{BufReader, Write};
    use std::path::Path;

    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use tempdir::TempDir;

    use decode;
    use filenames::FileNames;
    use super::{run, Summary};

    fn contents(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    fn setup(name: &str, edges: Option<&str>) -> (TempDir, FileNames) {
        let dir = TempDir::new(name).unwrap();
        let files = FileNames::new("1541236", None).within(dir.path());
        if let Some(text) = edges {
            File::create(&files.edges).unwrap().write_all(text.as_bytes()).unwrap();
        }
        (dir, files)
    }

    #[test]
    fn relabels_small_graph() {
        let (_dir, files) = setup("relabels_small_graph", Some("10 20\n10 21\n11 20\n"));
        let summary = run(&files, false).unwrap();
        assert_eq!(summary, Summary { keyimages: 2, outputs: 2, edges: 3 });
        assert_eq!(summary.vertices(), 4);
        assert_eq!(contents(&files.csparse), "0 0 1\n0 1 1\n1 0 1\n");
        assert_eq!(contents(&files.keyimages), "0 10\n1 11\n");
        assert_eq!(contents(&files.outputs), "0 20\n1 21\n");
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let (_dir, files) = setup("keeps_duplicates_and_order", Some("7 3\n2 9\n7 3\n"));
        run(&files, false).unwrap();
        assert_eq!(contents(&files.csparse), "1 0 1\n0 1 1\n1 0 1\n");
        assert_eq!(contents(&files.keyimages), "0 2\n1 7\n");
        assert_eq!(contents(&files.outputs), "0 3\n1 9\n");
    }

    #[test]
    fn stops_at_first_bad_record() {
        let (_dir, files) = setup("stops_at_first_bad_record", Some("1 2\n3 4\noops\n5 6\n"));
        let summary = run(&files, false).unwrap();
        assert_eq!(summary.edges, 2);
        assert_eq!(contents(&files.csparse), "0 0 1\n1 1 1\n");
    }

    #[test]
    fn missing_input_yields_empty_outputs() {
        let (_dir, files) = setup("missing_input_yields_empty_outputs", None);
        let summary = run(&files, false).unwrap();
        assert_eq!(summary, Summary { keyimages: 0, outputs: 0, edges: 0 });
        assert!(!files.edges.exists());
        assert_eq!(contents(&files.csparse), "");
        assert_eq!(contents(&files.keyimages), "");
        assert_eq!(contents(&files.outputs), "");
    }

    #[test]
    fn empty_input_yields_empty_outputs() {
        let (_dir, files) = setup("empty_input_yields_empty_outputs", Some(""));
        run(&files, false).unwrap();
        assert_eq!(contents(&files.csparse), "");
        assert_eq!(contents(&files.keyimages), "");
        assert_eq!(contents(&files.outputs), "");
    }

    #[test]
    fn strict_rejects_missing_input() {
        let (_dir, files) = setup("strict_rejects_missing_input", None);
        assert!(run(&files, true).is_err());
        assert!(!files.csparse.exists());
        assert!(!files.keyimages.exists());
        assert!(!files.outputs.exists());
    }

    #[test]
    fn prefixed_files() {
        let dir = TempDir::new("prefixed_files").unwrap();
        let files = FileNames::new("99", Some("ringct")).within(dir.path());
        File::create(dir.path().join("ringct-edges-99.txt")).unwrap().write_all(b"4 4\n").unwrap();
        run(&files, false).unwrap();
        assert_eq!(contents(&dir.path().join("ringct-csparse-edges-99.txt")), "0 0 1\n");
        assert_eq!(contents(&dir.path().join("ringct-index-keyimageid-map-99.txt")), "0 4\n");
        assert_eq!(contents(&dir.path().join("ringct-index-outputid-map-99.txt")), "0 4\n");
    }

    #[test]
    fn reruns_are_identical() {
        let (_dir, files) = setup("reruns_are_identical", Some("5 1\n3 1\n5 8\n-2 8\n"));
        run(&files, false).unwrap();
        let first = (contents(&files.csparse), contents(&files.keyimages), contents(&files.outputs));
        run(&files, false).unwrap();
        let second = (contents(&files.csparse), contents(&files.keyimages), contents(&files.outputs));
        assert_eq!(first, second);
    }

    #[test]
    fn random_graph_round_trips() {
        let mut rng = StdRng::seed_from_u64(1541236);
        let edges: Vec<(i64, i64)> = (0..2000).map(|_| (rng.gen_range(0..300), rng.gen_range(1_000_000..1_000_500))).collect();
        let text: String = edges.iter().map(|&(a, b)| format!("{} {}\n", a, b)).collect();

        let (_dir, files) = setup("random_graph_round_trips", Some(&text[..]));
        let summary = run(&files, false).unwrap();
        assert_eq!(summary.edges, edges.len());

        let weighted = decode::read_weighted_edges(BufReader::new(File::open(&files.csparse).unwrap())).unwrap();
        let keyimages = decode::read_index_map(BufReader::new(File::open(&files.keyimages).unwrap())).unwrap();
        let outputs = decode::read_index_map(BufReader::new(File::open(&files.outputs).unwrap())).unwrap();

        assert_eq!(weighted.len(), edges.len());
        assert!(weighted.iter().all(|&(_, _, weight)| weight == 1));
        assert_eq!(keyimages.len(), summary.keyimages);
        assert_eq!(outputs.len(), summary.outputs);
        assert_eq!(decode::restore(&weighted, &keyimages, &outputs).unwrap(), edges);
    }
}
