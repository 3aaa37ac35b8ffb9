use std::path::{Path, PathBuf};

/// The four files one run touches, all named after a shared suffix
/// (typically a block height) and an optional prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileNames {
    pub edges:     PathBuf,     // input: <keyimage_id> <output_id>
    pub csparse:   PathBuf,     // output: <keyimage_index> <output_index> 1
    pub keyimages: PathBuf,     // output: <index> <keyimage_id>
    pub outputs:   PathBuf,     // output: <index> <output_id>
}

impl FileNames {
    pub fn new(suffix: &str, prefix: Option<&str>) -> FileNames {
        FileNames {
            edges:     name(prefix, "edges", suffix).into(),
            csparse:   name(prefix, "csparse-edges", suffix).into(),
            keyimages: name(prefix, "index-keyimageid-map", suffix).into(),
            outputs:   name(prefix, "index-outputid-map", suffix).into(),
        }
    }

    /// Roots every path in `dir`.
    pub fn within<P: AsRef<Path>>(self, dir: P) -> FileNames {
        let dir = dir.as_ref();
        FileNames {
            edges:     dir.join(self.edges),
            csparse:   dir.join(self.csparse),
            keyimages: dir.join(self.keyimages),
            outputs:   dir.join(self.outputs),
        }
    }
}

fn name(prefix: Option<&str>, stem: &str, suffix: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}-{}-{}.txt", prefix, stem, suffix),
        None => format!("{}-{}.txt", stem, suffix),
    }
}

#[test]
fn names_without_prefix() {
    let files = FileNames::new("1541236", None);
    assert_eq!(files.edges, PathBuf::from("edges-1541236.txt"));
    assert_eq!(files.csparse, PathBuf::from("csparse-edges-1541236.txt"));
    assert_eq!(files.keyimages, PathBuf::from("index-keyimageid-map-1541236.txt"));
    assert_eq!(files.outputs, PathBuf::from("index-outputid-map-1541236.txt"));
}

#[test]
fn names_with_prefix() {
    let files = FileNames::new("1541236", Some("ringct"));
    assert_eq!(files.edges, PathBuf::from("ringct-edges-1541236.txt"));
    assert_eq!(files.csparse, PathBuf::from("ringct-csparse-edges-1541236.txt"));
    assert_eq!(files.keyimages, PathBuf::from("ringct-index-keyimageid-map-1541236.txt"));
    assert_eq!(files.outputs, PathBuf::from("ringct-index-outputid-map-1541236.txt"));
}

#[test]
fn suffix_is_opaque() {
    // not interpreted as a number; an empty prefix still contributes its dash
    let files = FileNames::new("tip", Some(""));
    assert_eq!(files.edges, PathBuf::from("-edges-tip.txt"));
    assert_eq!(files.csparse, PathBuf::from("-csparse-edges-tip.txt"));
}

#[test]
fn within_directory() {
    let files = FileNames::new("7", None).within("/data/xmr");
    assert_eq!(files.edges, PathBuf::from("/data/xmr/edges-7.txt"));
    assert_eq!(files.outputs, PathBuf::from("/data/xmr/index-outputid-map-7.txt"));
}
