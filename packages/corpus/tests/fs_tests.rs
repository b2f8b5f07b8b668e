use autocompaste_corpus::{
    index_directory, index_sources, load_manifest, CorpusError, FsDocumentSource,
};
use autocompaste_engine::Index;
use std::fs;
use tempfile::TempDir;

fn write_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("texts")).unwrap();
    fs::write(
        dir.path().join("texts/moby.txt"),
        "Call me Ishmael. Some years ago, never mind how long precisely.\n\nIt is a way I have.",
    )
    .unwrap();
    fs::write(
        dir.path().join("texts/tale.txt"),
        "It was the best of times. It was the worst of times.",
    )
    .unwrap();
    fs::write(
        dir.path().join("texts.json"),
        r#"[
            { "title": "Moby Dick", "url": "texts/moby.txt" },
            { "title": "Missing", "url": "texts/missing.txt" },
            { "title": "A Tale of Two Cities", "url": "texts/tale.txt" },
            { "title": "No url" }
        ]"#,
    )
    .unwrap();
    dir
}

#[test]
fn test_load_manifest_and_index_from_disk() {
    let dir = write_corpus();
    let manifest = dir.path().join("texts.json");

    let sources = load_manifest(&manifest).unwrap();
    assert_eq!(sources.len(), 3);

    let mut index = Index::new();
    let report = index_sources(&mut index, &FsDocumentSource::for_manifest(&manifest), &sources);

    assert_eq!(report.indexed, vec!["Moby Dick", "A Tale of Two Cities"]);
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        &report.failed[0].1,
        CorpusError::Unreadable { title, .. } if title == "Missing"
    ));

    assert_eq!(index.paragraphs("Moby Dick").unwrap().len(), 2);
    let results = index.search("ishmael");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].sentence, "Call me Ishmael.");
}

#[test]
fn test_missing_manifest_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = load_manifest(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(CorpusError::Io(_))));
}

#[test]
fn test_index_directory() {
    let dir = write_corpus();
    fs::write(dir.path().join("texts/notes.md"), "Not a text source.").unwrap();

    let mut index = Index::new();
    let indexed = index_directory(&mut index, dir.path()).unwrap();

    assert_eq!(indexed, vec!["moby", "tale"]);
    assert!(index.contains("moby"));
    assert!(!index.contains("notes"));
    assert_eq!(index.search("worst")[0].document_id, "tale");
}

#[test]
fn test_index_directory_requires_directory() {
    let dir = TempDir::new().unwrap();
    let mut index = Index::new();
    assert!(index_directory(&mut index, &dir.path().join("absent")).is_err());
}
