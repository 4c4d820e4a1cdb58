use corpusbot::corpus::{Corpus, Error, Written};
use corpusbot::export;
use std::fs;
use tempfile::tempdir;

// Exercises the on-disk layout a run produces: a directory of post files
// next to a CSV table, both named after the subreddit.

#[test]
fn it_lays_out_the_corpus_next_to_the_table() {
    let output = tempdir().unwrap();
    let corpus = Corpus::create(output.path().join("PrequelMemes")).expect("could not create corpus");

    assert_eq!(
        corpus.write("lkx8qv", "Hello there!", "General Kenobi!").unwrap(),
        Written::Created
    );
    assert_eq!(
        corpus.write("lkx8qv", "Hello there!", "General Kenobi!").unwrap(),
        Written::AlreadyPresent
    );

    let table = output.path().join("PrequelMemes.csv");
    export::write_csv(&table, &[]).expect("could not write table");

    assert!(output.path().join("PrequelMemes").join("lkx8qv.txt").is_file());
    let header = fs::read_to_string(&table).unwrap();
    assert_eq!(
        header.trim_end(),
        ",post_id,search term,post_title,time,link_flair,num_upvotes,upvote_ratio,num_comments,post text"
    );
}

#[test]
fn it_does_not_merge_into_an_earlier_run() {
    let output = tempdir().unwrap();
    let dir = output.path().join("PrequelMemes");
    Corpus::create(&dir).expect("could not create corpus");

    let err = Corpus::create(&dir).unwrap_err();
    assert!(matches!(err, Error::DirectoryExists(_)));
    assert!(err.to_string().contains("already exists"));
}
