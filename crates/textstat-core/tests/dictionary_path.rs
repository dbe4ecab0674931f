//! The dictionary base path is process-wide, so these tests live in their
//! own binary and run one at a time under a lock.

use std::fs;
use std::sync::Mutex;

use camino::Utf8PathBuf;
use tempfile::TempDir;
use textstat_core::dictionaries::default_dictionary_path;
use textstat_core::{
    AnalysisError, TextStat, dictionary_override, dictionary_path, reset_dictionary_path,
    set_dictionary_path,
};

static PATH_MUTEX: Mutex<()> = Mutex::new(());

const TEXT: &str = "The committee reviewed every proposal carefully.";

fn word_dir(words: &str) -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("en_us.txt"), words).unwrap();
    let base = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
    (tmp, base)
}

#[test]
fn override_and_reset() {
    let _lock = PATH_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    set_dictionary_path("/some/other/path");
    assert_eq!(dictionary_path(), Utf8PathBuf::from("/some/other/path"));

    set_dictionary_path("/last/write/wins");
    assert_eq!(dictionary_path(), Utf8PathBuf::from("/last/write/wins"));

    reset_dictionary_path();
    assert_eq!(dictionary_path(), default_dictionary_path());
    assert!(dictionary_override().is_none());
}

#[test]
fn reset_goes_back_to_the_compiled_in_list() {
    let _lock = PATH_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let (_tmp, base) = word_dir("the\ncommittee\nreviewed\nevery\nproposal\ncarefully\n");
    set_dictionary_path(base.clone());
    let overridden = TextStat::default().difficult_words(TEXT);
    reset_dictionary_path();
    let bundled = TextStat::default().difficult_words(TEXT);

    assert_eq!(overridden.unwrap(), 0);
    // committee, reviewed, proposal, carefully
    assert_eq!(bundled.unwrap(), 4);
}

#[test]
fn override_applies_to_engines_not_yet_loaded() {
    let _lock = PATH_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    // every word is easy: nothing is difficult
    let (_tmp, base) = word_dir("the\ncommittee\nreviewed\nevery\nproposal\ncarefully\n");
    set_dictionary_path(base.clone());
    let stat = TextStat::default();
    let difficult = stat.difficult_words(TEXT);
    reset_dictionary_path();

    assert_eq!(difficult.unwrap(), 0);
}

#[test]
fn loaded_engine_keeps_its_word_set() {
    let _lock = PATH_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    reset_dictionary_path();

    let stat = TextStat::default();
    let before = stat.difficult_words(TEXT).unwrap();

    let (_tmp, base) = word_dir("the\ncommittee\nreviewed\nevery\nproposal\ncarefully\n");
    set_dictionary_path(base.clone());
    let after = stat.difficult_words(TEXT);
    let fresh = TextStat::default().difficult_words(TEXT);
    reset_dictionary_path();

    assert_eq!(after.unwrap(), before);
    assert_eq!(fresh.unwrap(), 0);
}

#[test]
fn missing_list_fails_on_first_use() {
    let _lock = PATH_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let tmp = TempDir::new().unwrap();
    let empty = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
    set_dictionary_path(empty);
    let stat = TextStat::default();
    let counted = stat.lexicon_count(TEXT, true);
    let result = stat.difficult_words(TEXT);
    reset_dictionary_path();

    assert_eq!(counted, 6);
    assert!(matches!(result, Err(AnalysisError::DictionaryNotFound { .. })));
}
