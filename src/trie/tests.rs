use super::{MatchOptions, Trie};
use crate::{ByteStream, FieldResult, SliceStream, Status};

fn run<T: Clone>(trie: &Trie<T>, input: &str, ignore_case: bool) -> (bool, usize, FieldResult<T>) {
    let mut stream = SliceStream::from(input);
    let mut res = FieldResult::new(0);
    let hit = trie.match_stream(&mut stream, &mut res, MatchOptions::default().ignore_case(ignore_case));
    (hit, stream.position(), res)
}

#[test]
fn every_candidate_matches_followed_by_a_stop_byte() {
    let candidates = ["NA", "N/A", "NULL", "nan", "-", "missing", "n"];
    let trie: Trie<usize> = candidates.iter().enumerate().map(|(i, s)| (*s, i)).collect();

    for (i, candidate) in candidates.iter().enumerate() {
        let input = format!("{candidate},rest");
        let (hit, consumed, res) = run(&trie, &input, false);

        assert!(hit, "{candidate} should match");
        assert_eq!(consumed, candidate.len(), "consumed for {candidate}");
        assert_eq!(res.value, Some(i), "value for {candidate}");
        assert_eq!(res.status, Status::OK);
    }
}

#[test]
fn non_matching_input_rolls_back_exactly() {
    let trie = Trie::new(["NA", "NULL", "none"]);
    let cases = ["", "x", "N", "NU", "NUL", "NUx", "no", "non", "nonx", "A"];

    for input in cases {
        let mut stream = SliceStream::from(input);
        let mut res: FieldResult<()> = FieldResult::new(0);
        assert!(!trie.detect(&mut stream, &mut res, false), "{input:?} should not match");
        assert_eq!(stream.position(), 0, "{input:?} should not consume");
        assert_eq!(res, FieldResult::new(0));
    }
}

#[test]
fn rollback_is_relative_to_the_attempt_start() {
    let trie = Trie::new(["abc"]);
    let mut stream = SliceStream::from("xxab");
    stream.seek(2);
    let mut res: FieldResult<()> = FieldResult::new(2);

    assert!(!trie.detect(&mut stream, &mut res, false));
    assert_eq!(stream.position(), 2);
}

#[test]
fn greedy_match_with_fallback() {
    let trie = Trie::from_pairs([("ab", "ab"), ("abc", "abc")]);

    // (input, matched value, consumed)
    let cases: Vec<(&str, Option<&str>, usize)> = vec![
        ("abx", Some("ab"), 2),
        ("abc", Some("abc"), 3),
        ("abcd", Some("abc"), 3),
        ("ab", Some("ab"), 2),
        ("a", None, 0),
        ("ax", None, 0),
    ];

    for (input, expected, consumed) in cases {
        let (hit, pos, res) = run(&trie, input, false);
        assert_eq!(hit, expected.is_some(), "hit for {input:?}");
        assert_eq!(res.value, expected, "value for {input:?}");
        assert_eq!(pos, consumed, "consumed for {input:?}");
    }
}

#[test]
fn fallback_leaves_unmatched_byte_for_the_next_reader() {
    let trie = Trie::new(["ab", "abc"]);
    let mut stream = SliceStream::from("abx");
    let mut res: FieldResult<()> = FieldResult::new(0);

    assert!(trie.detect(&mut stream, &mut res, false));
    assert_eq!(res.last_byte, Some(b'b'));
    assert_eq!(stream.read_byte(), Some(b'x'));
}

#[test]
fn case_insensitive_fallback_reports_the_node_label() {
    let trie = Trie::new(["ab", "abc"]);

    let (hit, pos, res) = run(&trie, "ABx", true);
    assert!(hit);
    assert_eq!(pos, 2);
    assert_eq!(res.last_byte, Some(b'b'));

    // Running out of input keeps the byte actually read.
    let (hit, pos, res) = run(&trie, "AB", true);
    assert!(hit);
    assert_eq!(pos, 2);
    assert_eq!(res.last_byte, Some(b'B'));

    let (_, _, res) = run(&trie, "ABC", true);
    assert_eq!(res.last_byte, Some(b'C'));
}

#[test]
fn fallback_only_reaches_the_node_just_consumed() {
    // "a" is terminal but "abc" fails at "x" one level below "ab", which is
    // not terminal: the whole attempt fails.
    let trie = Trie::new(["a", "abc"]);
    let (hit, pos, _) = run(&trie, "abx", false);
    assert!(!hit);
    assert_eq!(pos, 0);

    let (hit, pos, _) = run(&trie, "ax", false);
    assert!(hit);
    assert_eq!(pos, 1);
}

#[test]
fn case_insensitive_matching() {
    let trie = Trie::from_pairs([("true", true), ("false", false)]);

    let (hit, pos, res) = run(&trie, "TRUE", true);
    assert!(hit);
    assert_eq!(pos, 4);
    assert_eq!(res.value, Some(true));

    let (hit, pos, res) = run(&trie, "FaLsE", true);
    assert!(hit);
    assert_eq!(pos, 5);
    assert_eq!(res.value, Some(false));

    let (hit, pos, res) = run(&trie, "TRUE", false);
    assert!(!hit);
    assert_eq!(pos, 0);
    assert_eq!(res.value, None);
}

#[test]
fn case_folding_is_ascii_only() {
    let trie = Trie::new(["é"]);
    let (hit, _, _) = run(&trie, "É", true);
    assert!(!hit);
}

#[test]
fn empty_string_trie_matches_anything_without_consuming() {
    let trie = Trie::new([""]);

    for input in ["", "abc", ","] {
        let mut stream = SliceStream::from(input);
        let mut res: FieldResult<()> = FieldResult::new(0);
        assert!(trie.detect(&mut stream, &mut res, false), "{input:?}");
        assert_eq!(stream.position(), 0);
        assert_eq!(res.status, Status::empty());
    }
}

#[test]
fn at_end_stream_fails_for_non_empty_trie() {
    let trie = Trie::new(["x"]);
    let mut stream = SliceStream::from("x");
    stream.seek(1);
    let mut res: FieldResult<()> = FieldResult::new(1);

    assert!(!trie.detect(&mut stream, &mut res, false));
    assert_eq!(stream.position(), 1);
}

#[test]
fn shared_trie_across_threads() {
    let trie = std::sync::Arc::new(Trie::from_pairs([("NA", 1u8), ("NULL", 2u8)]));

    let handles: Vec<_> = ["NA,", "NULL,", "nope"]
        .into_iter()
        .map(|input| {
            let trie = std::sync::Arc::clone(&trie);
            std::thread::spawn(move || {
                let mut stream = SliceStream::from(input);
                let mut res: FieldResult<u8> = FieldResult::new(0);
                trie.match_stream(&mut stream, &mut res, MatchOptions::default());
                res.value
            })
        })
        .collect();

    let values: Vec<Option<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(values, vec![Some(1), Some(2), None]);
}
