use super::*;

#[test]
fn compare_lanes_test() {
    assert!(compare_lanes(&[1, 2, 3], &[1, 2, 3]));
    assert!(!compare_lanes(&[1, 2, 3], &[1, 2]));
    //+0.0 and -0.0 are different bits
    assert!(!compare_lanes(&[0x0000_0000], &[0x8000_0000]));
    assert!(compare_lanes(&[], &[]));
}

#[test]
fn suite_exit_code_test() {
    let mut suite = TestSuite::init("all pass");
    assert!(suite.test("first", true));
    assert!(suite.compare("second", 0x7fffffff, 0x7fffffff));
    assert_eq!(suite.done(), 0);
    assert_eq!(suite.passed(), 2);

    let mut suite = TestSuite::init("one fails");
    suite.test("first", true);
    assert!(!suite.compare("second", 0x7e00, 0x7fff));
    //a failure does not stop later checks
    assert!(suite.test("third", true));
    assert_eq!(suite.done(), 1);
    assert_eq!(suite.failed(), 1);
    assert_eq!(suite.mismatches(), &[Mismatch {
        test: "second".to_string(),
        lane: None,
        expected: 0x7e00,
        actual: 0x7fff,
    }]);
}

#[test]
fn lane_mismatch_test() {
    let mut suite = TestSuite::init("lanes");
    assert!(!suite.compare_lanes("vadd", &[1, 2, 3, 4], &[1, 5, 3]));
    let lanes: Vec<Option<usize>> = suite.mismatches().iter().map(|m| m.lane).collect();
    assert_eq!(lanes, vec![Some(1), Some(3)]);
    assert_eq!(suite.mismatches()[1].expected, 4);
    assert_eq!(suite.mismatches()[1].actual, 0);
    let summary = suite.summary();
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn skip_test() {
    let mut suite = TestSuite::init("host");
    suite.skip("paddh.s16", "not supported");
    assert!(suite.compare("add", 2, 2));
    assert_eq!((suite.passed(), suite.failed(), suite.skipped()), (1, 0, 1));
    assert_eq!(suite.done(), 0);
}
