use plinth_core::{
    DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, HashTableError,
    HashTableErrorCode, TreeArrayError, TreeArrayErrorCode,
};
use rstest::rstest;

#[rstest]
#[case(HashTableError::KeyNotFound, HashTableErrorCode::KeyNotFound, "HASH_TABLE_KEY_NOT_FOUND")]
#[case(
    HashTableError::InvalidCapacity { capacity: 0 },
    HashTableErrorCode::InvalidCapacity,
    "HASH_TABLE_INVALID_CAPACITY",
)]
fn returns_expected_hash_table_code(
    #[case] error: HashTableError,
    #[case] expected: HashTableErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), text);
    assert_eq!(expected.to_string(), text);
}

#[rstest]
#[case(
    DisjointSetError::ElementNotTracked { element: 3 },
    DisjointSetErrorCode::ElementNotTracked,
)]
#[case(
    DisjointSetError::ElementAlreadyTracked { element: 3 },
    DisjointSetErrorCode::ElementAlreadyTracked,
)]
fn returns_expected_disjoint_set_code(
    #[case] error: DisjointSetError,
    #[case] expected: DisjointSetErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert!(error.code().as_str().starts_with("DSU_"));
}

#[rstest]
#[case(GraphError::VertexNotFound { vertex: 1 }, GraphErrorCode::VertexNotFound, None)]
#[case(
    GraphError::VertexAlreadyExists { vertex: 1 },
    GraphErrorCode::VertexAlreadyExists,
    None,
)]
#[case(
    GraphError::EdgeAlreadyExists { left: 1, right: 2 },
    GraphErrorCode::EdgeAlreadyExists,
    None,
)]
#[case(GraphError::EdgeNotFound { left: 1, right: 2 }, GraphErrorCode::EdgeNotFound, None)]
#[case(
    GraphError::NegativeWeight { left: 1, right: 2, weight: -3 },
    GraphErrorCode::NegativeWeight,
    None,
)]
#[case(GraphError::SelfLoop { vertex: 4 }, GraphErrorCode::SelfLoop, None)]
#[case(
    GraphError::TargetUnreachable { from: 0, to: 5 },
    GraphErrorCode::TargetUnreachable,
    None,
)]
#[case(
    GraphError::WeightOverflow { total: i64::MAX, weight: 1 },
    GraphErrorCode::WeightOverflow,
    None,
)]
#[case(
    GraphError::InvariantViolation { invariant: "test" },
    GraphErrorCode::InvariantViolation,
    None,
)]
#[case(
    GraphError::HashTable(HashTableError::KeyNotFound),
    GraphErrorCode::HashTableFailure,
    Some(HashTableErrorCode::KeyNotFound),
)]
#[case(
    GraphError::DisjointSet(DisjointSetError::ElementNotTracked { element: 0 }),
    GraphErrorCode::DisjointSetFailure,
    None,
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] inner: Option<HashTableErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert!(error.code().as_str().starts_with("GRAPH_"));
    assert_eq!(error.hash_table_code(), inner);
}

#[test]
fn wrapped_errors_convert_and_keep_their_source() {
    let error: GraphError = DisjointSetError::ElementNotTracked { element: 9 }.into();
    assert_eq!(
        error.to_string(),
        "disjoint-set failure: element 9 is not tracked by the disjoint-set union"
    );
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn tree_array_error_reports_index_and_length() {
    let error = TreeArrayError::IndexOutOfRange { index: 7, len: 3 };
    assert_eq!(error.code(), TreeArrayErrorCode::IndexOutOfRange);
    assert_eq!(error.code().as_str(), "TREE_ARRAY_INDEX_OUT_OF_RANGE");
    assert_eq!(error.to_string(), "index 7 is out of range for length 3");
}
