/// Error handling tests for invalid constructions and out-of-range indices
///
/// Failures must surface synchronously with a message naming the offending
/// value, and must leave prior state exactly as it was before the call.
use percolate::monte_carlo::PercolationStats;
use percolate::percolation::Percolation;
use percolate::union_find::UnionFind;

#[test]
fn test_zero_grid_dimension_rejected() {
    let err = Percolation::new(0).unwrap_err();
    assert!(
        err.to_string().contains("greater than 0"),
        "unexpected message: {err}"
    );
}

#[test]
fn test_estimator_construction_validation() {
    assert!(PercolationStats::new(0, 10).is_err());
    assert!(PercolationStats::new(10, 0).is_err());
    assert!(PercolationStats::with_seed(0, 10, 1).is_err());

    let err = PercolationStats::new(10, 0).unwrap_err();
    assert!(
        err.to_string().contains("trial count"),
        "unexpected message: {err}"
    );
}

#[test]
fn test_open_bounds_checked_on_all_edges() {
    for n in [1, 5] {
        let mut grid = Percolation::new(n).unwrap();
        assert!(grid.open(0, 1).is_err());
        assert!(grid.open(n + 1, 1).is_err());
        assert!(grid.open(1, 0).is_err());
        assert!(grid.open(1, n + 1).is_err());
    }
}

#[test]
fn test_query_bounds_checked() {
    let mut grid = Percolation::new(3).unwrap();
    assert!(grid.is_open(4, 1).is_err());
    assert!(grid.is_open(1, 0).is_err());
    assert!(grid.is_full(0, 2).is_err());
    assert!(grid.is_full(2, 4).is_err());
}

#[test]
fn test_bounds_error_names_the_offending_index() {
    let mut grid = Percolation::new(3).unwrap();

    let err = grid.open(4, 1).unwrap_err();
    assert!(
        err.to_string().contains("row index 4 out of bounds"),
        "unexpected message: {err}"
    );

    let err = grid.open(1, 9).unwrap_err();
    assert!(
        err.to_string().contains("col index 9 out of bounds"),
        "unexpected message: {err}"
    );
}

#[test]
fn test_failed_open_leaves_grid_untouched() {
    let mut grid = Percolation::new(2).unwrap();
    grid.open(1, 1).unwrap();

    assert!(grid.open(3, 1).is_err());
    assert!(grid.open(1, 3).is_err());

    assert_eq!(grid.number_of_open_sites(), 1);
    assert!(grid.is_full(1, 1).unwrap());
    assert!(!grid.percolates());
}

#[test]
fn test_union_find_index_errors_preserve_state() {
    let mut uf = UnionFind::new(4);
    uf.union(0, 1).unwrap();

    assert!(uf.union(0, 4).is_err());
    assert!(uf.union(7, 1).is_err());
    assert!(uf.find(4).is_err());
    assert!(uf.connected(0, 9).is_err());

    assert_eq!(uf.component_count(), 3);
    assert!(uf.connected(0, 1).unwrap());

    let err = uf.find(4).unwrap_err();
    assert!(
        err.to_string().contains("out of bounds"),
        "unexpected message: {err}"
    );
}
