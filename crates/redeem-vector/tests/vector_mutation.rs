//! Integration tests for construction, accessors and the mutating operations.

use redeem_vector::{vector, Vector, VectorConfig, VectorError, DEFAULT_MAX_SIZE};

// ---------------------------------------------------------------------------
// Construction and accessors
// ---------------------------------------------------------------------------

#[test]
fn construction_sets_capacity_to_twice_plus_one() {
    let v = vector![1, 2, 3];
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 7);
    assert_eq!(v.max_size(), DEFAULT_MAX_SIZE);
    assert!(!v.is_empty());
    assert!(v.is_truthy());
}

#[test]
fn empty_vector() {
    let v: Vector<f64> = vector![];
    assert!(v.is_empty());
    assert!(!v.is_truthy());
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 1);
    assert_eq!(v, Vector::default());
}

#[test]
fn constructors_agree() {
    let from_vec = Vector::from_vec(vec![1.5, 2.5]);
    let from_slice = Vector::from(&[1.5, 2.5][..]);
    let collected: Vector<f64> = vec![1.5, 2.5].into_iter().collect();
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec, collected);
    assert_eq!(Vector::<i32>::zeros(3), vector![0, 0, 0]);
    assert_eq!(Vector::<i32>::ones(2), vector![1, 1]);
    assert_eq!(Vector::from_elem(2, 7i64), vector![7, 7]);
}

#[test]
fn indexing_scenario() {
    let v = vector![1, 2, 3];
    assert_eq!(v[1], 2);
    assert_eq!(v.get(1), Ok(2));
    assert_eq!(
        v.get(3),
        Err(VectorError::IndexOutOfRange { index: 3, bound: 3 })
    );
    assert_eq!(v.first(), Some(&1));
    assert_eq!(v.last(), Some(&3));
}

#[test]
fn iteration() {
    let v = vector![1, 2, 3];
    let doubled: Vec<i32> = (&v).into_iter().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
    let owned: Vec<i32> = v.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
}

#[test]
fn textual_rendering() {
    let v = vector![1, 2, 3];
    assert_eq!(format!("{}", v), "(1, 2, 3)");
    assert_eq!(format!("{:?}", v), "Vector(1, 2, 3)");
    assert_eq!(v.repr(), "Vector(1, 2, 3)");
}

// ---------------------------------------------------------------------------
// push_back / pop_back
// ---------------------------------------------------------------------------

#[test]
fn push_back_grows_geometrically() {
    let mut v: Vector<i64> = Vector::empty();
    let mut capacities = Vec::new();
    for i in 0..9 {
        v.push_back(i).unwrap();
        assert!(v.capacity() >= v.len());
        capacities.push(v.capacity());
    }
    assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(v.growth_events(), 4);
}

#[test]
fn pop_back_returns_last() {
    let mut v = vector![1, 2, 3];
    assert_eq!(v.pop_back(), Ok(3));
    assert_eq!(v, vector![1, 2]);
    assert_eq!(v.capacity(), 7);
}

#[test]
fn cleared_vector_cannot_pop() {
    let mut v: Vector<i32> = Vector::empty();
    v.clear();
    assert!(v.is_empty());
    assert_eq!(v.pop_back(), Err(VectorError::EmptyContainer));
}

#[test]
fn push_back_at_max_size_fails() {
    let config = VectorConfig::new(3).unwrap();
    let mut v = Vector::with_config(vec![1, 2, 3], &config).unwrap();
    assert_eq!(
        v.push_back(4),
        Err(VectorError::CapacityOverflow {
            requested: 4,
            max_size: 3
        })
    );
    assert_eq!(v, vector![1, 2, 3]);
    assert_eq!(v.capacity(), 7);
}

// ---------------------------------------------------------------------------
// insert / erase
// ---------------------------------------------------------------------------

#[test]
fn insert_shifts_right() {
    let mut v = vector![1, 3];
    v.insert(1, 2).unwrap();
    assert_eq!(v, vector![1, 2, 3]);
    v.insert(0, 0).unwrap();
    assert_eq!(v, vector![0, 1, 2, 3]);
}

#[test]
fn insert_at_len_appends() {
    let mut v = vector![1, 2];
    let len = v.len();
    v.insert(len, 3).unwrap();
    assert_eq!(v.len(), len + 1);
    assert_eq!(v, vector![1, 2, 3]);
}

#[test]
fn insert_past_len_fails() {
    let mut v = vector![1, 2];
    let len = v.len();
    assert_eq!(
        v.insert(len + 1, 9),
        Err(VectorError::IndexOutOfRange {
            index: 3,
            bound: 3
        })
    );
    assert_eq!(v, vector![1, 2]);
}

#[test]
fn insert_grows_capacity_when_full() {
    let mut v: Vector<i32> = Vector::empty();
    v.insert(0, 1).unwrap();
    v.insert(0, 2).unwrap();
    assert_eq!(v, vector![2, 1]);
    assert_eq!(v.capacity(), 2);
    v.insert(1, 3).unwrap();
    assert_eq!(v.capacity(), 4);
    assert_eq!(v, vector![2, 3, 1]);
}

#[test]
fn erase_shifts_left() {
    let mut v = vector![1, 2, 3, 4];
    assert_eq!(v.erase(1), Ok(2));
    assert_eq!(v, vector![1, 3, 4]);
}

#[test]
fn erase_at_len_fails() {
    let mut v = vector![1, 2, 3];
    let len = v.len();
    assert_eq!(
        v.erase(len),
        Err(VectorError::IndexOutOfRange { index: 3, bound: 3 })
    );
    assert_eq!(v, vector![1, 2, 3]);
}

// ---------------------------------------------------------------------------
// resize
// ---------------------------------------------------------------------------

#[test]
fn resize_truncates_and_extends() {
    let mut v = vector![1, 2, 3, 4];
    v.resize(2, &[]).unwrap();
    assert_eq!(v, vector![1, 2]);

    v.resize(5, &[7, 8, 9, 10]).unwrap();
    assert_eq!(v, vector![1, 2, 7, 8, 9]);
    assert_eq!(v.capacity(), 9);
}

#[test]
fn resize_without_enough_fill_values_fails() {
    let mut v = vector![1, 2];
    assert_eq!(
        v.resize(5, &[0]),
        Err(VectorError::InsufficientFillValues {
            needed: 3,
            provided: 1
        })
    );
    assert_eq!(v, vector![1, 2]);
}

#[test]
fn resize_past_max_size_fails_first() {
    let config = VectorConfig::new(3).unwrap();
    let mut v = Vector::with_config(vec![1.0], &config).unwrap();
    assert_eq!(
        v.resize(4, &[]),
        Err(VectorError::CapacityOverflow {
            requested: 4,
            max_size: 3
        })
    );
    assert_eq!(v.len(), 1);
}

// ---------------------------------------------------------------------------
// swap / clear
// ---------------------------------------------------------------------------

#[test]
fn swap_scenario() {
    let mut a = vector![1, 2, 3];
    let mut b = vector![4, 5, 6];
    a.swap(&mut b).unwrap();
    assert_eq!(a, vector![4, 5, 6]);
    assert_eq!(b, vector![1, 2, 3]);
}

#[test]
fn swap_exchanges_capacity_and_is_an_involution() {
    let mut a = vector![1, 2];
    let mut b = vector![3];
    b.push_back(4).unwrap();
    b.push_back(5).unwrap();
    b.push_back(6).unwrap();
    let (a_cap, b_cap) = (a.capacity(), b.capacity());

    a.swap(&mut b).unwrap();
    assert_eq!(a.capacity(), b_cap);
    assert_eq!(b.capacity(), a_cap);
    assert_eq!(a, vector![3, 4, 5, 6]);

    a.swap(&mut b).unwrap();
    assert_eq!(a, vector![1, 2]);
    assert_eq!(b, vector![3, 4, 5, 6]);
    assert_eq!((a.capacity(), b.capacity()), (a_cap, b_cap));
}

#[test]
fn clear_resets_capacity() {
    let mut v = vector![1, 2, 3];
    v.clear();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 1);
    assert_eq!(v.to_string(), "()");
    v.push_back(1).unwrap();
    assert_eq!(v.capacity(), 1);
}
