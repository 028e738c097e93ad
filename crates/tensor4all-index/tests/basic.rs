use std::collections::{HashMap, HashSet};
use tensor4all_index::{Index, IndexError, IndexId, IndexType};

#[test]
fn test_default_index_is_null() {
    let i = Index::default();
    assert!(i.is_null());
    assert!(!i.is_valid());
    assert_eq!(i.id(), IndexId::NULL);
    assert_eq!(i.category(), IndexType::NullIndex);
    assert_eq!(i.dim(), 1);
    assert_eq!(i.prime_level(), 0);
    assert_eq!(i, Index::null());
}

#[test]
fn test_named_index_fields() {
    let i = Index::builder("site")
        .with_dim(4)
        .with_category(IndexType::Site)
        .with_prime_level(1)
        .build()
        .unwrap();
    assert!(i.is_valid());
    assert!(!i.id().is_null());
    assert_eq!(i.dim(), 4);
    assert_eq!(i.category(), IndexType::Site);
    assert_eq!(i.prime_level(), 1);
    assert_eq!(i.raw_name(), "site");
    assert_eq!(i.name(), "site'");
}

#[test]
fn test_new_defaults_to_link() {
    let i = Index::new("bond", 8).unwrap();
    assert_eq!(i.category(), IndexType::Link);
    assert_eq!(i.prime_level(), 0);

    let j = Index::builder("j").build().unwrap();
    assert_eq!(j.dim(), 1);
    assert_eq!(j.category(), IndexType::Link);
}

#[test]
fn test_reserved_categories_rejected() {
    assert_eq!(
        Index::new_with_category("a", 2, IndexType::All).unwrap_err(),
        IndexError::InvalidCategory(IndexType::All)
    );
    assert_eq!(
        Index::new_with_category("a", 2, IndexType::NullIndex).unwrap_err(),
        IndexError::InvalidCategory(IndexType::NullIndex)
    );
    for t in [
        IndexType::Link,
        IndexType::Site,
        IndexType::Xind,
        IndexType::Yind,
        IndexType::Zind,
        IndexType::Wind,
        IndexType::Vind,
    ] {
        assert!(Index::new_with_category("a", 2, t).is_ok());
    }
}

#[test]
fn test_zero_dimension_rejected() {
    assert_eq!(Index::new("a", 0).unwrap_err(), IndexError::InvalidDimension(0));
}

#[test]
fn test_clone_is_equal() {
    let i = Index::new("i", 3).unwrap();
    let j = i.clone();
    assert_eq!(i, i);
    assert_eq!(i, j);
    assert_eq!(i.id(), j.id());
}

#[test]
fn test_independent_indices_differ() {
    let a = Index::new_with_category("x", 2, IndexType::Site).unwrap();
    let mut b = Index::new_with_category("x", 2, IndexType::Site).unwrap();
    assert_ne!(a, b);

    b.set_prime_level(a.prime_level());
    assert_ne!(a, b);
    assert!(!a.noprime_eq(&b));
}

#[test]
fn test_clones_diverge_independently() {
    let a = Index::new("a", 2).unwrap();
    let mut b = a.clone();
    b.set_prime_level(3);
    assert_eq!(a.prime_level(), 0);
    assert_eq!(b.prime_level(), 3);
    assert_ne!(a, b);
    assert!(a.noprime_eq(&b));
}

#[test]
fn test_hash_follows_equality() {
    let a = Index::new("a", 2).unwrap();
    let mut ap = a.clone();
    ap.prime(1).unwrap();

    let mut set = HashSet::new();
    set.insert(a.clone());
    set.insert(a.clone());
    set.insert(ap.clone());
    assert_eq!(set.len(), 2);

    let mut by_index = HashMap::new();
    by_index.insert(a.clone(), "unprimed");
    by_index.insert(ap.clone(), "primed");
    assert_eq!(by_index[&a], "unprimed");
    assert_eq!(by_index[&ap], "primed");
}

#[test]
fn test_display() {
    let mut i = Index::new_with_category("s1", 4, IndexType::Site).unwrap();
    assert_eq!(i.to_string(), "s1(4)");
    i.prime(2).unwrap();
    assert_eq!(i.to_string(), "s1''(4)");
    i.set_prime_level(5);
    assert_eq!(i.to_string(), "s1'5(4)");
    assert_eq!(i.raw_name(), "s1");
}

#[test]
fn test_indices_constructed_from_threads_are_distinct() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                (0..50)
                    .map(|k| Index::new(format!("t{t}k{k}"), 2).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let mut ids = HashSet::new();
    for handle in handles {
        for index in handle.join().unwrap() {
            ids.insert(index.id());
        }
    }
    assert_eq!(ids.len(), 200);
}
