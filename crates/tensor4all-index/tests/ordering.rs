use std::cmp::Ordering;
use std::collections::BTreeMap;
use tensor4all_index::{prime, IdGenerator, IdGeneratorOptions, Index, IndexType};

#[test]
fn test_dimension_orders_first() {
    for _ in 0..32 {
        let mut small = Index::new("small", 2).unwrap();
        let large = Index::new("large", 4).unwrap();
        small.set_prime_level(9);
        assert!(small < large);
        assert!(large > small);
        assert_eq!(small.cmp(&large), Ordering::Less);
    }
}

#[test]
fn test_prime_level_breaks_ties() {
    let i = Index::new("i", 3).unwrap();
    let ip = prime(&i, 1).unwrap();
    let ipp = prime(&i, 2).unwrap();
    assert!(i < ip);
    assert!(ip < ipp);
    assert!(ipp > i);
    assert_eq!(i.cmp(&i.clone()), Ordering::Equal);
    assert!(!(i < i.clone()) && !(i > i.clone()));
}

#[test]
fn test_identifier_orders_equal_dimensions() {
    let mut generator = IdGenerator::new(IdGeneratorOptions::fixed(3));
    let a = Index::builder("a").with_dim(2).build_with(&mut generator).unwrap();
    let mut b = Index::builder("b").with_dim(2).build_with(&mut generator).unwrap();
    b.set_prime_level(0);

    let expected = a.id().cmp(&b.id());
    assert_eq!(a.cmp(&b), expected);

    // Prime level does not override the identifier.
    let ap = prime(&a, 10).unwrap();
    assert_eq!(ap.cmp(&b), expected);
}

#[test]
fn test_sorting_and_btree_keys() {
    let s = Index::new_with_category("s", 2, IndexType::Site).unwrap();
    let l = Index::new("l", 8).unwrap();
    let m = Index::new("m", 4).unwrap();
    let sp = prime(&s, 1).unwrap();

    let mut v = vec![l.clone(), sp.clone(), m.clone(), s.clone()];
    v.sort();
    assert_eq!(v, vec![s.clone(), sp.clone(), m.clone(), l.clone()]);

    let mut dims = BTreeMap::new();
    for index in &v {
        dims.insert(index.clone(), index.dim());
    }
    dims.insert(s.clone(), 2);
    assert_eq!(dims.len(), 4);
    assert_eq!(dims.keys().next(), Some(&s));
}
