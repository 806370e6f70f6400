use gameboard::{BitBoard, BitBoardError};

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
    assert!(bb.get(0, 4).is_err());
}

#[test]
fn test_index_access() {
    let mut bb = BitBoard::<u128, 10>::new();
    bb.set(2, 3).unwrap();
    assert!(bb.get_index(23));
    assert!(!bb.get_index(24));
    assert!(!bb.get_index(1000));
    assert!(bb.set(10, 0).is_err());

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_iter_set_bits() {
    let mut bb = BitBoard::<u16, 4>::new();
    bb.set(3, 3).unwrap();
    bb.set(0, 1).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_display() {
    let mut bb = BitBoard::<u8, 2>::new();
    bb.set(0, 1).unwrap();
    assert_eq!(bb.to_string(), "□ ■ \n□ □ ");
}
