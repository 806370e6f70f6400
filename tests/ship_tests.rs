use gameboard::{Orientation, Ship, ShipType, SHIPS};

#[test]
fn test_new_ship_is_undamaged() {
    let ship = Ship::new(SHIPS[2]);
    assert_eq!(ship.name(), "Destroyer");
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.is_sunk());
    for seg in 0..3 {
        assert_eq!(ship.hits_at(seg), Some(0));
    }
    assert_eq!(ship.hits_at(3), None);
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    assert!(ship.hit(1));
    assert!(!ship.is_sunk());
    assert!(ship.hit(1));
    assert_eq!(ship.hits_at(1), Some(2));
    assert!(!ship.is_sunk());
    assert!(ship.hit(0));
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_count(), 3);
}

#[test]
fn test_hit_past_last_segment_is_ignored() {
    let mut ship = Ship::with_length(2);
    assert!(!ship.hit(2));
    assert_eq!(ship.hit_count(), 0);
    assert_eq!(ship.name(), "Ship");
}

#[test]
fn test_orientation_step() {
    assert_eq!(Orientation::Horizontal.step(2, 3, 2), (2, 5));
    assert_eq!(Orientation::Vertical.step(2, 3, 2), (4, 3));
}
