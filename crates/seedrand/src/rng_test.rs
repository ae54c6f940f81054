use crate::{hash_seed, SeededRandom};
use rand::{Rng, SeedableRng};

#[test]
fn test_same_seed_same_sequence() {
    let mut a = SeededRandom::new(42);
    let mut b = SeededRandom::new(42);
    for _ in 0..1000 {
        assert_eq!(a.next(), b.next());
    }
}

#[test]
fn test_next_in_unit_interval() {
    let mut rng = SeededRandom::new(7);
    for _ in 0..10_000 {
        let x = rng.next();
        assert!((0.0..=1.0).contains(&x));
    }
}

#[test]
fn test_int_range_inclusive_bounds() {
    let mut rng = SeededRandom::new(99);
    let mut saw_min = false;
    let mut saw_max = false;
    for _ in 0..10_000 {
        let n = rng.int_range(1, 3);
        assert!((1..=3).contains(&n));
        saw_min |= n == 1;
        saw_max |= n == 3;
    }
    assert!(saw_min && saw_max);
}

#[test]
fn test_choice_covers_slice() {
    let mut rng = SeededRandom::new(5);
    let items = ["a", "b", "c", "d"];
    let mut seen = [false; 4];
    for _ in 0..1000 {
        let picked = rng.choice(&items);
        seen[items.iter().position(|i| i == picked).unwrap()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_weighted_pick_respects_weights() {
    let mut rng = SeededRandom::new(1234);
    let weights = [0.0, 10.0, 0.0];
    for _ in 0..100 {
        // Zero-weight entries before the mass can still absorb a zero roll,
        // but the heavy entry must dominate.
        let picked = rng.weighted_pick(&weights).unwrap();
        assert!(picked <= 1);
    }
    assert_eq!(rng.weighted_pick(&[]), None);
}

#[test]
fn test_string_seed_hash_is_stable() {
    assert_eq!(hash_seed("sol"), hash_seed("sol"));
    assert_ne!(hash_seed("sol"), hash_seed("kepler-90"));
    // Hashing and direct construction share one stream implementation
    let mut a = SeededRandom::from_seed_str("trappist-1");
    let mut b = SeededRandom::new(hash_seed("trappist-1"));
    for _ in 0..100 {
        assert_eq!(a.next(), b.next());
    }
}

#[test]
fn test_rand_core_interop_is_deterministic() {
    let mut a = SeededRandom::from_seed([42, 0, 0, 0]);
    let mut b = SeededRandom::new(42);
    for _ in 0..100 {
        let x: f64 = a.random();
        let y: f64 = b.random();
        assert_eq!(x, y);
        assert!((0.0..1.0).contains(&x));
    }
}
