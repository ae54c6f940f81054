use crate::composition::Composition;
use approx::assert_relative_eq;

#[test]
fn test_presets_sum_to_one() {
    for composition in [
        Composition::GAS_GIANT,
        Composition::ICE_GIANT,
        Composition::TERRESTRIAL,
        Composition::ROCKY,
        Composition::LAVA_WORLD,
        Composition::ICE_WORLD,
        Composition::OCEAN_WORLD,
        Composition::DWARF,
    ] {
        assert_relative_eq!(composition.total(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_empty_is_zero() {
    assert_relative_eq!(Composition::empty().total(), 0.0);
    assert_eq!(Composition::default(), Composition::empty());
}
