use crate::spectral::SpectralClass;
use seedrand::SeededRandom;

#[test]
fn test_class_abundance_ordering() {
    let mut rng = SeededRandom::new(42);
    let mut m_count = 0;
    let mut o_count = 0;
    for _ in 0..2000 {
        match SpectralClass::select(&mut rng) {
            SpectralClass::M => m_count += 1,
            SpectralClass::O => o_count += 1,
            _ => {}
        }
    }
    // Red dwarfs dominate the abundance table; O stars are vanishingly rare
    assert!(m_count > 1200, "M dwarfs should dominate, got {m_count}");
    assert!(o_count < 5, "O stars should be rare, got {o_count}");
}

#[test]
fn test_profiles_are_ordered_by_temperature() {
    for pair in SpectralClass::ALL.windows(2) {
        let hotter = pair[0].profile();
        let cooler = pair[1].profile();
        assert!(hotter.temperature.0 >= cooler.temperature.1);
    }
}

#[test]
fn test_display() {
    assert_eq!(SpectralClass::G.to_string(), "G");
    assert_eq!(SpectralClass::M.to_string(), "M");
}
