use keysmith::rng::{Csprng, EntropySource, OsEntropy};

#[test]
fn test_csprng_deterministic_from_seed() {
    let mut rng1 = Csprng::from_seed([0x42u8; 32]);
    let mut rng2 = Csprng::from_seed([0x42u8; 32]);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_csprng_different_seeds_differ() {
    let mut rng1 = Csprng::from_seed([0x01u8; 32]);
    let mut rng2 = Csprng::from_seed([0x02u8; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_rekey_changes_output() {
    let mut rng = Csprng::from_seed([0xAAu8; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_not_all_zero() {
    let mut rng = Csprng::from_seed([0u8; 32]);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_csprng_from_os_is_unpredictable() {
    let mut rng1 = Csprng::from_os().unwrap();
    let mut rng2 = Csprng::from_os().unwrap();

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    rng1.fill(&mut a).unwrap();
    rng2.fill(&mut b).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_os_entropy_fills_large_buffers() {
    let mut buf = vec![0u8; 4096];
    OsEntropy.fill(&mut buf).unwrap();

    assert!(buf.iter().any(|&b| b != 0));
}
