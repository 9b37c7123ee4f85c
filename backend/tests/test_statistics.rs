//! Statistical sanity checks on fixed seeds

use mtrand_core_rs::{Bounds, Generator};

#[test]
fn test_mean_of_raw_words_near_midpoint() {
    let mut rng = Generator::with_seed(5489);
    let n = 100_000u64;
    let sum: u64 = (0..n).map(|_| u64::from(rng.next_uint32())).sum();
    let mean = sum as f64 / n as f64;
    let midpoint = 2f64.powi(31);

    let relative_error = (mean - midpoint).abs() / midpoint;
    assert!(
        relative_error < 0.01,
        "mean {} deviates {:.4}% from 2^31",
        mean,
        relative_error * 100.0
    );
}

#[test]
fn test_chi_square_uniformity_over_256_buckets() {
    let mut rng = Generator::with_seed(5489);
    let draws = 256_000usize;
    let mut counts = [0usize; 256];
    for _ in 0..draws {
        counts[rng.next_int(Bounds::Below(256)).unwrap() as usize] += 1;
    }

    let expected = draws as f64 / 256.0;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // Critical value for 255 degrees of freedom at p = 0.001
    assert!(chi_square < 330.52, "chi-square {} too large", chi_square);
}

#[test]
fn test_float_mean_near_half() {
    let mut rng = Generator::with_seed(2024);
    let n = 100_000;
    let mean: f64 = (0..n).map(|_| rng.next_f64()).sum::<f64>() / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "float mean {} not near 0.5", mean);
}

#[test]
fn test_every_bit_position_toggles() {
    let mut rng = Generator::with_seed(77);
    let mut ones = [0u32; 32];
    let n = 10_000;
    for _ in 0..n {
        let word = rng.next_uint32();
        for (bit, count) in ones.iter_mut().enumerate() {
            *count += (word >> bit) & 1;
        }
    }
    for (bit, count) in ones.iter().enumerate() {
        let ratio = f64::from(*count) / f64::from(n);
        assert!(
            (0.45..0.55).contains(&ratio),
            "bit {} set in {:.3} of draws",
            bit,
            ratio
        );
    }
}
