//! Random strings, weighted selection and shuffling

use mtrand_core_rs::{Generator, RngError, DEFAULT_CHARSET};

#[test]
fn test_rand_string_uses_default_charset() {
    let mut rng = Generator::with_seed(12345);
    let s = rng.rand_string(1000, None).unwrap();
    assert_eq!(s.len(), 1000);
    assert!(s.chars().all(|c| DEFAULT_CHARSET.contains(c)));
}

#[test]
fn test_rand_string_custom_charset() {
    let mut rng = Generator::with_seed(12345);
    let s = rng.rand_string(200, Some("01")).unwrap();
    assert!(s.chars().all(|c| c == '0' || c == '1'));
    assert!(s.contains('0') && s.contains('1'));
}

#[test]
fn test_rand_string_deterministic() {
    let mut rng1 = Generator::with_seed(4);
    let mut rng2 = Generator::with_seed(4);
    assert_eq!(
        rng1.rand_string(32, None).unwrap(),
        rng2.rand_string(32, None).unwrap()
    );
}

#[test]
fn test_rand_string_draws_one_word_per_char() {
    let mut rng = Generator::with_seed(4);
    let mut reference = Generator::with_seed(4);

    let s = rng.rand_string(5, Some("abc")).unwrap();
    let expected: String = (0..5)
        .map(|_| ['a', 'b', 'c'][(reference.next_uint32() % 3) as usize])
        .collect();
    assert_eq!(s, expected);
}

#[test]
fn test_select_random_index_follows_weights() {
    let mut rng = Generator::with_seed(12345);
    let weights = [20.0, 20.0, 10.0, 50.0];
    let n = 100_000;
    let mut distribution = [0usize; 4];

    for _ in 0..n {
        let index = rng.select_random_index(&weights).unwrap().unwrap();
        distribution[index] += 1;
    }

    for (index, (&count, &weight)) in distribution.iter().zip(weights.iter()).enumerate() {
        let percent = count as f64 / n as f64 * 100.0;
        assert!(
            (percent - weight).abs() < 1.0,
            "index {} chosen {:.2}% of the time, expected {}%",
            index,
            percent,
            weight
        );
    }
}

#[test]
fn test_select_random_index_all_zero_weights_is_uniform() {
    let mut rng = Generator::with_seed(12345);
    let weights = [0.0; 4];
    let mut distribution = [0usize; 4];

    for _ in 0..40_000 {
        let index = rng.select_random_index(&weights).unwrap().unwrap();
        distribution[index] += 1;
    }

    for count in distribution {
        assert!((9_000..11_000).contains(&count), "count {} not near 10000", count);
    }
}

#[test]
fn test_select_random_index_negative_weight_rejected() {
    let mut rng = Generator::with_seed(12345);
    assert_eq!(
        rng.select_random_index(&[1.0, -0.5]),
        Err(RngError::NegativeWeight { index: 1, weight: -0.5 })
    );
    assert_eq!(rng.cursor(), 624, "rejected call must not draw");
}

#[test]
fn test_select_random_index_nan_weight_rejected() {
    let mut rng = Generator::with_seed(12345);
    assert!(matches!(
        rng.select_random_index(&[f64::NAN]),
        Err(RngError::InvalidBoundType(_))
    ));
}

#[test]
fn test_select_random_index_overflowing_weights_rejected() {
    let mut rng = Generator::with_seed(12345);
    for _ in 0..1000 {
        assert!(matches!(
            rng.select_random_index(&[f64::MAX, f64::MAX]),
            Err(RngError::InvalidBoundType(_))
        ));
    }
    assert_eq!(rng.cursor(), 624, "rejected call must not draw");
}

#[test]
fn test_select_random_index_large_finite_weights_split_evenly() {
    let mut rng = Generator::with_seed(12345);
    let weights = [f64::MAX / 4.0, f64::MAX / 4.0];
    let mut distribution = [0usize; 2];

    for _ in 0..1000 {
        let index = rng.select_random_index(&weights).unwrap().unwrap();
        distribution[index] += 1;
    }

    for count in distribution {
        assert!((400..600).contains(&count), "count {} not near 500", count);
    }
}

#[test]
fn test_shuffle_is_permutation() {
    let mut rng = Generator::with_seed(12345);
    let input: Vec<u32> = (0..20).collect();
    let shuffled = rng.shuffle(&input).unwrap();

    assert_eq!(shuffled.len(), input.len());
    assert_ne!(shuffled, input, "20 items should not stay in order");

    let mut sorted = shuffled.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, input);
}

#[test]
fn test_shuffle_leaves_input_untouched() {
    let mut rng = Generator::with_seed(12345);
    let input = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let _ = rng.shuffle(&input).unwrap();
    assert_eq!(input, vec!["a", "b", "c"]);
}

#[test]
fn test_shuffle_deterministic() {
    let mut rng1 = Generator::with_seed(9);
    let mut rng2 = Generator::with_seed(9);
    let input: Vec<u32> = (0..50).collect();
    assert_eq!(rng1.shuffle(&input).unwrap(), rng2.shuffle(&input).unwrap());
}
