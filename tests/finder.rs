use proptest::prelude::*;
use wordsum::numeral::parse;
use wordsum::{find_all, Cipher, SumFinder, Triplet, WordList};

fn values(found: &[Triplet]) -> Vec<(u64, u64, u64)> {
    found
        .iter()
        .map(|t| (t.addend1.value, t.addend2.value, t.sum.value))
        .collect()
}

/// Every pair `i <= j < max / 2` whose three values spell words.
fn naive(max: i64, cipher: &Cipher, words: &WordList) -> Vec<(u64, u64, u64)> {
    let mut out = Vec::new();
    if max <= 0 {
        return out;
    }
    let half = (max / 2) as u64;
    let ok = |v: u64| words.contains(&cipher.letters_for(v));
    for i in 0..half {
        for j in i..half {
            if ok(i) && ok(j) && ok(i + j) {
                out.push((i, j, i + j));
            }
        }
    }
    out
}

#[test]
fn binary_key_scenario() {
    let cipher = Cipher::from_key("ab", false).unwrap();
    assert_eq!(cipher.letters_for(2), "ab");
    assert_eq!(cipher.letters_for(5), "aba");
    let words: WordList = ["AB", "ba", "aba"].into_iter().collect();
    // 2 ("ab") and 5 ("aba") are the only valid values; 2 + 2 spells "abb".
    assert!(find_all(8, &cipher, &words).is_empty());

    let words: WordList = ["a", "ab", "aa"].into_iter().collect();
    assert_eq!(values(&find_all(8, &cipher, &words)), vec![(1, 1, 2), (1, 2, 3)]);
    assert_eq!(values(&find_all(4, &cipher, &words)), vec![(1, 1, 2)]);
}

#[test]
fn non_positive_bound_is_empty() {
    let cipher = Cipher::from_key("wanderlust", false).unwrap();
    let words: WordList = ["w", "a", "t"].into_iter().collect();
    for max in [0, -1, -200_000, 1] {
        let stats = SumFinder::new(&cipher, &words).run(max, |_| panic!("no triplets expected"));
        assert_eq!(stats.triplets, 0);
    }
}

#[test]
fn addends_stay_below_half_bound() {
    // Digit 0 spells "t", so v + 0 = v is a triplet for every valid v < max / 2.
    let cipher = Cipher::from_key("wanderlust", false).unwrap();
    let words: WordList = ["t", "w", "wt", "ww", "aw"].into_iter().collect();
    let found = find_all(22, &cipher, &words);
    for t in &found {
        assert!(t.addend1.value < 11 && t.addend2.value < 11);
        assert!(t.sum.value < 22);
    }
    // 10 ("wt") is an addend, 11 ("ww") is not even though 0 + 11 < 22.
    assert!(values(&found).contains(&(0, 10, 10)));
    assert!(!values(&found).iter().any(|&(_, b, _)| b == 11));
}

#[test]
fn stats_count_phases() {
    let cipher = Cipher::from_key("ab", false).unwrap();
    let words: WordList = ["a", "ab", "aa", "aaa"].into_iter().collect();
    let mut seen = 0;
    let stats = SumFinder::new(&cipher, &words).run(8, |_| seen += 1);
    assert_eq!(stats.scanned, 8);
    assert_eq!(stats.valid, 4);
    assert_eq!(stats.addends, 3);
    assert_eq!(stats.triplets, seen);
}

#[test]
fn repeated_runs_are_identical() {
    let cipher = Cipher::from_key("abcd", true).unwrap();
    let words: WordList = (0..300u64).step_by(3).map(|v| cipher.letters_for(v)).collect();
    let first = find_all(600, &cipher, &words);
    let second = find_all(600, &cipher, &words);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn emitted_triplets_are_valid_and_complete(
        key_len in 2usize..=12,
        leading0 in any::<bool>(),
        seeds in proptest::collection::vec(0u64..400, 0..60),
        max in -5i64..400,
    ) {
        let key: String = "qwertyuiopas".chars().take(key_len).collect();
        let cipher = Cipher::from_key(&key, leading0).unwrap();
        let words: WordList = seeds.iter().map(|&v| cipher.letters_for(v)).collect();
        let found = find_all(max, &cipher, &words);
        let base = cipher.base();
        let mut last = None;
        for t in &found {
            for w in t.words() {
                prop_assert!(words.contains(&cipher.decode(&w.numbers).unwrap()));
                prop_assert_eq!(parse(&w.numbers, base).unwrap() as u64, w.value);
            }
            prop_assert_eq!(t.addend1.value + t.addend2.value, t.sum.value);
            prop_assert!(t.addend1.value <= t.addend2.value);
            prop_assert!((t.addend2.value as i64) < max / 2);
            prop_assert!((t.sum.value as i64) < max);
            let key = (t.addend1.value, t.addend2.value);
            prop_assert!(last.map_or(true, |l| l < key));
            last = Some(key);
        }
        prop_assert_eq!(values(&found), naive(max, &cipher, &words));
    }
}
