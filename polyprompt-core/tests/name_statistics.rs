use polyprompt_core::i18n::Language;
use polyprompt_core::names::{NameJoin, NamePool, generate_random_name, generate_random_name_with};
use rand::SeedableRng;
use rand::rngs::StdRng;

const DRAWS: usize = 20_000;

/// Chi-square statistic of observed counts against a uniform expectation
fn chi_square(counts: &[usize], total: usize) -> f64 {
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Generous acceptance bound: mean plus six standard deviations
fn chi_square_bound(bins: usize) -> f64 {
    let df = (bins - 1) as f64;
    df + 6.0 * (2.0 * df).sqrt()
}

#[test]
fn index_draws_are_uniform() {
    for (seed, language) in Language::ALL.into_iter().enumerate() {
        let pool = NamePool::for_language(language);
        let mut rng = StdRng::seed_from_u64(1000 + seed as u64);
        let mut prefix_counts = vec![0usize; pool.prefixes().len()];
        let mut suffix_counts = vec![0usize; pool.suffixes().len()];
        for _ in 0..DRAWS {
            let (prefix, suffix) = pool.draw_indices(&mut rng);
            prefix_counts[prefix] += 1;
            suffix_counts[suffix] += 1;
        }

        let prefix_stat = chi_square(&prefix_counts, DRAWS);
        let suffix_stat = chi_square(&suffix_counts, DRAWS);
        assert!(
            prefix_stat < chi_square_bound(prefix_counts.len()),
            "{language} prefix chi-square {prefix_stat}"
        );
        assert!(
            suffix_stat < chi_square_bound(suffix_counts.len()),
            "{language} suffix chi-square {suffix_stat}"
        );
    }
}

#[test]
fn generated_names_come_from_own_pools() {
    let mut rng = StdRng::seed_from_u64(7);
    for language in Language::ALL {
        let pool = NamePool::for_language(language);
        for _ in 0..DRAWS {
            let name = generate_random_name_with(&mut rng, language);
            assert!(!name.is_empty());
            assert!(pool.decompose(&name).is_some(), "{name} is not a {language} name");
        }
    }
}

#[test]
fn space_joined_names_have_exactly_one_space() {
    let pool = NamePool::for_language(Language::Arabic);
    assert_eq!(pool.join(), NameJoin::Space);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..DRAWS {
        let name = pool.generate(&mut rng);
        assert_eq!(name.matches(' ').count(), 1, "{name}");
        let (prefix, suffix) = name.split_once(' ').expect("separator");
        assert!(pool.prefixes().iter().any(|token| *token == prefix));
        assert!(pool.suffixes().iter().any(|token| *token == suffix));
    }
}

#[test]
fn concatenated_pairs_split_back_uniquely() {
    for language in [Language::Chinese, Language::English] {
        let pool = NamePool::for_language(language);
        assert_eq!(pool.join(), NameJoin::Concatenate);
        for (p, prefix) in pool.prefixes().iter().enumerate() {
            for (s, suffix) in pool.suffixes().iter().enumerate() {
                let name = pool.compose_at(p, s).expect("indices in range");
                assert!(!name.contains(' '));
                assert_eq!(pool.decompose(&name), Some((*prefix, *suffix)), "{name}");
            }
        }
    }
}

#[test]
fn thread_local_generator_produces_names() {
    for language in Language::ALL {
        let name = generate_random_name(language);
        assert!(NamePool::for_language(language).decompose(&name).is_some());
    }
}
