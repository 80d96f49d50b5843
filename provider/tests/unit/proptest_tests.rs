//! Property-based tests using proptest

use proptest::prelude::*;
use std::collections::BTreeSet;

use healthchecksio_provider::ordering::stabilize;
use healthchecksio_provider::resources::check::codec::{
    join_channels, join_tags, slug_from_name, split_channels, split_tags,
};

// ---------------------------------------------------------------------------
// stabilize
// ---------------------------------------------------------------------------

proptest! {
    /// 結果は remote の要素集合と一致する（重複なしの入力）
    #[test]
    fn stabilize_keeps_remote_elements(
        prior in prop::collection::vec("[a-e]", 0..8),
        remote in prop::collection::btree_set("[a-h]", 0..8),
    ) {
        let remote: Vec<String> = remote.into_iter().collect();
        let result = stabilize(&prior, &remote);

        let got: BTreeSet<_> = result.iter().collect();
        let want: BTreeSet<_> = remote.iter().collect();
        prop_assert_eq!(got, want);
        prop_assert_eq!(result.len(), remote.len());
    }

    /// remote の並べ替えは結果に影響しない
    #[test]
    fn stabilize_ignores_remote_order(
        prior in prop::collection::vec("[a-e]", 0..8),
        remote in prop::collection::btree_set("[a-h]", 0..8),
    ) {
        let forward: Vec<String> = remote.iter().cloned().collect();
        let backward: Vec<String> = remote.iter().rev().cloned().collect();
        prop_assert_eq!(stabilize(&prior, &forward), stabilize(&prior, &backward));
    }

    /// prior が remote の並べ替えなら prior がそのまま返る
    #[test]
    fn stabilize_returns_prior_permutation(
        remote in prop::collection::btree_set("[a-z]{1,4}", 0..10),
        seed in any::<u64>(),
    ) {
        let remote: Vec<String> = remote.into_iter().collect();
        let mut prior = remote.clone();
        if !prior.is_empty() {
            let len = prior.len();
            prior.rotate_left((seed as usize) % len);
        }
        prop_assert_eq!(stabilize(&prior, &remote), prior);
    }

    /// prior に無い要素は辞書順で末尾に並ぶ
    #[test]
    fn stabilize_appends_new_elements_sorted(
        remote in prop::collection::btree_set("[a-z]{1,4}", 0..10),
    ) {
        let remote: Vec<String> = remote.into_iter().rev().collect();
        let mut sorted = remote.clone();
        sorted.sort();
        let prior: Vec<String> = Vec::new();
        prop_assert_eq!(stabilize(&prior, &remote), sorted);
    }
}

// ---------------------------------------------------------------------------
// codec
// ---------------------------------------------------------------------------

proptest! {
    /// 区切り文字を含まないタグは連結・分割で元に戻る
    #[test]
    fn tags_survive_join_and_split(tags in prop::collection::vec("[a-z0-9_-]{1,8}", 0..6)) {
        prop_assert_eq!(split_tags(&join_tags(&tags)), tags);
    }

    /// チャンネルIDは連結・分割で元に戻る
    #[test]
    fn channels_survive_join_and_split(ids in prop::collection::vec(any::<u128>(), 0..5)) {
        let ids: Vec<String> = ids
            .into_iter()
            .map(|n| uuid::Uuid::from_u128(n).to_string())
            .collect();
        prop_assert_eq!(split_channels(&join_channels(&ids)), ids);
    }

    /// 空要素は連結結果に現れない
    #[test]
    fn empty_tags_are_dropped(tags in prop::collection::vec("[a-z]{0,3}", 0..6)) {
        let joined = join_tags(&tags);
        prop_assert!(!joined.starts_with(' '));
        prop_assert!(!joined.ends_with(' '));
        prop_assert!(!joined.contains("  "));
    }

    /// スラッグは許可された文字のみで、前後に`-`を持たず、`--`を含まない
    #[test]
    fn slug_is_well_formed(name in "\\PC{0,40}") {
        let slug = slug_from_name(&name);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    /// スラッグ生成は冪等
    #[test]
    fn slug_is_idempotent(name in "[A-Za-z0-9 _.-]{0,40}") {
        let once = slug_from_name(&name);
        prop_assert_eq!(slug_from_name(&once), once);
    }
}
