//! リスト順序の安定化
//!
//! リモートはリスト値の順序を保持しないため、読み取りのたびに順序だけが
//! 変わって見えることがある。以前の順序を優先して並べ直すことで、
//! 順序のみの差分を報告しないようにする。

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// `remote`の要素を`prior`の順序に合わせて並べ替える
///
/// 1. `prior`の順に、`remote`に含まれる要素を（重複なしで）並べる
/// 2. 残りの`remote`要素は辞書順で末尾に追加する
///
/// `prior`にしか無い要素は捨てられる。新しい要素の挿入位置は推測しない。
pub fn stabilize<T>(prior: &[T], remote: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash + Ord,
{
    let remote_set: HashSet<&T> = remote.iter().collect();
    let mut placed: HashSet<&T> = HashSet::with_capacity(remote.len());
    let mut ordered = Vec::with_capacity(remote.len());

    for item in prior {
        if remote_set.contains(item) && placed.insert(item) {
            ordered.push(item.clone());
        }
    }

    let remainder: BTreeSet<&T> = remote
        .iter()
        .filter(|item| !placed.contains(item))
        .collect();
    ordered.extend(remainder.into_iter().cloned());

    ordered
}
