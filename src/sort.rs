//! Hybrid quicksort/insertion-sort over an index permutation, keyed by a
//! parallel (never-permuted) distance array. Ported directly from
//! Delaunator's own sort, which favors this specific median-of-three scheme
//! over `slice::sort_unstable_by` so that recursion always descends into the
//! smaller partition first, bounding stack depth to `O(log n)`.

const INSERTION_THRESHOLD: usize = 20;

/// Sorts `ids[left..=right]` by `dists[ids[k]]` ascending. `dists` itself is
/// never reordered; only the index permutation `ids` is.
pub(crate) fn quicksort(ids: &mut [usize], dists: &[f64], left: usize, right: usize) {
    if right <= left {
        return;
    }

    if right - left <= INSERTION_THRESHOLD {
        insertion_sort(ids, dists, left, right);
        return;
    }

    let median = (left + right) / 2;
    ids.swap(median, left + 1);

    if dists[ids[left]] > dists[ids[right]] {
        ids.swap(left, right);
    }
    if dists[ids[left + 1]] > dists[ids[right]] {
        ids.swap(left + 1, right);
    }
    if dists[ids[left]] > dists[ids[left + 1]] {
        ids.swap(left, left + 1);
    }

    let pivot_id = ids[left + 1];
    let pivot_dist = dists[pivot_id];

    let mut i = left + 1;
    let mut j = right;
    loop {
        loop {
            i += 1;
            if dists[ids[i]] >= pivot_dist {
                break;
            }
        }
        loop {
            j -= 1;
            if dists[ids[j]] <= pivot_dist {
                break;
            }
        }
        if j < i {
            break;
        }
        ids.swap(i, j);
    }

    ids[left + 1] = ids[j];
    ids[j] = pivot_id;

    // Recurse into the smaller partition first, iterate on the larger one,
    // so worst-case recursion depth stays O(log n). `j` can equal `left`
    // (the left partition is then empty), so guard the `j - 1` underflow.
    if right - i + 1 >= j - left {
        if j > left {
            quicksort(ids, dists, left, j - 1);
        }
        quicksort(ids, dists, i, right);
    } else {
        quicksort(ids, dists, i, right);
        if j > left {
            quicksort(ids, dists, left, j - 1);
        }
    }
}

fn insertion_sort(ids: &mut [usize], dists: &[f64], left: usize, right: usize) {
    for i in (left + 1)..=right {
        let temp = ids[i];
        let temp_dist = dists[temp];
        let mut j = i;
        while j > left && dists[ids[j - 1]] > temp_dist {
            ids[j] = ids[j - 1];
            j -= 1;
        }
        ids[j] = temp;
    }
}
