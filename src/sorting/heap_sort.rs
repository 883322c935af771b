/// Sorts `arr` in ascending order, in place.
///
/// Not stable: equal elements may change relative order. `T: Ord` is the
/// total order precondition, so floats have to be wrapped by the caller.
pub fn heap_sort<T>(arr: &mut [T])
where
    T: Ord
{
    let size = arr.len();
    tracing::trace!(len = size, "heap_sort");
    if size <= 1 {
        return;
    }

    build_max_heap(arr, size);

    // arr[..i + 1] is a max-heap, arr[i + 1..] is already in final position
    for i in (1..size).rev() {
        arr.swap(0, i);
        heapify(arr, 0, i);
    }
}

// Last internal node is at heap_size / 2 - 1, everything after it is a leaf.
fn build_max_heap<T>(arr: &mut [T], heap_size: usize)
where
    T: Ord
{
    for i in (0..(heap_size / 2)).rev() {
        heapify(arr, i, heap_size);
    }
}

/// Sift-down of `arr[i]` within the prefix `arr[..heap_size]`.
/// Both subtrees of `i` must already be max-heaps.
fn heapify<T>(arr: &mut [T], i: usize, heap_size: usize)
where
    T: Ord
{
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < heap_size && arr[left] > arr[largest] {
        largest = left;
    }

    if right < heap_size && arr[right] > arr[largest] {
        largest = right;
    }

    if largest != i {
        arr.swap(i, largest);
        heapify(arr, largest, heap_size);
    }
}
