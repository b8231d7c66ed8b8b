use funcol_core::{Array, ArrayList, Contiguous, Error};
use pretty_assertions::assert_eq;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_has_default_capacity() {
    let list = ArrayList::<i32>::new();
    assert_eq!(list.len(), 0);
    assert_eq!(list.capacity(), 5);
    assert_eq!(ArrayList::<i32>::default().capacity(), 5);
}

#[test]
fn with_capacity_preallocates() {
    let list = ArrayList::<i32>::with_capacity(32);
    assert_eq!(list.len(), 0);
    assert_eq!(list.capacity(), 32);
}

#[test]
fn literal_copy_and_range_are_tight() {
    let list = ArrayList::from([1, 2, 3]);
    assert_eq!((list.len(), list.capacity()), (3, 3));

    let copy = list.clone();
    assert_eq!((copy.len(), copy.capacity()), (3, 3));

    let range = ArrayList::from_range(list.iter_rev());
    assert_eq!(range, [3, 2, 1]);
    assert_eq!(range.capacity(), 3);

    let from_slice = ArrayList::from(&[1, 2][..]);
    assert_eq!((from_slice.len(), from_slice.capacity()), (2, 2));
}

#[test]
fn clone_of_spare_list_is_tight() {
    let mut list = ArrayList::new();
    list.push(1);
    let copy = list.clone();
    assert_eq!(list.capacity(), 5);
    assert_eq!(copy.capacity(), 1);
}

// =============================================================================
// Copy and move
// =============================================================================

#[test]
fn clone_is_independent() {
    let original = ArrayList::from([1, 2, 3]);
    let mut copy = original.clone();
    copy[0] = -1;
    assert_eq!(original[0], 1);
    assert_eq!(copy[0], -1);
}

#[test]
fn take_transfers_everything() {
    let mut source = ArrayList::with_capacity(8);
    source.extend([1, 2, 3]);
    let moved = source.take();

    assert_eq!((moved.len(), moved.capacity()), (3, 8));
    assert_eq!(moved, [1, 2, 3]);
    assert_eq!((source.len(), source.capacity()), (0, 0));
}

#[test]
fn taken_source_is_still_usable() {
    let mut source = ArrayList::from([1]);
    let _moved = source.take();
    source.push(5);
    assert_eq!(source, [5]);
    assert_eq!(source.capacity(), 1);
}

// =============================================================================
// Access
// =============================================================================

#[test]
fn at_checks_live_range_not_capacity() {
    let mut list = ArrayList::with_capacity(10);
    list.push('a');
    assert_eq!(list.at(0), Ok(&'a'));
    assert_eq!(list.at(1), Err(Error::IndexOutOfBounds { index: 1, len: 1 }));
    *list.at_mut(0).unwrap() = 'b';
    assert_eq!(list[0], 'b');
}

#[test]
#[should_panic(expected = "index 5 out of bounds for length 5")]
fn index_past_len_panics() {
    let list = ArrayList::from([0; 5]);
    let _ = list[5];
}

// =============================================================================
// Growth
// =============================================================================

#[test]
fn sixth_push_doubles_capacity() {
    let mut list = ArrayList::new();
    for i in 0..5 {
        list.push(i * 10);
    }
    assert_eq!((list.len(), list.capacity()), (5, 5));

    list.push(50);
    assert_eq!(list.capacity(), 10);
    assert_eq!(list.len(), 6);
    for i in 0..6 {
        assert_eq!(list[i], i as i32 * 10);
    }
}

#[test]
fn growth_from_zero_capacity() {
    // Plain doubling would stay at zero forever; the floor makes it one.
    let mut list = ArrayList::with_capacity(0);
    assert_eq!(list.capacity(), 0);

    list.push("first");
    assert_eq!((list.len(), list.capacity()), (1, 1));

    list.push("second");
    assert_eq!((list.len(), list.capacity()), (2, 2));

    list.push("third");
    assert_eq!((list.len(), list.capacity()), (3, 4));
    assert_eq!(list, ["first", "second", "third"]);
}

#[test]
fn growth_keeps_heap_values_intact() {
    let mut list = ArrayList::with_capacity(1);
    for i in 0..100 {
        list.push(format!("value-{i}"));
    }
    assert_eq!(list.capacity(), 128);
    assert_eq!(list[0], "value-0");
    assert_eq!(list[99], "value-99");
}

// =============================================================================
// Shrink
// =============================================================================

#[test]
fn shrink_to_fit_is_idempotent() {
    let mut list = ArrayList::new();
    list.extend([1, 2, 3]);
    assert_eq!(list.capacity(), 5);

    list.shrink_to_fit();
    let once = (list.len(), list.capacity());
    list.shrink_to_fit();
    let twice = (list.len(), list.capacity());

    assert_eq!(once, (3, 3));
    assert_eq!(once, twice);
    assert_eq!(list, [1, 2, 3]);
}

#[test]
fn shrink_empty_list_releases_storage() {
    let mut list = ArrayList::<u64>::new();
    list.shrink_to_fit();
    assert_eq!(list.capacity(), 0);
    list.push(1);
    assert_eq!(list.capacity(), 1);
}

#[test]
fn push_after_shrink_grows_again() {
    let mut list = ArrayList::from([1, 2]);
    list.shrink_to_fit();
    list.push(3);
    assert_eq!(list.capacity(), 4);
}

// =============================================================================
// Iteration
// =============================================================================

#[test]
fn iteration_covers_live_range_only() {
    let mut list = ArrayList::with_capacity(10);
    list.extend([1, 2, 3]);
    assert_eq!(list.iter().len(), 3);
    assert_eq!(list.begin().distance_to(&list.end()), 3);
    assert_eq!(list.rbegin().distance_to(&list.rend()), 3);
}

#[test]
fn reverse_iteration() {
    let list = ArrayList::from([1, 2, 3]);
    let seen: Vec<_> = list.iter_rev().copied().collect();
    assert_eq!(seen, [3, 2, 1]);

    let (mut it, end) = (list.rbegin(), list.rend());
    let mut manual = Vec::new();
    while it != end {
        manual.push(unsafe { *it.get() });
        it.inc();
    }
    assert_eq!(manual, [3, 2, 1]);
}

#[test]
fn iter_rev_mut_updates() {
    let mut list = ArrayList::from([1, 2, 3]);
    for (step, value) in list.iter_rev_mut().enumerate() {
        *value += step as i32 * 100;
    }
    assert_eq!(list, [201, 102, 3]);
}

// =============================================================================
// Functional operations
// =============================================================================

#[test]
fn for_each_sums() {
    let list = ArrayList::from([10, 20, 30]);
    let mut sum = 0;
    list.for_each(|n| sum += n);
    assert_eq!(sum, 60);
}

#[test]
fn map_transforms_each_element() {
    let list = ArrayList::from([1, 2, 3, 4]);
    let doubled = list.map(|n| n * 2);
    assert_eq!(doubled.len(), list.len());
    for i in 0..list.len() {
        assert_eq!(doubled[i], list[i] * 2);
    }
}

#[test]
fn map_capacity_follows_push() {
    let mut list = ArrayList::new();
    list.push(1);
    let mapped = list.map(|n| n + 1);
    assert_eq!(mapped, [2]);
    assert_eq!(mapped.capacity(), 1);

    let empty = ArrayList::<i32>::with_capacity(0).map(|n| n + 1);
    assert_eq!((empty.len(), empty.capacity()), (0, 0));
}

#[test]
fn map_to_streams_into_array() {
    let list = ArrayList::from([1, 2, 3]);
    let mut out = Array::<String>::new(3);
    let (first, _) = out.bounds_mut();
    unsafe { list.map_to(first, |n| n.to_string()) };
    assert_eq!(out, ["1", "2", "3"]);
}

#[test]
fn map_to_range_stops_at_shorter_side() {
    let list = ArrayList::from([1, 2, 3]);
    let mut out = ArrayList::from([0; 2]);
    assert_eq!(list.map_to_range(out.iter_rev_mut(), |n| n * 3), 2);
    assert_eq!(out, [6, 3]);
}

#[test]
fn filter_returns_tight_list() {
    let list = ArrayList::from([1, 2, 3, 4, 5]);
    let evens = list.filter(|n| n % 2 == 0);
    assert_eq!(evens, [2, 4]);
    assert_eq!(evens.capacity(), 2);
}

#[test]
fn collect_and_extend() {
    let mut list: ArrayList<_> = "abc".chars().collect();
    list.extend("de".chars());
    assert_eq!(list, ['a', 'b', 'c', 'd', 'e']);
}

#[test]
fn debug_formats_as_list() {
    let list = ArrayList::from(["x"]);
    assert_eq!(format!("{list:?}"), r#"["x"]"#);
}
