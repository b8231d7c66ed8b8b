use funcol_core::{Array, ArrayList, Contiguous, Error, Iter, IterMut};
use pretty_assertions::assert_eq;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn from_literal_keeps_order() {
    let array = Array::from([3, 1, 2]);
    assert_eq!(array.len(), 3);
    assert_eq!(array, [3, 1, 2]);
}

#[test]
fn new_value_initializes() {
    let array = Array::<String>::new(2);
    assert_eq!(array, [String::new(), String::new()]);
}

#[test]
fn empty_array() {
    let array = Array::<u8>::new(0);
    assert!(array.is_empty());
    assert_eq!(array.first(), None);
    assert_eq!(array.iter().next(), None);
    assert_eq!(array.begin(), array.end());
    assert_eq!(array.rbegin(), array.rend());
}

#[test]
fn from_slice_copies() {
    let source = vec![String::from("a"), String::from("b")];
    let array = Array::from_slice(&source);
    assert_eq!(array, ["a", "b"]);
}

#[test]
fn from_range_copies_the_delimited_elements() {
    let source = Array::from([1, 2, 3, 4, 5]);
    let (mut first, last) = source.iter().cursors();
    first.inc();
    let middle = Array::from_range(unsafe { Iter::from_cursors(first, last) });
    assert_eq!(middle, [2, 3, 4, 5]);

    let reversed = Array::from_range(source.iter_rev());
    assert_eq!(reversed, [5, 4, 3, 2, 1]);
}

#[test]
fn from_range_of_another_container() {
    let list = ArrayList::from([7, 8, 9]);
    let array = Array::from_range(list.iter());
    assert_eq!(array, [7, 8, 9]);
}

// =============================================================================
// Copy and move
// =============================================================================

#[test]
fn clone_is_independent() {
    let original = Array::from([1, 2, 3]);
    let mut copy = original.clone();
    copy[0] = 100;
    assert_eq!(original[0], 1);
    assert_eq!(copy[0], 100);
    assert_ne!(original.as_ptr(), copy.as_ptr());
}

#[test]
fn take_moves_storage_and_empties_source() {
    let mut source = Array::from([1, 2, 3, 4]);
    let ptr = source.as_ptr();
    let moved = source.take();

    assert_eq!(moved.len(), 4);
    assert_eq!(moved.as_ptr(), ptr);
    assert_eq!(moved, [1, 2, 3, 4]);
    assert_eq!(source.len(), 0);
    assert!(source.is_empty());
}

// =============================================================================
// Access
// =============================================================================

#[test]
fn at_within_bounds() {
    let mut array = Array::from([10, 20, 30]);
    for i in 0..3 {
        assert_eq!(array.at(i), Ok(&((i as i32 + 1) * 10)));
    }
    *array.at_mut(1).unwrap() = 25;
    assert_eq!(array[1], 25);
}

#[test]
fn at_out_of_bounds_reports_index() {
    let mut array = Array::from([10, 20, 30]);
    assert_eq!(array.at(3), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(
        array.at_mut(99).unwrap_err(),
        Error::IndexOutOfBounds { index: 99, len: 3 }
    );
}

#[test]
fn front_and_back() {
    let array = Array::from([4, 5, 6]);
    unsafe {
        assert_eq!(*array.front(), 4);
        assert_eq!(*array.back(), 6);
    }
    assert_eq!(array.first(), Some(&4));
    assert_eq!(array.last(), Some(&6));
}

#[test]
fn data_points_at_first_element() {
    let array = Array::from([42u16, 7]);
    assert_eq!(unsafe { *array.as_ptr() }, 42);
}

// =============================================================================
// Iteration
// =============================================================================

#[test]
fn forward_cursor_loop() {
    let array = Array::from([1, 2, 3]);
    let (mut it, end) = (array.begin(), array.end());
    let mut seen = Vec::new();
    while it != end {
        seen.push(unsafe { *it.post_inc().get() });
    }
    assert_eq!(seen, [1, 2, 3]);
}

#[test]
fn reverse_iteration() {
    let array = Array::from([1, 2, 3]);
    let seen: Vec<_> = array.iter_rev().copied().collect();
    assert_eq!(seen, [3, 2, 1]);
}

#[test]
fn iteration_is_restartable() {
    let array = Array::from([1, 2, 3]);
    let first: i32 = array.iter().sum();
    let second: i32 = array.iter().sum();
    assert_eq!(first, second);
}

#[test]
fn mutable_cursors_write_in_place() {
    let mut array = Array::from([1, 2, 3]);
    let (mut it, end) = array.rbounds_mut();
    let mut next = 0;
    while it != end {
        next += 1;
        unsafe { it.post_inc().write(next) };
    }
    assert_eq!(array, [3, 2, 1]);
}

#[test]
fn iter_mut_and_into_iterator() {
    let mut array = Array::from([1, 2, 3]);
    for value in &mut array {
        *value *= 2;
    }
    let mut total = 0;
    for value in &array {
        total += value;
    }
    assert_eq!(total, 12);
}

// =============================================================================
// Functional operations
// =============================================================================

#[test]
fn for_each_visits_in_order() {
    let array = Array::from([10, 20, 30]);
    let mut sum = 0;
    let mut order = Vec::new();
    array.for_each(|n| {
        sum += n;
        order.push(*n);
    });
    assert_eq!(sum, 60);
    assert_eq!(order, [10, 20, 30]);
}

#[test]
fn map_preserves_length_and_receiver() {
    let array = Array::from([1, 2, 3]);
    let squares = array.map(|n| n * n);
    assert_eq!(squares.len(), array.len());
    assert_eq!(squares, [1, 4, 9]);
    assert_eq!(array, [1, 2, 3]);
}

#[test]
fn map_can_change_element_type() {
    let array = Array::from([1, 22, 333]);
    let lengths = array.map(|n| n.to_string()).map(String::len);
    assert_eq!(lengths, [1, 2, 3]);
}

#[test]
fn map_to_output_cursor() {
    let array = Array::from([1, 2, 3]);
    let mut out = ArrayList::from([0; 5]);
    let (first, _) = out.bounds_mut();
    let end = unsafe { array.map_to(first, |n| n + 100) };
    let written = unsafe { end.as_cursor().as_ptr().offset_from(out.as_ptr()) };
    assert_eq!(written, 3);
    assert_eq!(out, [101, 102, 103, 0, 0]);
}

#[test]
fn map_to_reverse_output_cursor() {
    let array = Array::from([1, 2, 3]);
    let mut out = Array::<i32>::new(3);
    let (first, _) = out.rbounds_mut();
    unsafe { array.map_to(first, |n| n * 10) };
    assert_eq!(out, [30, 20, 10]);
}

#[test]
fn map_to_range_is_bounded() {
    let array = Array::from([1, 2, 3, 4, 5]);
    let mut small = Array::<i32>::new(2);
    assert_eq!(array.map_to_range(small.iter_mut(), |n| -n), 2);
    assert_eq!(small, [-1, -2]);

    let mut large = Array::<i32>::new(7);
    assert_eq!(array.map_to_range(large.iter_mut(), |n| -n), 5);
    assert_eq!(large, [-1, -2, -3, -4, -5, 0, 0]);
}

#[test]
fn map_to_range_through_explicit_cursors() {
    let array = Array::from([1, 2]);
    let mut out = Array::from([0, 0, 0, 0]);
    let (mut first, last) = out.bounds_mut();
    first.inc();
    let range: IterMut<'_, i32> = unsafe { IterMut::from_cursors(first, last) };
    assert_eq!(array.map_to_range(range, |n| *n), 2);
    assert_eq!(out, [0, 1, 2, 0]);
}

#[test]
fn filter_keeps_matches_in_order() {
    let array = Array::from([1, 2, 3, 4, 5]);
    let evens = array.filter(|n| n % 2 == 0);
    assert_eq!(evens.len(), 2);
    assert_eq!(evens, [2, 4]);
    assert_eq!(array.len(), 5);
}

#[test]
fn filter_all_and_none() {
    let array = Array::from(["x", "y"]);
    assert_eq!(array.filter(|_| true), array);
    assert!(array.filter(|_| false).is_empty());
}

#[test]
fn debug_formats_as_list() {
    let array = Array::from([1, 2]);
    assert_eq!(format!("{array:?}"), "[1, 2]");
}
