/// Copy of `items` with `new_items` inserted at `index`; past the end they are appended.
///
/// - `[1, 2, 3, 4]`, 2, `[8, 9]` => `[1, 2, 8, 9, 3, 4]`
/// - `[1, 2]`, 5, `[8, 9]` => `[1, 2, 8, 9]`
pub fn insert_into_array<T: Clone>(items: &[T], index: usize, new_items: &[T]) -> Vec<T> {
    let (head, tail) = items.split_at(index.min(items.len()));
    let mut out = Vec::with_capacity(items.len() + new_items.len());
    out.extend_from_slice(head);
    out.extend_from_slice(new_items);
    out.extend_from_slice(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_array() {
        assert_eq!(insert_into_array(&[1, 2, 3, 4], 2, &[8, 9]), vec![1, 2, 8, 9, 3, 4]);
        assert_eq!(insert_into_array(&[1, 2], 5, &[8, 9]), vec![1, 2, 8, 9]);
        assert_eq!(insert_into_array(&[1, 2], 0, &[8]), vec![8, 1, 2]);
        assert_eq!(insert_into_array(&["a"], 1, &[]), vec!["a"]);
    }
}
