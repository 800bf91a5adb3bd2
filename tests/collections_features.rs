//! Tests for collections feature and related functionality

#[cfg(feature = "collections")]
mod collections_tests {
    use sugars_util::collections::{factory, Direction};
    use sugars_util::{range, range_of, ArrayCursor, CursorError, IntRange, SequenceError};

    #[test]
    fn test_collections_range_basic() {
        let r = range(0, 10);
        assert_eq!(r.len(), 10);
        assert_eq!(r.get(2), Ok(2));
        assert_eq!(r.index_of(10), None);
        assert_eq!(r.direction(), Some(Direction::Ascending));

        let down = range(10, 0);
        assert_eq!(down.get(9), Ok(1));
        assert_eq!(down.index_of(10), Some(0));
        assert_eq!(down.index_of(0), None);
    }

    #[test]
    fn test_collections_range_of() {
        assert_eq!(range_of(4).to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(range_of(-3).to_vec(), vec![0, -1, -2]);
        assert_eq!(range_of(0), IntRange::Empty);
    }

    #[test]
    fn test_collections_range_extremes() {
        let full = range(i32::MIN, i32::MAX);
        assert_eq!(full.len(), u32::MAX as usize);
        assert_eq!(full.last(), Some(i32::MAX - 1));
        assert_eq!(full.index_of(i32::MAX - 1), Some(u32::MAX as usize - 1));
        assert!(!full.contains(i32::MAX));

        let reversed = range(i32::MAX, i32::MIN);
        assert_eq!(reversed.get(0), Ok(i32::MAX));
        assert_eq!(reversed.last(), Some(i32::MIN + 1));
    }

    #[test]
    fn test_collections_range_sub_range() {
        let r = range(10, 0);
        assert_eq!(r.sub_range(2, 5).unwrap().to_vec(), vec![8, 7, 6]);
        assert_eq!(r.sub_range(0, 10), Ok(r));
        assert_eq!(r.sub_range(4, 4), Ok(IntRange::Empty));

        assert_eq!(
            r.sub_range(0, 11),
            Err(SequenceError::OutOfRange {
                name: "to_index",
                index: 11,
                size: 10,
            })
        );
        assert!(matches!(
            r.sub_range(5, 2),
            Err(SequenceError::InvertedRange { from: 5, to: 2 })
        ));
    }

    #[test]
    fn test_collections_range_immutable() {
        let r = range(0, 3);
        let err = r.push(3).unwrap_err();
        assert_eq!(err, SequenceError::Unsupported { operation: "push" });
        assert_eq!(err.to_string(), "push: this sequence cannot be modified");
        assert!(r.clear().is_err());
        assert_eq!(r.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_collections_range_iteration() {
        let r = range(5, 0);
        let collected: Vec<i32> = r.into_iter().collect();
        assert_eq!(collected, vec![5, 4, 3, 2, 1]);

        let mut sum = 0;
        for v in &r {
            sum += v;
        }
        assert_eq!(sum, 15);

        let from_std: IntRange = (2..4).into();
        assert_eq!(Vec::from(from_std), vec![2, 3]);
    }

    #[test]
    fn test_collections_range_display() {
        assert_eq!(range(0, 3).to_string(), "[0, 1, 2]");
        assert_eq!(IntRange::Empty.to_string(), "[]");
        assert_eq!(range(0, 1000).to_string(), "0..1000");
    }

    #[test]
    fn test_collections_factories() {
        let set = factory::set(vec!["a", "b", "a"]);
        assert_eq!(set.len(), 2);

        assert_eq!(factory::linked_set(vec![3, 1, 3, 2]), vec![3, 1, 2]);
        assert_eq!(factory::list(range(0, 3)), vec![0, 1, 2]);

        let map = factory::map_from_pairs(vec![(1, "one"), (2, "two")]);
        assert_eq!(map[&2], "two");

        let alternating = factory::map_from_alternating(vec!["k1", "v1", "k2", "v2"]).unwrap();
        assert_eq!(alternating["k2"], "v2");
        assert!(factory::map_from_alternating(vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_collections_factories_copy_input() {
        let mut source = vec![1, 2, 3];
        let list = factory::list(source.clone());
        source.push(4);
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_collections_array_cursor() {
        let mut data = [10, 20, 30];
        let mut cursor = ArrayCursor::new(&mut data);

        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(), Ok(&10));
        assert_eq!(cursor.next(), Ok(&20));
        assert_eq!(cursor.set(21), Ok(20));
        assert_eq!(cursor.previous(), Ok(&20));
        assert!(matches!(cursor.add(5), Err(CursorError::Sequence(_))));
        assert!(matches!(cursor.remove(), Err(CursorError::Sequence(_))));

        assert_eq!(data, [10, 21, 30]);
    }
}
