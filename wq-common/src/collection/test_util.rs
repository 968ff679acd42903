use super::BoundedCollection;

pub fn drain<T, C: BoundedCollection<T>>(collection: &mut C) -> Vec<T> {
    let mut pulled = Vec::new();
    while let Some(item) = collection.pull_next() {
        pulled.push(item);
    }
    pulled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{
        bounded_first::BoundedFirstCollection, bounded_last::BoundedLastCollection,
        capacity::Capacity,
    };

    #[test]
    fn test_pull_order_diverges() {
        let mut last = BoundedLastCollection::with_capacity(Capacity::bounded(3));
        let mut first = BoundedFirstCollection::new(Vec::new(), Capacity::bounded(3));
        for item in ["a", "b", "c"] {
            last.insert(item);
            first.insert(item);
        }

        assert_eq!(drain(&mut last), vec!["a", "b", "c"]);
        assert_eq!(drain(&mut first), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_boxed_collections() {
        let mut collections: Vec<Box<dyn BoundedCollection<u32>>> = vec![
            Box::new(BoundedLastCollection::new(vec![1, 2, 3], Capacity::bounded(2))),
            Box::new(BoundedFirstCollection::new(vec![1, 2, 3], Capacity::bounded(2))),
        ];
        for collection in collections.iter_mut() {
            collection.insert(9);
        }

        assert_eq!(collections[0].snapshot(), vec![2, 9]);
        assert_eq!(collections[1].snapshot(), vec![1, 2, 9]);
        assert!(collections.iter().all(|c| !c.is_exhausted()));
    }
}
