use wq_common::{
    collection::{
        bounded_first::BoundedFirstCollection, bounded_last::BoundedLastCollection,
        collection_options::CollectionOptions, BoundedCollection,
    },
    config::config_enums::CollectionKind,
};

pub struct CollectionUtil {}

impl CollectionUtil {
    pub fn create_collection<T: Send + 'static>(
        kind: CollectionKind,
        options: CollectionOptions<T>,
    ) -> Box<dyn BoundedCollection<T> + Send> {
        match kind {
            CollectionKind::Last => Box::new(BoundedLastCollection::from_options(options)),
            CollectionKind::First => Box::new(BoundedFirstCollection::from_options(options)),
        }
    }
}
