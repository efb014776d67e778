//! Canonical fixtures shared by the pet scenarios

use std::ops::Range;

use rand::Rng;

use crate::builder::PetBuilder;
use crate::model::{status, PetId, SchemaRevision};

/// Range run ids are drawn from, chosen to stay clear of ids other
/// clients of the shared server tend to use.
pub const RUN_ID_RANGE: Range<i64> = 1000..100_000;

pub const DEFAULT_PET_NAME: &str = "doggieNiki";
pub const DEFAULT_TAG: (i64, &str) = (1, "myTag1");
pub const DEFAULT_CATEGORY: (i64, &str) = (1, "myCategory1");
pub const DEFAULT_PHOTO_URL: &str = "https://www.google.com/url?sa=i&url=https%3A%2F%2Fria.ru%2F20170301%2F1488412994.html&psig=AOvVaw1Pa2W13e3QUJhlVQuRuyhA&ust=1680436469450000&source=images&cd=vfe&ved=0CBAQjRxqFwoTCMD83efPiP4CFQAAAAAdAAAAABAE";

impl PetId {
    /// Draw a run id from [`RUN_ID_RANGE`]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        PetId(rng.gen_range(RUN_ID_RANGE))
    }
}

/// Produces the baseline pet every scenario starts from.
///
/// The id is fixed for the lifetime of the factory so that create, read
/// and update all address the same remote record.
#[derive(Debug, Clone, Copy)]
pub struct PetFactory {
    pet_id: PetId,
    revision: SchemaRevision,
}

impl PetFactory {
    pub fn new(pet_id: PetId, revision: SchemaRevision) -> Self {
        Self { pet_id, revision }
    }

    pub fn pet_id(&self) -> PetId {
        self.pet_id
    }

    pub fn revision(&self) -> SchemaRevision {
        self.revision
    }

    /// Builder pre-populated with the canonical valid pet
    pub fn create_default(&self) -> PetBuilder {
        PetBuilder::new(self.revision)
            .with_id(self.pet_id.get())
            .with_name(DEFAULT_PET_NAME)
            .with_status(status::AVAILABLE)
            .with_tag(DEFAULT_TAG.0, DEFAULT_TAG.1)
            .with_category(DEFAULT_CATEGORY.0, DEFAULT_CATEGORY.1)
            .with_photo_url(DEFAULT_PHOTO_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Categories, Tag};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_id_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let id = PetId::random_with(&mut rng);
            assert!(RUN_ID_RANGE.contains(&id.get()), "id {} out of range", id);
        }
    }

    #[test]
    fn test_default_pet() {
        let factory = PetFactory::new(PetId(31337), SchemaRevision::SingleCategory);
        let pet = factory.create_default().build();

        assert_eq!(pet.id, 31337);
        assert_eq!(pet.name, "doggieNiki");
        assert_eq!(pet.status, "available");
        assert_eq!(pet.tags, vec![Tag::new(1, "myTag1")]);
        assert_eq!(pet.categories, Some(Categories::Single(Tag::new(1, "myCategory1"))));
        assert_eq!(pet.photo_urls, vec![DEFAULT_PHOTO_URL.to_string()]);
    }

    #[test]
    fn test_default_pet_category_list() {
        let factory = PetFactory::new(PetId(2000), SchemaRevision::CategoryList);
        let pet = factory.create_default().build();
        assert_eq!(
            pet.categories,
            Some(Categories::List(vec![Tag::new(1, "myCategory1")]))
        );
    }

    #[test]
    fn test_each_call_is_fresh() {
        let factory = PetFactory::new(PetId(2000), SchemaRevision::SingleCategory);
        let sold = factory.create_default().with_status(status::SOLD).build();
        let fresh = factory.create_default().build();

        assert_eq!(sold.status, "sold");
        assert_eq!(fresh.status, "available");
        assert_eq!(sold.id, fresh.id);
    }
}
