//! Fixture builders
//!
//! Builders are plain values: every `with_*` call consumes the builder and
//! hands back the updated one, so forking a baseline is a `clone()` and
//! never aliases another scenario's fixture. `build()` performs no
//! validation; negative-path tests rely on being able to assemble records
//! the server will reject.

use crate::model::{Categories, Pet, SchemaRevision, Tag};

/// Builder for a [`Tag`]
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct TagBuilder {
    tag: Tag,
}

impl TagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.tag.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.tag.name = name.into();
        self
    }

    pub fn build(self) -> Tag {
        self.tag
    }
}

/// Builder for a [`Pet`]
#[derive(Debug, Clone)]
#[must_use]
pub struct PetBuilder {
    revision: SchemaRevision,
    pet: Pet,
}

impl PetBuilder {
    /// Start an empty pet using the given category schema
    pub fn new(revision: SchemaRevision) -> Self {
        Self {
            revision,
            pet: Pet::default(),
        }
    }

    /// Re-open a built pet for further changes.
    ///
    /// The schema revision is taken from the pet's category field, falling
    /// back to the default revision when it has none.
    pub fn from_pet(pet: Pet) -> Self {
        Self {
            revision: pet.revision().unwrap_or_default(),
            pet,
        }
    }

    pub fn revision(&self) -> SchemaRevision {
        self.revision
    }

    pub fn with_id(mut self, id: impl Into<i64>) -> Self {
        self.pet.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.pet.name = name.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.pet.status = status.into();
        self
    }

    /// Append one tag
    pub fn with_tag(self, id: i64, name: impl Into<String>) -> Self {
        let tag = TagBuilder::new().with_id(id).with_name(name).build();
        self.with_tag_value(tag)
    }

    /// Append a prebuilt tag
    pub fn with_tag_value(mut self, tag: Tag) -> Self {
        self.pet.tags.push(tag);
        self
    }

    /// Append one photo URL
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.pet.photo_urls.push(url.into());
        self
    }

    /// Set the category.
    ///
    /// Appends under [`SchemaRevision::CategoryList`], replaces under
    /// [`SchemaRevision::SingleCategory`].
    pub fn with_category(mut self, id: i64, name: impl Into<String>) -> Self {
        let tag = TagBuilder::new().with_id(id).with_name(name).build();
        self.pet.categories = match (self.revision, self.pet.categories.take()) {
            (SchemaRevision::CategoryList, Some(Categories::List(mut list))) => {
                list.push(tag);
                Some(Categories::List(list))
            }
            (SchemaRevision::CategoryList, _) => Some(Categories::List(vec![tag])),
            (SchemaRevision::SingleCategory, _) => Some(Categories::Single(tag)),
        };
        self
    }

    pub fn build(self) -> Pet {
        self.pet
    }
}
