//! Prebuilt assertion pipes for the pet endpoints

use petcheck_common::{check, ApiError, AssertPipe, Pet, PetIdParam};

pub const ID_EQUALS: &str = "idEquals";
pub const NAME_EQUALS: &str = "nameEquals";
pub const STATUS_EQUALS: &str = "statusEquals";
pub const PHOTOS_CONTAINED: &str = "photosContained";
pub const CATEGORIES_EQUALS: &str = "categoriesEquals";
pub const TAGS_EQUAL: &str = "tagsEqual";

pub const ERROR_CODE_EQUALS: &str = "errorCodeEquals";
pub const ERROR_TYPE_EQUALS: &str = "errorTypeEquals";
pub const MESSAGE_SHOULD_CONTAIN: &str = "messageShouldContain";

/// Field-by-field comparison of a sent pet against the one the server returned.
///
/// Photo URLs are compared by containment since the server may keep URLs
/// from earlier writes.
pub fn default_pet_pipe() -> AssertPipe<Pet, Pet> {
    AssertPipe::new()
        .register(ID_EQUALS, |req: &Pet, res: &Pet| check::equals(&req.id, &res.id))
        .register(NAME_EQUALS, |req: &Pet, res: &Pet| check::equals(&req.name, &res.name))
        .register(STATUS_EQUALS, |req: &Pet, res: &Pet| {
            check::equals(&req.status, &res.status)
        })
        .register(PHOTOS_CONTAINED, |req: &Pet, res: &Pet| {
            check::contains_all(&req.photo_urls, &res.photo_urls)
        })
        .register(CATEGORIES_EQUALS, |req: &Pet, res: &Pet| {
            check::equals(&req.categories, &res.categories)
        })
        .register(TAGS_EQUAL, |req: &Pet, res: &Pet| check::equals(&req.tags, &res.tags))
}

/// Checks an error body against expectations fixed at construction.
///
/// The message is matched by substring because the server's wording is
/// not stable.
pub fn error_pipe(
    expected_code: i64,
    expected_type: impl Into<String>,
    message_fragment: impl Into<String>,
) -> AssertPipe<PetIdParam, ApiError> {
    let expected_type = expected_type.into();
    let message_fragment = message_fragment.into();

    AssertPipe::new()
        .register(ERROR_CODE_EQUALS, move |_: &PetIdParam, res: &ApiError| {
            check::equals(&expected_code, &res.code)
        })
        .register(ERROR_TYPE_EQUALS, move |_: &PetIdParam, res: &ApiError| {
            check::equals(&expected_type, &res.kind)
        })
        .register(MESSAGE_SHOULD_CONTAIN, move |_: &PetIdParam, res: &ApiError| {
            check::contains_str(&res.message, &message_fragment)
        })
}
