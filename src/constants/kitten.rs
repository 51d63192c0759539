//! Default field values and user-facing messages for kitten records.

pub const DEFAULT_KITTEN_DESCRIPTION: &str = "Silly Kitten";

pub const KITTEN_CREATED_MESSAGE: &str = "The kitten is created";
pub const KITTEN_UPDATED_MESSAGE: &str = "The kitten has been updated";
pub const KITTEN_DELETED_MESSAGE: &str = "The kitten has been deleted";

pub const KITTEN_NOT_FOUND_MESSAGE: &str = "The kitten was not found";
pub const KITTEN_NAME_TAKEN_MESSAGE: &str = "A kitten with this name already exists";
