// handlers/mod.rs - one module per resource
//
// Handlers stay thin: extractors do the parsing and validation, the handler
// body calls into models/catalog/users and returns `ApiResult<T>`.

pub mod files;
pub mod items;
pub mod login;
pub mod offers;
pub mod products;
pub mod root;
pub mod unicorns;
pub mod users;
