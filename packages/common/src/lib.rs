pub mod list_kind;
pub mod media_type;

pub use list_kind::ListKind;
pub use media_type::MediaType;
