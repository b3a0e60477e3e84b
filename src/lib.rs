mod macros;
pub(crate) use macros::getter;

mod node;
pub use node::Node;

mod base;
pub use base::Base;

mod link;
pub use link::Link;

mod object;
pub use object::Object;

mod actor;
pub use actor::Actor;

pub mod vocab;
pub use vocab::{classify, convert_type, Classification};

mod convert;
pub use convert::{convert, As1Object, ConvertError};
pub use convert::custom::{register_custom_copier, CustomCopier};
