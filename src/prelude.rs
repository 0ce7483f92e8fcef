#[doc(no_inline)]
pub use crate::BaseRecord as _;
#[doc(no_inline)]
pub use crate::RecordAssembler as _;
