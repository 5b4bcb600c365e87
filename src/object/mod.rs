mod frame;
mod kind;

pub mod tree;

pub use frame::Frame;
pub use kind::ObjectKind;

pub const SPACE_BYTE: u8 = b' ';
pub const NULL_BYTE: u8 = b'\0';
