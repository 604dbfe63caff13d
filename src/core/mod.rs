pub mod filter;
pub mod form;
pub mod notify;
pub mod particles;
pub mod scroll;
pub mod trail;

pub use filter::*;
pub use form::*;
pub use notify::*;
pub use particles::*;
pub use scroll::*;
pub use trail::*;
