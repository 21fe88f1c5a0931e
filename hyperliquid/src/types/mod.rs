mod de;

pub mod account;
pub mod enums;
pub mod fill;
pub mod request;

pub use account::*;
pub use enums::*;
pub use fill::*;
pub use request::*;
