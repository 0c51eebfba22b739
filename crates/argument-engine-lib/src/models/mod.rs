pub mod argument;
pub mod conjunction;
pub mod preference;
pub mod proposition;

pub use argument::*;
pub use conjunction::*;
pub use preference::*;
pub use proposition::*;
