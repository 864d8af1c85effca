pub mod ball;
pub mod collision;
pub mod paddle;
pub mod scoring;

pub use ball::*;
pub use collision::*;
pub use paddle::*;
pub use scoring::*;
