mod welcome;
pub use welcome::Welcome;

mod create;
pub use create::Create;
