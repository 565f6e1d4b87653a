mod welcome;
pub use welcome::WelcomeView;

mod generator;
pub use generator::GeneratorView;
