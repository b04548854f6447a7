mod analyze_handler;
mod games_handler;
mod input_handler;

pub use analyze_handler::AnalyzeHandler;
pub use games_handler::GamesHandler;
pub use input_handler::InputHandler;
