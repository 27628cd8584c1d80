pub mod advisory;
pub mod assistant;
pub mod rules;
pub mod session;
pub mod synthesizer;

pub use advisory::AdvisoryService;
pub use assistant::{respond, QuickQuestion};
pub use rules::{evaluate_risks, RiskEvaluator};
pub use session::SessionStore;
