pub mod diagnostics;

pub use diagnostics::DiagnosticsRepository;
