use std::fmt;

/// A non-fatal problem found while converting a document.
///
/// Warnings never change the generated output; they are logged when raised
/// and handed back to the caller alongside the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Two definitions differ only in letter case and will collide on
    /// case-insensitive file systems.
    CaseCollision { name: String, existing: String },
    /// An operation has neither a summary nor a description.
    DocumentationIncomplete { operation: String },
    /// More than one scheme is declared; only the first one is used.
    MultipleSchemes { used: String, declared: Vec<String> },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::CaseCollision { name, existing } => write!(
                f,
                "definitions {existing} and {name} only differ in case; \
                 their files will overwrite each other on case-insensitive file systems"
            ),
            Warning::DocumentationIncomplete { operation } => {
                write!(f, "summary and description missing for {operation}")
            }
            Warning::MultipleSchemes { used, declared } => write!(
                f,
                "multiple schemes detected ({}) but not supported, using: {used}",
                declared.join(", ")
            ),
        }
    }
}

/// Collects warnings for a single conversion run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and log it.
    pub fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
