use crate::error::{LexError, ParseError, RuntimeError};

/// Every diagnostic collected while running one source unit.
///
/// The scanner and parser each return their own diagnostics alongside their
/// output; the driver gathers them here instead of polling shared mutable
/// state. When parse recovery leaves well-formed statements, those statements
/// are still executed, and a runtime error raised by that partial run is
/// recorded in `runtime` rather than discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    /// Lexical errors, in source order.
    pub lex:     Vec<LexError>,
    /// Parse errors, in source order, including non-fatal reports such as the
    /// argument-list cap.
    pub parse:   Vec<ParseError>,
    /// A runtime error raised while executing the recovered statements, if
    /// any.
    pub runtime: Option<RuntimeError>,
}

impl Diagnostics {
    /// Returns `true` if no lexical or parse diagnostics were collected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.lex.is_empty() && self.parse.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The failure outcome of running one source unit.
///
/// The two variants are disjoint by construction: `Syntax` is returned when
/// any lexical or parse diagnostic was collected, `Runtime` when a clean
/// program failed during evaluation. Drivers map them to distinct process
/// exit codes.
pub enum InterpretError {
    /// The source failed to scan or parse cleanly.
    Syntax(Diagnostics),
    /// The source was well-formed but evaluation raised an error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(diagnostics) => {
                let mut first = true;
                for error in &diagnostics.lex {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                    first = false;
                }
                for error in &diagnostics.parse {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                    first = false;
                }
                if let Some(error) = &diagnostics.runtime {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpretError {}
