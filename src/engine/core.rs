use crate::{
    ast::Expr,
    config::Limits,
    engine::{
        complexity::score::{Complexity, score, score_expression_with_limits},
        evaluator::core::evaluate,
        parser::core::parse_with_limits,
    },
    error::{EngineError, ParseError},
    roast::{Report, Roaster, roast_or_fallback},
};

/// The expression engine, configured with a set of [`Limits`].
///
/// `Engine` holds no state beyond its limits. It is `Copy`, and every method
/// is a pure function of its arguments, so one engine can serve any number
/// of threads.
///
/// ## Example
/// ```
/// use roastulator::{config::Limits, engine::core::Engine};
///
/// let engine = Engine::new(Limits::default().with_max_input_len(16));
/// assert_eq!(engine.evaluate("(2+3)*4").unwrap(), 20.0);
/// assert!(engine.evaluate("1 + 2 + 3 + 4 + 5 + 6").unwrap_err().is_parse());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    limits: Limits,
}

impl Engine {
    /// Creates an engine enforcing `limits`.
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// The limits in force.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Parses `text` into a tree.
    ///
    /// # Errors
    /// Any `ParseError`.
    pub fn parse(&self, text: &str) -> Result<Expr, ParseError> {
        parse_with_limits(text, &self.limits)
    }

    /// Parses and evaluates `text`.
    ///
    /// # Errors
    /// `EngineError::Parse` if the text is rejected, `EngineError::Eval` if it
    /// parses but cannot be computed.
    pub fn evaluate(&self, text: &str) -> Result<f64, EngineError> {
        let expr = self.parse(text)?;
        Ok(evaluate(&expr)?)
    }

    /// Scores `text`. Never fails: unparseable text scores `0`.
    #[must_use]
    pub fn score(&self, text: &str) -> Complexity {
        score_expression_with_limits(text, &self.limits)
    }

    /// Evaluates and scores `text`, then asks `roaster` for a message.
    ///
    /// The text is parsed once and the tree shared by the evaluator and the
    /// scorer. A failing roaster does not fail the report; its message is
    /// replaced with [`FALLBACK_ROAST`](crate::roast::FALLBACK_ROAST).
    ///
    /// # Errors
    /// `EngineError` if the text does not parse or evaluate. The roaster is
    /// not consulted in that case.
    ///
    /// ## Example
    /// ```
    /// use roastulator::{engine::{complexity::level::ComplexityLevel, core::Engine},
    ///                   roast::CannedRoaster};
    ///
    /// let report = Engine::default().report("2 ** 10", &CannedRoaster).unwrap();
    /// assert_eq!(report.result, 1024.0);
    /// assert_eq!(report.complexity.score, 5);
    /// assert_eq!(report.complexity.level, ComplexityLevel::Easy);
    /// assert!(!report.roast.is_empty());
    /// ```
    pub fn report(&self, text: &str, roaster: &dyn Roaster) -> Result<Report, EngineError> {
        let expr = self.parse(text)?;
        let result = evaluate(&expr)?;
        let complexity = Complexity::from_score(score(text, &expr));
        let roast = roast_or_fallback(roaster, text, &complexity);

        Ok(Report { expression: text.to_string(),
                    result,
                    complexity,
                    roast })
    }
}
