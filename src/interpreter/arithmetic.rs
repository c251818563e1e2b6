//! Arithmetic evaluation over extracted operands

use std::fmt;

use thiserror::Error;

use super::numbers::format_number;

/// Arithmetic operation selected by an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Verb used when asking for more operands
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Word spoken between operands
    #[must_use]
    pub const fn connective(self) -> &'static str {
        match self {
            Self::Add => " plus ",
            Self::Subtract => " minus ",
            Self::Multiply => " times ",
            Self::Divide => " divided by ",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Reasons an arithmetic command cannot be answered with a result
///
/// The display text is the spoken reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Fewer than two operands were found
    #[error("Please provide at least two numbers to {0}.")]
    InsufficientOperands(Operation),

    /// Second operand of a division is zero
    #[error("Cannot divide by zero!")]
    DivisionByZero,
}

/// A successfully evaluated calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Operation performed
    pub operation: Operation,
    /// Operands that took part, in order
    pub operands: Vec<f64>,
    /// Numeric result
    pub result: f64,
}

impl Calculation {
    /// Result as spoken: two decimals for division, shortest form otherwise
    ///
    /// Division rounds exact ties up, so 1/8 reads "0.13".
    #[must_use]
    pub fn formatted_result(&self) -> String {
        match self.operation {
            Operation::Divide => format!("{:.2}", (self.result * 100.0).round() / 100.0),
            _ => format_number(self.result),
        }
    }

    /// Spoken sentence, e.g. "2 plus 3 plus 4 equals 9"
    #[must_use]
    pub fn describe(&self) -> String {
        let operands: Vec<String> = self.operands.iter().map(|n| format_number(*n)).collect();
        format!(
            "{} equals {}",
            operands.join(self.operation.connective()),
            self.formatted_result()
        )
    }
}

/// Evaluate an operation over the extracted operands
///
/// Addition, subtraction and multiplication fold over every operand left to
/// right. Division only uses the first two.
///
/// # Errors
///
/// Returns [`CalcError::InsufficientOperands`] with fewer than two operands and
/// [`CalcError::DivisionByZero`] when the divisor is zero
#[allow(clippy::float_cmp)]
pub fn evaluate(operation: Operation, numbers: &[f64]) -> Result<Calculation, CalcError> {
    let [first, second, rest @ ..] = numbers else {
        return Err(CalcError::InsufficientOperands(operation));
    };

    let (operands, result): (Vec<f64>, f64) = match operation {
        Operation::Add => (numbers.to_vec(), numbers.iter().sum()),
        Operation::Subtract => (
            numbers.to_vec(),
            std::iter::once(second).chain(rest).fold(*first, |acc, n| acc - n),
        ),
        Operation::Multiply => (numbers.to_vec(), numbers.iter().product()),
        Operation::Divide => {
            if *second == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            (vec![*first, *second], first / second)
        }
    };

    Ok(Calculation {
        operation,
        operands,
        result,
    })
}

/// Evaluate and render the spoken reply, success or failure
#[must_use]
pub fn respond(operation: Operation, numbers: &[f64]) -> String {
    match evaluate(operation, numbers) {
        Ok(calc) => calc.describe(),
        Err(e) => {
            tracing::debug!(%operation, operands = numbers.len(), error = ?e, "calculation rejected");
            e.to_string()
        }
    }
}
