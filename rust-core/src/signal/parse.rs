//! Text input for signal values
//!
//! The dashboard collects samples as comma-separated text ("1,2,1").

use crate::error::SignalError;

/// Parse comma-separated samples
///
/// Whitespace around each token is ignored. Blank input yields no samples.
///
/// # Returns
/// Sample values in input order, or `SignalError::Parse` naming the first
/// token that is empty or not a number
pub fn parse_samples(text: &str) -> Result<Vec<f64>, SignalError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token.parse::<f64>().map_err(|_| SignalError::Parse {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}
