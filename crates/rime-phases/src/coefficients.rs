//! Physical coefficients of the growth model.

/// Attachment, melting and freezing coefficients.
///
/// All six are nominally in `[0, 1]`; range checking happens once, when the
/// simulation configuration is validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    /// Liquid threshold for attachment with exactly three crystal neighbours.
    pub alpha: f64,
    /// Liquid threshold (strict) for attachment with one or two crystal
    /// neighbours.
    pub beta: f64,
    /// Neighbour steam threshold for attachment with three crystal neighbours.
    pub theta: f64,
    /// Fraction of liquid that melts back to steam each iteration.
    pub mu: f64,
    /// Fraction of ice that melts back to steam each iteration.
    pub gamma: f64,
    /// Fraction of local steam that freezes directly to ice; the rest
    /// condenses to liquid.
    pub kappa: f64,
}

impl Coefficients {
    /// The coefficients as `(name, value)` pairs, in declaration order.
    pub fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("theta", self.theta),
            ("mu", self.mu),
            ("gamma", self.gamma),
            ("kappa", self.kappa),
        ]
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            alpha: 0.7,
            beta: 0.6,
            theta: 0.7,
            mu: 0.5,
            gamma: 0.5,
            kappa: 0.6,
        }
    }
}
