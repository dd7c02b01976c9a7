//! Melting: boundary liquid and ice partially return to vapour.

use rime_core::Cell;

/// `steam += mu * liquid + gamma * ice; liquid *= 1 - mu; ice *= 1 - gamma`
pub fn melt(cell: &Cell, mu: f64, gamma: f64) -> Cell {
    Cell {
        steam: cell.steam + mu * cell.liquid + gamma * cell.ice,
        liquid: cell.liquid * (1.0 - mu),
        ice: cell.ice * (1.0 - gamma),
        ..*cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freezing::freeze;
    use proptest::prelude::*;

    #[test]
    fn moves_fractions_back_to_steam() {
        let c = Cell {
            liquid: 0.4,
            ice: 0.6,
            steam: 0.0,
            ..Cell::vapor(0.0)
        };
        let m = melt(&c, 0.5, 0.5);
        assert!((m.steam - 0.5).abs() < 1e-12);
        assert!((m.liquid - 0.2).abs() < 1e-12);
        assert!((m.ice - 0.3).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn freeze_then_melt_conserves_water(
            b in 0.0f64..1.0,
            c in 0.0f64..1.0,
            d in 0.0f64..10.0,
            kappa in 0.0f64..=1.0,
            mu in 0.0f64..=1.0,
            gamma in 0.0f64..=1.0,
        ) {
            let cell = Cell { liquid: b, ice: c, steam: d, ..Cell::vapor(0.0) };
            let out = melt(&freeze(&cell, kappa), mu, gamma);
            prop_assert!((out.total_water() - (b + c + d)).abs() < 1e-9);
            prop_assert!(out.steam >= 0.0);
        }
    }
}
