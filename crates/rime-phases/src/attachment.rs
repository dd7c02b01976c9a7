//! Attachment: deciding whether a frontier cell joins the crystal.

use rime_core::{Cell, IterationId};
use rime_lattice::Lattice;
use rime_space::Topology;

use crate::coefficients::Coefficients;

/// What a cell sees of the crystal around it, read from the pre-commit
/// lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NeighbourCensus {
    /// Number of crystal neighbours.
    pub crystal: usize,
    /// Sum of `steam` over the crystal neighbours.
    pub crystal_steam: f64,
}

impl NeighbourCensus {
    /// Count the crystal neighbours of cell `idx`.
    pub fn take(lattice: &Lattice, topology: &Topology, idx: usize) -> Self {
        topology
            .neighbours(idx)
            .iter()
            .map(|&nb| lattice.at(nb))
            .filter(|c| c.in_crystal)
            .fold(Self::default(), |acc, c| Self {
                crystal: acc.crystal + 1,
                crystal_steam: acc.crystal_steam + c.steam,
            })
    }
}

/// Threshold rule for joining the crystal.
///
/// | crystal neighbours | attaches when |
/// |---|---|
/// | 0 | never |
/// | 1 or 2 | `liquid > beta` |
/// | 3 | `liquid >= 1`, or `crystal_steam < theta` and `liquid >= alpha` |
/// | 4 or more | always |
///
/// Crystal cells hold no steam, so `crystal_steam` is zero in any lattice
/// the simulation produces and the `theta` clause reduces to
/// `liquid >= alpha`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttachmentRule {
    /// Liquid threshold with exactly three crystal neighbours.
    pub alpha: f64,
    /// Strict liquid threshold with one or two crystal neighbours.
    pub beta: f64,
    /// Crystal-neighbour steam threshold with three crystal neighbours.
    pub theta: f64,
}

impl AttachmentRule {
    /// Evaluate the rule for a post-freezing `cell`.
    pub fn attaches(&self, cell: &Cell, census: &NeighbourCensus) -> bool {
        match census.crystal {
            0 => false,
            1 | 2 => cell.liquid > self.beta,
            3 => {
                cell.liquid >= 1.0
                    || (census.crystal_steam < self.theta && cell.liquid >= self.alpha)
            }
            _ => true,
        }
    }
}

impl From<&Coefficients> for AttachmentRule {
    fn from(c: &Coefficients) -> Self {
        Self {
            alpha: c.alpha,
            beta: c.beta,
            theta: c.theta,
        }
    }
}

/// The crystal cell a frontier cell becomes when it attaches at `iteration`:
/// all liquid freezes into ice and no vapour remains.
pub fn attach(cell: &Cell, iteration: IterationId) -> Cell {
    Cell {
        in_crystal: true,
        liquid: 0.0,
        ice: cell.ice + cell.liquid,
        steam: 0.0,
        attachment: iteration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> AttachmentRule {
        AttachmentRule::from(&Coefficients::default())
    }

    fn with_liquid(liquid: f64) -> Cell {
        Cell {
            liquid,
            ..Cell::vapor(0.0)
        }
    }

    fn census(crystal: usize) -> NeighbourCensus {
        NeighbourCensus {
            crystal,
            crystal_steam: 0.0,
        }
    }

    // ── Thresholds ──────────────────────────────────────────────

    #[test]
    fn no_crystal_neighbour_never_attaches() {
        assert!(!rule().attaches(&with_liquid(5.0), &census(0)));
    }

    #[test]
    fn one_or_two_neighbours_use_strict_beta() {
        let r = rule();
        for n in [1, 2] {
            assert!(r.attaches(&with_liquid(r.beta + 1e-9), &census(n)));
            assert!(!r.attaches(&with_liquid(r.beta), &census(n)));
        }
    }

    #[test]
    fn three_neighbours_use_alpha_inclusively() {
        let r = rule();
        assert!(r.attaches(&with_liquid(r.alpha), &census(3)));
        assert!(!r.attaches(&with_liquid(r.alpha - 1e-9), &census(3)));
    }

    #[test]
    fn three_neighbours_attach_with_unit_liquid_regardless_of_theta() {
        let r = AttachmentRule {
            theta: 0.0,
            ..rule()
        };
        assert!(r.attaches(&with_liquid(1.0), &census(3)));
        assert!(!r.attaches(&with_liquid(0.9), &census(3)));
    }

    #[test]
    fn four_or_more_neighbours_always_attach() {
        for n in 4..=6 {
            assert!(rule().attaches(&with_liquid(0.0), &census(n)));
        }
    }

    // ── Theta clause ────────────────────────────────────────────

    #[test]
    fn theta_clause_is_degenerate_on_simulated_lattices() {
        // Crystal cells never hold steam, so the census sum is always 0
        // and any positive theta is satisfied.
        let space = rime_space::HexOffset2D::new(3, 3).unwrap();
        let topo = Topology::new(space);
        let mut lat = Lattice::uniform(&space, 1.0);
        for idx in [1, 2, 3] {
            lat.set(topo.coord_of(idx), Cell::seed()).unwrap();
        }
        let c = NeighbourCensus::take(&lat, &topo, 4);
        assert_eq!(c.crystal, 3);
        assert_eq!(c.crystal_steam, 0.0);
        assert!(rule().attaches(&with_liquid(rule().alpha), &c));
    }

    #[test]
    fn theta_clause_blocks_when_crystal_steam_is_high() {
        let c = NeighbourCensus {
            crystal: 3,
            crystal_steam: 0.7,
        };
        assert!(!rule().attaches(&with_liquid(0.8), &c));
    }

    // ── Attach ──────────────────────────────────────────────────

    #[test]
    fn attach_freezes_liquid_and_records_iteration() {
        let c = Cell {
            liquid: 0.4,
            ice: 0.3,
            steam: 0.2,
            ..Cell::vapor(0.0)
        };
        let a = attach(&c, IterationId(7));
        assert!(a.in_crystal);
        assert!((a.ice - 0.7).abs() < 1e-12);
        assert_eq!(a.liquid, 0.0);
        assert_eq!(a.steam, 0.0);
        assert_eq!(a.attachment, IterationId(7));
    }
}
