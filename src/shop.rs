//! Level packages and the purchase confirmation step.
//!
//! Payment happens outside the game; the caller only reports whether it
//! went through.

use crate::error::{GameError, Result};
use crate::model::PlayerRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Package {
    pub levels: u32,
    /// Price in rubles.
    pub price: u32,
    pub popular: bool,
}

pub const PACKAGES: &[Package] = &[
    Package { levels: 5, price: 199, popular: false },
    Package { levels: 10, price: 349, popular: true },
    Package { levels: 25, price: 799, popular: false },
    Package { levels: 50, price: 1499, popular: false },
];

pub fn package(index: usize) -> Result<Package> {
    PACKAGES
        .get(index)
        .copied()
        .ok_or(GameError::UnknownPackage(index))
}

/// Outcome of a purchase confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Purchase {
    Completed { record: PlayerRecord, levels: u32 },
    Declined,
}

/// Grant the package when payment was confirmed.
pub fn complete_purchase(record: &PlayerRecord, pkg: Package, confirmed: bool) -> Purchase {
    if confirmed {
        Purchase::Completed {
            record: record.grant_levels(pkg.levels),
            levels: pkg.levels,
        }
    } else {
        Purchase::Declined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_lookup() {
        assert_eq!(package(1).unwrap().levels, 10);
        assert!(package(1).unwrap().popular);
        assert!(matches!(package(4), Err(GameError::UnknownPackage(4))));
    }

    #[test]
    fn confirmed_purchase_grants_levels() {
        let record = PlayerRecord::default();
        let pkg = package(0).unwrap();
        match complete_purchase(&record, pkg, true) {
            Purchase::Completed { record, levels } => {
                assert_eq!(levels, 5);
                assert_eq!(record.level, 6);
                // floor(100 * 1.5^5) = floor(759.375)
                assert_eq!(record.xp_to_next_level, 759);
            }
            Purchase::Declined => panic!("expected a completed purchase"),
        }
    }

    #[test]
    fn declined_purchase_changes_nothing() {
        let record = PlayerRecord::default();
        assert_eq!(
            complete_purchase(&record, package(3).unwrap(), false),
            Purchase::Declined
        );
    }
}
