//! Problem instance types.

use super::candidate::Candidate;
use super::INFEASIBLE;
use crate::error::GaError;

/// A catalog entry. Immutable once the problem is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub weight: u64,
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u64, price: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            price,
        }
    }
}

/// Summed price and weight of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub price: f64,
    pub weight: u64,
}

/// An item catalog plus a weight capacity.
///
/// Item order defines bit positions: gene `i` decides whether `items[i]`
/// is packed.
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: u64,
}

impl KnapsackProblem {
    /// Builds a problem instance.
    ///
    /// # Errors
    /// - [`GaError::EmptyCatalog`] if `items` is empty
    /// - [`GaError::InvalidItem`] if a price is negative or not finite
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, GaError> {
        if items.is_empty() {
            return Err(GaError::EmptyCatalog);
        }
        if let Some(bad) = items
            .iter()
            .find(|item| !item.price.is_finite() || item.price < 0.0)
        {
            return Err(GaError::InvalidItem {
                name: bad.name.clone(),
                price: bad.price,
            });
        }
        Ok(Self { items, capacity })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items, i.e. the chromosome length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Wraps `genes` in a candidate after checking its length.
    ///
    /// # Errors
    /// Returns [`GaError::LengthMismatch`] if `genes.len()` differs from
    /// the catalog size.
    pub fn candidate(&self, genes: Vec<bool>) -> Result<Candidate, GaError> {
        if genes.len() != self.items.len() {
            return Err(GaError::LengthMismatch {
                left: genes.len(),
                right: self.items.len(),
            });
        }
        Ok(Candidate::from_genes(genes))
    }

    /// Summed price and weight of the items whose gene is set.
    pub fn totals(&self, genes: &[bool]) -> Totals {
        debug_assert_eq!(genes.len(), self.items.len());
        genes
            .iter()
            .zip(&self.items)
            .filter(|(included, _)| **included)
            .fold(Totals::default(), |acc, (_, item)| Totals {
                price: acc.price + item.price,
                weight: acc.weight.saturating_add(item.weight),
            })
    }

    /// Scores a selection: total price if it fits, [`INFEASIBLE`] otherwise.
    ///
    /// Pure and deterministic; ignores any cached fitness.
    pub fn fitness_of(&self, genes: &[bool]) -> f64 {
        let totals = self.totals(genes);
        if totals.weight > self.capacity {
            INFEASIBLE
        } else {
            totals.price
        }
    }

    /// Iterator over the packed items of a selection.
    pub fn selected_items<'a>(&'a self, genes: &'a [bool]) -> impl Iterator<Item = &'a Item> + 'a {
        genes
            .iter()
            .zip(&self.items)
            .filter(|(included, _)| **included)
            .map(|(_, item)| item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> KnapsackProblem {
        KnapsackProblem::new(
            vec![
                Item::new("a", 5, 10.0),
                Item::new("b", 4, 40.0),
                Item::new("c", 6, 30.0),
                Item::new("d", 3, 50.0),
            ],
            10,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            KnapsackProblem::new(Vec::new(), 10).unwrap_err(),
            GaError::EmptyCatalog
        );
    }

    #[test]
    fn test_invalid_price_rejected() {
        let err = KnapsackProblem::new(vec![Item::new("x", 1, -2.0)], 10).unwrap_err();
        assert!(matches!(err, GaError::InvalidItem { ref name, .. } if name == "x"));

        let err = KnapsackProblem::new(vec![Item::new("y", 1, f64::NAN)], 10).unwrap_err();
        assert!(matches!(err, GaError::InvalidItem { .. }));
    }

    #[test]
    fn test_totals() {
        let p = problem();
        let totals = p.totals(&[true, false, false, true]);
        assert_eq!(totals.weight, 8);
        assert!((totals.price - 60.0).abs() < 1e-12);
        assert_eq!(p.totals(&[false; 4]), Totals::default());
    }

    #[test]
    fn test_fitness_feasible_is_total_price() {
        let p = problem();
        assert!((p.fitness_of(&[false, true, false, true]) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_fitness_at_capacity_is_feasible() {
        let p = problem();
        // 4 + 6 == 10
        assert!((p.fitness_of(&[false, true, true, false]) - 70.0).abs() < 1e-12);
    }

    #[test]
    fn test_fitness_over_capacity_is_infeasible() {
        let p = problem();
        assert_eq!(p.fitness_of(&[true, true, true, true]), INFEASIBLE);
        assert_eq!(p.fitness_of(&[true, false, true, false]), INFEASIBLE);
    }

    #[test]
    fn test_empty_selection_beats_infeasible() {
        let p = problem();
        let empty = p.fitness_of(&[false; 4]);
        assert_eq!(empty, 0.0);
        assert!(empty > p.fitness_of(&[true; 4]));
    }

    #[test]
    fn test_zero_capacity() {
        let p = KnapsackProblem::new(vec![Item::new("free", 0, 3.0), Item::new("w", 1, 9.0)], 0)
            .unwrap();
        assert!((p.fitness_of(&[true, false]) - 3.0).abs() < 1e-12);
        assert_eq!(p.fitness_of(&[true, true]), INFEASIBLE);
    }

    #[test]
    fn test_candidate_length_checked() {
        let p = problem();
        assert!(p.candidate(vec![true; 4]).is_ok());
        assert_eq!(
            p.candidate(vec![true; 3]).unwrap_err(),
            GaError::LengthMismatch { left: 3, right: 4 }
        );
    }

    #[test]
    fn test_selected_items() {
        let p = problem();
        let names: Vec<&str> = p
            .selected_items(&[true, false, true, false])
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
