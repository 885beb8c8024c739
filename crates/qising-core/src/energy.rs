//! Classical energy of a candidate assignment.

use crate::error::{IsingError, IsingResult};
use crate::model::{Biases, Couplings, IsingProblem};

/// Energy of `solution` under biases `h` and k-local couplings `J`.
///
/// `solution` holds one value per logical variable, either in Ising form
/// (±1) or binary form ({0, 1}); any numeric type convertible to `f64` is
/// accepted. Every factor of a k-local term enters the product.
///
/// ```rust
/// use qising_core::energy::energy_value;
/// use qising_core::model::{Biases, Couplings};
///
/// let h = Biases::from(vec![-2.4, 5.2]);
/// let j = Couplings::from_raw([(vec![0, 1], 2.3)]).unwrap();
/// let e = energy_value(&h, &j, &[1, -1]).unwrap();
/// assert!((e - (-9.9)).abs() < 1e-12);
/// ```
pub fn energy_value<S>(biases: &Biases, couplings: &Couplings, solution: &[S]) -> IsingResult<f64>
where
    S: Copy + Into<f64>,
{
    let value = |index: usize| -> IsingResult<f64> {
        solution
            .get(index)
            .map(|&s| s.into())
            .ok_or(IsingError::SolutionTooShort {
                index,
                len: solution.len(),
            })
    };

    let mut energy = 0.0;
    for term in couplings {
        let mut product = term.coefficient();
        for &index in term.indices() {
            product *= value(index)?;
        }
        energy += product;
    }
    for (index, &bias) in biases.as_slice().iter().enumerate() {
        energy += bias * value(index)?;
    }
    Ok(energy)
}

impl IsingProblem {
    /// Energy of `solution` under this problem. See [`energy_value`].
    pub fn energy<S>(&self, solution: &[S]) -> IsingResult<f64>
    where
        S: Copy + Into<f64>,
    {
        energy_value(&self.biases, &self.couplings, solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KLocalTerm;

    #[test]
    fn test_pairwise_energy() {
        let h = Biases::from(vec![-2.4, 5.2]);
        let j = Couplings::from_raw([(vec![0, 1], 2.3)]).unwrap();
        let e = energy_value(&h, &j, &[1i8, -1]).unwrap();
        assert!((e + 9.9).abs() < 1e-12);
    }

    #[test]
    fn test_three_local_term_uses_every_factor() {
        let j = Couplings::from_terms(vec![KLocalTerm::new([0, 1, 2], 2.0).unwrap()]);
        let e = energy_value(&Biases::empty(), &j, &[1i8, 1, -1]).unwrap();
        assert_eq!(e, -2.0);
    }

    #[test]
    fn test_binary_solution() {
        let h = Biases::from(vec![1.0, 2.0, 3.0]);
        let j = Couplings::from_raw([(vec![0, 2], 4.0)]).unwrap();
        let e = energy_value(&h, &j, &[1u8, 0, 1]).unwrap();
        assert_eq!(e, 8.0);
    }

    #[test]
    fn test_short_solution() {
        let j = Couplings::from_raw([(vec![0, 3], 1.0)]).unwrap();
        let err = energy_value(&Biases::empty(), &j, &[1i8, 1]).unwrap_err();
        assert_eq!(err, IsingError::SolutionTooShort { index: 3, len: 2 });
    }

    #[test]
    fn test_problem_energy() {
        let problem = IsingProblem::new(
            Biases::from(vec![1.0, 1.0, -1.0, 1.0]),
            Couplings::from_raw([(vec![0, 1], -2.0), (vec![2, 3], 3.0)]).unwrap(),
        );
        assert_eq!(problem.energy(&[-1i8, -1, 1, -1]).unwrap(), -9.0);
    }
}
