//! k-local Ising solving with QAOA.

use std::f64::consts::PI;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, instrument};

use qising_core::{CompiledHamiltonian, HamiltonianCompiler, IsingProblem, PauliSum, QubitRemap};

use crate::backend::{QaoaAngles, QaoaBackend, QaoaRequest, VariationalSolver};
use crate::config::SolveOptions;
use crate::error::{QaoaError, QaoaResult};

/// A compiled problem together with the request a backend would receive.
#[derive(Debug, Clone, Serialize)]
pub struct QaoaPlan {
    /// Request handed to [`QaoaBackend::prepare`].
    pub request: QaoaRequest,
    /// Compiled Hamiltonian, kept for read-out.
    pub compiled: CompiledHamiltonian,
}

/// Result of [`solve_klocal_ising`].
#[derive(Debug, Clone)]
pub struct IsingSolution<P> {
    /// Spin per logical variable, each +1 or −1.
    pub spins: Vec<i8>,
    /// Energy of `spins`.
    pub energy: f64,
    /// Circuit at the optimal angles.
    pub program: P,
    /// Optimal angles.
    pub angles: QaoaAngles,
    /// Most frequent measured bitstring, ordered like the qubit list.
    pub bitstring: Vec<u8>,
}

/// Compile `problem` and assemble the backend request without running it.
#[instrument(skip_all, fields(steps = options.steps))]
pub fn plan(problem: &IsingProblem, options: &SolveOptions) -> QaoaResult<QaoaPlan> {
    options.validate()?;

    let remap = options.remap();
    let compiled = HamiltonianCompiler::new(&remap)
        .with_bias_indexing(options.bias_indexing)
        .compile(problem)?;

    let steps = options.resolve_steps(problem);
    let initial_angles = initial_angles(options, steps)?;

    let driver = match options.mixer.one_hot() {
        None => compiled.driver().to_vec(),
        Some(mixer) => mixer
            .generate(compiled.num_variables())?
            .iter()
            .map(|op| op.map_qubits(|q| remap.to_physical(q)))
            .collect::<Vec<PauliSum>>(),
    };
    if let Some(qubit) = driver
        .iter()
        .flat_map(|op| op.qubits())
        .find(|q| compiled.qubits().binary_search(q).is_err())
    {
        return Err(QaoaError::MixerOutsideFootprint { qubit });
    }

    debug!(
        qubits = ?compiled.qubits(),
        steps,
        cost_terms = compiled.cost().len(),
        driver_terms = driver.len(),
        "planned QAOA instance"
    );

    let request = QaoaRequest {
        num_qubits: compiled.num_qubits(),
        qubits: compiled.qubits().to_vec(),
        steps,
        cost: compiled.cost().to_vec(),
        driver,
        seed: options.seed,
        initial_angles,
        optimizer: options.resolve_optimizer(),
        evaluation: options.resolve_evaluation(),
    };

    Ok(QaoaPlan { request, compiled })
}

/// Minimize a k-local Ising problem on `backend`.
///
/// Compiles the problem, lets the backend optimize the QAOA angles, samples
/// the most frequent bitstring at the optimum and reads it out as spins.
pub fn solve_klocal_ising<B: QaoaBackend>(
    backend: &B,
    problem: &IsingProblem,
    options: &SolveOptions,
) -> QaoaResult<IsingSolution<<B::Solver as VariationalSolver>::Program>> {
    let QaoaPlan { request, compiled } = plan(problem, options)?;

    info!(
        backend = backend.name(),
        qubits = request.num_qubits,
        steps = request.steps,
        "Starting QAOA"
    );

    let mut solver = backend.prepare(request)?;
    let angles = solver.optimal_angles()?;
    debug!(betas = ?angles.betas, gammas = ?angles.gammas, "optimal angles");

    let bitstring = solver.most_frequent_bitstring(&angles)?;
    let spins = compiled.readout(&bitstring)?;
    let energy = problem.energy(&spins)?;
    let program = solver.parameterized_program(&angles)?;

    info!(?spins, energy, "QAOA finished");

    Ok(IsingSolution {
        spins,
        energy,
        program,
        angles,
        bitstring,
    })
}

/// Supplied angles if present (checked against `steps`), otherwise
/// β ~ U[0, π) and γ ~ U[0, 2π).
fn initial_angles(options: &SolveOptions, steps: usize) -> QaoaResult<QaoaAngles> {
    if let (Some(betas), Some(gammas)) = (&options.initial_betas, &options.initial_gammas) {
        check_length("betas", steps, betas)?;
        check_length("gammas", steps, gammas)?;
        return Ok(QaoaAngles::new(betas.clone(), gammas.clone()));
    }

    let mut rng = match options.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let betas = (0..steps).map(|_| rng.gen_range(0.0..PI)).collect();
    let gammas = (0..steps).map(|_| rng.gen_range(0.0..2.0 * PI)).collect();
    Ok(QaoaAngles::new(betas, gammas))
}

fn check_length(name: &'static str, expected: usize, angles: &[f64]) -> QaoaResult<()> {
    if angles.len() != expected {
        return Err(QaoaError::AngleLength {
            name,
            expected,
            got: angles.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MixerKind;
    use qising_core::{Biases, Couplings, PauliOp};

    fn four_spin() -> IsingProblem {
        IsingProblem::new(
            Biases::from(vec![1.0, 1.0, -1.0, 1.0]),
            Couplings::from_raw([(vec![0, 1], -2.0), (vec![2, 3], 3.0)]).unwrap(),
        )
    }

    #[test]
    fn test_seeded_angles_are_reproducible() {
        let opts = SolveOptions::new().with_steps(3).with_seed(42);
        let a = initial_angles(&opts, 3).unwrap();
        let b = initial_angles(&opts, 3).unwrap();
        assert_eq!(a, b);
        assert!(a.betas.iter().all(|b| (0.0..PI).contains(b)));
        assert!(a.gammas.iter().all(|g| (0.0..2.0 * PI).contains(g)));
    }

    #[test]
    fn test_supplied_angles_checked() {
        let opts = SolveOptions::new().with_initial_angles(vec![0.1, 0.2], vec![0.3, 0.4]);
        let err = initial_angles(&opts, 3).unwrap_err();
        assert!(matches!(
            err,
            QaoaError::AngleLength {
                name: "betas",
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_plan_default_steps() {
        let plan = plan(&four_spin(), &SolveOptions::new().with_seed(1)).unwrap();
        assert_eq!(plan.request.steps, 8);
        assert_eq!(plan.request.initial_angles.steps(), Some(8));
        assert_eq!(plan.request.qubits, vec![0, 1, 2, 4]);
        assert_eq!(plan.request.driver.len(), 4);
    }

    #[test]
    fn test_plan_one_hot_mixer_uses_physical_qubits() {
        let problem = IsingProblem::new(Biases::from(vec![0.5; 8]), Couplings::empty());
        let opts = SolveOptions::new().with_mixer(MixerKind::OneHot {
            include_final_move: false,
        });
        let plan = plan(&problem, &opts).unwrap();
        assert_eq!(plan.request.driver.len(), 12);

        let touched: Vec<usize> = plan
            .request
            .driver
            .iter()
            .flat_map(|s| s.qubits())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();
        // Variable 3 sits on physical qubit 4.
        assert_eq!(touched, vec![0, 1, 2, 4]);
        assert!(
            plan.request.driver[0].terms()[0]
                .ops()
                .iter()
                .all(|(_, op)| *op == PauliOp::X)
        );
    }

    #[test]
    fn test_plan_one_hot_rejects_odd_sizes() {
        let opts = SolveOptions::new().with_mixer(MixerKind::OneHot {
            include_final_move: true,
        });
        assert_eq!(plan(&four_spin(), &opts).unwrap().request.driver.len(), 12);

        let five = IsingProblem::new(Biases::from(vec![1.0; 5]), Couplings::empty());
        let err = plan(&five, &opts).unwrap_err();
        assert!(matches!(
            err,
            QaoaError::Ising(qising_core::IsingError::NotOneHot(5))
        ));
    }

    #[test]
    fn test_plan_one_hot_rejects_unreferenced_variables() {
        // Only variables 0 and 7 appear, so the mixer would touch idle qubits.
        let problem = IsingProblem::new(
            Biases::default(),
            Couplings::from_raw([(vec![0, 7], 1.0)]).unwrap(),
        );
        let opts = SolveOptions::new().with_mixer(MixerKind::OneHot {
            include_final_move: true,
        });
        let err = plan(&problem, &opts).unwrap_err();
        assert!(matches!(err, QaoaError::MixerOutsideFootprint { qubit: 1 }));
        assert_eq!(err.kind(), Some(qising_core::ErrorKind::Validation));

        // The X driver stays on the referenced qubits.
        let plain = plan(&problem, &SolveOptions::new()).unwrap();
        assert_eq!(plain.request.qubits, vec![0, 8]);
    }

    #[test]
    fn test_quiet_plan_has_no_display() {
        let plan = plan(&four_spin(), &SolveOptions::new().with_verbose(false)).unwrap();
        assert!(plan.request.evaluation.display.is_none());
    }
}
