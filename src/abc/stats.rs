//! Population statistics.

use super::candidate::Candidate;

/// Population standard deviation (divisor `n`) of the candidates' fitness.
///
/// Returns `0.0` for an empty population.
pub fn fitness_std(population: &[Candidate]) -> f64 {
    let n = population.len();
    if n == 0 {
        return 0.0;
    }
    let mean = population.iter().map(Candidate::fitness).sum::<f64>() / n as f64;
    let var = population
        .iter()
        .map(|c| (c.fitness() - mean).powi(2))
        .sum::<f64>()
        / n as f64;
    var.sqrt()
}

/// Mean distance of the candidates to their centroid, in RMS-per-dimension
/// units: `mean_i sqrt(mean_d (x_id − c_d)²)`.
///
/// Returns `0.0` for an empty population.
pub fn diversity(population: &[Candidate]) -> f64 {
    let n = population.len();
    if n == 0 {
        return 0.0;
    }
    let dim = population[0].position().len();
    let mut centroid = vec![0.0; dim];
    for c in population {
        for (acc, x) in centroid.iter_mut().zip(c.position()) {
            *acc += x;
        }
    }
    for acc in &mut centroid {
        *acc /= n as f64;
    }

    population
        .iter()
        .map(|c| {
            let ms = c
                .position()
                .iter()
                .zip(&centroid)
                .map(|(x, m)| (x - m).powi(2))
                .sum::<f64>()
                / dim as f64;
            ms.sqrt()
        })
        .sum::<f64>()
        / n as f64
}
