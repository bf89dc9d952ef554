use crate::models::SimilarityMatrix;

/// Computes the dense pairwise cosine-similarity matrix for count vectors
///
/// Scores accumulate in f64 and are stored as f32 clamped to `[0.0, 1.0]`.
/// Only the upper triangle is computed; the lower half mirrors it. The
/// diagonal is always 1.0, and a zero vector scores 0.0 against every other
/// row.
pub fn pairwise_cosine(vectors: &[Vec<u32>]) -> SimilarityMatrix {
    let n = vectors.len();
    let norms: Vec<f64> = vectors
        .iter()
        .map(|v| {
            v.iter()
                .map(|&c| f64::from(c) * f64::from(c))
                .sum::<f64>()
                .sqrt()
        })
        .collect();

    let mut values = vec![0.0f32; n * n];
    for i in 0..n {
        values[i * n + i] = 1.0;
        for j in (i + 1)..n {
            let score = if norms[i] == 0.0 || norms[j] == 0.0 {
                0.0
            } else {
                let dot: f64 = vectors[i]
                    .iter()
                    .zip(&vectors[j])
                    .map(|(&a, &b)| f64::from(a) * f64::from(b))
                    .sum();
                (dot / (norms[i] * norms[j])).clamp(0.0, 1.0) as f32
            };
            values[i * n + j] = score;
            values[j * n + i] = score;
        }
    }

    SimilarityMatrix {
        dimension: n,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors_score_one() {
        let matrix = pairwise_cosine(&[vec![1, 2, 3], vec![1, 2, 3]]);
        assert_eq!(matrix.score(0, 1), Some(1.0));
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let matrix = pairwise_cosine(&[vec![1, 0], vec![0, 1]]);
        assert_eq!(matrix.score(0, 1), Some(0.0));
    }

    #[test]
    fn test_known_overlap() {
        // dot = 1, norms = sqrt(2) * sqrt(2)
        let matrix = pairwise_cosine(&[vec![1, 1, 0], vec![1, 0, 1]]);
        let score = matrix.score(0, 1).expect("score should exist");
        assert!((score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_diagonal_is_one_and_matrix_symmetric() {
        let matrix = pairwise_cosine(&[vec![3, 1], vec![1, 2], vec![0, 5]]);
        for i in 0..3 {
            assert_eq!(matrix.score(i, i), Some(1.0));
            for j in 0..3 {
                assert_eq!(matrix.score(i, j), matrix.score(j, i));
            }
        }
    }

    #[test]
    fn test_zero_vector_scores_zero_off_diagonal() {
        let matrix = pairwise_cosine(&[vec![0, 0], vec![1, 1]]);
        assert_eq!(matrix.score(0, 1), Some(0.0));
        assert_eq!(matrix.score(0, 0), Some(1.0));
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let matrix = pairwise_cosine(&[vec![7, 11, 13], vec![7, 11, 13], vec![1, 0, 0]]);
        for &value in &matrix.values {
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_empty_input() {
        let matrix = pairwise_cosine(&[]);
        assert_eq!(matrix.dimension, 0);
        assert!(matrix.values.is_empty());
        assert!(matrix.is_square());
    }
}
