//! Edit-distance similarity between normalized strings
//!
//! Lengths and edits are counted in Unicode scalar values, not bytes.

/// Levenshtein distance with unit costs.
///
/// Uses a single rolling row of `len(y) + 1` cells.
pub fn edit_distance(x: &str, y: &str) -> usize {
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();

    let mut costs: Vec<usize> = (0..=y.len()).collect();

    for (i, xc) in x.iter().enumerate() {
        // costs[j - 1] from the previous row, before it is overwritten
        let mut diagonal = costs[0];
        costs[0] = i + 1;

        for j in 1..=y.len() {
            let above = costs[j];
            costs[j] = if *xc == y[j - 1] {
                diagonal
            } else {
                1 + diagonal.min(above).min(costs[j - 1])
            };
            diagonal = above;
        }
    }

    costs[y.len()]
}

/// Normalized similarity in [0, 1]; 1.0 means identical.
///
/// `(L - edit_distance(longer, shorter)) / L` with `L` the longer length.
/// Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    let (longer, shorter, len) = if len_a > len_b {
        (a, b, len_a)
    } else {
        (b, a, len_b)
    };

    if len == 0 {
        return 1.0;
    }

    (len - edit_distance(longer, shorter)) as f64 / len as f64
}
