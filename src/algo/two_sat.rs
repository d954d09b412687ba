/*!
# 2-SAT

A 2-SAT instance is a set of implications `a => b` between literals. Every literal becomes a vertex
of the *implication graph*, every implication an edge (together with its contrapositive
`!b => !a`). The instance is satisfiable iff no variable shares an SCC with its negation.

A satisfying assignment sets `x` to *true* iff the SCC of `x` comes after the SCC of `!x` in
Kosaraju's numbering, which is a topological order of the condensation.
*/

use std::ops::Not;

use super::{connectivity::scc_labels_at, *};

/// A variable or its negation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Literal<V> {
    Positive(V),
    Negative(V),
}

impl<V> Literal<V> {
    /// Returns the underlying variable
    pub fn variable(&self) -> &V {
        match self {
            Literal::Positive(v) | Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Literal::Positive(_))
    }
}

impl<V> Not for Literal<V> {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(v),
            Literal::Negative(v) => Literal::Positive(v),
        }
    }
}

/// Implication graph of a 2-SAT instance over a fixed set of variables.
///
/// # Examples
/// ```
/// use wgraphs::algo::{Literal::*, TwoSat};
///
/// let mut instance = TwoSat::new(["x", "y", "z"]);
/// instance.add_implications([
///     (Positive("x"), Positive("y")),
///     (Positive("y"), Positive("z")),
///     (Positive("z"), Negative("x")),
/// ]).unwrap();
///
/// assert!(instance.is_satisfiable());
/// assert!(!instance.assignment().unwrap()[&"x"]);
/// ```
#[derive(Debug, Clone)]
pub struct TwoSat<V> {
    variables: Vec<V>,
    implications: Graph<Literal<V>>,
}

impl<V: Vertex> TwoSat<V> {
    /// Creates an instance without constraints. Duplicate variables are ignored.
    pub fn new(variables: impl IntoIterator<Item = V>) -> Self {
        let mut instance = Self {
            variables: Vec::new(),
            implications: Graph::directed(),
        };
        for v in variables {
            if instance.implications.add_vertex(Literal::Positive(v.clone())) {
                instance.implications.add_vertex(Literal::Negative(v.clone()));
                instance.variables.push(v);
            }
        }
        instance
    }

    /// Returns the variables in insertion order
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// Returns the implication graph on all `2n` literals
    pub fn implication_graph(&self) -> &Graph<Literal<V>> {
        &self.implications
    }

    /// Adds `a => b` (and thereby `!b => !a`).
    /// Fails with *not-found* if either variable is unknown.
    pub fn add_implication(&mut self, a: Literal<V>, b: Literal<V>) -> Result<()> {
        self.implications.add_edge(&a, &b, 1.0)?;
        self.implications.add_edge(&!b, &!a, 1.0)
    }

    /// Adds every implication of `implications`
    pub fn add_implications(
        &mut self,
        implications: impl IntoIterator<Item = (Literal<V>, Literal<V>)>,
    ) -> Result<()> {
        for (a, b) in implications {
            self.add_implication(a, b)?;
        }
        Ok(())
    }

    /// Adds the disjunction `a || b`, i.e. `!a => b`
    pub fn add_clause(&mut self, a: Literal<V>, b: Literal<V>) -> Result<()> {
        self.add_implication(!a, b)
    }

    /// Returns *true* iff no variable shares an SCC with its negation
    pub fn is_satisfiable(&self) -> bool {
        self.assignment().is_some()
    }

    /// Returns a satisfying assignment or `None` if the instance is unsatisfiable
    pub fn assignment(&self) -> Option<FxHashMap<V, bool>> {
        let (labels, _) = scc_labels_at(&self.implications);

        let mut assignment = FxHashMap::default();
        for v in &self.variables {
            let positive = labels[self.implications.index_of(&Literal::Positive(v.clone())).ok()?];
            let negative = labels[self.implications.index_of(&Literal::Negative(v.clone())).ok()?];
            if positive == negative {
                tracing::debug!(variable = ?v, "variable and negation share an SCC");
                return None;
            }
            assignment.insert(v.clone(), positive > negative);
        }
        Some(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::{Literal::*, *};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn satisfies<V: Vertex>(
        assignment: &FxHashMap<V, bool>,
        implications: &[(Literal<V>, Literal<V>)],
    ) -> bool {
        let value = |l: &Literal<V>| assignment[l.variable()] == l.is_positive();
        implications.iter().all(|(a, b)| !value(a) || value(b))
    }

    #[test]
    fn known_instances() {
        let satisfiable = vec![
            (Positive("x"), Positive("y")),
            (Positive("y"), Positive("z")),
            (Positive("z"), Negative("x")),
        ];
        let mut instance = TwoSat::new(["x", "y", "z"]);
        instance.add_implications(satisfiable.clone()).unwrap();
        let assignment = instance.assignment().unwrap();
        assert!(satisfies(&assignment, &satisfiable));

        let mut more = satisfiable.clone();
        more.push((Negative("y"), Negative("z")));
        let mut instance = TwoSat::new(["x", "y", "z"]);
        instance.add_implications(more.clone()).unwrap();
        assert!(satisfies(&instance.assignment().unwrap(), &more));

        let mut unsatisfiable = satisfiable;
        unsatisfiable.extend([(Negative("x"), Positive("y")), (Positive("y"), Positive("x"))]);
        let mut instance = TwoSat::new(["x", "y", "z"]);
        instance.add_implications(unsatisfiable).unwrap();
        assert!(!instance.is_satisfiable());
        assert!(instance.assignment().is_none());
    }

    #[test]
    fn forced_literals() {
        let mut instance = TwoSat::new(["a", "b"]);
        instance.add_clause(Positive("a"), Positive("a")).unwrap();
        instance.add_clause(Negative("a"), Negative("b")).unwrap();

        let assignment = instance.assignment().unwrap();
        assert!(assignment[&"a"]);
        assert!(!assignment[&"b"]);

        instance.add_implication(Positive("a"), Positive("b")).unwrap();
        assert!(!instance.is_satisfiable());
    }

    #[test]
    fn unknown_variables() {
        let mut instance = TwoSat::new(["x", "x", "y"]);
        assert_eq!(instance.variables(), &["x", "y"]);
        assert_eq!(instance.implication_graph().len(), 4);
        assert!(matches!(
            instance.add_implication(Positive("x"), Negative("w")),
            Err(GraphError::NotFound(_))
        ));
        assert!(TwoSat::<&str>::new([]).is_satisfiable());
    }

    #[test]
    fn literal_negation() {
        assert_eq!(!Positive(1), Negative(1));
        assert_eq!(!!Negative(1), Negative(1));
        assert_eq!(Negative(7).variable(), &7);
    }

    #[test]
    fn random_instances_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);
        for n in [1usize, 2, 4, 6] {
            for m in [1, n, 2 * n, 4 * n] {
                for _ in 0..20 {
                    let literal = |rng: &mut Pcg64Mcg| {
                        let v = rng.random_range(0..n);
                        if rng.random_bool(0.5) { Positive(v) } else { Negative(v) }
                    };
                    let implications = (0..m)
                        .map(|_| (literal(rng), literal(rng)))
                        .collect_vec();

                    let mut instance = TwoSat::new(0..n);
                    instance.add_implications(implications.clone()).unwrap();

                    let brute_force = (0..(1u32 << n)).any(|bits| {
                        let assignment = (0..n).map(|v| (v, bits >> v & 1 == 1)).collect();
                        satisfies(&assignment, &implications)
                    });

                    match instance.assignment() {
                        Some(assignment) => {
                            assert!(brute_force);
                            assert!(satisfies(&assignment, &implications));
                        }
                        None => assert!(!brute_force),
                    }
                }
            }
        }
    }
}
