// Reconstruction of all maximum-length chains from the solver memo.
//
// Starting from a word id, the walk appends the id to the current path and
// either emits the path (no best next steps) or recurses into each best
// next step. Emission order follows the solver's next-step order, which is
// stable for identical input. The path vector is pushed before and popped
// after each frame, so nothing a frame appends outlives that frame.

use wordchain_core::WordId;

use crate::solver::ChainSolver;

/// Visit every maximum-length chain starting at `start`.
///
/// The visitor receives each complete chain as a slice of word ids, first
/// to last. Every emitted chain has exactly `solver.chain_len(start)` ids;
/// the solver must already have computed `start` (call
/// [`ChainSolver::longest_chain`] first).
pub fn enumerate_chains<F>(solver: &ChainSolver<'_>, start: WordId, visit: &mut F)
where
    F: FnMut(&[WordId]),
{
    let mut path = Vec::new();
    walk(solver, start, &mut path, visit);
}

fn walk<F>(solver: &ChainSolver<'_>, id: WordId, path: &mut Vec<WordId>, visit: &mut F)
where
    F: FnMut(&[WordId]),
{
    path.push(id);
    let steps = solver.next_steps(id);
    if steps.is_empty() {
        visit(path);
    } else {
        for &succ in steps {
            walk(solver, succ, path, visit);
        }
    }
    path.pop();
}

/// Collect every maximum-length chain starting at `start` as word texts.
pub fn collect_chains(solver: &ChainSolver<'_>, start: WordId) -> Vec<Vec<String>> {
    let table = solver.table();
    let mut chains = Vec::new();
    enumerate_chains(solver, start, &mut |path| {
        chains.push(
            path.iter()
                .map(|&id| table.entry(id).text.clone())
                .collect(),
        );
    });
    chains
}
