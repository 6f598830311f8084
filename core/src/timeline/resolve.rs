use super::capsule::Capsule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStatus {
    pub is_current: bool,
    pub is_complete: bool,
}

/// Completion and currentness of the phase at `index` out of `total`.
///
/// Every earlier phase is complete. The last phase is never complete; it only
/// stops being current once all of its capsules have finished.
pub fn resolve_phase_status(index: usize, total: usize, capsules: &[Capsule]) -> PhaseStatus {
    let is_last = index + 1 == total;
    let all_complete = !capsules.is_empty() && capsules.iter().all(|c| c.is_complete);
    PhaseStatus {
        is_current: is_last && !all_complete,
        is_complete: (!is_last || all_complete) && !is_last,
    }
}
