/// Header line printed before the selector listing.
pub const REPORT_HEADER: &str = "Event Selectors:";

/// The events emitted by the job and worker contracts, in report order.
pub const EVENT_NAMES: [&str; 8] = [
    "JobCreated",
    "ResultSubmitted",
    "JobFinalized",
    "JobCancelled",
    "WorkApproved",
    "WorkerRegistered",
    "WorkerVerified",
    "WorkerReputationUpdated",
];

/// Event selectors computed at compile time.
///
/// These are the values found in the first key of an emitted event, useful when filtering
/// events without deriving the selector at runtime.
pub mod selectors {
    use starknet::core::types::Felt;
    use starknet::macros::selector;

    // `sn_keccak` of the event name in PascalCase, e.g. `JOB_CREATED` is `JobCreated`.
    pub const JOB_CREATED: Felt = selector!("JobCreated");
    pub const RESULT_SUBMITTED: Felt = selector!("ResultSubmitted");
    pub const JOB_FINALIZED: Felt = selector!("JobFinalized");
    pub const JOB_CANCELLED: Felt = selector!("JobCancelled");

    pub const WORK_APPROVED: Felt = selector!("WorkApproved");

    pub const WORKER_REGISTERED: Felt = selector!("WorkerRegistered");
    pub const WORKER_VERIFIED: Felt = selector!("WorkerVerified");
    pub const WORKER_REPUTATION_UPDATED: Felt = selector!("WorkerReputationUpdated");

    /// All selectors, in the same order as [`super::EVENT_NAMES`].
    pub const ALL: [Felt; 8] = [
        JOB_CREATED,
        RESULT_SUBMITTED,
        JOB_FINALIZED,
        JOB_CANCELLED,
        WORK_APPROVED,
        WORKER_REGISTERED,
        WORKER_VERIFIED,
        WORKER_REPUTATION_UPDATED,
    ];
}
