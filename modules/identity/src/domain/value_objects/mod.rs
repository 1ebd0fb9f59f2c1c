mod actor_id;
mod branch_id;

pub use actor_id::ActorId;
pub use branch_id::BranchId;
