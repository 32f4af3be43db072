use crate::domain::model::{ActivitySnapshot, Confirmation};
use crate::utils::error::Result;

/// The registry surface the HTTP layer talks to.
///
/// Implementations must make `enroll` and `withdraw` atomic per activity:
/// the membership check and the mutation happen under one exclusive access.
pub trait ActivityRegistry: Send + Sync {
    fn list(&self) -> ActivitySnapshot;

    fn enroll(&self, activity: &str, participant: &str) -> Result<Confirmation>;

    fn withdraw(&self, activity: &str, participant: &str) -> Result<Confirmation>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
